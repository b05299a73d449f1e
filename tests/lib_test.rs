//! Library integration tests.

use gpu_doctor::DoctorError;

#[test]
fn error_types_are_public() {
    let err = DoctorError::ConfigNotFound {
        path: "/etc/gpu-doctor.yml".into(),
    };
    assert!(err.to_string().contains("/etc/gpu-doctor.yml"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> gpu_doctor::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use gpu_doctor::cli::{Cli, Commands};

    let cli = Cli::parse_from(["gpu-doctor", "check", "--json"]);

    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn checker_runs_with_custom_probes() {
    use gpu_doctor::checker::Checker;
    use gpu_doctor::config::DoctorConfig;
    use gpu_doctor::probes::{Outcome, Probe, ProbeContext, ProbeReport};
    use gpu_doctor::sys::SystemHost;
    use gpu_doctor::ui::{MockUI, OutputMode};
    use std::path::Path;

    struct AlwaysWarn;

    impl Probe for AlwaysWarn {
        fn name(&self) -> &'static str {
            "always_warn"
        }
        fn title(&self) -> &'static str {
            "Always warns"
        }
        fn run(&self, _ctx: &ProbeContext<'_>) -> ProbeReport {
            ProbeReport::single(Outcome::warn("heads up"))
        }
    }

    let config = DoctorConfig::default();
    let checker = Checker::with_probes(
        &SystemHost,
        &config,
        Path::new("."),
        vec![Box::new(AlwaysWarn)],
    );
    let mut ui = MockUI::with_mode(OutputMode::Normal);
    let run = checker.run(&mut ui);

    assert_eq!(run.tally.passed, 0);
    assert_eq!(run.tally.failed, 0);
    assert_eq!(run.exit_code(), 0);
    assert!(ui.has_warning("heads up"));
}
