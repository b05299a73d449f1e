//! Check command implementation.
//!
//! The `gpu-doctor check` command runs every probe and reports the result,
//! either as styled lines or as a JSON document.

use std::path::{Path, PathBuf};

use crate::checker::Checker;
use crate::cli::args::CheckArgs;
use crate::config::{load_config, ConfigSource};
use crate::error::Result;
use crate::sys::{Host, SystemHost};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
    host: Box<dyn Host>,
}

impl CheckCommand {
    /// Create a new check command against the real system.
    pub fn new(working_dir: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
            host: Box::new(SystemHost),
        }
    }

    /// Run against a different host.
    pub fn with_host(mut self, host: Box<dyn Host>) -> Self {
        self.host = host;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (config, source) = load_config(self.config_path.as_deref(), &self.working_dir)?;

        if self.args.json {
            ui.set_output_mode(OutputMode::Silent);
        } else {
            ui.show_header("GPU environment check");
            if let ConfigSource::File(path) = &source {
                ui.info(&format!("Using config {}", path.display()));
            }
        }

        let checker = Checker::new(self.host.as_ref(), &config, &self.working_dir);
        let run = checker.run(ui);

        if self.args.json {
            let json = serde_json::to_string_pretty(&run)?;
            ui.document(&json);
        }

        let exit_code = run.exit_code();
        if exit_code == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(exit_code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DoctorError;
    use crate::sys::fake::FakeHost;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    /// A config whose every path lives under `root` and does not exist.
    fn write_empty_layout(root: &Path) -> PathBuf {
        let path = root.join("doctor.yml");
        let yaml = format!(
            "libraries:\n  support_library: {root}/missing/libdevice.10.bc\n  search_root: {root}/missing\n  runtime_dir: {root}/missing/lib\n  toolkit_dir: {root}/missing/lib64\n",
            root = root.display()
        );
        fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn check_reports_failures_with_exit_one() {
        let temp = TempDir::new().unwrap();
        let config = write_empty_layout(temp.path());
        let cmd = CheckCommand::new(temp.path(), Some(&config), CheckArgs::default())
            .with_host(Box::new(FakeHost::new()));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.headers().contains(&"Recommended actions".to_string()));
        assert!(ui.has_message("Failed: 9"));
        assert!(ui.infos().iter().any(|i| i.contains("doctor.yml")));
    }

    #[test]
    fn json_mode_writes_only_the_document() {
        let temp = TempDir::new().unwrap();
        let config = write_empty_layout(temp.path());
        let cmd = CheckCommand::new(temp.path(), Some(&config), CheckArgs { json: true })
            .with_host(Box::new(FakeHost::new()));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.transcript().is_empty());
        assert_eq!(ui.documents().len(), 1);

        let json: serde_json::Value = serde_json::from_str(&ui.documents()[0]).unwrap();
        assert_eq!(json["tally"]["failed"], 9);
        assert_eq!(json["probes"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(
            temp.path(),
            Some(&temp.path().join("nope.yml")),
            CheckArgs::default(),
        );
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, DoctorError::ConfigNotFound { .. }));
        assert!(ui.transcript().is_empty());
    }

    #[test]
    fn invalid_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gpu-doctor.yml");
        fs::write(&path, "hardware: [not, a, mapping]\n").unwrap();
        let cmd = CheckCommand::new(temp.path(), None, CheckArgs::default());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, DoctorError::ConfigParseError { .. }));
    }
}
