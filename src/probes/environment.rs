//! Environment variable checks.
//!
//! Three sub-checks, each producing its own outcome:
//! the toolkit home variable must be set; the tool path variable must be
//! set and name an existing file; the library search path should mention
//! at least one toolkit library directory. The last one can only warn.
//!
//! A relative tool path is resolved against the working directory, the
//! same way the test asset is.

use std::path::Path;

use crate::config::EnvironmentConfig;
use crate::probes::{non_empty, Outcome, Probe, ProbeContext, ProbeReport};
use crate::sys::Host;

/// Probe 7: are the toolkit's environment variables configured?
pub struct EnvironmentProbe;

impl Probe for EnvironmentProbe {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn title(&self) -> &'static str {
        "Environment variables"
    }

    fn run(&self, ctx: &ProbeContext<'_>) -> ProbeReport {
        let env = &ctx.config.environment;
        ProbeReport::default()
            .with_outcome(check_home(ctx.host, env))
            .with_outcome(check_tool_path(ctx.host, env, ctx.working_dir))
            .with_outcome(check_library_path(ctx.host, env))
    }
}

fn check_home(host: &dyn Host, env: &EnvironmentConfig) -> Outcome {
    match non_empty(host.env_var(&env.home_var)) {
        Some(value) => Outcome::pass(format!("{}={}", env.home_var, value)),
        None => Outcome::fail(format!("{} is not set", env.home_var)),
    }
}

fn check_tool_path(host: &dyn Host, env: &EnvironmentConfig, working_dir: &Path) -> Outcome {
    match non_empty(host.env_var(&env.tool_path_var)) {
        None => Outcome::fail(format!("{} is not set", env.tool_path_var)),
        Some(value) if working_dir.join(&value).is_file() => {
            Outcome::pass(format!("{}={}", env.tool_path_var, value))
        }
        Some(value) => Outcome::fail(format!(
            "{} is set to {}, but that file does not exist",
            env.tool_path_var, value
        )),
    }
}

fn check_library_path(host: &dyn Host, env: &EnvironmentConfig) -> Outcome {
    let value = host.env_var(&env.library_path_var).unwrap_or_default();

    if env
        .library_path_tokens
        .iter()
        .any(|token| value.contains(token.as_str()))
    {
        Outcome::pass(format!(
            "{} includes toolkit library directories",
            env.library_path_var
        ))
    } else {
        Outcome::warn(format!(
            "{} may be missing toolkit library directories ({})",
            env.library_path_var,
            env.library_path_tokens.join(", ")
        ))
    }
}
