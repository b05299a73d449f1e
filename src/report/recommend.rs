//! Remediation advice.
//!
//! Recommendations are derived from a fresh look at the host, not from the
//! probe outcomes: a tool that is on PATH but broken fails its probe without
//! triggering an install recommendation. Commands are printed, never run.

use serde::Serialize;

use crate::config::DoctorConfig;
use crate::probes::non_empty;
use crate::report::Tally;
use crate::sys::Host;

/// One numbered remediation block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub commands: Vec<String>,
}

/// What to tell the user after the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Advice {
    /// Nothing failed; run the companion against the test asset.
    Ready { command: String },
    /// Something failed; these fixes apply. May be empty.
    Actions { recommendations: Vec<Recommendation> },
}

/// Decide which advice block to show for a finished run.
pub fn advise(host: &dyn Host, config: &DoctorConfig, tally: Tally) -> Advice {
    if tally.failed == 0 {
        Advice::Ready {
            command: config.companion.invocation(),
        }
    } else {
        Advice::Actions {
            recommendations: recommendations(host, config),
        }
    }
}

/// Evaluate each remediation condition independently, in display order.
pub fn recommendations(host: &dyn Host, config: &DoctorConfig) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if host.find_executable(&config.driver.command).is_none() {
        recs.push(Recommendation {
            title: "Install the GPU driver".to_string(),
            commands: config.driver.install_commands.clone(),
        });
    }

    if host.find_executable(&config.compiler.command).is_none() {
        recs.push(Recommendation {
            title: "Install the toolkit compiler".to_string(),
            commands: config.compiler.install_commands.clone(),
        });
    }

    if let Some(rec) = environment_recommendation(host, config) {
        recs.push(rec);
    }

    if host.find_executable(&config.companion.command).is_none() {
        recs.push(Recommendation {
            title: format!("Install {}", config.companion.command),
            commands: config.companion.install_commands.clone(),
        });
    }

    recs
}

fn environment_recommendation(host: &dyn Host, config: &DoctorConfig) -> Option<Recommendation> {
    let env = &config.environment;
    let profile = &env.shell_profile;

    let mut commands = Vec::new();
    if non_empty(host.env_var(&env.home_var)).is_none() {
        commands.push(export_line(
            &env.home_var,
            &env.home_default.display().to_string(),
            profile,
        ));
    }
    if non_empty(host.env_var(&env.tool_path_var)).is_none() {
        commands.push(export_line(
            &env.tool_path_var,
            &config.libraries.support_library.display().to_string(),
            profile,
        ));
    }

    if commands.is_empty() {
        return None;
    }

    commands.push(format!("source {}", profile));
    Some(Recommendation {
        title: "Configure environment variables".to_string(),
        commands,
    })
}

fn export_line(var: &str, value: &str, profile: &str) -> String {
    format!("echo 'export {}={}' >> {}", var, value, profile)
}
