//! Config command implementation.
//!
//! The `gpu-doctor config` command shows the configuration a check would use.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{load_config, ConfigSource, DoctorConfig};
use crate::error::{DoctorError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(working_dir: &Path, config_path: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (config, source) = if self.args.defaults {
            (DoctorConfig::default(), ConfigSource::Defaults)
        } else {
            load_config(self.config_path.as_deref(), &self.working_dir)?
        };

        let rendered = if self.args.json {
            serde_json::to_string_pretty(&config)?
        } else {
            match &source {
                ConfigSource::File(path) => ui.message(&format!("# {}", path.display())),
                ConfigSource::Defaults => ui.message("# built-in defaults"),
            }
            serde_yaml::to_string(&config).map_err(|e| DoctorError::Other(e.into()))?
        };
        ui.document(rendered.trim_end());

        Ok(CommandResult::success())
    }
}
