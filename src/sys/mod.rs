//! Operating system boundary.
//!
//! Probes read the outside world through the [`Host`] trait: environment
//! variables, executables on PATH, and command output. [`SystemHost`] is the
//! real implementation; tests substitute scripted hosts.
//!
//! Filesystem checks at configured paths go straight to the filesystem via
//! the helpers in [`glob`] and [`search`].

#[cfg(test)]
pub mod fake;
pub mod glob;
pub mod path;
pub mod platform;
pub mod search;

use std::path::{Path, PathBuf};
use std::process::Command;

pub use path::{is_executable, parse_system_path, resolve_tool_path};
pub use platform::is_elevated;

/// Captured output of an external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the command exited with status 0.
    pub success: bool,
    /// Standard output (lossy UTF-8).
    pub stdout: String,
    /// Standard error (lossy UTF-8).
    pub stderr: String,
}

impl CommandOutput {
    /// A successful run that printed `stdout`.
    pub fn ok(stdout: &str) -> Self {
        Self {
            success: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    /// Stdout and stderr joined, for tools that print banners to either.
    pub fn combined(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else if self.stdout.is_empty() {
            self.stderr.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Read-only view of the environment a probe runs against.
///
/// Every call queries the system afresh; nothing is cached between probes.
pub trait Host {
    /// Look up an environment variable. Unset and non-UTF-8 values are `None`.
    fn env_var(&self, name: &str) -> Option<String>;

    /// Resolve an executable on PATH (or an explicit path to one).
    fn find_executable(&self, tool: &str) -> Option<PathBuf>;

    /// Run a program and capture its output.
    ///
    /// Returns `None` when the program cannot be spawned at all; a non-zero
    /// exit is reported through [`CommandOutput::success`].
    fn run(&self, program: &Path, args: &[&str]) -> Option<CommandOutput>;
}

/// [`Host`] backed by the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl Host for SystemHost {
    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn find_executable(&self, tool: &str) -> Option<PathBuf> {
        let resolved = resolve_tool_path(tool, &parse_system_path());
        tracing::debug!("Resolved {} -> {:?}", tool, resolved);
        resolved
    }

    fn run(&self, program: &Path, args: &[&str]) -> Option<CommandOutput> {
        tracing::debug!("Running {} {}", program.display(), args.join(" "));
        match Command::new(program).args(args).output() {
            Ok(output) => Some(CommandOutput {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            }),
            Err(e) => {
                tracing::debug!("Failed to spawn {}: {}", program.display(), e);
                None
            }
        }
    }
}
