//! Scripted [`Host`] for unit tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{CommandOutput, Host};

/// A host whose environment, PATH, and command output are fixed up front.
///
/// Tools registered without scripted output resolve on PATH but cannot be
/// spawned, which mirrors a broken install.
#[derive(Debug, Default, Clone)]
pub struct FakeHost {
    env: HashMap<String, String>,
    tools: HashMap<String, PathBuf>,
    outputs: HashMap<String, CommandOutput>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env(mut self, name: &str, value: &str) -> Self {
        self.env.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_tool(mut self, name: &str) -> Self {
        self.tools
            .insert(name.to_string(), PathBuf::from("/fake/bin").join(name));
        self
    }

    /// Register a tool and the stdout it prints for `args`.
    pub fn with_output(self, name: &str, args: &[&str], stdout: &str) -> Self {
        self.with_command_output(name, args, CommandOutput::ok(stdout))
    }

    pub fn with_command_output(mut self, name: &str, args: &[&str], output: CommandOutput) -> Self {
        self = self.with_tool(name);
        self.outputs.insert(key(name, args), output);
        self
    }
}

fn key(name: &str, args: &[&str]) -> String {
    format!("{} {}", name, args.join(" "))
}

impl Host for FakeHost {
    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    fn find_executable(&self, tool: &str) -> Option<PathBuf> {
        self.tools.get(tool).cloned()
    }

    fn run(&self, program: &Path, args: &[&str]) -> Option<CommandOutput> {
        let name = program.file_name()?.to_str()?;
        self.outputs.get(&key(name, args)).cloned()
    }
}
