//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Captures ignore the output mode so
//! tests see everything that was emitted; use [`MockUI::transcript`] to
//! check ordering.

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    infos: Vec<String>,
    commands: Vec<String>,
    headers: Vec<String>,
    probes: Vec<(usize, usize, String)>,
    documents: Vec<String>,
    transcript: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured informational notes.
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Get all suggested commands.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all probe title lines as (number, total, title).
    pub fn probes(&self) -> &[(usize, usize, String)] {
        &self.probes
    }

    /// Get all documents written.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Every captured line, tagged with its kind, in emission order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific command was suggested.
    pub fn has_command(&self, cmd: &str) -> bool {
        self.commands.iter().any(|c| c.contains(cmd))
    }

    fn record(&mut self, kind: &str, msg: &str) {
        self.transcript.push(format!("{}: {}", kind, msg));
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.record("message", msg);
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.record("success", msg);
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.record("warning", msg);
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.record("error", msg);
        self.errors.push(msg.to_string());
    }

    fn info(&mut self, msg: &str) {
        self.record("info", msg);
        self.infos.push(msg.to_string());
    }

    fn command(&mut self, cmd: &str) {
        self.record("command", cmd);
        self.commands.push(cmd.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.record("header", title);
        self.headers.push(title.to_string());
    }

    fn show_probe(&mut self, number: usize, total: usize, title: &str) {
        self.record("probe", title);
        self.probes.push((number, total, title.to_string()));
    }

    fn document(&mut self, text: &str) {
        self.documents.push(text.to_string());
    }
}
