//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing styled lines to the terminal
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use gpu_doctor::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_probe(2, 10, "GPU driver");
//! ui.success("Driver version 535.54.03");
//! assert!(ui.has_success("535.54.03"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, DoctorTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success line.
    fn success(&mut self, msg: &str);

    /// Display a warning line.
    fn warning(&mut self, msg: &str);

    /// Display an error line.
    fn error(&mut self, msg: &str);

    /// Display an informational note.
    fn info(&mut self, msg: &str);

    /// Display a shell command the user may run.
    fn command(&mut self, cmd: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Show the title line of a probe.
    fn show_probe(&mut self, number: usize, total: usize, title: &str);

    /// Write a machine-readable document to stdout, regardless of mode.
    fn document(&mut self, text: &str);
}
