//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, DoctorTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: DoctorTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            DoctorTheme::new()
        } else {
            DoctorTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "  {}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "  {}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "  {}", self.theme.format_error(msg)).ok();
        } else {
            // Keep stdout clean for the document.
            writeln!(Term::stderr(), "{}", self.theme.format_error(msg)).ok();
        }
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            writeln!(self.term, "  {}", self.theme.format_info(msg)).ok();
        }
    }

    fn command(&mut self, cmd: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "     {}", self.theme.format_command(cmd)).ok();
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}", self.theme.format_header(title)).ok();
        }
    }

    fn show_probe(&mut self, number: usize, total: usize, title: &str) {
        if self.mode.shows_detail() {
            writeln!(
                self.term,
                "\n{}",
                self.theme.format_probe(number, total, title)
            )
            .ok();
        }
    }

    fn document(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn terminal_ui_set_output_mode() {
        let mut ui = TerminalUI::new(OutputMode::Normal);
        ui.set_output_mode(OutputMode::Silent);
        assert_eq!(ui.output_mode(), OutputMode::Silent);
    }
}
