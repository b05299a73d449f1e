//! Rendering probe reports to the UI.

use crate::probes::{NoteStyle, OutcomeKind, ProbeReport, ReportLine};
use crate::report::{Advice, Tally};
use crate::ui::UserInterface;

/// Prints probe lines, the summary and the advice block.
///
/// Rendering is skipped entirely when the UI is silent; tallying is not.
pub struct Reporter<'a> {
    ui: &'a mut dyn UserInterface,
}

impl<'a> Reporter<'a> {
    pub fn new(ui: &'a mut dyn UserInterface) -> Self {
        Self { ui }
    }

    fn rendering(&self) -> bool {
        self.ui.output_mode().shows_status()
    }

    pub fn probe_header(&mut self, number: usize, total: usize, title: &str) {
        if self.rendering() {
            self.ui.show_probe(number, total, title);
        }
    }

    /// Print every line of `report` in order and return the updated tally.
    pub fn report(&mut self, tally: Tally, report: &ProbeReport) -> Tally {
        let mut tally = tally;

        for line in report.lines() {
            match line {
                ReportLine::Outcome(outcome) => {
                    if self.rendering() {
                        match outcome.kind {
                            OutcomeKind::Pass => self.ui.success(&outcome.message),
                            OutcomeKind::Warn => self.ui.warning(&outcome.message),
                            OutcomeKind::Fail => self.ui.error(&outcome.message),
                        }
                    }
                    tally = tally.record(outcome);
                }
                ReportLine::Note(note) if self.rendering() => match note.style {
                    NoteStyle::Info => self.ui.info(&note.text),
                    NoteStyle::Warn => self.ui.warning(&note.text),
                },
                ReportLine::Note(_) => {}
            }
        }

        tally
    }

    pub fn summary(&mut self, tally: Tally) {
        if !self.rendering() {
            return;
        }
        self.ui.show_header("Summary");
        self.ui.message(&format!("Passed: {}", tally.passed));
        self.ui.message(&format!("Failed: {}", tally.failed));
    }

    pub fn advice(&mut self, advice: &Advice) {
        if !self.rendering() {
            return;
        }

        match advice {
            Advice::Ready { command } => {
                self.ui.show_header("Next steps");
                self.ui.success("All checks passed. Run the smoke test:");
                self.ui.command(command);
            }
            Advice::Actions { recommendations } if recommendations.is_empty() => {
                self.ui.show_header("Recommended actions");
                self.ui
                    .message("No automatic fix available; review the failures above.");
            }
            Advice::Actions { recommendations } => {
                self.ui.show_header("Recommended actions");
                for (i, rec) in recommendations.iter().enumerate() {
                    self.ui.message(&format!("{}. {}", i + 1, rec.title));
                    for cmd in &rec.commands {
                        self.ui.command(cmd);
                    }
                }
            }
        }
    }
}
