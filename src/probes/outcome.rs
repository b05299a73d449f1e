//! Probe outcome types.
//!
//! An [`Outcome`] pairs what a check *looks like* (pass, fail, warn) with
//! what it *counts as* in the tally. Most outcomes count as themselves; the
//! exceptions are declared at the point the outcome is built, e.g. a
//! vendor-only hardware match warns but counts as passed, while a missing
//! test asset warns and counts as nothing.

use serde::Serialize;

/// How an outcome is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Pass,
    Fail,
    Warn,
}

/// Which counter an outcome increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CountsAs {
    Passed,
    Failed,
    Nothing,
}

/// A single counted check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub counts_as: CountsAs,
    pub message: String,
}

impl Outcome {
    /// A pass that counts as passed.
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Pass,
            counts_as: CountsAs::Passed,
            message: message.into(),
        }
    }

    /// A failure that counts as failed.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Fail,
            counts_as: CountsAs::Failed,
            message: message.into(),
        }
    }

    /// A warning that leaves the tally untouched.
    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Warn,
            counts_as: CountsAs::Nothing,
            message: message.into(),
        }
    }

    /// Override the counter this outcome increments.
    pub fn counting_as(mut self, counts_as: CountsAs) -> Self {
        self.counts_as = counts_as;
        self
    }
}

/// Styling for uncounted note lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteStyle {
    Info,
    Warn,
}

/// An uncounted diagnostic line printed alongside outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub style: NoteStyle,
    pub text: String,
}

/// One line of a probe report, in print order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReportLine {
    Outcome(Outcome),
    Note(Note),
}

/// Everything a probe produced, in the order it should be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProbeReport {
    lines: Vec<ReportLine>,
}

impl ProbeReport {
    /// A report holding a single outcome.
    pub fn single(outcome: Outcome) -> Self {
        Self::default().with_outcome(outcome)
    }

    /// Append an outcome.
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.lines.push(ReportLine::Outcome(outcome));
        self
    }

    /// Append an info note.
    pub fn with_info(mut self, text: impl Into<String>) -> Self {
        self.lines.push(ReportLine::Note(Note {
            style: NoteStyle::Info,
            text: text.into(),
        }));
        self
    }

    /// Append a warning note.
    pub fn with_warning(mut self, text: impl Into<String>) -> Self {
        self.lines.push(ReportLine::Note(Note {
            style: NoteStyle::Warn,
            text: text.into(),
        }));
        self
    }

    /// All lines in print order.
    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// Only the counted outcomes.
    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome> {
        self.lines.iter().filter_map(|line| match line {
            ReportLine::Outcome(outcome) => Some(outcome),
            ReportLine::Note(_) => None,
        })
    }

    /// Only the notes.
    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.lines.iter().filter_map(|line| match line {
            ReportLine::Note(note) => Some(note),
            ReportLine::Outcome(_) => None,
        })
    }
}
