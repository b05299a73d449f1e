//! Pass/fail counters.

use serde::Serialize;

use crate::probes::{CountsAs, Outcome, ProbeReport};

/// Running pass/fail counts, threaded through the probe run by value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    /// Apply one outcome's declared counter effect.
    pub fn record(self, outcome: &Outcome) -> Self {
        match outcome.counts_as {
            CountsAs::Passed => Self {
                passed: self.passed + 1,
                ..self
            },
            CountsAs::Failed => Self {
                failed: self.failed + 1,
                ..self
            },
            CountsAs::Nothing => self,
        }
    }

    /// Apply every outcome in a report. Notes are ignored.
    pub fn absorb(self, report: &ProbeReport) -> Self {
        report.outcomes().fold(self, Tally::record)
    }
}
