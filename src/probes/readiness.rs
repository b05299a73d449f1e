//! Aggregate readiness verdict.

use serde::Serialize;

use crate::probes::{CountsAs, Outcome, Probe, ProbeContext, ProbeReport};

/// How close the host is to running GPU workloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    Ready,
    MostlyReady,
    NotReady,
}

impl Readiness {
    /// Verdict for a failure count: none, one or two, three or more.
    pub fn from_failed(failed: usize) -> Self {
        match failed {
            0 => Readiness::Ready,
            1..=2 => Readiness::MostlyReady,
            _ => Readiness::NotReady,
        }
    }

    /// The verdict as a display outcome. It never changes the tally.
    pub fn outcome(self) -> Outcome {
        let outcome = match self {
            Readiness::Ready => Outcome::pass("Environment is ready for GPU workloads"),
            Readiness::MostlyReady => {
                Outcome::warn("Environment is mostly ready; a few issues need attention")
            }
            Readiness::NotReady => {
                Outcome::fail("Environment is not ready; several components are missing")
            }
        };
        outcome.counting_as(CountsAs::Nothing)
    }
}

/// Probe 10: summarize the failures recorded so far.
pub struct ReadinessProbe;

impl Probe for ReadinessProbe {
    fn name(&self) -> &'static str {
        "readiness"
    }

    fn title(&self) -> &'static str {
        "Overall readiness"
    }

    fn run(&self, ctx: &ProbeContext<'_>) -> ProbeReport {
        ProbeReport::single(Readiness::from_failed(ctx.tally.failed).outcome())
    }
}
