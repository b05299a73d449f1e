//! The diagnostic run.
//!
//! [`Checker`] folds the probe list into a [`Tally`], printing each report
//! as it arrives, then prints the summary and advice. The result is a
//! [`CheckRun`] that also serializes as the JSON report.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::DoctorConfig;
use crate::probes::{standard_probes, Probe, ProbeContext, ProbeReport, Readiness};
use crate::report::{advise, Advice, Reporter, Tally};
use crate::sys::Host;
use crate::ui::UserInterface;

/// One probe's result within a run.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeRecord {
    /// 1-based position in the run.
    pub number: usize,
    pub name: &'static str,
    pub title: &'static str,
    pub lines: ProbeReport,
}

/// Everything a run produced.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRun {
    pub probes: Vec<ProbeRecord>,
    pub tally: Tally,
    pub readiness: Readiness,
    pub advice: Advice,
}

impl CheckRun {
    /// 0 when nothing failed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.tally.failed == 0 {
            0
        } else {
            1
        }
    }
}

/// Runs probes against a host.
pub struct Checker<'a> {
    host: &'a dyn Host,
    config: &'a DoctorConfig,
    working_dir: PathBuf,
    probes: Vec<Box<dyn Probe>>,
}

impl<'a> Checker<'a> {
    /// A checker with the standard ten probes.
    pub fn new(host: &'a dyn Host, config: &'a DoctorConfig, working_dir: &Path) -> Self {
        Self::with_probes(host, config, working_dir, standard_probes())
    }

    /// A checker with a custom probe list.
    pub fn with_probes(
        host: &'a dyn Host,
        config: &'a DoctorConfig,
        working_dir: &Path,
        probes: Vec<Box<dyn Probe>>,
    ) -> Self {
        Self {
            host,
            config,
            working_dir: working_dir.to_path_buf(),
            probes,
        }
    }

    /// Run every probe in order, then print the summary and advice.
    pub fn run(&self, ui: &mut dyn UserInterface) -> CheckRun {
        let mut reporter = Reporter::new(ui);
        let total = self.probes.len();
        let mut tally = Tally::default();
        let mut records = Vec::with_capacity(total);

        for (index, probe) in self.probes.iter().enumerate() {
            let number = index + 1;
            tracing::debug!("Running probe {} ({}/{})", probe.name(), number, total);

            reporter.probe_header(number, total, probe.title());
            let ctx = ProbeContext {
                host: self.host,
                config: self.config,
                working_dir: &self.working_dir,
                tally,
            };
            let report = probe.run(&ctx);
            tally = reporter.report(tally, &report);

            records.push(ProbeRecord {
                number,
                name: probe.name(),
                title: probe.title(),
                lines: report,
            });
        }

        tracing::debug!("Probes finished: {:?}", tally);
        reporter.summary(tally);

        let advice = advise(self.host, self.config, tally);
        reporter.advice(&advice);

        CheckRun {
            probes: records,
            tally,
            readiness: Readiness::from_failed(tally.failed),
            advice,
        }
    }
}
