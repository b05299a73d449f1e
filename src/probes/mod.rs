//! The probe set.
//!
//! Each probe inspects one aspect of the host and returns a [`ProbeReport`].
//! Probes never fail with an error: a missing tool, file, or variable is an
//! ordinary outcome. They run in the fixed order given by
//! [`standard_probes`], and only [`readiness::ReadinessProbe`] looks at the
//! tally accumulated by the probes before it.
//!
//! # Modules
//!
//! - [`outcome`] - Outcome, note, and report types
//! - [`hardware`] - PCI device detection
//! - [`driver`] - Driver query tool
//! - [`compiler`] - Toolkit compiler
//! - [`libraries`] - Support library, runtime library, toolkit library dir
//! - [`environment`] - Environment variables
//! - [`companion`] - Companion runtime tool and its test asset
//! - [`readiness`] - Aggregate verdict over the tally

pub mod companion;
pub mod compiler;
pub mod driver;
pub mod environment;
pub mod hardware;
pub mod libraries;
pub mod outcome;
pub mod readiness;

use std::path::Path;

use crate::config::DoctorConfig;
use crate::report::Tally;
use crate::sys::Host;

pub use outcome::{CountsAs, Note, NoteStyle, Outcome, OutcomeKind, ProbeReport, ReportLine};
pub use readiness::Readiness;

/// Everything a probe may consult.
pub struct ProbeContext<'a> {
    /// Environment variables, PATH, and command execution.
    pub host: &'a dyn Host,
    /// Tools, paths, and variable names to check.
    pub config: &'a DoctorConfig,
    /// Directory relative paths are resolved against.
    pub working_dir: &'a Path,
    /// Tally of every probe that ran before this one.
    pub tally: Tally,
}

/// A single diagnostic check.
pub trait Probe {
    /// Stable identifier used in JSON output.
    fn name(&self) -> &'static str;

    /// Human-readable title shown above the probe's lines.
    fn title(&self) -> &'static str;

    /// Run the check.
    fn run(&self, ctx: &ProbeContext<'_>) -> ProbeReport;
}

/// The ten probes, in the order they must run.
pub fn standard_probes() -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(hardware::HardwareProbe),
        Box::new(driver::DriverProbe),
        Box::new(compiler::CompilerProbe),
        Box::new(libraries::SupportLibraryProbe),
        Box::new(libraries::RuntimeLibraryProbe),
        Box::new(libraries::ToolkitLibraryProbe),
        Box::new(environment::EnvironmentProbe),
        Box::new(companion::CompanionProbe),
        Box::new(companion::TestAssetProbe),
        Box::new(readiness::ReadinessProbe),
    ]
}

/// Format a byte count the way `ls -lh` would.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["K", "M", "G", "T"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Treat empty values the same as unset ones.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// First non-blank line of command output, trimmed.
pub(crate) fn first_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}
