//! Output verbosity.

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Probe headers, outcomes, notes, summary and advice.
    #[default]
    Normal,
    /// Outcomes, summary and advice only.
    Quiet,
    /// No report lines at all. Stdout is reserved for a machine-readable
    /// document; errors go to stderr.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows status lines (outcomes, summary).
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Check if this mode shows headers and informational notes.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
