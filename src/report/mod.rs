//! Tallying, rendering and remediation advice.
//!
//! - [`tally`] - Pass/fail counters
//! - [`reporter`] - Prints probe reports, the summary and advice
//! - [`recommend`] - Decides which fixes to suggest

pub mod recommend;
pub mod reporter;
pub mod tally;

pub use recommend::{advise, recommendations, Advice, Recommendation};
pub use reporter::Reporter;
pub use tally::Tally;
