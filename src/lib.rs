//! gpu-doctor - Diagnose whether a machine is ready for GPU compute work.
//!
//! gpu-doctor runs a fixed sequence of probes against the host (PCI
//! hardware, driver, compiler, libraries, environment variables, a companion
//! runtime tool) and prints a pass/fail line for each, a summary, and either
//! remediation commands or a "ready" next step. It never changes the system.
//!
//! # Modules
//!
//! - [`checker`] - Runs the probes and folds their outcomes into a tally
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Tool names, paths and variables to check
//! - [`error`] - Error types and result aliases
//! - [`probes`] - The individual checks
//! - [`report`] - Tally, rendering and recommendations
//! - [`sys`] - Environment, PATH, process and filesystem access
//! - [`ui`] - Styled terminal output
//!
//! # Example
//!
//! ```
//! use gpu_doctor::probes::{Outcome, ProbeReport};
//! use gpu_doctor::report::Tally;
//!
//! let report = ProbeReport::single(Outcome::fail("nvcc not found on PATH"))
//!     .with_info("Install the CUDA toolkit");
//! let tally = Tally::default().absorb(&report);
//! assert_eq!(tally.failed, 1);
//! ```

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod probes;
pub mod report;
pub mod sys;
pub mod ui;

pub use error::{DoctorError, Result};
