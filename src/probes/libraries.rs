//! Library location probes.
//!
//! Three independent filesystem checks: the binary-support library at its
//! well-known path, the versioned runtime library, and the toolkit library
//! directory. Only the first falls back to a search, and what the search
//! finds is reported as a note; the failure stands.

use std::fs;
use std::path::Path;

use crate::probes::{format_size, Outcome, Probe, ProbeContext, ProbeReport};
use crate::sys::{glob, search};

/// Probe 4: does the binary-support library exist where the toolkit expects it?
pub struct SupportLibraryProbe;

impl Probe for SupportLibraryProbe {
    fn name(&self) -> &'static str {
        "support_library"
    }

    fn title(&self) -> &'static str {
        "Binary-support library"
    }

    fn run(&self, ctx: &ProbeContext<'_>) -> ProbeReport {
        let libraries = &ctx.config.libraries;
        let expected = &libraries.support_library;

        if let Ok(meta) = fs::metadata(expected) {
            if meta.is_file() {
                return ProbeReport::single(Outcome::pass(format!(
                    "{} ({})",
                    expected.display(),
                    format_size(meta.len())
                )));
            }
        }

        let mut report = ProbeReport::single(Outcome::fail(format!(
            "{} not found",
            expected.display()
        )));

        let Some(file_name) = expected.file_name().and_then(|n| n.to_str()) else {
            return report;
        };

        report = report.with_info(format!(
            "Searching {} for {}...",
            libraries.search_root.display(),
            file_name
        ));

        let alternate = search::find_file(
            &libraries.search_root,
            file_name,
            libraries.search_depth,
            std::slice::from_ref(expected),
        );
        if let Some(found) = alternate {
            report = report.with_warning(format!(
                "Found {} at {}; point {} at it or link it into place",
                file_name,
                found.display(),
                ctx.config.environment.tool_path_var
            ));
        }

        report
    }
}

/// Probe 5: is a versioned runtime library installed?
pub struct RuntimeLibraryProbe;

impl Probe for RuntimeLibraryProbe {
    fn name(&self) -> &'static str {
        "runtime_library"
    }

    fn title(&self) -> &'static str {
        "Runtime libraries"
    }

    fn run(&self, ctx: &ProbeContext<'_>) -> ProbeReport {
        let libraries = &ctx.config.libraries;
        let matches = glob::glob_dir(&libraries.runtime_dir, &libraries.runtime_pattern);

        let Some(first) = matches.first() else {
            return ProbeReport::single(Outcome::fail(format!(
                "No {} in {}",
                libraries.runtime_pattern,
                libraries.runtime_dir.display()
            )));
        };

        let name = file_name_of(first);
        let version = glob::wildcard_suffix(&libraries.runtime_pattern, &name)
            .unwrap_or("unknown")
            .to_string();

        ProbeReport::single(Outcome::pass(format!(
            "{} found (version {})",
            glob::literal_prefix(&libraries.runtime_pattern).trim_end_matches('.'),
            version
        )))
    }
}

/// Probe 6: does the toolkit library directory exist, and what is in it?
pub struct ToolkitLibraryProbe;

impl Probe for ToolkitLibraryProbe {
    fn name(&self) -> &'static str {
        "toolkit_libraries"
    }

    fn title(&self) -> &'static str {
        "Toolkit library directory"
    }

    fn run(&self, ctx: &ProbeContext<'_>) -> ProbeReport {
        let libraries = &ctx.config.libraries;
        let dir = &libraries.toolkit_dir;

        if !dir.is_dir() {
            return ProbeReport::single(Outcome::fail(format!("{} not found", dir.display())));
        }

        let count = glob::glob_dir(dir, &libraries.toolkit_pattern).len();
        ProbeReport::single(Outcome::pass(format!(
            "{} ({} libraries)",
            dir.display(),
            count
        )))
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
