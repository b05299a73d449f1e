//! Companion runtime tool and its test asset.

use std::fs;

use crate::probes::{first_line, format_size, Outcome, Probe, ProbeContext, ProbeReport};

/// Probe 8: is the companion tool installed?
pub struct CompanionProbe;

impl Probe for CompanionProbe {
    fn name(&self) -> &'static str {
        "companion"
    }

    fn title(&self) -> &'static str {
        "Companion runtime"
    }

    fn run(&self, ctx: &ProbeContext<'_>) -> ProbeReport {
        let companion = &ctx.config.companion;

        let Some(tool) = ctx.host.find_executable(&companion.command) else {
            let report =
                ProbeReport::single(Outcome::fail(format!("{} not found", companion.command)));
            if companion.install_hint.trim().is_empty() {
                return report;
            }
            return report.with_info(companion.install_hint.clone());
        };

        let args: Vec<&str> = companion.version_args.iter().map(String::as_str).collect();
        // Older interpreters print their version on stderr.
        let version = ctx
            .host
            .run(&tool, &args)
            .and_then(|output| first_line(&output.combined()).map(str::to_string))
            .unwrap_or_else(|| "unknown version".to_string());

        ProbeReport::single(Outcome::pass(format!(
            "{} found: {} ({})",
            companion.command,
            version,
            tool.display()
        )))
    }
}

/// Probe 9: is the test asset present in the working directory?
///
/// A missing asset only warns and is never counted.
pub struct TestAssetProbe;

impl Probe for TestAssetProbe {
    fn name(&self) -> &'static str {
        "test_asset"
    }

    fn title(&self) -> &'static str {
        "Test asset"
    }

    fn run(&self, ctx: &ProbeContext<'_>) -> ProbeReport {
        let asset = &ctx.config.companion.test_asset;
        let path = if asset.is_absolute() {
            asset.clone()
        } else {
            ctx.working_dir.join(asset)
        };

        let outcome = match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Outcome::pass(format!(
                "{} ({})",
                asset.display(),
                format_size(meta.len())
            )),
            _ => Outcome::warn(format!(
                "{} not found in {}",
                asset.display(),
                ctx.working_dir.display()
            )),
        };

        ProbeReport::single(outcome)
    }
}
