//! Toolkit compiler detection.

use crate::probes::{Outcome, Probe, ProbeContext, ProbeReport};

/// Extract a version token from a compiler's `--version` banner.
///
/// Prefers the `release X.Y` form used by toolkit compilers, then falls back
/// to the first dotted version number in the text.
pub fn parse_version(banner: &str) -> Option<String> {
    let patterns = [r"release\s+(\d+\.\d+)", r"(\d+\.\d+(?:\.\d+)?)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(m) = re.captures(banner).and_then(|caps| caps.get(1)) {
                return Some(m.as_str().to_string());
            }
        }
    }

    None
}

/// Probe 3: is the compiler on PATH, and which version is it?
pub struct CompilerProbe;

impl Probe for CompilerProbe {
    fn name(&self) -> &'static str {
        "compiler"
    }

    fn title(&self) -> &'static str {
        "Toolkit compiler"
    }

    fn run(&self, ctx: &ProbeContext<'_>) -> ProbeReport {
        let command = &ctx.config.compiler.command;

        let Some(tool) = ctx.host.find_executable(command) else {
            return ProbeReport::single(Outcome::fail(format!("{} not found on PATH", command)));
        };

        let version = ctx
            .host
            .run(&tool, &["--version"])
            .and_then(|output| parse_version(&output.combined()))
            .unwrap_or_else(|| "unknown version".to_string());

        ProbeReport::single(Outcome::pass(format!(
            "{} {} ({})",
            command,
            version,
            tool.display()
        )))
    }
}
