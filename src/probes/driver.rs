//! GPU driver detection via the driver query tool.

use crate::probes::{first_line, Outcome, Probe, ProbeContext, ProbeReport};

/// Arguments that print only the driver version.
pub const VERSION_QUERY: &[&str] = &["--query-gpu=driver_version", "--format=csv,noheader"];

/// Arguments that print one `name, driver, memory` row per GPU.
pub const SUMMARY_QUERY: &[&str] = &[
    "--query-gpu=name,driver_version,memory.total",
    "--format=csv,noheader",
];

/// Probe 2: is the driver installed and answering queries?
pub struct DriverProbe;

impl Probe for DriverProbe {
    fn name(&self) -> &'static str {
        "driver"
    }

    fn title(&self) -> &'static str {
        "GPU driver"
    }

    fn run(&self, ctx: &ProbeContext<'_>) -> ProbeReport {
        let command = &ctx.config.driver.command;

        let Some(tool) = ctx.host.find_executable(command) else {
            return ProbeReport::single(Outcome::fail(format!(
                "{} not found; GPU driver not installed",
                command
            )));
        };

        let version = ctx
            .host
            .run(&tool, VERSION_QUERY)
            .filter(|output| output.success)
            .and_then(|output| first_line(&output.stdout).map(str::to_string));

        let Some(version) = version else {
            return ProbeReport::single(Outcome::fail(format!(
                "{} found at {} but reported no driver version",
                command,
                tool.display()
            )));
        };

        let mut report = ProbeReport::single(Outcome::pass(format!("Driver version {}", version)));
        if let Some(output) = ctx.host.run(&tool, SUMMARY_QUERY).filter(|o| o.success) {
            for row in output.stdout.lines().filter_map(format_summary_row) {
                report = report.with_info(row);
            }
        }
        report
    }
}

/// Turn `NVIDIA GeForce RTX 3060, 535.54.03, 12288 MiB` into a display line.
pub fn format_summary_row(row: &str) -> Option<String> {
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    match fields.as_slice() {
        [name, driver, memory] if !name.is_empty() => Some(format!(
            "GPU: {} | Driver: {} | Memory: {}",
            name, driver, memory
        )),
        _ => None,
    }
}
