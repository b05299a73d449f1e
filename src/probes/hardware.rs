//! PCI hardware detection.
//!
//! Lists PCI devices and looks for a display-class device from the
//! configured vendor. A vendor match without the configured model still
//! counts as passed, but is shown as a warning so the mismatch is visible.

use crate::config::HardwareConfig;
use crate::probes::{CountsAs, Outcome, Probe, ProbeContext, ProbeReport};

/// How the PCI listing matched the configured GPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PciMatch<'a> {
    /// Vendor and model both present on one device line.
    Exact(&'a str),
    /// Vendor present, model absent.
    VendorOnly(&'a str),
    /// No device line mentions the vendor.
    Absent,
}

/// Classify a PCI listing against the hardware config.
///
/// Only lines naming one of the configured device classes are considered
/// (all lines when the class list is empty). Matching is case-insensitive.
pub fn classify<'a>(listing: &'a str, hardware: &HardwareConfig) -> PciMatch<'a> {
    let vendor = hardware.vendor.to_lowercase();
    let model = hardware.model.to_lowercase();

    let mut vendor_line = None;
    for line in listing.lines().filter(|l| is_display_device(l, hardware)) {
        let lower = line.to_lowercase();
        if !lower.contains(&vendor) {
            continue;
        }
        if lower.contains(&model) {
            return PciMatch::Exact(line);
        }
        vendor_line.get_or_insert(line);
    }

    match vendor_line {
        Some(line) => PciMatch::VendorOnly(line),
        None => PciMatch::Absent,
    }
}

fn is_display_device(line: &str, hardware: &HardwareConfig) -> bool {
    hardware.device_classes.is_empty()
        || hardware
            .device_classes
            .iter()
            .any(|class| line.to_lowercase().contains(&class.to_lowercase()))
}

/// The device description from an `lspci` line (text after the class).
pub fn device_description(line: &str) -> &str {
    line.split_once(": ")
        .map(|(_, desc)| desc.trim())
        .unwrap_or_else(|| line.trim())
}

/// Probe 1: is the target GPU on the PCI bus?
pub struct HardwareProbe;

impl Probe for HardwareProbe {
    fn name(&self) -> &'static str {
        "hardware"
    }

    fn title(&self) -> &'static str {
        "GPU hardware"
    }

    fn run(&self, ctx: &ProbeContext<'_>) -> ProbeReport {
        let hardware = &ctx.config.hardware;

        let Some(tool) = ctx.host.find_executable(&hardware.pci_command) else {
            return ProbeReport::single(Outcome::fail(format!(
                "{} not found; cannot list PCI devices",
                hardware.pci_command
            )));
        };

        let listing = ctx
            .host
            .run(&tool, &[])
            .map(|output| output.stdout)
            .unwrap_or_default();

        let outcome = match classify(&listing, hardware) {
            PciMatch::Exact(line) => Outcome::pass(format!(
                "{} {} detected: {}",
                hardware.vendor,
                hardware.model,
                device_description(line)
            )),
            PciMatch::VendorOnly(line) => Outcome::warn(format!(
                "{} GPU detected (expected {}): {}",
                hardware.vendor,
                hardware.model,
                device_description(line)
            ))
            .counting_as(CountsAs::Passed),
            PciMatch::Absent => Outcome::fail(format!("No {} GPU detected", hardware.vendor)),
        };

        ProbeReport::single(outcome)
    }
}
