//! Configuration schema definitions.
//!
//! Every field has a default matching a stock CUDA install on x86_64 Linux,
//! so an empty (or absent) config file runs the standard checks. A config
//! file only needs to name what differs on the host being verified.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `.gpu-doctor.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorConfig {
    /// PCI hardware detection
    pub hardware: HardwareConfig,

    /// GPU driver query tool
    pub driver: DriverConfig,

    /// Toolkit compiler
    pub compiler: CompilerConfig,

    /// Library locations
    pub libraries: LibraryConfig,

    /// Environment variable names
    pub environment: EnvironmentConfig,

    /// Companion runtime tool
    pub companion: CompanionConfig,
}

/// Which PCI devices count as the target GPU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardwareConfig {
    /// PCI listing tool
    pub pci_command: String,

    /// Only lines mentioning one of these device classes are considered
    pub device_classes: Vec<String>,

    /// Vendor string (case-insensitive)
    pub vendor: String,

    /// Model string (case-insensitive); a vendor-only match is a warning
    pub model: String,
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self {
            pci_command: "lspci".to_string(),
            device_classes: vec![
                "VGA compatible controller".to_string(),
                "3D controller".to_string(),
                "Display controller".to_string(),
            ],
            vendor: "NVIDIA".to_string(),
            model: "RTX".to_string(),
        }
    }
}

/// Driver query tool and how to install a driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Driver query executable
    pub command: String,

    /// Remediation commands shown when the driver tool is missing
    pub install_commands: Vec<String>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            command: "nvidia-smi".to_string(),
            install_commands: vec![
                "sudo apt update".to_string(),
                "sudo ubuntu-drivers autoinstall".to_string(),
                "sudo reboot".to_string(),
            ],
        }
    }
}

/// Toolkit compiler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Compiler executable
    pub command: String,

    /// Remediation commands shown when the compiler is missing
    pub install_commands: Vec<String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            command: "nvcc".to_string(),
            install_commands: vec![
                "sudo apt update".to_string(),
                "sudo apt install nvidia-cuda-toolkit".to_string(),
            ],
        }
    }
}

/// Where the toolkit's libraries are expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Binary-support library that must exist
    pub support_library: PathBuf,

    /// Root of the fallback search when the support library is missing
    pub search_root: PathBuf,

    /// Depth limit for the fallback search
    pub search_depth: usize,

    /// Directory holding the versioned runtime library
    pub runtime_dir: PathBuf,

    /// Glob for the runtime library inside `runtime_dir`
    pub runtime_pattern: String,

    /// Toolkit library directory
    pub toolkit_dir: PathBuf,

    /// Glob for library files counted inside `toolkit_dir`
    pub toolkit_pattern: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            support_library: PathBuf::from("/usr/local/cuda/nvvm/libdevice/libdevice.10.bc"),
            search_root: PathBuf::from("/usr"),
            search_depth: crate::sys::search::DEFAULT_MAX_DEPTH,
            runtime_dir: PathBuf::from("/usr/lib/x86_64-linux-gnu"),
            runtime_pattern: "libcudart.so.*".to_string(),
            toolkit_dir: PathBuf::from("/usr/local/cuda/lib64"),
            toolkit_pattern: "lib*.so*".to_string(),
        }
    }
}

/// Environment variables consulted by the environment probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Toolkit home variable; must be non-empty
    pub home_var: String,

    /// Value suggested for `home_var` in remediation text
    pub home_default: PathBuf,

    /// Tool-specific variable; must name an existing file
    pub tool_path_var: String,

    /// Dynamic library search path variable (warning only)
    pub library_path_var: String,

    /// Substrings expected somewhere in `library_path_var`
    pub library_path_tokens: Vec<String>,

    /// Shell profile named in remediation text
    pub shell_profile: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            home_var: "CUDA_HOME".to_string(),
            home_default: PathBuf::from("/usr/local/cuda"),
            tool_path_var: "CUDA_LIBDEVICE".to_string(),
            library_path_var: "LD_LIBRARY_PATH".to_string(),
            library_path_tokens: vec![
                "/usr/local/cuda/lib64".to_string(),
                "/usr/lib/x86_64-linux-gnu".to_string(),
            ],
            shell_profile: "~/.bashrc".to_string(),
        }
    }
}

/// The runtime tool the verified environment is meant to support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    /// Companion executable
    pub command: String,

    /// Arguments that make the companion print its version
    pub version_args: Vec<String>,

    /// Test asset expected in the working directory
    pub test_asset: PathBuf,

    /// One-line install hint printed when the companion is missing
    pub install_hint: String,

    /// Remediation commands shown when the companion is missing
    pub install_commands: Vec<String>,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            command: "python3".to_string(),
            version_args: vec!["--version".to_string()],
            test_asset: PathBuf::from("gpu_smoke_test.py"),
            install_hint: "Install it with: sudo apt install python3".to_string(),
            install_commands: vec!["sudo apt install python3".to_string()],
        }
    }
}

impl CompanionConfig {
    /// Command line that exercises the companion against the test asset.
    pub fn invocation(&self) -> String {
        format!("{} {}", self.command, self.test_asset.display())
    }
}
