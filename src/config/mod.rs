//! Configuration loading and schema.
//!
//! The probes never hardcode a path, tool, or variable name; they read them
//! from [`DoctorConfig`]. Defaults describe a stock CUDA install, and a YAML
//! file overrides any subset:
//!
//! ```
//! use gpu_doctor::config::parse_config;
//! use std::path::Path;
//!
//! let config = parse_config("hardware:\n  model: A100\n", Path::new(".gpu-doctor.yml")).unwrap();
//! assert_eq!(config.hardware.model, "A100");
//! assert_eq!(config.driver.command, "nvidia-smi");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    discover, load_config, load_config_file, parse_config, ConfigSource, CONFIG_FILE_NAME,
};
pub use schema::{
    CompanionConfig, CompilerConfig, DoctorConfig, DriverConfig, EnvironmentConfig,
    HardwareConfig, LibraryConfig,
};
