//! Integration tests for the gpu-doctor binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HOME_VAR: &str = "GPU_DOCTOR_TEST_HOME";
const TOOL_VAR: &str = "GPU_DOCTOR_TEST_LIBDEVICE";
const LIB_VAR: &str = "GPU_DOCTOR_TEST_LIBRARY_PATH";

/// A config where every tool, path and variable is private to `root`.
fn isolated_config(root: &Path, tool_prefix: &str) -> String {
    format!(
        r#"
hardware:
  pci_command: {prefix}lspci
driver:
  command: {prefix}nvidia-smi
compiler:
  command: {prefix}nvcc
libraries:
  support_library: {root}/cuda/nvvm/libdevice/libdevice.10.bc
  search_root: {root}/search
  runtime_dir: {root}/lib
  toolkit_dir: {root}/cuda/lib64
environment:
  home_var: {home}
  tool_path_var: {tool}
  library_path_var: {lib}
  library_path_tokens: ["{root}/cuda/lib64"]
companion:
  command: {prefix}python
"#,
        prefix = tool_prefix,
        root = root.display(),
        home = HOME_VAR,
        tool = TOOL_VAR,
        lib = LIB_VAR,
    )
}

fn doctor(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("gpu-doctor"));
    cmd.current_dir(dir)
        .env_remove("GPU_DOCTOR_CONFIG")
        .env_remove(HOME_VAR)
        .env_remove(TOOL_VAR)
        .env_remove(LIB_VAR)
        .arg("--no-color");
    cmd
}

/// A working directory whose config names tools that do not exist.
fn nothing_installed() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".gpu-doctor.yml"),
        isolated_config(temp.path(), "gpu-doctor-missing-"),
    )
    .unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gpu-doctor"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("GPU compute"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gpu-doctor"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn nothing_installed_exits_one_with_recommendations() -> Result<(), Box<dyn std::error::Error>> {
    let temp = nothing_installed();
    doctor(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[1/10] GPU hardware"))
        .stdout(predicate::str::contains("Failed: 9"))
        .stdout(predicate::str::contains("Recommended actions"))
        .stdout(predicate::str::contains(
            "1. Install the GPU driver",
        ))
        .stdout(predicate::str::contains("not ready"));
    Ok(())
}

#[test]
fn check_subcommand_matches_default() -> Result<(), Box<dyn std::error::Error>> {
    let temp = nothing_installed();
    doctor(temp.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Passed: 0"));
    Ok(())
}

#[test]
fn quiet_hides_probe_titles() -> Result<(), Box<dyn std::error::Error>> {
    let temp = nothing_installed();
    doctor(temp.path())
        .args(["check", "--quiet"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[1/10]").not())
        .stdout(predicate::str::contains("Failed: 9"));
    Ok(())
}

#[test]
fn json_report_parses() -> Result<(), Box<dyn std::error::Error>> {
    let temp = nothing_installed();
    let output = doctor(temp.path()).args(["check", "--json"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["tally"]["failed"], 9);
    assert_eq!(json["readiness"], "not_ready");
    assert_eq!(json["advice"]["status"], "actions");
    assert_eq!(json["probes"].as_array().map(Vec::len), Some(10));
    Ok(())
}

#[test]
fn missing_explicit_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    doctor(temp.path())
        .args(["--config", "does-not-exist.yml"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn config_env_var_is_honored() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    doctor(temp.path())
        .env("GPU_DOCTOR_CONFIG", temp.path().join("absent.yml"))
        .arg("config")
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn invalid_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".gpu-doctor.yml"), "driver: [1, 2]\n")?;
    doctor(temp.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn config_prints_resolved_yaml() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".gpu-doctor.yml"),
        "hardware:\n  model: A100\n",
    )?;
    doctor(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("model: A100"))
        .stdout(predicate::str::contains("nvidia-smi"));
    Ok(())
}

#[test]
fn config_json_stdout_is_pure_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = doctor(temp.path()).args(["config", "--json"]).output()?;

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["driver"]["command"], "nvidia-smi");
    Ok(())
}

#[test]
fn directory_flag_resolves_relative_tool_path() -> Result<(), Box<dyn std::error::Error>> {
    let project = nothing_installed();
    fs::write(project.path().join("libdevice.10.bc"), b"bc")?;
    let elsewhere = TempDir::new()?;
    doctor(elsewhere.path())
        .env(TOOL_VAR, "libdevice.10.bc")
        .arg("-C")
        .arg(project.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(format!(
            "{}=libdevice.10.bc",
            TOOL_VAR
        )))
        .stdout(predicate::str::contains("does not exist").not());
    Ok(())
}

#[test]
fn directory_flag_changes_working_dir() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    fs::write(
        project.path().join(".gpu-doctor.yml"),
        "compiler:\n  command: hipcc\n",
    )?;
    let elsewhere = TempDir::new()?;
    doctor(elsewhere.path())
        .arg("-C")
        .arg(project.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("hipcc"));
    Ok(())
}

#[test]
fn completions_generate() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gpu-doctor"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gpu-doctor"));
    Ok(())
}

#[cfg(unix)]
mod installed {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn script(dir: &Path, name: &str, body: &str) {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    /// Fake tools on a private PATH plus the expected files on disk.
    fn fully_installed() -> (TempDir, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let bin = root.join("bin");
        fs::create_dir_all(&bin).unwrap();

        script(
            &bin,
            "fake-lspci",
            "echo '01:00.0 VGA compatible controller: NVIDIA Corporation GA106 [GeForce RTX 3060]'",
        );
        script(
            &bin,
            "fake-nvidia-smi",
            r#"case "$1" in
  --query-gpu=driver_version) echo 535.54.03 ;;
  *) echo 'NVIDIA GeForce RTX 3060, 535.54.03, 12288 MiB' ;;
esac"#,
        );
        script(
            &bin,
            "fake-nvcc",
            "echo 'Cuda compilation tools, release 12.2, V12.2.91'",
        );
        script(&bin, "fake-python", "echo 'Python 3.11.6'");

        touch(&root.join("cuda/nvvm/libdevice/libdevice.10.bc"));
        touch(&root.join("lib/libcudart.so.12.2.140"));
        touch(&root.join("cuda/lib64/libcublas.so.12"));
        touch(&root.join("gpu_smoke_test.py"));

        fs::write(
            root.join(".gpu-doctor.yml"),
            isolated_config(root, "fake-"),
        )
        .unwrap();
        (temp, bin)
    }

    #[test]
    fn fully_installed_exits_zero_with_next_steps() -> Result<(), Box<dyn std::error::Error>> {
        let (temp, bin) = fully_installed();
        let root = temp.path();

        doctor(root)
            .env("PATH", &bin)
            .env(HOME_VAR, root.join("cuda"))
            .env(TOOL_VAR, root.join("cuda/nvvm/libdevice/libdevice.10.bc"))
            .env(LIB_VAR, root.join("cuda/lib64"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Failed: 0"))
            .stdout(predicate::str::contains("Driver version 535.54.03"))
            .stdout(predicate::str::contains("fake-nvcc 12.2"))
            .stdout(predicate::str::contains("Next steps"))
            .stdout(predicate::str::contains("fake-python gpu_smoke_test.py"));
        Ok(())
    }

    #[test]
    fn missing_driver_alone_is_mostly_ready() -> Result<(), Box<dyn std::error::Error>> {
        let (temp, bin) = fully_installed();
        let root = temp.path();
        fs::remove_file(bin.join("fake-nvidia-smi"))?;

        doctor(root)
            .env("PATH", &bin)
            .env(HOME_VAR, root.join("cuda"))
            .env(TOOL_VAR, root.join("cuda/nvvm/libdevice/libdevice.10.bc"))
            .env(LIB_VAR, root.join("cuda/lib64"))
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Failed: 1"))
            .stdout(predicate::str::contains("mostly ready"))
            .stdout(predicate::str::contains("1. Install the GPU driver"))
            .stdout(predicate::str::contains("2. Install").not());
        Ok(())
    }
}
