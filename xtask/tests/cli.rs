use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn xtask() -> Command {
    let mut cmd = Command::cargo_bin("xtask").expect("xtask binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_commands() {
    xtask()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("coverage"))
        .stdout(predicate::str::contains("recipe"));
}

#[test]
fn install_rejects_unknown_build_type() {
    xtask()
        .args(["install", "Profile", "default"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("possible values: Debug, Release"));
}

#[test]
fn install_exits_zero_when_conan_fails() -> Result<(), Box<dyn std::error::Error>> {
    let workspace = tempdir()?;
    fs::create_dir_all(workspace.path().join("app"))?;
    fs::write(workspace.path().join("app/conanfile.py"), "")?;

    xtask()
        .current_dir(workspace.path())
        .env("VIO__INSTALL__PROGRAM", "vio-missing-conan")
        .args(["install", "Release", "default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-- install:"))
        .stdout(predicate::str::contains("Unhandled Exception"));
    Ok(())
}

#[test]
fn coverage_rejects_visual_studio() -> Result<(), Box<dyn std::error::Error>> {
    let workspace = tempdir()?;

    xtask()
        .current_dir(workspace.path())
        .args(["coverage", "Visual Studio", "17"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported compiler for code coverage: Visual Studio"));

    assert!(!workspace.path().join("unit_tests").exists());
    Ok(())
}

#[test]
fn coverage_creates_directory_and_survives_gcovr_failure() -> Result<(), Box<dyn std::error::Error>> {
    let workspace = tempdir()?;

    xtask()
        .current_dir(workspace.path())
        .env("VIO__COVERAGE__PROGRAM", "vio-missing-gcovr")
        .args(["coverage", "gcc", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gcov-11"));

    assert!(workspace.path().join("unit_tests/coverage").is_dir());
    Ok(())
}

#[test]
fn recipe_options_reflect_platform_rules() {
    xtask()
        .args(["recipe", "options", "--os", "Windows"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shared=False"))
        .stdout(predicate::str::contains("fPIC").not())
        .stdout(predicate::str::contains("ffmpeg/5.1"))
        .stdout(predicate::str::contains("ffmpeg:with_ssl=openssl"));

    xtask()
        .args(["recipe", "options", "--os", "Windows", "-o", "fPIC=True"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fPIC"));
}

#[test]
fn recipe_generate_writes_files_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let workspace = tempdir()?;
    fs::write(workspace.path().join("vio.toml"), "[recipe]\nbuild_dir = \"out\"\n")?;

    xtask()
        .current_dir(workspace.path())
        .args(["recipe", "generate", "--os", "Linux", "--build-type", "Debug"])
        .assert()
        .success();

    let toolchain = fs::read_to_string(workspace.path().join("out/vio_toolchain.cmake"))?;
    assert!(toolchain.contains("set(CMAKE_BUILD_TYPE \"Debug\" CACHE STRING"));
    assert!(workspace.path().join("out/dependency_graph.json").is_file());
    Ok(())
}

#[test]
fn explicit_missing_config_fails() {
    xtask()
        .args(["--config", "definitely-missing.toml", "recipe", "options"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load tooling configuration"));
}
