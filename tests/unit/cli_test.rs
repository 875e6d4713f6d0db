//! Integration tests for the rasterflow CLI

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn rasterflow() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("rasterflow"));
    // Isolate each invocation from the developer's environment
    cmd.env_remove("BASE_URL");
    cmd.env_remove("USER_TOKEN");
    cmd
}

fn with_dummy_endpoint(cmd: &mut assert_cmd::Command) -> &mut assert_cmd::Command {
    cmd.env("BASE_URL", "http://127.0.0.1:1").env("USER_TOKEN", "token")
}

#[test]
fn test_version() {
    rasterflow()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rasterflow"));
}

#[test]
fn test_help_lists_command_groups() {
    rasterflow()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mosaic"))
        .stdout(predicate::str::contains("processing"))
        .stdout(predicate::str::contains("project"));
}

#[test]
fn test_missing_configuration_is_fatal() {
    let temp = TempDir::new().unwrap();

    rasterflow()
        .args(["mosaic", "mosaics"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("BASE_URL"));
}

#[test]
fn test_unreachable_endpoint_is_fatal() {
    let temp = TempDir::new().unwrap();

    with_dummy_endpoint(rasterflow().args(["mosaic", "mosaics"]).current_dir(temp.path()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("BASE_URL"));
}

#[test]
fn test_upload_rejects_a_missing_path() {
    let temp = TempDir::new().unwrap();

    with_dummy_endpoint(
        rasterflow()
            .args(["mosaic", "upload", "-p", "nowhere.tif", "--mosaic-id", "m1"])
            .current_dir(temp.path()),
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("no such file or directory"));
}

#[test]
fn test_start_requires_a_source() {
    let temp = TempDir::new().unwrap();

    with_dummy_endpoint(
        rasterflow()
            .args(["processing", "start", "-n", "job", "--wd-id", "wd1"])
            .current_dir(temp.path()),
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("--image-id or --mosaic-id"));
}

#[test]
fn test_start_rejects_both_sources() {
    rasterflow()
        .args([
            "processing",
            "start",
            "-n",
            "job",
            "--wd-id",
            "wd1",
            "--image-id",
            "i1",
            "--mosaic-id",
            "m1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_download_rejects_a_directory_destination() {
    let temp = TempDir::new().unwrap();
    let directory = temp.path().join("results");
    std::fs::create_dir(&directory).unwrap();

    with_dummy_endpoint(
        rasterflow()
            .args([
                "processing",
                "download",
                "--processing-id",
                "p1",
                "-p",
                directory.to_str().unwrap(),
            ])
            .current_dir(temp.path()),
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("only file paths are supported"));
}

#[test]
fn test_start_rejects_a_missing_geometry_file() {
    let temp = TempDir::new().unwrap();

    with_dummy_endpoint(
        rasterflow()
            .args([
                "processing",
                "start",
                "-n",
                "job",
                "--wd-id",
                "wd1",
                "--image-id",
                "i1",
                "-g",
                "missing.geojson",
            ])
            .current_dir(temp.path()),
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("no such file"));
}
