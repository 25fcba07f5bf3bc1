//! End-to-end runs of the `nilakkal` binary.

use std::process::Command;

use image::{Rgb, RgbImage};

fn nilakkal() -> Command {
    Command::new(env!("CARGO_BIN_EXE_nilakkal"))
}

#[test]
fn strip_writes_transparent_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("logo.png");
    let output = dir.path().join("logo-transparent.png");

    let mut src = RgbImage::new(2, 2);
    src.put_pixel(0, 0, Rgb([0, 0, 0]));
    src.put_pixel(1, 0, Rgb([10, 10, 10]));
    src.put_pixel(0, 1, Rgb([60, 60, 60]));
    src.put_pixel(1, 1, Rgb([255, 255, 255]));
    src.save(&input).unwrap();

    let out = nilakkal()
        .arg("strip")
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Successfully saved to"));
    assert!(stdout.contains("logo-transparent.png"));

    let result = image::open(&output).unwrap().into_rgba8();
    let alphas: Vec<u8> = result.pixels().map(|p| p[3]).collect();
    assert_eq!(alphas, vec![0, 0, 255, 255]);
    for (got, want) in result.pixels().zip(src.pixels()) {
        assert_eq!(got.0[..3], want.0);
    }
}

#[test]
fn strip_honours_threshold_flag() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("grey.png");
    let output = dir.path().join("grey-out.png");
    RgbImage::from_pixel(3, 3, Rgb([60, 60, 60])).save(&input).unwrap();

    let status = nilakkal()
        .args(["strip", "--threshold", "61"])
        .arg(&input)
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    let result = image::open(&output).unwrap().into_rgba8();
    assert!(result.pixels().all(|p| p[3] == 0));
}

#[test]
fn strip_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does-not-exist.jpeg");
    let output = dir.path().join("out.png");

    let out = nilakkal()
        .arg("strip")
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("does-not-exist.jpeg"), "stderr: {stderr}");
    assert!(out.stdout.is_empty());
    assert!(!output.exists());
}

#[test]
fn strip_rejects_jpeg_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.jpg");
    RgbImage::from_pixel(1, 1, Rgb([0, 0, 0])).save(&input).unwrap();

    let out = nilakkal()
        .arg("strip")
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
}

#[test]
fn serve_rejects_bad_address() {
    let out = nilakkal()
        .args(["serve", "--addr", "not-an-address"])
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("not-an-address"));
}

#[test]
fn strip_failure_reported_even_with_logging_off() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.jpeg");
    let output = dir.path().join("o.png");

    let out = nilakkal()
        .env("RUST_LOG", "off")
        .arg("strip")
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("Error: "), "stderr: {stderr}");
    assert!(stderr.contains("No such file or directory"), "stderr: {stderr}");
    assert_eq!(stderr.matches("No such file or directory").count(), 1, "stderr: {stderr}");
    assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn strip_failure_prints_only_the_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.jpeg");
    let output = dir.path().join("o.png");

    let out = nilakkal()
        .env_remove("RUST_LOG")
        .arg("strip")
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
    assert!(stderr.starts_with("Error: "), "stderr: {stderr}");
}

#[test]
fn strip_writes_bmp_with_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.bmp");
    RgbImage::from_pixel(2, 1, Rgb([0, 0, 0])).save(&input).unwrap();

    let status = nilakkal().arg("strip").arg(&input).arg(&output).status().unwrap();

    assert!(status.success());
    let result = image::open(&output).unwrap().into_rgba8();
    assert!(result.pixels().all(|p| p.0 == [0, 0, 0, 0]));
}
