//! Drives the built `convert_to_*` binaries.

use image::{Rgb, RgbImage};
use std::path::Path;
use std::process::{Command, Output};

fn bin(name: &str) -> Command {
    let path = match name {
        "convert_to_docx" => env!("CARGO_BIN_EXE_convert_to_docx"),
        "convert_to_pdf" => env!("CARGO_BIN_EXE_convert_to_pdf"),
        "convert_to_pptx" => env!("CARGO_BIN_EXE_convert_to_pptx"),
        other => panic!("unknown binary {other}"),
    };
    let mut cmd = Command::new(path);
    cmd.env("RUST_LOG", "off").arg("--no-progress");
    cmd
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).trim().to_string()
}

fn png(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("in.png");
    RgbImage::from_pixel(20, 10, Rgb([0, 128, 0])).save(&path).unwrap();
    path
}

#[test]
fn wrong_argument_count_is_a_usage_error() {
    for name in ["convert_to_docx", "convert_to_pdf", "convert_to_pptx"] {
        let out = bin(name).arg("only-one-arg").output().unwrap();
        assert_eq!(out.status.code(), Some(2), "{name}");
        assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"), "{name}");

        let out = bin(name).args(["a", "b", "c"]).output().unwrap();
        assert_eq!(out.status.code(), Some(2), "{name}");
    }
}

#[test]
fn missing_input_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.pdf");
    let out = bin("convert_to_docx")
        .arg(&input)
        .arg(dir.path().join("nope.docx"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), format!("Input file not found: {}", input.display()));
}

#[test]
fn unsupported_extension_exits_one_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.csv");
    std::fs::write(&input, "a,b\n").unwrap();
    let output = dir.path().join("data.pptx");

    let out = bin("convert_to_pptx").arg(&input).arg(&output).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "Unsupported file format: .csv");
    assert!(!output.exists());
}

#[test]
fn png_to_pdf_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let input = png(dir.path());
    let output = dir.path().join("out.pdf");

    let out = bin("convert_to_pdf").arg(&input).arg(&output).output().unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        stdout(&out),
        format!("Successfully converted {} to PDF", input.display())
    );
    assert!(output.exists());
}

#[test]
fn json_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let input = png(dir.path());
    let output = dir.path().join("out.pptx");

    let out = bin("convert_to_pptx")
        .arg("--json")
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["report"]["units"], 1);
}

#[test]
fn engine_failure_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("memo.docx");
    std::fs::write(&input, b"not a zip").unwrap();
    let output = dir.path().join("memo.pdf");

    let out = bin("convert_to_pdf")
        .arg("--office-binary")
        .arg("/definitely/not/soffice")
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("Error converting file: "), "got: {}", stdout(&out));
    assert!(!output.exists());
}
