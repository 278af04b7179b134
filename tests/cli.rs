use std::fs;
use std::process::Command;

use dev_helpers::{signal, wav};
use tempfile::tempdir;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_energy-novelty"))
}

#[test]
fn test_cli_writes_csv() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bursts.wav");
    let output = dir.path().join("bursts.csv");
    wav::write_wav(&input, 8000, 1, &signal::sine_bursts(16000, 8000, 440., 4000, 800)).unwrap();

    let status = binary()
        .arg(&input)
        .arg(&output)
        .args(["--frame-size", "1024", "--hop-size", "256", "--gamma", "10.0"])
        .status()
        .expect("Failed to execute program");
    assert!(status.success());

    let text = fs::read_to_string(&output).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("time,novelty"));
    assert_eq!(lines.count(), (16000 - 1024) / 256 + 1);
}

#[test]
fn test_cli_config_file_and_overrides() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.csv");
    let config = dir.path().join("config.json");
    wav::write_wav(&input, 8000, 1, &signal::silence(4096)).unwrap();
    fs::write(
        &config,
        format!(
            r#"{{ "input_path": {:?}, "output_path": {:?}, "frame_size": 4096 }}"#,
            input.to_str().unwrap(),
            output.to_str().unwrap()
        ),
    )
    .unwrap();

    // The hop size flag overrides the config file default.
    let status = binary()
        .arg("--config")
        .arg(&config)
        .args(["--hop-size", "1"])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "time,novelty\n0.00000,0.00000\n");
}

#[test]
fn test_cli_fails_on_missing_input() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.csv");
    let result = binary()
        .arg(dir.path().join("missing.wav"))
        .arg(&output)
        .output()
        .unwrap();
    assert!(!result.status.success());
    assert!(!String::from_utf8_lossy(&result.stderr).is_empty());
    assert!(!output.exists());
}

#[test]
fn test_cli_reports_errors_with_logging_off() {
    let dir = tempdir().unwrap();
    let result = binary()
        .env("RUST_LOG", "off")
        .arg(dir.path().join("missing.wav"))
        .arg(dir.path().join("out.csv"))
        .output()
        .unwrap();
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("missing.wav"), "stderr was {:?}", stderr);
}

#[test]
fn test_cli_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.csv");
    wav::write_wav(&input, 8000, 1, &signal::silence(4096)).unwrap();
    fs::write(&output, "previous").unwrap();

    let status = binary().arg(&input).arg(&output).status().unwrap();
    assert!(!status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");

    let status = binary().arg(&input).arg(&output).arg("--overwrite").status().unwrap();
    assert!(status.success());
}
