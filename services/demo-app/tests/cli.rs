//! End-to-end tests for the demo-app binary

use std::process::{Command, Output};

fn run_demo_app(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_demo-app"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("LOG_FORMAT", "text")
        .output()
        .expect("demo-app should execute")
}

#[test]
fn unknown_mode_exits_with_status_one_and_usage() {
    let output = run_demo_app(&["--mode", "bogus"]);

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).expect("stderr should be utf8");
    assert!(stderr.contains("Unknown mode: bogus"), "stderr={}", stderr);
    assert!(stderr.contains("Usage:"), "stderr={}", stderr);
    assert!(stderr.contains("--mode"), "stderr={}", stderr);

    let stdout = String::from_utf8(output.stdout).expect("stdout should be utf8");
    assert!(!stdout.contains("=== Coin Flip Analysis ==="));
}

#[test]
fn analyze_mode_prints_report_on_stdout() {
    let output = run_demo_app(&["--mode", "analyze", "--flips", "40", "--seed", "7"]);

    assert!(
        output.status.success(),
        "command failed with stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout should be utf8");
    assert!(stdout.contains("=== Coin Flip Analysis ==="));
    assert!(stdout.contains("Total Flips: 40"));
}

#[test]
fn hello_mode_greets() {
    let output = run_demo_app(&["--mode", "hello"]);

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout should be utf8");
    assert!(stdout.contains("Hello from alpha!"));
    assert!(stdout.contains("Hello from beta!"));
}
