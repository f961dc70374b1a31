use std::process::{Command, Output};

// Run the built binary, optionally with RUST_LOG set
fn run_binary(rust_log: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sqlprobe"));
    match rust_log {
        Some(value) => cmd.env("RUST_LOG", value),
        None => cmd.env_remove("RUST_LOG"),
    };
    cmd.output().unwrap()
}

#[test]
fn binary_logs_version_and_exits_zero() {
    let output = run_binary(None);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr);
    let expected = format!("sqlite version: {}", rusqlite::version());
    assert!(stderr.contains(&expected), "stderr: {}", stderr);
}

#[test]
fn rust_log_cannot_hide_the_version_line() {
    let expected = format!("sqlite version: {}", rusqlite::version());

    for level in ["off", "warn", "error"] {
        let output = run_binary(Some(level));
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert_eq!(output.status.code(), Some(0), "RUST_LOG={}: {}", level, stderr);
        assert!(stderr.contains(&expected), "RUST_LOG={}: {}", level, stderr);
    }
}
