use std::fs;
use std::process::Command;

fn dy_widgets(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dy_widgets"));
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("DY_METRICS_ADDR");
    cmd
}

fn read_logs(dir: &std::path::Path) -> String {
    let mut content = String::new();
    for entry in fs::read_dir(dir.join("logs")).unwrap() {
        content.push_str(&fs::read_to_string(entry.unwrap().path()).unwrap());
    }
    content
}

#[test]
fn test_lookup_known_selector_prints_the_widget() {
    let dir = tempfile::tempdir().unwrap();
    let output = dy_widgets(dir.path())
        .args(["catalog", "lookup", "stories"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Stories");
}

#[test]
fn test_lookup_miss_exits_nonzero_and_flushes_the_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dy_widgets(dir.path())
        .args(["catalog", "lookup", "nope", "--catalog", "v1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("not found: 'nope' in catalog v1"), "stdout: {stdout}");

    let logs = read_logs(dir.path());
    assert!(logs.contains("Selector not found"), "logs: {logs}");
    assert!(logs.contains("\"selector\":\"nope\""), "logs: {logs}");
}
