//! End-to-end runs of the `netweave` binary

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::tempdir;

fn netweave() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_netweave"));
    command
        .env_remove("NETWEAVE_LOG_LEVEL")
        .env_remove("NETWEAVE_LOG_FORMAT")
        .env_remove("RUST_LOG");
    command
}

#[test]
fn test_sample_then_layout_via_stdin() {
    let sample = netweave().arg("sample").output().unwrap();
    assert!(sample.status.success());

    let mut child = netweave()
        .args(["layout", "-s", "radial", "--anchor-role", "founder"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(&sample.stdout)
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["strategy"], "radial");
    assert_eq!(value["anchor"], "dana-1");
    assert_eq!(value["positions"].as_object().unwrap().len(), 8);
}

#[test]
fn test_layout_file_to_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("graph.json");
    let output = dir.path().join("positions.json");
    fs::write(
        &input,
        r#"{"nodes": [{"id": "a", "category": "person"}, {"id": "b", "category": "org"}],
            "edges": [{"source": "a", "target": "b"}]}"#,
    )
    .unwrap();

    let status = netweave()
        .arg("layout")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--seed", "3"])
        .status()
        .unwrap();
    assert!(status.success());

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["strategy"], "force");
    assert_eq!(value["iterations"], 100);
}

#[test]
fn test_unknown_strategy_exits_nonzero() {
    let output = netweave()
        .args(["layout", "--strategy", "spiral", "-i", "-"])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_validate_reports_dangling_edges() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("graph.json");
    fs::write(
        &input,
        r#"{"nodes": [{"id": "a", "category": "person"}],
            "edges": [{"source": "a", "target": "ghost"}]}"#,
    )
    .unwrap();

    let output = netweave().arg("validate").arg("-i").arg(&input).output().unwrap();
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("a -> ghost"));
}

#[test]
fn test_strategies_json() {
    let output = netweave().args(["strategies", "--json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 5);
    assert_eq!(value["default"], "force");
}

#[test]
fn test_validate_prints_load_error_once() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("graph.json");
    fs::write(&input, "{ not json").unwrap();

    let output = netweave().arg("validate").arg("-i").arg(&input).output().unwrap();
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.is_empty(), "unexpected stdout: {stdout}");
    assert_eq!(stderr.matches("Invalid input").count(), 1, "{stderr}");
}
