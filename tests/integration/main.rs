//! Integration tests for the graphs CLI
//!
//! These drive the built binary with scripts and config files.

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn graphs(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_graphs"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn stdout_of(output: std::process::Output) -> String {
    assert!(output.status.success(), "graphs failed: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_invocation() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(graphs(&dir).arg("--help").output().unwrap());

    assert!(out.contains("Interactive graph editing with undo and shortest paths"));
    assert!(out.contains("run"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(graphs(&dir).arg("version").output().unwrap());
    assert_eq!(out.trim(), format!("Graphs v{}", env!("CARGO_PKG_VERSION")));
}

/// Test the add/undo scenario from a script file
#[test]
fn test_script_scenario() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("scenario.txt");
    std::fs::write(
        &script,
        "# three nodes, two edges, three undos\n\
         node\nnode\nnode\n\
         edge 0 1\nedge 0 2\n\
         undo\nundo\nundo\n\
         info\n",
    )
    .unwrap();

    let out = stdout_of(graphs(&dir).args(["run", "--script"]).arg(&script).output().unwrap());

    insta::assert_snapshot!(out, @r"
    added node 0
    added node 1
    added node 2
    added edge 0-1
    added edge 0-2
    undid edge 0-2
    undid edge 0-1
    undid node 2
    Node ID: 0
    Neighbors: Empty
    -------------------
    Node ID: 1
    Neighbors: Empty
    -------------------
    -------------------
    ");
}

/// Test piping commands on stdin, with bad lines reported and skipped
#[test]
fn test_stdin_with_errors() {
    let dir = TempDir::new().unwrap();
    let mut child = graphs(&dir)
        .args(["run", "--directed"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"node\nnode\nedge 0 1\nedge 0 7\nfly\npath 1 0\npath 0 1\n")
        .unwrap();

    let out = stdout_of(child.wait_with_output().unwrap());
    insta::assert_snapshot!(out, @r"
    added node 0
    added node 1
    added edge 0->1
    error: no node with id 7
    error: parse error: unknown command 'fly'
    1 -> 0: unreachable
    0 -> 1: 1
    ");
}

/// Test that graphs.toml in the working directory is honoured
#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("graphs.toml"),
        "[graph]\ndirected = true\n\n[output]\njson = true\n",
    )
    .unwrap();
    let script = dir.path().join("s.txt");
    std::fs::write(&script, "node\nnode\nedge 1 0\nedges\n").unwrap();

    let out = stdout_of(graphs(&dir).args(["run", "-s"]).arg(&script).output().unwrap());
    let last = out.lines().last().unwrap();
    assert_eq!(last, r#"[{"from":1,"to":0}]"#);
    assert!(out.contains("added edge 1->0"));
}

/// Test that a missing explicit config file is a hard error
#[test]
fn test_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    let output = graphs(&dir)
        .args(["--config", "absent.toml", "run"])
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read config"));
}
