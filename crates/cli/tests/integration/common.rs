//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Desired Deployment as an operator would render it.
pub const DEPLOYMENT_YAML: &str = r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: nim
  labels:
    app: nim
spec:
  replicas: 1
  template:
    spec:
      containers:
        - name: nim
          image: nvcr.io/nim:1.0
          env:
            - name: PORT
              value: "8000"
            - name: LOG_LEVEL
              value: info
"#;

/// Same Deployment with keys and named list entries in a different order.
pub const DEPLOYMENT_REORDERED_YAML: &str = r#"
kind: Deployment
spec:
  template:
    spec:
      containers:
        - image: nvcr.io/nim:1.0
          env:
            - value: info
              name: LOG_LEVEL
            - name: PORT
              value: "8000"
          name: nim
  replicas: 1
metadata:
  labels:
    app: nim
  name: nim
apiVersion: apps/v1
"#;

/// Isolated test environment.
///
/// Each test gets its own temporary directory for object files.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Write a file relative to the temp directory and return its path.
  pub fn write_file(&self, relative_path: &str, content: &str) -> PathBuf {
    let path = self.path(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
  }

  pub fn path(&self, relative_path: &str) -> PathBuf {
    self.temp.path().join(relative_path)
  }

  /// Get a specdrift command with the annotation override cleared.
  pub fn cmd(&self) -> Command {
    let mut cmd = cargo_bin_cmd!("specdrift");
    cmd.env_remove("SPECDRIFT_ANNOTATION_KEY").env_remove("RUST_LOG");
    cmd
  }

  /// Run a command and parse its stdout as JSON.
  pub fn json(&self, args: &[&str]) -> serde_json::Value {
    let output = self.cmd().arg("--json").args(args).output().unwrap();
    assert!(
      output.status.success() || output.status.code() == Some(1),
      "command failed: {}",
      String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
  }
}
