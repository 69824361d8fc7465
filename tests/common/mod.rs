#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
    pub library: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        let library = dir.join("library.txt");
        Self {
            _tmp: tmp,
            dir,
            library,
        }
    }

    /// Binary running inside the temp dir, so the default `library.txt` lands there.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("shelf");
        cmd.current_dir(&self.dir)
            .env_remove("SHELF_FILE")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_shell(&self, script: &str) -> String {
        let mut cmd = self.cmd();
        let out = cmd
            .write_stdin(script)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 output")
    }

    pub fn write_library(&self, body: &str) {
        fs::write(&self.library, body).expect("write library fixture");
    }

    pub fn saved_library(&self) -> Value {
        let raw = fs::read_to_string(&self.library).expect("read library file");
        serde_json::from_str(&raw).expect("library file is json")
    }
}
