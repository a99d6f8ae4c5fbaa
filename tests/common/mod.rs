use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const AS_OF: &str = "2026-10-17";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub results: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let results = tmp.path().join("verification_results.txt");

        Self {
            _tmp: tmp,
            home,
            results,
        }
    }

    /// Binary with an isolated HOME, a fixed reference date and a temp results file.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("said");
        cmd.env("HOME", &self.home)
            .env_remove("SAID_FORMAT")
            .env_remove("SAID_RESULTS_FILE")
            .env_remove("SAID_AS_OF")
            .env_remove("SAID_LOG")
            .arg("--as-of")
            .arg(AS_OF)
            .arg("--results-file")
            .arg(&self.results);
        cmd
    }

    pub fn stdout(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn results_log(&self) -> String {
        fs::read_to_string(&self.results).unwrap_or_default()
    }

    pub fn log_blocks(&self) -> usize {
        self.results_log()
            .matches("--------------------------------------\n")
            .count()
    }
}
