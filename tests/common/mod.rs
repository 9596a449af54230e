//! Shared test infrastructure for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A runner descriptor written to a temp directory, plus a private artifact dir.
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestFixture {
    /// Write `config_json` as the runner descriptor.
    pub fn new(config_json: &str) -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("runner.json");
        std::fs::write(&config_path, config_json.as_bytes())?;
        std::fs::create_dir_all(temp_dir.path().join("artifacts"))?;
        Ok(Self {
            temp_dir,
            config_path,
        })
    }

    /// Directory passed as `--temp-dir`.
    pub fn artifacts_dir(&self) -> PathBuf {
        self.temp_dir.path().join("artifacts")
    }

    /// Path of a per-unit artifact inside the artifacts dir.
    pub fn artifact(&self, file_name: &str) -> String {
        self.artifacts_dir().join(file_name).display().to_string()
    }

    /// Run `courgette <command> --config ... --session <session> --temp-dir ... <extra>`.
    pub fn run(&self, command: &str, session: &str, extra: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_courgette"))
            .arg(command)
            .arg("--config")
            .arg(&self.config_path)
            .arg("--session")
            .arg(session)
            .arg("--temp-dir")
            .arg(self.artifacts_dir())
            .args(extra)
            .env_remove("RUST_LOG")
            .output()
            .expect("run courgette")
    }

    /// Run a command expected to succeed and parse its stdout as JSON.
    pub fn run_json<T: serde::de::DeserializeOwned>(
        &self,
        command: &str,
        session: &str,
        extra: &[&str],
    ) -> T {
        let mut args = extra.to_vec();
        args.push("--json");
        let output = self.run(command, session, &args);
        assert_success(&output);
        serde_json::from_slice(&output.stdout).expect("parse JSON output")
    }
}

pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "courgette failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[allow(dead_code)]
pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent directory");
    }
    std::fs::write(path, contents.as_bytes()).expect("write file");
}
