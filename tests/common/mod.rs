use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

pub fn run_candor(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    data: TempDir,
    work: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            data: tempfile::tempdir().expect("create temporary XDG data dir"),
            work: tempfile::tempdir().expect("create temporary work dir"),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_candor"))
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env("XDG_DATA_HOME", self.data.path())
            .env_remove("CANDOR_GEMINI_API_KEY")
            .env_remove("GEMINI_API_KEY")
            .output()
            .expect("failed to execute candor binary")
    }

    /// Write a transcript fixture into the test work dir and return its path.
    #[allow(dead_code)]
    pub fn write_transcript(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.work.path().join(name);
        std::fs::write(&path, contents).expect("write transcript fixture");
        path
    }

    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        let output = self.run(&["config", "path"]);
        assert!(
            output.status.success(),
            "config path should succeed\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );

        let path = String::from_utf8_lossy(&output.stdout);
        PathBuf::from(path.trim())
    }
}
