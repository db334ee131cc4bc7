//! Shared integration-test harness for running the doxnav binary as a
//! child process.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Helpers for invoking the compiled binary.
pub struct DoxnavProcess;

impl DoxnavProcess {
    /// Absolute path to a file under `tests/fixtures`.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Runs the binary with the given arguments and captures its output.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_doxnav"))
            .args(args)
            .output()
            .expect("failed to spawn doxnav")
    }
}
