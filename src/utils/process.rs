//! Helpers for invoking external tooling (pip, alembic, uvicorn).
//!
//! All feedback is the child's exit status; output streams straight to the
//! user's terminal.

use std::process::{Command, ExitStatus, Stdio};
use std::sync::LazyLock;

use anyhow::{Context, Result};

static PYTHON: LazyLock<&'static str> = LazyLock::new(|| {
    for candidate in ["python3", "python"] {
        let found = Command::new(candidate)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false);
        if found {
            return candidate;
        }
    }
    "python"
});

/// The Python interpreter to use for pip and uvicorn, detected once.
pub fn python() -> &'static str {
    *PYTHON
}

/// Run an external tool in the foreground and return its exit status.
/// A spawn failure (tool not installed) is an error; a non-zero exit is not,
/// the caller decides what that means.
pub fn run_tool(program: &str, args: &[&str]) -> Result<ExitStatus> {
    Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run '{}'. Is it installed and on PATH?", program))
}
