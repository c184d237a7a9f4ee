use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::utils::{output, process};

/// Run the generated app with Uvicorn in reload mode, in the foreground.
pub fn run() -> Result<()> {
    if !Path::new("app/main.py").exists() {
        bail!("app/main.py not found. Make sure you're in the project root.");
    }

    output::print_step("Starting FastAPI development server...");

    // Ctrl+C belongs to uvicorn; the CLI just waits for it to shut down.
    ctrlc::set_handler(|| {}).context("Failed to set Ctrl+C handler")?;

    let status = process::run_tool(
        process::python(),
        &["-m", "uvicorn", "app.main:app", "--reload"],
    )?;

    if status.success() {
        output::print_success("Server stopped gracefully.");
        Ok(())
    } else {
        bail!("Server exited with errors.")
    }
}
