use anyhow::{Result, bail};

use super::MakeMigrationsArgs;
use crate::utils::{output, process};

/// Generate a new Alembic revision from model changes.
pub fn makemigrations(args: MakeMigrationsArgs) -> Result<()> {
    let status = process::run_tool(
        "alembic",
        &["revision", "--autogenerate", "-m", &args.message],
    )?;

    if status.success() {
        output::print_success("Created migration revision.");
        Ok(())
    } else {
        bail!("'alembic revision' exited with errors.")
    }
}

/// Apply all pending migrations.
pub fn migrate() -> Result<()> {
    let status = process::run_tool("alembic", &["upgrade", "head"])?;

    if status.success() {
        output::print_success("Migrations applied.");
        Ok(())
    } else {
        bail!("'alembic upgrade' exited with errors.")
    }
}
