use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::templates::TemplateEngine;
use crate::utils::tree::normalize;
use crate::utils::{output, patcher, process};

/// Install dependencies, initialize Alembic and make its generated templates
/// SQLModel-aware.
pub fn run() -> Result<()> {
    if !Path::new("requirements.txt").exists() {
        bail!("requirements.txt not found in the current directory.");
    }

    output::print_step("Installing dependencies from requirements.txt...");
    let status = process::run_tool(
        process::python(),
        &["-m", "pip", "install", "-r", "requirements.txt"],
    )?;
    if !status.success() {
        bail!("Failed to install dependencies. Check the output above.");
    }
    output::print_success("Dependencies installed.");

    output::print_step("Initializing Alembic migrations...");
    let status = process::run_tool("alembic", &["init", "migrations"])?;
    if !status.success() {
        bail!("'alembic init migrations' exited with errors.");
    }

    patch_revision_template()?;
    replace_env_file()?;

    output::print_success("Project initialized.");
    Ok(())
}

/// Ensure `import sqlmodel` is present in Alembic's revision template so
/// autogenerated migrations can reference sqlmodel column types.
fn patch_revision_template() -> Result<()> {
    let mako_path = Path::new("migrations/script.py.mako");
    if !mako_path.exists() {
        output::print_warn("migrations/script.py.mako not found. Skipping import injection.");
        return Ok(());
    }

    let content =
        std::fs::read_to_string(mako_path).context("Failed to read migrations/script.py.mako")?;

    if patcher::sqlmodel_import_present(&content) {
        output::print_info("'import sqlmodel' already present in script.py.mako.");
        return Ok(());
    }

    // A missing anchor line means an unfamiliar Alembic version; leave the
    // template untouched rather than guess an insertion point.
    if let Some(updated) = patcher::inject_sqlmodel_import(&content) {
        std::fs::write(mako_path, updated)
            .context("Failed to write migrations/script.py.mako")?;
        output::print_success("Added 'import sqlmodel' to script.py.mako.");
    }
    Ok(())
}

/// Replace Alembic's generated `env.py` with the SQLModel-aware template that
/// wires in the app engine and model metadata.
fn replace_env_file() -> Result<()> {
    let env_path = Path::new("migrations/env.py");
    if !env_path.exists() {
        output::print_warn("migrations/env.py not found. Did 'alembic init migrations' run?");
        return Ok(());
    }

    let engine = TemplateEngine::new()?;
    let rendered = engine.render_static("migration/env.py")?;
    std::fs::write(env_path, normalize(&rendered)).context("Failed to write migrations/env.py")?;
    output::print_success("Replaced migrations/env.py with the SQLModel-aware template.");
    Ok(())
}
