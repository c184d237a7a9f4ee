use std::path::Path;

use anyhow::{Context, Result, bail};

use super::MakeModelArgs;
use crate::templates::TemplateEngine;
use crate::utils::file_writer::FileWriter;
use crate::utils::tree::normalize;
use crate::utils::{naming, output, patcher};

pub fn run(args: MakeModelArgs, writer: &dyn FileWriter) -> Result<()> {
    let model_name = naming::capitalize(&args.name);
    if !naming::is_valid_identifier(&model_name) {
        bail!(
            "Invalid model name: '{}'. Names must start with a letter or underscore and contain only letters, digits and underscores.",
            args.name
        );
    }

    let engine = TemplateEngine::new()?;

    write_model(&model_name, args.force, &engine, writer)?;
    write_router(&model_name, args.force, &engine, writer)?;
    register_router_in_main(&model_name, writer)?;
    update_models_init(&model_name, writer)?;

    Ok(())
}

fn write_model(
    model_name: &str,
    force: bool,
    engine: &TemplateEngine,
    writer: &dyn FileWriter,
) -> Result<()> {
    let models_dir = Path::new("app/models");
    writer.create_dir_all(models_dir)?;

    let model_path = models_dir.join(format!("{}.py", model_name));
    if model_path.exists() && !force {
        output::print_warn(&format!(
            "Model '{}' already exists. Use --force to overwrite.",
            model_name
        ));
        return Ok(());
    }

    let rendered = engine.render_model(model_name)?;
    writer.write_file(&model_path, &normalize(&rendered))?;
    if !writer.is_dry_run() {
        output::print_success(&format!("Created model: {}", model_path.display()));
    }
    Ok(())
}

fn write_router(
    model_name: &str,
    force: bool,
    engine: &TemplateEngine,
    writer: &dyn FileWriter,
) -> Result<()> {
    let routers_dir = Path::new("app/routers");
    writer.create_dir_all(routers_dir)?;

    let router_path = routers_dir.join(format!("{}.py", model_name));
    if router_path.exists() && !force {
        output::print_warn(&format!(
            "Router '{}' already exists. Use --force to overwrite.",
            model_name
        ));
        return Ok(());
    }

    let rendered = engine.render_router(model_name)?;
    writer.write_file(&router_path, &normalize(&rendered))?;
    if !writer.is_dry_run() {
        output::print_success(&format!("Created router: {}", router_path.display()));
    }
    Ok(())
}

/// Insert the import and `include_router` lines for the new router into
/// `app/main.py`. A missing entry point is a warning, not an error: the user
/// may be generating files before wiring up a project.
fn register_router_in_main(model_name: &str, writer: &dyn FileWriter) -> Result<()> {
    let main_path = Path::new("app/main.py");
    if !main_path.exists() {
        output::print_warn("app/main.py not found. Skipping router registration.");
        return Ok(());
    }

    let content = std::fs::read_to_string(main_path).context("Failed to read app/main.py")?;

    if patcher::router_registered(&content, model_name) {
        output::print_info(&format!(
            "Router '{}' already registered in main.py.",
            model_name
        ));
        return Ok(());
    }

    let updated = patcher::register_router(&content, model_name);
    writer.update_file(main_path, &content, &updated)?;
    if !writer.is_dry_run() {
        output::print_success(&format!(
            "Registered '{}' router in app/main.py",
            model_name
        ));
    }
    Ok(())
}

/// Keep `app/models/__init__.py` importing every generated model and
/// exporting them through a regenerated `__all__` line.
fn update_models_init(model_name: &str, writer: &dyn FileWriter) -> Result<()> {
    let init_path = Path::new("app/models").join("__init__.py");
    let content = if init_path.exists() {
        std::fs::read_to_string(&init_path).context("Failed to read app/models/__init__.py")?
    } else {
        String::new()
    };

    let updated = patcher::update_aggregator(&content, model_name);
    if updated == content {
        output::print_info(&format!(
            "models/__init__.py already imports '{}'.",
            model_name
        ));
        return Ok(());
    }

    writer.update_file(&init_path, &content, &updated)?;
    if !writer.is_dry_run() {
        output::print_info(&format!(
            "Updated models/__init__.py with '{}' import.",
            model_name
        ));
    }
    Ok(())
}
