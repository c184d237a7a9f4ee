use std::path::PathBuf;

use anyhow::Result;

use super::NewArgs;
use crate::templates::TemplateEngine;
use crate::utils::file_writer::FileWriter;
use crate::utils::{output, tree};

pub fn run(args: NewArgs, writer: &dyn FileWriter) -> Result<()> {
    let base = PathBuf::from(&args.path);

    output::print_step(&format!(
        "Scaffolding FastAPI project in {}",
        base.display()
    ));

    let engine = TemplateEngine::new()?;
    let structure = tree::project_structure(&engine)?;
    tree::materialize(&base, &structure, writer)?;

    if !writer.is_dry_run() {
        let resolved = base.canonicalize().unwrap_or(base);
        output::print_success(&format!(
            "Project structure created at: {}",
            resolved.display()
        ));
        output::print_next_steps(&[
            "fish init                # install dependencies and set up Alembic",
            "fish makemodel <name>    # add a model and its CRUD router",
            "fish serve               # start the dev server",
        ]);
        output::print_banner();
    }

    Ok(())
}
