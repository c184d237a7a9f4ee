//! Declarative project tree, materialized onto disk in one pass.

use std::path::Path;

use anyhow::Result;

use crate::templates::TemplateEngine;
use crate::utils::file_writer::FileWriter;
use crate::utils::output;

/// One entry of a project tree: either fully rendered file content, or a
/// directory with named children.
pub enum Node {
    File(String),
    Dir(Vec<(String, Node)>),
}

/// Trim surrounding whitespace and ensure exactly one trailing newline.
/// Every generated file goes through this before hitting disk.
pub fn normalize(text: &str) -> String {
    format!("{}\n", text.trim())
}

/// The scaffolded FastAPI project layout.
pub fn project_structure(engine: &TemplateEngine) -> Result<Node> {
    Ok(Node::Dir(vec![
        (
            "app".into(),
            Node::Dir(vec![
                ("__init__.py".into(), Node::File(String::new())),
                (
                    "main.py".into(),
                    Node::File(engine.render_static("project/main.py")?),
                ),
                (
                    "dependencies.py".into(),
                    Node::File("# Dependency definitions".into()),
                ),
                (
                    "database.py".into(),
                    Node::File(engine.render_static("project/database.py")?),
                ),
                (
                    "routers".into(),
                    Node::Dir(vec![("__init__.py".into(), Node::File(String::new()))]),
                ),
                (
                    "models".into(),
                    Node::Dir(vec![("__init__.py".into(), Node::File(String::new()))]),
                ),
                (
                    "internal".into(),
                    Node::Dir(vec![
                        ("__init__.py".into(), Node::File(String::new())),
                        (
                            "admin.py".into(),
                            Node::File("# Internal admin routes".into()),
                        ),
                    ]),
                ),
            ]),
        ),
        (
            "requirements.txt".into(),
            Node::File(engine.render_static("project/requirements.txt")?),
        ),
    ]))
}

/// Recursively create directories and write files for a tree node.
///
/// Directories are created idempotently; files are overwritten
/// unconditionally. There is no rollback: a failure partway through leaves
/// the files already written in place.
pub fn materialize(base: &Path, node: &Node, writer: &dyn FileWriter) -> Result<()> {
    match node {
        Node::Dir(entries) => {
            writer.create_dir_all(base)?;
            for (name, child) in entries {
                materialize(&base.join(name), child, writer)?;
            }
        }
        Node::File(content) => {
            writer.write_file(base, &normalize(content))?;
            if !writer.is_dry_run() {
                output::print_file_created(&base.display().to_string());
            }
        }
    }
    Ok(())
}
