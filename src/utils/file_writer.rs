use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

/// Abstraction for file system operations, enabling dry-run mode.
pub trait FileWriter {
    /// Create a directory and all parent directories
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Write content to a file (create or overwrite)
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    /// Update an existing file (read + transform + write)
    /// In dry-run mode, shows the lines that would be added.
    fn update_file(&self, path: &Path, original: &str, updated: &str) -> Result<()>;

    /// Whether this is a dry-run (no actual writes)
    fn is_dry_run(&self) -> bool;
}

/// Real file writer, actually writes to disk
pub struct RealWriter;

impl FileWriter for RealWriter {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write: {}", path.display()))
    }

    fn update_file(&self, path: &Path, _original: &str, updated: &str) -> Result<()> {
        std::fs::write(path, updated)
            .with_context(|| format!("Failed to write: {}", path.display()))
    }

    fn is_dry_run(&self) -> bool {
        false
    }
}

/// Dry-run writer, prints what would happen without writing
pub struct DryRunWriter;

impl DryRunWriter {
    pub fn new() -> Self {
        Self
    }
}

impl FileWriter for DryRunWriter {
    fn create_dir_all(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, _content: &str) -> Result<()> {
        println!("  {} {}", "Would create:".cyan(), path.display());
        Ok(())
    }

    fn update_file(&self, path: &Path, original: &str, updated: &str) -> Result<()> {
        println!("  {} {}", "Would modify:".yellow(), path.display());
        print_added_lines(original, updated);
        Ok(())
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}

/// Show only the lines that the update introduces
fn print_added_lines(original: &str, updated: &str) {
    let original_lines: Vec<&str> = original.lines().collect();

    for line in updated.lines() {
        if !original_lines.contains(&line) {
            println!("    {} {}", "+".green(), line.green());
        }
    }
}
