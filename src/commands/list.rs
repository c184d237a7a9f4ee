use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::scanner;
use crate::utils::output;

const PATH_COLUMN_WIDTH: usize = 40;

pub fn run() -> Result<()> {
    let routers_dir = Path::new("app/routers");
    if !routers_dir.exists() {
        output::print_warn("No routers directory found. Nothing to list.");
        return Ok(());
    }

    let endpoints = scanner::scan_dir(routers_dir)?;
    if endpoints.is_empty() {
        output::print_warn("No endpoints found in routers.");
        return Ok(());
    }

    println!();
    println!("📋 {}", "Registered Endpoints:".bold());
    println!("{}", "-".repeat(60));
    // ANSI escapes would throw off the column widths, so the header row
    // stays uncolored
    println!("{:<15} {:<10} {}", "Router", "Method", "Path");
    println!("{}", "-".repeat(60));
    for endpoint in &endpoints {
        println!(
            "{:<15} {:<10} {}",
            endpoint.router,
            endpoint.method,
            shorten(&endpoint.path, PATH_COLUMN_WIDTH)
        );
    }
    println!("{}", "-".repeat(60));
    println!("Total: {} endpoints", endpoints.len());
    println!();

    Ok(())
}

/// Truncate a path to fit the table column, marking the cut with "...".
fn shorten(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
