pub mod completions;
pub mod init;
pub mod list;
pub mod makemodel;
pub mod migrations;
pub mod new;
pub mod serve;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// fish - scaffolding tool for FastAPI + SQLModel projects
#[derive(Parser)]
#[command(name = "fish", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Simulate operations without writing any files
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new project structure
    New(NewArgs),

    /// Create a new model and its CRUD router
    Makemodel(MakeModelArgs),

    /// List all endpoints declared in the generated routers
    List,

    /// Install dependencies and set up Alembic migrations
    Init,

    /// Run the app with Uvicorn in reload mode
    Serve,

    /// Create a new Alembic migration revision
    Makemigrations(MakeMigrationsArgs),

    /// Apply pending migrations
    Migrate,

    /// Generate shell completions
    ///
    /// Example: fish completions bash > ~/.local/share/bash-completion/completions/fish
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Arguments for `fish new [path]`
#[derive(Parser)]
pub struct NewArgs {
    /// Base directory for the project
    #[arg(default_value = ".")]
    pub path: String,
}

/// Arguments for `fish makemodel <name>`
#[derive(Parser)]
pub struct MakeModelArgs {
    /// Model name; the generated class and files use its capitalized form
    pub name: String,

    /// Overwrite existing model and router files
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `fish makemigrations <message>`
#[derive(Parser)]
pub struct MakeMigrationsArgs {
    /// Revision message passed to `alembic revision -m`
    pub message: String,
}
