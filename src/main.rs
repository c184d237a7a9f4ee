mod commands;
mod scanner;
mod templates;
mod utils;

use clap::Parser;
use commands::{Cli, Commands};
use utils::file_writer::{DryRunWriter, FileWriter, RealWriter};
use utils::output;

fn main() {
    let cli = Cli::parse();

    let writer: Box<dyn FileWriter> = if cli.dry_run {
        Box::new(DryRunWriter::new())
    } else {
        Box::new(RealWriter)
    };

    let result = match cli.command {
        Commands::New(args) => commands::new::run(args, writer.as_ref()),
        Commands::Makemodel(args) => commands::makemodel::run(args, writer.as_ref()),
        Commands::List => commands::list::run(),
        Commands::Init => commands::init::run(),
        Commands::Serve => commands::serve::run(),
        Commands::Makemigrations(args) => commands::migrations::makemigrations(args),
        Commands::Migrate => commands::migrations::migrate(),
        Commands::Completions { shell } => {
            commands::completions::run(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
