//! Transmute CLI
//!
//! Reshape JSON documents from the command line

use clap::{Parser, Subcommand, ValueEnum};
use transmute_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "transmute")]
#[command(about = "Transmute - Remove and merge fields in JSON records", long_about = None)]
struct Cli {
    /// Log output on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogMode::Off)]
    log: LogMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogMode {
    Off,
    Dev,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Deep delete key-paths, then deep merge a patch
    Deep(commands::deep::DeepArgs),
    /// Remove top-level fields, then set the patch's top-level fields
    Shallow(commands::shallow::ShallowArgs),
    /// Run a JSON script of commands, all or nothing
    Apply(commands::apply::ApplyArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.log {
        LogMode::Off => {}
        LogMode::Dev => logging_facility::init(Profile::Development),
        LogMode::Json => logging_facility::init(Profile::Production),
    }

    let result = match cli.command {
        Commands::Deep(args) => commands::deep::execute(args),
        Commands::Shallow(args) => commands::shallow::execute(args),
        Commands::Apply(args) => commands::apply::execute(args),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
