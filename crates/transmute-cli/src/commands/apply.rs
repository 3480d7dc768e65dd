//! Script command: replay a JSON list of commands

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use transmute_core::{apply_all, Command};

use super::IoArgs;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// JSON file holding an array of commands
    #[arg(long)]
    pub script: PathBuf,

    #[command(flatten)]
    pub io: IoArgs,
}

pub fn execute(args: ApplyArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading script {}", args.script.display()))?;
    let commands: Vec<Command> = serde_json::from_str(&text)
        .with_context(|| format!("invalid script {}", args.script.display()))?;

    let mut document = args.io.read_document()?;
    apply_all(&mut document, commands)?;

    args.io.write_document(&document)
}
