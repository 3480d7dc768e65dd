//! Shallow transmute command

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use transmute_core::{apply, Command, Seg};

use super::{parse_json, IoArgs};

#[derive(Debug, Args)]
pub struct ShallowArgs {
    /// Top-level field to remove (repeatable)
    #[arg(long = "remove", value_name = "FIELD")]
    pub remove: Vec<String>,

    /// JSON object whose top-level fields are set after removal
    #[arg(long, value_name = "JSON", value_parser = parse_json, default_value = "{}")]
    pub patch: Value,

    /// Transmute every element of a top-level array
    #[arg(long)]
    pub each: bool,

    #[command(flatten)]
    pub io: IoArgs,
}

pub fn execute(args: ShallowArgs) -> Result<()> {
    let mut document = args.io.read_document()?;

    let remove: Vec<Seg> = args.remove.into_iter().map(Seg::Key).collect();
    let command = if args.each {
        Command::TransmuteShallowEach {
            remove,
            add: args.patch,
        }
    } else {
        Command::TransmuteShallow {
            remove,
            add: args.patch,
        }
    };
    apply(&mut document, command)?;

    args.io.write_document(&document)
}
