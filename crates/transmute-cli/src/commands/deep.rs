//! Deep transmute command

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use transmute_core::{apply, Command, KeyPath};

use super::{parse_json, IoArgs};

#[derive(Debug, Args)]
pub struct DeepArgs {
    /// Key-path to delete, e.g. `meta.draft` or `items[0].tmp` (repeatable)
    #[arg(long = "remove", value_name = "PATH")]
    pub remove: Vec<KeyPath>,

    /// JSON patch deep-merged after deletion
    #[arg(long, value_name = "JSON", value_parser = parse_json, default_value = "{}")]
    pub patch: Value,

    /// Transmute every element of a top-level array
    #[arg(long)]
    pub each: bool,

    #[command(flatten)]
    pub io: IoArgs,
}

pub fn execute(args: DeepArgs) -> Result<()> {
    let mut document = args.io.read_document()?;

    let command = if args.each {
        Command::TransmuteDeepEach {
            remove: args.remove,
            add: args.patch,
        }
    } else {
        Command::TransmuteDeep {
            remove: args.remove,
            add: args.patch,
        }
    };
    apply(&mut document, command)?;

    args.io.write_document(&document)
}
