//! Subcommand implementations and shared document I/O

pub mod apply;
pub mod deep;
pub mod shallow;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Where the document comes from and where the result goes
#[derive(Debug, Args)]
pub struct IoArgs {
    /// Input JSON file (defaults to stdin)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl IoArgs {
    pub fn read_document(&self) -> Result<Value> {
        let text = match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?,
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("reading stdin")?;
                text
            }
        };
        serde_json::from_str(&text).context("input is not valid JSON")
    }

    pub fn write_document(&self, document: &Value) -> Result<()> {
        let mut text = serde_json::to_string_pretty(document)?;
        text.push('\n');
        match &self.output {
            Some(path) => std::fs::write(path, text)
                .with_context(|| format!("writing {}", path.display()))?,
            None => std::io::stdout()
                .lock()
                .write_all(text.as_bytes())
                .context("writing stdout")?,
        }
        Ok(())
    }
}

/// clap value parser for inline JSON arguments
pub fn parse_json(text: &str) -> std::result::Result<Value, String> {
    serde_json::from_str(text).map_err(|e| format!("invalid JSON: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_json_accepts_objects_and_scalars() {
        assert_eq!(parse_json(r#"{"a": [1]}"#).unwrap(), json!({"a": [1]}));
        assert_eq!(parse_json("3").unwrap(), json!(3));
    }

    #[test]
    fn test_parse_json_reports_syntax_errors() {
        let err = parse_json("{a:").unwrap_err();
        assert!(err.starts_with("invalid JSON"));
    }
}
