//! Keys command implementation.

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use glossa_bundle::{BundleError, Properties};
use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// List the keys of a bundle file, in file order
#[derive(Debug, Parser)]
pub struct KeysCommand {
    /// Bundle file to read (defaults to the configured base bundle)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Print each key with its message
    #[arg(long)]
    pub values: bool,
}

#[derive(Serialize)]
struct KeyEntry<'a> {
    key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a str>,
}

impl KeysCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let file = self
            .file
            .clone()
            .unwrap_or_else(|| super::default_bundle_file(&ctx.config));
        let properties = Properties::load(&file).map_err(|e| match e {
            BundleError::Io(source) => CliError::io_with_path(source, &file),
            other => other.into(),
        })?;
        tracing::debug!(path = %file.display(), keys = properties.len(), "listing keys");

        match ctx.format {
            OutputFormat::Text => {
                for (key, value) in properties.iter() {
                    if self.values {
                        println!("{key} = {value}");
                    } else {
                        println!("{key}");
                    }
                }
            }
            OutputFormat::Json => {
                let entries: Vec<_> = properties
                    .iter()
                    .map(|(key, value)| KeyEntry {
                        key,
                        value: self.values.then_some(value),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
        }

        Ok(())
    }
}
