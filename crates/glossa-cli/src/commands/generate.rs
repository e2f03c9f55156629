//! Generate command implementation.

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use glossa_bundle::{BundleError, Properties};
use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat};
use crate::codegen;
use crate::error::CliError;

/// Generate a `bundle_lines!` enum from a bundle file
#[derive(Debug, Parser)]
pub struct GenerateCommand {
    /// Bundle file to read (defaults to the configured base bundle)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Name of the generated enum
    #[arg(short, long)]
    pub name: Option<String>,

    /// Write the enum to this file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct GenerateReport<'a> {
    source: String,
    enum_name: &'a str,
    keys: usize,
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
}

impl GenerateCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let file = self
            .file
            .clone()
            .unwrap_or_else(|| super::default_bundle_file(&ctx.config));
        let enum_name = self
            .name
            .as_deref()
            .unwrap_or(&ctx.config.codegen.enum_name);
        if !glossa_common_config::is_identifier(enum_name) {
            return Err(CliError::validation(
                format!("enum name must be a Rust identifier, got {enum_name:?}"),
                Some("name"),
            ));
        }
        let output = self.output.as_ref().or(ctx.config.codegen.output.as_ref());

        let properties = Properties::load(&file).map_err(|e| match e {
            BundleError::Io(source) => CliError::io_with_path(source, &file),
            other => other.into(),
        })?;
        let source_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        let code = codegen::generate_enum(enum_name, &source_name, properties.keys())?;

        match output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).map_err(|e| CliError::io_with_path(e, parent))?;
                }
                std::fs::write(path, &code).map_err(|e| CliError::io_with_path(e, path))?;
                tracing::info!(path = %path.display(), enum_name, "wrote key enum");
            }
            None if ctx.format == OutputFormat::Text => print!("{code}"),
            None => {}
        }

        if ctx.format == OutputFormat::Json {
            let report = GenerateReport {
                source: file.display().to_string(),
                enum_name,
                keys: properties.len(),
                output: output.map(|p| p.display().to_string()),
                code: output.is_none().then_some(code.as_str()),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Ok(())
    }
}
