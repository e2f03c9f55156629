//! Lookup command implementation.

use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueHint};
use glossa_bundle::{detect_locale, BundleLoader, FormatStyle, Locale};
use glossa_i18n::I18nBundle;
use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Look up a message, formatting any arguments into it
#[derive(Debug, Parser)]
pub struct LookupCommand {
    /// Bundle key
    pub key: String,

    /// Message arguments, substituted for `{0}`, `{1}`, ...
    pub args: Vec<String>,

    /// Locale to load (defaults to the configured or detected locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Bundle base path, without the `.properties` suffix
    #[arg(short, long, value_hint = ValueHint::AnyPath)]
    pub bundle: Option<PathBuf>,
}

#[derive(Serialize)]
struct LookupResult<'a> {
    key: &'a str,
    locale: String,
    message: &'a str,
}

impl LookupCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let settings = &ctx.config.bundle;
        let base_path = self.bundle.as_ref().unwrap_or(&settings.base_path);

        let locale = match self.locale.as_deref().or(settings.locale.as_deref()) {
            Some(tag) => Locale::parse(tag),
            None => detect_locale(),
        };

        let style = if settings.simple_format {
            FormatStyle::Simple
        } else {
            FormatStyle::MessageFormat
        };
        let mut loader = BundleLoader::new(base_path)
            .with_format_style(style)
            .with_exception_on_missing_key(settings.exception_on_missing_key);
        if let Some(fallback) = &settings.fallback_locale {
            loader = loader.with_fallback_locale(Locale::parse(fallback));
        }

        glossa_i18n::add_listener(glossa_i18n::listener(|bundle: &Arc<I18nBundle>| {
            tracing::info!(locale = %bundle.locale(), "default bundle changed");
            Ok(())
        }));
        glossa_i18n::set_default_bundle(loader.load(&locale)?)?;

        let message = if self.args.is_empty() {
            glossa_i18n::nls(&self.key)?
        } else {
            let args: Vec<&dyn Display> = self.args.iter().map(|a| a as &dyn Display).collect();
            glossa_i18n::nls_with(&self.key, &args)?
        };

        match ctx.format {
            OutputFormat::Text => println!("{message}"),
            OutputFormat::Json => {
                let resolved = glossa_i18n::require_default_bundle()?.locale().to_string();
                let result = LookupResult {
                    key: &self.key,
                    locale: resolved,
                    message: &message,
                };
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }

        Ok(())
    }
}
