//! Locale-scoped message bundles for Glossa.
//!
//! A bundle maps string keys to message patterns loaded from
//! `.properties` files and formats them with positional arguments:
//!
//! ```
//! use glossa_bundle::{I18nBundle, Locale};
//!
//! let bundle = I18nBundle::from_properties(
//!     Locale::parse("en"),
//!     "greeting=Hello, {0}!",
//! ).unwrap();
//!
//! assert_eq!(bundle.format("greeting", &[&"World"]).unwrap(), "Hello, World!");
//! ```

pub mod bundle;
pub mod detect;
pub mod format;
pub mod loader;
pub mod locale;
pub mod properties;

use std::path::PathBuf;

/// Bundle errors.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("can't find bundle key {key} for locale '{locale}'")]
    MissingKey { key: String, locale: Locale },

    #[error("can't find bundle for base path {} and locale '{locale}'", base.display())]
    ResourceNotFound { base: PathBuf, locale: Locale },

    #[error("invalid properties at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid message pattern {pattern:?}: {message}")]
    InvalidFormat { pattern: String, message: String },

    #[error("failed to read bundle file: {0}")]
    Io(#[from] std::io::Error),
}

pub use bundle::I18nBundle;
pub use detect::{detect_locale, detect_locale_with_override};
pub use format::{format_message, FormatStyle};
pub use loader::BundleLoader;
pub use locale::Locale;
pub use properties::Properties;
