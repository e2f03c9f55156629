//! Configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlossaConfig {
    /// Bundle loading.
    pub bundle: BundleSettings,
    /// Enum code generation.
    pub codegen: CodegenSettings,
}

/// Where bundles live and how they behave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleSettings {
    /// Base path of the bundle files, without locale suffix or extension.
    pub base_path: PathBuf,
    /// Locale to load (detected from the environment if unset).
    pub locale: Option<String>,
    /// Locale tried when the requested one has no specific file.
    pub fallback_locale: Option<String>,
    /// Fail on missing keys instead of returning `???key???`.
    pub exception_on_missing_key: bool,
    /// Format patterns without quote handling.
    pub simple_format: bool,
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("i18n/nls"),
            locale: None,
            fallback_locale: None,
            exception_on_missing_key: true,
            simple_format: false,
        }
    }
}

/// Settings for generated key enums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenSettings {
    /// Name of the generated enum.
    pub enum_name: String,
    /// Output file (stdout if unset).
    pub output: Option<PathBuf>,
}

impl Default for CodegenSettings {
    fn default() -> Self {
        Self {
            enum_name: "Nls".to_string(),
            output: None,
        }
    }
}
