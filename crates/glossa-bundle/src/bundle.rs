//! Locale-scoped message bundle.

use super::format::{format_message, FormatStyle};
use super::{BundleError, Locale, Properties};
use std::collections::HashSet;
use std::fmt::Display;
use std::sync::Arc;
use tracing::debug;

/// Messages for one locale, backed by an optional parent bundle.
///
/// Lookups search this bundle first and then walk the parent chain, so a
/// `de_DE` bundle only needs the keys that differ from its `de` parent.
#[derive(Debug, Clone)]
pub struct I18nBundle {
    locale: Locale,
    properties: Properties,
    parent: Option<Arc<I18nBundle>>,
    format_style: FormatStyle,
    exception_on_missing_key: bool,
}

impl I18nBundle {
    /// Create a bundle with no parent.
    pub fn new(locale: Locale, properties: Properties) -> Self {
        Self {
            locale,
            properties,
            parent: None,
            format_style: FormatStyle::default(),
            exception_on_missing_key: true,
        }
    }

    /// Create a bundle from properties text.
    pub fn from_properties(locale: Locale, content: &str) -> Result<Self, BundleError> {
        Ok(Self::new(locale, Properties::parse(content)?))
    }

    /// Set the bundle consulted for keys this one lacks.
    pub fn with_parent(mut self, parent: Arc<I18nBundle>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_format_style(mut self, style: FormatStyle) -> Self {
        self.format_style = style;
        self
    }

    /// When disabled, missing keys resolve to `???key???` instead of an error.
    pub fn with_exception_on_missing_key(mut self, enabled: bool) -> Self {
        self.exception_on_missing_key = enabled;
        self
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn parent(&self) -> Option<&Arc<I18nBundle>> {
        self.parent.as_ref()
    }

    pub fn format_style(&self) -> FormatStyle {
        self.format_style
    }

    pub fn exception_on_missing_key(&self) -> bool {
        self.exception_on_missing_key
    }

    /// Raw pattern for `key`, searching the parent chain.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut bundle = Some(self);
        while let Some(current) = bundle {
            if let Some(value) = current.properties.get(key) {
                return Some(value);
            }
            bundle = current.parent.as_deref();
        }
        None
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Get the stored string for `key`, unformatted.
    pub fn get(&self, key: &str) -> Result<String, BundleError> {
        match self.lookup(key) {
            Some(value) => Ok(value.to_string()),
            None if self.exception_on_missing_key => Err(BundleError::MissingKey {
                key: key.to_string(),
                locale: self.locale.clone(),
            }),
            None => {
                debug!(key, locale = %self.locale, "missing bundle key");
                Ok(format!("???{key}???"))
            }
        }
    }

    /// Get the string for `key` with positional arguments substituted.
    pub fn format(&self, key: &str, args: &[&dyn Display]) -> Result<String, BundleError> {
        let pattern = self.get(key)?;
        format_message(&pattern, args, self.format_style)
    }

    /// All resolvable keys, each once, own keys first.
    pub fn keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut keys = Vec::new();
        let mut bundle = Some(self);

        while let Some(current) = bundle {
            for key in current.properties.keys() {
                if seen.insert(key) {
                    keys.push(key);
                }
            }
            bundle = current.parent.as_deref();
        }

        keys
    }
}
