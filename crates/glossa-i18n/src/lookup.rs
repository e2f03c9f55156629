//! Lookup helpers.
//!
//! Each helper forwards to the bundle unchanged: a missing key or a bad
//! pattern surfaces as the bundle's own [`BundleError`](crate::BundleError).

use super::default::require_default_bundle;
use super::{I18nBundle, I18nError};
use std::fmt::Display;

/// Stored string for `key` in the default bundle.
pub fn nls(key: &str) -> Result<String, I18nError> {
    let bundle = require_default_bundle()?;
    nls_in(&bundle, key)
}

/// Formatted string for `key` in the default bundle.
pub fn nls_with(key: &str, args: &[&dyn Display]) -> Result<String, I18nError> {
    let bundle = require_default_bundle()?;
    nls_with_in(&bundle, key, args)
}

/// Stored string for `key` in `bundle`.
pub fn nls_in(bundle: &I18nBundle, key: &str) -> Result<String, I18nError> {
    Ok(bundle.get(key)?)
}

/// Formatted string for `key` in `bundle`.
pub fn nls_with_in(
    bundle: &I18nBundle,
    key: &str,
    args: &[&dyn Display],
) -> Result<String, I18nError> {
    Ok(bundle.format(key, args)?)
}
