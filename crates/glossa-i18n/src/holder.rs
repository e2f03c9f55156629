//! Holder for the active bundle.

use super::listeners::{Listener, Listeners};
use super::{I18nBundle, I18nError};
use std::fmt::Display;
use std::sync::Arc;
use tracing::debug;

/// Holds the active bundle and notifies listeners when it is replaced.
///
/// A holder starts empty. Lookups against an empty holder fail with
/// [`I18nError::DefaultBundleUnset`].
#[derive(Debug, Default)]
pub struct BundleHolder {
    bundle: Option<Arc<I18nBundle>>,
    listeners: Listeners,
}

impl BundleHolder {
    /// Create an empty holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a holder that already holds `bundle`. No listener is called.
    pub fn with_bundle(bundle: impl Into<Arc<I18nBundle>>) -> Self {
        Self {
            bundle: Some(bundle.into()),
            listeners: Listeners::new(),
        }
    }

    /// The current bundle, if one was set.
    pub fn get(&self) -> Option<Arc<I18nBundle>> {
        self.bundle.clone()
    }

    /// The current bundle, or an error if none was set.
    pub fn require(&self) -> Result<Arc<I18nBundle>, I18nError> {
        self.get().ok_or(I18nError::DefaultBundleUnset)
    }

    pub fn is_set(&self) -> bool {
        self.bundle.is_some()
    }

    /// Replace the bundle, then notify listeners in registration order.
    ///
    /// The new bundle stays in place even if a listener fails; the first
    /// failure is returned and the remaining listeners are skipped.
    pub fn set(&mut self, bundle: impl Into<Arc<I18nBundle>>) -> Result<(), I18nError> {
        let bundle = self.store(bundle.into());
        self.listeners.notify(&bundle)
    }

    /// Replace the bundle without notifying, returning it for the caller to announce.
    pub(crate) fn store(&mut self, bundle: Arc<I18nBundle>) -> Arc<I18nBundle> {
        debug!(
            locale = %bundle.locale(),
            listeners = self.listeners.len(),
            "default bundle reassigned"
        );
        self.bundle = Some(Arc::clone(&bundle));
        bundle
    }

    pub fn add_listener(&mut self, listener: Listener) {
        self.listeners.add(listener);
    }

    /// Remove the first registration of `listener`. Returns whether one was removed.
    pub fn remove_listener(&mut self, listener: &Listener) -> bool {
        self.listeners.remove(listener)
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Stored string for `key` in the held bundle.
    pub fn nls(&self, key: &str) -> Result<String, I18nError> {
        Ok(self.require()?.get(key)?)
    }

    /// Formatted string for `key` in the held bundle.
    pub fn nls_with(&self, key: &str, args: &[&dyn Display]) -> Result<String, I18nError> {
        Ok(self.require()?.format(key, args)?)
    }
}
