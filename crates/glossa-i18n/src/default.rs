//! Default bundle, one per thread.
//!
//! Each thread owns its own default [`BundleHolder`], matching the
//! single-threaded usage of UI and game loops. A bundle set on one thread
//! is not visible from another: there, lookups fail with
//! [`I18nError::DefaultBundleUnset`] until that thread sets its own.
//! Bundles themselves are `Send + Sync`, so the same `Arc<I18nBundle>` can
//! be set on several threads.

use super::holder::BundleHolder;
use super::listeners::Listener;
use super::{I18nBundle, I18nError};
use std::cell::RefCell;
use std::sync::Arc;

thread_local! {
    static DEFAULT: RefCell<BundleHolder> = RefCell::new(BundleHolder::new());
}

/// Run `f` with the default holder of this thread.
///
/// The holder stays borrowed while `f` runs, so `f` must not notify listeners.
pub(crate) fn with_default_holder<T>(f: impl FnOnce(&mut BundleHolder) -> T) -> T {
    DEFAULT.with(|holder| f(&mut holder.borrow_mut()))
}

/// The default bundle, if one was set.
pub fn default_bundle() -> Option<Arc<I18nBundle>> {
    DEFAULT.with(|holder| holder.borrow().get())
}

/// The default bundle, or [`I18nError::DefaultBundleUnset`].
pub fn require_default_bundle() -> Result<Arc<I18nBundle>, I18nError> {
    DEFAULT.with(|holder| holder.borrow().require())
}

/// Replace the default bundle and notify its listeners.
///
/// Listeners run after the holder is released, so they may read the
/// default bundle or register further listeners. Those take effect from
/// the next reassignment.
pub fn set_default_bundle(bundle: impl Into<Arc<I18nBundle>>) -> Result<(), I18nError> {
    let bundle = bundle.into();
    let listeners = DEFAULT.with(|holder| {
        let mut holder = holder.borrow_mut();
        holder.store(Arc::clone(&bundle));
        holder.listeners().clone()
    });
    listeners.notify(&bundle)
}

/// Register a listener on the default holder.
pub fn add_listener(listener: Listener) {
    with_default_holder(|holder| holder.add_listener(listener));
}

/// Remove the first registration of `listener` from the default holder.
pub fn remove_listener(listener: &Listener) -> bool {
    with_default_holder(|holder| holder.remove_listener(listener))
}

/// Drop every listener of the default holder.
pub fn clear_listeners() {
    with_default_holder(|holder| holder.clear_listeners());
}
