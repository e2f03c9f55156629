//! Bundle reassignment listeners.

use super::{I18nBundle, I18nError, ListenerError};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use tracing::trace;

/// Outcome of a listener call. An error stops the notification.
pub type ListenerResult = Result<(), ListenerError>;

/// Callback invoked with the new bundle whenever the holder is reassigned.
///
/// Listeners are compared by identity: removing a listener removes the
/// entry that shares its allocation.
pub type Listener = Rc<dyn Fn(&Arc<I18nBundle>) -> ListenerResult>;

/// Wrap a closure as a [`Listener`].
pub fn listener<F>(f: F) -> Listener
where
    F: Fn(&Arc<I18nBundle>) -> ListenerResult + 'static,
{
    Rc::new(f)
}

/// Ordered listener registry.
#[derive(Clone, Default)]
pub struct Listeners {
    entries: Vec<Listener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener. Adding the same listener twice calls it twice.
    pub fn add(&mut self, listener: Listener) {
        self.entries.push(listener);
    }

    /// Remove the first entry identical to `listener`.
    ///
    /// Returns `false` if it was not registered.
    pub fn remove(&mut self, listener: &Listener) -> bool {
        let position = self
            .entries
            .iter()
            .position(|entry| std::ptr::addr_eq(Rc::as_ptr(entry), Rc::as_ptr(listener)));

        match position {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Call every listener with `bundle`, in registration order.
    ///
    /// Stops at the first failing listener; later listeners are not called.
    pub fn notify(&self, bundle: &Arc<I18nBundle>) -> Result<(), I18nError> {
        for (index, listener) in self.entries.iter().enumerate() {
            trace!(index, locale = %bundle.locale(), "notifying bundle listener");
            listener(bundle).map_err(|source| I18nError::Listener { index, source })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish()
    }
}
