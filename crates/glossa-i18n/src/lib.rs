//! Ergonomic access to Glossa bundles.
//!
//! This crate does not parse or format anything itself. It keeps track of
//! a default [`I18nBundle`], tells registered listeners when it is replaced,
//! and forwards lookups to the bundle:
//!
//! ```
//! use glossa_i18n::{bundle_lines, nls, set_default_bundle, BundleLine, I18nBundle, Locale};
//!
//! bundle_lines! {
//!     pub enum Nls {
//!         Greeting,
//!         MenuTitle = "menu.title",
//!     }
//! }
//!
//! let bundle = I18nBundle::from_properties(
//!     Locale::root(),
//!     "Greeting=Hello, {0}!\nmenu.title=Main menu",
//! )?;
//! set_default_bundle(bundle)?;
//!
//! assert_eq!(Nls::MenuTitle.nls()?, "Main menu");
//! assert_eq!(Nls::Greeting.nls_with(&[&"World"])?, "Hello, World!");
//! assert_eq!(nls!("Greeting", "again")?, "Hello, again!");
//! # Ok::<(), glossa_i18n::I18nError>(())
//! ```
//!
//! The default bundle lives in a per-thread [`BundleHolder`]. Applications
//! that prefer explicit wiring can own a `BundleHolder` and pass it around
//! instead.

pub mod default;
pub mod holder;
pub mod line;
pub mod listeners;
pub mod lookup;

pub use glossa_bundle::{BundleError, FormatStyle, I18nBundle, Locale};

/// Error returned by a listener to abort notification.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// i18n errors.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("default bundle is not set")]
    DefaultBundleUnset,

    #[error(transparent)]
    Bundle(#[from] BundleError),

    #[error("bundle listener #{index} failed: {source}")]
    Listener {
        index: usize,
        #[source]
        source: ListenerError,
    },
}

pub use default::{
    add_listener, clear_listeners, default_bundle, remove_listener, require_default_bundle,
    set_default_bundle,
};
pub use holder::BundleHolder;
pub use line::{BundleExt, BundleLine};
pub use listeners::{listener, Listener, ListenerResult, Listeners};
pub use lookup::{nls, nls_in, nls_with, nls_with_in};

/// Look up a key in the default bundle, formatting any trailing arguments.
///
/// `nls!("key")` is [`nls`], `nls!("key", a, b)` is [`nls_with`].
#[macro_export]
macro_rules! nls {
    ($key:expr) => {
        $crate::nls($key)
    };
    ($key:expr, $($arg:expr),+ $(,)?) => {
        $crate::nls_with($key, &[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}
