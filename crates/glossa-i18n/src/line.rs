//! Typed bundle keys.

use super::default::require_default_bundle;
use super::lookup;
use super::{BundleError, I18nBundle, I18nError};
use std::fmt::Display;
use std::sync::Arc;

/// A value that names a bundle key.
///
/// Usually implemented by enums declared with [`bundle_lines!`](crate::bundle_lines),
/// where each variant is one key of a properties file. Lookups go to the
/// default bundle unless [`bundle`](BundleLine::bundle) is overridden.
pub trait BundleLine {
    /// Key of this line in the bundle.
    fn key(&self) -> &str;

    /// Bundle this line is resolved against.
    fn bundle(&self) -> Result<Arc<I18nBundle>, I18nError> {
        require_default_bundle()
    }

    /// Stored string for this line.
    fn nls(&self) -> Result<String, I18nError> {
        let bundle = self.bundle()?;
        lookup::nls_in(&bundle, self.key())
    }

    /// Formatted string for this line.
    fn nls_with(&self, args: &[&dyn Display]) -> Result<String, I18nError> {
        let bundle = self.bundle()?;
        lookup::nls_with_in(&bundle, self.key(), args)
    }

    /// Stored string for this line in `bundle`.
    fn nls_in(&self, bundle: &I18nBundle) -> Result<String, I18nError> {
        lookup::nls_in(bundle, self.key())
    }

    /// Formatted string for this line in `bundle`.
    fn nls_with_in(&self, bundle: &I18nBundle, args: &[&dyn Display]) -> Result<String, I18nError> {
        lookup::nls_with_in(bundle, self.key(), args)
    }
}

/// Lookups of typed lines directly on a bundle.
pub trait BundleExt {
    fn line<L: BundleLine + ?Sized>(&self, line: &L) -> Result<String, BundleError>;

    fn line_with<L: BundleLine + ?Sized>(
        &self,
        line: &L,
        args: &[&dyn Display],
    ) -> Result<String, BundleError>;
}

impl BundleExt for I18nBundle {
    fn line<L: BundleLine + ?Sized>(&self, line: &L) -> Result<String, BundleError> {
        self.get(line.key())
    }

    fn line_with<L: BundleLine + ?Sized>(
        &self,
        line: &L,
        args: &[&dyn Display],
    ) -> Result<String, BundleError> {
        self.format(line.key(), args)
    }
}

/// Declare an enum whose variants are bundle keys.
///
/// A variant's key is its name, or the string literal given after `=`.
/// The enum derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash`,
/// implements [`BundleLine`] and `Display` (the key), and exposes `ALL`.
///
/// ```
/// glossa_i18n::bundle_lines! {
///     /// Keys of `nls.properties`.
///     pub enum Nls {
///         Key,
///         MenuTitle = "menu.title",
///     }
/// }
///
/// use glossa_i18n::BundleLine;
/// assert_eq!(Nls::Key.key(), "Key");
/// assert_eq!(Nls::MenuTitle.to_string(), "menu.title");
/// assert_eq!(Nls::ALL, &[Nls::Key, Nls::MenuTitle]);
/// ```
#[macro_export]
macro_rules! bundle_lines {
    (@key $variant:ident) => {
        stringify!($variant)
    };
    (@key $variant:ident $key:literal) => {
        $key
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $key:literal)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every line, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl $crate::BundleLine for $name {
            fn key(&self) -> &str {
                match self {
                    $($name::$variant => $crate::bundle_lines!(@key $variant $($key)?),)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::BundleLine::key(self))
            }
        }
    };
}
