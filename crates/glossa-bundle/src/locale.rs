//! Locale identifiers and bundle candidate chains.

use std::fmt;

/// A locale made of language, country and variant parts.
///
/// Any part may be empty. The locale with all parts empty is the root
/// locale, which selects the base bundle file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Locale {
    language: String,
    country: String,
    variant: String,
}

impl Locale {
    /// Create a locale from its parts, normalising case.
    pub fn new(
        language: impl AsRef<str>,
        country: impl AsRef<str>,
        variant: impl AsRef<str>,
    ) -> Self {
        Self {
            language: language.as_ref().trim().to_lowercase(),
            country: country.as_ref().trim().to_uppercase(),
            variant: variant.as_ref().trim().to_string(),
        }
    }

    /// The root locale.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse from a locale string (e.g., "en", "en-US", "de_DE_POSIX", "fr_FR.UTF-8").
    ///
    /// Encoding suffixes and `@` modifiers are ignored. An empty string
    /// yields the root locale.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        let s = s.split(['.', '@']).next().unwrap_or_default();
        let normalized = s.replace('-', "_");
        let mut parts = normalized.splitn(3, '_');

        let language = parts.next().unwrap_or_default();
        let country = parts.next().unwrap_or_default();
        let variant = parts.next().unwrap_or_default();

        Self::new(language, country, variant)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// Whether this is the root locale.
    pub fn is_root(&self) -> bool {
        self.language.is_empty() && self.country.is_empty() && self.variant.is_empty()
    }

    /// Bundle lookup chain, most specific first, always ending at the root.
    ///
    /// `de_DE_POSIX` yields `de_DE_POSIX`, `de_DE`, `de`, root.
    pub fn candidates(&self) -> Vec<Locale> {
        let mut chain = Vec::with_capacity(4);

        if !self.variant.is_empty() {
            chain.push(self.clone());
        }
        if !self.country.is_empty() {
            chain.push(Self::new(&self.language, &self.country, ""));
        }
        if !self.language.is_empty() {
            chain.push(Self::new(&self.language, "", ""));
        }
        chain.push(Self::root());

        chain
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if !self.country.is_empty() || !self.variant.is_empty() {
            write!(f, "_{}", self.country)?;
        }
        if !self.variant.is_empty() {
            write!(f, "_{}", self.variant)?;
        }
        Ok(())
    }
}

impl From<&str> for Locale {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
