//! Bundle loading from `.properties` files.
//!
//! A base path such as `i18n/nls` maps to one file per locale:
//! `i18n/nls.properties` for the root locale and
//! `i18n/nls_de_AT.properties` for `de_AT`. Files found along the
//! candidate chain are linked as parents, root first.

use super::bundle::I18nBundle;
use super::detect::detect_locale;
use super::format::FormatStyle;
use super::{BundleError, Locale, Properties};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};

/// Loads bundles for a base path.
#[derive(Debug, Clone)]
pub struct BundleLoader {
    base_path: PathBuf,
    format_style: FormatStyle,
    exception_on_missing_key: bool,
    fallback_locale: Option<Locale>,
}

impl BundleLoader {
    /// Create a loader for the given base path (without `.properties`).
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            format_style: FormatStyle::default(),
            exception_on_missing_key: true,
            fallback_locale: None,
        }
    }

    pub fn with_format_style(mut self, style: FormatStyle) -> Self {
        self.format_style = style;
        self
    }

    pub fn with_exception_on_missing_key(mut self, enabled: bool) -> Self {
        self.exception_on_missing_key = enabled;
        self
    }

    /// Locale tried when nothing specific to the requested one exists.
    ///
    /// Defaults to the detected system locale.
    pub fn with_fallback_locale(mut self, locale: Locale) -> Self {
        self.fallback_locale = Some(locale);
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// File holding the messages of exactly `locale`.
    pub fn path_for(&self, locale: &Locale) -> PathBuf {
        let mut name = OsString::from(self.base_path.as_os_str());
        if !locale.is_root() {
            name.push("_");
            name.push(locale.to_string());
        }
        name.push(".properties");
        PathBuf::from(name)
    }

    /// Load the bundle for `locale`.
    ///
    /// If only the base file matches, the fallback locale is tried before
    /// settling for the base bundle.
    pub fn load(&self, locale: &Locale) -> Result<Arc<I18nBundle>, BundleError> {
        let fallback = self.fallback_locale.clone().unwrap_or_else(detect_locale);
        let mut targets = vec![locale.clone()];
        if fallback != *locale {
            targets.push(fallback);
        }

        let mut base_bundle = None;
        for target in &targets {
            if let Some(bundle) = self.load_chain(target)? {
                if !bundle.locale().is_root() || bundle.locale() == target {
                    debug!(
                        base = %self.base_path.display(),
                        requested = %locale,
                        resolved = %bundle.locale(),
                        "bundle loaded"
                    );
                    return Ok(bundle);
                }
                base_bundle.get_or_insert(bundle);
            }
        }

        base_bundle.ok_or_else(|| BundleError::ResourceNotFound {
            base: self.base_path.clone(),
            locale: locale.clone(),
        })
    }

    /// Load every existing file along the candidate chain of `locale`.
    fn load_chain(&self, locale: &Locale) -> Result<Option<Arc<I18nBundle>>, BundleError> {
        let mut current: Option<Arc<I18nBundle>> = None;

        for candidate in locale.candidates().into_iter().rev() {
            let path = self.path_for(&candidate);
            if !path.is_file() {
                trace!(path = %path.display(), "no bundle file");
                continue;
            }

            let properties = Properties::load(&path)?;
            debug!(path = %path.display(), entries = properties.len(), "read bundle file");

            let mut bundle = I18nBundle::new(candidate, properties)
                .with_format_style(self.format_style)
                .with_exception_on_missing_key(self.exception_on_missing_key);
            if let Some(parent) = current.take() {
                bundle = bundle.with_parent(parent);
            }
            current = Some(Arc::new(bundle));
        }

        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn fixtures() -> BundleLoader {
        let base = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data/i18n/nls");
        BundleLoader::new(base).with_fallback_locale(Locale::root())
    }

    #[test]
    fn test_path_for() {
        let loader = BundleLoader::new("i18n/nls");
        assert_eq!(loader.path_for(&Locale::root()), PathBuf::from("i18n/nls.properties"));
        assert_eq!(loader.path_for(&Locale::parse("de")), PathBuf::from("i18n/nls_de.properties"));
        assert_eq!(
            loader.path_for(&Locale::parse("de-AT")),
            PathBuf::from("i18n/nls_de_AT.properties")
        );
    }

    #[test]
    fn test_load_root() {
        let bundle = fixtures().load(&Locale::root()).unwrap();
        assert!(bundle.locale().is_root());
        assert_eq!(bundle.get("key").unwrap(), "Value.");
        assert!(bundle.parent().is_none());
    }

    #[test]
    fn test_load_chain_links_parents() {
        let bundle = fixtures().load(&Locale::parse("de_AT")).unwrap();
        assert_eq!(bundle.locale(), &Locale::parse("de_AT"));
        assert_eq!(bundle.get("greeting").unwrap(), "Servus, {0}!");
        assert_eq!(bundle.get("menu.title").unwrap(), "Hauptmenü");
        assert_eq!(bundle.get("menu.quit").unwrap(), "Quit");

        let parent = bundle.parent().unwrap();
        assert_eq!(parent.locale(), &Locale::parse("de"));
        assert!(parent.parent().unwrap().locale().is_root());
    }

    #[test]
    fn test_load_skips_missing_candidates() {
        let bundle = fixtures().load(&Locale::parse("pl_PL")).unwrap();
        assert_eq!(bundle.locale(), &Locale::parse("pl"));
        assert_eq!(bundle.get("key").unwrap(), "Wartość.");
        assert_eq!(
            bundle.format("args", &[&"dowolną liczbę", &10]).unwrap(),
            "Przyjmuje dowolną liczbę argumentów. 10!"
        );
    }

    #[test]
    fn test_unknown_locale_uses_fallback() {
        let bundle = fixtures()
            .with_fallback_locale(Locale::parse("de"))
            .load(&Locale::parse("ja_JP"))
            .unwrap();
        assert_eq!(bundle.locale(), &Locale::parse("de"));

        let bundle = fixtures().load(&Locale::parse("ja_JP")).unwrap();
        assert!(bundle.locale().is_root());
    }

    #[test]
    fn test_loader_options_propagate() {
        let bundle = fixtures()
            .with_exception_on_missing_key(false)
            .with_format_style(FormatStyle::Simple)
            .load(&Locale::parse("de"))
            .unwrap();

        assert_eq!(bundle.format_style(), FormatStyle::Simple);
        assert_eq!(bundle.get("nope").unwrap(), "???nope???");
        assert!(!bundle.parent().unwrap().exception_on_missing_key());
    }

    #[test]
    fn test_missing_resource() {
        let dir = tempdir().unwrap();
        let loader = BundleLoader::new(dir.path().join("absent")).with_fallback_locale(Locale::root());

        match loader.load(&Locale::parse("en")) {
            Err(BundleError::ResourceNotFound { base, locale }) => {
                assert_eq!(base, dir.path().join("absent"));
                assert_eq!(locale, Locale::parse("en"));
            }
            other => panic!("Expected ResourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_propagates() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.properties"), "ok=1\nbad=\\u00\n").unwrap();

        let result = BundleLoader::new(dir.path().join("broken"))
            .with_fallback_locale(Locale::root())
            .load(&Locale::root());
        assert!(matches!(result, Err(BundleError::Parse { line: 2, .. })));
    }
}
