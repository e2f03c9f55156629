//! Load the fixture bundle for a locale and print a few messages.
//!
//! Run with `cargo run -p glossa-bundle --example basic -- de_AT`.

use glossa_bundle::{detect_locale, BundleLoader, Locale};
use std::path::PathBuf;

fn main() -> Result<(), glossa_bundle::BundleError> {
    let locale = std::env::args()
        .nth(1)
        .map(|s| Locale::parse(&s))
        .unwrap_or_else(detect_locale);

    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data/i18n/nls");
    let bundle = BundleLoader::new(base).load(&locale)?;

    println!("Requested locale: '{}', resolved: '{}'", locale, bundle.locale());
    println!("{}", bundle.get("menu.title")?);
    println!("{}", bundle.format("greeting", &[&"Glossa"])?);
    println!("{}", bundle.format("args", &[&"any", &10])?);

    for key in bundle.keys() {
        println!("  {key}");
    }

    Ok(())
}
