//! Command implementations.

mod generate;
mod keys;
mod lookup;

pub use generate::GenerateCommand;
pub use keys::KeysCommand;
pub use lookup::LookupCommand;

use std::path::PathBuf;

use glossa_common_config::GlossaConfig;

/// The base bundle file named by the configuration.
pub(crate) fn default_bundle_file(config: &GlossaConfig) -> PathBuf {
    let mut path = config.bundle.base_path.clone().into_os_string();
    path.push(".properties");
    PathBuf::from(path)
}
