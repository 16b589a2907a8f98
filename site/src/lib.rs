pub mod catalog;
pub mod collector;
pub mod config;
pub mod discover;
pub mod emitter;
pub mod error;

pub use catalog::{Catalog, Entry, Links};
pub use collector::{Example, SourceFile, collect};
pub use config::SiteConfig;
pub use emitter::emit;
pub use error::SiteError;

use tracing::debug;

use exemplar::Manifest;

/// Read the manifest text. A missing manifest is fatal.
pub fn read_manifest(config: &SiteConfig) -> Result<String, SiteError> {
    std::fs::read_to_string(&config.manifest).map_err(|e| SiteError::io(&config.manifest, e))
}

/// Parse manifest text read with `read_manifest`. Warnings stay on the manifest.
pub fn parse_manifest(source: &str, file_id: usize) -> Result<Manifest, SiteError> {
    let manifest = Manifest::parse(source, file_id).map_err(SiteError::Manifest)?;
    debug!(
        "manifest: {} examples, {} warnings",
        manifest.len(),
        manifest.warnings.len()
    );
    Ok(manifest)
}

/// Collect the catalog and write the site.
pub fn generate(config: &SiteConfig, manifest: &Manifest) -> Result<Catalog, SiteError> {
    let catalog = collect(config, manifest)?;
    emit(config, &catalog)?;
    Ok(catalog)
}
