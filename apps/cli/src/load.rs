use std::fs;
use std::path::Path;

use lab_site_core::{settle, Section, Settled, SiteError};
use log::debug;

/// Reads and parses a section's document from `data_dir`.
pub fn read_document<S: Section>(data_dir: &Path) -> Result<S::Document, SiteError> {
    let path = data_dir.join(S::RESOURCE.file_name());
    debug!("event=read_document section={} path={}", S::RESOURCE, path.display());

    let text = fs::read_to_string(&path).map_err(|source| SiteError::Io {
        path: path.clone(),
        source,
    })?;
    S::parse(&text)
}

/// Runs a section against files on disk, exactly as the page would.
pub fn load<S: Section>(data_dir: &Path) -> Settled<S::View> {
    settle::<S>(read_document::<S>(data_dir))
}
