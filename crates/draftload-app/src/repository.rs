//! Geocoder adapters

use std::path::Path;

use draftload_infra::CsvZipDirectory;
use draftload_types::{ConfigError, Result};

use crate::config::Config;

/// Open the ZIP directory named in config
pub fn open_zip_directory(config: &Config) -> Result<CsvZipDirectory> {
    let path = config
        .zip_directory
        .as_deref()
        .ok_or(ConfigError::ZipDirectoryNotSet)?;
    open_zip_directory_at(path)
}

/// Open a ZIP directory CSV at a custom path
pub fn open_zip_directory_at(path: &Path) -> Result<CsvZipDirectory> {
    CsvZipDirectory::load_from_file(path)
}
