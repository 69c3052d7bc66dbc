//! Lookup trait definitions for external data sources

use crate::model::{LocationDetails, ZipCode};
use draftload_types::Error;

/// ZIP code → location lookup (geocoding service, local directory, ...)
pub trait Geocoder {
    /// Resolve a ZIP code. `Ok(None)` means the lookup worked but found nothing.
    fn lookup(&self, zip: &ZipCode) -> Result<Option<LocationDetails>, Error>;
}
