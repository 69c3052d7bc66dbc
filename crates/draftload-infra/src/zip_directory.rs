//! CSV-backed ZIP code directory
//!
//! Expected columns (header row optional):
//! zip, city, state, [longitude], [latitude]

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use draftload_domain::model::{Coordinates, LocationDetails, ZipCode};
use draftload_domain::repository::Geocoder;
use draftload_types::{Error, Result};

/// In-memory ZIP → location table loaded from CSV
#[derive(Debug, Default)]
pub struct CsvZipDirectory {
    entries: HashMap<ZipCode, LocationDetails>,
}

impl CsvZipDirectory {
    /// Load a directory from a CSV file on disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(format!(
                "ZIP directory not found: {}",
                path.display()
            )));
        }
        let file = std::fs::File::open(path)?;
        let directory = Self::from_reader(file)?;
        debug!(path = %path.display(), entries = directory.len(), "loaded ZIP directory");
        Ok(directory)
    }

    /// Load a directory from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut entries = HashMap::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            match parse_record(&record) {
                Some((zip, details)) => {
                    entries.insert(zip, details);
                }
                None if index == 0 => debug!("skipping ZIP directory header row"),
                None => debug!(line = index + 1, "skipping malformed ZIP directory row"),
            }
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_record(record: &StringRecord) -> Option<(ZipCode, LocationDetails)> {
    if record.len() < 3 {
        return None;
    }
    let zip = ZipCode::parse(record.get(0)?)?;
    let city = record.get(1)?.to_string();
    let state = record.get(2)?.to_string();
    let longitude = record.get(3).and_then(|s| s.parse::<f64>().ok());
    let latitude = record.get(4).and_then(|s| s.parse::<f64>().ok());
    let coordinates = match (longitude, latitude) {
        (Some(lng), Some(lat)) => Some(Coordinates::new(lng, lat)),
        _ => None,
    };

    let details = LocationDetails {
        city,
        state,
        zip_code: zip.to_string(),
        coordinates,
    };
    Some((zip, details))
}

impl Geocoder for CsvZipDirectory {
    fn lookup(&self, zip: &ZipCode) -> Result<Option<LocationDetails>> {
        Ok(self.entries.get(zip).cloned())
    }
}
