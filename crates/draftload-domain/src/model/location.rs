//! Pickup/delivery location types

use std::fmt;
use std::str::FromStr;

use draftload_types::Error;
use serde::{Deserialize, Serialize};

/// A five-digit US ZIP code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZipCode(String);

impl ZipCode {
    /// Accepts exactly five ASCII digits, nothing else (no trimming, no ZIP+4).
    pub fn parse(s: &str) -> Option<Self> {
        (s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit())).then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ZipCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::InvalidZipCode(s.to_string()))
    }
}

impl TryFrom<String> for ZipCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ZipCode> for String {
    fn from(zip: ZipCode) -> Self {
        zip.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Longitude/latitude pair (map order: lng first)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// Result of a ZIP code lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDetails {
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl LocationDetails {
    /// "City, ST"
    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}
