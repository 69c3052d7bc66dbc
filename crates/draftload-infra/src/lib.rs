//! Infrastructure layer - geocoder implementations backed by local data

pub mod zip_directory;

pub use zip_directory::CsvZipDirectory;
