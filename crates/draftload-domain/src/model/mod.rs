//! Domain model types

pub mod draft;
pub mod location;
pub mod metrics;

pub use draft::DraftFields;
pub use location::{Coordinates, LocationDetails, ZipCode};
pub use metrics::{DerivedMetrics, Margin};
