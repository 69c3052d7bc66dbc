//! Pickup/delivery marker state and the camera moves it implies
//!
//! The map surface itself is external; this only decides which markers exist
//! and where the viewport should go after each placement.

use serde::{Deserialize, Serialize};

use crate::model::{Coordinates, LocationDetails};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Pickup,
    Delivery,
}

impl MarkerKind {
    /// Marker colour (hex)
    pub fn color(&self) -> &'static str {
        match self {
            MarkerKind::Pickup => "#4CAF50",
            MarkerKind::Delivery => "#C70039",
        }
    }

    /// Short progress-bar label
    pub fn label(&self) -> &'static str {
        match self {
            MarkerKind::Pickup => "PU",
            MarkerKind::Delivery => "DL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: Coordinates,
    pub color: String,
}

/// Axis-aligned lng/lat box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

impl Bounds {
    pub fn from_point(point: Coordinates) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    pub fn extend(mut self, point: Coordinates) -> Self {
        self.south_west.longitude = self.south_west.longitude.min(point.longitude);
        self.south_west.latitude = self.south_west.latitude.min(point.latitude);
        self.north_east.longitude = self.north_east.longitude.max(point.longitude);
        self.north_east.latitude = self.north_east.latitude.max(point.latitude);
        self
    }
}

/// Viewport change requested after a marker is placed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CameraMove {
    FlyTo {
        center: Coordinates,
        zoom: f64,
        duration_ms: u64,
    },
    FitBounds {
        bounds: Bounds,
        padding: u32,
        duration_ms: u64,
    },
}

#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    pickup: Option<Marker>,
    delivery: Option<Marker>,
}

impl RouteMap {
    /// Continental US
    pub const INITIAL_CENTER: Coordinates = Coordinates {
        longitude: -95.7129,
        latitude: 37.0902,
    };
    pub const INITIAL_ZOOM: f64 = 3.0;
    pub const SINGLE_MARKER_ZOOM: f64 = 8.0;
    pub const FIT_PADDING: u32 = 100;
    pub const ANIMATION_MS: u64 = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Viewport before any marker is placed
    pub fn initial_view() -> CameraMove {
        CameraMove::FlyTo {
            center: Self::INITIAL_CENTER,
            zoom: Self::INITIAL_ZOOM,
            duration_ms: 0,
        }
    }

    pub fn marker(&self, kind: MarkerKind) -> Option<&Marker> {
        match kind {
            MarkerKind::Pickup => self.pickup.as_ref(),
            MarkerKind::Delivery => self.delivery.as_ref(),
        }
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.pickup.iter().chain(self.delivery.iter())
    }

    /// Place (or replace) the marker for `kind`.
    ///
    /// Returns `None` and leaves the map untouched when the location has no
    /// coordinates.
    pub fn place(&mut self, kind: MarkerKind, details: &LocationDetails) -> Option<CameraMove> {
        let position = details.coordinates?;
        let marker = Marker {
            kind,
            position,
            color: kind.color().to_string(),
        };
        match kind {
            MarkerKind::Pickup => self.pickup = Some(marker),
            MarkerKind::Delivery => self.delivery = Some(marker),
        }

        let camera = match (&self.pickup, &self.delivery) {
            (Some(pickup), Some(delivery)) => CameraMove::FitBounds {
                bounds: Bounds::from_point(pickup.position).extend(delivery.position),
                padding: Self::FIT_PADDING,
                duration_ms: Self::ANIMATION_MS,
            },
            _ => CameraMove::FlyTo {
                center: position,
                zoom: Self::SINGLE_MARKER_ZOOM,
                duration_ms: Self::ANIMATION_MS,
            },
        };
        Some(camera)
    }
}
