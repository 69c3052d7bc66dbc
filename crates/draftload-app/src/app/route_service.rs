//! Route Service - resolve pickup/delivery inputs and place map markers

use serde::Serialize;
use tracing::{debug, warn};

use draftload_domain::model::{LocationDetails, ZipCode};
use draftload_domain::repository::Geocoder;
use draftload_domain::service::{CameraMove, Marker, MarkerKind, RouteMap};

/// Look up free-text location input.
///
/// Only exact five-digit ZIP codes are looked up. Lookup errors are logged and
/// treated as "not found"; they never reach the caller.
pub fn resolve_location(geocoder: &dyn Geocoder, input: &str) -> Option<LocationDetails> {
    let Some(zip) = ZipCode::parse(input) else {
        debug!(input, "not a ZIP code, skipping lookup");
        return None;
    };
    match geocoder.lookup(&zip) {
        Ok(details) => details,
        Err(e) => {
            warn!(zip = %zip, error = %e, "location lookup failed");
            None
        }
    }
}

/// One end of the route as entered and as resolved
#[derive(Debug, Clone, Serialize)]
pub struct RouteStop {
    pub kind: MarkerKind,
    pub input: String,
    pub details: Option<LocationDetails>,
}

impl RouteStop {
    /// Resolved ZIP if known, otherwise what the user typed
    pub fn display_zip(&self) -> &str {
        self.details
            .as_ref()
            .map(|d| d.zip_code.as_str())
            .filter(|zip| !zip.is_empty())
            .unwrap_or(&self.input)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub pickup: RouteStop,
    pub delivery: RouteStop,
    pub markers: Vec<Marker>,
    /// Viewport before either stop is placed
    pub initial_view: CameraMove,
    /// Camera moves in the order they were triggered
    pub camera_moves: Vec<CameraMove>,
}

/// Resolve pickup then delivery and collect the resulting map updates
pub fn plan_route(geocoder: &dyn Geocoder, pickup: &str, delivery: &str) -> RoutePlan {
    let mut map = RouteMap::new();
    let mut camera_moves = Vec::new();

    let mut resolve = |kind: MarkerKind, input: &str| {
        let details = resolve_location(geocoder, input);
        if let Some(camera) = details.as_ref().and_then(|d| map.place(kind, d)) {
            camera_moves.push(camera);
        }
        RouteStop {
            kind,
            input: input.to_string(),
            details,
        }
    };

    let pickup = resolve(MarkerKind::Pickup, pickup);
    let delivery = resolve(MarkerKind::Delivery, delivery);

    RoutePlan {
        pickup,
        delivery,
        markers: map.markers().cloned().collect(),
        initial_view: RouteMap::initial_view(),
        camera_moves,
    }
}
