//! Use cases

pub mod draft_session;
pub mod route_service;

pub use draft_session::DraftSession;
pub use route_service::{plan_route, resolve_location, RoutePlan, RouteStop};
