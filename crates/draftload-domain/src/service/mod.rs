//! Domain services

pub mod draft_parser;
pub mod metrics_calculator;
pub mod money;
pub mod route_map;
pub mod summary;

pub use draft_parser::parse_draft;
pub use metrics_calculator::{calculate_margin, calculate_rate_per_mile, derive_metrics};
pub use money::{coerce_number, extract_numeric, format_currency, format_usd};
pub use route_map::{Bounds, CameraMove, Marker, MarkerKind, RouteMap};
pub use summary::{generate_summary_report, DraftSummary};
