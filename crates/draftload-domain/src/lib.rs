//! Draft load domain: field parsing, rate/margin metrics and route map state

pub mod model;
pub mod repository;
pub mod service;
