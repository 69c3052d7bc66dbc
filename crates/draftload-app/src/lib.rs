//! Application service layer - config, debounced draft session, route lookup

pub mod app;
pub mod config;
pub mod debounce;
pub mod repository;
