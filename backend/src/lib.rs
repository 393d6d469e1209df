//! # SpaceX Launch Dashboard Backend
//!
//! Interactive analytics over historical rocket-launch outcomes.
//!
//! A user picks a launch site and a payload-mass window; the backend
//! recomputes a success-rate pie chart and a payload-versus-outcome scatter
//! chart for that selection. The launch table is loaded once from CSV and
//! never mutated afterwards.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Typed launch records and selection state
//! - [`dataset`]: CSV loading and the process-wide read-only dataset
//! - [`services`]: Aggregations, chart builders and view bindings
//! - [`routes`]: Chart and layout DTO definitions
//! - [`api`]: Consolidated DTO re-exports
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum-based HTTP server serving the dashboard page and JSON API
//!

pub mod api;

pub mod config;
pub mod dataset;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
