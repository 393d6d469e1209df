//! HTTP server module for the dashboard.
//!
//! This module provides an axum-based HTTP server that plays the role of the
//! UI surface: it serves the dashboard page and exposes the layout and chart
//! bindings as a small JSON API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Dashboard page, query/JSON parsing                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - View bindings and selection dispatch                   │
//! │  - Aggregations and chart specifications                  │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Dataset (dataset/)                                       │
//! │  - Immutable launch records, loaded once at startup       │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
