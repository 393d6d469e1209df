//! Service layer for aggregation and chart building.
//!
//! Services sit between the in-memory dataset and the HTTP layer. Every
//! function here is synchronous and pure over the dataset it is given.

pub mod aggregation;
pub mod bindings;
pub mod charts;
pub mod layout;

pub use aggregation::{filter_by_site_and_payload, outcome_breakdown, site_success_rates};
pub use bindings::{
    Dashboard, InputId, PieChartBinding, ScatterChartBinding, SelectionEvent, ViewBinding,
};
pub use charts::{pie_chart, scatter_chart};
pub use layout::{build_layout, site_options};
