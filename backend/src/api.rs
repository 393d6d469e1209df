//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::figure::Figure;
pub use crate::routes::figure::FigureUpdate;
pub use crate::routes::layout::DropdownOption;
pub use crate::routes::layout::DropdownSpec;
pub use crate::routes::layout::GraphSpec;
pub use crate::routes::layout::HeadingSpec;
pub use crate::routes::layout::LayoutSpec;
pub use crate::routes::layout::RangeSliderSpec;
pub use crate::routes::scatter::ScatterChart;
pub use crate::routes::scatter::ScatterTrace;
pub use crate::routes::success::OutcomeBreakdown;
pub use crate::routes::success::PieChart;
pub use crate::routes::success::PieSlice;
pub use crate::routes::success::SiteSuccessSummary;

pub use crate::models::{
    BoosterVersion, LaunchRecord, LaunchSite, OutcomeClass, PayloadRange, Selection,
    SelectionError, SiteFilter, ALL_SITES,
};
