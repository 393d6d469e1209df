//! Data Transfer Objects for the HTTP API.
//!
//! Chart and layout DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Charts
    Figure, FigureUpdate, PieChart, PieSlice, ScatterChart, ScatterTrace,
    // Layout
    DropdownOption, DropdownSpec, GraphSpec, HeadingSpec, LayoutSpec, RangeSliderSpec,
    // Summaries
    OutcomeBreakdown, SiteSuccessSummary,
};
use crate::dataset::Dataset;
use crate::models::{PayloadRange, SelectionError, SiteFilter};
use crate::services::InputId;

/// Query parameters for the pie chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PieQuery {
    /// Dropdown value: `ALL` or a site name; absent means unselected
    #[serde(default)]
    pub site: Option<String>,
}

impl PieQuery {
    pub fn site_filter(&self) -> SiteFilter {
        SiteFilter::from_optional(self.site.as_deref())
    }
}

/// Query parameters for endpoints that take a full selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SelectionQuery {
    /// Dropdown value: `ALL` or a site name; absent means unselected
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kg (default: dataset minimum)
    #[serde(default)]
    pub payload_min: Option<f64>,
    /// Upper payload bound in kg (default: dataset maximum)
    #[serde(default)]
    pub payload_max: Option<f64>,
}

impl SelectionQuery {
    pub fn site_filter(&self) -> SiteFilter {
        SiteFilter::from_optional(self.site.as_deref())
    }

    /// Requested range; missing bounds fall back to the slider's initial value.
    pub fn payload_range(&self, dataset: &Dataset) -> Result<PayloadRange, SelectionError> {
        let initial = dataset.initial_payload_range();
        PayloadRange::new(
            self.payload_min.unwrap_or(initial.min()),
            self.payload_max.unwrap_or(initial.max()),
        )
    }
}

/// Request body for a selection change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// Dropdown value; `null` when unset
    #[serde(default)]
    pub site: SiteFilter,
    /// Slider value `[min, max]`; validated by the handler
    pub payload_range: [f64; 2],
    /// Inputs that changed (default: all, as on page load)
    #[serde(default)]
    pub changed: Option<Vec<InputId>>,
}

/// Response for a selection change: one entry per re-rendered chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub updates: Vec<FigureUpdate>,
}

/// Site list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitesResponse {
    /// Distinct sites in first-seen order
    pub sites: Vec<String>,
    /// Success rate per site
    pub summaries: Vec<SiteSuccessSummary>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of loaded launch records
    pub records: usize,
}
