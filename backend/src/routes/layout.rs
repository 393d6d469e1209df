use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{PayloadRange, SiteFilter};

// =========================================================
// Layout types + route
// =========================================================

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

/// Page heading with its inline style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingSpec {
    pub text: String,
    pub text_align: String,
    pub color: String,
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownSpec {
    pub id: String,
    pub options: Vec<DropdownOption>,
    /// `None` until the user picks a site.
    pub value: SiteFilter,
}

/// Range slider bounds, step, tick marks and initial value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSliderSpec {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Tick position (kg) to tick label.
    pub marks: BTreeMap<u32, String>,
    pub value: PayloadRange,
}

/// Empty chart placeholder, filled by a view binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub id: String,
}

/// Full component tree of the dashboard page, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub heading: HeadingSpec,
    pub site_dropdown: DropdownSpec,
    pub pie_chart: GraphSpec,
    pub payload_slider: RangeSliderSpec,
    pub scatter_chart: GraphSpec,
}
