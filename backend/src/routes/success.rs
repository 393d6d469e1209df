use serde::{Deserialize, Serialize};

use crate::models::{LaunchSite, OutcomeClass};

// =========================================================
// Success-rate types + route
// =========================================================

/// Mean outcome class for one launch site, always within `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSuccessSummary {
    pub launch_site: LaunchSite,
    pub success_rate: f64,
    pub launch_count: usize,
}

/// Count and share of one outcome class within a single site's launches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeBreakdown {
    pub class: OutcomeClass,
    pub count: usize,
    /// `count / total`; fractions over one breakdown sum to 1.
    pub fraction: f64,
}

/// One wedge of the success pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

/// Pie chart specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    /// Source column the slice labels come from.
    pub names_field: String,
    /// Source column the slice values come from.
    pub values_field: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Value of the slice with the given label, if any.
    pub fn slice_value(&self, label: &str) -> Option<f64> {
        self.slices
            .iter()
            .find(|slice| slice.label == label)
            .map(|slice| slice.value)
    }
}
