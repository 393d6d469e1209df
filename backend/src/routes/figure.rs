use serde::{Deserialize, Serialize};

use super::scatter::ScatterChart;
use super::success::PieChart;

// =========================================================
// Figure types + selection route
// =========================================================

/// Chart specification handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Figure {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Figure::Pie(chart) => &chart.title,
            Figure::Scatter(chart) => &chart.title,
        }
    }

    pub fn as_pie(&self) -> Option<&PieChart> {
        match self {
            Figure::Pie(chart) => Some(chart),
            Figure::Scatter(_) => None,
        }
    }

    pub fn as_scatter(&self) -> Option<&ScatterChart> {
        match self {
            Figure::Scatter(chart) => Some(chart),
            Figure::Pie(_) => None,
        }
    }
}

/// New figure for one chart placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureUpdate {
    pub output_id: String,
    pub figure: Figure,
}
