use serde::{Deserialize, Serialize};

use crate::models::BoosterVersion;

// =========================================================
// Payload scatter types + route
// =========================================================

/// Points of one color category (one booster version).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    pub name: BoosterVersion,
    pub x: Vec<f64>,
    pub y: Vec<u8>,
}

impl ScatterTrace {
    pub fn new(name: BoosterVersion) -> Self {
        Self {
            name,
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Scatter chart specification: payload mass against outcome class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_field: String,
    pub y_field: String,
    pub color_field: String,
    pub traces: Vec<ScatterTrace>,
    pub point_count: usize,
}

impl ScatterChart {
    pub fn is_empty(&self) -> bool {
        self.point_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_len() {
        let mut trace = ScatterTrace::new(BoosterVersion::new("F9 FT"));
        assert!(trace.is_empty());
        trace.x.push(1200.0);
        trace.y.push(1);
        assert_eq!(trace.len(), 1);
    }
}
