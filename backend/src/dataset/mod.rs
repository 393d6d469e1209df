//! Launch dataset: loaded once at startup, read-only afterwards.
//!
//! The dataset is held in a process-wide [`OnceLock`] and handed out as
//! `Arc<Dataset>`. Nothing mutates it after construction, so handlers can
//! share it without any locking.

pub mod error;
pub mod loader;

pub use error::{DatasetError, DatasetResult};
pub use loader::{dataframe_to_records, load_launch_records, parse_launch_csv};

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::models::{LaunchRecord, LaunchSite, PayloadRange};

/// Immutable in-memory table of launch records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    sites: Vec<LaunchSite>,
    payload_bounds: Option<(f64, f64)>,
}

impl Dataset {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<LaunchSite> = Vec::new();
        for record in &records {
            if !sites.contains(&record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }

        let payload_bounds = records.iter().map(|r| r.payload_mass_kg).fold(
            None,
            |bounds: Option<(f64, f64)>, mass| match bounds {
                None => Some((mass, mass)),
                Some((lo, hi)) => Some((lo.min(mass), hi.max(mass))),
            },
        );

        Self {
            records,
            sites,
            payload_bounds,
        }
    }

    /// Load and validate the dataset from a CSV file.
    pub fn from_csv(path: &Path) -> DatasetResult<Self> {
        let records = load_launch_records(path)?;
        log::info!(
            "Loaded {} launch records from {}",
            records.len(),
            path.display()
        );
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in first-seen order.
    pub fn sites(&self) -> &[LaunchSite] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn min_payload(&self) -> Option<f64> {
        self.payload_bounds.map(|(lo, _)| lo)
    }

    pub fn max_payload(&self) -> Option<f64> {
        self.payload_bounds.map(|(_, hi)| hi)
    }

    /// Initial slider value: the dataset's own payload span, or the full slider
    /// span when there is nothing loaded.
    pub fn initial_payload_range(&self) -> PayloadRange {
        self.payload_bounds
            .and_then(|(lo, hi)| PayloadRange::new(lo, hi).ok())
            .unwrap_or_else(PayloadRange::slider_bounds)
    }
}

/// Global dataset instance initialized once per process.
static DATASET: OnceLock<Arc<Dataset>> = OnceLock::new();

/// Load the dataset from `path` and install it as the process-wide instance.
///
/// A second call is a no-op that returns the already installed dataset.
pub fn init_dataset(path: &Path) -> Result<&'static Arc<Dataset>> {
    if let Some(existing) = DATASET.get() {
        return Ok(existing);
    }

    let dataset = Dataset::from_csv(path)
        .with_context(|| format!("Failed to load launch dataset from {}", path.display()))?;
    let _ = DATASET.set(Arc::new(dataset));
    get_dataset()
}

/// Get a reference to the global dataset instance.
pub fn get_dataset() -> Result<&'static Arc<Dataset>> {
    DATASET
        .get()
        .context("Dataset not initialized. Call init_dataset() first.")
}
