//! Transient dashboard selection state: which site, which payload window.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::launch::LaunchSite;

/// Dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

/// Bounds of the payload range slider.
pub const SLIDER_MIN_KG: f64 = 0.0;
pub const SLIDER_MAX_KG: f64 = 10_000.0;
pub const SLIDER_STEP_KG: f64 = 1_000.0;

/// Errors raised when a selection cannot be built from user input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    #[error("invalid payload range [{min}, {max}]: {reason}")]
    InvalidPayloadRange { min: f64, max: f64, reason: String },
}

/// Site component of a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SiteFilter {
    /// The `ALL` sentinel.
    All,
    /// Exact, case-sensitive site name.
    Site(LaunchSite),
    /// Dropdown not set yet. Matches no record.
    #[default]
    Unselected,
}

impl SiteFilter {
    /// Interpret a dropdown value. `"ALL"` is the sentinel; anything else is a site name.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(LaunchSite::new(value))
        }
    }

    pub fn from_optional(value: Option<&str>) -> Self {
        value.map(Self::parse).unwrap_or(SiteFilter::Unselected)
    }

    pub fn site(name: impl Into<LaunchSite>) -> Self {
        SiteFilter::Site(name.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteFilter::All)
    }

    /// Whether a record launched from `site` passes this filter.
    pub fn matches(&self, site: &LaunchSite) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(selected) => selected == site,
            SiteFilter::Unselected => false,
        }
    }

    /// Dropdown value for this filter, `None` when unset.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            SiteFilter::All => Some(ALL_SITES),
            SiteFilter::Site(site) => Some(site.as_str()),
            SiteFilter::Unselected => None,
        }
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value().unwrap_or("None"))
    }
}

impl Serialize for SiteFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SiteFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(SiteFilter::from_optional(value.as_deref()))
    }
}

/// Inclusive payload mass window in kilograms.
///
/// Serialized as a two-element `[min, max]` array, the shape of a range slider value.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    min: f64,
    max: f64,
}

impl PayloadRange {
    /// Build a range, rejecting non-finite or negative bounds and `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, SelectionError> {
        let invalid = |reason: &str| SelectionError::InvalidPayloadRange {
            min,
            max,
            reason: reason.to_string(),
        };

        if !min.is_finite() || !max.is_finite() {
            return Err(invalid("bounds must be finite"));
        }
        if min < 0.0 || max < 0.0 {
            return Err(invalid("bounds must be non-negative"));
        }
        if min > max {
            return Err(invalid("min must not exceed max"));
        }
        Ok(Self { min, max })
    }

    /// Full slider span, `[0, 10000]`.
    pub fn slider_bounds() -> Self {
        Self {
            min: SLIDER_MIN_KG,
            max: SLIDER_MAX_KG,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Both ends inclusive.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.min && payload_mass_kg <= self.max
    }
}

impl TryFrom<[f64; 2]> for PayloadRange {
    type Error = SelectionError;

    fn try_from(value: [f64; 2]) -> Result<Self, Self::Error> {
        PayloadRange::new(value[0], value[1])
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.min, range.max]
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Current UI state, passed by value into every view binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub site: SiteFilter,
    pub payload_range: PayloadRange,
}

impl Selection {
    pub fn new(site: SiteFilter, payload_range: PayloadRange) -> Self {
        Self {
            site,
            payload_range,
        }
    }
}
