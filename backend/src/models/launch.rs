use serde::{Deserialize, Serialize};
use std::fmt;

use crate::define_label_type;

define_label_type!(LaunchSite);
define_label_type!(BoosterVersion);

/// Binary launch outcome label.
///
/// Serialized as the integer `0`/`1` so chart payloads keep a numeric axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OutcomeClass {
    Failure = 0,
    Success = 1,
}

impl OutcomeClass {
    /// Numeric value of the class, as used for means and chart axes.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.value())
    }
}

impl TryFrom<u8> for OutcomeClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OutcomeClass::Failure),
            1 => Ok(OutcomeClass::Success),
            other => Err(format!("outcome class must be 0 or 1, got {}", other)),
        }
    }
}

impl TryFrom<i64> for OutcomeClass {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| format!("outcome class must be 0 or 1, got {}", value))
            .and_then(OutcomeClass::try_from)
    }
}

impl From<OutcomeClass> for u8 {
    fn from(class: OutcomeClass) -> Self {
        class.value()
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// One row of the launch dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: LaunchSite,
    /// Payload mass in kilograms, never negative.
    pub payload_mass_kg: f64,
    pub class: OutcomeClass,
    pub booster_version: BoosterVersion,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<LaunchSite>,
        payload_mass_kg: f64,
        class: OutcomeClass,
        booster_version: impl Into<BoosterVersion>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            class,
            booster_version: booster_version.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.class == OutcomeClass::Success
    }
}
