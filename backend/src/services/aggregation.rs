//! Group-by aggregations over the launch table.
//!
//! All functions are pure and read-only over the records they are given.

use std::collections::BTreeMap;

use crate::api::{OutcomeBreakdown, SiteSuccessSummary};
use crate::models::{LaunchRecord, LaunchSite, OutcomeClass, PayloadRange, SiteFilter};

/// Mean outcome class per launch site, ordered by site name.
///
/// An empty input yields an empty result.
pub fn site_success_rates(records: &[LaunchRecord]) -> Vec<SiteSuccessSummary> {
    let mut groups: BTreeMap<&LaunchSite, (usize, usize)> = BTreeMap::new();
    for record in records {
        let (successes, total) = groups.entry(&record.launch_site).or_insert((0, 0));
        if record.is_success() {
            *successes += 1;
        }
        *total += 1;
    }

    groups
        .into_iter()
        .map(|(site, (successes, total))| SiteSuccessSummary {
            launch_site: site.clone(),
            success_rate: successes as f64 / total as f64,
            launch_count: total,
        })
        .collect()
}

/// Count and share of each outcome class for one exact site, ordered by class.
///
/// A site with no records yields an empty breakdown.
pub fn outcome_breakdown(records: &[LaunchRecord], site: &LaunchSite) -> Vec<OutcomeBreakdown> {
    let mut counts: BTreeMap<OutcomeClass, usize> = BTreeMap::new();
    for record in records.iter().filter(|r| &r.launch_site == site) {
        *counts.entry(record.class).or_insert(0) += 1;
    }

    let total: usize = counts.values().sum();
    counts
        .into_iter()
        .map(|(class, count)| OutcomeBreakdown {
            class,
            count,
            fraction: count as f64 / total as f64,
        })
        .collect()
}

/// Records matching the site filter whose payload lies within `range` (both ends inclusive).
///
/// Input order is preserved.
pub fn filter_by_site_and_payload<'a>(
    records: &'a [LaunchRecord],
    site: &SiteFilter,
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|r| site.matches(&r.launch_site))
        .filter(|r| range.contains(r.payload_mass_kg))
        .collect()
}

#[cfg(test)]
#[path = "aggregation_tests.rs"]
mod aggregation_tests;
