//! Chart builders: turn a selection into pie and scatter specifications.

use crate::api::{PieChart, PieSlice, ScatterChart, ScatterTrace};
use crate::dataset::loader::{
    BOOSTER_VERSION_COLUMN, CLASS_COLUMN, LAUNCH_SITE_COLUMN, PAYLOAD_MASS_COLUMN,
};
use crate::dataset::Dataset;
use crate::models::{Selection, SiteFilter};

use super::aggregation::{filter_by_site_and_payload, outcome_breakdown, site_success_rates};

pub const ALL_SITES_PIE_TITLE: &str = "Total Success Launches By Sites";
const SUCCESS_RATE_FIELD: &str = "success_rate";
const FRACTION_FIELD: &str = "perc";

/// Success pie for the selected site.
///
/// `ALL` shows each site's success rate; a single site shows the share of each
/// outcome class. A site with no launches gives a titled chart with no slices.
pub fn pie_chart(dataset: &Dataset, site: &SiteFilter) -> PieChart {
    match site {
        SiteFilter::All => PieChart {
            title: ALL_SITES_PIE_TITLE.to_string(),
            names_field: LAUNCH_SITE_COLUMN.to_string(),
            values_field: SUCCESS_RATE_FIELD.to_string(),
            slices: site_success_rates(dataset.records())
                .into_iter()
                .map(|summary| PieSlice {
                    label: summary.launch_site.to_string(),
                    value: summary.success_rate,
                })
                .collect(),
        },
        other => outcome_pie_chart(dataset, other),
    }
}

fn outcome_pie_chart(dataset: &Dataset, site: &SiteFilter) -> PieChart {
    let slices = match site {
        SiteFilter::Site(name) => outcome_breakdown(dataset.records(), name)
            .into_iter()
            .map(|row| PieSlice {
                label: row.class.to_string(),
                value: row.fraction,
            })
            .collect(),
        _ => Vec::new(),
    };

    PieChart {
        title: format!("Total Success Launches For Site {}", site),
        names_field: CLASS_COLUMN.to_string(),
        values_field: FRACTION_FIELD.to_string(),
        slices,
    }
}

/// Payload-versus-outcome scatter, one trace per booster version.
///
/// Traces appear in first-seen order of the filtered records. An empty filter
/// result still yields a chart, just without traces.
pub fn scatter_chart(dataset: &Dataset, selection: &Selection) -> ScatterChart {
    let filtered = filter_by_site_and_payload(
        dataset.records(),
        &selection.site,
        &selection.payload_range,
    );

    let mut traces: Vec<ScatterTrace> = Vec::new();
    for record in &filtered {
        let index = match traces.iter().position(|t| t.name == record.booster_version) {
            Some(index) => index,
            None => {
                traces.push(ScatterTrace::new(record.booster_version.clone()));
                traces.len() - 1
            }
        };
        traces[index].x.push(record.payload_mass_kg);
        traces[index].y.push(record.class.value());
    }

    let title = match &selection.site {
        SiteFilter::All => "Payload vs. Outcome for All Sites".to_string(),
        other => format!("Payload vs. Outcome for Site {}", other),
    };

    ScatterChart {
        title,
        x_field: PAYLOAD_MASS_COLUMN.to_string(),
        y_field: CLASS_COLUMN.to_string(),
        color_field: BOOSTER_VERSION_COLUMN.to_string(),
        traces,
        point_count: filtered.len(),
    }
}
