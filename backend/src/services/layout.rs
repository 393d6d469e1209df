//! Static layout description of the dashboard page.

use std::collections::BTreeMap;

use crate::api::{
    DropdownOption, DropdownSpec, GraphSpec, HeadingSpec, LayoutSpec, RangeSliderSpec,
};
use crate::dataset::Dataset;
use crate::models::{SiteFilter, ALL_SITES, SLIDER_MAX_KG, SLIDER_MIN_KG, SLIDER_STEP_KG};
use crate::routes::layout::{
    PAYLOAD_SLIDER_ID, PIE_CHART_ID, SCATTER_CHART_ID, SITE_DROPDOWN_ID,
};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

/// Dropdown options: the `ALL` sentinel, then each site in first-seen order.
pub fn site_options(dataset: &Dataset) -> Vec<DropdownOption> {
    std::iter::once(ALL_SITES.to_string())
        .chain(dataset.sites().iter().map(|site| site.to_string()))
        .map(|site| DropdownOption {
            label: site.clone(),
            value: site,
        })
        .collect()
}

/// Build the component tree for `dataset`.
///
/// The slider keeps its fixed `[0, 10000]` bounds even when the dataset's
/// payloads fall outside them; only the initial value follows the data.
pub fn build_layout(dataset: &Dataset) -> LayoutSpec {
    let marks = BTreeMap::from([(0, "0".to_string()), (100, "100".to_string())]);

    LayoutSpec {
        heading: HeadingSpec {
            text: DASHBOARD_TITLE.to_string(),
            text_align: "center".to_string(),
            color: "#503D36".to_string(),
            font_size: 40,
        },
        site_dropdown: DropdownSpec {
            id: SITE_DROPDOWN_ID.to_string(),
            options: site_options(dataset),
            value: SiteFilter::Unselected,
        },
        pie_chart: GraphSpec {
            id: PIE_CHART_ID.to_string(),
        },
        payload_slider: RangeSliderSpec {
            id: PAYLOAD_SLIDER_ID.to_string(),
            min: SLIDER_MIN_KG,
            max: SLIDER_MAX_KG,
            step: SLIDER_STEP_KG,
            marks,
            value: dataset.initial_payload_range(),
        },
        scatter_chart: GraphSpec {
            id: SCATTER_CHART_ID.to_string(),
        },
    }
}
