//! View bindings: chart outputs subscribed to selection inputs.
//!
//! A [`SelectionEvent`] carries the new selection and the inputs that changed.
//! [`Dashboard::dispatch`] runs every binding that listens to one of those
//! inputs, synchronously and in registration order, and returns the new figures.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::{Figure, FigureUpdate};
use crate::dataset::Dataset;
use crate::models::Selection;
use crate::routes::layout::{PIE_CHART_ID, SCATTER_CHART_ID};

use super::charts::{pie_chart, scatter_chart};

/// UI inputs a binding can listen to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputId {
    #[serde(rename = "site-dropdown")]
    SiteDropdown,
    #[serde(rename = "payload-slider")]
    PayloadSlider,
}

impl InputId {
    pub const ALL: [InputId; 2] = [InputId::SiteDropdown, InputId::PayloadSlider];
}

/// One UI state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionEvent {
    pub selection: Selection,
    pub changed: Vec<InputId>,
}

impl SelectionEvent {
    pub fn new(selection: Selection, changed: Vec<InputId>) -> Self {
        Self { selection, changed }
    }

    /// Page load: every input counts as changed.
    pub fn initial(selection: Selection) -> Self {
        Self::new(selection, InputId::ALL.to_vec())
    }

    pub fn touches(&self, inputs: &[InputId]) -> bool {
        inputs.iter().any(|input| self.changed.contains(input))
    }
}

/// A chart output recomputed from the selection whenever one of its inputs changes.
///
/// Implementations must be pure over `(dataset, selection)`.
pub trait ViewBinding: Send + Sync {
    /// Placeholder the rendered figure goes to.
    fn output_id(&self) -> &'static str;

    fn inputs(&self) -> &'static [InputId];

    fn render(&self, dataset: &Dataset, selection: &Selection) -> Figure;
}

/// Success pie, driven by the site dropdown only.
#[derive(Debug, Default, Clone, Copy)]
pub struct PieChartBinding;

impl ViewBinding for PieChartBinding {
    fn output_id(&self) -> &'static str {
        PIE_CHART_ID
    }

    fn inputs(&self) -> &'static [InputId] {
        &[InputId::SiteDropdown]
    }

    fn render(&self, dataset: &Dataset, selection: &Selection) -> Figure {
        Figure::Pie(pie_chart(dataset, &selection.site))
    }
}

/// Payload scatter, driven by the site dropdown and the payload slider.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScatterChartBinding;

impl ViewBinding for ScatterChartBinding {
    fn output_id(&self) -> &'static str {
        SCATTER_CHART_ID
    }

    fn inputs(&self) -> &'static [InputId] {
        &[InputId::SiteDropdown, InputId::PayloadSlider]
    }

    fn render(&self, dataset: &Dataset, selection: &Selection) -> Figure {
        Figure::Scatter(scatter_chart(dataset, selection))
    }
}

/// Registry of view bindings over one shared, read-only dataset.
#[derive(Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    bindings: Vec<Arc<dyn ViewBinding>>,
}

impl Dashboard {
    /// Dashboard with no bindings registered.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            bindings: Vec::new(),
        }
    }

    /// Dashboard with the pie and scatter bindings registered.
    pub fn standard(dataset: Arc<Dataset>) -> Self {
        let mut dashboard = Self::new(dataset);
        dashboard
            .subscribe(PieChartBinding)
            .subscribe(ScatterChartBinding);
        dashboard
    }

    pub fn subscribe(&mut self, binding: impl ViewBinding + 'static) -> &mut Self {
        self.bindings.push(Arc::new(binding));
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Render every binding affected by `event`, each at most once.
    pub fn dispatch(&self, event: &SelectionEvent) -> Vec<FigureUpdate> {
        let updates: Vec<FigureUpdate> = self
            .bindings
            .iter()
            .filter(|binding| event.touches(binding.inputs()))
            .map(|binding| FigureUpdate {
                output_id: binding.output_id().to_string(),
                figure: binding.render(&self.dataset, &event.selection),
            })
            .collect();

        log::debug!(
            "Dispatched selection site={} payload={} changed={:?}: {} figure(s)",
            event.selection.site,
            event.selection.payload_range,
            event.changed,
            updates.len()
        );

        updates
    }

    /// Render a single output, regardless of which inputs changed.
    pub fn render_output(&self, output_id: &str, selection: &Selection) -> Option<Figure> {
        self.bindings
            .iter()
            .find(|binding| binding.output_id() == output_id)
            .map(|binding| binding.render(&self.dataset, selection))
    }
}
