use crate::scatter;
use gapviz_common::data::table::Dataset;
use gapviz_common::error::Result;
use gapviz_core::spec::chart::ChartSpec;

/// Owns the loaded dataset and the chart spec for one rendering session.
/// The dataset is read-only once the state is built; rendering is a pure
/// function of `(spec, dataset)`, so repeated renders produce identical
/// output.
#[derive(Debug, Clone)]
pub struct ChartState {
    spec: ChartSpec,
    dataset: Dataset,
}

impl ChartState {
    pub fn try_new(spec: ChartSpec, dataset: Dataset) -> Result<Self> {
        spec.validate()?;
        dataset.validate_non_empty()?;
        Ok(Self { spec, dataset })
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn render_svg(&self) -> Result<String> {
        scatter::render_document(&self.spec, &self.dataset)
    }
}
