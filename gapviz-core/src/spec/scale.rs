use crate::spec::axis::{AxisOrient, AxisSpec};
use crate::spec::values::ExtentSpec;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The pixel rectangle a pair of linear scales maps into, plus the tick
/// configuration of the axes drawn along its edges.
///
/// The x scale maps to `[border, x_extent]` and the y scale to
/// `[border, y_extent]` with an inverted domain, so the usable draw area is
/// the rectangle between `border` and the two extents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisFrameSpec {
    pub border: f64,

    pub x_extent: f64,

    pub y_extent: f64,

    pub x_axis: AxisSpec,

    pub y_axis: AxisSpec,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Default for AxisFrameSpec {
    fn default() -> Self {
        Self {
            border: 50.0,
            x_extent: 750.0,
            y_extent: 550.0,
            x_axis: AxisSpec::new(AxisOrient::Bottom, 16),
            y_axis: AxisSpec::new(AxisOrient::Left, 8),
            extra: Default::default(),
        }
    }
}

/// Linear scale from the population domain to a circle radius in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusScaleSpec {
    pub range: ExtentSpec,
}

impl Default for RadiusScaleSpec {
    fn default() -> Self {
        Self {
            range: ExtentSpec::new(3.0, 20.0),
        }
    }
}
