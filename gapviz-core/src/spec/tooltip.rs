use crate::spec::axis::{AxisOrient, AxisSpec};
use crate::spec::mark::LineMarkSpec;
use crate::spec::scale::AxisFrameSpec;
use crate::spec::title::TitleSpec;
use crate::spec::values::{OffsetSpec, TextAnchor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Placeholder in the tooltip's y-axis label that is replaced with the
/// selected population units at render time.
pub const UNITS_PLACEHOLDER: &str = "{units}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipSpec {
    /// Side length of the square inset canvas.
    pub size: f64,

    #[serde(default = "default_inset_frame")]
    pub frame: AxisFrameSpec,

    #[serde(default)]
    pub line: LineMarkSpec,

    #[serde(default)]
    pub fade: FadeSpec,

    /// Inset anchor offset from the hovered circle's center.
    pub offset: OffsetSpec,

    /// Inset title; its text is the hovered country's name.
    #[serde(default = "default_inset_title")]
    pub title: TitleSpec,

    #[serde(default = "default_inset_x_label")]
    pub x_label: TitleSpec,

    #[serde(default = "default_inset_y_label")]
    pub y_label: TitleSpec,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Default for TooltipSpec {
    fn default() -> Self {
        Self {
            size: 300.0,
            frame: default_inset_frame(),
            line: Default::default(),
            fade: Default::default(),
            offset: OffsetSpec { x: 10.0, y: -28.0 },
            title: default_inset_title(),
            x_label: default_inset_x_label(),
            y_label: default_inset_y_label(),
            extra: Default::default(),
        }
    }
}

/// The hover fade: hidden tooltips fade in to `opacity` on hover and back
/// out to zero when the pointer leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeSpec {
    pub fade_in_ms: u64,

    pub fade_out_ms: u64,

    pub opacity: f64,
}

impl Default for FadeSpec {
    fn default() -> Self {
        Self {
            fade_in_ms: 200,
            fade_out_ms: 500,
            opacity: 0.9,
        }
    }
}

fn default_inset_frame() -> AxisFrameSpec {
    AxisFrameSpec {
        border: 55.0,
        x_extent: 250.0,
        y_extent: 250.0,
        x_axis: AxisSpec::new(AxisOrient::Bottom, 7),
        y_axis: AxisSpec::new(AxisOrient::Left, 5),
        extra: Default::default(),
    }
}

fn default_inset_title() -> TitleSpec {
    TitleSpec::new("", 150.0, 20.0, 10.0).with_anchor(TextAnchor::Middle)
}

fn default_inset_x_label() -> TitleSpec {
    TitleSpec::new("Year", 140.0, 280.0, 10.0)
}

fn default_inset_y_label() -> TitleSpec {
    TitleSpec::new(format!("Population (in {UNITS_PLACEHOLDER})"), 15.0, 210.0, 10.0)
        .with_rotate(-90.0)
}
