use crate::spec::values::TextAnchor;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleSpec {
    pub text: String,

    pub x: f64,

    pub y: f64,

    #[serde(default = "default_font_size")]
    pub font_size: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<TextAnchor>,

    /// Rotation in degrees, applied around `(x, y)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl TitleSpec {
    pub fn new<S: Into<String>>(text: S, x: f64, y: f64, font_size: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
            anchor: None,
            rotate: None,
            extra: Default::default(),
        }
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_rotate(mut self, rotate: f64) -> Self {
        self.rotate = Some(rotate);
        self
    }
}

/// The three static text elements of the main chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTitlesSpec {
    pub heading: TitleSpec,

    pub x_label: TitleSpec,

    pub y_label: TitleSpec,
}

impl Default for ChartTitlesSpec {
    fn default() -> Self {
        Self {
            heading: TitleSpec::new("Fertility vs Life Expectancy (1980)", 100.0, 40.0, 14.0),
            x_label: TitleSpec::new("Fertility (Avg Children per Woman)", 330.0, 590.0, 10.0),
            y_label: TitleSpec::new("Life Expectancy (years)", 15.0, 360.0, 10.0)
                .with_rotate(-90.0),
        }
    }
}

fn default_font_size() -> f64 {
    10.0
}
