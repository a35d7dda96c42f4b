use crate::spec::scale::RadiusScaleSpec;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Styling and filtering for the scatter's circle marks and country labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolMarkSpec {
    /// Only rows from this year produce circles.
    pub year: i32,

    pub stroke: String,

    pub stroke_width: f64,

    pub fill: String,

    #[serde(default)]
    pub radius: RadiusScaleSpec,

    /// Horizontal offset of the country label from the circle center.
    pub label_offset: f64,

    /// Labels are drawn only for rows whose population exceeds this.
    pub label_min_population: f64,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Default for SymbolMarkSpec {
    fn default() -> Self {
        Self {
            year: 1980,
            stroke: "#3e72a3".to_string(),
            stroke_width: 2.0,
            fill: "none".to_string(),
            radius: Default::default(),
            label_offset: 20.0,
            label_min_population: 100_000_000.0,
            extra: Default::default(),
        }
    }
}

/// Styling for the tooltip's population line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineMarkSpec {
    pub stroke: String,

    pub stroke_width: f64,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Default for LineMarkSpec {
    fn default() -> Self {
        Self {
            stroke: "steelblue".to_string(),
            stroke_width: 1.5,
            extra: Default::default(),
        }
    }
}
