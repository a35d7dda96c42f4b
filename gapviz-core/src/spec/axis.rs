use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub orient: AxisOrient,

    pub ticks: usize,

    #[serde(default = "default_tick_size")]
    pub tick_size: f64,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl AxisSpec {
    pub fn new(orient: AxisOrient, ticks: usize) -> Self {
        Self {
            orient,
            ticks,
            tick_size: default_tick_size(),
            extra: Default::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrient {
    Bottom,
    Left,
}

fn default_tick_size() -> f64 {
    6.0
}
