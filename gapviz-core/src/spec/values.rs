use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// A closed numeric interval, e.g. the pixel range of the radius scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtentSpec {
    pub min: f64,
    pub max: f64,
}

impl ExtentSpec {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// A pixel offset relative to an anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffsetSpec {
    pub x: f64,
    pub y: f64,
}
