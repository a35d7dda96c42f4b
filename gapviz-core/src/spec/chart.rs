use crate::spec::mark::SymbolMarkSpec;
use crate::spec::scale::AxisFrameSpec;
use crate::spec::title::ChartTitlesSpec;
use crate::spec::tooltip::TooltipSpec;
use gapviz_common::error::{GapVizError, Result, ResultWithContext};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Top-level chart specification. `ChartSpec::default()` reproduces the
/// reference fertility / life-expectancy chart; any field can be overridden
/// from a JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    #[serde(default)]
    pub frame: AxisFrameSpec,

    #[serde(default)]
    pub symbol: SymbolMarkSpec,

    #[serde(default)]
    pub titles: ChartTitlesSpec,

    #[serde(default)]
    pub tooltip: TooltipSpec,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            frame: Default::default(),
            symbol: Default::default(),
            titles: Default::default(),
            tooltip: Default::default(),
            extra: Default::default(),
        }
    }
}

impl ChartSpec {
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: ChartSpec =
            serde_json::from_str(json).with_context(|| "failed to parse chart spec")?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .with_context(|| "failed to serialize chart spec")
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(GapVizError::specification(format!(
                "canvas dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        validate_frame(&self.frame, self.width, self.height, "chart frame")?;
        validate_frame(
            &self.tooltip.frame,
            self.tooltip.size,
            self.tooltip.size,
            "tooltip frame",
        )?;
        if self.tooltip.size > self.width || self.tooltip.size > self.height {
            return Err(GapVizError::specification(format!(
                "tooltip size {} does not fit the {}x{} canvas",
                self.tooltip.size, self.width, self.height
            )));
        }
        let radius = &self.symbol.radius.range;
        if radius.min < 0.0 || radius.max < radius.min {
            return Err(GapVizError::specification(format!(
                "radius range [{}, {}] is not a valid pixel interval",
                radius.min, radius.max
            )));
        }
        let opacity = self.tooltip.fade.opacity;
        if !(0.0..=1.0).contains(&opacity) {
            return Err(GapVizError::specification(format!(
                "tooltip opacity {opacity} is outside [0, 1]"
            )));
        }
        Ok(())
    }
}

fn validate_frame(frame: &AxisFrameSpec, width: f64, height: f64, what: &str) -> Result<()> {
    if !(frame.border >= 0.0)
        || frame.x_extent <= frame.border
        || frame.y_extent <= frame.border
    {
        return Err(GapVizError::specification(format!(
            "{what}: extents ({}, {}) must exceed the border {}",
            frame.x_extent, frame.y_extent, frame.border
        )));
    }
    if frame.x_extent > width || frame.y_extent > height {
        return Err(GapVizError::specification(format!(
            "{what}: extents ({}, {}) exceed the {width}x{height} canvas",
            frame.x_extent, frame.y_extent
        )));
    }
    if frame.x_axis.ticks == 0 || frame.y_axis.ticks == 0 {
        return Err(GapVizError::specification(format!(
            "{what}: tick counts must be at least 1"
        )));
    }
    Ok(())
}

fn default_width() -> f64 {
    800.0
}

fn default_height() -> f64 {
    600.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_spec_is_valid() {
        let spec = ChartSpec::default();
        assert!(spec.validate().is_ok());
        assert_eq!(spec.width, 800.0);
        assert_eq!(spec.height, 600.0);
        assert_eq!(spec.frame.border, 50.0);
        assert_eq!(spec.frame.x_axis.ticks, 16);
        assert_eq!(spec.tooltip.frame.border, 55.0);
        assert_eq!(spec.symbol.year, 1980);
    }

    #[test]
    fn test_json_round_trip() {
        let spec = ChartSpec::default();
        let json = spec.to_json().unwrap();
        let parsed = ChartSpec::from_json(&json).unwrap();
        assert_eq!(spec, parsed);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = json!({"width": 1000.0, "symbol": {
            "year": 1990,
            "stroke": "#222222",
            "stroke_width": 1.0,
            "fill": "none",
            "label_offset": 12.0,
            "label_min_population": 5.0e7
        }})
        .to_string();
        let spec = ChartSpec::from_json(&json).unwrap();
        assert_eq!(spec.width, 1000.0);
        assert_eq!(spec.height, 600.0);
        assert_eq!(spec.symbol.year, 1990);
        assert_eq!(spec.symbol.radius.range.min, 3.0);
        assert_eq!(spec.tooltip.fade.fade_in_ms, 200);
    }

    #[test]
    fn test_validate_rejects_bad_frame() {
        let mut spec = ChartSpec::default();
        spec.frame.x_extent = 10.0;
        assert!(matches!(
            spec.validate(),
            Err(gapviz_common::error::GapVizError::SpecificationError(_, _))
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_tooltip() {
        let mut spec = ChartSpec::default();
        spec.tooltip.size = 700.0;
        assert!(spec.validate().is_err());
    }
}
