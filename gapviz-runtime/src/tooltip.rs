use crate::axes::{draw_axes, AxisFrame};
use crate::marks::{polyline_path, render_title};
use crate::scale::{find_min_max, AxisLimits};
use crate::svg::{fmt_num, SvgFragment};
use gapviz_common::data::table::Dataset;
use gapviz_common::error::{GapVizError, Result};
use gapviz_core::spec::chart::ChartSpec;
use gapviz_core::spec::tooltip::UNITS_PLACEHOLDER;

/// Population series start out divided by this before unit selection.
pub const POPULATION_REDUCTION: f64 = 1000.0;
/// If the reduced series minimum exceeds this, the series is promoted from
/// thousands to millions.
pub const UNIT_PROMOTION_THRESHOLD: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Thousands,
    Millions,
}

impl Units {
    pub fn label(&self) -> &'static str {
        match self {
            Units::Thousands => "Thousands",
            Units::Millions => "Millions",
        }
    }
}

/// Pick the display units for a reduced population series. When the series
/// minimum is above the promotion threshold, values and limits are divided
/// down once more and the series is labeled in millions.
pub fn select_units(values: &mut [f64], limits: &mut AxisLimits) -> Units {
    if limits.y_min > UNIT_PROMOTION_THRESHOLD {
        limits.y_min /= UNIT_PROMOTION_THRESHOLD;
        limits.y_max /= UNIT_PROMOTION_THRESHOLD;
        for value in values.iter_mut() {
            *value /= UNIT_PROMOTION_THRESHOLD;
        }
        Units::Millions
    } else {
        Units::Thousands
    }
}

/// Render the hover inset for one country: a line chart of population over
/// time inside a square canvas, pre-built so every hover shows the same
/// single chart instead of accumulating new ones.
///
/// A country whose population series has no numeric values gets no inset;
/// the main chart is unaffected.
pub fn render_inset(
    spec: &ChartSpec,
    dataset: &Dataset,
    country: &str,
    cx: f64,
    cy: f64,
    svg: &mut SvgFragment,
) -> Result<()> {
    let (years, populations) = dataset.series_for(country);
    let mut values: Vec<f64> = populations
        .iter()
        .map(|p| p / POPULATION_REDUCTION)
        .collect();

    let mut limits = match find_min_max(&years, &values) {
        Ok(limits) => limits,
        Err(err @ GapVizError::EmptyRangeError(_, _)) => {
            log::warn!("no population series for {country}: {err}");
            return Ok(());
        }
        Err(err) => return Err(err),
    };
    let units = select_units(&mut values, &mut limits);

    let ts = &spec.tooltip;
    let tx = (cx + ts.offset.x).clamp(0.0, spec.width - ts.size);
    let ty = (cy + ts.offset.y).clamp(0.0, spec.height - ts.size);

    svg.open_group(&format!(
        r#"class="tooltip" transform="translate({},{})""#,
        fmt_num(tx),
        fmt_num(ty)
    ));
    svg.rect(
        0.0,
        0.0,
        ts.size,
        ts.size,
        r##"fill="white" stroke="#cccccc""##,
    );

    let frame = AxisFrame::from_spec(&ts.frame);
    let mapping = draw_axes(&limits, &years, &values, &frame, svg)?;

    let d = polyline_path(&mapping.x, &mapping.y);
    if !d.is_empty() {
        svg.path(
            &d,
            &format!(
                r#"fill="none" stroke="{}" stroke-width="{}""#,
                ts.line.stroke,
                fmt_num(ts.line.stroke_width)
            ),
        );
    }

    render_title(&ts.title, Some(country), svg);
    render_title(&ts.x_label, None, svg);
    let y_label_text = ts.y_label.text.replace(UNITS_PLACEHOLDER, units.label());
    render_title(&ts.y_label, Some(&y_label_text), svg);

    svg.close_group();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits_for(values: &[f64]) -> AxisLimits {
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        AxisLimits {
            x_min: 1980.0,
            x_max: 1990.0,
            y_min: lo,
            y_max: hi,
        }
    }

    #[test]
    fn test_small_series_stays_in_thousands() {
        let mut values = vec![500.0, 800.0];
        let mut limits = limits_for(&values);
        let units = select_units(&mut values, &mut limits);
        assert_eq!(units, Units::Thousands);
        assert_eq!(values, vec![500.0, 800.0]);
    }

    #[test]
    fn test_large_series_is_promoted_to_millions() {
        // Raw populations of 50M and 52M, already reduced once by 1000.
        let mut values = vec![50_000.0, 52_000.0];
        let mut limits = limits_for(&values);
        let units = select_units(&mut values, &mut limits);
        assert_eq!(units, Units::Millions);
        assert_eq!(values, vec![50.0, 52.0]);
        assert_eq!(limits.y_min, 50.0);
        assert_eq!(limits.y_max, 52.0);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut values = vec![1000.0, 2000.0];
        let mut limits = limits_for(&values);
        assert_eq!(select_units(&mut values, &mut limits), Units::Thousands);
    }
}
