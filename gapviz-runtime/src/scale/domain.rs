use gapviz_common::error::{GapVizError, Result};
use itertools::{Itertools, MinMaxResult};
use ordered_float::OrderedFloat;

/// Data limits for the two plotted dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Independent min/max over two parallel sequences, ignoring NaN entries.
///
/// A dimension with no numeric values at all fails with
/// `GapVizError::EmptyRangeError` rather than producing infinite limits.
pub fn find_min_max(xs: &[f64], ys: &[f64]) -> Result<AxisLimits> {
    let (x_min, x_max) = finite_extent(xs, "x")?;
    let (y_min, y_max) = finite_extent(ys, "y")?;
    Ok(AxisLimits {
        x_min,
        x_max,
        y_min,
        y_max,
    })
}

/// Min/max of one sequence, ignoring NaN entries.
pub fn finite_extent(values: &[f64], dimension: &str) -> Result<(f64, f64)> {
    let result = values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .map(OrderedFloat)
        .minmax();
    match result {
        MinMaxResult::NoElements => Err(GapVizError::empty_range(format!(
            "no numeric values in the {dimension} dimension"
        ))),
        MinMaxResult::OneElement(v) => Ok((v.0, v.0)),
        MinMaxResult::MinMax(lo, hi) => Ok((lo.0, hi.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_entries_are_ignored() {
        let xs = [2.0, f64::NAN, 8.5, 0.5];
        let ys = [70.0, 45.0, f64::NAN, 82.0];
        let limits = find_min_max(&xs, &ys).unwrap();
        assert_eq!(limits.x_min, 0.5);
        assert_eq!(limits.x_max, 8.5);
        assert_eq!(limits.y_min, 45.0);
        assert_eq!(limits.y_max, 82.0);
    }

    #[test]
    fn test_all_nan_dimension_fails() {
        let xs = [1.0, 2.0];
        let ys = [f64::NAN, f64::NAN];
        assert!(matches!(
            find_min_max(&xs, &ys),
            Err(GapVizError::EmptyRangeError(_, _))
        ));
    }

    #[test]
    fn test_single_value_collapses_to_point_range() {
        let (lo, hi) = finite_extent(&[42.0, f64::NAN], "x").unwrap();
        assert_eq!((lo, hi), (42.0, 42.0));
    }
}
