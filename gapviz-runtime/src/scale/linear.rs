use float_cmp::approx_eq;
use gapviz_common::error::{GapVizError, Result};

/// A monotonic linear map from a numeric domain to a pixel range.
///
/// The domain may be inverted (`domain.0 > domain.1`) so that larger data
/// values map to smaller pixel positions, which is how the y axis places
/// larger values toward the top of the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn try_new(domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(GapVizError::specification(format!(
                "linear scale domain [{}, {}] is not finite",
                domain.0, domain.1
            )));
        }
        if approx_eq!(f64, domain.0, domain.1, ulps = 2) {
            return Err(GapVizError::specification(format!(
                "linear scale domain [{}, {}] has zero span",
                domain.0, domain.1
            )));
        }
        Ok(Self { domain, range })
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        (value - d0) / (d1 - d0) * (r1 - r0) + r0
    }

    /// Map a whole sequence, preserving length and order. NaN passes through
    /// so callers keep index alignment with the source rows.
    pub fn scale_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|v| self.scale(*v)).collect()
    }

    /// Tick values at multiples of 1, 2 or 5 times a power of ten, chosen so
    /// that roughly `count` ticks fall inside the domain. Returned in domain
    /// order, so an inverted domain yields descending ticks.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let reversed = d1 < d0;
        let (start, stop) = if reversed { (d1, d0) } else { (d0, d1) };
        let step = tick_step(start, stop, count.max(1));
        if !step.is_finite() || step <= 0.0 {
            return Vec::new();
        }
        let lo = (start / step).ceil();
        let hi = (stop / step).floor();
        if hi < lo {
            return Vec::new();
        }
        let n = (hi - lo) as usize;
        let mut ticks: Vec<f64> = (0..=n).map(|i| (lo + i as f64) * step).collect();
        if reversed {
            ticks.reverse();
        }
        ticks
    }
}

fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let e10 = 50.0_f64.sqrt();
    let e5 = 10.0_f64.sqrt();
    let e2 = 2.0_f64.sqrt();
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10.0_f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };
    factor * 10.0_f64.powf(power)
}
