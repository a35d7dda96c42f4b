use crate::scale::{AxisLimits, LinearScale};
use crate::svg::{fmt_num, SvgFragment};
use gapviz_common::error::Result;
use gapviz_core::spec::scale::AxisFrameSpec;

/// Half-unit buffer added to both ends of the x domain.
pub const X_DOMAIN_PAD: f64 = 0.5;
/// One-unit buffer added to both ends of the (inverted) y domain.
pub const Y_DOMAIN_PAD: f64 = 1.0;

/// Pixel rectangle and tick configuration for one call to [`draw_axes`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFrame {
    pub border: f64,
    pub x_extent: f64,
    pub y_extent: f64,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub tick_size: f64,
}

impl AxisFrame {
    pub fn from_spec(spec: &AxisFrameSpec) -> Self {
        Self {
            border: spec.border,
            x_extent: spec.x_extent,
            y_extent: spec.y_extent,
            x_ticks: spec.x_axis.ticks,
            y_ticks: spec.y_axis.ticks,
            tick_size: spec.x_axis.tick_size,
        }
    }
}

/// The scales built for one frame plus the pixel coordinates of every input
/// value, index-aligned with the source sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleMapping {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
}

/// Build the x and y scales for `limits` inside `frame`, map both input
/// sequences, and render tick marks along the bottom and left edges.
///
/// The y domain is written max-first so larger values land closer to the
/// top of the chart.
pub fn draw_axes(
    limits: &AxisLimits,
    xs: &[f64],
    ys: &[f64],
    frame: &AxisFrame,
    svg: &mut SvgFragment,
) -> Result<ScaleMapping> {
    let x_scale = LinearScale::try_new(
        (limits.x_min - X_DOMAIN_PAD, limits.x_max + X_DOMAIN_PAD),
        (frame.border, frame.x_extent),
    )?;
    let y_scale = LinearScale::try_new(
        (limits.y_max + Y_DOMAIN_PAD, limits.y_min - Y_DOMAIN_PAD),
        (frame.border, frame.y_extent),
    )?;

    render_x_axis(&x_scale, frame, svg);
    render_y_axis(&y_scale, frame, svg);

    Ok(ScaleMapping {
        x: x_scale.scale_all(xs),
        y: y_scale.scale_all(ys),
        x_scale,
        y_scale,
    })
}

fn render_x_axis(scale: &LinearScale, frame: &AxisFrame, svg: &mut SvgFragment) {
    svg.open_group(&format!(
        r#"class="axis" transform="translate(0,{})""#,
        fmt_num(frame.y_extent)
    ));
    svg.line(frame.border, 0.0, frame.x_extent, 0.0, r#"stroke="black""#);
    for value in scale.ticks(frame.x_ticks) {
        let px = scale.scale(value);
        svg.line(px, 0.0, px, frame.tick_size, r#"stroke="black""#);
        svg.text(
            px,
            frame.tick_size + 10.0,
            &fmt_num(value),
            r#"text-anchor="middle""#,
        );
    }
    svg.close_group();
}

fn render_y_axis(scale: &LinearScale, frame: &AxisFrame, svg: &mut SvgFragment) {
    svg.open_group(&format!(
        r#"class="axis" transform="translate({},0)""#,
        fmt_num(frame.border)
    ));
    svg.line(0.0, frame.border, 0.0, frame.y_extent, r#"stroke="black""#);
    for value in scale.ticks(frame.y_ticks) {
        let py = scale.scale(value);
        svg.line(0.0, py, -frame.tick_size, py, r#"stroke="black""#);
        svg.text(
            -frame.tick_size - 3.0,
            py + 3.0,
            &fmt_num(value),
            r#"text-anchor="end""#,
        );
    }
    svg.close_group();
}
