use crate::svg::{fmt_num, SvgFragment};
use gapviz_core::spec::mark::SymbolMarkSpec;
use gapviz_core::spec::title::TitleSpec;

/// SVG path data for a polyline through the pixel pairs, skipping any pair
/// with a NaN coordinate. Returns an empty string when no pair is drawable.
pub fn polyline_path(xs: &[f64], ys: &[f64]) -> String {
    let mut d = String::new();
    for (x, y) in xs.iter().zip(ys) {
        if x.is_nan() || y.is_nan() {
            continue;
        }
        let command = if d.is_empty() { 'M' } else { 'L' };
        d.push_str(&format!("{command}{},{}", fmt_num(*x), fmt_num(*y)));
    }
    d
}

pub fn render_symbol(cx: f64, cy: f64, radius: f64, style: &SymbolMarkSpec, svg: &mut SvgFragment) {
    svg.circle(
        cx,
        cy,
        radius,
        &format!(
            r#"class="dot" stroke="{}" stroke-width="{}" fill="{}""#,
            style.stroke,
            fmt_num(style.stroke_width),
            style.fill
        ),
    );
}

/// Render a static text element; `text_override` substitutes the content
/// while keeping the spec's position and styling.
pub fn render_title(title: &TitleSpec, text_override: Option<&str>, svg: &mut SvgFragment) {
    let text = text_override.unwrap_or(&title.text);
    if text.is_empty() {
        return;
    }
    let mut attrs = format!(r#"font-size="{}pt""#, fmt_num(title.font_size));
    if let Some(anchor) = &title.anchor {
        attrs.push_str(&format!(r#" text-anchor="{}""#, anchor.as_str()));
    }
    match title.rotate {
        Some(angle) => {
            let transform = format!(
                "translate({}, {})rotate({})",
                fmt_num(title.x),
                fmt_num(title.y),
                fmt_num(angle)
            );
            svg.text_transformed(&transform, text, &attrs);
        }
        None => svg.text(title.x, title.y, text, &attrs),
    }
}
