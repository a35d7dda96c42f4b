use crate::axes::{draw_axes, AxisFrame};
use crate::marks::{render_symbol, render_title};
use crate::scale::{find_min_max, finite_extent, LinearScale};
use crate::svg::{fmt_num, SvgFragment};
use crate::tooltip;
use gapviz_common::data::table::Dataset;
use gapviz_common::error::{Result, ResultWithContext};
use gapviz_core::spec::chart::ChartSpec;

/// Render the main scatter into `svg`: axes, one circle per row from the
/// configured year, country labels above the population threshold, chart
/// titles, and one hover inset per circle.
pub fn render_scatter(spec: &ChartSpec, dataset: &Dataset, svg: &mut SvgFragment) -> Result<()> {
    let rows = dataset.rows_for_year(spec.symbol.year);
    let xs: Vec<f64> = rows.iter().map(|row| row.fertility_or_nan()).collect();
    let ys: Vec<f64> = rows.iter().map(|row| row.life_expectancy_or_nan()).collect();

    let limits = find_min_max(&xs, &ys)
        .with_context(|| format!("no plottable rows for year {}", spec.symbol.year))?;
    let frame = AxisFrame::from_spec(&spec.frame);
    let mapping = draw_axes(&limits, &xs, &ys, &frame, svg)?;

    // Radius domain spans the population of every row, not just the
    // plotted year.
    let (pop_min, pop_max) = finite_extent(&dataset.population(), "population")?;
    let radius_range = &spec.symbol.radius.range;
    let radius_scale = LinearScale::try_new((pop_min, pop_max), (radius_range.min, radius_range.max))
        .with_context(|| "failed to build the population radius scale")?;

    let mut drawn = 0usize;
    for (i, row) in rows.iter().enumerate() {
        let (cx, cy) = (mapping.x[i], mapping.y[i]);
        if cx.is_nan() || cy.is_nan() {
            log::debug!("skipping {} {}: missing coordinate", row.country, row.year);
            continue;
        }
        let Some(population) = row.population else {
            log::debug!("skipping {} {}: missing population", row.country, row.year);
            continue;
        };

        svg.open_group(r#"class="point""#);
        render_symbol(cx, cy, radius_scale.scale(population), &spec.symbol, svg);
        if population > spec.symbol.label_min_population {
            svg.text(
                cx + spec.symbol.label_offset,
                cy,
                &row.country,
                r#"class="label" fill="black""#,
            );
        }
        tooltip::render_inset(spec, dataset, &row.country, cx, cy, svg)?;
        svg.close_group();
        drawn += 1;
    }
    log::info!(
        "plotted {drawn} of {} rows for year {}",
        rows.len(),
        spec.symbol.year
    );

    render_title(&spec.titles.heading, None, svg);
    render_title(&spec.titles.x_label, None, svg);
    render_title(&spec.titles.y_label, None, svg);

    Ok(())
}

/// Assemble the complete SVG document around the scatter content.
pub fn render_document(spec: &ChartSpec, dataset: &Dataset) -> Result<String> {
    let mut svg = SvgFragment::new();
    svg.raw(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_num(spec.width),
        h = fmt_num(spec.height)
    ));
    svg.raw(&style_block(spec));
    render_scatter(spec, dataset, &mut svg)?;
    svg.raw("</svg>");
    Ok(svg.into_string())
}

/// The hover state machine lives entirely in CSS: tooltips sit at opacity 0
/// and fade to the configured opacity while their point group is hovered.
fn style_block(spec: &ChartSpec) -> String {
    let fade = &spec.tooltip.fade;
    format!(
        "<style>\n\
         text {{ font-family: sans-serif; }}\n\
         .axis text {{ font-size: 10px; }}\n\
         .tooltip {{ opacity: 0; pointer-events: none; transition: opacity {out}ms; }}\n\
         .point:hover .tooltip {{ opacity: {opacity}; transition: opacity {fade_in}ms; }}\n\
         </style>",
        out = fade.fade_out_ms,
        opacity = fmt_num(fade.opacity),
        fade_in = fade.fade_in_ms
    )
}
