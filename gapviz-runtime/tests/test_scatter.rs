#[macro_use]
extern crate lazy_static;

mod util;

use gapviz_common::data::table::Dataset;
use gapviz_common::error::GapVizError;
use gapviz_core::spec::chart::ChartSpec;
use gapviz_runtime::chart::ChartState;
use util::GAPMINDER;

fn render_default(dataset: &Dataset) -> String {
    ChartState::try_new(ChartSpec::default(), dataset.clone())
        .unwrap()
        .render_svg()
        .unwrap()
}

#[test]
fn test_only_rows_from_the_plot_year_get_circles() {
    let svg = render_default(&GAPMINDER);
    // Five 1980 rows, but Samoa's life expectancy is missing, so four
    // circles are drawn. The 1975/1990 rows produce none.
    assert_eq!(svg.matches("<circle").count(), 4);
}

#[test]
fn test_labels_require_the_population_threshold() {
    let svg = render_default(&GAPMINDER);
    let labels: Vec<&str> = svg
        .lines()
        .filter(|line| line.contains(r#"class="label""#))
        .collect();
    assert_eq!(labels.len(), 2);
    assert!(labels.iter().any(|l| l.contains(">China<")));
    assert!(labels.iter().any(|l| l.contains(">India<")));
}

#[test]
fn test_chart_titles_are_rendered() {
    let svg = render_default(&GAPMINDER);
    assert!(svg.contains(">Fertility vs Life Expectancy (1980)<"));
    assert!(svg.contains(">Fertility (Avg Children per Woman)<"));
    assert!(svg.contains(r#"transform="translate(15, 360)rotate(-90)""#));
}

#[test]
fn test_rendering_is_idempotent() {
    let first = render_default(&GAPMINDER);
    let second = render_default(&GAPMINDER);
    assert_eq!(first, second);
}

#[test]
fn test_year_without_plottable_rows_fails() {
    let dataset = Dataset::from_csv_str(
        "country,year,fertility,life_expectancy,population\n\
         Chile,1990,2.62,73.6,13274000\n",
    )
    .unwrap();
    let state = ChartState::try_new(ChartSpec::default(), dataset).unwrap();
    assert!(matches!(
        state.render_svg(),
        Err(GapVizError::EmptyRangeError(_, _))
    ));
}

#[test]
fn test_empty_dataset_is_rejected() {
    let dataset =
        Dataset::from_csv_str("country,year,fertility,life_expectancy,population\n").unwrap();
    assert!(matches!(
        ChartState::try_new(ChartSpec::default(), dataset),
        Err(GapVizError::DataError(_, _))
    ));
}
