use clap::Parser;
use gapviz_common::data::table::Dataset;
use gapviz_common::error::{GapVizError, ResultWithContext, ToExternalError};
use gapviz_core::spec::chart::ChartSpec;
use gapviz_runtime::chart::ChartState;
use std::path::PathBuf;

/// Render a fertility / life-expectancy scatter chart with population
/// tooltips from a gapminder-style CSV.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// CSV dataset: a file path or an http(s) URL
    #[clap(long)]
    pub data: String,

    /// Chart spec JSON overriding the built-in defaults
    #[clap(long)]
    pub spec: Option<PathBuf>,

    /// Output SVG path
    #[clap(long, default_value = "chart.svg")]
    pub output: PathBuf,
}

fn main() -> Result<(), GapVizError> {
    env_logger::init();
    let args = Args::parse();

    let spec = match &args.spec {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read chart spec {}", path.display()))?;
            ChartSpec::from_json(&json)?
        }
        None => ChartSpec::default(),
    };

    let dataset = load_dataset(&args.data)?;
    log::info!("loaded {} rows from {}", dataset.len(), args.data);

    let state = ChartState::try_new(spec, dataset)?;
    let svg = state.render_svg()?;

    std::fs::write(&args.output, svg)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}

fn load_dataset(source: &str) -> Result<Dataset, GapVizError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let body = reqwest::blocking::get(source)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .external(format!("failed to fetch dataset from {source}"))?;
        Dataset::from_csv_str(&body)
    } else {
        Dataset::from_csv_path(source)
    }
}
