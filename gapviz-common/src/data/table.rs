use crate::data::row::Row;
use crate::error::{GapVizError, Result, ResultWithContext};
use ahash::AHashSet;
use std::io::Read;
use std::path::Path;

/// The loaded dataset: an ordered, immutable sequence of rows.
///
/// Column accessors return NaN for missing values so derived sequences stay
/// index-aligned with the row sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut rows: Vec<Row> = Vec::new();
        for record in csv_reader.deserialize() {
            let row: Row =
                record.with_context(|| format!("failed to parse csv row {}", rows.len() + 1))?;
            rows.push(row);
        }
        Ok(Self { rows })
    }

    pub fn from_csv_str(text: &str) -> Result<Self> {
        Self::from_csv_reader(text.as_bytes())
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open dataset {}", path.display()))?;
        Self::from_csv_reader(file)
            .with_context(|| format!("failed to load dataset {}", path.display()))
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn fertility(&self) -> Vec<f64> {
        self.rows.iter().map(Row::fertility_or_nan).collect()
    }

    pub fn life_expectancy(&self) -> Vec<f64> {
        self.rows.iter().map(Row::life_expectancy_or_nan).collect()
    }

    pub fn population(&self) -> Vec<f64> {
        self.rows.iter().map(Row::population_or_nan).collect()
    }

    /// Unique countries in first-appearance order.
    pub fn countries(&self) -> Vec<&str> {
        let mut seen: AHashSet<&str> = AHashSet::new();
        self.rows
            .iter()
            .map(|row| row.country.as_str())
            .filter(|country| seen.insert(country))
            .collect()
    }

    /// The `(year, population)` series for one country, in dataset order.
    /// Missing populations surface as NaN so the series stays aligned with
    /// the country's rows.
    pub fn series_for(&self, country: &str) -> (Vec<f64>, Vec<f64>) {
        let mut years = Vec::new();
        let mut populations = Vec::new();
        for row in self.rows.iter().filter(|row| row.country == country) {
            years.push(f64::from(row.year));
            populations.push(row.population_or_nan());
        }
        (years, populations)
    }

    /// Rows for one year, in dataset order.
    pub fn rows_for_year(&self, year: i32) -> Vec<&Row> {
        self.rows.iter().filter(|row| row.year == year).collect()
    }

    pub fn validate_non_empty(&self) -> Result<()> {
        if self.rows.is_empty() {
            return Err(GapVizError::data("dataset contains no rows"));
        }
        Ok(())
    }
}
