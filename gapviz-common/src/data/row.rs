use serde::{Deserialize, Deserializer, Serialize};

/// One `(country, year)` observation from the gapminder CSV.
///
/// `country` and `year` are required columns; the numeric indicator columns
/// are lenient: a value that fails to parse as a number (empty cell, `NA`,
/// stray text) is treated as missing rather than failing the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub country: String,

    pub year: i32,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub fertility: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub life_expectancy: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub population: Option<f64>,

    // Present in some exports of the dataset, not rendered anywhere.
    #[serde(default)]
    pub location: Option<String>,
}

impl Row {
    pub fn fertility_or_nan(&self) -> f64 {
        self.fertility.unwrap_or(f64::NAN)
    }

    pub fn life_expectancy_or_nan(&self) -> f64 {
        self.life_expectancy.unwrap_or(f64::NAN)
    }

    pub fn population_or_nan(&self) -> f64 {
        self.population.unwrap_or(f64::NAN)
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|s| s.trim().parse::<f64>().ok()))
}
