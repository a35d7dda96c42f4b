use gapviz_common::data::table::Dataset;

pub const GAPMINDER_CSV: &str = "\
country,year,fertility,life_expectancy,population
Chile,1975,2.95,64.5,10337000
Chile,1980,2.67,69.2,11174000
Chile,1990,2.62,73.6,13274000
China,1980,2.32,66.8,981235000
China,1990,2.51,69.5,1135185000
India,1980,4.68,55.3,698966000
India,1990,4.05,57.9,873277000
Samoa,1980,5.9,,155000
Samoa,1990,4.83,65.5,160000
Tonga,1980,5.5,68.3,92000
";

lazy_static! {
    pub static ref GAPMINDER: Dataset = Dataset::from_csv_str(GAPMINDER_CSV).unwrap();
}
