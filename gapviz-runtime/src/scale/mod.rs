pub mod domain;
pub mod linear;

pub use domain::{find_min_max, finite_extent, AxisLimits};
pub use linear::LinearScale;
