pub mod axes;
pub mod chart;
pub mod marks;
pub mod scale;
pub mod scatter;
pub mod svg;
pub mod tooltip;
