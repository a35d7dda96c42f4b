use gapviz_runtime::scale::{finite_extent, LinearScale};
use rstest::rstest;

#[rstest(
    value,
    expected,
    case(2000.0, 11.0),
    case(2003.0, 19.25),
    case(2008.0, 33.0),
    case(2016.0, 55.0)
)]
fn test_linear_scale_values(value: f64, expected: f64) {
    let scale = LinearScale::try_new((2000.0, 2016.0), (11.0, 55.0)).unwrap();
    float_cmp::assert_approx_eq!(f64, scale.scale(value), expected);
}

#[rstest(
    count,
    case(2),
    case(5),
    case(8),
    case(16)
)]
fn test_ticks_stay_inside_the_domain(count: usize) {
    let scale = LinearScale::try_new((0.5, 8.5), (50.0, 750.0)).unwrap();
    let ticks = scale.ticks(count);
    assert!(!ticks.is_empty());
    assert!(ticks.iter().all(|t| (0.5..=8.5).contains(t)));
}

#[test]
fn test_extent_bounds_every_numeric_value() {
    let values = [5.9, 2.32, f64::NAN, 4.68, 2.67, 5.5];
    let (lo, hi) = finite_extent(&values, "fertility").unwrap();
    for v in values.iter().filter(|v| !v.is_nan()) {
        assert!((lo..=hi).contains(v));
    }
}
