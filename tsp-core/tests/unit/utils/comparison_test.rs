use super::*;

parameterized_test! {can_compare_floats, (a, b, expected), {
    assert_eq!(compare_floats(a, b), expected);
}}

can_compare_floats! {
    case01_less: (1., 2., Ordering::Less),
    case02_greater: (2., 1., Ordering::Greater),
    case03_equal: (1.5, 1.5, Ordering::Equal),
    case04_infinity: (Float::INFINITY, 1E10, Ordering::Greater),
    case05_nan_left: (Float::NAN, 1., Ordering::Greater),
    case06_nan_right: (1., Float::NAN, Ordering::Less),
    case07_nan_both: (Float::NAN, Float::NAN, Ordering::Equal),
}

#[test]
fn can_sort_with_nan_at_the_end() {
    let mut values = vec![3., Float::NAN, 1., 2.];

    values.sort_by(|a, b| compare_floats(*a, *b));

    assert_eq!(&values[..3], &[1., 2., 3.]);
    assert!(values[3].is_nan());
}
