use super::*;

#[test]
fn can_calculate_zero_distance_for_same_point() {
    let point = Coordinate::new(52.52, 13.405);

    assert_eq!(haversine_distance(&point, &point), 0.);
}

#[test]
fn can_calculate_quarter_of_meridian() {
    let distance = haversine_distance(&Coordinate::new(0., 0.), &Coordinate::new(90., 0.));

    assert!((distance - std::f64::consts::PI * EARTH_RADIUS / 2.).abs() < 1E-6);
}

#[test]
fn can_calculate_distance_between_cities() {
    let berlin = Coordinate::new(52.52, 13.405);
    let munich = Coordinate::new(48.137, 11.575);

    let distance = haversine_distance(&berlin, &munich);

    assert!(distance > 500_000. && distance < 510_000., "unexpected distance: {distance}");
}

#[test]
fn can_calculate_symmetric_distance() {
    let first = Coordinate::new(-33.868, 151.209);
    let second = Coordinate::new(40.712, -74.006);

    let forward = haversine_distance(&first, &second);
    let backward = haversine_distance(&second, &first);

    assert!((forward - backward).abs() < 1E-6);
}
