use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::*;

#[test]
fn can_build_tour_moving_to_closest_vertex() {
    let graph = create_example_graph();

    let tour = NearestNeighbor::new(create_test_environment()).solve(&graph, 0).expect("cannot solve");

    assert_eq!(tour.path(), &[0, 1, 3, 2, 0]);
    assert_eq!(tour.cost(), 80.);
}

#[test]
fn can_prefer_first_vertex_on_tie() {
    let graph = create_line_graph(5);

    let tour = NearestNeighbor::new(create_test_environment()).solve(&graph, 2).expect("cannot solve");

    assert_eq!(tour.path(), &[2, 1, 0, 3, 4, 2]);
    assert_eq!(tour.cost(), 8.);
}

#[test]
fn can_use_coordinates_when_edges_are_missing() {
    let graph = create_geo_graph();

    let tour = NearestNeighbor::new(create_test_environment()).solve(&graph, 0).expect("cannot solve");

    assert!(tour.is_hamiltonian(&graph));
    assert!(tour.cost() > 0.);
}
