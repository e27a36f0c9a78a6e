use super::*;
use crate::helpers::models::*;
use crate::models::GraphGenerator;
use crate::helpers::utils::*;

/// Two cliques sharing the vertex `size - 1`: every vertex has degree of at least two, but
/// there is no hamiltonian cycle.
fn create_two_cliques_graph(size: usize) -> Graph {
    let shared = size - 1;
    let clique = |offset: usize| (offset..offset + size).map(move |id| if id == offset + size - 1 { shared } else { id });

    let mut edges = vec![];
    [0, size].into_iter().for_each(|offset| {
        let vertices = clique(offset).collect::<Vec<_>>();
        vertices.iter().enumerate().for_each(|(idx, &from)| {
            vertices[idx + 1..].iter().for_each(|&to| edges.push((from, to, 1.)));
        });
    });

    create_graph_with_edges(2 * size - 1, edges.as_slice())
}

#[test]
fn can_find_optimal_tour() {
    let graph = create_example_graph();

    let tour = BranchAndBound::new(create_test_environment()).solve(&graph, 0).expect("cannot solve");

    assert_eq!(tour.path(), &[0, 1, 3, 2, 0]);
    assert_eq!(tour.cost(), 80.);
}

#[test]
fn can_find_same_cost_as_backtracking_on_sparse_graph() {
    let graph = create_geo_graph();
    let environment = create_test_environment();

    let expected = Backtracking::new(environment.clone()).solve(&graph, 0).expect("cannot solve");
    let actual = BranchAndBound::new(environment).solve(&graph, 0).expect("cannot solve");

    assert_eq!(actual.cost(), expected.cost());
    assert!(actual.is_hamiltonian(&graph));
}

#[test]
fn can_reject_vertex_with_low_degree() {
    let graph = create_dead_end_graph(4);

    let result = BranchAndBound::new(create_test_environment()).solve(&graph, 1);

    assert_eq!(result, Err(SolverError::Infeasible("vertex '0' has 1 neighbours, at least two are required".to_string())));
}

#[test]
fn can_count_distinct_neighbours_as_degree() {
    let graph = create_graph_with_edges(3, &[(0, 1, 1.), (0, 1, 2.), (1, 2, 1.), (1, 2, 2.)]);

    let result = BranchAndBound::new(create_test_environment()).solve(&graph, 0);

    assert!(matches!(result, Err(SolverError::Infeasible(_))));
}

#[test]
fn can_return_infeasible_without_hamiltonian_cycle() {
    let graph = create_two_cliques_graph(3);

    let result = BranchAndBound::new(create_test_environment()).solve(&graph, 0);

    assert_eq!(result, Err(SolverError::Infeasible("graph has no hamiltonian cycle".to_string())));
}

#[test]
fn can_return_interrupted_when_quota_reached_before_any_tour() {
    let graph = create_two_cliques_graph(6);

    let result = BranchAndBound::new(create_test_environment_with_quota(true)).solve(&graph, 0);

    assert_eq!(result, Err(SolverError::Interrupted));
}

#[test]
fn can_return_best_known_tour_when_quota_reached() {
    let graph = GraphGenerator::new(12).with_seed(7).build();

    let tour = BranchAndBound::new(create_test_environment_with_quota(true)).solve(&graph, 0).expect("cannot solve");

    assert!(tour.is_hamiltonian(&graph));
}

#[test]
fn can_ignore_quota_which_is_not_reached() {
    let graph = GraphGenerator::new(7).with_seed(2).build();

    let limited = BranchAndBound::new(create_test_environment_with_quota(false)).solve(&graph, 0);
    let unlimited = BranchAndBound::new(create_test_environment()).solve(&graph, 0);

    assert_eq!(limited, unlimited);
}
