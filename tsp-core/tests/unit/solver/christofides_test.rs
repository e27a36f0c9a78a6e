use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::*;

/// A complete graph where every vertex is close to the center and far from each other.
fn create_star_graph(leaves: usize) -> Graph {
    let mut edges = (1..=leaves).map(|leaf| (0, leaf, 1.)).collect::<Vec<_>>();
    (1..=leaves).for_each(|from| ((from + 1)..=leaves).for_each(|to| edges.push((from, to, 10.))));

    create_graph_with_edges(leaves + 1, edges.as_slice())
}

parameterized_test! {can_solve_example_graph, matching, {
    let graph = create_example_graph();

    let tour = Christofides::new(create_test_environment()).with_matching_mode(matching).solve(&graph, 0).expect("cannot solve");

    assert_eq!(tour.path(), &[0, 1, 2, 3, 0]);
    assert_eq!(tour.cost(), 95.);
}}

can_solve_example_graph! {
    case01_greedy: MatchingMode::Greedy,
    case02_exact: MatchingMode::Exact,
}

#[test]
fn can_stay_within_one_and_half_of_optimum_with_exact_matching() {
    (0..5).for_each(|seed| {
        let graph = create_metric_graph(7, seed);
        let environment = create_test_environment();

        let optimum = Backtracking::new(environment.clone()).solve(&graph, 0).expect("cannot solve").cost();
        let tour = Christofides::new(environment)
            .with_matching_mode(MatchingMode::Exact)
            .solve(&graph, 0)
            .expect("cannot solve");

        assert!(tour.is_hamiltonian(&graph));
        assert!(tour.cost() <= 1.5 * optimum + 1E-6, "{} > 1.5 * {optimum}", tour.cost());
    });
}

#[test]
fn can_fallback_to_greedy_matching_for_many_odd_vertices() {
    let graph = create_star_graph(EXACT_MATCHING_LIMIT + 2);
    let (environment, messages) = create_test_environment_with_messages();

    let tour = Christofides::new(environment).with_matching_mode(MatchingMode::Exact).solve(&graph, 0).expect("cannot solve");

    assert!(tour.is_hamiltonian(&graph));
    assert!(messages.lock().unwrap().iter().any(|msg| msg.contains("fallback to greedy")));
}

#[test]
fn can_log_lower_bound() {
    let (environment, messages) = create_test_environment_with_messages();

    Christofides::new(environment).solve(&create_example_graph(), 0).expect("cannot solve");

    assert!(messages.lock().unwrap().iter().any(|msg| msg == "christofides: lower bound is 45"));
}

#[test]
fn can_return_disconnected_in_adjacency_mode() {
    let graph = create_graph_with_edges(4, &[(0, 1, 1.), (2, 3, 1.)]);

    let result =
        Christofides::new(create_test_environment()).with_spanning_mode(SpanningMode::Adjacency).solve(&graph, 0);

    assert_eq!(result, Err(SolverError::Disconnected { reached: 2, total: 4 }));
}

parameterized_test! {can_solve_sparse_graph, (spanning, matching), {
    let graph = create_geo_graph();

    let tour = Christofides::new(create_test_environment())
        .with_spanning_mode(spanning)
        .with_matching_mode(matching)
        .solve(&graph, 2)
        .expect("cannot solve");

    assert_eq!(tour.start(), Some(2));
    assert!(tour.is_hamiltonian(&graph));
}}

can_solve_sparse_graph! {
    case01_complete_greedy: (SpanningMode::Complete, MatchingMode::Greedy),
    case02_adjacency_greedy: (SpanningMode::Adjacency, MatchingMode::Greedy),
    case03_adjacency_exact: (SpanningMode::Adjacency, MatchingMode::Exact),
}
