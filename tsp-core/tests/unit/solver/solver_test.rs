use super::*;
use crate::helpers::models::*;
use crate::models::GraphGenerator;
use crate::helpers::utils::create_test_environment;

#[test]
fn can_parse_and_display_algorithm_names() {
    Algorithm::all().iter().for_each(|algorithm| {
        assert_eq!(Algorithm::from_str(algorithm.to_string().as_str()), Ok(*algorithm));
    });

    assert_eq!(Algorithm::from_str("branch-and-bound"), Ok(Algorithm::BranchAndBound));
    assert_eq!(Algorithm::from_str("genetic"), Err(GenericError::from("unknown algorithm: 'genetic'")));
}

parameterized_test! {can_solve_example_graph, (algorithm, expected_cost), {
    let graph = create_example_graph();

    let tour = create_solver(algorithm, create_test_environment()).solve(&graph, DEFAULT_START).expect("cannot solve");

    assert_eq!(tour.cost(), expected_cost);
    assert_eq!(tour.start(), Some(DEFAULT_START));
    assert!(tour.is_hamiltonian(&graph));
}}

can_solve_example_graph! {
    case01_backtracking: (Algorithm::Backtracking, 80.),
    case02_triangular: (Algorithm::Triangular, 95.),
    case03_nearest_neighbor: (Algorithm::NearestNeighbor, 80.),
    case04_christofides: (Algorithm::Christofides, 95.),
    case05_branch_and_bound: (Algorithm::BranchAndBound, 80.),
}

#[test]
fn can_return_error_for_unknown_start() {
    let graph = create_example_graph();

    Algorithm::all().iter().for_each(|&algorithm| {
        let result = create_solver(algorithm, create_test_environment()).solve(&graph, 42);

        assert_eq!(result, Err(SolverError::VertexNotFound(42)), "{algorithm}");
    });
}

parameterized_test! {can_return_infeasible_for_tiny_graph, size, {
    let graph = create_graph_with_edges(size, &[]);

    Algorithm::all().iter().for_each(|&algorithm| {
        let result = create_solver(algorithm, create_test_environment()).solve(&graph, 0);

        assert!(matches!(result, Err(SolverError::Infeasible(_))), "{algorithm}: {result:?}");
    });
}}

can_return_infeasible_for_tiny_graph! {
    case01_empty: 0,
    case02_single: 1,
}

#[test]
fn can_solve_two_vertices_by_reusing_single_edge() {
    let graph = create_graph_with_edges(2, &[(0, 1, 7.)]);

    Algorithm::all().iter().filter(|&&algorithm| algorithm != Algorithm::BranchAndBound).for_each(|&algorithm| {
        let tour = create_solver(algorithm, create_test_environment()).solve(&graph, 1).expect("cannot solve");

        assert_eq!(tour.path(), &[1, 0, 1], "{algorithm}");
        assert_eq!(tour.cost(), 14., "{algorithm}");
    });

    let result = create_solver(Algorithm::BranchAndBound, create_test_environment()).solve(&graph, 1);
    assert!(matches!(result, Err(SolverError::Infeasible(_))));
}

#[test]
fn can_find_same_optimum_with_exact_algorithms() {
    (0..3).for_each(|seed| {
        let graph = GraphGenerator::new(7).with_seed(seed).build();
        let solve = |algorithm| create_solver(algorithm, create_test_environment()).solve(&graph, 0).expect("cannot solve");

        let optimum = solve(Algorithm::Backtracking).cost();

        assert_eq!(solve(Algorithm::BranchAndBound).cost(), optimum);
        [Algorithm::Triangular, Algorithm::NearestNeighbor, Algorithm::Christofides].into_iter().for_each(|algorithm| {
            let tour = solve(algorithm);
            assert!(tour.cost() >= optimum, "{algorithm}: {} < {optimum}", tour.cost());
            assert!(tour.is_hamiltonian(&graph));
        });
    });
}

#[test]
fn can_repeat_solving_with_same_result() {
    let graph = GraphGenerator::new(8).with_seed(5).build();

    Algorithm::all().iter().for_each(|&algorithm| {
        let solver = create_solver(algorithm, create_test_environment());

        assert_eq!(solver.solve(&graph, 3), solver.solve(&graph, 3), "{algorithm}");
    });
}

#[test]
fn can_solve_same_graph_concurrently() {
    let graph = GraphGenerator::new(8).with_seed(11).build();

    let results = std::thread::scope(|scope| {
        let handles = Algorithm::all()
            .iter()
            .flat_map(|&algorithm| [algorithm, algorithm])
            .map(|algorithm| {
                let graph = &graph;
                scope.spawn(move || create_solver(algorithm, create_test_environment()).solve(graph, 0))
            })
            .collect::<Vec<_>>();

        handles.into_iter().map(|handle| handle.join().expect("thread failed")).collect::<Vec<_>>()
    });

    results.chunks(2).for_each(|pair| assert_eq!(pair[0], pair[1]));
}

#[test]
fn can_display_solver_errors() {
    assert_eq!(SolverError::VertexNotFound(3).to_string(), "cannot find start vertex: '3'");
    assert_eq!(
        SolverError::Disconnected { reached: 2, total: 5 }.to_string(),
        "graph is disconnected: only 2 of 5 vertices are reachable"
    );
    assert_eq!(GenericError::from(SolverError::Interrupted).to_string(), "search is interrupted before any tour was found");
}
