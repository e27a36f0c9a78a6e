use super::*;
use crate::models::GraphGenerator;

fn line_distance(positions: &[Float]) -> impl Fn(usize, usize) -> Float + '_ {
    move |from, to| (positions[from] - positions[to]).abs()
}

fn get_weight(pairs: &[(usize, usize)], distance: impl Fn(usize, usize) -> Float) -> Float {
    pairs.iter().map(|&(from, to)| distance(from, to)).sum()
}

#[test]
fn can_pair_closest_candidates_greedily() {
    let positions = [0., 1., -1., 5.];

    let pairs = greedy_matching(&[0, 1, 2, 3], line_distance(&positions));

    assert_eq!(pairs, vec![(0, 1), (2, 3)]);
}

#[test]
fn can_find_better_matching_than_greedy() {
    let positions = [0., 10., 11., 21.];
    let candidates = [1, 2, 0, 3];

    let greedy = greedy_matching(&candidates, line_distance(&positions));
    let exact = exact_matching(&candidates, line_distance(&positions)).expect("no matching");

    assert_eq!(greedy, vec![(1, 2), (0, 3)]);
    assert_eq!(get_weight(&greedy, line_distance(&positions)), 22.);
    assert_eq!(get_weight(&exact, line_distance(&positions)), 20.);
}

#[test]
fn can_match_every_candidate_exactly_once() {
    let positions = (0..12).map(|idx| (idx * idx) as Float).collect::<Vec<_>>();
    let candidates = (0..12).collect::<Vec<_>>();

    for pairs in [
        greedy_matching(&candidates, line_distance(&positions)),
        exact_matching(&candidates, line_distance(&positions)).expect("no matching"),
    ] {
        let mut matched = pairs.iter().flat_map(|&(from, to)| [from, to]).collect::<Vec<_>>();
        matched.sort_unstable();
        assert_eq!(matched, candidates);
    }
}

parameterized_test! {can_return_none_for_unsupported_exact_matching, size, {
    let positions = vec![0.; size];
    let candidates = (0..size).collect::<Vec<_>>();

    assert!(exact_matching(&candidates, line_distance(&positions)).is_none());
}}

can_return_none_for_unsupported_exact_matching! {
    case01_odd: 5,
    case02_above_limit: EXACT_MATCHING_LIMIT + 2,
}

#[test]
fn can_match_empty_candidates() {
    assert_eq!(exact_matching(&[], |_, _| 0.), Some(vec![]));
    assert!(greedy_matching(&[], |_, _| 0.).is_empty());
}

#[test]
fn can_find_exact_matching_not_worse_than_greedy() {
    (0..5).for_each(|seed| {
        let graph = GraphGenerator::new(12).with_seed(seed).build();
        let distance = |from: usize, to: usize| graph.distance(from, to);
        let candidates = (0..12).collect::<Vec<_>>();

        let greedy = greedy_matching(&candidates, distance);
        let exact = exact_matching(&candidates, distance).expect("no matching");

        assert!(get_weight(&exact, distance) <= get_weight(&greedy, distance));
    });
}
