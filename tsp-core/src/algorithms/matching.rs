#[cfg(test)]
#[path = "../../tests/unit/algorithms/matching_test.rs"]
mod matching_test;

use crate::utils::Float;

/// Max amount of candidates for which an exact matching is computed.
pub const EXACT_MATCHING_LIMIT: usize = 20;

/// Specifies how vertices with odd degree are paired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchingMode {
    /// Each unmatched vertex, in the given order, is paired with its closest unmatched partner.
    /// Fast, but gives no minimum weight guarantee.
    #[default]
    Greedy,
    /// Minimum weight perfect matching computed by dynamic programming over subsets.
    /// Limited to `EXACT_MATCHING_LIMIT` candidates.
    Exact,
}

/// Pairs candidates greedily: the first unmatched candidate takes its closest unmatched partner,
/// ties are resolved in favor of the partner which comes first.
pub fn greedy_matching<F>(candidates: &[usize], distance: F) -> Vec<(usize, usize)>
where
    F: Fn(usize, usize) -> Float,
{
    let mut matched = vec![false; candidates.len()];
    let mut pairs = Vec::with_capacity(candidates.len() / 2);

    for idx in 0..candidates.len() {
        if matched[idx] {
            continue;
        }

        let partner = (0..candidates.len())
            .filter(|&other| other != idx && !matched[other])
            .map(|other| (other, distance(candidates[idx], candidates[other])))
            .fold(None, |best: Option<(usize, Float)>, (other, cost)| match best {
                Some((_, best_cost)) if best_cost <= cost => best,
                _ => Some((other, cost)),
            });

        if let Some((other, _)) = partner {
            matched[idx] = true;
            matched[other] = true;
            pairs.push((candidates[idx], candidates[other]));
        }
    }

    pairs
}

/// Computes a minimum weight perfect matching. Returns `None` when amount of candidates is odd
/// or exceeds `EXACT_MATCHING_LIMIT`.
pub fn exact_matching<F>(candidates: &[usize], distance: F) -> Option<Vec<(usize, usize)>>
where
    F: Fn(usize, usize) -> Float,
{
    let size = candidates.len();
    if size % 2 != 0 || size > EXACT_MATCHING_LIMIT {
        return None;
    }

    let costs = candidates
        .iter()
        .map(|&from| candidates.iter().map(|&to| distance(from, to)).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let full = (1_usize << size) - 1;
    let mut best = vec![Float::INFINITY; full + 1];
    let mut choice = vec![(0_usize, 0_usize); full + 1];
    best[0] = 0.;

    for mask in 0..full {
        if !best[mask].is_finite() {
            continue;
        }

        // NOTE pairing the lowest free candidate first visits every matching exactly once
        let first = (0..size).find(|&idx| mask & (1 << idx) == 0).unwrap_or(size);
        for second in (first + 1)..size {
            if mask & (1 << second) != 0 {
                continue;
            }

            let next = mask | (1 << first) | (1 << second);
            let cost = best[mask] + costs[first][second];
            if cost < best[next] {
                best[next] = cost;
                choice[next] = (first, second);
            }
        }
    }

    let mut pairs = Vec::with_capacity(size / 2);
    let mut mask = full;
    while mask != 0 {
        let (first, second) = choice[mask];
        pairs.push((candidates[first], candidates[second]));
        mask &= !((1 << first) | (1 << second));
    }
    pairs.reverse();

    Some(pairs)
}
