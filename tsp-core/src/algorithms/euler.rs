#[cfg(test)]
#[path = "../../tests/unit/algorithms/euler_test.rs"]
mod euler_test;

use crate::models::Graph;

/// Finds an Euler circuit starting at the vertex at given position.
///
/// The graph is expected to consist of bidirectional edge pairs: every pair is treated as one
/// undirected edge which must be traversed exactly once, parallel pairs are distinct edges.
/// Returns vertex positions in visiting order with the start repeated at the end, or `None`
/// when some vertex has odd degree or edges are not reachable from the start.
pub fn euler_circuit(graph: &Graph, start: usize) -> Option<Vec<usize>> {
    let size = graph.size();
    let mut adjacency = vec![Vec::<(usize, usize)>::new(); size];
    let mut edge_count = 0;

    for from in 0..size {
        graph.adjacency(from).filter(|&(to, _)| from < to).for_each(|(to, _)| {
            adjacency[from].push((to, edge_count));
            adjacency[to].push((from, edge_count));
            edge_count += 1;
        });
    }

    if adjacency.iter().any(|edges| edges.len() % 2 != 0) {
        return None;
    }

    let mut used = vec![false; edge_count];
    let mut cursors = vec![0_usize; size];
    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(edge_count + 1);

    while let Some(&current) = stack.last() {
        let edges = &adjacency[current];
        while cursors[current] < edges.len() && used[edges[cursors[current]].1] {
            cursors[current] += 1;
        }

        if let Some(&(next, edge)) = edges.get(cursors[current]) {
            used[edge] = true;
            stack.push(next);
        } else {
            circuit.push(current);
            stack.pop();
        }
    }

    circuit.reverse();

    if circuit.len() == edge_count + 1 { Some(circuit) } else { None }
}

/// Converts a walk into a Hamiltonian path by skipping repeated visits, first occurrences are kept.
pub fn shortcut(walk: &[usize]) -> Vec<usize> {
    let mut visited = vec![false; walk.iter().max().map_or(0, |&max| max + 1)];

    walk.iter()
        .copied()
        .filter(|&index| {
            let is_new = !visited[index];
            visited[index] = true;
            is_new
        })
        .collect()
}
