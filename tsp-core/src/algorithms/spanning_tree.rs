#[cfg(test)]
#[path = "../../tests/unit/algorithms/spanning_tree_test.rs"]
mod spanning_tree_test;

use crate::models::{Graph, VertexId};
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Specifies which vertex pairs are considered while growing a spanning tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpanningMode {
    /// `Complete` for fully connected graphs, `Adjacency` for sparse ones.
    #[default]
    Auto,
    /// Every pair of vertices is connected with its best known graph distance.
    Complete,
    /// Only existing outgoing edges are used.
    Adjacency,
}

impl SpanningMode {
    /// Resolves `Auto` mode for the given graph, other modes are returned as is.
    pub fn resolve(self, graph: &Graph) -> SpanningMode {
        match self {
            SpanningMode::Auto if graph.is_complete() => SpanningMode::Complete,
            SpanningMode::Auto => SpanningMode::Adjacency,
            mode => mode,
        }
    }
}

/// A minimum spanning tree rooted at some vertex, vertices are addressed by graph positions.
#[derive(Clone, Debug)]
pub struct SpanningTree {
    root: usize,
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    keys: Vec<Float>,
    reached: usize,
}

impl SpanningTree {
    /// Returns root position.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Returns parent position of the vertex.
    pub fn parent(&self, index: usize) -> Option<usize> {
        self.parents[index]
    }

    /// Returns children positions of the vertex in graph order.
    pub fn children(&self, index: usize) -> &[usize] {
        self.children[index].as_slice()
    }

    /// Returns tree edges as `(parent, child, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Float)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| parent.map(|parent| (parent, child, self.keys[child])))
    }

    /// Returns total weight of the tree which is a lower bound of an optimal tour.
    pub fn weight(&self) -> Float {
        self.edges().map(|(_, _, weight)| weight).sum()
    }

    /// Returns a degree of the vertex in the tree.
    pub fn degree(&self, index: usize) -> usize {
        self.parents[index].map_or(0, |_| 1) + self.children[index].len()
    }

    /// Returns amount of vertices reached from the root.
    pub fn reached(&self) -> usize {
        self.reached
    }

    /// Returns true if the tree spans every vertex of the graph.
    pub fn is_spanning(&self) -> bool {
        self.reached == self.parents.len()
    }

    /// Returns vertex positions in preorder starting from the root.
    pub fn preorder(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.reached);
        let mut stack = vec![self.root];

        while let Some(current) = stack.pop() {
            order.push(current);
            stack.extend(self.children[current].iter().rev());
        }

        order
    }
}

/// Builds a minimum spanning tree with Prim's algorithm starting from the vertex with given id.
/// Returns `None` if there is no such vertex.
pub fn build_spanning_tree(graph: &Graph, start: VertexId, mode: SpanningMode) -> Option<SpanningTree> {
    let root = graph.find_vertex_index(start)?;
    let size = graph.size();
    let mode = mode.resolve(graph);

    let mut visited = vec![false; size];
    let mut keys = vec![Float::INFINITY; size];
    let mut parents = vec![None; size];
    let mut heap = BinaryHeap::new();
    let mut reached = 0;

    keys[root] = 0.;
    heap.push(HeapEntry { distance: 0., index: root });

    while let Some(HeapEntry { distance, index: current }) = heap.pop() {
        // NOTE lazy deletion: skip entries superseded by a shorter distance
        if visited[current] || distance > keys[current] {
            continue;
        }

        visited[current] = true;
        reached += 1;

        if reached == size {
            break;
        }

        let mut relax = |next: usize, distance: Float| {
            if !visited[next] && distance < keys[next] {
                keys[next] = distance;
                parents[next] = Some(current);
                heap.push(HeapEntry { distance, index: next });
            }
        };

        if mode == SpanningMode::Adjacency {
            graph.adjacency(current).for_each(|(next, weight)| relax(next, weight));
        } else {
            (0..size).for_each(|next| relax(next, graph.distance(current, next)));
        }
    }

    let children = parents.iter().enumerate().fold(vec![vec![]; size], |mut children, (child, parent)| {
        if let Some(parent) = parent {
            children[*parent].push(child);
        }
        children
    });

    Some(SpanningTree { root, parents, children, keys, reached })
}

/// A priority queue entry: the smallest distance is on top, ties are resolved by lower position.
struct HeapEntry {
    distance: Float,
    index: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_floats(other.distance, self.distance).then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}
