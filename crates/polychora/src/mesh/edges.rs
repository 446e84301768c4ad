//! Edge discovery from pairwise vertex distances.

use std::collections::HashSet;

use nalgebra::Vector4;

use crate::geom::float_eq;

use super::types::Edge;

/// All unordered vertex pairs whose distance matches `edge_length` under `float_eq`.
///
/// Complexity: O(V^2) distance evaluations. Output is in discovery order, which
/// is stable for a given vertex sequence. An empty result is not an error here;
/// it shows up downstream as an empty face/cell set.
pub fn discover_edges(vertices: &[Vector4<f64>], edge_length: f64, eps: f64) -> Vec<Edge> {
    let mut seen: HashSet<Edge> = HashSet::new();
    let mut edges = Vec::new();
    for (i, a) in vertices.iter().enumerate() {
        for (j, b) in vertices.iter().enumerate() {
            if i == j {
                continue;
            }
            if !float_eq((a - b).norm(), edge_length, eps) {
                continue;
            }
            let edge = Edge::new(i, j);
            if seen.insert(edge) {
                edges.push(edge);
            }
        }
    }
    tracing::debug!(vertices = vertices.len(), edges = edges.len(), "edges discovered");
    edges
}

/// Vertex → incident edge indices (unchecked; see `UniformIncidence`).
pub(crate) fn vertex_edge_lists(vertex_count: usize, edges: &[Edge]) -> Vec<Vec<usize>> {
    let mut lists = vec![Vec::new(); vertex_count];
    for (i, e) in edges.iter().enumerate() {
        lists[e.v0].push(i);
        if e.v1 != e.v0 {
            lists[e.v1].push(i);
        }
    }
    lists
}
