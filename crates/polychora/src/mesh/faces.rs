//! Face discovery: minimal edge cycles of a fixed length.
//!
//! Algorithm
//! - Index incident edges per vertex (uniform degree, checked).
//! - From every vertex, walk edge paths without reusing an edge, up to
//!   `edges_per_face` edges.
//! - A full-length path whose vertices all have degree 2 within it is a closed
//!   simple cycle; insert it into a set keyed by edge membership, so the
//!   rotations and reflections of one polygon collapse to a single face.
//!
//! Every vertex is used as a starting point, so cycles are found regardless of
//! where they sit relative to vertex 0.

use std::collections::HashSet;

use super::edges::vertex_edge_lists;
use super::incidence::UniformIncidence;
use super::types::{Edge, Face};

/// Find all faces with exactly `edges_per_face` edges.
pub fn discover_faces(vertex_count: usize, edges: &[Edge], edges_per_face: usize) -> Vec<Face> {
    let incidence =
        UniformIncidence::from_lists(&vertex_edge_lists(vertex_count, edges), "vertex-edge");
    let mut walker = FaceWalker {
        edges,
        incidence: &incidence,
        edges_per_face,
        path: Vec::with_capacity(edges_per_face),
        in_path: vec![false; edges.len()],
        seen: HashSet::new(),
        faces: Vec::new(),
    };
    if edges_per_face > 0 {
        for v in 0..vertex_count {
            walker.walk(v);
        }
    }
    tracing::debug!(
        edges = edges.len(),
        edges_per_vertex = incidence.degree(),
        faces = walker.faces.len(),
        "faces discovered"
    );
    walker.faces
}

/// DFS state for the edge walk; `path`/`in_path` are pushed and popped in step.
struct FaceWalker<'a> {
    edges: &'a [Edge],
    incidence: &'a UniformIncidence,
    edges_per_face: usize,
    path: Vec<usize>,
    in_path: Vec<bool>,
    seen: HashSet<Face>,
    faces: Vec<Face>,
}

impl FaceWalker<'_> {
    fn walk(&mut self, vertex: usize) {
        if self.path.len() == self.edges_per_face {
            let face = Face::new(self.path.clone());
            if face.is_closed_cycle(self.edges) && self.seen.insert(face.clone()) {
                self.faces.push(face);
            }
            return;
        }
        for k in 0..self.incidence.degree() {
            let e = self.incidence.row(vertex)[k];
            if self.in_path[e] {
                continue;
            }
            self.in_path[e] = true;
            self.path.push(e);
            let next = self.edges[e].other(vertex);
            self.walk(next);
            self.path.pop();
            self.in_path[e] = false;
        }
    }
}
