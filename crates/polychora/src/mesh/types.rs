//! Data types for the mesh and its index-based elements.
//!
//! Faces and cells are unordered index collections: equality is by membership
//! and hashing goes through a sorted copy, so the stored order (walk order for
//! faces, search order for cells) carries no meaning for identity.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use nalgebra::Vector4;

/// Unordered pair of vertex indices.
///
/// Invariants:
/// - `(a, b)` and `(b, a)` are the same edge (symmetric `Eq` and `Hash`).
/// - `v0 != v1` is expected but not enforced; distance-based discovery never
///   produces self-loops for distinct vertices at nonzero edge length.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub v0: usize,
    pub v1: usize,
}

impl Edge {
    #[inline]
    pub fn new(v0: usize, v1: usize) -> Self {
        Self { v0, v1 }
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.v0 == v || self.v1 == v
    }

    /// The endpoint opposite to `v` (`v` must be an endpoint).
    #[inline]
    pub fn other(&self, v: usize) -> usize {
        debug_assert!(self.contains(v), "vertex {v} is not on edge {self:?}");
        if self.v0 == v {
            self.v1
        } else {
            self.v0
        }
    }

    /// Endpoints as `(min, max)`.
    #[inline]
    pub fn sorted(&self) -> (usize, usize) {
        (self.v0.min(self.v1), self.v0.max(self.v1))
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

/// Polygon given by the indices of its edges, in walk order.
#[derive(Clone, Debug)]
pub struct Face {
    pub edges: Vec<usize>,
}

impl Face {
    #[inline]
    pub fn new(edges: Vec<usize>) -> Self {
        Self { edges }
    }

    /// Distinct vertex indices touched by the face's edges (first-seen order).
    pub fn vertices(&self, edges: &[Edge]) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.edges.len());
        for &e in &self.edges {
            for v in [edges[e].v0, edges[e].v1] {
                if !out.contains(&v) {
                    out.push(v);
                }
            }
        }
        out
    }

    /// Face validity: every touched vertex lies on exactly two of the edges.
    ///
    /// Together with connectivity (guaranteed by the edge walk that builds
    /// faces) this means the edges form one simple closed cycle.
    pub fn is_closed_cycle(&self, edges: &[Edge]) -> bool {
        let mut degree: HashMap<usize, u32> = HashMap::with_capacity(self.edges.len());
        for &e in &self.edges {
            *degree.entry(edges[e].v0).or_default() += 1;
            *degree.entry(edges[e].v1).or_default() += 1;
        }
        !degree.is_empty() && degree.values().all(|&d| d == 2)
    }

    /// Vertex loop obtained by walking the edge cycle.
    ///
    /// Returns `None` if the edges do not chain into a single cycle.
    pub fn vertex_loop(&self, edges: &[Edge]) -> Option<Vec<usize>> {
        let (&first, rest) = self.edges.split_first()?;
        let start = edges[first].v0;
        let mut out = vec![start];
        let mut cur = edges[first].v1;
        let mut remaining: Vec<usize> = rest.to_vec();
        while cur != start {
            out.push(cur);
            let pos = remaining.iter().position(|&e| edges[e].contains(cur))?;
            let e = remaining.swap_remove(pos);
            cur = edges[e].other(cur);
        }
        if remaining.is_empty() {
            Some(out)
        } else {
            None
        }
    }
}

impl PartialEq for Face {
    fn eq(&self, other: &Self) -> bool {
        same_members(&self.edges, &other.edges)
    }
}

impl Eq for Face {}

impl Hash for Face {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_sorted(&self.edges, state);
    }
}

/// 3D boundary given by the indices of its faces, in search order.
#[derive(Clone, Debug)]
pub struct Cell {
    pub faces: Vec<usize>,
}

impl Cell {
    #[inline]
    pub fn new(faces: Vec<usize>) -> Self {
        Self { faces }
    }

    /// Cell validity: every touched edge lies on exactly two of the faces.
    pub fn is_closed_surface(&self, faces: &[Face]) -> bool {
        let mut degree: HashMap<usize, u32> = HashMap::new();
        for &f in &self.faces {
            for &e in &faces[f].edges {
                *degree.entry(e).or_default() += 1;
            }
        }
        !degree.is_empty() && degree.values().all(|&d| d == 2)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        same_members(&self.faces, &other.faces)
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_sorted(&self.faces, state);
    }
}

fn same_members(a: &[usize], b: &[usize]) -> bool {
    a.len() == b.len() && a.iter().all(|x| b.contains(x))
}

fn hash_sorted<H: Hasher>(items: &[usize], state: &mut H) {
    let mut sorted = items.to_vec();
    sorted.sort_unstable();
    sorted.hash(state);
}

/// Index-based boundary complex of a 4-polytope.
///
/// Invariants:
/// - Owns all four sequences; edges/faces/cells refer to lower elements by index.
/// - Built once by `assemble`/`Mesh::build`; never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vector4<f64>>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face>,
    pub cells: Vec<Cell>,
}

/// Index-free form of a mesh: each element as a sorted tuple of vertex indices,
/// each sequence sorted. Two generations of the same polytope compare equal
/// regardless of discovery order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalMesh {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize)>,
    pub faces: Vec<Vec<usize>>,
    pub cells: Vec<Vec<usize>>,
}

impl Mesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Coordinates of both endpoints of edge `i`.
    pub fn edge_vertices(&self, i: usize) -> (Vector4<f64>, Vector4<f64>) {
        let e = self.edges[i];
        (self.vertices[e.v0], self.vertices[e.v1])
    }

    /// Ordered vertex loop of face `i` (`None` if the face is not a single cycle).
    pub fn face_vertices(&self, i: usize) -> Option<Vec<usize>> {
        self.faces[i].vertex_loop(&self.edges)
    }

    /// Distinct vertex indices of cell `i`, sorted.
    pub fn cell_vertices(&self, i: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self.cells[i]
            .faces
            .iter()
            .flat_map(|&f| self.faces[f].vertices(&self.edges))
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Canonical form for order-insensitive comparison of two meshes built from
    /// the same vertex sequence.
    pub fn canonical(&self) -> CanonicalMesh {
        let mut edges: Vec<(usize, usize)> = self.edges.iter().map(Edge::sorted).collect();
        edges.sort_unstable();
        let mut faces: Vec<Vec<usize>> = self
            .faces
            .iter()
            .map(|f| {
                let mut vs = f.vertices(&self.edges);
                vs.sort_unstable();
                vs
            })
            .collect();
        faces.sort();
        let mut cells: Vec<Vec<usize>> = (0..self.cells.len())
            .map(|i| self.cell_vertices(i))
            .collect();
        cells.sort();
        CanonicalMesh {
            vertex_count: self.vertices.len(),
            edges,
            faces,
            cells,
        }
    }
}
