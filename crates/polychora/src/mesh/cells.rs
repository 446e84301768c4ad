//! Cell discovery: parallel backtracking over face adjacency.
//!
//! Algorithm
//! - Face adjacency (two faces are adjacent iff they share an edge), packed into
//!   a uniform-degree table; per-face vertex lists for the shares-a-vertex test.
//! - The face range is split into contiguous chunks, one per worker thread.
//!   Each worker runs a DFS from every face in its chunk, extending the face path
//!   through the adjacency of its last face.
//! - Vertex-sharing rule: a candidate may extend the path only if the path
//!   before the current face is empty, or the candidate shares a vertex with the
//!   face before the current one, or with the face before that. This keeps the
//!   path winding around the cell; it is a heuristic, not a convexity proof, and
//!   is kept exactly as is.
//! - Full-length paths are checked combinatorially (every edge on exactly two
//!   faces) and inserted into one shared `Mutex<HashSet<Cell>>`.
//! - After each starting face a worker checks the shared count and stops its
//!   chunk once the expected number of cells is reached. Workers never interrupt
//!   each other mid-search.
//!
//! Optional prunes (both on by default, both result-preserving):
//! - Edge multiplicity: a path where some edge already lies on two faces cannot
//!   take a third face through that edge.
//! - Hyperplane: once the path spans a 3D affine hull, candidate faces must lie
//!   on that hyperplane. Cells of a convex 4-polytope are flat, so only branches
//!   that leave the cell are cut. Without it the 120-cell search is impractical.

use std::collections::HashSet;
use std::ops::Range;
use std::sync::{Mutex, PoisonError};
use std::thread;

use nalgebra::Vector4;

use crate::geom::{Hyperplane4, HYPERPLANE_EPS};

use super::incidence::UniformIncidence;
use super::types::{Cell, Edge, Face};

/// Cell search configuration.
#[derive(Clone, Copy, Debug)]
pub struct CellSearchCfg {
    /// Worker threads; `None` uses the available hardware parallelism.
    /// Always clamped to `1..=n_faces`.
    pub workers: Option<usize>,
    /// Require candidate faces to lie on the hyperplane spanned by the path.
    pub use_hyperplane_prune: bool,
    /// Reject candidates that would put some edge on a third path face.
    pub use_edge_multiplicity_prune: bool,
    /// Absolute tolerance for the hyperplane membership test.
    pub hyperplane_eps: f64,
}

impl Default for CellSearchCfg {
    fn default() -> Self {
        Self {
            workers: None,
            use_hyperplane_prune: true,
            use_edge_multiplicity_prune: true,
            hyperplane_eps: HYPERPLANE_EPS,
        }
    }
}

impl CellSearchCfg {
    /// Only the vertex-sharing rule; no additional pruning.
    pub fn heuristic_only() -> Self {
        Self {
            use_hyperplane_prune: false,
            use_edge_multiplicity_prune: false,
            ..Self::default()
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }
}

/// Find all cells made of exactly `faces_per_cell` faces.
///
/// `expected_cells` only drives the early exit between starting faces; `0`
/// disables it. If the expected count is never reached the search exhausts
/// every starting face and returns what it found (logged at `warn`).
///
/// Output is sorted by the cells' sorted face indices so that repeated runs
/// produce the same sequence.
pub fn discover_cells(
    vertices: &[Vector4<f64>],
    edges: &[Edge],
    faces: &[Face],
    faces_per_cell: usize,
    expected_cells: usize,
    cfg: CellSearchCfg,
) -> Vec<Cell> {
    if faces.is_empty() || faces_per_cell == 0 {
        return Vec::new();
    }
    let adjacency =
        UniformIncidence::from_lists(&face_adjacency_lists(edges.len(), faces), "face-face");
    let face_vertices: Vec<Vec<usize>> = faces.iter().map(|f| f.vertices(edges)).collect();
    let ctx = SearchContext {
        vertices,
        faces,
        adjacency: &adjacency,
        face_vertices: &face_vertices,
        edge_count: edges.len(),
        faces_per_cell,
        expected_cells,
        cfg,
    };
    let workers = worker_count(cfg.workers, faces.len());
    tracing::debug!(
        faces = faces.len(),
        neighbours_per_face = adjacency.degree(),
        workers,
        "starting cell search"
    );

    let found: Mutex<HashSet<Cell>> = Mutex::new(HashSet::new());
    thread::scope(|s| {
        for range in chunk_ranges(faces.len(), workers) {
            let ctx = &ctx;
            let found = &found;
            s.spawn(move || {
                let mut runner = CellRunner::new(ctx, found);
                for start in range {
                    runner.search_from(start);
                    if runner.target_reached() {
                        break;
                    }
                }
            });
        }
    });

    let mut cells: Vec<Cell> = found
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
        .into_iter()
        .collect();
    cells.sort_by_cached_key(|c| {
        let mut key = c.faces.clone();
        key.sort_unstable();
        key
    });
    if expected_cells > 0 && cells.len() < expected_cells {
        tracing::warn!(
            found = cells.len(),
            expected = expected_cells,
            "cell search exhausted all starting faces before reaching the expected count"
        );
    }
    cells
}

/// Face → indices of faces sharing at least one edge (first-seen order).
pub(crate) fn face_adjacency_lists(edge_count: usize, faces: &[Face]) -> Vec<Vec<usize>> {
    let mut edge_faces = vec![Vec::new(); edge_count];
    for (i, f) in faces.iter().enumerate() {
        for &e in &f.edges {
            edge_faces[e].push(i);
        }
    }
    faces
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let mut out = Vec::new();
            for &e in &f.edges {
                for &g in &edge_faces[e] {
                    if g != i && !out.contains(&g) {
                        out.push(g);
                    }
                }
            }
            out
        })
        .collect()
}

/// Requested workers (or hardware parallelism), clamped to `1..=n_faces`.
pub(crate) fn worker_count(requested: Option<usize>, n_faces: usize) -> usize {
    let wanted = requested.unwrap_or_else(|| {
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    });
    wanted.clamp(1, n_faces.max(1))
}

/// Split `0..n` into `workers` contiguous, non-empty ranges.
pub(crate) fn chunk_ranges(n: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk = n.div_ceil(workers).max(1);
    (0..workers)
        .map(|w| (w * chunk).min(n)..((w + 1) * chunk).min(n))
        .filter(|r| !r.is_empty())
        .collect()
}

/// Read-only data shared by all workers.
struct SearchContext<'a> {
    vertices: &'a [Vector4<f64>],
    faces: &'a [Face],
    adjacency: &'a UniformIncidence,
    face_vertices: &'a [Vec<usize>],
    edge_count: usize,
    faces_per_cell: usize,
    expected_cells: usize,
    cfg: CellSearchCfg,
}

/// Per-worker DFS state. `path`, `in_path` and `edge_uses` change together in
/// `push`/`pop`; the shared set is locked only to insert or read its size.
struct CellRunner<'a> {
    ctx: &'a SearchContext<'a>,
    found: &'a Mutex<HashSet<Cell>>,
    path: Vec<usize>,
    in_path: Vec<bool>,
    edge_uses: Vec<u32>,
}

impl<'a> CellRunner<'a> {
    fn new(ctx: &'a SearchContext<'a>, found: &'a Mutex<HashSet<Cell>>) -> Self {
        Self {
            ctx,
            found,
            path: Vec::with_capacity(ctx.faces_per_cell),
            in_path: vec![false; ctx.faces.len()],
            edge_uses: vec![0; ctx.edge_count],
        }
    }

    fn search_from(&mut self, start: usize) {
        self.push(start);
        self.recur(None);
        self.pop();
    }

    fn target_reached(&self) -> bool {
        if self.ctx.expected_cells == 0 {
            return false;
        }
        let found = self.found.lock().unwrap_or_else(PoisonError::into_inner);
        found.len() >= self.ctx.expected_cells
    }

    fn recur(&mut self, plane: Option<Hyperplane4>) {
        if self.path.len() == self.ctx.faces_per_cell {
            self.record();
            return;
        }
        let plane = match plane {
            None if self.ctx.cfg.use_hyperplane_prune && self.path.len() >= 2 => self.fit_plane(),
            other => other,
        };
        let Some(&current) = self.path.last() else {
            return;
        };
        for k in 0..self.ctx.adjacency.degree() {
            let cand = self.ctx.adjacency.row(current)[k];
            if self.in_path[cand] || !self.passes_vertex_rule(cand) {
                continue;
            }
            if self.ctx.cfg.use_edge_multiplicity_prune && self.overfills_edge(cand) {
                continue;
            }
            if let Some(h) = &plane {
                if !self.lies_on(cand, h) {
                    continue;
                }
            }
            self.push(cand);
            self.recur(plane);
            self.pop();
        }
    }

    /// Candidate must share a vertex with the predecessor of the current face
    /// or with that face's predecessor. Trivially true at the starting face.
    fn passes_vertex_rule(&self, cand: usize) -> bool {
        let n = self.path.len();
        if n < 2 {
            return true;
        }
        if self.shares_vertex(cand, self.path[n - 2]) {
            return true;
        }
        n >= 3 && self.shares_vertex(cand, self.path[n - 3])
    }

    fn shares_vertex(&self, a: usize, b: usize) -> bool {
        let vb = &self.ctx.face_vertices[b];
        self.ctx.face_vertices[a].iter().any(|v| vb.contains(v))
    }

    fn overfills_edge(&self, cand: usize) -> bool {
        self.ctx.faces[cand]
            .edges
            .iter()
            .any(|&e| self.edge_uses[e] >= 2)
    }

    fn lies_on(&self, face: usize, plane: &Hyperplane4) -> bool {
        self.ctx.face_vertices[face]
            .iter()
            .all(|&v| plane.contains(self.ctx.vertices[v], self.ctx.cfg.hyperplane_eps))
    }

    fn fit_plane(&self) -> Option<Hyperplane4> {
        let mut seen: Vec<usize> = Vec::new();
        for &f in &self.path {
            for &v in &self.ctx.face_vertices[f] {
                if !seen.contains(&v) {
                    seen.push(v);
                }
            }
        }
        let points: Vec<Vector4<f64>> = seen.iter().map(|&v| self.ctx.vertices[v]).collect();
        Hyperplane4::fit(&points)
    }

    fn push(&mut self, face: usize) {
        self.path.push(face);
        self.in_path[face] = true;
        for &e in &self.ctx.faces[face].edges {
            self.edge_uses[e] += 1;
        }
    }

    fn pop(&mut self) {
        if let Some(face) = self.path.pop() {
            self.in_path[face] = false;
            for &e in &self.ctx.faces[face].edges {
                self.edge_uses[e] -= 1;
            }
        }
    }

    fn record(&self) {
        let cell = Cell::new(self.path.clone());
        if !cell.is_closed_surface(self.ctx.faces) {
            return;
        }
        let total = {
            let mut found = self.found.lock().unwrap_or_else(PoisonError::into_inner);
            if !found.insert(cell) {
                return;
            }
            found.len()
        };
        tracing::debug!(cells = total, "cell discovered");
    }
}
