//! Mesh generation: edges, faces and cells of a 4-polytope from its vertices.
//!
//! Purpose
//! - Rebuild the boundary complex of a regular convex 4-polytope from a point
//!   cloud, an edge length and the expected per-element degrees.
//!
//! Pipeline
//! - `discover_edges`: vertex pairs at the edge length (O(V^2)).
//! - `discover_faces`: edge cycles of length `edges_per_face` (DFS from every vertex).
//! - `discover_cells`: face sets of size `faces_per_cell` forming closed
//!   surfaces (parallel DFS, shared deduplicating set, early exit).
//! - `assemble`: packages the results into an immutable `Mesh`.
//!
//! Assumptions and conventions
//! - Regular input: every vertex has the same number of edges and every face the
//!   same number of neighbours. Violations panic (see `UniformIncidence`).
//! - Elements refer to lower-dimensional elements by index only.
//! - Only edge/face/cell membership is deterministic; discovery order is not
//!   (cells are sorted before being returned).

mod cells;
mod edges;
mod faces;
mod incidence;
mod types;

pub use cells::{discover_cells, CellSearchCfg};
pub use edges::discover_edges;
pub use faces::discover_faces;
pub use incidence::UniformIncidence;
pub use types::{CanonicalMesh, Cell, Edge, Face, Mesh};

use nalgebra::Vector4;

use crate::error::MeshError;
use crate::geom::DEFAULT_EPS;

/// Inputs of the generic mesh builder.
#[derive(Clone, Debug)]
pub struct PolytopeParams {
    pub vertices: Vec<Vector4<f64>>,
    pub edge_length: f64,
    pub edges_per_face: usize,
    pub faces_per_cell: usize,
    /// Used only for the early exit of the cell search; `0` means unknown.
    pub expected_cells: usize,
    /// Relative tolerance for edge-length matching.
    pub eps: f64,
}

impl PolytopeParams {
    pub fn new(
        vertices: Vec<Vector4<f64>>,
        edge_length: f64,
        edges_per_face: usize,
        faces_per_cell: usize,
        expected_cells: usize,
    ) -> Self {
        Self {
            vertices,
            edge_length,
            edges_per_face,
            faces_per_cell,
            expected_cells,
            eps: DEFAULT_EPS,
        }
    }

    pub fn validate(&self) -> Result<(), MeshError> {
        if self.vertices.len() < 5 {
            return Err(MeshError::invalid(format!(
                "a 4-polytope needs at least 5 vertices, got {}",
                self.vertices.len()
            )));
        }
        if self.vertices.iter().any(|v| v.iter().any(|x| !x.is_finite())) {
            return Err(MeshError::invalid("vertex coordinates must be finite"));
        }
        if !(self.edge_length.is_finite() && self.edge_length > 0.0) {
            return Err(MeshError::invalid("edge_length must be finite and > 0"));
        }
        if self.edges_per_face < 3 {
            return Err(MeshError::invalid("edges_per_face must be >= 3"));
        }
        if self.faces_per_cell < 4 {
            return Err(MeshError::invalid("faces_per_cell must be >= 4"));
        }
        if !(self.eps.is_finite() && self.eps > 0.0) {
            return Err(MeshError::invalid("eps must be finite and > 0"));
        }
        Ok(())
    }
}

/// Run edge, face and cell discovery and package the result.
///
/// No validation beyond what each phase guarantees; use `Mesh::build` for
/// caller-supplied parameters.
pub fn assemble(params: &PolytopeParams, cfg: CellSearchCfg) -> Mesh {
    let vertices = params.vertices.clone();
    let edges = discover_edges(&vertices, params.edge_length, params.eps);
    let faces = discover_faces(vertices.len(), &edges, params.edges_per_face);
    let cells = discover_cells(
        &vertices,
        &edges,
        &faces,
        params.faces_per_cell,
        params.expected_cells,
        cfg,
    );
    tracing::info!(
        vertices = vertices.len(),
        edges = edges.len(),
        faces = faces.len(),
        cells = cells.len(),
        "mesh assembled"
    );
    Mesh {
        vertices,
        edges,
        faces,
        cells,
    }
}

impl Mesh {
    /// Validate `params`, then assemble.
    pub fn build(params: &PolytopeParams, cfg: CellSearchCfg) -> Result<Self, MeshError> {
        params.validate()?;
        Ok(assemble(params, cfg))
    }
}

#[cfg(test)]
mod tests;
