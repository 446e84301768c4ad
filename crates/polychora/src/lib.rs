//! Boundary complexes of the regular convex 4-polytopes.
//!
//! Given only vertex coordinates and an edge length, the crate rediscovers
//! edges (distance matching), faces (minimal edge cycles) and cells (closed face
//! surfaces, found by a parallel backtracking search) and packages them as an
//! index-based `Mesh` for rendering and serialization code to consume.
//!
//! Layout
//! - `geom`: tolerant float comparison, hyperplane fitting, point dedup.
//! - `mesh`: the discovery pipeline and the `Mesh` types.
//! - `catalog`: vertex sets of the six regular polytopes and `generate_*` entry points.

pub mod catalog;
pub mod error;
pub mod geom;
pub mod mesh;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use catalog::{
    generate_120_cell, generate_16_cell, generate_24_cell, generate_5_cell, generate_600_cell,
    generate_8_cell, ElementCounts, Polychoron,
};
pub use error::MeshError;
pub use geom::float_eq;
pub use mesh::{
    assemble, discover_cells, discover_edges, discover_faces, Cell, CellSearchCfg, Edge, Face,
    Mesh, PolytopeParams,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::catalog::{ElementCounts, Polychoron};
    pub use crate::geom::{float_eq, DEFAULT_EPS};
    pub use crate::mesh::{CanonicalMesh, CellSearchCfg, Mesh, PolytopeParams};
    pub use nalgebra::Vector4;
}
