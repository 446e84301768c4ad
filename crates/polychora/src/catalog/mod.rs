//! The six regular convex 4-polytopes and their generation entry points.
//!
//! Each polytope supplies its vertex set, edge length, face and cell degrees and
//! expected cell count; `generate` runs the generic builder on them.

mod vertices;

use std::fmt;
use std::str::FromStr;

use crate::error::MeshError;
use crate::mesh::{assemble, CellSearchCfg, Mesh, PolytopeParams};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polychoron {
    /// 5-cell (4-simplex): 5 tetrahedra.
    Cell5,
    /// 8-cell (tesseract): 8 cubes.
    Cell8,
    /// 16-cell (orthoplex): 16 tetrahedra.
    Cell16,
    /// 24-cell: 24 octahedra.
    Cell24,
    /// 120-cell: 120 dodecahedra.
    Cell120,
    /// 600-cell: 600 tetrahedra.
    Cell600,
}

/// Number of elements of each dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementCounts {
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
    pub cells: usize,
}

impl ElementCounts {
    pub fn of(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.vertex_count(),
            edges: mesh.edge_count(),
            faces: mesh.face_count(),
            cells: mesh.cell_count(),
        }
    }
}

impl Polychoron {
    pub const ALL: [Polychoron; 6] = [
        Polychoron::Cell5,
        Polychoron::Cell8,
        Polychoron::Cell16,
        Polychoron::Cell24,
        Polychoron::Cell120,
        Polychoron::Cell600,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cell5 => "5-cell",
            Self::Cell8 => "8-cell",
            Self::Cell16 => "16-cell",
            Self::Cell24 => "24-cell",
            Self::Cell120 => "120-cell",
            Self::Cell600 => "600-cell",
        }
    }

    /// Builder inputs for this polytope.
    pub fn params(&self) -> PolytopeParams {
        let sqrt2 = 2f64.sqrt();
        match self {
            Self::Cell5 => PolytopeParams::new(vertices::cell5(), 2.0 * sqrt2, 3, 4, 5),
            Self::Cell8 => PolytopeParams::new(vertices::cell8(), 2.0, 4, 6, 8),
            Self::Cell16 => PolytopeParams::new(vertices::cell16(), sqrt2, 3, 4, 16),
            Self::Cell24 => PolytopeParams::new(vertices::cell24(), sqrt2, 3, 8, 24),
            Self::Cell120 => {
                PolytopeParams::new(vertices::cell120(), 3.0 - 5f64.sqrt(), 5, 12, 120)
            }
            Self::Cell600 => {
                PolytopeParams::new(vertices::cell600(), 1.0 / vertices::phi(), 3, 4, 600)
            }
        }
    }

    /// Known element counts (f-vector) of the boundary complex.
    pub fn expected_counts(&self) -> ElementCounts {
        let (vertices, edges, faces, cells) = match self {
            Self::Cell5 => (5, 10, 10, 5),
            Self::Cell8 => (16, 32, 24, 8),
            Self::Cell16 => (8, 24, 32, 16),
            Self::Cell24 => (24, 96, 96, 24),
            Self::Cell120 => (600, 1200, 720, 120),
            Self::Cell600 => (120, 720, 1200, 600),
        };
        ElementCounts {
            vertices,
            edges,
            faces,
            cells,
        }
    }

    /// Generate the mesh with an explicit cell search configuration.
    pub fn generate(&self, cfg: CellSearchCfg) -> Mesh {
        let _span = tracing::info_span!("generate", polytope = self.name()).entered();
        assemble(&self.params(), cfg)
    }
}

impl fmt::Display for Polychoron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Polychoron {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "5-cell" | "5cell" | "simplex" | "pentachoron" => Ok(Self::Cell5),
            "8-cell" | "8cell" | "tesseract" | "hypercube" => Ok(Self::Cell8),
            "16-cell" | "16cell" | "orthoplex" => Ok(Self::Cell16),
            "24-cell" | "24cell" => Ok(Self::Cell24),
            "120-cell" | "120cell" => Ok(Self::Cell120),
            "600-cell" | "600cell" => Ok(Self::Cell600),
            _ => Err(MeshError::UnknownPolytope {
                name: s.to_string(),
            }),
        }
    }
}

pub fn generate_5_cell() -> Mesh {
    Polychoron::Cell5.generate(CellSearchCfg::default())
}

pub fn generate_8_cell() -> Mesh {
    Polychoron::Cell8.generate(CellSearchCfg::default())
}

pub fn generate_16_cell() -> Mesh {
    Polychoron::Cell16.generate(CellSearchCfg::default())
}

pub fn generate_24_cell() -> Mesh {
    Polychoron::Cell24.generate(CellSearchCfg::default())
}

pub fn generate_120_cell() -> Mesh {
    Polychoron::Cell120.generate(CellSearchCfg::default())
}

pub fn generate_600_cell() -> Mesh {
    Polychoron::Cell600.generate(CellSearchCfg::default())
}
