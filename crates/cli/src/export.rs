//! JSON dump of a generated mesh.
//!
//! Layout: vertices as `[x, y, z, w]`, edges as vertex index pairs, faces as
//! edge index lists (walk order) plus their ordered vertex loops, cells as face
//! index lists. Indices refer to positions in the sibling arrays.

use anyhow::{Context, Result};
use polychora::{Mesh, Polychoron};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct MeshDoc {
    pub polytope: String,
    pub vertices: Vec<[f64; 4]>,
    pub edges: Vec<[usize; 2]>,
    pub faces: Vec<Vec<usize>>,
    pub face_loops: Vec<Vec<usize>>,
    pub cells: Vec<Vec<usize>>,
}

impl MeshDoc {
    pub fn new(polytope: Polychoron, mesh: &Mesh) -> Self {
        Self {
            polytope: polytope.name().to_string(),
            vertices: mesh.vertices.iter().map(|v| [v.x, v.y, v.z, v.w]).collect(),
            edges: mesh.edges.iter().map(|e| [e.v0, e.v1]).collect(),
            faces: mesh.faces.iter().map(|f| f.edges.clone()).collect(),
            face_loops: (0..mesh.face_count())
                .map(|i| mesh.face_vertices(i).unwrap_or_default())
                .collect(),
            cells: mesh.cells.iter().map(|c| c.faces.clone()).collect(),
        }
    }
}

pub fn write_mesh(path: &Path, doc: &MeshDoc) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polychora::generate_5_cell;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn doc_mirrors_mesh_counts() {
        let mesh = generate_5_cell();
        let doc = MeshDoc::new(Polychoron::Cell5, &mesh);
        assert_eq!(doc.vertices.len(), 5);
        assert_eq!(doc.edges.len(), 10);
        assert_eq!(doc.faces.len(), 10);
        assert!(doc.face_loops.iter().all(|l| l.len() == 3));
        assert_eq!(doc.cells.len(), 5);
    }

    #[test]
    fn write_mesh_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/out/cell5.json");
        let mesh = generate_5_cell();
        write_mesh(&out, &MeshDoc::new(Polychoron::Cell5, &mesh)).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["polytope"], "5-cell");
        assert_eq!(parsed["cells"].as_array().unwrap().len(), 5);
    }
}
