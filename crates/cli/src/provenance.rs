//! Provenance records for generated meshes.
//!
//! A mesh written to `<stem>.json` gets a `<stem>.provenance.json` sidecar that
//! pins down how it was produced: code revision, library version, the builder
//! inputs of the polytope, the cell search configuration and whether the
//! discovered element counts match the known f-vector.

use anyhow::{Context, Result};
use polychora::{CellSearchCfg, ElementCounts, Polychoron};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// `[V, E, F, C]`.
pub type FVector = [usize; 4];

fn f_vector(c: ElementCounts) -> FVector {
    [c.vertices, c.edges, c.faces, c.cells]
}

/// Builder inputs and known counts of one catalog polytope.
#[derive(Debug, Serialize)]
pub struct PolytopeInfo {
    pub name: &'static str,
    pub vertices: usize,
    pub edge_length: f64,
    pub edges_per_face: usize,
    pub faces_per_cell: usize,
    pub eps: f64,
    pub expected: FVector,
}

impl PolytopeInfo {
    pub fn of(p: Polychoron) -> Self {
        let params = p.params();
        Self {
            name: p.name(),
            vertices: params.vertices.len(),
            edge_length: params.edge_length,
            edges_per_face: params.edges_per_face,
            faces_per_cell: params.faces_per_cell,
            eps: params.eps,
            expected: f_vector(p.expected_counts()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchInfo {
    /// `null` when the worker count followed the available parallelism.
    pub workers: Option<usize>,
    pub use_hyperplane_prune: bool,
    pub use_edge_multiplicity_prune: bool,
    pub hyperplane_eps: f64,
}

impl From<CellSearchCfg> for SearchInfo {
    fn from(cfg: CellSearchCfg) -> Self {
        Self {
            workers: cfg.workers,
            use_hyperplane_prune: cfg.use_hyperplane_prune,
            use_edge_multiplicity_prune: cfg.use_edge_multiplicity_prune,
            hyperplane_eps: cfg.hyperplane_eps,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

/// Contents of a `<stem>.provenance.json` sidecar.
#[derive(Debug, Serialize)]
pub struct MeshProvenance {
    pub code_rev: String,
    pub polychora_version: &'static str,
    pub callsite: Callsite,
    pub polytope: PolytopeInfo,
    pub search: SearchInfo,
    pub found: FVector,
    /// `found == polytope.expected`.
    pub complete: bool,
    pub elapsed_ms: f64,
    pub outputs: Vec<String>,
}

impl MeshProvenance {
    #[track_caller]
    pub fn new(
        polytope: Polychoron,
        cfg: CellSearchCfg,
        found: ElementCounts,
        elapsed_ms: f64,
        artifact: &Path,
    ) -> Self {
        let caller = Location::caller();
        let polytope = PolytopeInfo::of(polytope);
        let found = f_vector(found);
        Self {
            code_rev: code_rev(),
            polychora_version: polychora::VERSION,
            callsite: Callsite {
                file: caller.file(),
                line: caller.line(),
            },
            complete: found == polytope.expected,
            polytope,
            search: cfg.into(),
            found,
            elapsed_ms,
            outputs: vec![artifact.to_string_lossy().into_owned()],
        }
    }
}

/// Static overview printed by `cli report`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub code_rev: String,
    pub polychora_version: &'static str,
    pub default_search: SearchInfo,
    pub polytopes: Vec<PolytopeInfo>,
}

impl Report {
    pub fn collect() -> Self {
        Self {
            code_rev: code_rev(),
            polychora_version: polychora::VERSION,
            default_search: CellSearchCfg::default().into(),
            polytopes: Polychoron::ALL.into_iter().map(PolytopeInfo::of).collect(),
        }
    }
}

/// Write `record` next to `artifact` and return the sidecar path.
pub fn write_sidecar(artifact: &Path, record: &MeshProvenance) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    fs::write(&path, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `out/cell24.json` -> `out/cell24.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` if set, else `git rev-parse HEAD`, else `"unknown"`.
pub fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?.trim().to_string();
    (!rev.is_empty()).then_some(rev)
}
