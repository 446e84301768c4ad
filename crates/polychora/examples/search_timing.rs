//! Cell search timing probe for the six regular 4-polytopes.
//!
//! Purpose
//! - Show how much the hyperplane and edge-multiplicity prunes buy on top of the
//!   vertex-sharing rule, polytope by polytope.
//! - The heuristic-only run is skipped for the 120-cell; it does not finish in
//!   reasonable time.

use std::time::Instant;

use polychora::{CellSearchCfg, ElementCounts, Polychoron};

fn timed(p: Polychoron, cfg: CellSearchCfg) -> (ElementCounts, f64) {
    let start = Instant::now();
    let mesh = p.generate(cfg);
    (ElementCounts::of(&mesh), start.elapsed().as_secs_f64() * 1e3)
}

fn main() {
    println!("{:<10} {:>22} {:>12} {:>12}", "polytope", "V/E/F/C", "pruned ms", "bare ms");
    for p in Polychoron::ALL {
        let (counts, pruned_ms) = timed(p, CellSearchCfg::default());
        assert_eq!(counts, p.expected_counts(), "{p}");
        let bare = if p == Polychoron::Cell120 {
            "-".to_string()
        } else {
            let (bare_counts, ms) = timed(p, CellSearchCfg::heuristic_only());
            assert_eq!(bare_counts, counts, "{p}");
            format!("{ms:.1}")
        };
        let vefc = format!(
            "{}/{}/{}/{}",
            counts.vertices, counts.edges, counts.faces, counts.cells
        );
        println!("{:<10} {:>22} {:>12.1} {:>12}", p.name(), vefc, pruned_ms, bare);
    }
}
