use anyhow::Result;
use clap::{Parser, Subcommand};
use polychora::{CellSearchCfg, ElementCounts, Polychoron};
use std::path::Path;
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Generate boundary meshes of the regular 4-polytopes")]
struct Cmd {
    /// Log every discovered cell (debug level)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(clap::Args, Clone, Copy)]
struct SearchArgs {
    /// Cell search worker threads (default: available parallelism)
    #[arg(long)]
    workers: Option<usize>,
    /// Disable the hyperplane prune (vertex-sharing heuristic only)
    #[arg(long)]
    no_hyperplane_prune: bool,
    /// Disable the edge multiplicity prune
    #[arg(long)]
    no_edge_prune: bool,
}

impl SearchArgs {
    fn cfg(self) -> CellSearchCfg {
        CellSearchCfg {
            workers: self.workers,
            use_hyperplane_prune: !self.no_hyperplane_prune,
            use_edge_multiplicity_prune: !self.no_edge_prune,
            ..CellSearchCfg::default()
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Generate one polytope and write its mesh as JSON (plus provenance sidecar)
    Generate {
        /// 5-cell, 8-cell, 16-cell, 24-cell, 120-cell or 600-cell
        #[arg(long)]
        polytope: String,
        #[arg(long)]
        out: String,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Print element counts next to the known f-vector
    Counts {
        /// Restrict to one polytope (default: all six)
        #[arg(long)]
        polytope: Option<String>,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Generate {
            polytope,
            out,
            search,
        } => generate(&polytope, &out, search),
        Action::Counts { polytope, search } => counts(polytope.as_deref(), search),
        Action::Report => report(),
    }
}

fn generate(polytope: &str, out: &str, search: SearchArgs) -> Result<()> {
    let p: Polychoron = polytope.parse()?;
    let cfg = search.cfg();
    tracing::info!(polytope = p.name(), out, workers = ?cfg.workers, "generate");
    let started = Instant::now();
    let mesh = p.generate(cfg);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1e3;

    let out_path = Path::new(out);
    export::write_mesh(out_path, &export::MeshDoc::new(p, &mesh))?;

    let counts = ElementCounts::of(&mesh);
    let record = provenance::MeshProvenance::new(p, cfg, counts, elapsed_ms, out_path);
    let sidecar = provenance::write_sidecar(out_path, &record)?;
    tracing::info!(
        cells = counts.cells,
        complete = record.complete,
        elapsed_ms,
        sidecar = %sidecar.display(),
        "mesh written"
    );
    Ok(())
}

fn counts(polytope: Option<&str>, search: SearchArgs) -> Result<()> {
    let selected: Vec<Polychoron> = match polytope {
        Some(name) => vec![name.parse()?],
        None => Polychoron::ALL.to_vec(),
    };
    println!(
        "{:<10} {:>6} {:>6} {:>6} {:>6}  expected",
        "polytope", "V", "E", "F", "C"
    );
    for p in selected {
        let got = ElementCounts::of(&p.generate(search.cfg()));
        let want = p.expected_counts();
        let mark = if got == want { "ok" } else { "MISMATCH" };
        println!(
            "{:<10} {:>6} {:>6} {:>6} {:>6}  {}/{}/{}/{} {mark}",
            p.name(),
            got.vertices,
            got.edges,
            got.faces,
            got.cells,
            want.vertices,
            want.edges,
            want.faces,
            want.cells,
        );
    }
    Ok(())
}

fn report() -> Result<()> {
    let report = provenance::Report::collect();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
