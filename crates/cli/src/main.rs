mod io;
mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use planar::geom2::GeomCfg;
use planar::hull::{convex_hull, graham_steps, jarvis_steps, HullAlgorithm};
use planar::monotone::{triangulate_monotone, triangulation_steps};
use planar::sweep::{bentley_ottmann, sweep_steps};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

use io::{
    read_points, read_polygon, read_segments, write_json, xy, HullOut, HullStep, IntersectOut,
    SweepStep, TriangulateOut, TriangulateStep,
};
use provenance::{cfg_json, write_sidecar, RunRecord};

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Convex hulls, segment intersections and monotone triangulation on JSON input")]
struct Cmd {
    /// Orientation tolerance (|orient| <= eps counts as collinear)
    #[arg(long, global = true)]
    eps: Option<f64>,

    /// Decimal digits kept when deduplicating intersection points
    #[arg(long, global = true)]
    round_digits: Option<u32>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct Io {
    /// Input JSON file
    #[arg(long)]
    input: PathBuf,
    /// Output JSON file; a `<stem>.provenance.json` is written next to it
    #[arg(long)]
    out: PathBuf,
    /// Write every intermediate snapshot instead of only the result
    #[arg(long)]
    trace: bool,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of `[[x, y], ...]`
    Hull {
        #[arg(long, default_value_t = HullAlgorithm::Graham)]
        algo: HullAlgorithm,
        #[command(flatten)]
        io: Io,
    },
    /// All intersection points of `[[[x, y], [x, y]], ...]`
    Intersect {
        #[command(flatten)]
        io: Io,
    },
    /// Triangulate a y-monotone polygon `[[x, y], ...]`
    Triangulate {
        #[command(flatten)]
        io: Io,
    },
    /// Print version and default configuration as JSON
    Report,
}

impl Cmd {
    fn cfg(&self) -> GeomCfg {
        let d = GeomCfg::default();
        GeomCfg {
            eps: self.eps.unwrap_or(d.eps),
            round_digits: self.round_digits.unwrap_or(d.round_digits),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = cmd.cfg();
    match cmd.action {
        Action::Hull { algo, io } => hull(algo, io, cfg),
        Action::Intersect { io } => intersect(io, cfg),
        Action::Triangulate { io } => triangulate(io, cfg),
        Action::Report => report(cfg),
    }
}

fn hull(algo: HullAlgorithm, io: Io, cfg: GeomCfg) -> Result<()> {
    tracing::info!(%algo, input = %io.input.display(), out = %io.out.display(), trace = io.trace, "hull");
    let points = read_points(&io.input)?;
    let ctx = || format!("{algo} hull of {} points", points.len());
    if io.trace {
        let steps: Vec<HullStep> = match algo {
            HullAlgorithm::Graham => graham_steps(&points, cfg)
                .with_context(ctx)?
                .map(HullStep::from)
                .collect(),
            HullAlgorithm::Jarvis => {
                let steps = jarvis_steps(&points, cfg).with_context(ctx)?;
                // The snapshots alone cannot tell a stalled walk from a closed one.
                steps.clone().into_output().with_context(ctx)?;
                steps.map(HullStep::from).collect()
            }
        };
        tracing::info!(snapshots = steps.len(), "hull traced");
        write_json(&io.out, &steps)?;
    } else {
        let hull = convex_hull(&points, algo, cfg).with_context(ctx)?;
        tracing::info!(vertices = hull.len(), "hull done");
        let out = HullOut {
            algo: algo.to_string(),
            hull: hull.iter().map(xy).collect(),
        };
        write_json(&io.out, &out)?;
    }
    let params = json!({ "algo": algo.to_string(), "input": io.input, "trace": io.trace });
    write_sidecar(&io.out, RunRecord::new("hull", params, cfg))?;
    Ok(())
}

fn intersect(io: Io, cfg: GeomCfg) -> Result<()> {
    tracing::info!(input = %io.input.display(), out = %io.out.display(), trace = io.trace, "intersect");
    let segments = read_segments(&io.input)?;
    if io.trace {
        let steps: Vec<SweepStep> = sweep_steps(&segments, cfg).map(SweepStep::from).collect();
        tracing::info!(snapshots = steps.len(), "intersect traced");
        write_json(&io.out, &steps)?;
    } else {
        let found = bentley_ottmann(&segments, cfg);
        tracing::info!(segments = segments.len(), intersections = found.len(), "intersect done");
        let out = IntersectOut {
            segments: segments.len(),
            intersections: found.iter().map(xy).collect(),
        };
        write_json(&io.out, &out)?;
    }
    let params = json!({ "input": io.input, "trace": io.trace });
    write_sidecar(&io.out, RunRecord::new("intersect", params, cfg))?;
    Ok(())
}

fn triangulate(io: Io, cfg: GeomCfg) -> Result<()> {
    tracing::info!(input = %io.input.display(), out = %io.out.display(), trace = io.trace, "triangulate");
    let input = read_polygon(&io.input)?;
    let poly = input.to_ccw();
    if poly != input {
        tracing::warn!("input polygon is clockwise; vertex order reversed");
    }
    let ctx = || format!("triangulating {}", io.input.display());
    if io.trace {
        let steps: Vec<TriangulateStep> = triangulation_steps(&poly, cfg)
            .with_context(ctx)?
            .map(TriangulateStep::from)
            .collect();
        tracing::info!(snapshots = steps.len(), "triangulate traced");
        write_json(&io.out, &steps)?;
    } else {
        let t = triangulate_monotone(&poly, cfg).with_context(ctx)?;
        tracing::info!(
            vertices = poly.len(),
            diagonals = t.diagonals.len(),
            "triangulate done"
        );
        write_json(&io.out, &TriangulateOut::new(&poly, t))?;
    }
    let params = json!({ "input": io.input, "trace": io.trace, "reversed": poly != input });
    write_sidecar(&io.out, RunRecord::new("triangulate", params, cfg))?;
    Ok(())
}

fn report(cfg: GeomCfg) -> Result<()> {
    let obj = json!({
        "version": planar::VERSION,
        "code_rev": provenance::current_git_rev(),
        "cfg": cfg_json(&cfg),
        "hull_algorithms": [HullAlgorithm::Graham.to_string(), HullAlgorithm::Jarvis.to_string()],
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
