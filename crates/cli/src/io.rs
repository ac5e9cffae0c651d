//! JSON inputs and outputs of the subcommands.
//!
//! Inputs are bare coordinate arrays; outputs are serde structs mirroring the
//! library results and snapshots, with points as `[x, y]` pairs.

use anyhow::{Context, Result};
use planar::geom2::{segments_from_coords, Point, Polygon, Segment};
use planar::hull::HullSnapshot;
use planar::monotone::{Triangulation, TriangulationSnapshot};
use planar::sweep::SweepSnapshot;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub type Xy = [f64; 2];

#[inline]
pub fn xy(p: &Point) -> Xy {
    [p.x, p.y]
}

fn xys(points: &[Point]) -> Vec<Xy> {
    points.iter().map(xy).collect()
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// `[[x, y], ...]`
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let raw: Vec<Xy> = read_json(path)?;
    Ok(raw.iter().map(|p| Point::new(p[0], p[1])).collect())
}

/// `[[[x, y], [x, y]], ...]`
pub fn read_segments(path: &Path) -> Result<Vec<Segment>> {
    let raw: Vec<[Xy; 2]> = read_json(path)?;
    segments_from_coords(&raw).with_context(|| format!("invalid segments in {}", path.display()))
}

/// `[[x, y], ...]` in boundary order.
pub fn read_polygon(path: &Path) -> Result<Polygon> {
    let raw: Vec<Xy> = read_json(path)?;
    Polygon::from_coords(&raw).with_context(|| format!("invalid polygon in {}", path.display()))
}

/// Create the directory `path` will be written into, if it names one.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("creating output dir {}", dir.display())),
        _ => Ok(()),
    }
}

/// Pretty-printed JSON, creating parent directories as needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[derive(Debug, Serialize)]
pub struct HullOut {
    pub algo: String,
    pub hull: Vec<Xy>,
}

#[derive(Debug, Serialize)]
pub struct HullStep {
    pub hull: Vec<Xy>,
    pub candidate: Option<Xy>,
    pub done: bool,
}

impl From<HullSnapshot> for HullStep {
    fn from(s: HullSnapshot) -> Self {
        Self {
            hull: xys(&s.hull),
            candidate: s.candidate.as_ref().map(xy),
            done: s.done,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IntersectOut {
    pub segments: usize,
    pub intersections: Vec<Xy>,
}

#[derive(Debug, Serialize)]
pub struct SweepStep {
    pub sweep_x: f64,
    pub status: Vec<usize>,
    pub pending: Vec<Xy>,
    pub intersections: Vec<Xy>,
}

impl From<SweepSnapshot> for SweepStep {
    fn from(s: SweepSnapshot) -> Self {
        Self {
            sweep_x: s.sweep_x,
            status: s.status,
            pending: xys(&s.pending),
            intersections: xys(&s.intersections),
        }
    }
}

/// Indices refer to the counter-clockwise vertex order in `vertices`.
#[derive(Debug, Serialize)]
pub struct TriangulateOut {
    pub vertices: Vec<Xy>,
    pub diagonals: Vec<[usize; 2]>,
    pub triangles: Vec<[usize; 3]>,
}

impl TriangulateOut {
    pub fn new(poly: &Polygon, t: Triangulation) -> Self {
        Self {
            vertices: xys(poly.vertices()),
            diagonals: t.diagonals.iter().map(|&(a, b)| [a, b]).collect(),
            triangles: t.triangles,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TriangulateStep {
    pub sweep_y: f64,
    pub diagonals: Vec<[usize; 2]>,
    pub visible: Vec<usize>,
}

impl From<TriangulationSnapshot> for TriangulateStep {
    fn from(s: TriangulationSnapshot) -> Self {
        Self {
            sweep_y: s.sweep_y,
            diagonals: s.diagonals.iter().map(|&(a, b)| [a, b]).collect(),
            visible: s.visible,
        }
    }
}
