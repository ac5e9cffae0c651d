//! Planar computational geometry: convex hulls, segment intersection sweep,
//! monotone polygon triangulation.
//!
//! Every algorithm comes in two forms: a plain function returning the result,
//! and a `*_steps` variant yielding snapshots of the algorithm state for
//! visualization. Both run the same state machine (`steps::Stepper`), so the
//! last snapshot always agrees with the plain result.
//!
//! API Policy
//! - Points are `nalgebra::Vector2<f64>`; tolerances live in `GeomCfg`.
//! - Invalid input fails with `GeomError`; nothing panics on user data.

pub mod error;
pub mod geom2;
pub mod hull;
pub mod monotone;
pub mod steps;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{ErrorKind, GeomError};
pub use geom2::{GeomCfg, Point, Polygon, Segment};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{ErrorKind, GeomError};
    pub use crate::geom2::{
        intersection, orient, round_point, segments_from_coords, GeomCfg, Point, Polygon,
        Restriction, Segment,
    };
    pub use crate::hull::{convex_hull, graham, jarvis, HullAlgorithm, HullSnapshot};
    pub use crate::monotone::{
        classify_poly, is_y_monotone, triangulate_monotone, triangulation_steps, Triangulation,
        VertexClass,
    };
    pub use crate::steps::{run_to_end, Stepper, Steps};
    pub use crate::sweep::{bentley_ottmann, brute_force_intersections, sweep_steps};
    pub use nalgebra::Vector2 as Vec2;
}
