//! Bézier curves of arbitrary order in direct Bernstein form.
//!
//! The core is three pieces that only depend on each other through plain slices:
//! - [`BinomialTable`]: Pascal's triangle up to the curve order
//! - [`sample_curve`]: curve samples from the last table row and the control points
//! - [`sample_tangents`]: derivative (hodograph) samples and their unit normals from the second to last row
//!
//! Around it sit a [`CurveModel`] that keeps the samples in sync with the control points,
//! a drag-driven [`InteractionLoop`], and [`Surface`]s that draw [`Scene`]s.
//!
//! Both sample schedules use `t = i / count` for `i = 1..=count`, so the first
//! sample lies one step into the curve and the last one is its end point.

pub mod adapters;
pub mod bezier;
pub mod binomial;
pub mod config;
pub mod console;
pub mod error;
pub mod interaction;
pub mod model;
pub mod point;
pub mod point2;
pub mod render;
pub mod sampling;
pub mod scene;
pub mod tangent;

pub use bezier::{bernstein_point, sample_curve, Bezier};
pub use binomial::{BinomialRow, BinomialTable, MAX_ORDER};
pub use config::ViewOptions;
pub use error::{CurveError, InputError, InteractionError, RenderError};
pub use interaction::{
    Dragger, InputSource, InteractionLoop, LoopSummary, PointerState, ScriptedInput,
};
pub use model::{CurveConfig, CurveModel};
pub use point::Point;
pub use point2::Point2;
pub use render::{BitmapSurface, RecordingSurface, Surface};
pub use scene::{Scene, SceneStyle};
pub use tangent::{hodograph_point, sample_tangents, TangentSamples};

// Squared distance below which two points are considered equal in tests
#[cfg(test)]
const EPSILON: f64 = 1e-10;
