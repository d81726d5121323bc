//! Error types of the curve core and the layers around it.

use thiserror::Error;

/// Failures of table construction, evaluation and model mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// A curve of `order` needs exactly `order + 1` control points.
    #[error("a curve of order {order} needs {expected} control points, got {found}")]
    InvalidControlPointCount {
        order: usize,
        expected: usize,
        found: usize,
    },
    /// Sampling with zero subdivisions would divide by zero.
    #[error("{which} sample count must be positive")]
    InvalidSampleCount { which: &'static str },
    /// The tangent at this sample is the zero vector and has no normal.
    #[error("tangent {index} has zero length and cannot be normalized")]
    DegenerateTangent { index: usize },
    /// Tangents need the row of order `order - 1`, which does not exist for order 0.
    #[error("a curve of order {order} has no derivative row for tangent evaluation")]
    MissingTangentRow { order: usize },
    /// The binomial coefficients of `order` do not fit into 64 bits.
    #[error("binomial coefficients of order {order} overflow 64 bits")]
    CoefficientOverflow { order: usize },
    #[error("control point index {index} out of range for {len} control points")]
    ControlPointIndex { index: usize, len: usize },
    #[error("sample index {index} out of range for {len} samples")]
    SampleIndex { index: usize, len: usize },
}

/// Failures of the render surface.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing backend failed: {0}")]
    Backend(String),
}

/// Failures while running the interaction loop.
#[derive(Debug, Error)]
pub enum InteractionError {
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Failures while reading the startup parameters from the console.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input ended before {field} was read")]
    UnexpectedEof { field: &'static str },
    #[error("invalid value {token:?} for {field}")]
    InvalidNumber { field: &'static str, token: String },
    #[error("console i/o failed")]
    Io(#[from] std::io::Error),
}
