//! Tangent sampling via the hodograph (derivative curve).
//!
//! The derivative of a curve of order `r` is a curve of order `r - 1` over the
//! forward differences of the control points, scaled by `r`:
//! `B'(t) = r * sum_j C(r-1,j) * (1-t)^(r-1-j) * t^j * (P_j+1 - P_j)`

use num_traits::{Float, One};

use crate::error::CurveError;
use crate::point::Point;
use crate::sampling::{parameters, scalar};

/// Evaluate the derivative at `t`.
/// `row` is the binomial row of order `r - 1` where `r = control_points.len() - 1`.
pub fn hodograph_point<P: Point>(row: &[u64], control_points: &[P], t: P::Scalar) -> P {
    let order = row.len();
    let degree = order.saturating_sub(1);
    let factor = scalar::<P::Scalar, _>(order);
    let one_t = P::Scalar::one() - t;
    row.iter()
        .zip(control_points.windows(2))
        .enumerate()
        .fold(P::default(), |acc, (j, (&c, w))| {
            let weight = factor
                * scalar::<P::Scalar, _>(c)
                * one_t.powi((degree - j) as i32)
                * t.powi(j as i32);
            acc + (w[1] - w[0]).scale(weight)
        })
}

/// Tangent vectors sampled along a curve together with their unit normals
/// (the unit vector in the tangent's direction).
#[derive(Debug, Clone, PartialEq)]
pub struct TangentSamples<P: Point> {
    tangents: Vec<P>,
    normals: Vec<Option<P>>,
}

impl<P: Point> TangentSamples<P> {
    fn from_tangents(tangents: Vec<P>) -> Self {
        let normals = tangents.iter().map(Point::normalized).collect();
        TangentSamples { tangents, normals }
    }

    pub fn len(&self) -> usize {
        self.tangents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tangents.is_empty()
    }

    /// Raw (scaled) derivative vectors
    pub fn tangents(&self) -> &[P] {
        &self.tangents
    }

    /// Unit normals, None where the tangent is the zero vector
    pub fn normals(&self) -> &[Option<P>] {
        &self.normals
    }

    /// Unit normal of sample `index`
    pub fn normal(&self, index: usize) -> Result<P, CurveError> {
        match self.normals.get(index) {
            Some(Some(n)) => Ok(*n),
            Some(None) => Err(CurveError::DegenerateTangent { index }),
            None => Err(CurveError::SampleIndex {
                index,
                len: self.normals.len(),
            }),
        }
    }

    /// All unit normals, failing on the first degenerate tangent
    pub fn unit_normals(&self) -> Result<Vec<P>, CurveError> {
        (0..self.normals.len()).map(|i| self.normal(i)).collect()
    }
}

/// Sample the derivative at `t = i / samples` for `i = 1..=samples` and normalize each sample.
/// Needs at least two control points (order >= 1) and `row.len() + 1 == control_points.len()`.
pub fn sample_tangents<P: Point>(
    row: &[u64],
    control_points: &[P],
    samples: usize,
) -> Result<TangentSamples<P>, CurveError> {
    if control_points.len() < 2 {
        return Err(CurveError::MissingTangentRow { order: 0 });
    }
    if row.len() + 1 != control_points.len() {
        return Err(CurveError::InvalidControlPointCount {
            order: row.len(),
            expected: row.len() + 1,
            found: control_points.len(),
        });
    }
    if samples == 0 {
        return Err(CurveError::InvalidSampleCount { which: "tangent" });
    }

    let tangents = parameters::<P::Scalar>(samples)
        .map(|t| hodograph_point(row, control_points, t))
        .collect();
    Ok(TangentSamples::from_tangents(tangents))
}
