use num_traits::{Float, One};

use crate::binomial::BinomialTable;
use crate::error::CurveError;
use crate::point::Point;
use crate::sampling::{parameters, scalar};
use crate::tangent::{sample_tangents, TangentSamples};

/// Evaluate the curve at `t` in direct Bernstein form:
/// `B(t) = sum_j C(r,j) * (1-t)^(r-j) * t^j * P_j`
/// with `r = control_points.len() - 1` and `row` the binomial row of order `r`.
/// Uses integer powers, which is not as numerically stable as De Casteljau
/// but plenty for visualization.
pub fn bernstein_point<P: Point>(row: &[u64], control_points: &[P], t: P::Scalar) -> P {
    let order = control_points.len().saturating_sub(1);
    let one_t = P::Scalar::one() - t;
    row.iter()
        .zip(control_points)
        .enumerate()
        .fold(P::default(), |acc, (j, (&c, &p))| {
            let weight = scalar::<P::Scalar, _>(c)
                * one_t.powi((order - j) as i32)
                * t.powi(j as i32);
            acc + p.scale(weight)
        })
}

/// Sample the curve at `t = i / samples` for `i = 1..=samples`.
/// `row` must be the binomial row of order `control_points.len() - 1`.
pub fn sample_curve<P: Point>(
    row: &[u64],
    control_points: &[P],
    samples: usize,
) -> Result<Vec<P>, CurveError> {
    if row.is_empty() || row.len() != control_points.len() {
        return Err(CurveError::InvalidControlPointCount {
            order: row.len().saturating_sub(1),
            expected: row.len(),
            found: control_points.len(),
        });
    }
    if samples == 0 {
        return Err(CurveError::InvalidSampleCount { which: "curve" });
    }

    Ok(parameters::<P::Scalar>(samples)
        .map(|t| bernstein_point(row, control_points, t))
        .collect())
}

/// General Bezier curve of runtime order (= number of control points - 1).
/// The binomial table for the order is built once on construction; moving control points
/// never touches it since it only depends on the order.
#[derive(Debug, Clone, PartialEq)]
pub struct Bezier<P>
where
    P: Point,
{
    control_points: Vec<P>,
    table: BinomialTable,
}

impl<P> Bezier<P>
where
    P: Point,
{
    /// Create a curve of `order`, which requires exactly `order + 1` control points.
    pub fn new(order: usize, control_points: Vec<P>) -> Result<Bezier<P>, CurveError> {
        if control_points.len().checked_sub(1) != Some(order) {
            return Err(CurveError::InvalidControlPointCount {
                order,
                expected: order.saturating_add(1),
                found: control_points.len(),
            });
        }
        let table = BinomialTable::new(order)?;
        Ok(Bezier {
            control_points,
            table,
        })
    }

    /// Create a curve whose order follows from the number of points. Fails for an empty slice.
    pub fn from_points(control_points: &[P]) -> Result<Bezier<P>, CurveError> {
        match control_points.len() {
            0 => Err(CurveError::InvalidControlPointCount {
                order: 0,
                expected: 1,
                found: 0,
            }),
            n => Bezier::new(n - 1, control_points.to_vec()),
        }
    }

    pub fn order(&self) -> usize {
        self.table.order()
    }

    pub fn control_points(&self) -> &[P] {
        &self.control_points
    }

    /// Move a single control point. The number of control points never changes.
    pub fn set_control_point(&mut self, index: usize, point: P) -> Result<(), CurveError> {
        let len = self.control_points.len();
        match self.control_points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                Ok(())
            }
            None => Err(CurveError::ControlPointIndex { index, len }),
        }
    }

    /// Evaluate a point on the curve at 't' which should be in the interval [0,1]
    pub fn eval(&self, t: P::Scalar) -> P {
        bernstein_point(self.table.curve_row(), &self.control_points, t)
    }

    /// Evaluate the curve at 't' using De Casteljau's algorithm.
    /// Slower than `eval()` but numerically stable, used as a reference.
    pub fn eval_casteljau(&self, t: P::Scalar) -> P {
        let one_t = P::Scalar::one() - t;
        let mut p = self.control_points.clone();
        for i in 1..p.len() {
            for j in 0..p.len() - i {
                p[j] = p[j].scale(one_t) + p[j + 1].scale(t);
            }
        }
        p[0]
    }

    /// Evaluate the derivative of the curve at 't' (see `tangent::hodograph_point`).
    /// Returns None for curves of order 0.
    pub fn tangent(&self, t: P::Scalar) -> Option<P> {
        self.table
            .tangent_row()
            .map(|row| crate::tangent::hodograph_point(row, &self.control_points, t))
    }

    /// Returns the derivative curve (hodograph) of self which has one control point less.
    /// The derivative of an nth degree Bézier curve is an (n-1)th degree Bézier curve
    /// with control points n(P_i+1 - P_i).
    pub fn derivative(&self) -> Result<Bezier<P>, CurveError> {
        let order = self.order();
        if order == 0 {
            return Err(CurveError::MissingTangentRow { order });
        }
        let factor = scalar::<P::Scalar, _>(order);
        let points = self
            .control_points
            .windows(2)
            .map(|w| (w[1] - w[0]).scale(factor))
            .collect();
        Bezier::new(order - 1, points)
    }

    /// Sample the curve at `samples` parameters, see `sample_curve`
    pub fn sample(&self, samples: usize) -> Result<Vec<P>, CurveError> {
        sample_curve(self.table.curve_row(), &self.control_points, samples)
    }

    /// Sample tangents and their normals at `samples` parameters, see `sample_tangents`
    pub fn sample_tangents(&self, samples: usize) -> Result<TangentSamples<P>, CurveError> {
        let row = self
            .table
            .tangent_row()
            .ok_or(CurveError::MissingTangentRow { order: self.order() })?;
        sample_tangents(row, &self.control_points, samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point2::Point2;
    use crate::EPSILON;
    use approx::assert_relative_eq;

    fn pt(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn linear_curve_interpolates() {
        let curve = Bezier::new(1, vec![pt(0.0, 0.0), pt(10.0, 0.0)]).unwrap();
        let samples = curve.sample(10).unwrap();
        assert_eq!(samples.len(), 10);
        for (i, p) in samples.iter().enumerate() {
            assert_relative_eq!(p.x(), (i + 1) as f64, epsilon = 1e-12);
            assert_eq!(p.y(), 0.0);
        }
    }

    #[test]
    fn single_sample_is_last_control_point() {
        let curve = Bezier::new(2, vec![pt(0.0, 0.0), pt(5.0, 10.0), pt(10.0, 0.0)]).unwrap();
        let samples = curve.sample(1).unwrap();
        assert_eq!(samples, vec![pt(10.0, 0.0)]);
    }

    #[test]
    fn output_length_matches_sample_count() {
        let curve = Bezier::new(3, vec![pt(0.0, 0.0), pt(1.0, 2.0), pt(3.0, 2.0), pt(4.0, 0.0)])
            .unwrap();
        for samples in [1, 2, 7, 100, 1000] {
            assert_eq!(curve.sample(samples).unwrap().len(), samples);
        }
    }

    #[test]
    fn eval_endpoints() {
        let points = vec![
            pt(0.0, 1.77),
            pt(1.1, -1.0),
            pt(4.3, 3.0),
            pt(3.2, -4.0),
            pt(7.3, 2.7),
            pt(8.9, 1.7),
        ];
        let curve = Bezier::from_points(&points).unwrap();
        assert_eq!(curve.order(), 5);

        let err_start = curve.eval(0.0) - points[0];
        assert!(err_start.squared_length() < EPSILON);

        let err_end = curve.eval(1.0) - points[points.len() - 1];
        assert!(err_end.squared_length() < EPSILON);
    }

    #[test]
    fn bernstein_matches_casteljau() {
        let curve = Bezier::from_points(&[
            pt(0.0, 1.77),
            pt(2.9, 0.0),
            pt(4.3, 3.0),
            pt(3.2, -4.0),
            pt(-1.5, 6.25),
            pt(5.5, 5.5),
            pt(9.0, -2.0),
        ])
        .unwrap();

        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let err = curve.eval(t) - curve.eval_casteljau(t);
            assert!(err.squared_length() < EPSILON);
        }
    }

    #[test]
    fn sampling_is_idempotent() {
        let curve = Bezier::new(2, vec![pt(0.0, 0.0), pt(5.0, 10.0), pt(10.0, 0.0)]).unwrap();
        assert_eq!(curve.sample(33).unwrap(), curve.sample(33).unwrap());
    }

    #[test]
    fn rejects_mismatched_point_count() {
        assert_eq!(
            Bezier::new(3, vec![pt(0.0, 0.0), pt(1.0, 1.0)]),
            Err(CurveError::InvalidControlPointCount {
                order: 3,
                expected: 4,
                found: 2
            })
        );
        assert!(Bezier::<Point2<f64>>::from_points(&[]).is_err());

        let row = [1u64, 2, 1];
        assert!(sample_curve(&row, &[pt(0.0, 0.0), pt(1.0, 1.0)], 4).is_err());
    }

    #[test]
    fn rejects_huge_order() {
        assert_eq!(
            Bezier::new(usize::MAX, vec![pt(0.0, 0.0)]),
            Err(CurveError::InvalidControlPointCount {
                order: usize::MAX,
                expected: usize::MAX,
                found: 1
            })
        );
        assert_eq!(
            Bezier::<Point2<f64>>::new(0, vec![]),
            Err(CurveError::InvalidControlPointCount {
                order: 0,
                expected: 1,
                found: 0
            })
        );
    }

    #[test]
    fn rejects_zero_samples() {
        let curve = Bezier::new(1, vec![pt(0.0, 0.0), pt(10.0, 0.0)]).unwrap();
        assert_eq!(
            curve.sample(0),
            Err(CurveError::InvalidSampleCount { which: "curve" })
        );
    }

    #[test]
    fn order_zero_is_a_constant_point() {
        let curve = Bezier::new(0, vec![pt(3.0, 4.0)]).unwrap();
        assert_eq!(curve.sample(3).unwrap(), vec![pt(3.0, 4.0); 3]);
        assert!(curve.tangent(0.5).is_none());
        assert_eq!(
            curve.derivative(),
            Err(CurveError::MissingTangentRow { order: 0 })
        );
    }

    #[test]
    fn moved_point_matches_fresh_curve() {
        let mut curve =
            Bezier::new(3, vec![pt(0.0, 0.0), pt(1.0, 2.0), pt(3.0, 2.0), pt(4.0, 0.0)]).unwrap();
        curve.set_control_point(1, pt(-2.0, 5.0)).unwrap();
        let fresh =
            Bezier::new(3, vec![pt(0.0, 0.0), pt(-2.0, 5.0), pt(3.0, 2.0), pt(4.0, 0.0)]).unwrap();
        assert_eq!(curve.sample(50).unwrap(), fresh.sample(50).unwrap());
        assert_eq!(
            curve.set_control_point(4, pt(0.0, 0.0)),
            Err(CurveError::ControlPointIndex { index: 4, len: 4 })
        );
    }

    #[test]
    fn derivative_curve_matches_tangent() {
        let curve = Bezier::from_points(&[
            pt(0.0, 1.77),
            pt(1.1, -1.0),
            pt(4.3, 3.0),
            pt(3.2, -4.0),
        ])
        .unwrap();
        let derivative = curve.derivative().unwrap();
        assert_eq!(derivative.order(), 2);
        for i in 0..=100 {
            let t = i as f64 / 100.0;
            let err = derivative.eval(t) - curve.tangent(t).unwrap();
            assert!(err.squared_length() < EPSILON);
        }
    }

    #[test]
    fn single_precision_points() {
        let curve = Bezier::new(
            2,
            vec![Point2::new(0f32, 0.0), Point2::new(5.0, 10.0), Point2::new(10.0, 0.0)],
        )
        .unwrap();
        let mid = curve.eval(0.5);
        assert_relative_eq!(mid.x(), 5.0, epsilon = 1e-5);
        assert_relative_eq!(mid.y(), 5.0, epsilon = 1e-5);
    }
}
