//! Curve state owned by the interaction loop: control points, sampling counts and
//! the sampled outputs derived from them.
use log::{debug, trace};

use crate::bezier::Bezier;
use crate::error::CurveError;
use crate::point::Point;
use crate::tangent::TangentSamples;

/// Fixed parameters of a curve instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveConfig {
    /// Degree of the curve, needs `order + 1` control points
    pub order: usize,
    /// Number of curve samples
    pub samples: usize,
    /// Number of tangent samples, None when tangents are not evaluated
    pub tangent_samples: Option<usize>,
}

impl CurveConfig {
    pub fn new(order: usize, samples: usize) -> Self {
        CurveConfig {
            order,
            samples,
            tangent_samples: None,
        }
    }

    pub fn with_tangents(mut self, tangent_samples: usize) -> Self {
        self.tangent_samples = Some(tangent_samples);
        self
    }
}

/// A curve together with its sampled points and (optionally) tangents.
/// The samples are always recomputed in full from the control points, never patched.
#[derive(Debug, Clone)]
pub struct CurveModel<P: Point> {
    config: CurveConfig,
    curve: Bezier<P>,
    curve_points: Vec<P>,
    tangents: Option<TangentSamples<P>>,
}

impl<P: Point> CurveModel<P> {
    /// Validate the configuration against the control points and evaluate once.
    pub fn new(config: CurveConfig, control_points: Vec<P>) -> Result<Self, CurveError> {
        let curve = Bezier::new(config.order, control_points)?;
        if config.samples == 0 {
            return Err(CurveError::InvalidSampleCount { which: "curve" });
        }
        match config.tangent_samples {
            Some(0) => return Err(CurveError::InvalidSampleCount { which: "tangent" }),
            Some(_) if config.order == 0 => {
                return Err(CurveError::MissingTangentRow { order: 0 })
            }
            _ => {}
        }

        let mut model = CurveModel {
            config,
            curve,
            curve_points: Vec::new(),
            tangents: None,
        };
        model.recompute()?;
        debug!(
            "curve model of order {} with {} samples ready",
            config.order, config.samples
        );
        Ok(model)
    }

    pub fn config(&self) -> CurveConfig {
        self.config
    }

    pub fn order(&self) -> usize {
        self.curve.order()
    }

    pub fn curve(&self) -> &Bezier<P> {
        &self.curve
    }

    pub fn control_points(&self) -> &[P] {
        self.curve.control_points()
    }

    pub fn curve_points(&self) -> &[P] {
        &self.curve_points
    }

    pub fn tangents(&self) -> Option<&TangentSamples<P>> {
        self.tangents.as_ref()
    }

    /// Move control point `index` to `position` and re-evaluate everything.
    pub fn move_control_point(&mut self, index: usize, position: P) -> Result<(), CurveError> {
        self.curve.set_control_point(index, position)?;
        trace!("control point {} moved", index);
        self.recompute()
    }

    /// Index of the control point closest to `position` within `radius` (inclusive)
    pub fn hit_test(&self, position: P, radius: P::Scalar) -> Option<usize> {
        let radius_squared = radius * radius;
        self.control_points()
            .iter()
            .enumerate()
            .map(|(i, p)| (i, (*p - position).squared_length()))
            .filter(|(_, d)| *d <= radius_squared)
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(core::cmp::Ordering::Equal))
            .map(|(i, _)| i)
    }

    fn recompute(&mut self) -> Result<(), CurveError> {
        self.curve_points = self.curve.sample(self.config.samples)?;
        self.tangents = match self.config.tangent_samples {
            Some(count) => Some(self.curve.sample_tangents(count)?),
            None => None,
        };
        debug!(
            "recomputed {} curve points, {} tangents",
            self.curve_points.len(),
            self.tangents.as_ref().map_or(0, TangentSamples::len)
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point2::Point2;

    fn pt(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    fn cubic() -> Vec<Point2<f64>> {
        vec![
            pt(100.0, 400.0),
            pt(150.0, 100.0),
            pt(550.0, 100.0),
            pt(600.0, 400.0),
        ]
    }

    #[test]
    fn new_evaluates_immediately() {
        let model = CurveModel::new(CurveConfig::new(3, 20).with_tangents(5), cubic()).unwrap();
        assert_eq!(model.curve_points().len(), 20);
        assert_eq!(model.tangents().map(TangentSamples::len), Some(5));
        assert_eq!(model.order(), 3);
        assert_eq!(model.curve_points()[19], pt(600.0, 400.0));
    }

    #[test]
    fn base_variant_has_no_tangents() {
        let model = CurveModel::new(CurveConfig::new(3, 20), cubic()).unwrap();
        assert!(model.tangents().is_none());
    }

    #[test]
    fn rejects_invalid_configuration() {
        assert_eq!(
            CurveModel::new(CurveConfig::new(2, 20), cubic()).err(),
            Some(CurveError::InvalidControlPointCount {
                order: 2,
                expected: 3,
                found: 4
            })
        );
        assert_eq!(
            CurveModel::new(CurveConfig::new(3, 0), cubic()).err(),
            Some(CurveError::InvalidSampleCount { which: "curve" })
        );
        assert_eq!(
            CurveModel::new(CurveConfig::new(3, 10).with_tangents(0), cubic()).err(),
            Some(CurveError::InvalidSampleCount { which: "tangent" })
        );
        assert_eq!(
            CurveModel::new(CurveConfig::new(0, 10).with_tangents(4), vec![pt(1.0, 1.0)]).err(),
            Some(CurveError::MissingTangentRow { order: 0 })
        );
    }

    #[test]
    fn move_recomputes_like_fresh_model() {
        let config = CurveConfig::new(3, 40).with_tangents(8);
        let mut model = CurveModel::new(config, cubic()).unwrap();
        let before = model.curve_points().to_vec();
        model.move_control_point(2, pt(500.0, 300.0)).unwrap();
        assert_ne!(model.curve_points(), &before[..]);

        let mut points = cubic();
        points[2] = pt(500.0, 300.0);
        let fresh = CurveModel::new(config, points).unwrap();
        assert_eq!(model.curve_points(), fresh.curve_points());
        assert_eq!(model.tangents(), fresh.tangents());
        // the end point only depends on the last control point
        assert_eq!(model.curve_points()[39], before[39]);
    }

    #[test]
    fn move_out_of_range_keeps_state() {
        let mut model = CurveModel::new(CurveConfig::new(3, 10), cubic()).unwrap();
        let before = model.curve_points().to_vec();
        assert_eq!(
            model.move_control_point(7, pt(0.0, 0.0)),
            Err(CurveError::ControlPointIndex { index: 7, len: 4 })
        );
        assert_eq!(model.curve_points(), &before[..]);
    }

    #[test]
    fn hit_test_picks_nearest_within_radius() {
        let model = CurveModel::new(
            CurveConfig::new(2, 10),
            vec![pt(0.0, 0.0), pt(4.0, 0.0), pt(100.0, 100.0)],
        )
        .unwrap();
        assert_eq!(model.hit_test(pt(3.0, 0.0), 5.0), Some(1));
        assert_eq!(model.hit_test(pt(1.0, 0.0), 5.0), Some(0));
        assert_eq!(model.hit_test(pt(105.0, 100.0), 5.0), Some(2));
        assert_eq!(model.hit_test(pt(50.0, 50.0), 5.0), None);
    }
}
