//! Drawable primitives derived from a curve model.
//!
//! A scene is a plain value in screen coordinates; the surfaces in `render`
//! only draw what is in here and never look at the curve again.

use num_traits::ToPrimitive;

use crate::model::CurveModel;
use crate::point::Point;
use crate::point2::Point2;
use crate::sampling::parameters;

/// Sizes used when turning a model into a scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStyle {
    /// Radius of the filled control point circles
    pub point_radius: f64,
    /// Length of the normal indicator segments
    pub normal_length: f64,
}

impl Default for SceneStyle {
    fn default() -> Self {
        SceneStyle {
            point_radius: 5.0,
            normal_length: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: (f64, f64),
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Control points
    pub circles: Vec<Circle>,
    /// Curve samples, drawn as connected line
    pub polyline: Vec<(f64, f64)>,
    /// Indicators perpendicular to the tangent direction
    pub normal_segments: Vec<Segment>,
}

/// First two axes of a point as f64
fn planar<P: Point>(p: &P) -> (f64, f64) {
    let coord = |i: usize| {
        if i < P::DIM {
            p.axis(i).to_f64().unwrap_or(f64::NAN)
        } else {
            0.0
        }
    };
    (coord(0), coord(1))
}

impl Scene {
    pub fn from_model<P: Point>(model: &CurveModel<P>, style: &SceneStyle) -> Scene {
        let circles = model
            .control_points()
            .iter()
            .map(|p| Circle {
                center: planar(p),
                radius: style.point_radius,
            })
            .collect();

        let polyline = model.curve_points().iter().map(planar).collect();

        // one indicator per tangent sample, anchored on the curve at the same parameter
        // and turned by 90° off the tangent direction; degenerate tangents are skipped
        let normal_segments = match model.tangents() {
            Some(tangents) => parameters::<P::Scalar>(tangents.len())
                .zip(tangents.normals())
                .filter_map(|(t, normal)| {
                    let normal = Point2::from(planar(normal.as_ref()?));
                    let anchor = Point2::from(planar(&model.curve().eval(t)));
                    let end = anchor + normal.perpendicular() * style.normal_length;
                    Some(Segment {
                        start: anchor.into(),
                        end: end.into(),
                    })
                })
                .collect(),
            None => Vec::new(),
        };

        Scene {
            circles,
            polyline,
            normal_segments,
        }
    }

    /// Number of line segments in the curve polyline
    pub fn polyline_segments(&self) -> usize {
        self.polyline.len().saturating_sub(1)
    }
}
