//! Glam adapter implementations.
//!
//! Enable this adapter with the `glam` feature to use `glam::Vec2` and
//! `glam::DVec2` as a `Point`, e.g. straight from an input layer that
//! already reports pointer positions as glam vectors.
//!
//! # Example
//! ```rust,no_run
//! use glam::Vec2;
//! use bezier_lab::Bezier;
//!
//! let curve = Bezier::from_points(&[
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(1.0, 0.0),
//!     Vec2::new(1.0, 1.0),
//! ]).unwrap();
//!
//! let mid = curve.eval(0.5);
//! # let _ = mid;
//! ```

use ::glam::{DVec2, Vec2};

use crate::point::Point;

impl Point for Vec2 {
    type Scalar = f32;
    const DIM: usize = 2;

    fn axis(&self, index: usize) -> f32 {
        self[index]
    }

    fn scale(self, factor: f32) -> Self {
        self * factor
    }
}

impl Point for DVec2 {
    type Scalar = f64;
    const DIM: usize = 2;

    fn axis(&self, index: usize) -> f64 {
        self[index]
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }
}
