use core::ops::{Add, Sub};

use num_traits::{Float, Zero};

/// Trait defined over generic points P which themselves are generic over a float scalar.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing methods requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy.
///
/// `Default` must yield the origin, the evaluators accumulate onto it.
pub trait Point: Add<Output = Self> + Sub<Output = Self> + Copy + PartialEq + Default {
    type Scalar: Float;

    /// Number of coordinate axes
    const DIM: usize;

    /// Returns the component of the Point on its axis corresponding to index e.g. [0, 1, 2] -> [x, y, z]
    /// Panics for `index >= Self::DIM`.
    fn axis(&self, index: usize) -> Self::Scalar;

    /// Returns the point with every component multiplied by `factor`
    fn scale(self, factor: Self::Scalar) -> Self;

    /// Returns the squared L2 norm of the point interpreted as a vector
    fn squared_length(&self) -> Self::Scalar {
        (0..Self::DIM).fold(Self::Scalar::zero(), |acc, i| {
            let c = self.axis(i);
            acc + c * c
        })
    }

    fn length(&self) -> Self::Scalar {
        self.squared_length().sqrt()
    }

    fn distance(&self, other: Self) -> Self::Scalar {
        (*self - other).length()
    }

    fn dot(&self, other: Self) -> Self::Scalar {
        (0..Self::DIM).fold(Self::Scalar::zero(), |acc, i| {
            acc + self.axis(i) * other.axis(i)
        })
    }

    /// Unit vector pointing in the same direction.
    /// Returns None for the zero vector (and for non-finite input) since it has no direction.
    fn normalized(&self) -> Option<Self> {
        let len = self.length();
        if len > Self::Scalar::zero() && len.is_finite() {
            Some(self.scale(len.recip()))
        } else {
            None
        }
    }
}
