use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use super::point::Point;

/// Plain 2D point/vector over a float type, the point type used by the console
/// front end and the renderer.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2<T> {
    pub(crate) x: T,
    pub(crate) y: T,
}

impl<T> Point2<T>
where
    T: Float,
{
    pub fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    /// The vector rotated by 90° counter-clockwise
    pub fn perpendicular(&self) -> Self {
        Point2 {
            x: -self.y,
            y: self.x,
        }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<Point2<T>> for (T, T) {
    fn from(p: Point2<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> Point for Point2<T>
where
    T: Float + Default,
{
    type Scalar = T;
    const DIM: usize = 2;

    fn axis(&self, index: usize) -> T {
        match index {
            0 => self.x,
            1 => self.y,
            _ => panic!("Point2 has no axis {}", index),
        }
    }

    fn scale(self, factor: T) -> Self {
        self * factor
    }

    fn squared_length(&self) -> T {
        self.x * self.x + self.y * self.y
    }
}
