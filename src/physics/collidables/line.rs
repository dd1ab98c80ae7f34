use glam::{Quat, Vec3};

use crate::utilities::math_helper::{try_normalize, DEGENERATE_EPSILON};

use super::capsule::Capsule;
use super::shape::{IShape, ShapeKind};
use super::shapes::Shape;

/// Infinite line through `pos` along `dir`.
///
/// Lines have no support function; against bounded shapes they are clipped to a segment
/// spanning the other shape's bounding sphere.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// A point on the line.
    pub pos: Vec3,
    /// Direction of the line. Does not need to be unit length, but must not be zero.
    pub dir: Vec3,
}

impl Line {
    /// Creates a line shape.
    #[inline(always)]
    pub fn new(pos: Vec3, dir: Vec3) -> Self {
        Self { pos, dir }
    }

    /// Creates the line passing through two points.
    #[inline(always)]
    pub fn through(from: Vec3, to: Vec3) -> Self {
        Self::new(from, to - from)
    }

    /// Squared distance from `point` to the line, scaled by the squared length of `dir`.
    ///
    /// Comparing this against `r² * |dir|²` tests the distance without a square root.
    #[inline(always)]
    pub fn scaled_distance_squared(&self, point: Vec3) -> f32 {
        (point - self.pos).cross(self.dir).length_squared()
    }

    /// Closest point on the line to `point`.
    #[inline]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let length_squared = self.dir.length_squared();
        if length_squared <= DEGENERATE_EPSILON {
            return self.pos;
        }
        self.pos + self.dir * ((point - self.pos).dot(self.dir) / length_squared)
    }

    /// Clips the line to a zero radius capsule covering the sphere at `center` with squared radius `radius_squared`.
    ///
    /// Returns `None` when the line has no direction.
    pub fn clip_to_sphere(&self, center: Vec3, radius_squared: f32) -> Option<Capsule> {
        let direction = try_normalize(self.dir)?;
        let middle = self.closest_point(center);
        Some(Capsule::new(middle, direction, 0.0, radius_squared.max(0.0).sqrt()))
    }
}

impl IShape for Line {
    #[inline(always)]
    fn kind() -> ShapeKind {
        ShapeKind::Line
    }

    #[inline(always)]
    fn as_shape(&self) -> Shape<'_> {
        Shape::Line(*self)
    }

    #[inline(always)]
    fn translate(&self, offset: Vec3, rotation: Quat) -> Self {
        Self::new(rotation * self.pos + offset, rotation * self.dir)
    }
}
