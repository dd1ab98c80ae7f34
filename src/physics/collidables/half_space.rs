use glam::{Quat, Vec3};

use super::shape::{IShape, ShapeKind};
use super::shapes::Shape;

/// Solid region behind a plane.
///
/// The plane passes through `pos`; `dir` is its unit outward normal. Points with
/// `dot(x - pos, dir) <= 0` are inside.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfSpace {
    /// A point on the boundary plane.
    pub pos: Vec3,
    /// Unit outward normal of the boundary plane.
    pub dir: Vec3,
}

impl HalfSpace {
    /// Creates a half-space shape.
    #[inline(always)]
    pub fn new(pos: Vec3, dir: Vec3) -> Self {
        debug_assert!((dir.length_squared() - 1.0).abs() < 1e-3, "half-space normal must be unit length");
        Self { pos, dir }
    }

    /// Signed distance of `point` above the boundary plane. Negative values are inside.
    #[inline(always)]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        (point - self.pos).dot(self.dir)
    }
}

impl IShape for HalfSpace {
    #[inline(always)]
    fn kind() -> ShapeKind {
        ShapeKind::HalfSpace
    }

    #[inline(always)]
    fn as_shape(&self) -> Shape<'_> {
        Shape::HalfSpace(*self)
    }

    #[inline(always)]
    fn translate(&self, offset: Vec3, rotation: Quat) -> Self {
        Self::new(rotation * self.pos + offset, rotation * self.dir)
    }
}
