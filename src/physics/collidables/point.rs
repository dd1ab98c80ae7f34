use glam::{Quat, Vec3};

use super::shape::{IConvexShape, IShape, ShapeKind};
use super::shapes::Shape;

/// Collision shape representing a single point.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Location of the point.
    pub pos: Vec3,
}

impl Point {
    /// Creates a point shape.
    #[inline(always)]
    pub fn new(pos: Vec3) -> Self {
        Self { pos }
    }
}

impl IShape for Point {
    #[inline(always)]
    fn kind() -> ShapeKind {
        ShapeKind::Point
    }

    #[inline(always)]
    fn as_shape(&self) -> Shape<'_> {
        Shape::Point(*self)
    }

    #[inline(always)]
    fn translate(&self, offset: Vec3, rotation: Quat) -> Self {
        Self::new(rotation * self.pos + offset)
    }
}

impl IConvexShape for Point {
    #[inline(always)]
    fn center(&self) -> Vec3 {
        self.pos
    }

    #[inline(always)]
    fn support(&self, _direction: Vec3) -> Vec3 {
        Vec3::ZERO
    }

    #[inline(always)]
    fn boundary_sq_radius(&self) -> f32 {
        0.0
    }
}
