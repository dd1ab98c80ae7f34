use glam::{Quat, Vec3};

use crate::utilities::math_helper::{reject, scaled_direction};

use super::shape::{IConvexShape, IShape, ShapeKind};
use super::shapes::Shape;

/// Collision shape representing a flat disc, inflated by `w`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center of the disc.
    pub pos: Vec3,
    /// Unit normal of the disc's plane.
    pub dir: Vec3,
    /// Radius of the disc.
    pub r: f32,
    /// Inflation thickness.
    pub w: f32,
}

impl Circle {
    /// Creates a circle shape.
    #[inline(always)]
    pub fn new(pos: Vec3, dir: Vec3, r: f32, w: f32) -> Self {
        Self { pos, dir, r, w }
    }
}

impl IShape for Circle {
    #[inline(always)]
    fn kind() -> ShapeKind {
        ShapeKind::Circle
    }

    #[inline(always)]
    fn as_shape(&self) -> Shape<'_> {
        Shape::Circle(*self)
    }

    #[inline(always)]
    fn translate(&self, offset: Vec3, rotation: Quat) -> Self {
        Self::new(rotation * self.pos + offset, rotation * self.dir, self.r, self.w)
    }
}

impl IConvexShape for Circle {
    #[inline(always)]
    fn center(&self) -> Vec3 {
        self.pos
    }

    #[inline(always)]
    fn support(&self, direction: Vec3) -> Vec3 {
        scaled_direction(reject(direction, self.dir), self.r) + scaled_direction(direction, self.w)
    }

    #[inline(always)]
    fn boundary_sq_radius(&self) -> f32 {
        let r = self.r + self.w;
        r * r
    }
}
