use glam::{Quat, Vec3};

use crate::utilities::math_helper::scaled_direction;

use super::shape::{IConvexShape, IShape, ShapeKind};
use super::shapes::Shape;

/// Collision shape representing a sphere.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center of the sphere.
    pub pos: Vec3,
    /// Radius of the sphere.
    pub r: f32,
}

impl Sphere {
    /// Creates a sphere shape.
    #[inline(always)]
    pub fn new(pos: Vec3, r: f32) -> Self {
        Self { pos, r }
    }
}

impl IShape for Sphere {
    #[inline(always)]
    fn kind() -> ShapeKind {
        ShapeKind::Sphere
    }

    #[inline(always)]
    fn as_shape(&self) -> Shape<'_> {
        Shape::Sphere(*self)
    }

    #[inline(always)]
    fn translate(&self, offset: Vec3, rotation: Quat) -> Self {
        Self::new(rotation * self.pos + offset, self.r)
    }
}

impl IConvexShape for Sphere {
    #[inline(always)]
    fn center(&self) -> Vec3 {
        self.pos
    }

    #[inline(always)]
    fn support(&self, direction: Vec3) -> Vec3 {
        scaled_direction(direction, self.r)
    }

    #[inline(always)]
    fn boundary_sq_radius(&self) -> f32 {
        self.r * self.r
    }
}
