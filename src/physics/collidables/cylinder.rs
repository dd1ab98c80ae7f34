use glam::{Quat, Vec3};

use crate::utilities::math_helper::{binary_sign, reject, scaled_direction};

use super::shape::{IConvexShape, IShape, ShapeKind};
use super::shapes::Shape;

/// Collision shape representing a cylinder.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    /// Center of the cylinder.
    pub pos: Vec3,
    /// Unit direction of the cylinder's axis.
    pub dir: Vec3,
    /// Radius of the cylinder.
    pub r_s: f32,
    /// Half length of the cylinder along its axis.
    pub r_h: f32,
    /// Inflation thickness.
    pub w: f32,
}

impl Cylinder {
    /// Creates a cylinder shape.
    #[inline(always)]
    pub fn new(pos: Vec3, dir: Vec3, r_s: f32, r_h: f32, w: f32) -> Self {
        Self { pos, dir, r_s, r_h, w }
    }

    /// Gets the length of the cylinder along its axis.
    pub fn length(&self) -> f32 {
        self.r_h * 2.0
    }
}

impl IShape for Cylinder {
    #[inline(always)]
    fn kind() -> ShapeKind {
        ShapeKind::Cylinder
    }

    #[inline(always)]
    fn as_shape(&self) -> Shape<'_> {
        Shape::Cylinder(*self)
    }

    #[inline(always)]
    fn translate(&self, offset: Vec3, rotation: Quat) -> Self {
        Self::new(rotation * self.pos + offset, rotation * self.dir, self.r_s, self.r_h, self.w)
    }
}

impl IConvexShape for Cylinder {
    #[inline(always)]
    fn center(&self) -> Vec3 {
        self.pos
    }

    #[inline(always)]
    fn support(&self, direction: Vec3) -> Vec3 {
        scaled_direction(reject(direction, self.dir), self.r_s)
            + self.dir * (binary_sign(direction.dot(self.dir)) * self.r_h)
            + scaled_direction(direction, self.w)
    }

    #[inline(always)]
    fn boundary_sq_radius(&self) -> f32 {
        let r = self.r_s.hypot(self.r_h) + self.w;
        r * r
    }
}
