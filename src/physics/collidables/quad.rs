use glam::{Quat, Vec2, Vec3};

use crate::utilities::math_helper::{binary_sign, scaled_direction};

use super::shape::{IConvexShape, IShape, ShapeKind};
use super::shapes::Shape;

/// Local space support of a rectangle lying in the XY plane.
#[inline(always)]
pub(crate) fn rectangle_support(half_extents: Vec2, rotation: Quat, direction: Vec3) -> Vec3 {
    let local_direction = rotation.inverse() * direction;
    rotation
        * Vec3::new(
            binary_sign(local_direction.x) * half_extents.x,
            binary_sign(local_direction.y) * half_extents.y,
            0.0,
        )
}

/// Two-sided rectangle in its local XY plane, inflated by `w`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Center of the rectangle.
    pub pos: Vec3,
    /// Orientation of the rectangle. The face normal is the local Z axis.
    pub rotation: Quat,
    /// Half extents of the rectangle along its local X and Y axes.
    pub r: Vec2,
    /// Inflation thickness.
    pub w: f32,
}

impl Quad {
    /// Creates a quad shape.
    #[inline(always)]
    pub fn new(pos: Vec3, rotation: Quat, r: Vec2, w: f32) -> Self {
        Self { pos, rotation, r, w }
    }

    /// World space face normal on the local +Z side.
    #[inline(always)]
    pub fn normal(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

impl IShape for Quad {
    #[inline(always)]
    fn kind() -> ShapeKind {
        ShapeKind::Quad
    }

    #[inline(always)]
    fn as_shape(&self) -> Shape<'_> {
        Shape::Quad(*self)
    }

    #[inline(always)]
    fn translate(&self, offset: Vec3, rotation: Quat) -> Self {
        Self::new(rotation * self.pos + offset, rotation * self.rotation, self.r, self.w)
    }
}

impl IConvexShape for Quad {
    #[inline(always)]
    fn center(&self) -> Vec3 {
        self.pos
    }

    #[inline(always)]
    fn support(&self, direction: Vec3) -> Vec3 {
        rectangle_support(self.r, self.rotation, direction) + scaled_direction(direction, self.w)
    }

    #[inline(always)]
    fn boundary_sq_radius(&self) -> f32 {
        let r = self.r.length() + self.w;
        r * r
    }
}
