use glam::{Quat, Vec3};

use crate::utilities::math_helper::{binary_sign, scaled_direction};

use super::shape::{IConvexShape, IShape, ShapeKind};
use super::shapes::Shape;

/// Collision shape representing a sphere-expanded line segment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    /// Center of the internal line segment.
    pub pos: Vec3,
    /// Unit direction of the internal line segment.
    pub dir: Vec3,
    /// Spherical expansion applied to the internal line segment.
    pub r_s: f32,
    /// Half of the length of the internal line segment.
    pub r_h: f32,
}

impl Capsule {
    /// Creates a capsule shape.
    #[inline(always)]
    pub fn new(pos: Vec3, dir: Vec3, r_s: f32, r_h: f32) -> Self {
        Self { pos, dir, r_s, r_h }
    }

    /// Creates a capsule whose internal segment runs from `a` to `b`.
    #[inline]
    pub fn between(a: Vec3, b: Vec3, radius: f32) -> Self {
        let offset = b - a;
        let length = offset.length();
        let dir = if length > 0.0 { offset / length } else { Vec3::Y };
        Self::new((a + b) * 0.5, dir, radius, length * 0.5)
    }

    /// Gets the endpoints of the internal line segment.
    #[inline(always)]
    pub fn endpoints(&self) -> (Vec3, Vec3) {
        let half = self.dir * self.r_h;
        (self.pos - half, self.pos + half)
    }

    /// Gets the length of the capsule's internal line segment.
    pub fn length(&self) -> f32 {
        self.r_h * 2.0
    }
}

impl IShape for Capsule {
    #[inline(always)]
    fn kind() -> ShapeKind {
        ShapeKind::Capsule
    }

    #[inline(always)]
    fn as_shape(&self) -> Shape<'_> {
        Shape::Capsule(*self)
    }

    #[inline(always)]
    fn translate(&self, offset: Vec3, rotation: Quat) -> Self {
        Self::new(rotation * self.pos + offset, rotation * self.dir, self.r_s, self.r_h)
    }
}

impl IConvexShape for Capsule {
    #[inline(always)]
    fn center(&self) -> Vec3 {
        self.pos
    }

    #[inline(always)]
    fn support(&self, direction: Vec3) -> Vec3 {
        self.dir * (binary_sign(direction.dot(self.dir)) * self.r_h) + scaled_direction(direction, self.r_s)
    }

    #[inline(always)]
    fn boundary_sq_radius(&self) -> f32 {
        let r = self.r_s + self.r_h;
        r * r
    }
}
