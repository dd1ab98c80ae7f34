use glam::{Quat, Vec3};

use crate::utilities::math_helper::{reject, scaled_direction};

use super::shape::{IConvexShape, IShape, ShapeKind};
use super::shapes::Shape;

/// Collision shape representing a cone, inflated by `w`.
/// The apex sits at `pos + dir * r_h` and the base disc at `pos - dir * r_h`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    /// Midpoint between the apex and the base center.
    pub pos: Vec3,
    /// Unit direction from the base toward the apex.
    pub dir: Vec3,
    /// Radius of the base disc.
    pub r_s: f32,
    /// Half of the distance from the base to the apex.
    pub r_h: f32,
    /// Inflation thickness.
    pub w: f32,
}

impl Cone {
    /// Creates a cone shape.
    #[inline(always)]
    pub fn new(pos: Vec3, dir: Vec3, r_s: f32, r_h: f32, w: f32) -> Self {
        Self { pos, dir, r_s, r_h, w }
    }

    /// Gets the world space apex.
    #[inline(always)]
    pub fn apex(&self) -> Vec3 {
        self.pos + self.dir * self.r_h
    }
}

impl IShape for Cone {
    #[inline(always)]
    fn kind() -> ShapeKind {
        ShapeKind::Cone
    }

    #[inline(always)]
    fn as_shape(&self) -> Shape<'_> {
        Shape::Cone(*self)
    }

    #[inline(always)]
    fn translate(&self, offset: Vec3, rotation: Quat) -> Self {
        Self::new(rotation * self.pos + offset, rotation * self.dir, self.r_s, self.r_h, self.w)
    }
}

impl IConvexShape for Cone {
    #[inline(always)]
    fn center(&self) -> Vec3 {
        self.pos
    }

    #[inline]
    fn support(&self, direction: Vec3) -> Vec3 {
        let apex = self.dir * self.r_h;
        let rim = scaled_direction(reject(direction, self.dir), self.r_s) - apex;
        let extreme = if apex.dot(direction) >= rim.dot(direction) { apex } else { rim };
        extreme + scaled_direction(direction, self.w)
    }

    #[inline(always)]
    fn boundary_sq_radius(&self) -> f32 {
        let r = self.r_s.hypot(self.r_h) + self.w;
        r * r
    }
}
