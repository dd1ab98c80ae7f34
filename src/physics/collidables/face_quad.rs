use glam::{Quat, Vec2, Vec3};

use crate::utilities::math_helper::scaled_direction;

use super::quad::rectangle_support;
use super::shape::{IConvexShape, IShape, ShapeKind};
use super::shapes::Shape;

/// One-sided rectangle in its local XY plane, inflated by `w`.
///
/// The rectangle is a thin plate of thickness `2 * w`. Only the local +Z face generates contacts:
/// a shape touching the plate from behind is pushed out through the front, and a shape entirely
/// behind the plate misses it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceQuad {
    /// Center of the rectangle.
    pub pos: Vec3,
    /// Orientation of the rectangle. The front face normal is the local Z axis.
    pub rotation: Quat,
    /// Half extents of the rectangle along its local X and Y axes.
    pub r: Vec2,
    /// Inflation thickness.
    pub w: f32,
}

impl FaceQuad {
    /// Creates a face quad shape.
    #[inline(always)]
    pub fn new(pos: Vec3, rotation: Quat, r: Vec2, w: f32) -> Self {
        Self { pos, rotation, r, w }
    }

    /// World space normal of the front face.
    #[inline(always)]
    pub fn normal(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

impl IShape for FaceQuad {
    #[inline(always)]
    fn kind() -> ShapeKind {
        ShapeKind::FaceQuad
    }

    #[inline(always)]
    fn as_shape(&self) -> Shape<'_> {
        Shape::FaceQuad(*self)
    }

    #[inline(always)]
    fn translate(&self, offset: Vec3, rotation: Quat) -> Self {
        Self::new(rotation * self.pos + offset, rotation * self.rotation, self.r, self.w)
    }
}

impl IConvexShape for FaceQuad {
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
