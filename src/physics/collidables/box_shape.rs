use glam::{Quat, Vec3};

use crate::utilities::math_helper::{binary_sign, scaled_direction};

use super::shape::{IConvexShape, IShape, ShapeKind};
use super::shapes::Shape;

/// Collision shape representing a solid cuboid, inflated by `w`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box {
    /// Center of the box.
    pub pos: Vec3,
    /// Orientation of the box.
    pub rotation: Quat,
    /// Half of the box's extents along its local axes.
    pub r: Vec3,
    /// Inflation thickness.
    pub w: f32,
}

impl Box {
    /// Creates a box shape.
    #[inline(always)]
    pub fn new(pos: Vec3, rotation: Quat, r: Vec3, w: f32) -> Self {
        Self { pos, rotation, r, w }
    }

    /// Creates an axis aligned box without inflation.
    #[inline(always)]
    pub fn axis_aligned(pos: Vec3, r: Vec3) -> Self {
        Self::new(pos, Quat::IDENTITY, r, 0.0)
    }

    /// Gets the full width of the box along its local X axis.
    pub fn width(&self) -> f32 {
        self.r.x * 2.0
    }

    /// Gets the full height of the box along its local Y axis.
    pub fn height(&self) -> f32 {
        self.r.y * 2.0
    }

    /// Gets the full length of the box along its local Z axis.
    pub fn length(&self) -> f32 {
        self.r.z * 2.0
    }
}

impl IShape for Box {
    #[inline(always)]
    fn kind() -> ShapeKind {
        ShapeKind::Box
    }

    #[inline(always)]
    fn as_shape(&self) -> Shape<'_> {
        Shape::Box(*self)
    }

    #[inline(always)]
    fn translate(&self, offset: Vec3, rotation: Quat) -> Self {
        Self::new(rotation * self.pos + offset, rotation * self.rotation, self.r, self.w)
    }
}

impl IConvexShape for Box {
    #[inline(always)]
    fn center(&self) -> Vec3 {
        self.pos
    }

    #[inline(always)]
    fn support(&self, direction: Vec3) -> Vec3 {
        let local_direction = self.rotation.inverse() * direction;
        let corner = Vec3::new(
            binary_sign(local_direction.x) * self.r.x,
            binary_sign(local_direction.y) * self.r.y,
            binary_sign(local_direction.z) * self.r.z,
        );
        self.rotation * corner + scaled_direction(direction, self.w)
    }

    #[inline(always)]
    fn boundary_sq_radius(&self) -> f32 {
        let r = self.r.length() + self.w;
        r * r
    }
}
