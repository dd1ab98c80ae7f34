use glam::{Quat, Vec3};

use crate::utilities::math_helper::{binary_sign, reject, scaled_direction};

use super::shape::{IConvexShape, IShape, ShapeKind};
use super::shapes::Shape;

/// Cylindrical side of a capsule, without the end caps.
///
/// The convex hull of the open tube is a flat-capped cylinder, so that is what the support function
/// samples. Box and quad edges use this primitive with their corners tested separately.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Center of the edge segment.
    pub pos: Vec3,
    /// Unit direction of the edge segment.
    pub dir: Vec3,
    /// Radius of the tube around the segment.
    pub r_s: f32,
    /// Half of the segment's length.
    pub r_h: f32,
}

impl Edge {
    /// Creates an edge shape.
    #[inline(always)]
    pub fn new(pos: Vec3, dir: Vec3, r_s: f32, r_h: f32) -> Self {
        Self { pos, dir, r_s, r_h }
    }

    /// Gets the endpoints of the edge segment.
    #[inline(always)]
    pub fn endpoints(&self) -> (Vec3, Vec3) {
        let half = self.dir * self.r_h;
        (self.pos - half, self.pos + half)
    }
}

impl IShape for Edge {
    #[inline(always)]
    fn kind() -> ShapeKind {
        ShapeKind::Edge
    }

    #[inline(always)]
    fn as_shape(&self) -> Shape<'_> {
        Shape::Edge(*self)
    }

    #[inline(always)]
    fn translate(&self, offset: Vec3, rotation: Quat) -> Self {
        Self::new(rotation * self.pos + offset, rotation * self.dir, self.r_s, self.r_h)
    }
}

impl IConvexShape for Edge {
    #[inline(always)]
    fn center(&self) -> Vec3 {
        self.pos
    }

    #[inline(always)]
    fn support(&self, direction: Vec3) -> Vec3 {
        self.dir * (binary_sign(direction.dot(self.dir)) * self.r_h)
            + scaled_direction(reject(direction, self.dir), self.r_s)
    }

    #[inline(always)]
    fn boundary_sq_radius(&self) -> f32 {
        let r = self.r_s + self.r_h;
        r * r
    }
}
