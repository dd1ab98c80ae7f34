use glam::{Quat, Vec3};

use crate::utilities::math_helper::scaled_direction;

use super::shape::{IConvexShape, IShape, ShapeKind};
use super::shapes::Shape;

/// Collision shape representing an individual triangle, inflated by `w`.
/// Vertices are stored relative to `pos` in the triangle's local frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex of the triangle in local space.
    pub vert0: Vec3,
    /// Second vertex of the triangle in local space.
    pub vert1: Vec3,
    /// Third vertex of the triangle in local space.
    pub vert2: Vec3,
    /// Origin of the triangle's local frame.
    pub pos: Vec3,
    /// Orientation of the triangle's local frame.
    pub rotation: Quat,
    /// Inflation thickness.
    pub w: f32,
}

impl Triangle {
    /// Creates a triangle shape.
    #[inline(always)]
    pub fn new(vert0: Vec3, vert1: Vec3, vert2: Vec3, pos: Vec3, rotation: Quat, w: f32) -> Self {
        Self { vert0, vert1, vert2, pos, rotation, w }
    }

    /// Creates a triangle from world space vertices, using the centroid as the frame origin.
    pub fn from_world(a: Vec3, b: Vec3, c: Vec3, w: f32) -> Self {
        let centroid = (a + b + c) / 3.0;
        Self::new(a - centroid, b - centroid, c - centroid, centroid, Quat::IDENTITY, w)
    }

    /// Gets the world space vertices.
    #[inline]
    pub fn world_vertices(&self) -> [Vec3; 3] {
        [
            self.pos + self.rotation * self.vert0,
            self.pos + self.rotation * self.vert1,
            self.pos + self.rotation * self.vert2,
        ]
    }
}

impl IShape for Triangle {
    #[inline(always)]
    fn kind() -> ShapeKind {
        ShapeKind::Triangle
    }

    #[inline(always)]
    fn as_shape(&self) -> Shape<'_> {
        Shape::Triangle(*self)
    }

    #[inline(always)]
    fn translate(&self, offset: Vec3, rotation: Quat) -> Self {
        Self {
            pos: rotation * self.pos + offset,
            rotation: rotation * self.rotation,
            ..*self
        }
    }
}

impl IConvexShape for Triangle {
    #[inline(always)]
    fn center(&self) -> Vec3 {
        self.pos
    }

    #[inline(always)]
    fn inner_point(&self) -> Vec3 {
        self.pos + self.rotation * ((self.vert0 + self.vert1 + self.vert2) / 3.0)
    }

    #[inline]
    fn support(&self, direction: Vec3) -> Vec3 {
        let local_direction = self.rotation.inverse() * direction;
        let d0 = self.vert0.dot(local_direction);
        let d1 = self.vert1.dot(local_direction);
        let d2 = self.vert2.dot(local_direction);
        let extreme = if d0 >= d1 && d0 >= d2 {
            self.vert0
        } else if d1 >= d2 {
            self.vert1
        } else {
            self.vert2
        };
        self.rotation * extreme + scaled_direction(direction, self.w)
    }

    #[inline(always)]
    fn boundary_sq_radius(&self) -> f32 {
        let max_length = self
            .vert0
            .length_squared()
            .max(self.vert1.length_squared())
            .max(self.vert2.length_squared())
            .sqrt();
        let r = max_length + self.w;
        r * r
    }
}
