use glam::{Quat, Vec3};

use crate::error::{CollisionError, CollisionResult};
use crate::utilities::math_helper::scaled_direction;

use super::shape::{IConvexShape, IShape, ShapeKind};
use super::shapes::Shape;

/// Collision shape representing the convex hull of a borrowed point cloud, inflated by `w`.
///
/// The points are stored in the hull's local frame. They are never copied, so the hull is as
/// cheap to pass around as the other shapes; the borrow keeps them immutable while queries run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvexHull<'a> {
    /// Points of the hull in local space.
    pub vertices: &'a [Vec3],
    /// Origin of the hull's local frame.
    pub pos: Vec3,
    /// Orientation of the hull's local frame.
    pub rotation: Quat,
    /// Inflation thickness.
    pub w: f32,
    /// Largest distance from the local origin to any vertex, not including `w`.
    pub boundary_radius: f32,
    local_centroid: Vec3,
}

impl<'a> ConvexHull<'a> {
    /// Creates a hull over `vertices`, computing the boundary radius from the points.
    pub fn new(vertices: &'a [Vec3], pos: Vec3, rotation: Quat, w: f32) -> CollisionResult<Self> {
        let boundary_radius = vertices
            .iter()
            .map(|v| v.length_squared())
            .fold(0.0f32, f32::max)
            .sqrt();
        Self::with_boundary_radius(vertices, pos, rotation, w, boundary_radius)
    }

    /// Creates a hull over `vertices` with a caller supplied boundary radius.
    ///
    /// The radius must bound the distance from the local origin to every vertex.
    pub fn with_boundary_radius(
        vertices: &'a [Vec3],
        pos: Vec3,
        rotation: Quat,
        w: f32,
        boundary_radius: f32,
    ) -> CollisionResult<Self> {
        if vertices.is_empty() {
            return Err(CollisionError::EmptyHull);
        }
        let local_centroid = vertices.iter().copied().sum::<Vec3>() / vertices.len() as f32;
        Ok(Self { vertices, pos, rotation, w, boundary_radius, local_centroid })
    }

    /// Number of points in the hull.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<'a> IShape for ConvexHull<'a> {
    #[inline(always)]
    fn kind() -> ShapeKind {
        ShapeKind::ConvexHull
    }

    #[inline(always)]
    fn as_shape(&self) -> Shape<'_> {
        Shape::ConvexHull(*self)
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

impl<'a> IConvexShape for ConvexHull<'a> {
    #[inline(always)]
    fn center(&self) -> Vec3 {
        self.pos
    }

    #[inline(always)]
    fn inner_point(&self) -> Vec3 {
        self.pos + self.rotation * self.local_centroid
    }

    fn support(&self, direction: Vec3) -> Vec3 {
        let local_direction = self.rotation.inverse() * direction;
        let mut best = self.vertices[0];
        let mut best_dot = best.dot(local_direction);
        for &vertex in &self.vertices[1..] {
            let dot = vertex.dot(local_direction);
            if dot > best_dot {
                best_dot = dot;
                best = vertex;
            }
        }
        self.rotation * best + scaled_direction(direction, self.w)
    }

    #[inline(always)]
    fn boundary_sq_radius(&self) -> f32 {
        let r = self.boundary_radius + self.w;
        r * r
    }
}
