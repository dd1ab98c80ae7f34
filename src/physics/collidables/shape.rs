use std::fmt;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::CollisionError;
use crate::utilities::bounding_box::BoundingBox;
use crate::utilities::bounding_sphere::BoundingSphere;

use super::shapes::Shape;

/// Runtime tag of a shape variant.
///
/// Flat and infinite shapes sort last so that the canonical ordering of a pair puts them second.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Point = 0,
    Line = 1,
    Sphere = 2,
    Capsule = 3,
    Edge = 4,
    Triangle = 5,
    Circle = 6,
    Cylinder = 7,
    Cone = 8,
    ConvexHull = 9,
    FaceQuad = 10,
    Quad = 11,
    Box = 12,
    HalfSpace = 13,
}

impl ShapeKind {
    /// Number of shape kinds.
    pub const COUNT: usize = 14;

    /// Every kind, in tag order.
    pub const ALL: [ShapeKind; Self::COUNT] = [
        ShapeKind::Point,
        ShapeKind::Line,
        ShapeKind::Sphere,
        ShapeKind::Capsule,
        ShapeKind::Edge,
        ShapeKind::Triangle,
        ShapeKind::Circle,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::ConvexHull,
        ShapeKind::FaceQuad,
        ShapeKind::Quad,
        ShapeKind::Box,
        ShapeKind::HalfSpace,
    ];

    /// Raw tag value.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether shapes of this kind have a finite extent and a support function.
    #[inline(always)]
    pub const fn is_bounded(self) -> bool {
        !matches!(self, ShapeKind::Line | ShapeKind::HalfSpace)
    }

    /// Whether shapes of this kind are resolved by the face/edge/vertex solver.
    #[inline(always)]
    pub const fn is_flat(self) -> bool {
        matches!(self, ShapeKind::FaceQuad | ShapeKind::Quad | ShapeKind::Box)
    }

    /// Whether shapes of this kind are a segment inflated by a radius (points and spheres included).
    #[inline(always)]
    pub const fn is_swept_sphere(self) -> bool {
        matches!(self, ShapeKind::Point | ShapeKind::Sphere | ShapeKind::Capsule)
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Line => "line",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Capsule => "capsule",
            ShapeKind::Edge => "edge",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Cone => "cone",
            ShapeKind::ConvexHull => "convex hull",
            ShapeKind::FaceQuad => "face quad",
            ShapeKind::Quad => "quad",
            ShapeKind::Box => "box",
            ShapeKind::HalfSpace => "half-space",
        }
    }
}

impl TryFrom<u8> for ShapeKind {
    type Error = CollisionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(CollisionError::UnknownShapeKind(value))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Defines a type usable as a shape by the collision queries.
pub trait IShape {
    /// Tag of this shape type.
    fn kind() -> ShapeKind
    where
        Self: Sized;

    /// Wraps the shape into the type-erased [`Shape`].
    fn as_shape(&self) -> Shape<'_>;

    /// Applies the rigid transform `x -> rotation * x + offset` to the shape.
    fn translate(&self, offset: Vec3, rotation: Quat) -> Self
    where
        Self: Sized;
}

/// Defines functions available on all bounded convex shapes.
/// Convex shapes have no hollowed out regions; any line passing through a convex shape
/// will never enter and exit more than once.
pub trait IConvexShape {
    /// Reference position of the shape, used by the boundary prefilter.
    fn center(&self) -> Vec3;

    /// A point inside the shape from which the portal solver starts its search.
    #[inline(always)]
    fn inner_point(&self) -> Vec3 {
        self.center()
    }

    /// Extreme point of the shape along `direction`, relative to [`center`](Self::center).
    /// `direction` does not need to be normalized.
    fn support(&self, direction: Vec3) -> Vec3;

    /// Conservative upper bound on the squared distance from the center to any surface point.
    fn boundary_sq_radius(&self) -> f32;

    /// Extreme point of the shape along `direction` in world space.
    #[inline(always)]
    fn world_support(&self, direction: Vec3) -> Vec3 {
        self.center() + self.support(direction)
    }

    /// Gets the conservative bounding sphere of the shape.
    #[inline(always)]
    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center(), self.boundary_sq_radius())
    }

    /// Computes the world space axis aligned bounds of the shape from its support function.
    fn compute_bounds(&self) -> BoundingBox {
        let min = Vec3::new(
            self.support(Vec3::NEG_X).x,
            self.support(Vec3::NEG_Y).y,
            self.support(Vec3::NEG_Z).z,
        );
        let max = Vec3::new(
            self.support(Vec3::X).x,
            self.support(Vec3::Y).y,
            self.support(Vec3::Z).z,
        );
        let center = self.center();
        BoundingBox::new(center + min, center + max)
    }
}
