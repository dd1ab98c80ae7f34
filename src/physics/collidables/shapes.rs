use glam::{Quat, Vec3};

use super::box_shape::Box;
use super::capsule::Capsule;
use super::circle::Circle;
use super::cone::Cone;
use super::convex_hull::ConvexHull;
use super::cylinder::Cylinder;
use super::edge::Edge;
use super::face_quad::FaceQuad;
use super::half_space::HalfSpace;
use super::line::Line;
use super::point::Point;
use super::quad::Quad;
use super::shape::{IConvexShape, IShape, ShapeKind};
use super::sphere::Sphere;
use super::triangle::Triangle;

/// Type-erased collision shape.
///
/// Every variant is a small `Copy` value. Hulls borrow their points, which is where the lifetime
/// comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    Point(Point),
    Line(Line),
    Sphere(Sphere),
    Capsule(Capsule),
    Edge(Edge),
    Triangle(Triangle),
    Circle(Circle),
    Cylinder(Cylinder),
    Cone(Cone),
    ConvexHull(ConvexHull<'a>),
    FaceQuad(FaceQuad),
    Quad(Quad),
    Box(Box),
    HalfSpace(HalfSpace),
}

impl<'a> Shape<'a> {
    /// Gets the runtime tag of the wrapped shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Sphere(_) => ShapeKind::Sphere,
            Shape::Capsule(_) => ShapeKind::Capsule,
            Shape::Edge(_) => ShapeKind::Edge,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Cylinder(_) => ShapeKind::Cylinder,
            Shape::Cone(_) => ShapeKind::Cone,
            Shape::ConvexHull(_) => ShapeKind::ConvexHull,
            Shape::FaceQuad(_) => ShapeKind::FaceQuad,
            Shape::Quad(_) => ShapeKind::Quad,
            Shape::Box(_) => ShapeKind::Box,
            Shape::HalfSpace(_) => ShapeKind::HalfSpace,
        }
    }

    /// Gets the support-function view of the shape, or `None` for lines and half-spaces.
    pub fn bounded(&self) -> Option<&dyn IConvexShape> {
        let shape: &dyn IConvexShape = match self {
            Shape::Point(s) => s,
            Shape::Sphere(s) => s,
            Shape::Capsule(s) => s,
            Shape::Edge(s) => s,
            Shape::Triangle(s) => s,
            Shape::Circle(s) => s,
            Shape::Cylinder(s) => s,
            Shape::Cone(s) => s,
            Shape::ConvexHull(s) => s,
            Shape::FaceQuad(s) => s,
            Shape::Quad(s) => s,
            Shape::Box(s) => s,
            Shape::Line(_) | Shape::HalfSpace(_) => return None,
        };
        Some(shape)
    }

    /// Reference position of the shape: the center of bounded shapes, the anchor point of lines
    /// and half-spaces.
    pub fn center(&self) -> Vec3 {
        match self {
            Shape::Line(line) => line.pos,
            Shape::HalfSpace(half_space) => half_space.pos,
            _ => self.bounded().map_or(Vec3::ZERO, |shape| shape.center()),
        }
    }

    /// Applies the rigid transform `x -> rotation * x + offset` to the wrapped shape.
    pub fn translate(&self, offset: Vec3, rotation: Quat) -> Self {
        match self {
            Shape::Point(s) => Shape::Point(s.translate(offset, rotation)),
            Shape::Line(s) => Shape::Line(s.translate(offset, rotation)),
            Shape::Sphere(s) => Shape::Sphere(s.translate(offset, rotation)),
            Shape::Capsule(s) => Shape::Capsule(s.translate(offset, rotation)),
            Shape::Edge(s) => Shape::Edge(s.translate(offset, rotation)),
            Shape::Triangle(s) => Shape::Triangle(s.translate(offset, rotation)),
            Shape::Circle(s) => Shape::Circle(s.translate(offset, rotation)),
            Shape::Cylinder(s) => Shape::Cylinder(s.translate(offset, rotation)),
            Shape::Cone(s) => Shape::Cone(s.translate(offset, rotation)),
            Shape::ConvexHull(s) => Shape::ConvexHull(s.translate(offset, rotation)),
            Shape::FaceQuad(s) => Shape::FaceQuad(s.translate(offset, rotation)),
            Shape::Quad(s) => Shape::Quad(s.translate(offset, rotation)),
            Shape::Box(s) => Shape::Box(s.translate(offset, rotation)),
            Shape::HalfSpace(s) => Shape::HalfSpace(s.translate(offset, rotation)),
        }
    }
}

macro_rules! impl_from_shape {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Shape<'_> {
                #[inline(always)]
                fn from(shape: $ty) -> Self {
                    Shape::$ty(shape)
                }
            }
        )*
    };
}

impl_from_shape!(Point, Line, Sphere, Capsule, Edge, Triangle, Circle, Cylinder, Cone, FaceQuad, Quad, Box, HalfSpace);

impl<'a> From<ConvexHull<'a>> for Shape<'a> {
    #[inline(always)]
    fn from(shape: ConvexHull<'a>) -> Self {
        Shape::ConvexHull(shape)
    }
}
