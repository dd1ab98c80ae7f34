use glam::Vec3;

use crate::physics::collidables::capsule::Capsule;
use crate::physics::collidables::point::Point;
use crate::physics::collidables::shapes::Shape;
use crate::physics::collidables::sphere::Sphere;
use crate::physics::collision_detection::contact_manifold::ContactResult;
use crate::utilities::math_helper::{closest_parameters_between_segments, try_normalize, DEGENERATE_EPSILON};

/// A segment inflated by a radius. Points, spheres and capsules are all swept spheres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweptSphere {
    /// First endpoint of the internal segment.
    pub start: Vec3,
    /// Second endpoint of the internal segment.
    pub end: Vec3,
    /// Inflation radius.
    pub r: f32,
}

impl SweptSphere {
    #[inline(always)]
    pub fn new(start: Vec3, end: Vec3, r: f32) -> Self {
        Self { start, end, r }
    }

    /// Views a point, sphere or capsule as a swept sphere.
    pub fn from_shape(shape: &Shape) -> Option<Self> {
        match shape {
            Shape::Point(point) => Some((*point).into()),
            Shape::Sphere(sphere) => Some((*sphere).into()),
            Shape::Capsule(capsule) => Some((*capsule).into()),
            _ => None,
        }
    }

    /// Midpoint of the internal segment.
    #[inline(always)]
    pub fn center(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }

    /// Whether the internal segment has a length, as opposed to being a single point.
    #[inline(always)]
    pub fn is_segment(&self) -> bool {
        self.start.distance_squared(self.end) > DEGENERATE_EPSILON
    }

    /// Point on the internal segment at parameter `t` in [0, 1].
    #[inline(always)]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.start + (self.end - self.start) * t
    }

    /// Moves the swept sphere by `offset`.
    #[inline(always)]
    pub fn offset(&self, offset: Vec3) -> Self {
        Self::new(self.start + offset, self.end + offset, self.r)
    }
}

impl From<Point> for SweptSphere {
    #[inline(always)]
    fn from(point: Point) -> Self {
        Self::new(point.pos, point.pos, 0.0)
    }
}

impl From<Sphere> for SweptSphere {
    #[inline(always)]
    fn from(sphere: Sphere) -> Self {
        Self::new(sphere.pos, sphere.pos, sphere.r)
    }
}

impl From<Capsule> for SweptSphere {
    #[inline(always)]
    fn from(capsule: Capsule) -> Self {
        let (start, end) = capsule.endpoints();
        Self::new(start, end, capsule.r_s)
    }
}

/// Closed form tester for pairs of swept spheres.
pub struct SweptSpherePairTester;

impl SweptSpherePairTester {
    /// Tests two swept spheres against each other.
    pub fn test(a: &SweptSphere, b: &SweptSphere) -> ContactResult {
        let (s, t) = closest_parameters_between_segments(a.start, a.end, b.start, b.end);
        let closest_a = a.point_at(s);
        let closest_b = b.point_at(t);
        let offset = closest_a - closest_b;
        let distance = offset.length();
        let depth = a.r + b.r - distance;
        if depth < 0.0 {
            return ContactResult::miss();
        }
        let normal = try_normalize(offset).unwrap_or_else(|| Self::fallback_normal(a, b));
        ContactResult::new(closest_b + normal * b.r, normal, depth)
    }

    /// Normal for segments that intersect, where the closest points coincide.
    fn fallback_normal(a: &SweptSphere, b: &SweptSphere) -> Vec3 {
        let center_offset = a.center() - b.center();
        if let Some(normal) = try_normalize((a.end - a.start).cross(b.end - b.start)) {
            // Crossing segments: point the normal toward A's side.
            return if normal.dot(center_offset) < 0.0 { -normal } else { normal };
        }
        try_normalize(center_offset).unwrap_or(Vec3::Y)
    }
}
