use glam::{Quat, Vec2, Vec3};

use crate::physics::collidables::box_shape::Box;
use crate::physics::collidables::edge::Edge;
use crate::physics::collidables::face_quad::FaceQuad;
use crate::physics::collidables::quad::Quad;
use crate::physics::collidables::shape::{IConvexShape, IShape};
use crate::physics::collidables::shapes::Shape;
use crate::physics::collidables::sphere::Sphere;
use crate::physics::collision_detection::boundary::check_bounds;
use crate::physics::collision_detection::contact_manifold::ContactResult;
use crate::physics::collision_detection::portal_refiner::PortalRefiner;
use crate::physics::collision_settings::CollisionSettings;
use crate::utilities::math_helper::{
    binary_sign, closest_parameter_on_segment, closest_parameters_between_segments, try_normalize,
    DEGENERATE_EPSILON, DISTANCE_EPSILON,
};

use super::swept_sphere::SweptSphere;

/// Which faces of a flat shape can produce contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceSet {
    /// Only the local +Z face.
    Front,
    /// The local +Z and -Z faces of a zero thickness rectangle.
    TwoSided,
    /// All six faces of a cuboid.
    Cuboid,
}

/// A rectangle or cuboid described by its faces, edges and corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatFeatures {
    /// Center of the shape.
    pub center: Vec3,
    /// Orientation of the shape's local axes.
    pub rotation: Quat,
    /// Half extents along the local axes. Rectangles have a zero Z extent.
    pub half_extents: Vec3,
    /// Inflation thickness.
    pub w: f32,
    /// Faces that can produce contacts.
    pub faces: FaceSet,
}

impl From<FaceQuad> for FlatFeatures {
    fn from(quad: FaceQuad) -> Self {
        Self::rectangle(quad.pos, quad.rotation, quad.r, quad.w, FaceSet::Front)
    }
}

impl From<Quad> for FlatFeatures {
    fn from(quad: Quad) -> Self {
        Self::rectangle(quad.pos, quad.rotation, quad.r, quad.w, FaceSet::TwoSided)
    }
}

impl From<Box> for FlatFeatures {
    fn from(shape: Box) -> Self {
        Self {
            center: shape.pos,
            rotation: shape.rotation,
            half_extents: shape.r,
            w: shape.w,
            faces: FaceSet::Cuboid,
        }
    }
}

impl FlatFeatures {
    /// Views a face quad, quad or box as flat features.
    pub fn from_shape(shape: &Shape) -> Option<Self> {
        match shape {
            Shape::FaceQuad(quad) => Some((*quad).into()),
            Shape::Quad(quad) => Some((*quad).into()),
            Shape::Box(shape) => Some((*shape).into()),
            _ => None,
        }
    }

    fn rectangle(center: Vec3, rotation: Quat, r: Vec2, w: f32, faces: FaceSet) -> Self {
        Self { center, rotation, half_extents: r.extend(0.0), w, faces }
    }

    #[inline(always)]
    fn to_local(&self, point: Vec3) -> Vec3 {
        self.rotation.inverse() * (point - self.center)
    }

    #[inline(always)]
    fn to_world(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.center
    }

    /// Height of the far side of the inflated shape, measured from the plane of `face`.
    /// Rectangles are thin plates spanning `[-w, w]`.
    #[inline(always)]
    fn bottom(&self, face: Face) -> f32 {
        -(2.0 * self.half_extents[face.axis] + self.w)
    }

    fn as_box(&self) -> Box {
        Box::new(self.center, self.rotation, self.half_extents, self.w)
    }
}

/// A face in the local frame: the face normal is `sign * e_axis`, and the face spans the two
/// remaining axes.
#[derive(Debug, Clone, Copy)]
struct Face {
    axis: usize,
    sign: f32,
}

impl Face {
    #[inline(always)]
    fn lateral_axes(&self) -> (usize, usize) {
        ((self.axis + 1) % 3, (self.axis + 2) % 3)
    }

    #[inline(always)]
    fn normal(&self) -> Vec3 {
        axis_vector(self.axis) * self.sign
    }

    /// Signed height of a local point above the (uninflated) face plane.
    #[inline(always)]
    fn height(&self, point: Vec3, half_extents: Vec3) -> f32 {
        self.sign * point[self.axis] - half_extents[self.axis]
    }

    /// Whether a local point lies over the face rectangle.
    #[inline(always)]
    fn covers(&self, point: Vec3, half_extents: Vec3) -> bool {
        let (j, k) = self.lateral_axes();
        point[j].abs() <= half_extents[j] && point[k].abs() <= half_extents[k]
    }

    #[inline(always)]
    fn corner(&self, half_extents: Vec3, sign_j: f32, sign_k: f32) -> Vec3 {
        let (j, k) = self.lateral_axes();
        let mut vertex = self.normal() * half_extents[self.axis];
        vertex[j] = sign_j * half_extents[j];
        vertex[k] = sign_k * half_extents[k];
        vertex
    }
}

/// One of the four edges bounding a face, in the local frame.
struct FaceEdge {
    edge: Edge,
    /// Lateral axis the edge sits across from the face center.
    across: usize,
    side: f32,
}

impl FaceEdge {
    /// Direction used when a query sits exactly on the edge.
    #[inline(always)]
    fn outward(&self, face: Face) -> Vec3 {
        face.normal() + axis_vector(self.across) * self.side
    }

    /// Whether `point` lies past this edge, outside the face.
    #[inline(always)]
    fn is_behind(&self, point: Vec3, half_extents: Vec3) -> bool {
        point[self.across] * self.side > half_extents[self.across]
    }
}

#[inline(always)]
fn axis_vector(axis: usize) -> Vec3 {
    let mut v = Vec3::ZERO;
    v[axis] = 1.0;
    v
}

/// A shape moved by a fixed offset.
struct Displaced<'s, A: IConvexShape + ?Sized> {
    shape: &'s A,
    offset: Vec3,
}

impl<A: IConvexShape + ?Sized> IConvexShape for Displaced<'_, A> {
    #[inline(always)]
    fn center(&self) -> Vec3 {
        self.shape.center() + self.offset
    }

    #[inline(always)]
    fn inner_point(&self) -> Vec3 {
        self.shape.inner_point() + self.offset
    }

    #[inline(always)]
    fn support(&self, direction: Vec3) -> Vec3 {
        self.shape.support(direction)
    }

    #[inline(always)]
    fn boundary_sq_radius(&self) -> f32 {
        self.shape.boundary_sq_radius()
    }
}

/// Face, edge and corner decomposition of a flat shape.
///
/// The query is resolved against the closest face first. If the face pushes it out, the edges
/// and corners of that face get a second look from the pushed out position, since the part of
/// the query hanging past the face can still dig into them.
///
/// Rectangles are thin plates inflated by `w`. A face quad only ever pushes through its front
/// face; a quad pushes through the side facing the query.
pub struct FlatFeatureTester;

impl FlatFeatureTester {
    /// Tests `query` (shape A) against `flat` (shape B).
    pub fn test(query: &SweptSphere, flat: &FlatFeatures, settings: &CollisionSettings) -> ContactResult {
        let local = SweptSphere::new(flat.to_local(query.start), flat.to_local(query.end), query.r);
        let face = Self::select_face(local.center(), flat);

        let local_contact = match Self::test_face(&local, flat, face) {
            Some(face_contact) => {
                let displaced = local.offset(face_contact.normal * (face_contact.depth + settings.separation_epsilon));
                match Self::test_edges_then_vertices(&displaced, flat, face) {
                    Some(feature_contact) => Self::combine(&face_contact, &feature_contact),
                    None => face_contact,
                }
            }
            None => match Self::test_edges_then_vertices(&local, flat, face) {
                Some(feature_contact) => feature_contact,
                None => return ContactResult::miss(),
            },
        };
        local_contact.translated(flat.center, flat.rotation)
    }

    /// Tests any bounded shape `a` (shape A) against `flat` (shape B).
    ///
    /// The face is used when both extreme points of `a` along the face normal lie over it. Edges
    /// are [`Edge`] primitives and corners spheres of radius `w`, each resolved by the portal solver.
    pub fn test_convex<A: IConvexShape + ?Sized>(
        a: &A,
        flat: &FlatFeatures,
        settings: &CollisionSettings,
    ) -> ContactResult {
        let face = Self::select_face(flat.to_local(a.inner_point()), flat);
        match Self::test_convex_face(a, flat, face) {
            Some(face_contact) => {
                let displaced = Displaced {
                    shape: a,
                    offset: face_contact.normal * (face_contact.depth + settings.separation_epsilon),
                };
                match Self::test_convex_edges_then_vertices(&displaced, flat, face, settings) {
                    Some(feature_contact) => Self::combine(&face_contact, &feature_contact),
                    None => face_contact,
                }
            }
            None => match Self::test_convex_edges_then_vertices(a, flat, face, settings) {
                Some(feature_contact) => feature_contact,
                // A query overlapping a box only through one of its other faces.
                None if flat.faces == FaceSet::Cuboid => PortalRefiner::solve(a, &flat.as_box(), settings),
                None => ContactResult::miss(),
            },
        }
    }

    fn select_face(center: Vec3, flat: &FlatFeatures) -> Face {
        match flat.faces {
            FaceSet::Front => Face { axis: 2, sign: 1.0 },
            FaceSet::TwoSided => Face { axis: 2, sign: binary_sign(center.z) },
            FaceSet::Cuboid => {
                let separation = center.abs() - flat.half_extents;
                let axis = if separation.x >= separation.y && separation.x >= separation.z {
                    0
                } else if separation.y >= separation.z {
                    1
                } else {
                    2
                };
                Face { axis, sign: binary_sign(center[axis]) }
            }
        }
    }

    /// Clips the query segment to the lateral extents of the face, returning the parameter range.
    fn clip_to_face(local: &SweptSphere, half_extents: Vec3, face: Face) -> Option<(f32, f32)> {
        let (j, k) = face.lateral_axes();
        let delta = local.end - local.start;
        let mut t_min = 0.0f32;
        let mut t_max = 1.0f32;
        for axis in [j, k] {
            let start = local.start[axis];
            let extent = half_extents[axis];
            if delta[axis].abs() <= DEGENERATE_EPSILON {
                if start.abs() > extent {
                    return None;
                }
                continue;
            }
            let inverse = 1.0 / delta[axis];
            let mut t0 = (-extent - start) * inverse;
            let mut t1 = (extent - start) * inverse;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }
        Some((t_min, t_max))
    }

    fn test_face(local: &SweptSphere, flat: &FlatFeatures, face: Face) -> Option<ContactResult> {
        let (t_min, t_max) = Self::clip_to_face(local, flat.half_extents, face)?;
        let (low, high) = (local.point_at(t_min), local.point_at(t_max));
        let (low_height, high_height) = (face.height(low, flat.half_extents), face.height(high, flat.half_extents));
        let (deepest, deepest_height, highest_height) = if low_height <= high_height {
            (low, low_height, high_height)
        } else {
            (high, high_height, low_height)
        };
        let depth = flat.w + local.r - deepest_height;
        if depth < 0.0 || highest_height + local.r < flat.bottom(face) {
            return None;
        }
        let mut pos = deepest;
        pos[face.axis] = face.sign * (flat.half_extents[face.axis] + flat.w);
        Some(ContactResult::new(pos, face.normal(), depth))
    }

    fn test_edges_then_vertices(local: &SweptSphere, flat: &FlatFeatures, face: Face) -> Option<ContactResult> {
        Self::test_edges(local, flat, face).or_else(|| Self::test_vertices(local, flat, face))
    }

    /// The four edges of the face, as tubes of radius `w` without end caps.
    fn face_edges(flat: &FlatFeatures, face: Face) -> [FaceEdge; 4] {
        let (j, k) = face.lateral_axes();
        let h = flat.half_extents;
        let face_edge = |across: usize, along: usize, side: f32| {
            let mut middle = face.normal() * h[face.axis];
            middle[across] = side * h[across];
            FaceEdge {
                edge: Edge::new(middle, axis_vector(along), flat.w, h[along]),
                across,
                side,
            }
        };
        [
            face_edge(j, k, -1.0),
            face_edge(j, k, 1.0),
            face_edge(k, j, -1.0),
            face_edge(k, j, 1.0),
        ]
    }

    fn face_corners(flat: &FlatFeatures, face: Face) -> [Vec3; 4] {
        let h = flat.half_extents;
        [
            face.corner(h, -1.0, -1.0),
            face.corner(h, -1.0, 1.0),
            face.corner(h, 1.0, -1.0),
            face.corner(h, 1.0, 1.0),
        ]
    }

    /// Tests the edges of the face. Points and spheres only look at the edges they lie past.
    fn test_edges(local: &SweptSphere, flat: &FlatFeatures, face: Face) -> Option<ContactResult> {
        let center = local.center();
        let mut best: Option<ContactResult> = None;
        for face_edge in Self::face_edges(flat, face) {
            if !local.is_segment() && !face_edge.is_behind(center, flat.half_extents) {
                continue;
            }
            let contact = Self::test_edge(local, &face_edge.edge, || face_edge.outward(face));
            best = deepest(best, contact);
        }
        best
    }

    fn test_edge(local: &SweptSphere, edge: &Edge, outward: impl Fn() -> Vec3) -> Option<ContactResult> {
        let (edge_start, edge_end) = edge.endpoints();
        let (s, t) = closest_parameters_between_segments(local.start, local.end, edge_start, edge_end);
        if t <= 0.0 || t >= 1.0 {
            return None;
        }
        let on_query = local.point_at(s);
        let on_edge = edge_start + (edge_end - edge_start) * t;
        Self::rounded_contact(on_query, on_edge, local.r, edge.r_s, outward)
    }

    /// Tests the four rounded corners of the face.
    fn test_vertices(local: &SweptSphere, flat: &FlatFeatures, face: Face) -> Option<ContactResult> {
        let (j, k) = face.lateral_axes();
        let center = local.center();
        let fallback = |corner: Vec3| move || try_normalize(corner).unwrap_or(face.normal());

        if !local.is_segment() {
            let nearest = face.corner(flat.half_extents, binary_sign(center[j]), binary_sign(center[k]));
            return Self::rounded_contact(center, nearest, local.r, flat.w, fallback(nearest));
        }
        let mut best: Option<ContactResult> = None;
        for vertex in Self::face_corners(flat, face) {
            let t = closest_parameter_on_segment(vertex, local.start, local.end);
            let contact = Self::rounded_contact(local.point_at(t), vertex, local.r, flat.w, fallback(vertex));
            best = deepest(best, contact);
        }
        best
    }

    /// Contact between a query point inflated by `r` and a feature point inflated by `w`.
    fn rounded_contact(
        on_query: Vec3,
        on_feature: Vec3,
        r: f32,
        w: f32,
        fallback_normal: impl Fn() -> Vec3,
    ) -> Option<ContactResult> {
        let offset = on_query - on_feature;
        let distance = offset.length();
        let depth = r + w - distance;
        if depth < 0.0 {
            return None;
        }
        let normal = if distance > DISTANCE_EPSILON {
            offset / distance
        } else {
            try_normalize(fallback_normal()).unwrap_or(Vec3::Z)
        };
        Some(ContactResult::new(on_feature + normal * w, normal, depth))
    }

    /// Face contact for a general shape, in world space.
    fn test_convex_face<A: IConvexShape + ?Sized>(a: &A, flat: &FlatFeatures, face: Face) -> Option<ContactResult> {
        let normal = flat.rotation * face.normal();
        let deepest = flat.to_local(a.world_support(-normal));
        let highest = flat.to_local(a.world_support(normal));
        // The segment between the two extremes lies inside `a`, so when both are over the face
        // the height test below is exact.
        if !face.covers(deepest, flat.half_extents) || !face.covers(highest, flat.half_extents) {
            return None;
        }
        let depth = flat.w - face.height(deepest, flat.half_extents);
        if depth < 0.0 || face.height(highest, flat.half_extents) < flat.bottom(face) {
            return None;
        }
        let mut pos = deepest;
        pos[face.axis] = face.sign * (flat.half_extents[face.axis] + flat.w);
        Some(ContactResult::new(flat.to_world(pos), normal, depth))
    }

    fn test_convex_edges_then_vertices<A: IConvexShape + ?Sized>(
        a: &A,
        flat: &FlatFeatures,
        face: Face,
        settings: &CollisionSettings,
    ) -> Option<ContactResult> {
        let mut best: Option<ContactResult> = None;
        for face_edge in Self::face_edges(flat, face) {
            let edge = face_edge.edge.translate(flat.center, flat.rotation);
            best = deepest(best, Self::solve_feature(a, &edge, settings));
        }
        if best.is_some() {
            return best;
        }
        for corner in Self::face_corners(flat, face) {
            let vertex = Sphere::new(flat.to_world(corner), flat.w);
            best = deepest(best, Self::solve_feature(a, &vertex, settings));
        }
        best
    }

    fn solve_feature<A: IConvexShape + ?Sized, B: IConvexShape>(
        a: &A,
        feature: &B,
        settings: &CollisionSettings,
    ) -> Option<ContactResult> {
        if !check_bounds(a, feature) {
            return None;
        }
        let contact = PortalRefiner::solve(a, feature, settings);
        contact.hit.then_some(contact)
    }

    /// Merges a face push with the edge or corner push found after it.
    fn combine(face_contact: &ContactResult, feature_contact: &ContactResult) -> ContactResult {
        let combined = face_contact.normal * face_contact.depth + feature_contact.normal * feature_contact.depth;
        match try_normalize(combined) {
            Some(normal) => ContactResult::new(feature_contact.pos, normal, combined.length()),
            None => *face_contact,
        }
    }
}

#[inline(always)]
fn deepest(best: Option<ContactResult>, candidate: Option<ContactResult>) -> Option<ContactResult> {
    match (best, candidate) {
        (Some(best), Some(candidate)) if candidate.depth > best.depth => Some(candidate),
        (None, candidate) => candidate,
        (best, _) => best,
    }
}
