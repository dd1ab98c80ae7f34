use glam::Vec3;

use crate::physics::collidables::shape::IConvexShape;
use crate::physics::collision_settings::CollisionSettings;
use crate::utilities::math_helper::{try_normalize, DEGENERATE_EPSILON};
use crate::utilities::matrix3x3::Matrix3x3;

use super::contact_manifold::ContactResult;
use super::support_finder::{ISupportFinder, MinkowskiDifference, SupportPoint};

/// Triangle of the Minkowski difference that the ray from the interior point toward the origin
/// passes through.
#[derive(Debug, Clone, Copy)]
struct Portal {
    v1: SupportPoint,
    v2: SupportPoint,
    v3: SupportPoint,
}

impl Portal {
    /// Unit normal of the portal facing away from the interior point.
    #[inline(always)]
    fn normal(&self) -> Option<Vec3> {
        try_normalize((self.v2.v - self.v1.v).cross(self.v3.v - self.v1.v))
    }

    /// Whether the support `v4` along `normal` moved less than `tolerance` past every portal vertex.
    #[inline(always)]
    fn reached_tolerance(&self, v4: Vec3, normal: Vec3, tolerance: f32) -> bool {
        let gap = (v4 - self.v1.v)
            .dot(normal)
            .min((v4 - self.v2.v).dot(normal))
            .min((v4 - self.v3.v).dot(normal));
        gap < tolerance
    }

    /// Replaces the vertex so that the ray toward the origin still passes through the portal.
    #[inline(always)]
    fn expand(&mut self, v4: SupportPoint, v0: Vec3) {
        let separator = v4.v.cross(v0);
        if self.v1.v.dot(separator) > 0.0 {
            if self.v2.v.dot(separator) > 0.0 {
                self.v1 = v4;
            } else {
                self.v3 = v4;
            }
        } else if self.v3.v.dot(separator) > 0.0 {
            self.v2 = v4;
        } else {
            self.v1 = v4;
        }
    }
}

/// Outcome of the portal discovery phase.
enum Discovery {
    Separated,
    /// The origin lies on the segment from the interior point to the first support.
    Segment(SupportPoint),
    Portal(Portal),
}

/// Minkowski portal refinement between two bounded convex shapes.
///
/// Finds a portal triangle of `A - B` crossed by the ray from an interior point to the origin,
/// then pushes the portal outward until it lies on the surface. The portal's distance to the
/// origin is the penetration depth along the portal normal.
pub struct PortalRefiner;

impl PortalRefiner {
    /// Computes the contact between `a` and `b`, or a miss if they are separated.
    pub fn solve<A: IConvexShape + ?Sized, B: IConvexShape + ?Sized>(
        a: &A,
        b: &B,
        settings: &CollisionSettings,
    ) -> ContactResult {
        let finder = MinkowskiDifference::new(a, b);
        let mut v0 = finder.inner_point();
        if v0.length_squared() <= DEGENERATE_EPSILON {
            v0 = Vec3::new(settings.center_perturbation, 0.0, 0.0);
        }

        match Self::discover(&finder, v0, settings) {
            Discovery::Separated => ContactResult::miss(),
            Discovery::Segment(v1) => Self::segment_contact(v1, v0),
            Discovery::Portal(portal) => match Self::refine(&finder, portal, v0, settings) {
                Some(portal) => Self::finish(&portal, b),
                None => ContactResult::miss(),
            },
        }
    }

    fn discover<S: ISupportFinder>(finder: &S, v0: Vec3, settings: &CollisionSettings) -> Discovery {
        let mut direction = -v0;
        let mut v1 = finder.support(direction);
        if v1.v.dot(direction) <= 0.0 {
            return Discovery::Separated;
        }

        direction = v0.cross(v1.v);
        if direction.length_squared() <= DEGENERATE_EPSILON {
            return Discovery::Segment(v1);
        }

        let mut v2 = finder.support(direction);
        if v2.v.dot(direction) <= 0.0 {
            return Discovery::Separated;
        }

        direction = (v1.v - v0).cross(v2.v - v0);
        if direction.dot(v0) > 0.0 {
            std::mem::swap(&mut v1, &mut v2);
            direction = -direction;
        }

        for _ in 0..settings.max_iterations {
            let v3 = finder.support(direction);
            if v3.v.dot(direction) <= 0.0 {
                return Discovery::Separated;
            }
            if v1.v.cross(v3.v).dot(v0) < 0.0 {
                v2 = v3;
            } else if v3.v.cross(v2.v).dot(v0) < 0.0 {
                v1 = v3;
            } else {
                return Discovery::Portal(Portal { v1, v2, v3 });
            }
            direction = (v1.v - v0).cross(v2.v - v0);
        }

        log::debug!(
            "portal discovery did not converge after {} iterations; reporting no contact",
            settings.max_iterations
        );
        Discovery::Separated
    }

    /// Pushes the portal toward the surface. Returns `None` when the origin turns out to lie outside.
    fn refine<S: ISupportFinder>(
        finder: &S,
        mut portal: Portal,
        v0: Vec3,
        settings: &CollisionSettings,
    ) -> Option<Portal> {
        for _ in 0..settings.max_iterations {
            let Some(normal) = portal.normal() else {
                return Some(portal);
            };
            let v4 = finder.support(normal);
            if v4.v.dot(normal) < 0.0 {
                return None;
            }
            if portal.reached_tolerance(v4.v, normal, settings.portal_tolerance) {
                return Some(portal);
            }
            portal.expand(v4, v0);
        }
        log::trace!(
            "portal refinement hit {} iterations; keeping the current portal",
            settings.max_iterations
        );
        Some(portal)
    }

    fn segment_contact(v1: SupportPoint, v0: Vec3) -> ContactResult {
        match try_normalize(v1.v) {
            Some(direction) => ContactResult::new(v1.on_b, -direction, v1.v.length()),
            None => ContactResult::new(v1.on_b, try_normalize(v0).unwrap_or(Vec3::X), 0.0),
        }
    }

    fn finish<B: IConvexShape + ?Sized>(portal: &Portal, b: &B) -> ContactResult {
        let Some(n) = portal.normal() else {
            log::debug!("portal collapsed to a degenerate triangle; reporting no contact");
            return ContactResult::miss();
        };
        let depth = portal.v1.v.dot(n);
        if depth < 0.0 {
            return ContactResult::miss();
        }
        let normal = -n;

        let closest = n * depth;
        let weights = Self::barycentric_weights(portal, closest, n);
        let mut pos = portal.v1.on_b * weights.x + portal.v2.on_b * weights.y + portal.v3.on_b * weights.z;

        // Snap onto B's support plane along the contact normal.
        let plane_offset = b.world_support(normal).dot(normal);
        pos += normal * (plane_offset - pos.dot(normal));

        ContactResult::new(pos, normal, depth)
    }

    /// Weights of `p` with respect to the portal vertices.
    fn barycentric_weights(portal: &Portal, p: Vec3, n: Vec3) -> Vec3 {
        let vertices = Matrix3x3::from_columns(portal.v1.v, portal.v2.v, portal.v3.v);
        if let Some(inverse) = vertices.invert(DEGENERATE_EPSILON) {
            return inverse.transform(p);
        }
        // A portal through the origin makes the vertex matrix singular; use signed sub-areas.
        let (a, b, c) = (portal.v1.v - p, portal.v2.v - p, portal.v3.v - p);
        let weights = Vec3::new(b.cross(c).dot(n), c.cross(a).dot(n), a.cross(b).dot(n));
        let total = weights.x + weights.y + weights.z;
        if total.abs() <= DEGENERATE_EPSILON {
            return Vec3::splat(1.0 / 3.0);
        }
        weights / total
    }
}
