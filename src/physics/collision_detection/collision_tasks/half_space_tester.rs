use crate::physics::collidables::half_space::HalfSpace;
use crate::physics::collidables::shape::IConvexShape;
use crate::physics::collision_detection::contact_manifold::ContactResult;

/// Exact tester between any bounded convex shape and a half-space.
pub struct HalfSpaceTester;

impl HalfSpaceTester {
    /// Tests `a` against the half-space `b`. The deepest point of `a` decides the contact.
    #[inline]
    pub fn test<A: IConvexShape + ?Sized>(a: &A, b: &HalfSpace) -> ContactResult {
        let deepest = a.world_support(-b.dir);
        let height = b.signed_distance(deepest);
        if height > 0.0 {
            return ContactResult::miss();
        }
        let depth = -height;
        ContactResult::new(deepest + b.dir * depth, b.dir, depth)
    }
}
