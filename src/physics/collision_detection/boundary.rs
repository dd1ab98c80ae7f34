use crate::physics::collidables::half_space::HalfSpace;
use crate::physics::collidables::line::Line;
use crate::physics::collidables::shape::IConvexShape;
use crate::utilities::bounding_sphere::intersects_squared;

/// Conservative bounding sphere test between two bounded shapes.
///
/// Never rejects a pair that actually overlaps; may accept pairs that do not.
#[inline(always)]
pub fn check_bounds<A: IConvexShape + ?Sized, B: IConvexShape + ?Sized>(a: &A, b: &B) -> bool {
    let distance_squared = a.center().distance_squared(b.center());
    intersects_squared(a.boundary_sq_radius(), b.boundary_sq_radius(), distance_squared)
}

/// Whether an infinite line passes within the bounding sphere of `shape`.
#[inline(always)]
pub fn check_line_bounds<B: IConvexShape + ?Sized>(line: &Line, shape: &B) -> bool {
    line.scaled_distance_squared(shape.center()) <= shape.boundary_sq_radius() * line.dir.length_squared()
}

/// Whether the bounding sphere of `shape` reaches into a half-space.
#[inline(always)]
pub fn check_half_space_bounds<A: IConvexShape + ?Sized>(shape: &A, half_space: &HalfSpace) -> bool {
    let distance = half_space.signed_distance(shape.center());
    distance <= 0.0 || distance * distance <= shape.boundary_sq_radius()
}
