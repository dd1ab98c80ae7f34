use glam::Vec3;

use crate::physics::collidables::shape::IConvexShape;

/// A vertex of the Minkowski difference `A - B`, with the point on B that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SupportPoint {
    /// Point of the Minkowski difference.
    pub v: Vec3,
    /// Witness on the surface of B.
    pub on_b: Vec3,
}

/// Samples the Minkowski difference of two convex shapes in world space.
pub trait ISupportFinder {
    /// Extreme point of the difference along `direction`.
    fn support(&self, direction: Vec3) -> SupportPoint;

    /// A point strictly inside the difference.
    fn inner_point(&self) -> Vec3;
}

/// Support finder over `A - B` for any two bounded shapes.
pub struct MinkowskiDifference<'s, A: IConvexShape + ?Sized, B: IConvexShape + ?Sized> {
    pub a: &'s A,
    pub b: &'s B,
}

impl<'s, A: IConvexShape + ?Sized, B: IConvexShape + ?Sized> MinkowskiDifference<'s, A, B> {
    #[inline(always)]
    pub fn new(a: &'s A, b: &'s B) -> Self {
        Self { a, b }
    }
}

impl<'s, A: IConvexShape + ?Sized, B: IConvexShape + ?Sized> ISupportFinder for MinkowskiDifference<'s, A, B> {
    #[inline(always)]
    fn support(&self, direction: Vec3) -> SupportPoint {
        let on_b = self.b.world_support(-direction);
        SupportPoint { v: self.a.world_support(direction) - on_b, on_b }
    }

    #[inline(always)]
    fn inner_point(&self) -> Vec3 {
        self.a.inner_point() - self.b.inner_point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::collidables::sphere::Sphere;
    use approx::assert_abs_diff_eq;

    #[test]
    fn difference_of_spheres_is_a_sphere() {
        let a = Sphere::new(Vec3::new(1.0, 0.0, 0.0), 1.0);
        let b = Sphere::new(Vec3::new(-1.0, 0.0, 0.0), 0.5);
        let difference = MinkowskiDifference::new(&a, &b);
        let support = difference.support(Vec3::Y);
        assert_abs_diff_eq!(support.v, Vec3::new(2.0, 1.5, 0.0));
        assert_abs_diff_eq!(support.on_b, Vec3::new(-1.0, -0.5, 0.0));
        assert_abs_diff_eq!(difference.inner_point(), Vec3::new(2.0, 0.0, 0.0));
    }
}
