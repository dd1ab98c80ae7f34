use glam::Vec3;

/// Provides XNA-like bounding sphere functionality.
///
/// The radius is stored squared so that overlap tests never need a square root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingSphere {
    /// Location of the center of the sphere.
    pub center: Vec3,
    /// Squared radius of the sphere.
    pub radius_squared: f32,
}

impl BoundingSphere {
    /// Creates a bounding sphere from a center and a squared radius.
    #[inline(always)]
    pub fn new(center: Vec3, radius_squared: f32) -> Self {
        Self {
            center,
            radius_squared,
        }
    }

    /// Conservatively tests whether two bounding spheres touch.
    #[inline(always)]
    pub fn intersects(a: &Self, b: &Self) -> bool {
        intersects_squared(
            a.radius_squared,
            b.radius_squared,
            (a.center - b.center).length_squared(),
        )
    }
}

/// Tests `d <= r0 + r1` using only the squared quantities `r0²`, `r1²` and `d²`.
///
/// With `k = d² - r0² - r1²`, a non-positive `k` always passes; otherwise the test is `k² <= 4r0²r1²`,
/// which is the square of `k <= 2r0r1` with both sides non-negative.
#[inline(always)]
pub fn intersects_squared(radius_squared_a: f32, radius_squared_b: f32, distance_squared: f32) -> bool {
    let k = distance_squared - radius_squared_a - radius_squared_b;
    if k <= 0.0 {
        return true;
    }
    k * k <= 4.0 * radius_squared_a * radius_squared_b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_test_matches_distance_test() {
        let radii = [0.0f32, 0.25, 1.0, 2.5];
        let distances = [0.0f32, 0.5, 1.0, 1.24, 1.26, 3.0, 3.5, 10.0];
        for &r0 in &radii {
            for &r1 in &radii {
                for &d in &distances {
                    let expected = d <= r0 + r1;
                    // Keep clear of the exact boundary where rounding can go either way.
                    if (d - (r0 + r1)).abs() < 1e-4 {
                        continue;
                    }
                    assert_eq!(
                        intersects_squared(r0 * r0, r1 * r1, d * d),
                        expected,
                        "r0 = {r0}, r1 = {r1}, d = {d}"
                    );
                }
            }
        }
    }

    #[test]
    fn touching_spheres_intersect() {
        let a = BoundingSphere::new(Vec3::ZERO, 1.0);
        let b = BoundingSphere::new(Vec3::new(0.0, 3.0, 0.0), 4.0);
        assert!(BoundingSphere::intersects(&a, &b));
        let c = BoundingSphere::new(Vec3::new(0.0, 3.5, 0.0), 4.0);
        assert!(!BoundingSphere::intersects(&a, &c));
    }
}
