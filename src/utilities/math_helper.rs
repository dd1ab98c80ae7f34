use glam::Vec3;

/// Squared lengths below this are treated as zero when normalizing.
pub const DEGENERATE_EPSILON: f32 = 1e-12;

/// Distances below this are treated as coincident.
pub const DISTANCE_EPSILON: f32 = 1e-6;

/// Clamps a value between a minimum and maximum value.
#[inline(always)]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Returns -1 if the value is negative and 1 otherwise.
#[inline(always)]
pub fn binary_sign(x: f32) -> f32 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Normalizes the vector, returning `None` when it is too short to have a direction.
#[inline(always)]
pub fn try_normalize(v: Vec3) -> Option<Vec3> {
    let length_squared = v.length_squared();
    if length_squared > DEGENERATE_EPSILON {
        Some(v / length_squared.sqrt())
    } else {
        None
    }
}

/// Scales `direction` to length `length`, or returns zero for a degenerate direction.
#[inline(always)]
pub fn scaled_direction(direction: Vec3, length: f32) -> Vec3 {
    if length == 0.0 {
        return Vec3::ZERO;
    }
    try_normalize(direction).map_or(Vec3::ZERO, |d| d * length)
}

/// Removes the component of `v` along the unit `axis`.
#[inline(always)]
pub fn reject(v: Vec3, axis: Vec3) -> Vec3 {
    v - axis * v.dot(axis)
}

/// Computes the parameter in [0, 1] of the point on segment `a`-`b` closest to `p`.
#[inline]
pub fn closest_parameter_on_segment(p: Vec3, a: Vec3, b: Vec3) -> f32 {
    let ab = b - a;
    let length_squared = ab.length_squared();
    if length_squared <= DEGENERATE_EPSILON {
        return 0.0;
    }
    clamp((p - a).dot(ab) / length_squared, 0.0, 1.0)
}

/// Computes the closest points between segments `p0`-`p1` and `q0`-`q1`.
///
/// Returns the parameters `(s, t)` of the closest points along each segment.
pub fn closest_parameters_between_segments(p0: Vec3, p1: Vec3, q0: Vec3, q1: Vec3) -> (f32, f32) {
    let d1 = p1 - p0;
    let d2 = q1 - q0;
    let r = p0 - q0;
    let a = d1.length_squared();
    let e = d2.length_squared();
    let f = d2.dot(r);

    if a <= DEGENERATE_EPSILON && e <= DEGENERATE_EPSILON {
        return (0.0, 0.0);
    }
    if a <= DEGENERATE_EPSILON {
        return (0.0, clamp(f / e, 0.0, 1.0));
    }
    let c = d1.dot(r);
    if e <= DEGENERATE_EPSILON {
        return (clamp(-c / a, 0.0, 1.0), 0.0);
    }

    let b = d1.dot(d2);
    let denominator = a * e - b * b;
    // Parallel segments have no unique pair; any s works, so start from p0.
    let mut s = if denominator > DEGENERATE_EPSILON {
        clamp((b * f - c * e) / denominator, 0.0, 1.0)
    } else {
        0.0
    };
    let mut t = (b * s + f) / e;
    if t < 0.0 {
        t = 0.0;
        s = clamp(-c / a, 0.0, 1.0);
    } else if t > 1.0 {
        t = 1.0;
        s = clamp((b - c) / a, 0.0, 1.0);
    }
    (s, t)
}

/// Returns `true` if every component of the vector is finite.
#[inline(always)]
pub fn is_finite(v: Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn binary_sign_treats_zero_as_positive() {
        assert_eq!(binary_sign(0.0), 1.0);
        assert_eq!(binary_sign(-0.5), -1.0);
        assert_eq!(binary_sign(2.0), 1.0);
    }

    #[test]
    fn scaled_direction_handles_zero_direction() {
        assert_eq!(scaled_direction(Vec3::ZERO, 2.0), Vec3::ZERO);
        assert_abs_diff_eq!(scaled_direction(Vec3::new(0.0, 3.0, 0.0), 2.0), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn closest_point_on_segment_clamps_to_endpoints() {
        let a = Vec3::ZERO;
        let b = Vec3::X;
        assert_eq!(closest_parameter_on_segment(Vec3::new(-1.0, 1.0, 0.0), a, b), 0.0);
        assert_eq!(closest_parameter_on_segment(Vec3::new(3.0, 1.0, 0.0), a, b), 1.0);
        assert_abs_diff_eq!(closest_parameter_on_segment(Vec3::new(0.25, 1.0, 0.0), a, b), 0.25);
    }

    #[test]
    fn crossing_segments_meet_in_the_middle() {
        let (s, t) = closest_parameters_between_segments(
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, -1.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        );
        assert_abs_diff_eq!(s, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(t, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn parallel_segments_produce_finite_parameters() {
        let (s, t) = closest_parameters_between_segments(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(0.5, 1.0, 0.0),
            Vec3::new(1.5, 1.0, 0.0),
        );
        assert!(s.is_finite() && t.is_finite());
        let p = Vec3::X * s;
        let q = Vec3::new(0.5, 1.0, 0.0) + Vec3::X * t;
        assert_abs_diff_eq!((p - q).length(), 1.0, epsilon = 1e-6);
    }
}
