use glam::Vec3;

use super::math_helper::{try_normalize, DEGENERATE_EPSILON};

/// Result of casting a segment against a [`BoundingBox`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastResult {
    /// Whether the segment touched the box.
    pub hit: bool,
    /// First point of the segment inside the box. Only meaningful when `hit` is set.
    pub point: Vec3,
    /// Normal of the face that was entered. Only meaningful when `hit` is set.
    pub normal: Vec3,
}

impl RaycastResult {
    #[inline(always)]
    fn miss() -> Self {
        Self {
            hit: false,
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
        }
    }
}

/// Provides simple axis-aligned bounding box functionality.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Location with the lowest X, Y, and Z coordinates in the axis-aligned bounding box.
    pub min: Vec3,
    /// Location with the highest X, Y, and Z coordinates in the axis-aligned bounding box.
    pub max: Vec3,
}

impl BoundingBox {
    /// Constructs a bounding box from the specified minimum and maximum.
    #[inline]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Constructs a bounding box from a center and half extents.
    #[inline]
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Determines if a bounding box intersects another bounding box.
    #[inline]
    pub fn intersects(a: Self, b: Self) -> bool {
        Self::intersects_bounds(a.min, a.max, b.min, b.max)
    }

    /// Determines if a bounding box intersects another bounding box.
    #[inline]
    pub fn intersects_bounds(min_a: Vec3, max_a: Vec3, min_b: Vec3, max_b: Vec3) -> bool {
        let no_intersection_on_axes = max_a.cmplt(min_b) | max_b.cmplt(min_a);
        !no_intersection_on_axes.any()
    }

    /// Checks whether the point lies inside or on the box.
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Computes the volume of the bounding box.
    #[inline]
    pub fn compute_volume(&self) -> f32 {
        let diagonal = self.max - self.min;
        diagonal.x * diagonal.y * diagonal.z
    }

    /// Computes a bounding box which contains two other bounding boxes.
    #[inline]
    pub fn create_merged(a: Self, b: Self) -> Self {
        Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        }
    }

    /// Casts the segment from `origin` to `to` against the box region.
    ///
    /// Reports the first point of the segment inside the box and the normal of the entered face.
    /// A segment starting inside the box hits at `origin` with a normal opposing the cast direction.
    pub fn raycast(&self, origin: Vec3, to: Vec3) -> RaycastResult {
        let direction = to - origin;
        let mut t_min = 0.0f32;
        let mut t_max = 1.0f32;
        let mut normal = Vec3::ZERO;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];
            let min = self.min[axis];
            let max = self.max[axis];
            if d.abs() <= DEGENERATE_EPSILON {
                // Parallel to this slab; the origin has to already be within it.
                if o < min || o > max {
                    return RaycastResult::miss();
                }
                continue;
            }
            let inverse_d = 1.0 / d;
            let t_to_min = (min - o) * inverse_d;
            let t_to_max = (max - o) * inverse_d;
            let (t_near, t_far, near_sign) = if d > 0.0 {
                (t_to_min, t_to_max, -1.0)
            } else {
                (t_to_max, t_to_min, 1.0)
            };
            if t_near > t_min {
                t_min = t_near;
                normal = Vec3::ZERO;
                normal[axis] = near_sign;
            }
            t_max = t_max.min(t_far);
            if t_min > t_max {
                return RaycastResult::miss();
            }
        }

        if normal == Vec3::ZERO {
            return RaycastResult {
                hit: true,
                point: origin,
                normal: try_normalize(-direction).unwrap_or(Vec3::ZERO),
            };
        }
        RaycastResult {
            hit: true,
            point: origin + direction * t_min,
            normal,
        }
    }
}
