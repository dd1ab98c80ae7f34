use glam::{Quat, Vec3};

/// Result of a single contact query between shape A and shape B.
///
/// `pos` lies on the surface of B. `normal` is unit length and points from B toward A, so moving A
/// by `normal * depth` separates the pair. Touching shapes report `hit` with a depth of zero.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactResult {
    /// Whether the shapes overlap or touch.
    pub hit: bool,
    /// Contact position on the surface of shape B.
    pub pos: Vec3,
    /// Unit contact normal pointing from B toward A.
    pub normal: Vec3,
    /// Penetration depth along the normal.
    pub depth: f32,
}

impl ContactResult {
    /// A result describing separated shapes.
    #[inline(always)]
    pub fn miss() -> Self {
        Self::default()
    }

    /// Creates a contact that was found.
    #[inline(always)]
    pub fn new(pos: Vec3, normal: Vec3, depth: f32) -> Self {
        Self { hit: true, pos, normal, depth }
    }

    /// Swaps the roles of A and B.
    ///
    /// The normal flips, and the contact point moves from the surface of B to the surface of A,
    /// which is `depth` further along the original normal's opposite.
    #[inline]
    pub fn negated(&self) -> Self {
        if !self.hit {
            return *self;
        }
        Self {
            hit: true,
            pos: self.pos - self.normal * self.depth,
            normal: -self.normal,
            depth: self.depth,
        }
    }

    /// Applies the rigid transform `x -> rotation * x + offset` to the contact.
    #[inline]
    pub fn translated(&self, offset: Vec3, rotation: Quat) -> Self {
        if !self.hit {
            return *self;
        }
        Self {
            hit: true,
            pos: rotation * self.pos + offset,
            normal: rotation * self.normal,
            depth: self.depth,
        }
    }
}
