use glam::Vec3;

/// 3 row, 3 column matrix.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Matrix3x3 {
    /// First row of the matrix.
    pub x: Vec3,
    /// Second row of the matrix.
    pub y: Vec3,
    /// Third row of the matrix.
    pub z: Vec3,
}

impl Matrix3x3 {
    /// Builds a matrix whose columns are the given vectors.
    #[inline(always)]
    pub fn from_columns(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self {
            x: Vec3::new(a.x, b.x, c.x),
            y: Vec3::new(a.y, b.y, c.y),
            z: Vec3::new(a.z, b.z, c.z),
        }
    }

    /// Inverts the matrix. Returns `None` when the determinant magnitude is at or below `epsilon`.
    #[inline(always)]
    pub fn invert(&self, epsilon: f32) -> Option<Self> {
        let yz = self.y.cross(self.z);
        let zx = self.z.cross(self.x);
        let xy = self.x.cross(self.y);
        let determinant = self.x.dot(yz);
        if determinant.abs() <= epsilon {
            return None;
        }
        let inverse_determinant = 1.0 / determinant;
        // The cofactor rows form the inverse's columns.
        Some(Self::from_columns(
            yz * inverse_determinant,
            zx * inverse_determinant,
            xy * inverse_determinant,
        ))
    }

    /// Transforms the vector by the matrix.
    #[inline(always)]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.x.dot(v), self.y.dot(v), self.z.dot(v))
    }
}
