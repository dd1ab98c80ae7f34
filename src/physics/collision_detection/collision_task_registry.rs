use crate::physics::collidables::shape::ShapeKind;

/// Solver used for a pair of shape kinds.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairRule {
    /// The pair never produces a contact.
    Never = 0,
    /// Infinite line against a bounded shape. The line is clipped to a segment and retested.
    ClipLine = 1,
    /// Bounded shape against a half-space.
    HalfSpace = 2,
    /// Two points, spheres or capsules.
    SweptSpheres = 3,
    /// Bounded shape against a face quad, quad or box.
    FlatFeatures = 4,
    /// Any other pair of bounded shapes, resolved by portal refinement.
    Mpr = 5,
}

impl PairRule {
    /// Picks the rule for a pair of kinds. The result is the same for either argument order.
    pub const fn for_kinds(a: ShapeKind, b: ShapeKind) -> Self {
        let (a, b) = if (a as u8) <= (b as u8) { (a, b) } else { (b, a) };
        match (a, b) {
            (ShapeKind::Point, ShapeKind::Point)
            | (ShapeKind::Point, ShapeKind::Line)
            | (ShapeKind::Line, ShapeKind::Line)
            | (ShapeKind::Line, ShapeKind::HalfSpace)
            | (ShapeKind::HalfSpace, ShapeKind::HalfSpace) => PairRule::Never,
            (ShapeKind::Line, _) => PairRule::ClipLine,
            (_, ShapeKind::HalfSpace) => PairRule::HalfSpace,
            _ if a.is_swept_sphere() && b.is_swept_sphere() => PairRule::SweptSpheres,
            _ if b.is_flat() => PairRule::FlatFeatures,
            _ => PairRule::Mpr,
        }
    }

    /// Whether the rule can ever report a contact.
    #[inline(always)]
    pub const fn can_collide(self) -> bool {
        !matches!(self, PairRule::Never)
    }
}

/// Metadata about the rule registered for a pair of shape kinds.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionTaskReference {
    /// Rule that resolves the pair.
    pub rule: PairRule,
    /// The kind that is expected to come first when the rule is evaluated.
    /// Pairs given in the other order are evaluated swapped and the contact is negated.
    pub expected_first_kind: ShapeKind,
}

/// Symmetric table of the rule used for every pair of shape kinds.
pub struct CollisionTaskRegistry {
    top_level_matrix: [[CollisionTaskReference; ShapeKind::COUNT]; ShapeKind::COUNT],
}

static REGISTRY: CollisionTaskRegistry = CollisionTaskRegistry::new();

impl CollisionTaskRegistry {
    /// Builds the table for every pair of kinds.
    pub const fn new() -> Self {
        let placeholder = CollisionTaskReference {
            rule: PairRule::Never,
            expected_first_kind: ShapeKind::Point,
        };
        let mut top_level_matrix = [[placeholder; ShapeKind::COUNT]; ShapeKind::COUNT];
        let mut i = 0;
        while i < ShapeKind::COUNT {
            let mut j = 0;
            while j < ShapeKind::COUNT {
                let a = ShapeKind::ALL[i];
                let b = ShapeKind::ALL[j];
                top_level_matrix[i][j] = CollisionTaskReference {
                    rule: PairRule::for_kinds(a, b),
                    expected_first_kind: if i <= j { a } else { b },
                };
                j += 1;
            }
            i += 1;
        }
        Self { top_level_matrix }
    }

    /// Gets the shared registry.
    #[inline(always)]
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// Gets metadata about the rule associated with a pair of kinds.
    #[inline(always)]
    pub fn get_task_reference(&self, a: ShapeKind, b: ShapeKind) -> &CollisionTaskReference {
        &self.top_level_matrix[a.index()][b.index()]
    }
}

impl Default for CollisionTaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_symmetric() {
        let registry = CollisionTaskRegistry::global();
        for a in ShapeKind::ALL {
            for b in ShapeKind::ALL {
                let ab = registry.get_task_reference(a, b);
                let ba = registry.get_task_reference(b, a);
                assert_eq!(ab, ba, "{a} / {b}");
                assert_eq!(ab.expected_first_kind, a.min(b));
            }
        }
    }

    #[test]
    fn rules_for_representative_pairs() {
        use ShapeKind::*;
        assert_eq!(PairRule::for_kinds(Line, Line), PairRule::Never);
        assert_eq!(PairRule::for_kinds(HalfSpace, Line), PairRule::Never);
        assert_eq!(PairRule::for_kinds(Line, Point), PairRule::Never);
        assert_eq!(PairRule::for_kinds(Box, Line), PairRule::ClipLine);
        assert_eq!(PairRule::for_kinds(HalfSpace, ConvexHull), PairRule::HalfSpace);
        assert_eq!(PairRule::for_kinds(Point, HalfSpace), PairRule::HalfSpace);
        assert_eq!(PairRule::for_kinds(Capsule, Sphere), PairRule::SweptSpheres);
        assert_eq!(PairRule::for_kinds(Quad, Sphere), PairRule::FlatFeatures);
        assert_eq!(PairRule::for_kinds(Box, Box), PairRule::FlatFeatures);
        assert_eq!(PairRule::for_kinds(Cone, FaceQuad), PairRule::FlatFeatures);
        assert_eq!(PairRule::for_kinds(Edge, Quad), PairRule::FlatFeatures);
        assert_eq!(PairRule::for_kinds(Cone, Cylinder), PairRule::Mpr);
        assert_eq!(PairRule::for_kinds(Sphere, ConvexHull), PairRule::Mpr);
        assert!(!PairRule::Never.can_collide());
    }

    #[test]
    fn every_bounded_shape_uses_the_flat_solver_against_flat_shapes() {
        for a in ShapeKind::ALL {
            for b in [ShapeKind::FaceQuad, ShapeKind::Quad, ShapeKind::Box] {
                if a.is_bounded() {
                    assert_eq!(PairRule::for_kinds(a, b), PairRule::FlatFeatures, "{a} / {b}");
                }
            }
        }
    }

    #[test]
    fn only_unbounded_pairs_never_collide() {
        for a in ShapeKind::ALL {
            for b in ShapeKind::ALL {
                let never = !PairRule::for_kinds(a, b).can_collide();
                let both_bounded = a.is_bounded() && b.is_bounded();
                if both_bounded && !(a == ShapeKind::Point && b == ShapeKind::Point) {
                    assert!(!never, "{a} / {b}");
                }
            }
        }
    }
}
