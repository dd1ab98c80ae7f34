//! Entry points for pairwise collision queries.
//!
//! Every query is keyed by the [`ShapeKind`] of its two shapes. The [`CollisionTaskRegistry`]
//! holds the rule for each pair; pairs given against the registry's expected order are evaluated
//! swapped and the contact is negated, so `collision(a, b)` always describes A relative to B.

use crate::physics::collidables::line::Line;
use crate::physics::collidables::shape::{IConvexShape, IShape};
use crate::physics::collidables::shapes::Shape;
use crate::physics::collision_settings::CollisionSettings;

use super::boundary::{check_bounds, check_half_space_bounds, check_line_bounds};
use super::collision_task_registry::{CollisionTaskRegistry, PairRule};
use super::collision_tasks::flat_feature_tester::{FlatFeatureTester, FlatFeatures};
use super::collision_tasks::half_space_tester::HalfSpaceTester;
use super::collision_tasks::swept_sphere::{SweptSphere, SweptSpherePairTester};
use super::contact_manifold::ContactResult;
use super::portal_refiner::PortalRefiner;

/// Conservative test of whether two shapes may collide.
///
/// Never returns `false` for a pair that [`collision`] reports as a hit.
pub fn check_boundary(a: &Shape, b: &Shape) -> bool {
    let reference = CollisionTaskRegistry::global().get_task_reference(a.kind(), b.kind());
    if a.kind() == reference.expected_first_kind {
        passes_boundary(reference.rule, a, b)
    } else {
        passes_boundary(reference.rule, b, a)
    }
}

/// Computes the contact between two shapes with the default settings.
pub fn collision(a: &Shape, b: &Shape) -> ContactResult {
    collision_with(a, b, &CollisionSettings::default())
}

/// Computes the contact between two shapes.
///
/// The result's normal points from `b` toward `a` and its position lies on the surface of `b`.
pub fn collision_with(a: &Shape, b: &Shape, settings: &CollisionSettings) -> ContactResult {
    debug_assert!(settings.validate().is_ok(), "invalid collision settings: {settings:?}");
    let reference = CollisionTaskRegistry::global().get_task_reference(a.kind(), b.kind());
    if a.kind() != reference.expected_first_kind {
        return collision_with(b, a, settings).negated();
    }
    if !passes_boundary(reference.rule, a, b) {
        return ContactResult::miss();
    }
    dispatch(reference.rule, a, b, settings)
}

/// Runs the solver for `rule` on a pair already in the registry's expected order.
fn dispatch(rule: PairRule, a: &Shape, b: &Shape, settings: &CollisionSettings) -> ContactResult {
    match rule {
        PairRule::Never => ContactResult::miss(),
        PairRule::ClipLine => collide_clipped_line(a, b, settings),
        PairRule::HalfSpace => collide_half_space(a, b),
        PairRule::SweptSpheres => collide_swept_spheres(a, b),
        PairRule::FlatFeatures => collide_flat_features(a, b, settings),
        PairRule::Mpr => collide_portal(a, b, settings),
    }
}

/// Typed form of [`check_boundary`].
#[inline]
pub fn overlaps_boundary<A: IShape, B: IShape>(a: &A, b: &B) -> bool {
    check_boundary(&a.as_shape(), &b.as_shape())
}

/// Typed form of [`collision`].
#[inline]
pub fn collide<A: IShape, B: IShape>(a: &A, b: &B) -> ContactResult {
    collision(&a.as_shape(), &b.as_shape())
}

/// Typed form of [`collision_with`].
#[inline]
pub fn collide_with<A: IShape, B: IShape>(a: &A, b: &B, settings: &CollisionSettings) -> ContactResult {
    collision_with(&a.as_shape(), &b.as_shape(), settings)
}

/// Boundary prefilter for a pair already in the registry's expected order.
fn passes_boundary(rule: PairRule, a: &Shape, b: &Shape) -> bool {
    match (rule, a, b) {
        _ if !rule.can_collide() => false,
        (PairRule::ClipLine, Shape::Line(line), other) => {
            other.bounded().is_some_and(|shape| check_line_bounds(line, shape))
        }
        (PairRule::HalfSpace, shape, Shape::HalfSpace(half_space)) => {
            shape.bounded().is_some_and(|shape| check_half_space_bounds(shape, half_space))
        }
        _ => match (a.bounded(), b.bounded()) {
            (Some(a), Some(b)) => check_bounds(a, b),
            _ => false,
        },
    }
}

fn collide_clipped_line(a: &Shape, b: &Shape, settings: &CollisionSettings) -> ContactResult {
    let (Shape::Line(line), Some(bounded)) = (a, b.bounded()) else {
        return ContactResult::miss();
    };
    match clip_line(line, bounded) {
        Some(segment) => collision_with(&segment, b, settings),
        None => ContactResult::miss(),
    }
}

/// Replaces an infinite line by the zero radius capsule spanning the bounding sphere of `shape`.
fn clip_line<'a>(line: &Line, shape: &dyn IConvexShape) -> Option<Shape<'a>> {
    match line.clip_to_sphere(shape.center(), shape.boundary_sq_radius()) {
        Some(segment) => Some(Shape::Capsule(segment)),
        None => {
            log::debug!("line with a zero direction cannot be clipped; reporting no contact");
            None
        }
    }
}

fn collide_half_space(a: &Shape, b: &Shape) -> ContactResult {
    match (a.bounded(), b) {
        (Some(shape), Shape::HalfSpace(half_space)) => HalfSpaceTester::test(shape, half_space),
        _ => ContactResult::miss(),
    }
}

fn collide_swept_spheres(a: &Shape, b: &Shape) -> ContactResult {
    match (SweptSphere::from_shape(a), SweptSphere::from_shape(b)) {
        (Some(a), Some(b)) => SweptSpherePairTester::test(&a, &b),
        _ => ContactResult::miss(),
    }
}

fn collide_flat_features(a: &Shape, b: &Shape, settings: &CollisionSettings) -> ContactResult {
    let Some(flat) = FlatFeatures::from_shape(b) else {
        return ContactResult::miss();
    };
    match (SweptSphere::from_shape(a), a.bounded()) {
        (Some(query), _) => FlatFeatureTester::test(&query, &flat, settings),
        (None, Some(shape)) => FlatFeatureTester::test_convex(shape, &flat, settings),
        (None, None) => ContactResult::miss(),
    }
}

fn collide_portal(a: &Shape, b: &Shape, settings: &CollisionSettings) -> ContactResult {
    match (a.bounded(), b.bounded()) {
        (Some(a), Some(b)) => PortalRefiner::solve(a, b, settings),
        _ => ContactResult::miss(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::collidables::box_shape::Box;
    use crate::physics::collidables::capsule::Capsule;
    use crate::physics::collidables::circle::Circle;
    use crate::physics::collidables::cone::Cone;
    use crate::physics::collidables::convex_hull::ConvexHull;
    use crate::physics::collidables::cylinder::Cylinder;
    use crate::physics::collidables::edge::Edge;
    use crate::physics::collidables::face_quad::FaceQuad;
    use crate::physics::collidables::half_space::HalfSpace;
    use crate::physics::collidables::point::Point;
    use crate::physics::collidables::quad::Quad;
    use crate::physics::collidables::shape::ShapeKind;
    use crate::physics::collidables::sphere::Sphere;
    use crate::physics::collidables::triangle::Triangle;
    use crate::utilities::math_helper::is_finite;
    use approx::assert_abs_diff_eq;
    use glam::{Quat, Vec2, Vec3};
    use proptest::prelude::*;

    static CUBE: [Vec3; 8] = [
        Vec3::new(-0.5, -0.5, -0.5),
        Vec3::new(0.5, -0.5, -0.5),
        Vec3::new(-0.5, 0.5, -0.5),
        Vec3::new(0.5, 0.5, -0.5),
        Vec3::new(-0.5, -0.5, 0.5),
        Vec3::new(0.5, -0.5, 0.5),
        Vec3::new(-0.5, 0.5, 0.5),
        Vec3::new(0.5, 0.5, 0.5),
    ];

    /// Builds a shape of the given kind from generic parameters.
    fn make_shape(kind: ShapeKind, pos: Vec3, dir: Vec3, rotation: Quat, a: f32, b: f32, w: f32) -> Shape<'static> {
        match kind {
            ShapeKind::Point => Point::new(pos).into(),
            ShapeKind::Line => Line::new(pos, dir).into(),
            ShapeKind::Sphere => Sphere::new(pos, a).into(),
            ShapeKind::Capsule => Capsule::new(pos, dir, a, b).into(),
            ShapeKind::Edge => Edge::new(pos, dir, a, b).into(),
            ShapeKind::Triangle => Triangle::new(
                Vec3::new(-a, 0.0, 0.0),
                Vec3::new(a, 0.0, 0.0),
                Vec3::new(0.0, b, 0.0),
                pos,
                rotation,
                w,
            )
            .into(),
            ShapeKind::Circle => Circle::new(pos, dir, a, w).into(),
            ShapeKind::Cylinder => Cylinder::new(pos, dir, a, b, w).into(),
            ShapeKind::Cone => Cone::new(pos, dir, a, b, w).into(),
            ShapeKind::ConvexHull => ConvexHull::new(&CUBE, pos, rotation, w).expect("cube is not empty").into(),
            ShapeKind::FaceQuad => FaceQuad::new(pos, rotation, Vec2::new(a, b), w).into(),
            ShapeKind::Quad => Quad::new(pos, rotation, Vec2::new(a, b), w).into(),
            ShapeKind::Box => Box::new(pos, rotation, Vec3::new(a, b, a.min(b)), w).into(),
            ShapeKind::HalfSpace => HalfSpace::new(pos, dir).into(),
        }
    }

    fn vec3(extent: f32) -> impl Strategy<Value = Vec3> {
        (-extent..extent, -extent..extent, -extent..extent).prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    fn unit_vec3() -> impl Strategy<Value = Vec3> {
        vec3(1.0)
            .prop_filter("direction must not be degenerate", |v| v.length_squared() > 0.01)
            .prop_map(Vec3::normalize)
    }

    fn rotation() -> impl Strategy<Value = Quat> {
        (unit_vec3(), -3.0f32..3.0).prop_map(|(axis, angle)| Quat::from_axis_angle(axis, angle))
    }

    fn shape_of(kinds: Vec<ShapeKind>) -> impl Strategy<Value = Shape<'static>> {
        (
            proptest::sample::select(kinds),
            vec3(2.0),
            unit_vec3(),
            rotation(),
            0.1f32..1.5,
            0.1f32..1.5,
            0.0f32..0.3,
        )
            .prop_map(|(kind, pos, dir, rotation, a, b, w)| make_shape(kind, pos, dir, rotation, a, b, w))
    }

    fn any_shape() -> impl Strategy<Value = Shape<'static>> {
        shape_of(ShapeKind::ALL.to_vec())
    }

    fn assert_contacts_close(actual: &ContactResult, expected: &ContactResult, epsilon: f32) {
        assert_eq!(actual.hit, expected.hit);
        if actual.hit {
            assert_abs_diff_eq!(actual.depth, expected.depth, epsilon = epsilon);
            assert_abs_diff_eq!(actual.normal, expected.normal, epsilon = epsilon);
            assert_abs_diff_eq!(actual.pos, expected.pos, epsilon = epsilon);
        }
    }

    #[test]
    fn spheres_overlapping_along_z() {
        let a = Sphere::new(Vec3::ZERO, 1.0);
        let b = Sphere::new(Vec3::new(0.0, 0.0, 1.5), 1.0);
        assert!(overlaps_boundary(&a, &b));
        let contact = collide(&a, &b);
        assert!(contact.hit);
        assert_abs_diff_eq!(contact.depth, 0.5);
        assert_abs_diff_eq!(contact.normal, Vec3::new(0.0, 0.0, -1.0));
        assert_abs_diff_eq!(contact.pos, Vec3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn swapped_kinds_negate_the_contact() {
        let sphere = Sphere::new(Vec3::new(0.0, 1.3, 0.0), 0.5);
        let cube = Box::axis_aligned(Vec3::ZERO, Vec3::ONE);
        let forward = collide(&sphere, &cube);
        let backward = collide(&cube, &sphere);
        assert!(forward.hit);
        assert_abs_diff_eq!(forward.normal, Vec3::Y, epsilon = 1e-6);
        assert_contacts_close(&backward, &forward.negated(), 1e-6);
        assert_abs_diff_eq!(backward.pos, Vec3::new(0.0, 0.8, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn unbounded_pairs_never_collide() {
        let line = Line::new(Vec3::ZERO, Vec3::X);
        let ground = HalfSpace::new(Vec3::ZERO, Vec3::Y);
        assert!(!collide(&line, &line).hit);
        assert!(!collide(&line, &ground).hit);
        assert!(!collide(&ground, &ground).hit);
        assert!(!overlaps_boundary(&ground, &line));
        assert!(!collide(&Point::new(Vec3::ZERO), &line).hit);
        assert!(!collide(&Point::new(Vec3::ZERO), &Point::new(Vec3::ZERO)).hit);
    }

    #[test]
    fn line_through_a_sphere() {
        let line = Line::new(Vec3::new(-10.0, 0.5, 0.0), Vec3::X * 3.0);
        let sphere = Sphere::new(Vec3::new(2.0, 0.0, 0.0), 1.0);
        let contact = collide(&line, &sphere);
        assert!(contact.hit);
        assert_abs_diff_eq!(contact.depth, 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(contact.normal, Vec3::Y, epsilon = 1e-5);
        assert_abs_diff_eq!(contact.pos, Vec3::new(2.0, 1.0, 0.0), epsilon = 1e-5);

        let swapped = collide(&sphere, &line);
        assert_contacts_close(&swapped, &contact.negated(), 1e-6);
        assert!(!collide(&Line::new(Vec3::new(0.0, 1.5, 0.0), Vec3::X), &sphere).hit);
    }

    #[test]
    fn line_resting_on_a_box_face() {
        let line = Line::new(Vec3::new(0.0, 0.9, 0.0), Vec3::Z);
        let contact = collide(&line, &Box::axis_aligned(Vec3::ZERO, Vec3::ONE));
        assert!(contact.hit);
        assert_abs_diff_eq!(contact.normal, Vec3::Y, epsilon = 1e-5);
        assert_abs_diff_eq!(contact.depth, 0.1, epsilon = 1e-5);
    }

    #[test]
    fn point_below_the_ground() {
        let ground = HalfSpace::new(Vec3::new(0.0, 2.0, 0.0), Vec3::Y);
        let contact = collide(&Point::new(Vec3::new(1.0, 1.25, 1.0)), &ground);
        assert!(contact.hit);
        assert_abs_diff_eq!(contact.depth, 0.75);
        assert_abs_diff_eq!(contact.normal, Vec3::Y);
        assert_abs_diff_eq!(contact.pos, Vec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn hull_resting_on_a_box() {
        let hull = ConvexHull::new(&CUBE, Vec3::new(0.0, 1.4, 0.0), Quat::IDENTITY, 0.0).expect("cube is not empty");
        let cube = Box::axis_aligned(Vec3::ZERO, Vec3::ONE);
        let contact = collide_with(&hull, &cube, &CollisionSettings::precise());
        assert!(contact.hit);
        assert_abs_diff_eq!(contact.depth, 0.1, epsilon = 1e-3);
        assert_abs_diff_eq!(contact.normal, Vec3::Y, epsilon = 1e-3);
        assert_abs_diff_eq!(contact.pos.y, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn face_quad_has_one_thickness_for_every_shape() {
        let quad = FaceQuad::new(Vec3::ZERO, Quat::IDENTITY, Vec2::ONE, 0.0);
        let pos = Vec3::new(0.0, 0.0, -0.3);
        let settings = CollisionSettings::precise();
        let contacts = [
            collide_with(&Sphere::new(pos, 0.5), &quad, &settings),
            collide_with(&Cylinder::new(pos, Vec3::Z, 0.5, 0.5, 0.0), &quad, &settings),
            collide_with(&Box::axis_aligned(pos, Vec3::splat(0.5)), &quad, &settings),
        ];
        for contact in contacts {
            assert!(contact.hit);
            assert_abs_diff_eq!(contact.normal, Vec3::Z, epsilon = 1e-3);
            assert_abs_diff_eq!(contact.depth, 0.8, epsilon = 1e-3);
        }
        assert!(!collide(&Point::new(Vec3::new(0.0, 0.0, -1.41)), &quad).hit);
        assert!(!collide(&Point::new(Vec3::new(0.0, 0.0, -0.01)), &quad).hit);
        assert!(!collide(&Box::axis_aligned(Vec3::new(0.0, 0.0, -1.5), Vec3::splat(0.5)), &quad).hit);
    }

    #[test]
    fn triangle_lying_on_a_box() {
        let triangle = Triangle::from_world(
            Vec3::new(-0.5, 0.95, -0.5),
            Vec3::new(0.5, 0.95, -0.5),
            Vec3::new(0.0, 0.95, 0.5),
            0.02,
        );
        let contact = collide(&triangle, &Box::axis_aligned(Vec3::ZERO, Vec3::ONE));
        assert!(contact.hit);
        assert_abs_diff_eq!(contact.normal, Vec3::Y, epsilon = 1e-5);
        assert_abs_diff_eq!(contact.depth, 0.07, epsilon = 1e-5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid collision settings")]
    fn invalid_settings_are_rejected_in_debug_builds() {
        let settings = CollisionSettings { max_iterations: 0, ..Default::default() };
        collide_with(&Sphere::new(Vec3::ZERO, 1.0), &Sphere::new(Vec3::X, 1.0), &settings);
    }

    #[test]
    fn separated_shapes_are_rejected_by_the_prefilter() {
        let cone = Cone::new(Vec3::new(10.0, 0.0, 0.0), Vec3::Y, 1.0, 1.0, 0.0);
        let cylinder = Cylinder::new(Vec3::ZERO, Vec3::Y, 1.0, 1.0, 0.0);
        assert!(!overlaps_boundary(&cone, &cylinder));
        assert!(!collide(&cone, &cylinder).hit);
    }

    #[test]
    fn settings_loaded_from_toml_drive_the_solver() {
        let settings = CollisionSettings::from_toml_str("max_iterations = 64\nportal_tolerance = 1e-6\n")
            .expect("valid settings");
        let a: Shape = Cylinder::new(Vec3::new(0.0, 1.9, 0.0), Vec3::Y, 1.0, 1.0, 0.0).into();
        let b: Shape = Cylinder::new(Vec3::ZERO, Vec3::Y, 1.0, 1.0, 0.0).into();
        let contact = collision_with(&a, &b, &settings);
        assert!(contact.hit);
        assert_abs_diff_eq!(contact.depth, 0.1, epsilon = 1e-3);
        assert_abs_diff_eq!(contact.normal, Vec3::Y, epsilon = 1e-3);
    }

    #[test]
    fn queries_run_concurrently() {
        let shapes: Vec<Shape> = (0..16)
            .map(|i| Sphere::new(Vec3::new(i as f32 * 0.5, 0.0, 0.0), 0.4).into())
            .collect();
        let serial: Vec<ContactResult> = shapes.windows(2).map(|pair| collision(&pair[0], &pair[1])).collect();
        let parallel: Vec<Vec<ContactResult>> = crossbeam_utils::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|_| {
                        shapes
                            .windows(2)
                            .map(|pair| collision(&pair[0], &pair[1]))
                            .collect::<Vec<ContactResult>>()
                    })
                })
                .collect();
            handles.into_iter().map(|handle| handle.join().expect("query thread panicked")).collect()
        })
        .expect("scope panicked");
        for results in parallel {
            assert_eq!(results, serial);
        }
        assert!(serial.iter().all(|contact| contact.hit));
    }

    proptest! {
        #[test]
        fn swapping_arguments_negates_the_contact(a in any_shape(), b in any_shape()) {
            prop_assume!(a.kind() != b.kind());
            let forward = collision(&a, &b);
            let backward = collision(&b, &a);
            prop_assert_eq!(forward.hit, backward.hit);
            if forward.hit {
                let expected = backward.negated();
                prop_assert!((forward.depth - expected.depth).abs() <= 1e-4);
                prop_assert!(forward.normal.abs_diff_eq(expected.normal, 1e-4));
                prop_assert!(forward.pos.abs_diff_eq(expected.pos, 1e-3));
            }
        }

        #[test]
        fn solver_hits_pass_the_prefilter(a in any_shape(), b in any_shape()) {
            let reference = CollisionTaskRegistry::global().get_task_reference(a.kind(), b.kind());
            let (first, second) = if a.kind() == reference.expected_first_kind { (&a, &b) } else { (&b, &a) };
            // Run the solver directly so that a miss from the prefilter cannot hide a hit.
            let contact = dispatch(reference.rule, first, second, &CollisionSettings::default());
            if contact.hit {
                prop_assert!(check_boundary(&a, &b));
                prop_assert!(check_boundary(&b, &a));
            }
        }

        #[test]
        fn hits_are_finite_for_coincident_centers(
            kind_a in proptest::sample::select(ShapeKind::ALL.to_vec()),
            kind_b in proptest::sample::select(ShapeKind::ALL.to_vec()),
            pos in vec3(2.0),
            dir in unit_vec3(),
            rotation in rotation(),
        ) {
            let a = make_shape(kind_a, pos, dir, rotation, 0.5, 0.75, 0.1);
            let b = make_shape(kind_b, pos, dir, rotation, 0.75, 0.5, 0.0);
            let contact = collision(&a, &b);
            if contact.hit {
                prop_assert!(is_finite(contact.pos));
                prop_assert!(is_finite(contact.normal));
                prop_assert!(contact.depth.is_finite());
                prop_assert!((contact.normal.length() - 1.0).abs() < 1e-3);
            }
        }

        #[test]
        fn overlapping_spheres_match_the_closed_form(
            p0 in vec3(2.0),
            p1 in vec3(2.0),
            r0 in 0.1f32..2.0,
            r1 in 0.1f32..2.0,
        ) {
            let d = p0.distance(p1);
            prop_assume!(d > 1e-3 && d < r0 + r1);
            let contact = collide(&Sphere::new(p0, r0), &Sphere::new(p1, r1));
            prop_assert!(contact.hit);
            prop_assert!((contact.depth - (r0 + r1 - d)).abs() < 1e-4);
            prop_assert!(contact.normal.abs_diff_eq((p0 - p1) / d, 1e-4));
        }

        #[test]
        fn points_behind_a_half_space_report_their_depth(
            anchor in vec3(5.0),
            normal in unit_vec3(),
            lateral in vec3(3.0),
            k in 0.0f32..4.0,
        ) {
            let ground = HalfSpace::new(anchor, normal);
            let on_plane = anchor + lateral - normal * lateral.dot(normal);
            let contact = collide(&Point::new(on_plane - normal * k), &ground);
            prop_assert!(contact.hit);
            prop_assert!((contact.depth - k).abs() < 1e-4);
            prop_assert!(contact.normal.abs_diff_eq(normal, 1e-6));
        }

        #[test]
        fn translating_both_shapes_moves_only_the_contact_point(
            a in shape_of(vec![ShapeKind::Point, ShapeKind::Sphere, ShapeKind::Capsule]),
            b in shape_of(vec![ShapeKind::Sphere, ShapeKind::Capsule, ShapeKind::HalfSpace]),
            offset in vec3(10.0),
        ) {
            let before = collision(&a, &b);
            let after = collision(&a.translate(offset, Quat::IDENTITY), &b.translate(offset, Quat::IDENTITY));
            prop_assert_eq!(before.hit, after.hit);
            if before.hit {
                prop_assert!((before.depth - after.depth).abs() < 1e-3);
                prop_assert!(before.normal.abs_diff_eq(after.normal, 1e-3));
                prop_assert!((before.pos + offset).abs_diff_eq(after.pos, 1e-3));
            }
        }

        #[test]
        fn translating_any_pair_keeps_clear_contacts(a in any_shape(), b in any_shape(), offset in vec3(10.0)) {
            let settings = CollisionSettings::precise();
            let before = collision_with(&a, &b, &settings);
            let after = collision_with(
                &a.translate(offset, Quat::IDENTITY),
                &b.translate(offset, Quat::IDENTITY),
                &settings,
            );
            // Grazing contacts may flip under rounding, so only clear overlaps are compared.
            if before.hit && before.depth > 0.01 {
                prop_assert!(after.hit);
                prop_assert!((before.depth - after.depth).abs() < 1e-2);
                prop_assert!(before.normal.abs_diff_eq(after.normal, 5e-2));
            }
            if after.hit && after.depth > 0.01 {
                prop_assert!(before.hit);
            }
        }
    }
}
