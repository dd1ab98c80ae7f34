//! Narrow phase collision detection between convex primitives.
//!
//! Shapes are plain values built from [`glam`] vectors. A query takes two shapes and returns a
//! [`ContactResult`] describing how deeply the first penetrates the second:
//!
//! ```
//! use glam::Vec3;
//! use rust_primitive_collision::{collide, Sphere};
//!
//! let a = Sphere::new(Vec3::ZERO, 1.0);
//! let b = Sphere::new(Vec3::new(0.0, 0.0, 1.5), 1.0);
//! let contact = collide(&a, &b);
//! assert!(contact.hit);
//! assert!((contact.depth - 0.5).abs() < 1e-6);
//! ```

pub mod error;
pub mod physics;
pub mod utilities;

pub use error::{CollisionError, CollisionResult};
pub use physics::collidables::box_shape::Box;
pub use physics::collidables::capsule::Capsule;
pub use physics::collidables::circle::Circle;
pub use physics::collidables::cone::Cone;
pub use physics::collidables::convex_hull::ConvexHull;
pub use physics::collidables::cylinder::Cylinder;
pub use physics::collidables::edge::Edge;
pub use physics::collidables::face_quad::FaceQuad;
pub use physics::collidables::half_space::HalfSpace;
pub use physics::collidables::line::Line;
pub use physics::collidables::point::Point;
pub use physics::collidables::quad::Quad;
pub use physics::collidables::shape::{IConvexShape, IShape, ShapeKind};
pub use physics::collidables::shapes::Shape;
pub use physics::collidables::sphere::Sphere;
pub use physics::collidables::triangle::Triangle;
pub use physics::collision_detection::contact_manifold::ContactResult;
pub use physics::collision_detection::narrow_phase::{
    check_boundary, collide, collide_with, collision, collision_with, overlaps_boundary,
};
pub use physics::collision_settings::CollisionSettings;
