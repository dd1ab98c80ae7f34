pub mod shape;

// Unbounded shapes
pub mod half_space;
pub mod line;

// Swept sphere primitives
pub mod capsule;
pub mod point;
pub mod sphere;

// Convex shape primitives
pub mod circle;
pub mod cone;
pub mod convex_hull;
pub mod cylinder;
pub mod edge;
pub mod triangle;

// Flat shapes
pub mod box_shape;
pub mod face_quad;
pub mod quad;

// Type-erased wrapper
pub mod shapes;
