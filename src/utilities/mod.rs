pub mod bounding_box;
pub mod bounding_sphere;
pub mod math_helper;
pub mod matrix3x3;
