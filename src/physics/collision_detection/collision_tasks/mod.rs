pub mod flat_feature_tester;
pub mod half_space_tester;
pub mod swept_sphere;
