pub mod boundary;
pub mod collision_task_registry;
pub mod collision_tasks;
pub mod contact_manifold;
pub mod narrow_phase;
pub mod portal_refiner;
pub mod support_finder;
