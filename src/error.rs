use thiserror::Error;

/// Errors raised while building shapes or loading settings.
///
/// Collision queries themselves never fail; a miss is reported through
/// [`ContactResult::hit`](crate::physics::collision_detection::contact_manifold::ContactResult).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollisionError {
    /// A raw shape tag did not name any [`ShapeKind`](crate::physics::collidables::shape::ShapeKind).
    #[error("unknown shape kind tag: {0}")]
    UnknownShapeKind(u8),

    /// A convex hull was given an empty vertex buffer.
    #[error("convex hull requires at least one vertex")]
    EmptyHull,

    /// A settings value is out of its valid range.
    #[error("invalid collision settings: {0}")]
    InvalidSettings(String),

    /// Settings text could not be parsed.
    #[error("failed to parse collision settings: {0}")]
    Parse(String),
}

/// Convenience alias for `Result<T, CollisionError>`.
pub type CollisionResult<T> = Result<T, CollisionError>;
