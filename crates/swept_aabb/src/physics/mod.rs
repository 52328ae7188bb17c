//! Physics module for 2D continuous collision detection
//!
//! Narrow-phase only: a slab-method ray/rectangle test and the swept-AABB
//! wrapper built on top of it. Broad-phase pairing and collision response
//! are the caller's concern.

pub mod primitives;
pub mod swept;

pub use primitives::{Ray, RayHit, Rect};
pub use swept::{sweep_rect, SweptContact};
