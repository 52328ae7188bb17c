//! Math utilities and types
//!
//! Provides the fundamental math types for 2D collision work.

pub use nalgebra::Vector2;

/// 2D vector type
///
/// Used for positions, displacements, intersection points, and contact
/// normals. All collision arithmetic in this crate is `f32`.
pub type Vec2 = Vector2<f32>;
