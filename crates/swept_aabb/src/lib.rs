//! # Swept AABB
//!
//! Continuous collision detection for 2D axis-aligned rectangles.
//!
//! A rectangle moving fast enough crosses a thin wall between two frames
//! without ever overlapping it, so overlap tests alone cannot stop it.
//! This crate detects the crossing itself: the motion of the rectangle's
//! center over one step is cast as a ray against the obstacle extended by
//! the rectangle's half-extents (a Minkowski sum), and the first contact
//! is reported together with the position the rectangle must be placed at
//! to stop exactly there.
//!
//! The crate is narrow-phase only. Pairing actors with nearby solids and
//! deciding what happens after contact (stopping, sliding, bouncing) are
//! the caller's responsibility.
//!
//! ## Quick Start
//!
//! ```rust
//! use swept_aabb::prelude::*;
//!
//! let solid = Rect::new(0.0, 0.0, 10.0, 10.0);
//! let previous = Rect::new(20.0, 0.0, 5.0, 5.0);
//! let current = Rect::new(5.0, 0.0, 5.0, 5.0);
//!
//! let contact = sweep_rect(&solid, &previous, &current).expect("path crosses the solid");
//! // The actor is stopped flush against the solid's right face.
//! assert!((contact.position.x - 10.0).abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;

pub use config::{Config, ConfigError, StageConfig};
pub use physics::{sweep_rect, Ray, RayHit, Rect, SweptContact};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, StageConfig},
        foundation::math::Vec2,
        physics::{sweep_rect, Ray, RayHit, Rect, SweptContact},
    };
}
