//! Swept-AABB collision between a moving and a static rectangle
//!
//! Reduces the box-versus-box sweep to a single ray cast: the static solid
//! is extended by the moving box's half-extents and the displacement of
//! the box's center over one step is cast against the result. Contact at a
//! parametric distance beyond the step means no collision this frame.

use super::primitives::{Ray, Rect};
use crate::foundation::math::Vec2;

/// Result of a swept collision test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweptContact {
    /// Top-left position the moving rectangle must be placed at to stop
    /// exactly at first contact
    pub position: Vec2,
    /// Fraction of this step's motion at which contact occurs
    pub t: f32,
    /// Outward normal of the solid face that was struck
    pub normal: Vec2,
}

/// Test whether a rectangle moving from `previous` to `current` collides
/// with the static `solid` during this step
///
/// Returns the contact with the corrected position when the motion path
/// crosses the solid, `None` when it misses or when contact falls beyond
/// this step (`t > 1`). A stationary rectangle never collides. How to
/// respond to the contact (stop, slide along the untouched axis, bounce)
/// is the caller's decision.
///
/// `previous` and `current` are snapshots of the same rectangle one step
/// apart, so they share a size; the sweep uses the `previous` extents.
pub fn sweep_rect(solid: &Rect, previous: &Rect, current: &Rect) -> Option<SweptContact> {
    let extents = previous.extents();
    let origin = previous.center();
    let direction = current.center() - origin;

    // Extend the solid on every side by the actor's half-extents so the
    // center ray stands in for the full rectangle. Zero displacement is
    // rejected inside the ray test before any division happens.
    let extended = solid.expanded(extents);
    let hit = extended.intersect_ray(&Ray::new(origin, direction))?;

    // Contact beyond t = 1 happens in some future step, not this one
    if hit.t > 1.0 {
        return None;
    }

    Some(SweptContact {
        position: hit.point - extents,
        t: hit.t,
        normal: hit.normal,
    })
}
