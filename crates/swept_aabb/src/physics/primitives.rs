//! Primitive collision shapes and intersection algorithms
//!
//! Provides the axis-aligned rectangle and ray primitives used by the
//! swept narrow phase, with a slab-method ray/rectangle intersection test.

use crate::foundation::math::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with its origin at the top-left corner
///
/// Represents either a static solid or a moving actor's bounding box at a
/// point in time. `width` and `height` are expected to be non-negative;
/// degenerate rectangles are the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the top-left corner
    pub x: f32,
    /// Y coordinate of the top-left corner
    pub y: f32,
    /// Width of the rectangle
    pub width: f32,
    /// Height of the rectangle
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle centered at a point with the given half-extents
    pub fn from_center_extents(center: Vec2, extents: Vec2) -> Self {
        Self {
            x: center.x - extents.x,
            y: center.y - extents.y,
            width: extents.x * 2.0,
            height: extents.y * 2.0,
        }
    }

    /// Get the minimum (top-left) corner
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get the maximum (bottom-right) corner
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Get the center of the rectangle
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Get the extents (half-size) of the rectangle
    pub fn extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Check if this rectangle contains a point (boundary inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Check if this rectangle overlaps another rectangle
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.x + other.width
            && self.x + self.width >= other.x
            && self.y <= other.y + other.height
            && self.y + self.height >= other.y
    }

    /// Grow the rectangle by `extents` on every side, keeping its center
    ///
    /// This is the Minkowski sum used by the swept test: extending a solid
    /// by a moving box's half-extents reduces box-versus-box sweeping to a
    /// single ray cast from the moving box's center.
    pub fn expanded(&self, extents: Vec2) -> Self {
        Self {
            x: self.x - extents.x,
            y: self.y - extents.y,
            width: self.width + extents.x * 2.0,
            height: self.height + extents.y * 2.0,
        }
    }

    /// Test ray intersection with this rectangle using the slab method
    ///
    /// The ray direction is a displacement, not a unit vector: the returned
    /// `t` is a multiple of `ray.direction`, so `t` in `[0, 1]` means the
    /// hit lies within the segment from the origin to `origin + direction`.
    /// `t` is negative when the origin is already inside the rectangle.
    ///
    /// Returns `None` for a zero direction vector, for an origin sitting
    /// exactly on a slab plane with no motion on that axis, and for
    /// rectangles entirely behind the ray.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<RayHit> {
        // Zero motion cannot enter the rectangle; bail out before the
        // divisions below produce NaN on both axes.
        if ray.direction.x == 0.0 && ray.direction.y == 0.0 {
            return None;
        }

        let min = self.min();
        let max = self.max();

        // Distances to the near and far slab planes, in multiples of the
        // direction vector. A zero direction component divides to +/-inf,
        // which the ordering below handles.
        let mut t_near = Vec2::new(
            (min.x - ray.origin.x) / ray.direction.x,
            (min.y - ray.origin.y) / ray.direction.y,
        );
        let mut t_far = Vec2::new(
            (max.x - ray.origin.x) / ray.direction.x,
            (max.y - ray.origin.y) / ray.direction.y,
        );

        // 0/0 happens when the origin lies exactly on a slab plane with no
        // motion on that axis. f32::min/max drop NaN operands, which would
        // turn this grazing case into a phantom hit, so reject explicitly.
        if t_near.x.is_nan() || t_near.y.is_nan() || t_far.x.is_nan() || t_far.y.is_nan() {
            return None;
        }

        // Order each axis so t_near holds the entry plane
        if t_near.x > t_far.x {
            std::mem::swap(&mut t_near.x, &mut t_far.x);
        }
        if t_near.y > t_far.y {
            std::mem::swap(&mut t_near.y, &mut t_far.y);
        }

        // The slab intervals never overlap: the ray passes to one side
        if t_near.x > t_far.y || t_near.y > t_far.x {
            return None;
        }

        let t_hit_near = t_near.x.max(t_near.y);
        let t_hit_far = t_far.x.min(t_far.y);

        // The rectangle lies entirely behind the ray's origin
        if t_hit_far < 0.0 {
            return None;
        }

        let point = ray.point_at(t_hit_near);

        // The entry face is on the axis whose slab was entered last. A
        // perfect corner hit resolves to the x face.
        let normal = if t_near.x >= t_near.y {
            if ray.direction.x < 0.0 {
                Vec2::new(1.0, 0.0)
            } else {
                Vec2::new(-1.0, 0.0)
            }
        } else if ray.direction.y < 0.0 {
            Vec2::new(0.0, 1.0)
        } else {
            Vec2::new(0.0, -1.0)
        };

        Some(RayHit {
            t: t_hit_near,
            point,
            normal,
        })
    }
}

/// A ray for casting against rectangles
///
/// The direction is intentionally left unnormalized: parametric distances
/// along the ray measure fractions of the full displacement, which is what
/// the swept test needs to decide whether contact falls inside one step.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The origin point of the ray
    pub origin: Vec2,
    /// The direction of the ray (not normalized)
    pub direction: Vec2,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    /// Get a point along the ray at parametric distance `t`
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.origin + self.direction * t
    }
}

/// Result of a ray/rectangle intersection test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Parametric distance along the direction vector to the entry point
    pub t: f32,
    /// The point of intersection
    pub point: Vec2,
    /// The outward normal of the face the ray entered through
    pub normal: Vec2,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_basic_hit() {
        let rect = Rect::new(5.0, -5.0, 2.0, 10.0);
        let ray = Ray::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));

        let hit = rect.intersect_ray(&ray).expect("ray should hit");

        assert_relative_eq!(hit.t, 0.5);
        assert_relative_eq!(hit.point.x, 5.0);
        assert_relative_eq!(hit.point.y, 0.0);
        assert_eq!(hit.normal, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_parallel_offset_misses() {
        // Rectangle entirely off the ray's y line
        let rect = Rect::new(5.0, 5.0, 2.0, 2.0);
        let ray = Ray::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));

        assert!(rect.intersect_ray(&ray).is_none());
    }

    #[test]
    fn test_rect_behind_origin_is_rejected() {
        // The infinite line crosses the rectangle, the ray does not
        let rect = Rect::new(-5.0, -1.0, 2.0, 2.0);
        let ray = Ray::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 0.0));

        assert!(rect.intersect_ray(&ray).is_none());
    }

    #[test]
    fn test_negative_direction_enters_far_face() {
        let rect = Rect::new(5.0, -5.0, 2.0, 10.0);
        let ray = Ray::new(Vec2::new(20.0, 0.0), Vec2::new(-10.0, 0.0));

        let hit = rect.intersect_ray(&ray).expect("ray should hit");

        assert_relative_eq!(hit.t, 1.3);
        assert_relative_eq!(hit.point.x, 7.0);
        assert_eq!(hit.normal, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_diagonal_hit_reports_entry_face() {
        let rect = Rect::new(4.0, 2.0, 4.0, 4.0);
        let ray = Ray::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));

        let hit = rect.intersect_ray(&ray).expect("ray should hit");

        // Enters through the left face after crossing the top slab
        assert_relative_eq!(hit.t, 0.4);
        assert_relative_eq!(hit.point.x, 4.0);
        assert_relative_eq!(hit.point.y, 4.0);
        assert_eq!(hit.normal, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_zero_direction_is_no_hit() {
        let rect = Rect::new(-1.0, -1.0, 2.0, 2.0);
        // Origin inside the rectangle, no motion
        let ray = Ray::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0));

        assert!(rect.intersect_ray(&ray).is_none());
    }

    #[test]
    fn test_origin_on_slab_plane_with_parallel_ray_is_no_hit() {
        // Origin exactly on the top edge's y, moving along it: the y slab
        // computes 0/0, which must resolve to a miss rather than a hit
        let rect = Rect::new(5.0, -5.0, 2.0, 10.0);
        let ray = Ray::new(Vec2::new(0.0, -5.0), Vec2::new(4.0, 0.0));

        assert!(rect.intersect_ray(&ray).is_none());
    }

    #[test]
    fn test_origin_inside_reports_negative_t() {
        let rect = Rect::new(5.0, -5.0, 2.0, 10.0);
        let ray = Ray::new(Vec2::new(6.0, 0.0), Vec2::new(10.0, 0.0));

        let hit = rect.intersect_ray(&ray).expect("ray should hit");

        assert!(hit.t < 0.0);
    }

    #[test]
    fn test_contains_point() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        assert!(rect.contains_point(Vec2::new(5.0, 5.0)));
        assert!(rect.contains_point(Vec2::new(0.0, 0.0)));
        assert!(rect.contains_point(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains_point(Vec2::new(10.1, 5.0)));
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(8.0, 8.0, 4.0, 4.0);
        let c = Rect::new(11.0, 0.0, 2.0, 2.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_expanded_keeps_center() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let expanded = rect.expanded(Vec2::new(2.5, 2.5));

        assert_eq!(expanded, Rect::new(-2.5, -2.5, 15.0, 15.0));
        assert_eq!(expanded.center(), rect.center());
    }

    #[test]
    fn test_from_center_extents_round_trips() {
        let rect = Rect::new(3.0, -4.0, 6.0, 8.0);
        let rebuilt = Rect::from_center_extents(rect.center(), rect.extents());

        assert_eq!(rebuilt, rect);
    }
}
