//! Circle-circle and circle-segment contact.
//!
//! All bodies in one call share a single radius. Segments are immovable and
//! are never written to. Detection is read-only; resolvers write back only
//! through their `&mut` arguments.

pub mod detection;
pub mod resolution;

pub use detection::{
    check_collision_circle_circle, check_collision_circle_segment_inner,
    check_collision_circle_segment_outer,
};
pub use resolution::{
    resolve_position_collision_circle_circle, resolve_position_collision_circle_segment_inner,
    resolve_position_collision_circle_segment_outer, resolve_velocity_collision_circle_circle,
    resolve_velocity_collision_circle_segment_inner,
    resolve_velocity_collision_circle_segment_outer,
};

use crate::library::*;

/// Position of `point` along the line through `a` and `b`, as a multiple of
/// `b - a`. `None` when the segment has (near) zero length.
pub(crate) fn projection_parameter(point: [f32; 2], a: [f32; 2], b: [f32; 2]) -> Option<f32> {
    let seg = find_vector(a, b);
    if is_degenerate(seg) {
        return None;
    }
    Some(dot(find_vector(a, point), seg) / get_magnitude_sq(seg))
}

/// Closest point to `point` on the infinite line through `a` and `b`.
pub(crate) fn project_on_line(point: [f32; 2], a: [f32; 2], b: [f32; 2]) -> Option<[f32; 2]> {
    let t = projection_parameter(point, a, b)?;
    Some(add(a, scale(find_vector(a, b), t)))
}

/// Whichever endpoint is closer to `point`; ties go to `b`.
pub(crate) fn nearer_endpoint(point: [f32; 2], a: [f32; 2], b: [f32; 2]) -> [f32; 2] {
    if distance_sq(point, a) < distance_sq(point, b) {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_of_vertical_wall() {
        let t = projection_parameter([4.0, 0.0], [5.0, -1.0], [5.0, 1.0]).unwrap();
        assert!((t - 0.5).abs() < 1e-6);
        assert_eq!(project_on_line([4.0, 0.0], [5.0, -1.0], [5.0, 1.0]), Some([5.0, 0.0]));
    }

    #[test]
    fn zero_length_segment_has_no_projection() {
        assert_eq!(projection_parameter([1.0, 1.0], [2.0, 2.0], [2.0, 2.0]), None);
    }

    #[test]
    fn nearer_endpoint_prefers_closer() {
        assert_eq!(nearer_endpoint([0.0, 0.0], [1.0, 0.0], [3.0, 0.0]), [1.0, 0.0]);
        assert_eq!(nearer_endpoint([0.0, 0.0], [-1.0, 0.0], [1.0, 0.0]), [1.0, 0.0]);
    }
}
