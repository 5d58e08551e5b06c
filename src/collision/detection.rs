//! Contact predicates. Boundaries are inclusive: touching counts as contact.

use super::projection_parameter;
use crate::library::*;

/// True when two circles of the same `radius` touch or overlap.
pub fn check_collision_circle_circle(pos_a: [f32; 2], pos_b: [f32; 2], radius: f32) -> bool {
    distance_sq(pos_a, pos_b) <= (2.0 * radius).powi(2)
}

/// True when the circle reaches either endpoint of the segment.
///
/// Only the endpoints are considered; the interior is left to
/// [`check_collision_circle_segment_inner`]. Both may hold at once near a
/// corner.
pub fn check_collision_circle_segment_outer(
    circle_pos: [f32; 2],
    radius: f32,
    seg_a: [f32; 2],
    seg_b: [f32; 2],
) -> bool {
    let radius_sq = radius * radius;
    distance_sq(circle_pos, seg_a) <= radius_sq || distance_sq(circle_pos, seg_b) <= radius_sq
}

/// True when the circle reaches the flat interior of the segment.
///
/// The circle centre must project onto the segment itself (parameter in
/// `[0, 1]`), and lie within `radius` of that projection. A zero-length
/// segment has no interior.
pub fn check_collision_circle_segment_inner(
    circle_pos: [f32; 2],
    radius: f32,
    seg_a: [f32; 2],
    seg_b: [f32; 2],
) -> bool {
    let Some(t) = projection_parameter(circle_pos, seg_a, seg_b) else {
        return false;
    };
    if !(0.0..=1.0).contains(&t) {
        return false;
    }
    let closest = add(seg_a, scale(find_vector(seg_a, seg_b), t));
    distance_sq(circle_pos, closest) <= radius * radius
}
