//! Overlap and impulse correction.
//!
//! Position resolvers place the moving body exactly `radius + EPSILON` from
//! the contact reference point, so the matching predicate is false on the
//! next frame. Velocity resolvers never move a body.
//!
//! Preconditions, not checked here: `radius > 0`, `cor` in `[0, 1]`, all
//! coordinates finite. Outside those the results are well defined but not
//! physical.

use super::{nearer_endpoint, project_on_line};
use crate::library::*;

/// `v` mirrored about the plane with unit normal `normal`.
fn reflect(v: [f32; 2], normal: [f32; 2]) -> [f32; 2] {
    find_vector(scale(normal, 2.0 * dot(v, normal)), v)
}

/// Pushes both circles away from their midpoint until they sit
/// `2 * (radius + EPSILON)` apart.
pub fn resolve_position_collision_circle_circle(
    p0: &mut [f32; 2],
    p1: &mut [f32; 2],
    radius: f32,
) {
    let mid = midpoint(*p0, *p1);
    let offset = set_length(or_jitter(find_vector(*p1, *p0)), radius + EPSILON);
    *p0 = add(mid, offset);
    *p1 = find_vector(offset, mid);
}

/// Pushes the circle away from the nearer segment endpoint.
pub fn resolve_position_collision_circle_segment_outer(
    p: &mut [f32; 2],
    seg_a: [f32; 2],
    seg_b: [f32; 2],
    radius: f32,
) {
    let anchor = nearer_endpoint(*p, seg_a, seg_b);
    let normal = or_jitter(find_vector(anchor, *p));
    *p = add(anchor, set_length(normal, radius + EPSILON));
}

/// Pushes the circle away from its projection on the segment, along the
/// segment normal. A zero-length segment is handled as an endpoint.
pub fn resolve_position_collision_circle_segment_inner(
    p: &mut [f32; 2],
    seg_a: [f32; 2],
    seg_b: [f32; 2],
    radius: f32,
) {
    let Some(closest) = project_on_line(*p, seg_a, seg_b) else {
        resolve_position_collision_circle_segment_outer(p, seg_a, seg_b, radius);
        return;
    };
    let normal = or_jitter(find_vector(closest, *p));
    *p = add(closest, set_length(normal, radius + EPSILON));
}

/// Equal-mass collision of two circles.
///
/// Each velocity is first resolved as a perfectly elastic collision along the
/// centre line, then blended with the perfectly inelastic outcome (the mean
/// of the two elastic velocities): `elastic * cor + mean * (1 - cor)`.
pub fn resolve_velocity_collision_circle_circle(
    p0: [f32; 2],
    v0: &mut [f32; 2],
    p1: [f32; 2],
    v1: &mut [f32; 2],
    cor: f32,
) {
    let axis = or_jitter(find_vector(p1, p0));
    let relative = find_vector(*v1, *v0);
    let exchange = scale(axis, dot(relative, axis) / get_magnitude_sq(axis));

    let elastic0 = find_vector(exchange, *v0);
    let elastic1 = add(*v1, exchange);
    let inelastic = midpoint(elastic0, elastic1);

    *v0 = add(scale(elastic0, cor), scale(inelastic, 1.0 - cor));
    *v1 = add(scale(elastic1, cor), scale(inelastic, 1.0 - cor));
}

/// Reflects the velocity about the normal from the nearer endpoint to the
/// circle centre.
pub fn resolve_velocity_collision_circle_segment_outer(
    p: [f32; 2],
    v: &mut [f32; 2],
    seg_a: [f32; 2],
    seg_b: [f32; 2],
) {
    let anchor = nearer_endpoint(p, seg_a, seg_b);
    let normal = normalize(or_jitter(find_vector(anchor, p)));
    *v = reflect(*v, normal);
}

/// Reflects the velocity about the segment normal through the circle centre.
pub fn resolve_velocity_collision_circle_segment_inner(
    p: [f32; 2],
    v: &mut [f32; 2],
    seg_a: [f32; 2],
    seg_b: [f32; 2],
) {
    let Some(closest) = project_on_line(p, seg_a, seg_b) else {
        resolve_velocity_collision_circle_segment_outer(p, v, seg_a, seg_b);
        return;
    };
    let normal = normalize(or_jitter(find_vector(closest, p)));
    *v = reflect(*v, normal);
}
