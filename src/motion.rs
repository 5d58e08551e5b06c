//! Per-body updates that run around contact resolution: integration,
//! rolling friction, the cosmetic rolling orientation and the hole test.

use std::f32::consts::{PI, TAU};

use crate::config::PlayfieldBounds;
use crate::library::*;

/// `position += velocity * dt`
pub fn apply_movement(position: &mut [f32; 2], velocity: [f32; 2], dt: f32) {
    *position = add(*position, scale(velocity, dt));
}

/// Slows the velocity by `(quadratic * speed + linear) * dt`, never below
/// zero. Direction is kept.
pub fn apply_friction(velocity: &mut [f32; 2], dt: f32, quadratic: f32, linear: f32) {
    let speed = get_magnitude(*velocity);
    let new_speed = (speed - (speed * quadratic + linear) * dt).max(0.0);
    *velocity = set_length(*velocity, new_speed);
}

/// True when the ball has left the playfield or dropped into the hole.
pub fn check_circle_in_hole(
    position: [f32; 2],
    hole: [f32; 2],
    hole_radius: f32,
    bounds: &PlayfieldBounds,
) -> bool {
    if !bounds.contains(position) {
        return true;
    }
    distance_sq(position, hole) <= hole_radius * hole_radius
}

/// Rolls a rendered sphere by a planar position delta.
///
/// `dp` is `(dx, dz)` in a y-up world. Only the orientation changes.
pub fn apply_rotation(dp: [f32; 2], radius: f32, orientation: &mut Orientation) {
    let circumference = PI * radius;
    let [x, z] = dp;
    let angle_x = (x / circumference) % TAU;
    let angle_z = (z / circumference) % TAU;
    if z != 0.0 {
        orientation.rotate_on_world_axis([1.0, 0.0, 0.0], angle_z);
    }
    if x != 0.0 {
        orientation.rotate_on_world_axis([0.0, 0.0, 1.0], -angle_x);
    }
}

/// Unit quaternion `(w, x, y, z)` describing how a ball is turned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Orientation {
    fn default() -> Orientation {
        Orientation::IDENTITY
    }
}

impl Orientation {
    pub const IDENTITY: Orientation = Orientation {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn from_axis_angle(axis: [f32; 3], angle: f32) -> Orientation {
        let len = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
        if len == 0.0 {
            return Orientation::IDENTITY;
        }
        let (s, c) = (angle / 2.0).sin_cos();
        Orientation {
            w: c,
            x: axis[0] / len * s,
            y: axis[1] / len * s,
            z: axis[2] / len * s,
        }
    }

    /// Hamilton product `self * rhs`.
    pub fn mul(self, rhs: Orientation) -> Orientation {
        Orientation {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }

    /// Applies a rotation about a world-space axis after the current one.
    pub fn rotate_on_world_axis(&mut self, axis: [f32; 3], angle: f32) {
        *self = Orientation::from_axis_angle(axis, angle).mul(*self).normalized();
    }

    pub fn normalized(self) -> Orientation {
        let len = (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        if len == 0.0 {
            return Orientation::IDENTITY;
        }
        Orientation {
            w: self.w / len,
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
        }
    }

    pub fn rotate_vector(&self, v: [f32; 3]) -> [f32; 3] {
        let u = [self.x, self.y, self.z];
        let t = scale3(cross(u, v), 2.0);
        let ut = cross(u, t);
        [
            v[0] + self.w * t[0] + ut[0],
            v[1] + self.w * t[1] + ut[1],
            v[2] + self.w * t[2] + ut[2],
        ]
    }
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn scale3(v: [f32; 3], factor: f32) -> [f32; 3] {
    [v[0] * factor, v[1] * factor, v[2] * factor]
}
