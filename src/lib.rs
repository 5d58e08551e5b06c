//! Collision and motion kernel for a top-down ball-and-hole game.
//!
//! Points and vectors are plain `[f32; 2]` values. The `library` module holds
//! the vector helpers everything else is written against.

pub mod collision;
pub mod config;
pub mod course;
pub mod error;
pub mod items;
pub mod motion;
pub mod shuffle;

pub use config::{PhysicsConfig, PlayfieldBounds};
pub use course::{Course, StepReport};
pub use error::PhysicsError;
pub use items::{Ball, Wall, WallContact};

pub mod library {
    /// Extra clearance left after separating two bodies, and scale of the
    /// degeneracy jitter.
    pub const EPSILON: f32 = 0.0001;

    pub fn dot(vec1: [f32; 2], vec2: [f32; 2]) -> f32 {
        vec1[0] * vec2[0] + vec1[1] * vec2[1]
    }

    pub fn add(vec1: [f32; 2], vec2: [f32; 2]) -> [f32; 2] {
        [vec1[0] + vec2[0], vec1[1] + vec2[1]]
    }

    pub fn scale(vec: [f32; 2], factor: f32) -> [f32; 2] {
        [vec[0] * factor, vec[1] * factor]
    }

    pub fn get_magnitude_sq(vec: [f32; 2]) -> f32 {
        dot(vec, vec)
    }

    pub fn get_magnitude(vec: [f32; 2]) -> f32 {
        get_magnitude_sq(vec).sqrt()
    }

    pub fn normalize(vec: [f32; 2]) -> [f32; 2] {
        let mag = get_magnitude(vec);
        if mag == 0.0 {
            return [0.0, 0.0];
        }
        [vec[0] / mag, vec[1] / mag]
    }

    /// Rescales `vec` to `length`, keeping its direction. A zero vector stays zero.
    pub fn set_length(vec: [f32; 2], length: f32) -> [f32; 2] {
        scale(normalize(vec), length)
    }

    /// Vector pointing from `x` to `y`.
    pub fn find_vector(x: [f32; 2], y: [f32; 2]) -> [f32; 2] {
        [y[0] - x[0], y[1] - x[1]]
    }

    pub fn distance_sq(x: [f32; 2], y: [f32; 2]) -> f32 {
        get_magnitude_sq(find_vector(x, y))
    }

    pub fn midpoint(x: [f32; 2], y: [f32; 2]) -> [f32; 2] {
        scale(add(x, y), 0.5)
    }

    /// Random offset with each component in `[-scale / 2, scale / 2)`.
    ///
    /// Never returns a degenerate vector, so the result can always be
    /// normalized.
    pub fn jitter(scale: f32) -> [f32; 2] {
        loop {
            let offset = [
                rand::random_range(-0.5f32..0.5) * scale,
                rand::random_range(-0.5f32..0.5) * scale,
            ];
            if !is_degenerate(offset) {
                tracing::trace!(x = offset[0], y = offset[1], "degenerate contact, jittering");
                return offset;
            }
        }
    }

    /// True when the squared length of `vec` is zero or subnormal. Such a
    /// vector has no reliable direction: normalizing it does not give unit
    /// length.
    pub fn is_degenerate(vec: [f32; 2]) -> bool {
        get_magnitude_sq(vec) < f32::MIN_POSITIVE
    }

    /// Returns `vec` unchanged unless it is degenerate, in which case a
    /// jitter of `EPSILON` scale takes its place.
    pub fn or_jitter(vec: [f32; 2]) -> [f32; 2] {
        if is_degenerate(vec) {
            jitter(EPSILON)
        } else {
            vec
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn set_length_keeps_direction() {
            let v = set_length([3.0, 4.0], 10.0);
            assert!((v[0] - 6.0).abs() < 1e-5);
            assert!((v[1] - 8.0).abs() < 1e-5);
        }

        #[test]
        fn normalize_zero_is_zero() {
            assert_eq!(normalize([0.0, 0.0]), [0.0, 0.0]);
            assert_eq!(set_length([0.0, 0.0], 2.0), [0.0, 0.0]);
        }

        #[test]
        fn jitter_is_small_and_nonzero() {
            for _ in 0..1000 {
                let j = jitter(EPSILON);
                assert!(get_magnitude_sq(j) > 0.0);
                assert!(j[0].abs() <= EPSILON / 2.0);
                assert!(j[1].abs() <= EPSILON / 2.0);
            }
        }

        #[test]
        fn or_jitter_passes_through_nonzero() {
            assert_eq!(or_jitter([1.0, -2.0]), [1.0, -2.0]);
            assert!(get_magnitude_sq(or_jitter([0.0, 0.0])) > 0.0);
        }

        #[test]
        fn subnormal_lengths_are_degenerate() {
            let tiny = [(1.55 * 2f64.powi(-149)).sqrt() as f32, 0.0];
            assert!(tiny[0] > 0.0);
            assert!(is_degenerate(tiny));
            assert!(!is_degenerate([1.0e-18, 0.0]));
            let replaced = normalize(or_jitter(tiny));
            assert!((get_magnitude(replaced) - 1.0).abs() < 1e-6);
        }

        #[test]
        fn distance_and_midpoint() {
            assert_eq!(distance_sq([1.0, 1.0], [4.0, 5.0]), 25.0);
            assert_eq!(midpoint([0.0, 2.0], [4.0, 0.0]), [2.0, 1.0]);
        }
    }
}
