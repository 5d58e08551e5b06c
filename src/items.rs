use crate::collision::*;
use crate::library::*;
use crate::motion::{self, Orientation};

/// Which part of a wall a ball touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallContact {
    Endpoint,
    Face,
}

/// Immovable straight segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    pub a: [f32; 2],
    pub b: [f32; 2],
}

impl Wall {
    pub fn new(a: [f32; 2], b: [f32; 2]) -> Wall {
        Wall { a, b }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub orientation: Orientation,
    pub sunk: bool,
}

impl Ball {
    pub fn new(position: [f32; 2], velocity: Option<[f32; 2]>) -> Ball {
        Ball {
            position,
            velocity: velocity.unwrap_or([0.0, 0.0]),
            orientation: Orientation::IDENTITY,
            sunk: false,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.velocity != [0.0, 0.0]
    }

    /// Integrates the position and rolls the ball by the distance covered.
    pub fn move_ball(&mut self, dt: f32, radius: f32) {
        let before = self.position;
        motion::apply_movement(&mut self.position, self.velocity, dt);
        motion::apply_rotation(find_vector(before, self.position), radius, &mut self.orientation);
    }

    pub fn apply_friction(&mut self, dt: f32, quadratic: f32, linear: f32) {
        motion::apply_friction(&mut self.velocity, dt, quadratic, linear);
    }

    pub fn strike(&mut self, impulse: [f32; 2]) {
        self.velocity = add(self.velocity, impulse);
    }

    /// Separates and bounces two touching balls. Returns whether they touched.
    pub fn ball_collision(&mut self, other: &mut Ball, radius: f32, cor: f32) -> bool {
        if !check_collision_circle_circle(self.position, other.position, radius) {
            return false;
        }
        resolve_position_collision_circle_circle(&mut self.position, &mut other.position, radius);
        resolve_velocity_collision_circle_circle(
            self.position,
            &mut self.velocity,
            other.position,
            &mut other.velocity,
            cor,
        );
        true
    }

    /// Bounces off a wall. An endpoint hit takes priority over a face hit.
    pub fn wall_collision(&mut self, wall: &Wall, radius: f32) -> Option<WallContact> {
        if check_collision_circle_segment_outer(self.position, radius, wall.a, wall.b) {
            resolve_position_collision_circle_segment_outer(&mut self.position, wall.a, wall.b, radius);
            resolve_velocity_collision_circle_segment_outer(self.position, &mut self.velocity, wall.a, wall.b);
            return Some(WallContact::Endpoint);
        }
        if check_collision_circle_segment_inner(self.position, radius, wall.a, wall.b) {
            resolve_position_collision_circle_segment_inner(&mut self.position, wall.a, wall.b, radius);
            resolve_velocity_collision_circle_segment_inner(self.position, &mut self.velocity, wall.a, wall.b);
            return Some(WallContact::Face);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_ball_rolls() {
        let mut ball = Ball::new([0.0, 0.0], Some([2.0, 0.0]));
        ball.move_ball(0.5, 1.0);
        assert_eq!(ball.position, [1.0, 0.0]);
        assert_ne!(ball.orientation, Orientation::IDENTITY);
    }

    #[test]
    fn strike_adds_impulse() {
        let mut ball = Ball::new([0.0, 0.0], Some([1.0, 1.0]));
        ball.strike([2.0, -1.0]);
        assert_eq!(ball.velocity, [3.0, 0.0]);
        assert!(ball.is_moving());
    }

    #[test]
    fn separated_balls_do_not_interact() {
        let mut a = Ball::new([0.0, 0.0], Some([1.0, 0.0]));
        let mut b = Ball::new([5.0, 0.0], None);
        assert!(!a.ball_collision(&mut b, 1.0, 1.0));
        assert_eq!(a.velocity, [1.0, 0.0]);
    }

    #[test]
    fn cue_ball_stops_target_rolls_on() {
        let mut cue = Ball::new([0.0, 0.0], Some([2.0, 0.0]));
        let mut target = Ball::new([1.9, 0.0], None);
        assert!(cue.ball_collision(&mut target, 1.0, 1.0));
        assert!(cue.velocity[0].abs() < 1e-5);
        assert!((target.velocity[0] - 2.0).abs() < 1e-5);
        assert!(!check_collision_circle_circle(cue.position, target.position, 1.0));
    }

    #[test]
    fn face_hit_reports_face() {
        let wall = Wall::new([5.0, -3.0], [5.0, 3.0]);
        let mut ball = Ball::new([4.2, 0.0], Some([1.0, 0.0]));
        assert_eq!(ball.wall_collision(&wall, 1.0), Some(WallContact::Face));
        assert!((ball.velocity[0] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn corner_hit_prefers_endpoint() {
        let wall = Wall::new([0.0, 0.0], [10.0, 0.0]);
        let mut ball = Ball::new([0.2, 0.5], Some([0.0, -1.0]));
        assert_eq!(ball.wall_collision(&wall, 1.0), Some(WallContact::Endpoint));
        assert!(distance_sq(ball.position, wall.a) > 1.0);
    }
}
