use tracing::debug;

use crate::config::PhysicsConfig;
use crate::error::PhysicsError;
use crate::items::{Ball, Wall};
use crate::motion::check_circle_in_hole;

/// What happened during one [`Course::step`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub ball_contacts: usize,
    pub wall_contacts: usize,
    /// Indices of balls that went into the hole or off the playfield this step.
    pub sunk: Vec<usize>,
}

/// Balls, walls and a hole, advanced together one step at a time.
///
/// Contacts are handled pairwise in index order, one pass per step.
pub struct Course {
    config: PhysicsConfig,
    hole: [f32; 2],
    balls: Vec<Ball>,
    walls: Vec<Wall>,
}

fn check_finite(what: &'static str, points: &[[f32; 2]]) -> Result<(), PhysicsError> {
    if points.iter().flatten().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(PhysicsError::NonFinite(what))
    }
}

impl Course {
    pub fn new(config: PhysicsConfig, hole: [f32; 2]) -> Result<Course, PhysicsError> {
        config.validate()?;
        check_finite("hole", &[hole])?;
        Ok(Course {
            config,
            hole,
            balls: Vec::new(),
            walls: Vec::new(),
        })
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn hole(&self) -> [f32; 2] {
        self.hole
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn ball(&self, idx: usize) -> Result<&Ball, PhysicsError> {
        self.balls.get(idx).ok_or(PhysicsError::UnknownBall(idx))
    }

    pub fn add_ball(&mut self, ball: Ball) -> Result<usize, PhysicsError> {
        check_finite("ball", &[ball.position, ball.velocity])?;
        self.balls.push(ball);
        Ok(self.balls.len() - 1)
    }

    pub fn add_wall(&mut self, wall: Wall) -> Result<usize, PhysicsError> {
        check_finite("wall", &[wall.a, wall.b])?;
        self.walls.push(wall);
        Ok(self.walls.len() - 1)
    }

    /// Adds four walls along the edges of `[min, max]`.
    pub fn add_border(&mut self, min: [f32; 2], max: [f32; 2]) -> Result<(), PhysicsError> {
        let corners = [min, [max[0], min[1]], max, [min[0], max[1]]];
        for i in 0..corners.len() {
            self.add_wall(Wall::new(corners[i], corners[(i + 1) % corners.len()]))?;
        }
        Ok(())
    }

    pub fn strike(&mut self, idx: usize, impulse: [f32; 2]) -> Result<(), PhysicsError> {
        check_finite("impulse", &[impulse])?;
        let ball = self.balls.get_mut(idx).ok_or(PhysicsError::UnknownBall(idx))?;
        if ball.sunk {
            return Ok(());
        }
        ball.strike(impulse);
        Ok(())
    }

    /// Puts a ball back in play at `position`, at rest.
    pub fn place_ball(&mut self, idx: usize, position: [f32; 2]) -> Result<(), PhysicsError> {
        check_finite("ball", &[position])?;
        let ball = self.balls.get_mut(idx).ok_or(PhysicsError::UnknownBall(idx))?;
        *ball = Ball::new(position, None);
        Ok(())
    }

    /// True once no ball still in play is moving.
    pub fn is_at_rest(&self) -> bool {
        self.balls.iter().all(|b| b.sunk || !b.is_moving())
    }

    pub fn step(&mut self, dt: f32) -> StepReport {
        let PhysicsConfig {
            ball_radius: radius,
            restitution,
            linear_friction,
            quadratic_friction,
            hole_radius,
            bounds,
        } = self.config;
        let mut report = StepReport::default();

        for ball in self.balls.iter_mut().filter(|b| !b.sunk) {
            ball.move_ball(dt, radius);
            ball.apply_friction(dt, quadratic_friction, linear_friction);
        }

        for i in 0..self.balls.len() {
            let (head, tail) = self.balls.split_at_mut(i + 1);
            let ball = &mut head[i];
            if ball.sunk {
                continue;
            }
            for (offset, other) in tail.iter_mut().enumerate() {
                if !other.sunk && ball.ball_collision(other, radius, restitution) {
                    debug!(a = i, b = i + 1 + offset, "ball contact");
                    report.ball_contacts += 1;
                }
            }
        }

        for (i, ball) in self.balls.iter_mut().enumerate() {
            if ball.sunk {
                continue;
            }
            for (w, wall) in self.walls.iter().enumerate() {
                if let Some(contact) = ball.wall_collision(wall, radius) {
                    debug!(ball = i, wall = w, ?contact, "wall contact");
                    report.wall_contacts += 1;
                }
            }
        }

        for (i, ball) in self.balls.iter_mut().enumerate() {
            if !ball.sunk && check_circle_in_hole(ball.position, self.hole, hole_radius, &bounds) {
                ball.sunk = true;
                ball.velocity = [0.0, 0.0];
                debug!(ball = i, x = ball.position[0], y = ball.position[1], "ball sunk");
                report.sunk.push(i);
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        Course::new(PhysicsConfig::default(), [50.0, 0.0]).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = PhysicsConfig {
            restitution: 2.0,
            ..PhysicsConfig::default()
        };
        assert!(matches!(
            Course::new(config, [0.0, 0.0]),
            Err(PhysicsError::InvalidRestitution(_))
        ));
    }

    #[test]
    fn rejects_non_finite_bodies() {
        let mut course = course();
        assert!(course.add_ball(Ball::new([f32::NAN, 0.0], None)).is_err());
        assert!(course.add_wall(Wall::new([0.0, 0.0], [f32::INFINITY, 0.0])).is_err());
        assert!(course.balls().is_empty() && course.walls().is_empty());
    }

    #[test]
    fn unknown_ball() {
        let mut course = course();
        assert!(matches!(course.strike(3, [1.0, 0.0]), Err(PhysicsError::UnknownBall(3))));
        assert!(course.ball(0).is_err());
    }

    #[test]
    fn friction_brings_ball_to_rest() {
        let mut course = course();
        let idx = course.add_ball(Ball::new([0.0, 0.0], None)).unwrap();
        course.strike(idx, [5.0, 0.0]).unwrap();
        assert!(!course.is_at_rest());
        for _ in 0..2000 {
            course.step(0.01);
        }
        assert!(course.is_at_rest());
        let x = course.ball(idx).unwrap().position[0];
        assert!(x > 0.0 && x < 50.0, "x={x}");
    }

    #[test]
    fn ball_rolls_into_hole() {
        let config = PhysicsConfig {
            linear_friction: 0.0,
            quadratic_friction: 0.0,
            ..PhysicsConfig::default()
        };
        let mut course = Course::new(config, [10.0, 0.0]).unwrap();
        let idx = course.add_ball(Ball::new([0.0, 0.0], Some([10.0, 0.0]))).unwrap();
        let mut sunk_at = None;
        for step in 0..200 {
            let report = course.step(0.01);
            if report.sunk.contains(&idx) {
                sunk_at = Some(step);
                break;
            }
        }
        assert!(sunk_at.is_some());
        let ball = course.ball(idx).unwrap();
        assert!(ball.sunk);
        assert_eq!(ball.velocity, [0.0, 0.0]);
        assert!(course.is_at_rest());

        // A sunk ball is frozen until placed again.
        let frozen = ball.position;
        course.strike(idx, [1.0, 0.0]).unwrap();
        course.step(0.1);
        assert_eq!(course.ball(idx).unwrap().position, frozen);
        course.place_ball(idx, [0.0, 0.0]).unwrap();
        assert!(!course.ball(idx).unwrap().sunk);
    }

    #[test]
    fn leaving_the_playfield_counts_as_sunk() {
        let mut course = course();
        let idx = course.add_ball(Ball::new([99.4, 0.0], Some([100.0, 0.0]))).unwrap();
        let report = course.step(0.01);
        assert_eq!(report.sunk, vec![idx]);
    }

    #[test]
    fn border_keeps_ball_inside() {
        let config = PhysicsConfig {
            linear_friction: 0.0,
            quadratic_friction: 0.0,
            ..PhysicsConfig::default()
        };
        let mut course = Course::new(config, [80.0, 40.0]).unwrap();
        course.add_border([-20.0, -10.0], [20.0, 10.0]).unwrap();
        assert_eq!(course.walls().len(), 4);
        let idx = course.add_ball(Ball::new([0.0, 0.0], Some([30.0, 17.0]))).unwrap();
        let mut contacts = 0;
        for _ in 0..500 {
            contacts += course.step(0.01).wall_contacts;
            let [x, y] = course.ball(idx).unwrap().position;
            assert!(x.abs() < 20.0 && y.abs() < 10.0, "escaped to ({x}, {y})");
        }
        assert!(contacts > 0);
    }

    #[test]
    fn two_balls_collide_once_per_step() {
        let mut course = course();
        course.add_ball(Ball::new([0.0, 0.0], Some([1.0, 0.0]))).unwrap();
        course.add_ball(Ball::new([1.5, 0.0], Some([-1.0, 0.0]))).unwrap();
        let report = course.step(0.01);
        assert_eq!(report.ball_contacts, 1);
        assert!(course.balls()[0].velocity[0] < 0.0);
        assert!(course.balls()[1].velocity[0] > 0.0);
    }
}
