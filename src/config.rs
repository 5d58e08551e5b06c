use serde::Deserialize;

use crate::error::PhysicsError;

/// Rectangle a ball must stay inside. Edges count as inside.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayfieldBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for PlayfieldBounds {
    fn default() -> PlayfieldBounds {
        PlayfieldBounds {
            min_x: -98.5,
            max_x: 99.5,
            min_y: -53.0,
            max_y: 53.0,
        }
    }
}

impl PlayfieldBounds {
    pub fn contains(&self, position: [f32; 2]) -> bool {
        let [x, y] = position;
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        let edges = [self.min_x, self.max_x, self.min_y, self.max_y];
        if edges.iter().any(|e| !e.is_finite()) {
            return Err(PhysicsError::NonFinite("playfield bounds"));
        }
        if self.min_x >= self.max_x || self.min_y >= self.max_y {
            return Err(PhysicsError::EmptyBounds);
        }
        Ok(())
    }
}

/// Tunables shared by every body on a course.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Radius used for every ball.
    pub ball_radius: f32,
    /// Coefficient of restitution for ball-ball contact, 1 elastic, 0 inelastic.
    pub restitution: f32,
    /// Speed lost per second regardless of speed.
    pub linear_friction: f32,
    /// Fraction of speed lost per second.
    pub quadratic_friction: f32,
    pub hole_radius: f32,
    pub bounds: PlayfieldBounds,
}

impl Default for PhysicsConfig {
    fn default() -> PhysicsConfig {
        PhysicsConfig {
            ball_radius: 1.0,
            restitution: 0.8,
            linear_friction: 0.5,
            quadratic_friction: 0.4,
            hole_radius: 1.5,
            bounds: PlayfieldBounds::default(),
        }
    }
}

impl PhysicsConfig {
    /// Parses a JSON document; missing fields take their default value.
    pub fn from_json_str(json: &str) -> Result<PhysicsConfig, PhysicsError> {
        let config: PhysicsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        for radius in [self.ball_radius, self.hole_radius] {
            if !(radius.is_finite() && radius > 0.0) {
                return Err(PhysicsError::InvalidRadius(radius));
            }
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(PhysicsError::InvalidRestitution(self.restitution));
        }
        for friction in [self.linear_friction, self.quadratic_friction] {
            if !(friction.is_finite() && friction >= 0.0) {
                return Err(PhysicsError::InvalidFriction(friction));
            }
        }
        self.bounds.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(PhysicsConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = PhysicsConfig::from_json_str(r#"{ "restitution": 0.5, "bounds": { "max_x": 10.0 } }"#)
            .unwrap();
        assert_eq!(config.restitution, 0.5);
        assert_eq!(config.ball_radius, 1.0);
        assert_eq!(config.bounds.max_x, 10.0);
        assert_eq!(config.bounds.min_x, -98.5);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let bad_cor = PhysicsConfig::from_json_str(r#"{ "restitution": 1.5 }"#);
        assert!(matches!(bad_cor, Err(PhysicsError::InvalidRestitution(_))));

        let bad_radius = PhysicsConfig::from_json_str(r#"{ "ball_radius": -1.0 }"#);
        assert!(matches!(bad_radius, Err(PhysicsError::InvalidRadius(_))));

        let bad_friction = PhysicsConfig::from_json_str(r#"{ "linear_friction": -0.1 }"#);
        assert!(matches!(bad_friction, Err(PhysicsError::InvalidFriction(_))));

        let empty = PhysicsConfig::from_json_str(r#"{ "bounds": { "min_y": 60.0 } }"#);
        assert!(matches!(empty, Err(PhysicsError::EmptyBounds)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = PhysicsConfig::from_json_str("{ restitution: ").unwrap_err();
        assert!(matches!(err, PhysicsError::Config(_)));
    }

    #[test]
    fn nan_is_rejected() {
        let config = PhysicsConfig {
            restitution: f32::NAN,
            ..PhysicsConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
