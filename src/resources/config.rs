use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::{BasicMover, SpeedBoost, SubmarineController, MAX_PHASE_SECS};

/// Default location of the tuning file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "assets/config/controls.json";

/// Submarine tuning as it appears in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmarineConfig {
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub boost_multiplier: f32,
    /// Seconds the boost stays active
    pub boost_duration: f32,
    /// Seconds before the boost can be used again
    pub boost_cooldown: f32,
    /// Side length of the square sprite (pixels)
    pub sprite_size: f32,
}

impl Default for SubmarineConfig {
    fn default() -> Self {
        let controller = SubmarineController::default();
        Self {
            max_speed: controller.max_speed,
            acceleration: controller.acceleration,
            deceleration: controller.deceleration,
            boost_multiplier: controller.boost_multiplier,
            boost_duration: SpeedBoost::DEFAULT_DURATION,
            boost_cooldown: SpeedBoost::DEFAULT_COOLDOWN,
            sprite_size: 64.0,
        }
    }
}

impl SubmarineConfig {
    pub fn controller(&self) -> SubmarineController {
        SubmarineController {
            max_speed: self.max_speed,
            acceleration: self.acceleration,
            deceleration: self.deceleration,
            boost_multiplier: self.boost_multiplier,
            movement_enabled: true,
        }
    }

    pub fn boost(&self) -> SpeedBoost {
        SpeedBoost::new(self.boost_duration, self.boost_cooldown)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicMoverConfig {
    pub control_speed: f32,
    pub sprite_size: f32,
}

impl Default for BasicMoverConfig {
    fn default() -> Self {
        Self {
            control_speed: BasicMover::DEFAULT_SPEED,
            sprite_size: 48.0,
        }
    }
}

/// All control tuning, loaded once at startup.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    pub submarine: SubmarineConfig,
    pub basic_mover: BasicMoverConfig,
}

impl ControlConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("Invalid control config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would make the controllers misbehave
    /// (negative speeds, zero-size colliders, timers `Duration` can't hold).
    pub fn validate(&self) -> Result<(), String> {
        let sub = &self.submarine;
        let checks = [
            ("submarine.max_speed", sub.max_speed),
            ("submarine.acceleration", sub.acceleration),
            ("submarine.deceleration", sub.deceleration),
            ("submarine.boost_multiplier", sub.boost_multiplier),
            ("submarine.boost_duration", sub.boost_duration),
            ("submarine.boost_cooldown", sub.boost_cooldown),
            ("submarine.sprite_size", sub.sprite_size),
            ("basic_mover.control_speed", self.basic_mover.control_speed),
            ("basic_mover.sprite_size", self.basic_mover.sprite_size),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }

        let timers = [
            ("submarine.boost_duration", sub.boost_duration),
            ("submarine.boost_cooldown", sub.boost_cooldown),
        ];
        for (name, secs) in timers {
            if secs > MAX_PHASE_SECS {
                return Err(format!(
                    "{} must be at most {} seconds, got {}",
                    name, MAX_PHASE_SECS, secs
                ));
            }
        }
        Ok(())
    }

    /// Loads the tuning file, falling back to defaults if it is missing or broken.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            info!("No control config at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(config) => {
                    info!("Loaded control config from {:?}", path);
                    config
                }
                Err(e) => {
                    error!("Failed to parse control config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                error!("Failed to read control config: {}", e);
                Self::default()
            }
        }
    }
}
