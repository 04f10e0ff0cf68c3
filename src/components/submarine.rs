use bevy::prelude::*;

/// Marker component for the physics-driven submarine.
#[derive(Component, Debug, Default)]
pub struct Submarine;

/// Tuning for the physics-based submarine controller.
///
/// Velocity is not set directly from input. Each fixed step it is moved
/// toward `axis * max_speed` by at most `rate * dt`, which gives the sub its
/// heavy, underwater feel:
///
/// ```text
/// target = clamp_len(axis, 1) * max_speed * boost_factor
/// rate   = acceleration   if axis != 0
///          deceleration   otherwise
/// v'     = v + clamp_len(target - v, rate * dt)
/// ```
#[derive(Component, Debug, Clone, Reflect)]
pub struct SubmarineController {
    /// Cruise speed (pixels/second)
    pub max_speed: f32,
    /// Velocity change rate while steering (pixels/second^2)
    pub acceleration: f32,
    /// Velocity change rate with no input (pixels/second^2)
    pub deceleration: f32,
    /// Speed factor while the boost is active
    pub boost_multiplier: f32,
    /// False while movement is locked out; the sub coasts to a stop.
    pub movement_enabled: bool,
}

impl Default for SubmarineController {
    fn default() -> Self {
        Self {
            max_speed: 250.0,
            acceleration: 600.0,
            deceleration: 400.0,
            boost_multiplier: 2.0,
            movement_enabled: true,
        }
    }
}

impl SubmarineController {
    /// Velocity the sub is steering toward for the given input.
    pub fn target_velocity(&self, axis: Vec2, boosting: bool) -> Vec2 {
        if !self.movement_enabled {
            return Vec2::ZERO;
        }
        let boost_factor = if boosting { self.boost_multiplier } else { 1.0 };
        axis.clamp_length_max(1.0) * self.max_speed * boost_factor
    }

    /// Acceleration or deceleration, depending on whether the player is steering.
    pub fn smoothing_rate(&self, axis: Vec2) -> f32 {
        if self.movement_enabled && axis != Vec2::ZERO {
            self.acceleration
        } else {
            self.deceleration
        }
    }
}

/// Moves `current` toward `target` by at most `max_delta`. Never overshoots.
pub fn smooth_velocity(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let diff = target - current;
    let dist = diff.length();
    if dist <= max_delta || dist <= f32::EPSILON {
        target
    } else {
        current + diff / dist * max_delta
    }
}

/// Horizontal input below this magnitude leaves the sprite facing as-is.
pub const FLIP_DEAD_ZONE: f32 = 0.01;

/// Sprite art faces right; flip it when the player steers left.
pub fn facing_flip(current_flip: bool, axis_x: f32) -> bool {
    if axis_x < -FLIP_DEAD_ZONE {
        true
    } else if axis_x > FLIP_DEAD_ZONE {
        false
    } else {
        current_flip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothing_is_rate_limited() {
        let v = smooth_velocity(Vec2::ZERO, Vec2::new(250.0, 0.0), 10.0);
        assert_eq!(v, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_smoothing_does_not_overshoot() {
        let target = Vec2::new(5.0, 5.0);
        let v = smooth_velocity(Vec2::new(4.0, 4.0), target, 100.0);
        assert_eq!(v, target);
    }

    #[test]
    fn test_smoothing_converges_monotonically() {
        let target = Vec2::new(-120.0, 80.0);
        let mut v = Vec2::new(60.0, -30.0);
        let mut last_dist = (target - v).length();
        for _ in 0..200 {
            v = smooth_velocity(v, target, 600.0 / 60.0);
            let dist = (target - v).length();
            assert!(dist <= last_dist);
            last_dist = dist;
        }
        assert_eq!(v, target);
    }

    #[test]
    fn test_target_velocity_clamps_diagonal() {
        let controller = SubmarineController::default();
        let target = controller.target_velocity(Vec2::new(1.0, 1.0), false);
        assert!((target.length() - controller.max_speed).abs() < 1e-3);
    }

    #[test]
    fn test_target_velocity_with_boost() {
        let controller = SubmarineController::default();
        let target = controller.target_velocity(Vec2::X, true);
        assert_eq!(target.x, controller.max_speed * controller.boost_multiplier);
    }

    #[test]
    fn test_disabled_controller_targets_zero() {
        let controller = SubmarineController {
            movement_enabled: false,
            ..default()
        };
        assert_eq!(controller.target_velocity(Vec2::X, true), Vec2::ZERO);
        assert_eq!(controller.smoothing_rate(Vec2::X), controller.deceleration);
    }

    #[test]
    fn test_smoothing_rate_picks_accel_when_steering() {
        let controller = SubmarineController::default();
        assert_eq!(controller.smoothing_rate(Vec2::Y), controller.acceleration);
        assert_eq!(controller.smoothing_rate(Vec2::ZERO), controller.deceleration);
    }

    #[test]
    fn test_facing_flip() {
        assert!(facing_flip(false, -1.0));
        assert!(!facing_flip(true, 0.5));
        // Dead zone keeps whatever we had
        assert!(facing_flip(true, 0.0));
        assert!(!facing_flip(false, -0.005));
    }
}
