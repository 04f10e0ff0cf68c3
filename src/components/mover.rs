use bevy::prelude::*;

/// Top-down mover that writes straight into the `Transform`.
///
/// No physics body is involved: every frame the translation is offset by
/// `move_axis * control_speed * dt`. Rotation is never touched, so the
/// entity keeps whatever facing it was spawned with.
#[derive(Component, Debug, Clone, Reflect)]
pub struct BasicMover {
    /// Current speed in pixels per second. Zero while disabled.
    pub control_speed: f32,
    /// Speed restored by [`BasicMover::enable`].
    pub default_speed: f32,
}

impl BasicMover {
    pub const DEFAULT_SPEED: f32 = 300.0;

    pub fn new(speed: f32) -> Self {
        Self {
            control_speed: speed,
            default_speed: speed,
        }
    }

    pub fn disable(&mut self) {
        self.control_speed = 0.0;
    }

    pub fn enable(&mut self) {
        self.control_speed = self.default_speed;
    }

    pub fn is_enabled(&self) -> bool {
        self.control_speed > 0.0
    }
}

impl Default for BasicMover {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPEED)
    }
}

/// Offsets `position` in the XY plane. Z (render order) is preserved.
pub fn basic_mover_step(position: Vec3, axis: Vec2, speed: f32, dt: f32) -> Vec3 {
    position + axis.extend(0.0) * speed * dt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_scales_by_speed_and_delta() {
        let pos = basic_mover_step(Vec3::new(10.0, 20.0, 1.0), Vec2::new(1.0, -0.5), 100.0, 0.5);
        assert_eq!(pos, Vec3::new(60.0, -5.0, 1.0));
    }

    #[test]
    fn test_zero_input_does_not_move() {
        let start = Vec3::new(3.0, 4.0, 1.0);
        assert_eq!(basic_mover_step(start, Vec2::ZERO, 300.0, 0.016), start);
    }

    #[test]
    fn test_disable_then_enable() {
        let mut mover = BasicMover::new(250.0);
        mover.disable();
        assert_eq!(mover.control_speed, 0.0);
        assert!(!mover.is_enabled());

        // Disabled mover stays put
        let pos = basic_mover_step(Vec3::ZERO, Vec2::X, mover.control_speed, 1.0);
        assert_eq!(pos, Vec3::ZERO);

        mover.enable();
        mover.enable();
        assert_eq!(mover.control_speed, 250.0);
    }
}
