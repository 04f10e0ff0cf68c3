use bevy::prelude::*;
use avian2d::prelude::*;

/// Pixels per physics "meter". Keeps avian's sleep and contact
/// thresholds sensible for a sprite-scaled world.
pub const PIXELS_PER_METER: f32 = 64.0;

/// Gravity-free 2D physics stepped at a fixed 60 Hz.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsPlugins::default().with_length_unit(PIXELS_PER_METER))
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Underwater: buoyancy cancels gravity
            .insert_resource(Gravity(Vec2::ZERO));
    }
}
