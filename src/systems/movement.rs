use bevy::prelude::*;
use avian2d::prelude::*;
use leafwing_input_manager::prelude::*;

use crate::components::{
    basic_mover_step, facing_flip, smooth_velocity, BasicMover, Player, SpeedBoost, Submarine,
    SubmarineController,
};
use crate::plugins::input::SubmarineAction;

/// Buffered input state for physics systems running in FixedUpdate.
/// This captures input state each frame so FixedUpdate systems can access it reliably.
#[derive(Resource, Default, Debug)]
pub struct SubmarineInputBuffer {
    /// Raw move axis; the controller clamps it when computing a target.
    pub move_axis: Vec2,
    /// Sticky: set on a Boost press, cleared once the boost system consumes it.
    pub boost_requested: bool,
}

/// System that captures input state for the submarine.
/// Runs in Update to catch all input events.
pub fn buffer_submarine_input(
    action_query: Query<&ActionState<SubmarineAction>, (With<Player>, With<Submarine>)>,
    mut input_buffer: ResMut<SubmarineInputBuffer>,
) {
    if let Ok(action_state) = action_query.get_single() {
        input_buffer.move_axis = action_state.axis_pair(&SubmarineAction::Move);
        if action_state.just_pressed(&SubmarineAction::Boost) {
            input_buffer.boost_requested = true;
        }
    }
}

/// Physics-based submarine movement.
///
/// Runs in FixedUpdate. Velocity eases toward the input-derived target
/// instead of snapping, see [`SubmarineController`] for the model.
pub fn submarine_physics_system(
    time: Res<Time>,
    input_buffer: Res<SubmarineInputBuffer>,
    mut sub_query: Query<
        (&SubmarineController, &SpeedBoost, &mut LinearVelocity),
        (With<Submarine>, With<Player>),
    >,
) {
    let dt = time.delta_secs();
    let axis = input_buffer.move_axis;

    for (controller, boost, mut lin_vel) in &mut sub_query {
        let target = controller.target_velocity(axis, boost.is_active());
        let max_delta = controller.smoothing_rate(axis) * dt;
        lin_vel.0 = smooth_velocity(lin_vel.0, target, max_delta);
    }
}

/// Flips the submarine sprite to face the direction the player is steering.
/// A locked-out sub keeps its current facing.
pub fn flip_submarine_sprite(
    input_buffer: Res<SubmarineInputBuffer>,
    mut sprite_query: Query<(&SubmarineController, &mut Sprite), (With<Submarine>, With<Player>)>,
) {
    for (controller, mut sprite) in &mut sprite_query {
        if !controller.movement_enabled {
            continue;
        }
        let flip = facing_flip(sprite.flip_x, input_buffer.move_axis.x);
        // Avoid triggering change detection every frame
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}

/// Top-down mover: translates the transform directly each frame.
/// Rotation is left alone so the entity keeps its facing. Input is used
/// raw, so diagonals are faster than straight lines.
pub fn basic_mover_system(
    time: Res<Time>,
    mut query: Query<(&ActionState<SubmarineAction>, &BasicMover, &mut Transform), With<Player>>,
) {
    let dt = time.delta_secs();
    for (action_state, mover, mut transform) in &mut query {
        let axis = action_state.axis_pair(&SubmarineAction::Move);
        if axis == Vec2::ZERO || mover.control_speed == 0.0 {
            continue;
        }
        transform.translation =
            basic_mover_step(transform.translation, axis, mover.control_speed, dt);
    }
}

/// Debug system to log submarine state periodically.
pub fn debug_submarine_physics(
    time: Res<Time>,
    mut timer: Local<f32>,
    sub_query: Query<(&Transform, &LinearVelocity, &SpeedBoost), (With<Submarine>, With<Player>)>,
) {
    *timer += time.delta_secs();
    if *timer < 1.0 {
        return;
    }
    *timer = 0.0;

    for (transform, lin_vel, boost) in &sub_query {
        debug!(
            "[SUB] Pos: ({:.1}, {:.1}) | Speed: {:.1} | Boost: {}",
            transform.translation.x,
            transform.translation.y,
            lin_vel.0.length(),
            boost.label(),
        );
    }
}
