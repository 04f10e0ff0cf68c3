use bevy::prelude::*;

use crate::components::{BasicMover, SubmarineController};
use crate::events::{BoostEnded, BoostReady, BoostStarted, SetMovementEnabled};
use crate::resources::{CliArgs, ControlConfig};
use crate::systems::{
    apply_movement_toggles, basic_mover_system, buffer_submarine_input, debug_submarine_physics,
    flip_submarine_sprite, spawn_player, submarine_physics_system, update_speed_boost,
    SubmarineInputBuffer,
};

/// Wires up both player controllers. Only the one matching the spawned
/// player's components does any work.
pub struct ControlPlugin;

impl Plugin for ControlPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<CliArgs>() {
            app.init_resource::<CliArgs>();
        }
        if !app.world().contains_resource::<ControlConfig>() {
            let config_path = app.world().resource::<CliArgs>().config_path.clone();
            let config = ControlConfig::load_from_file(&config_path);
            app.insert_resource(config);
        }

        app.register_type::<BasicMover>()
            .register_type::<SubmarineController>()
            .init_resource::<SubmarineInputBuffer>()
            .add_event::<BoostStarted>()
            .add_event::<BoostEnded>()
            .add_event::<BoostReady>()
            .add_event::<SetMovementEnabled>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (
                    apply_movement_toggles,
                    buffer_submarine_input,
                    update_speed_boost,
                    flip_submarine_sprite,
                )
                    .chain(),
            )
            .add_systems(Update, (basic_mover_system, debug_submarine_physics))
            .add_systems(FixedUpdate, submarine_physics_system);
    }
}
