use bevy::prelude::*;
use avian2d::prelude::*;
use leafwing_input_manager::prelude::*;

use crate::components::{BasicMover, Player, Submarine};
use crate::plugins::input::get_default_input_map;
use crate::resources::{CliArgs, ControlConfig, ControlMode};

/// Spawns the player with whichever controller was selected on the command line.
pub fn spawn_player(
    commands: Commands,
    cli: Res<CliArgs>,
    config: Res<ControlConfig>,
) {
    match cli.mode {
        ControlMode::Basic => spawn_basic_mover(commands, &config),
        ControlMode::Submarine => spawn_submarine(commands, &config),
    }
}

fn spawn_basic_mover(mut commands: Commands, config: &ControlConfig) {
    let settings = &config.basic_mover;
    let entity = commands
        .spawn((
            Name::new("Player"),
            Player,
            BasicMover::new(settings.control_speed),
            Sprite::from_color(Color::srgb(0.9, 0.8, 0.2), Vec2::splat(settings.sprite_size)),
            Transform::from_xyz(0.0, 0.0, 1.0),
            InputManagerBundle::with_map(get_default_input_map()),
        ))
        .id();

    info!("Spawned basic mover {:?} at (0, 0)", entity);
}

fn spawn_submarine(mut commands: Commands, config: &ControlConfig) {
    let settings = &config.submarine;
    let entity = commands
        .spawn((
            Name::new("Player Submarine"),
            // Marker components
            Player,
            Submarine,
            // Control components
            settings.controller(),
            settings.boost(),
            InputManagerBundle::with_map(get_default_input_map()),
            // Visual components (art faces right)
            Sprite::from_color(
                Color::srgb(0.95, 0.75, 0.1),
                Vec2::new(settings.sprite_size, settings.sprite_size * 0.5),
            ),
            // Physics components
            Transform::from_xyz(0.0, 0.0, 1.0), // Z=1 to render above background
            RigidBody::Dynamic,
            Collider::circle(settings.sprite_size * 0.4),
            LinearVelocity(Vec2::ZERO),
            LockedAxes::ROTATION_LOCKED,
            // Velocity is fully controlled by the smoothing step
            LinearDamping(0.0),
        ))
        .id();

    info!("Spawned submarine {:?} at (0, 0)", entity);
}
