use bevy::prelude::*;

/// Marker component that identifies the player-controlled entity.
/// Exactly one of [`BasicMover`](super::BasicMover) or
/// [`SubmarineController`](super::SubmarineController) drives it.
#[derive(Component, Debug, Default)]
pub struct Player;
