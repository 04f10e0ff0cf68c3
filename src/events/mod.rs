use bevy::prelude::*;

/// Event emitted when the submarine's speed boost kicks in.
#[derive(Event, Debug)]
pub struct BoostStarted {
    pub entity: Entity,
}

/// Event emitted when the boost runs out and the cooldown begins.
#[derive(Event, Debug)]
pub struct BoostEnded {
    pub entity: Entity,
}

/// Event emitted when the cooldown has elapsed and the boost can fire again.
#[derive(Event, Debug)]
pub struct BoostReady {
    pub entity: Entity,
}

/// Request to lock or unlock player movement (cutscenes, menus, docking).
/// Works on either controller.
#[derive(Event, Debug, Clone, Copy)]
pub struct SetMovementEnabled {
    pub entity: Entity,
    pub enabled: bool,
}
