use bevy::prelude::*;

use crate::components::{BasicMover, SubmarineController};
use crate::events::SetMovementEnabled;

/// Applies movement lock/unlock requests to whichever controller the entity has.
pub fn apply_movement_toggles(
    mut events: EventReader<SetMovementEnabled>,
    mut movers: Query<&mut BasicMover>,
    mut subs: Query<&mut SubmarineController>,
) {
    for event in events.read() {
        if let Ok(mut mover) = movers.get_mut(event.entity) {
            if event.enabled {
                mover.enable();
            } else {
                mover.disable();
            }
            info!("Basic mover movement {}", if event.enabled { "enabled" } else { "disabled" });
        } else if let Ok(mut controller) = subs.get_mut(event.entity) {
            controller.movement_enabled = event.enabled;
            info!("Submarine movement {}", if event.enabled { "enabled" } else { "disabled" });
        } else {
            debug!("Ignoring movement toggle for {:?}: no controller", event.entity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::SpeedBoost;

    fn setup_app() -> App {
        let mut app = App::new();
        app.add_event::<SetMovementEnabled>()
            .add_systems(Update, apply_movement_toggles);
        app
    }

    #[test]
    fn test_toggle_basic_mover() {
        let mut app = setup_app();
        let entity = app.world_mut().spawn(BasicMover::new(300.0)).id();

        app.world_mut().send_event(SetMovementEnabled { entity, enabled: false });
        app.update();
        assert_eq!(app.world().get::<BasicMover>(entity).map(|m| m.control_speed), Some(0.0));

        app.world_mut().send_event(SetMovementEnabled { entity, enabled: true });
        app.update();
        assert_eq!(app.world().get::<BasicMover>(entity).map(|m| m.control_speed), Some(300.0));
    }

    #[test]
    fn test_toggle_submarine() {
        let mut app = setup_app();
        let entity = app.world_mut().spawn(SubmarineController::default()).id();

        app.world_mut().send_event(SetMovementEnabled { entity, enabled: false });
        app.update();
        let controller = app.world().get::<SubmarineController>(entity).expect("controller");
        assert!(!controller.movement_enabled);
    }

    #[test]
    fn test_unknown_entity_is_ignored() {
        let mut app = setup_app();
        let mover = app.world_mut().spawn(BasicMover::new(300.0)).id();
        let sub = app.world_mut().spawn(SubmarineController::default()).id();
        let bystander = app.world_mut().spawn_empty().id();

        app.world_mut().send_event(SetMovementEnabled { entity: bystander, enabled: false });
        app.update();

        // Only the addressed entity may change, and it has no controller
        assert_eq!(app.world().get::<BasicMover>(mover).map(|m| m.control_speed), Some(300.0));
        assert!(app
            .world()
            .get::<SubmarineController>(sub)
            .is_some_and(|c| c.movement_enabled));
    }

    #[test]
    fn test_disabling_keeps_active_boost() {
        let mut app = setup_app();
        let mut boost = SpeedBoost::new(2.0, 5.0);
        assert!(boost.try_activate());
        let entity = app
            .world_mut()
            .spawn((SubmarineController::default(), boost))
            .id();

        app.world_mut().send_event(SetMovementEnabled { entity, enabled: false });
        app.update();

        assert!(app.world().get::<SpeedBoost>(entity).is_some_and(|b| b.is_active()));
        assert!(app
            .world()
            .get::<SubmarineController>(entity)
            .is_some_and(|c| !c.movement_enabled));
    }
}
