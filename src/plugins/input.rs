use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

#[derive(Actionlike, PartialEq, Eq, Clone, Copy, Hash, Debug, Reflect)]
pub enum SubmarineAction {
    #[actionlike(DualAxis)]
    Move,
    Boost,
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<SubmarineAction>::default());
    }
}

pub fn get_default_input_map() -> InputMap<SubmarineAction> {
    let mut input_map = InputMap::default();

    // Movement: keyboard on both hands, plus the left stick
    input_map.insert_dual_axis(SubmarineAction::Move, VirtualDPad::wasd());
    input_map.insert_dual_axis(SubmarineAction::Move, VirtualDPad::arrow_keys());
    input_map.insert_dual_axis(SubmarineAction::Move, GamepadStick::LEFT);

    input_map.insert(SubmarineAction::Boost, KeyCode::Space);
    input_map.insert(SubmarineAction::Boost, KeyCode::ShiftLeft);
    input_map.insert(SubmarineAction::Boost, GamepadButton::South);

    input_map
}
