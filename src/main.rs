use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use submarine::plugins::control::ControlPlugin;
use submarine::plugins::core::CorePlugin;
use submarine::plugins::debug_ui::DebugUiPlugin;
use submarine::plugins::input::InputPlugin;
use submarine::plugins::physics::PhysicsPlugin;
use submarine::resources::{CliArgs, ControlConfig};

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(ImagePlugin::default_nearest()));

    // Parse after DefaultPlugins so the log lines go through LogPlugin
    let cli = CliArgs::parse();
    let config = ControlConfig::load_from_file(&cli.config_path);

    app.insert_resource(cli)
        .insert_resource(config)
        .add_plugins(EguiPlugin)
        .add_plugins(CorePlugin)
        .add_plugins(InputPlugin)
        .add_plugins(PhysicsPlugin)
        .add_plugins(ControlPlugin)
        .add_plugins(DebugUiPlugin)
        .run();
}
