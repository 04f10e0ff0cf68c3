use bevy::prelude::*;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy_egui::{egui, EguiContexts};
use avian2d::prelude::LinearVelocity;

use crate::components::{BasicMover, Player, SpeedBoost, SubmarineController};
use crate::events::SetMovementEnabled;
use crate::resources::CliArgs;

pub struct DebugUiPlugin;

impl Plugin for DebugUiPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }

        app.add_systems(Update, debug_panel);
    }
}

fn debug_panel(
    mut contexts: EguiContexts,
    cli: Res<CliArgs>,
    diagnostics: Res<DiagnosticsStore>,
    player_query: Query<
        (
            Entity,
            Option<&LinearVelocity>,
            Option<&SpeedBoost>,
            Option<&SubmarineController>,
            Option<&BasicMover>,
        ),
        With<Player>,
    >,
    mut toggles: EventWriter<SetMovementEnabled>,
) {
    egui::Window::new("Debug Panel").show(contexts.ctx_mut(), |ui| {
        ui.label(format!("Controller: {:?}", cli.mode));

        if let Some(fps) = diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(|diag| diag.smoothed())
        {
            ui.label(format!("FPS: {:.1}", fps));
        }

        let Ok((entity, velocity, boost, controller, mover)) = player_query.get_single() else {
            ui.label("No player");
            return;
        };

        ui.separator();
        if let Some(velocity) = velocity {
            ui.label(format!("Speed: {:.1} px/s", velocity.0.length()));
        }
        if let Some(boost) = boost {
            ui.label(format!("Boost: {}", boost.label()));
            let recharge = 1.0 - boost.cooldown_fraction_remaining();
            ui.add(egui::ProgressBar::new(recharge).text("Recharge"));
        }

        let enabled = match (controller, mover) {
            (Some(controller), _) => controller.movement_enabled,
            (None, Some(mover)) => mover.is_enabled(),
            (None, None) => return,
        };

        ui.separator();
        let label = if enabled { "Disable Movement" } else { "Enable Movement" };
        if ui.button(label).clicked() {
            toggles.send(SetMovementEnabled {
                entity,
                enabled: !enabled,
            });
        }
    });
}
