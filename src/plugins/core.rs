use bevy::prelude::*;
use bevy::transform::TransformSystem;

use crate::components::Player;

/// Camera setup and follow.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.02, 0.12, 0.22)))
            .add_systems(Startup, spawn_camera)
            .add_systems(PostUpdate, camera_follow.before(TransformSystem::TransformPropagate));
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            near: -1000.0,
            far: 1000.0,
            scale: 1.0,
            ..OrthographicProjection::default_2d()
        },
        Transform::from_xyz(0.0, 0.0, 100.0),
    ));
}

fn camera_follow(
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
    player_query: Query<&Transform, With<Player>>,
) {
    if let (Ok(mut camera_transform), Ok(player_transform)) =
        (camera_query.get_single_mut(), player_query.get_single())
    {
        let player_pos = player_transform.translation;
        camera_transform.translation.x = player_pos.x;
        camera_transform.translation.y = player_pos.y;
    }
}
