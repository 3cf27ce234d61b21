use bevy::prelude::*;

use rubiks_cube::plugins::cube_plugin::CubePlugin;
/// Main application function
fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Rubik's Cube".into(),
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(CubePlugin)
        .run();
}
