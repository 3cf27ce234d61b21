//! Systems logic: the fixed per-frame order of the cube viewer.

use crate::utils::camera::OrbitCameraPlugin;
use crate::utils::debug_functions::visualize_selected_slice;
use crate::utils::game_functions::{
    advance_rotation, apply_rotation_requests, rebuild_piece_meshes, setup_hud,
    sync_piece_transforms, update_hud,
};
use crate::utils::inputs::{
    cube_command_inputs, handle_window_keys, slice_cursor_inputs, turn_inputs,
};
use crate::utils::objects::{
    DisplayMode, PiecesChanged, RotationRequest, Scrambler, ShowSliceOutline, SliceCursor,
};
use crate::utils::scramble::scramble_cube;
use crate::utils::setup::setup;
use bevy::prelude::*;

// Plugin for managing all the cube systems.
pub struct SystemsLogicPlugin;

impl Plugin for SystemsLogicPlugin {
    /// Builds the plugin by adding the systems to the app.
    fn build(&self, app: &mut App) {
        app.add_plugins(OrbitCameraPlugin)
            .add_message::<RotationRequest>()
            .add_message::<PiecesChanged>()
            .init_resource::<SliceCursor>()
            .init_resource::<Scrambler>()
            .init_resource::<ShowSliceOutline>()
            .init_resource::<DisplayMode>()
            .add_systems(Startup, (setup, setup_hud))
            // Always on window keys
            .add_systems(Update, handle_window_keys)
            // Input, then the turn, then the meshes, then placement, all in one frame.
            // User turns start before scramble turns.
            .add_systems(
                Update,
                (
                    (slice_cursor_inputs, turn_inputs, cube_command_inputs).chain(),
                    apply_rotation_requests,
                    scramble_cube,
                    advance_rotation,
                    rebuild_piece_meshes,
                    sync_piece_transforms,
                )
                    .chain(),
            )
            .add_systems(Update, (update_hud, visualize_selected_slice));
    }
}
