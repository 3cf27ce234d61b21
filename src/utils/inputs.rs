//! Keyboard handling: slice selection and turn commands, plus the always-on window keys.
use bevy::prelude::*;

use bevy::window::{
    CursorGrabMode, CursorOptions, MonitorSelection, PrimaryWindow, VideoModeSelection, WindowMode,
};

use crate::utils::config::CubeConfig;
use crate::utils::cube::CubeState;
use crate::utils::objects::{
    Axis, DisplayMode, Layer, PiecesChanged, RotationRequest, Scrambler, ShowSliceOutline,
    SliceCursor, TurnDirection,
};

/// Applies `mode` to the window and its cursor. The window mode is left alone on the web.
pub fn apply_display_mode(mode: DisplayMode, window: &mut Window, cursor: &mut CursorOptions) {
    let (grab, visible) = match mode {
        DisplayMode::Fullscreen => (CursorGrabMode::Locked, false),
        DisplayMode::Windowed => (CursorGrabMode::None, true),
    };

    #[cfg(not(target_arch = "wasm32"))]
    {
        window.mode = match mode {
            DisplayMode::Fullscreen => {
                WindowMode::Fullscreen(MonitorSelection::Current, VideoModeSelection::Current)
            }
            DisplayMode::Windowed => WindowMode::Windowed,
        };
    }
    #[cfg(target_arch = "wasm32")]
    let _ = window;

    cursor.grab_mode = grab;
    cursor.visible = visible;
}

/// Escape switches between windowed and fullscreen with a locked cursor.
pub fn handle_window_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut display: ResMut<DisplayMode>,
    mut windows: Query<(&mut Window, &mut CursorOptions), With<PrimaryWindow>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }
    let Ok((mut window, mut cursor)) = windows.single_mut() else {
        return;
    };
    *display = display.toggled();
    apply_display_mode(*display, &mut window, &mut cursor);
    let mode = *display;
    info!("Display mode is now {:?}", mode);
}

/// X/Y/Z pick the axis, 1/2/3 pick the layer.
pub fn slice_cursor_inputs(keyboard: Res<ButtonInput<KeyCode>>, mut cursor: ResMut<SliceCursor>) {
    let axis = [
        (KeyCode::KeyX, Axis::X),
        (KeyCode::KeyY, Axis::Y),
        (KeyCode::KeyZ, Axis::Z),
    ]
    .into_iter()
    .find_map(|(key, axis)| keyboard.just_pressed(key).then_some(axis));

    let layer = [
        (KeyCode::Digit1, Layer::Negative),
        (KeyCode::Digit2, Layer::Middle),
        (KeyCode::Digit3, Layer::Positive),
    ]
    .into_iter()
    .find_map(|(key, layer)| keyboard.just_pressed(key).then_some(layer));

    if let Some(axis) = axis {
        cursor.axis = axis;
    }
    if let Some(layer) = layer {
        cursor.layer = layer;
    }
}

/// E turns the selected slice in the positive direction, Q in the negative one.
pub fn turn_inputs(
    keyboard: Res<ButtonInput<KeyCode>>,
    cursor: Res<SliceCursor>,
    mut requests: MessageWriter<RotationRequest>,
) {
    if keyboard.just_pressed(KeyCode::KeyE) {
        requests.write(cursor.request(TurnDirection::Positive));
    }
    if keyboard.just_pressed(KeyCode::KeyQ) {
        requests.write(cursor.request(TurnDirection::Negative));
    }
}

/// S starts a scramble, R resets the cube when idle, G toggles the slice outline.
pub fn cube_command_inputs(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<CubeConfig>,
    mut cube: ResMut<CubeState>,
    mut scrambler: ResMut<Scrambler>,
    mut outline: ResMut<ShowSliceOutline>,
    mut changed: MessageWriter<PiecesChanged>,
) {
    if keyboard.just_pressed(KeyCode::KeyS) {
        scrambler.remaining = config.scramble_moves;
        info!("Scrambling with {} moves", config.scramble_moves);
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        if cube.is_animating() {
            info!("Reset ignored while a slice is turning");
        } else {
            cube.reset();
            scrambler.remaining = 0;
            changed.write(PiecesChanged);
            info!("Cube reset");
        }
    }
    if keyboard.just_pressed(KeyCode::KeyG) {
        outline.0 = !outline.0;
    }
}
