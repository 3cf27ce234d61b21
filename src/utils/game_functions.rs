//! Per-frame cube logic and the HUD.
use bevy::prelude::*;

use crate::log;
use crate::utils::constants::game_constants::HUD_FONT_SIZE;
use crate::utils::cube::CubeState;
use crate::utils::geometry::rebuild_piece_mesh;
use crate::utils::objects::{
    CubePiece, HudText, Layer, PiecesChanged, RotationRequest, Scrambler, SliceCursor,
};

/// Starts the first request of the frame if the cube is idle. Every other request is
/// dropped, never queued.
pub fn apply_rotation_requests(
    mut requests: MessageReader<RotationRequest>,
    mut cube: ResMut<CubeState>,
) {
    for request in requests.read() {
        if cube.request_rotation(*request) {
            debug!("Turning {:?}", request);
        }
    }
}

/// Advances the slice turn in flight and signals a mesh rebuild when it commits.
pub fn advance_rotation(
    time: Res<Time>,
    mut cube: ResMut<CubeState>,
    mut changed: MessageWriter<PiecesChanged>,
) {
    if !cube.is_animating() {
        return;
    }
    if let Some(finished) = cube.tick(time.delta_secs()) {
        debug!("Committed {:?}", finished.request);
        changed.write(PiecesChanged);
        if cube.is_solved() {
            log!("🎉 Cube solved after {} moves", cube.move_count());
        }
    }
}

/// Rebuilds the mesh of every piece from the committed face colors.
pub fn rebuild_piece_meshes(
    mut changed: MessageReader<PiecesChanged>,
    cube: Res<CubeState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut pieces: Query<(&CubePiece, &mut Mesh3d)>,
) {
    // Several changes in one frame still need a single rebuild.
    if changed.read().count() == 0 {
        return;
    }
    for (marker, mut mesh) in &mut pieces {
        let Some(piece) = cube.piece(marker.index) else {
            warn!("No piece with index {}", marker.index);
            continue;
        };
        rebuild_piece_mesh(&mut meshes, &mut mesh.0, &piece.face_colors);
    }
}

/// Places every piece, rotating the members of the turning slice.
pub fn sync_piece_transforms(
    cube: Res<CubeState>,
    mut pieces: Query<(&CubePiece, &mut Transform)>,
) {
    if !cube.is_changed() {
        return;
    }
    for (marker, mut transform) in &mut pieces {
        if let Some(animated) = cube.animated_transform(marker.index) {
            *transform = animated;
        }
    }
}

/// Spawns the HUD text in the top left corner.
pub fn setup_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(Color::BLACK),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

fn layer_label(layer: Layer) -> &'static str {
    match layer {
        Layer::Negative => "-1",
        Layer::Middle => "0",
        Layer::Positive => "+1",
    }
}

/// Status line shown by the HUD.
pub fn hud_text(cube: &CubeState, cursor: &SliceCursor, scrambler: &Scrambler) -> String {
    let mut text = format!(
        "X/Y/Z: axis | 1/2/3: layer | Q/E: turn | S: scramble | R: reset | G: outline\n\
        Slice: {:?} {} | Moves: {}",
        cursor.axis,
        layer_label(cursor.layer),
        cube.move_count()
    );
    if scrambler.remaining > 0 {
        text.push_str(&format!(" | Scrambling ({} left)", scrambler.remaining));
    } else if cube.is_solved() {
        text.push_str(" | Solved");
    }
    text
}

/// Refreshes the HUD whenever the cube, the cursor or the scramble changed.
pub fn update_hud(
    cube: Res<CubeState>,
    cursor: Res<SliceCursor>,
    scrambler: Res<Scrambler>,
    mut hud: Query<&mut Text, With<HudText>>,
) {
    if !(cube.is_changed() || cursor.is_changed() || scrambler.is_changed()) {
        return;
    }
    let Ok(mut text) = hud.single_mut() else {
        return;
    };
    text.0 = hud_text(&cube, &cursor, &scrambler);
}
