//! Setup of the scene: camera, cube state and one entity per piece.
use bevy::prelude::*;

use crate::log;
use crate::utils::camera::OrbitCamera;
use crate::utils::config::CubeConfig;
use crate::utils::constants::cube_constants::PIECE_COUNT;
use crate::utils::cube::CubeState;
use crate::utils::geometry::build_piece_mesh;
use crate::utils::objects::{CubePiece, OrbitCameraMarker, RandomGen};

/// Initial scene, with the camera and the solved cube.
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<CubeConfig>,
    orbit: Res<OrbitCamera>,
) {
    // Camera
    commands.spawn((Camera3d::default(), orbit.transform(), OrbitCameraMarker));

    // Colors come from the vertices, so one unlit white material serves every piece.
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    let cube = CubeState::new(&config);
    for piece in cube.pieces() {
        commands.spawn((
            Mesh3d(meshes.add(build_piece_mesh(&piece.face_colors))),
            MeshMaterial3d(material.clone()),
            cube.placement(piece),
            CubePiece { index: piece.index },
        ));
    }

    commands.insert_resource(cube);
    commands.insert_resource(RandomGen::from_seed(config.seed));

    log!("🧊 Rubik's cube ready ({PIECE_COUNT} pieces)");
    log!("⌨️  X/Y/Z pick an axis, 1/2/3 a layer, Q/E turn it");
    log!("🎥 Arrow keys orbit and zoom, U/D tilt the camera");
}
