// Constants used by the cube viewer, structured into modules.

/// Cube geometry and rotation
pub mod cube_constants {
    use bevy::prelude::Color;

    // Edge length of one piece.
    pub const PIECE_SIZE: f32 = 0.25;
    // Gap between two neighbouring pieces.
    pub const PIECE_GAP: f32 = 0.01;

    // Pieces whose coordinate is this close to the slice plane belong to the slice.
    pub const SLICE_TOLERANCE: f32 = 0.01;

    // Committed positions are rounded to this many decimals.
    pub const GRID_DECIMALS: i32 = 2;

    // Animation speed of a slice turn in degrees per second.
    pub const TURN_SPEED_DEGREES: f32 = 180.0;
    // A committed turn is always a quarter turn.
    pub const QUARTER_TURN_DEGREES: f32 = 90.0;

    // Layers per axis and total piece count.
    pub const LAYERS_PER_AXIS: usize = 3;
    pub const PIECE_COUNT: usize = LAYERS_PER_AXIS * LAYERS_PER_AXIS * LAYERS_PER_AXIS;

    // Sticker colors, one per outer face, black for hidden faces.
    pub const WHITE: Color = Color::srgb(1.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::srgb(1.0, 1.0, 0.0);
    pub const RED: Color = Color::srgb(1.0, 0.0, 0.0);
    pub const ORANGE: Color = Color::srgb(1.0, 0.647, 0.0);
    pub const BLUE: Color = Color::srgb(0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::srgb(0.0, 0.502, 0.0);
    pub const BLACK: Color = Color::srgb(0.0, 0.0, 0.0);
}

/// Piece mesh layout
pub mod mesh_constants {
    pub const VERTICES_PER_FACE: usize = 4;
    pub const INDICES_PER_FACE: usize = 6;
    pub const FACE_COUNT: usize = 6;

    pub const PIECE_VERTEX_COUNT: usize = VERTICES_PER_FACE * FACE_COUNT;
    pub const PIECE_INDEX_COUNT: usize = INDICES_PER_FACE * FACE_COUNT;
}

/// 3D orbit camera
pub mod camera_3d_constants {
    // Each key press moves the camera by this angle (5 degrees).
    pub const CAMERA_3D_ANGLE_STEP_RAD: f32 = 5.0 * (std::f32::consts::PI / 180.0);
    // Each zoom key press scales the distance by this factor.
    pub const CAMERA_3D_DISTANCE_SCALE: f32 = 1.1;

    pub const CAMERA_3D_INITIAL_DISTANCE: f32 = 1.21;
    pub const CAMERA_3D_INITIAL_ANGLE_ZY_RAD: f32 = -CAMERA_3D_ANGLE_STEP_RAD;
    pub const CAMERA_3D_INITIAL_ANGLE_ZX_RAD: f32 = CAMERA_3D_ANGLE_STEP_RAD;

    // Distance range for the camera's orbit.
    pub const CAMERA_3D_MIN_DISTANCE: f32 = 0.5;
    pub const CAMERA_3D_MAX_DISTANCE: f32 = 20.0;
}

/// Generic viewer constants
pub mod game_constants {
    use bevy::prelude::Color;

    // Optional runtime configuration, looked up in the working directory.
    pub const CONFIG_FILE_NAME: &str = "rubiks_cube.toml";

    // Number of random turns a scramble performs.
    pub const SCRAMBLE_MOVES: u32 = 20;

    // Seed for the random number generator.
    pub const SEED: u64 = 69;

    pub const BACKGROUND_COLOR: Color = Color::srgb(0.96, 0.96, 0.86); // beige
    pub const SLICE_OUTLINE_COLOR: Color = Color::srgb(1.0, 0.0, 1.0);

    pub const HUD_FONT_SIZE: f32 = 20.0;
}
