//! This file defines the value types, resources, components and messages used by the cube viewer.
use std::ops::{Index, IndexMut};

use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::utils::constants::cube_constants::BLACK;
use crate::utils::constants::game_constants::SEED;

/// One of the three rotation axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit vector along the axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Projects `v` onto the axis.
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// A 3x3 layer along an axis, the slice coordinate -1, 0 or +1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Layer {
    Negative,
    Middle,
    #[default]
    Positive,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Negative, Layer::Middle, Layer::Positive];

    pub fn coordinate(self) -> f32 {
        match self {
            Layer::Negative => -1.0,
            Layer::Middle => 0.0,
            Layer::Positive => 1.0,
        }
    }
}

/// Sense of a quarter turn. `Positive` is a right-handed turn about the axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TurnDirection {
    #[default]
    Positive,
    Negative,
}

impl TurnDirection {
    pub const ALL: [TurnDirection; 2] = [TurnDirection::Positive, TurnDirection::Negative];

    pub fn sign(self) -> f32 {
        match self {
            TurnDirection::Positive => 1.0,
            TurnDirection::Negative => -1.0,
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            TurnDirection::Positive => TurnDirection::Negative,
            TurnDirection::Negative => TurnDirection::Positive,
        }
    }
}

/// The six cube-relative face orientations a piece carries a color for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceDirection {
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}

impl FaceDirection {
    pub const ALL: [FaceDirection; 6] = [
        FaceDirection::Top,
        FaceDirection::Bottom,
        FaceDirection::Left,
        FaceDirection::Right,
        FaceDirection::Front,
        FaceDirection::Back,
    ];

    /// Outward normal of the face.
    pub fn normal(self) -> Vec3 {
        match self {
            FaceDirection::Top => Vec3::Y,
            FaceDirection::Bottom => Vec3::NEG_Y,
            FaceDirection::Left => Vec3::NEG_X,
            FaceDirection::Right => Vec3::X,
            FaceDirection::Front => Vec3::Z,
            FaceDirection::Back => Vec3::NEG_Z,
        }
    }

    /// Face this face is carried onto by a positive quarter turn about `axis`.
    fn quarter_turned(self, axis: Axis) -> Self {
        use FaceDirection::*;
        match (axis, self) {
            (Axis::X, Left | Right) | (Axis::Y, Top | Bottom) | (Axis::Z, Front | Back) => self,

            (Axis::X, Top) => Front,
            (Axis::X, Front) => Bottom,
            (Axis::X, Bottom) => Back,
            (Axis::X, Back) => Top,

            (Axis::Y, Right) => Back,
            (Axis::Y, Back) => Left,
            (Axis::Y, Left) => Front,
            (Axis::Y, Front) => Right,

            (Axis::Z, Right) => Top,
            (Axis::Z, Top) => Left,
            (Axis::Z, Left) => Bottom,
            (Axis::Z, Bottom) => Right,
        }
    }

    /// Face this face is carried onto by a quarter turn about `axis` in `direction`.
    pub fn turned(self, axis: Axis, direction: TurnDirection) -> Self {
        match direction {
            TurnDirection::Positive => self.quarter_turned(axis),
            // Three positive quarter turns undo one.
            TurnDirection::Negative => self
                .quarter_turned(axis)
                .quarter_turned(axis)
                .quarter_turned(axis),
        }
    }
}

/// One color per face direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceColors([Color; 6]);

impl FaceColors {
    pub fn new(colors: [Color; 6]) -> Self {
        Self(colors)
    }

    /// Builds a mapping by asking `f` for the color of every face.
    pub fn from_fn(mut f: impl FnMut(FaceDirection) -> Color) -> Self {
        Self(FaceDirection::ALL.map(&mut f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (FaceDirection, Color)> + '_ {
        FaceDirection::ALL.into_iter().map(|face| (face, self[face]))
    }
}

impl Default for FaceColors {
    fn default() -> Self {
        Self([BLACK; 6])
    }
}

impl Index<FaceDirection> for FaceColors {
    type Output = Color;

    fn index(&self, face: FaceDirection) -> &Color {
        &self.0[face as usize]
    }
}

impl IndexMut<FaceDirection> for FaceColors {
    fn index_mut(&mut self, face: FaceDirection) -> &mut Color {
        &mut self.0[face as usize]
    }
}

/// One of the 27 small cubes.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    /// Stable identity, assigned once when the cube is built.
    pub index: usize,
    /// Position on the grid, each coordinate one of -spacing, 0 or +spacing.
    pub position: Vec3,
    pub face_colors: FaceColors,
}

/// Command produced by the input layer: turn one slice a quarter turn.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RotationRequest {
    pub axis: Axis,
    pub layer: Layer,
    pub direction: TurnDirection,
}

impl RotationRequest {
    pub fn new(axis: Axis, layer: Layer, direction: TurnDirection) -> Self {
        Self {
            axis,
            layer,
            direction,
        }
    }

    /// The turn that undoes this one.
    pub fn inverse(self) -> Self {
        Self {
            direction: self.direction.inverse(),
            ..self
        }
    }
}

/// Sent whenever the logical cube changed so that piece meshes must be rebuilt.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct PiecesChanged;

/// Slice currently targeted by the turn keys.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliceCursor {
    pub axis: Axis,
    pub layer: Layer,
}

impl SliceCursor {
    pub fn request(&self, direction: TurnDirection) -> RotationRequest {
        RotationRequest::new(self.axis, self.layer, direction)
    }
}

/// Pending random turns of a scramble.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct Scrambler {
    pub remaining: u32,
}

/// Whether the selected slice outline is drawn.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct ShowSliceOutline(pub bool);

/// Window presentation toggled with Escape.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Windowed,
    /// Fullscreen on the current monitor with the cursor locked and hidden.
    Fullscreen,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Windowed => DisplayMode::Fullscreen,
            DisplayMode::Fullscreen => DisplayMode::Windowed,
        }
    }
}

/// Random number generator.
#[derive(Resource)]
pub struct RandomGen {
    pub random_gen: ChaCha8Rng,
}

impl RandomGen {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            random_gen: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGen {
    fn default() -> Self {
        Self::from_seed(SEED)
    }
}

/// Links a rendered entity to the piece with the same index.
#[derive(Component, Clone, Copy, Debug)]
pub struct CubePiece {
    pub index: usize,
}

/// Marks the orbiting camera.
#[derive(Component)]
pub struct OrbitCameraMarker;

/// Marks the HUD text.
#[derive(Component)]
pub struct HudText;
