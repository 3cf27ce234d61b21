//! Slice rotation animator: the Idle/Animating state machine and the commit step.
use bevy::prelude::*;

use crate::utils::constants::cube_constants::{GRID_DECIMALS, QUARTER_TURN_DEGREES};
use crate::utils::objects::{Piece, RotationRequest};
use crate::utils::permute::permute;

/// A slice turn in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveRotation {
    pub request: RotationRequest,
    /// Signed angle turned so far, in degrees.
    pub elapsed_angle: f32,
    /// Pieces captured when the turn started. Never changes until the commit.
    pieces: Box<[usize]>,
}

impl ActiveRotation {
    pub fn pieces(&self) -> &[usize] {
        &self.pieces
    }

    pub fn contains(&self, index: usize) -> bool {
        self.pieces.contains(&index)
    }

    /// Interpolated rotation shared by every affected piece.
    pub fn current_rotation(&self) -> Quat {
        Quat::from_axis_angle(self.request.axis.unit(), self.elapsed_angle.to_radians())
    }

    fn is_complete(&self) -> bool {
        self.elapsed_angle.abs() >= QUARTER_TURN_DEGREES
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum AnimationState {
    #[default]
    Idle,
    Animating(ActiveRotation),
}

/// Drives at most one slice turn at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct RotationAnimator {
    state: AnimationState,
    /// Degrees per second.
    turn_speed: f32,
}

impl RotationAnimator {
    pub fn new(turn_speed: f32) -> Self {
        Self {
            state: AnimationState::Idle,
            turn_speed,
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimationState::Animating(_))
    }

    pub fn active(&self) -> Option<&ActiveRotation> {
        match &self.state {
            AnimationState::Animating(rotation) => Some(rotation),
            AnimationState::Idle => None,
        }
    }

    /// Idle -> Animating. Returns `false`, leaving the state untouched, if a turn is
    /// already running or the slice is empty.
    pub fn start(&mut self, request: RotationRequest, pieces: Vec<usize>) -> bool {
        if self.is_animating() || pieces.is_empty() {
            return false;
        }
        self.state = AnimationState::Animating(ActiveRotation {
            request,
            elapsed_angle: 0.0,
            pieces: pieces.into_boxed_slice(),
        });
        true
    }

    /// Advances the running turn by `dt` seconds. Returns the finished turn once it
    /// reaches a quarter turn, after which the animator is idle again.
    pub fn advance(&mut self, dt: f32) -> Option<ActiveRotation> {
        let AnimationState::Animating(rotation) = &mut self.state else {
            return None;
        };
        rotation.elapsed_angle += self.turn_speed * dt * rotation.request.direction.sign();
        if !rotation.is_complete() {
            return None;
        }
        match std::mem::take(&mut self.state) {
            AnimationState::Animating(finished) => Some(finished),
            AnimationState::Idle => None,
        }
    }

    pub fn reset(&mut self) {
        self.state = AnimationState::Idle;
    }
}

/// Rounds every coordinate to the fixed grid, removing floating point drift.
pub fn snap_to_grid(position: Vec3) -> Vec3 {
    let scale = 10f32.powi(GRID_DECIMALS);
    (position * scale).round() / scale
}

/// Applies a finished turn to the logical cube: exact quarter turn of each affected
/// position followed by rounding, then the face-color permutation.
pub fn commit_rotation(pieces: &mut [Piece], rotation: &ActiveRotation) {
    let request = rotation.request;
    let quarter = Quat::from_axis_angle(
        request.axis.unit(),
        request.direction.sign() * QUARTER_TURN_DEGREES.to_radians(),
    );
    for &index in rotation.pieces() {
        let Some(piece) = pieces.iter_mut().find(|piece| piece.index == index) else {
            continue;
        };
        piece.position = snap_to_grid(quarter * piece.position);
        piece.face_colors = permute(&piece.face_colors, request.axis, request.direction);
    }
}
