//! Random scrambles: one random turn each frame the cube is idle.
use bevy::prelude::*;
use rand::Rng;

use crate::utils::cube::CubeState;
use crate::utils::objects::{Axis, Layer, RandomGen, RotationRequest, Scrambler, TurnDirection};

/// Draws a uniformly random quarter turn.
pub fn random_request(rng: &mut impl Rng) -> RotationRequest {
    RotationRequest::new(
        Axis::ALL[rng.random_range(0..Axis::ALL.len())],
        Layer::ALL[rng.random_range(0..Layer::ALL.len())],
        TurnDirection::ALL[rng.random_range(0..TurnDirection::ALL.len())],
    )
}

/// Starts the next scramble turn once the cube is idle. A move only counts once its
/// turn has started.
pub fn scramble_cube(
    mut cube: ResMut<CubeState>,
    mut scrambler: ResMut<Scrambler>,
    mut random_gen: ResMut<RandomGen>,
) {
    if scrambler.remaining == 0 || cube.is_animating() {
        return;
    }
    let request = random_request(&mut random_gen.random_gen);
    if cube.request_rotation(request) {
        scrambler.remaining -= 1;
        debug!("Scramble turn {:?}, {} left", request, scrambler.remaining);
    }
}
