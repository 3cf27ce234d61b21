//! The logical cube: pieces, face colors and the slice turn in flight.
use bevy::prelude::*;

use crate::utils::config::CubeConfig;
use crate::utils::constants::cube_constants::*;
use crate::utils::objects::{FaceColors, FaceDirection, Piece, RotationRequest};
use crate::utils::rotation::{ActiveRotation, RotationAnimator, commit_rotation, snap_to_grid};
use crate::utils::slice::select_slice;

/// Owned state of the whole cube. Mutated only by rotation commits and resets.
#[derive(Resource, Clone, Debug)]
pub struct CubeState {
    pieces: Vec<Piece>,
    animator: RotationAnimator,
    piece_size: f32,
    spacing: f32,
    tolerance: f32,
    move_count: u32,
}

impl CubeState {
    /// Builds a solved cube.
    pub fn new(config: &CubeConfig) -> Self {
        let spacing = config.slice_spacing();
        Self {
            pieces: solved_pieces(spacing),
            animator: RotationAnimator::new(config.turn_speed),
            piece_size: config.piece_size,
            spacing,
            tolerance: config.slice_tolerance,
            move_count: 0,
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, index: usize) -> Option<&Piece> {
        self.pieces.get(index)
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn active_rotation(&self) -> Option<&ActiveRotation> {
        self.animator.active()
    }

    /// Pieces of the slice named by `request`, as they are right now.
    pub fn select(&self, request: RotationRequest) -> Vec<usize> {
        select_slice(
            &self.pieces,
            request.axis,
            request.layer,
            self.spacing,
            self.tolerance,
        )
    }

    /// Starts a slice turn. Dropped, returning `false`, while another turn runs.
    pub fn request_rotation(&mut self, request: RotationRequest) -> bool {
        if self.animator.is_animating() {
            log::debug!("dropping {request:?}, a turn is already running");
            return false;
        }
        let pieces = self.select(request);
        if pieces.is_empty() {
            log::warn!("{request:?} selected no pieces");
            return false;
        }
        self.animator.start(request, pieces)
    }

    /// Advances the running turn by `dt` seconds and commits it once it reaches 90°.
    /// Returns the committed turn, after which every piece mesh must be rebuilt.
    pub fn tick(&mut self, dt: f32) -> Option<ActiveRotation> {
        let finished = self.animator.advance(dt)?;
        commit_rotation(&mut self.pieces, &finished);
        self.move_count += 1;
        log::debug!(
            "committed {:?}, {} moves so far",
            finished.request,
            self.move_count
        );
        Some(finished)
    }

    /// Static placement of a piece: committed position, scaled to piece size.
    pub fn placement(&self, piece: &Piece) -> Transform {
        Transform::from_translation(piece.position).with_scale(Vec3::splat(self.piece_size))
    }

    /// Placement composed with the in-flight rotation for pieces in the turning slice.
    pub fn animated_transform(&self, index: usize) -> Option<Transform> {
        let piece = self.piece(index)?;
        let placement = self.placement(piece);
        Some(match self.animator.active() {
            Some(rotation) if rotation.contains(index) => {
                Transform::from_rotation(rotation.current_rotation()).mul_transform(placement)
            }
            _ => placement,
        })
    }

    /// Back to a solved cube, dropping any turn in flight.
    pub fn reset(&mut self) {
        self.pieces = solved_pieces(self.spacing);
        self.animator.reset();
        self.move_count = 0;
    }

    /// Every outer layer shows a single color on its outward face.
    pub fn is_solved(&self) -> bool {
        FaceDirection::ALL.into_iter().all(|face| {
            let normal = face.normal();
            let mut colors = self
                .pieces
                .iter()
                .filter(|piece| piece.position.dot(normal) > self.spacing - self.tolerance)
                .map(|piece| piece.face_colors[face]);
            match colors.next() {
                Some(first) => colors.all(|color| color == first),
                None => true,
            }
        })
    }
}

fn solved_face_colors(x: i32, y: i32, z: i32) -> FaceColors {
    FaceColors::from_fn(|face| match face {
        FaceDirection::Top if y == 1 => WHITE,
        FaceDirection::Bottom if y == -1 => YELLOW,
        FaceDirection::Left if x == -1 => ORANGE,
        FaceDirection::Right if x == 1 => RED,
        FaceDirection::Front if z == 1 => GREEN,
        FaceDirection::Back if z == -1 => BLUE,
        _ => BLACK,
    })
}

fn solved_pieces(spacing: f32) -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(PIECE_COUNT);
    for x in -1..=1 {
        for y in -1..=1 {
            for z in -1..=1 {
                pieces.push(Piece {
                    index: pieces.len(),
                    position: snap_to_grid(Vec3::new(x as f32, y as f32, z as f32) * spacing),
                    face_colors: solved_face_colors(x, y, z),
                });
            }
        }
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::objects::{Axis, Layer, TurnDirection};
    use FaceDirection::*;

    fn cube() -> CubeState {
        CubeState::new(&CubeConfig::default())
    }

    fn grid(x: f32, y: f32, z: f32, spacing: f32) -> Vec3 {
        snap_to_grid(Vec3::new(x, y, z) * spacing)
    }

    /// Runs one full turn to completion.
    fn turn(cube: &mut CubeState, request: RotationRequest) {
        assert!(cube.request_rotation(request));
        while cube.tick(1.0 / 60.0).is_none() {}
    }

    #[test]
    fn new_cube_is_solved_and_colored() {
        let cube = cube();
        assert_eq!(cube.pieces().len(), PIECE_COUNT);
        assert!(cube.is_solved());
        let corner = cube
            .pieces()
            .iter()
            .find(|p| p.position == grid(1.0, 1.0, 1.0, cube.spacing()))
            .unwrap();
        assert_eq!(corner.face_colors[Top], WHITE);
        assert_eq!(corner.face_colors[Right], RED);
        assert_eq!(corner.face_colors[Front], GREEN);
        assert_eq!(corner.face_colors[Bottom], BLACK);
    }

    #[test]
    fn top_layer_holds_nine_pieces() {
        let cube = cube();
        let selected = cube.select(RotationRequest::new(
            Axis::Y,
            Layer::Positive,
            TurnDirection::Positive,
        ));
        assert_eq!(selected.len(), 9);
        for index in selected {
            assert_eq!(cube.pieces()[index].position.y, cube.spacing());
        }
    }

    #[test]
    fn positive_y_turn_moves_left_color_to_front() {
        let mut cube = cube();
        let spacing = cube.spacing();
        let start = grid(-1.0, 1.0, 0.0, spacing);
        let index = cube.pieces().iter().position(|p| p.position == start).unwrap();
        let before = cube.pieces()[index].face_colors;

        turn(
            &mut cube,
            RotationRequest::new(Axis::Y, Layer::Positive, TurnDirection::Positive),
        );

        let after = &cube.pieces()[index];
        assert_eq!(after.position, grid(0.0, 1.0, 1.0, spacing));
        assert_eq!(after.face_colors[Front], before[Left]);
        assert_eq!(after.face_colors[Front], ORANGE);
        assert_eq!(after.face_colors[Top], WHITE);
        assert!(!cube.is_solved());
    }

    #[test]
    fn four_turns_restore_every_piece() {
        for axis in Axis::ALL {
            for layer in Layer::ALL {
                let mut cube = cube();
                let before = cube.pieces().to_vec();
                for _ in 0..4 {
                    turn(&mut cube, RotationRequest::new(axis, layer, TurnDirection::Positive));
                }
                assert_eq!(cube.pieces(), before.as_slice(), "{axis:?} {layer:?}");
            }
        }
    }

    #[test]
    fn inverse_turn_solves_again() {
        let mut cube = cube();
        let request = RotationRequest::new(Axis::X, Layer::Negative, TurnDirection::Positive);
        turn(&mut cube, request);
        assert!(!cube.is_solved());
        turn(&mut cube, request.inverse());
        assert!(cube.is_solved());
        assert_eq!(cube.move_count(), 2);
    }

    #[test]
    fn middle_turn_unsolves_the_cube() {
        let mut cube = cube();
        let request = RotationRequest::new(Axis::Z, Layer::Middle, TurnDirection::Negative);
        turn(&mut cube, request);
        assert!(!cube.is_solved());
    }

    #[test]
    fn request_while_animating_is_rejected() {
        let mut cube = cube();
        assert!(cube.request_rotation(RotationRequest::new(
            Axis::Y,
            Layer::Positive,
            TurnDirection::Positive
        )));
        cube.tick(0.1);
        let before = cube.active_rotation().cloned().unwrap();

        assert!(!cube.request_rotation(RotationRequest::new(
            Axis::X,
            Layer::Negative,
            TurnDirection::Negative
        )));

        let after = cube.active_rotation().unwrap();
        assert_eq!(after.pieces(), before.pieces());
        assert_eq!(after.elapsed_angle, before.elapsed_angle);
        assert_eq!(after.request.direction, before.request.direction);
    }

    #[test]
    fn only_the_turning_slice_is_animated() {
        let mut cube = cube();
        let request = RotationRequest::new(Axis::Y, Layer::Positive, TurnDirection::Positive);
        cube.request_rotation(request);
        cube.tick(0.25);

        let moving = cube.active_rotation().unwrap().pieces().to_vec();
        for piece in cube.pieces() {
            let transform = cube.animated_transform(piece.index).unwrap();
            if moving.contains(&piece.index) {
                assert!(transform.rotation.angle_between(Quat::IDENTITY) > 0.1);
                assert!((transform.translation.y - piece.position.y).abs() < 1e-5);
            } else {
                assert_eq!(transform, cube.placement(piece));
            }
        }
    }

    #[test]
    fn positions_stay_on_the_grid() {
        use rand::Rng;
        use rand_chacha::ChaCha8Rng;
        use rand_chacha::rand_core::SeedableRng;

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut cube = cube();
        let spacing = cube.spacing();
        let allowed = [-spacing, 0.0, spacing].map(|v| snap_to_grid(Vec3::splat(v)).x);

        for _ in 0..50 {
            let request = RotationRequest::new(
                Axis::ALL[rng.random_range(0..3)],
                Layer::ALL[rng.random_range(0..3)],
                TurnDirection::ALL[rng.random_range(0..2)],
            );
            turn(&mut cube, request);
        }

        for piece in cube.pieces() {
            for coordinate in piece.position.to_array() {
                assert!(allowed.contains(&coordinate), "{coordinate} is off the grid");
            }
            assert_eq!(snap_to_grid(piece.position), piece.position);
        }
        for axis in Axis::ALL {
            for layer in Layer::ALL {
                let slice = cube.select(RotationRequest::new(axis, layer, TurnDirection::Positive));
                assert_eq!(slice.len(), 9);
            }
        }
    }

    #[test]
    fn reset_restores_the_solved_cube() {
        let mut cube = cube();
        turn(
            &mut cube,
            RotationRequest::new(Axis::Z, Layer::Positive, TurnDirection::Positive),
        );
        cube.request_rotation(RotationRequest::new(
            Axis::X,
            Layer::Middle,
            TurnDirection::Positive,
        ));
        cube.reset();
        assert!(cube.is_solved());
        assert!(!cube.is_animating());
        assert_eq!(cube.move_count(), 0);
    }
}
