//! Face-color permutation for a quarter turn.
use crate::utils::objects::{Axis, FaceColors, FaceDirection, TurnDirection};

/// Relabels the face colors of a piece after a quarter turn about `axis`.
///
/// Each color moves to the face its normal is carried onto by the turn. The two
/// faces crossed by the axis keep their colors; the four others form a 4-cycle.
/// For a positive turn about Y this is Front <- Left, Left <- Back, Back <- Right,
/// Right <- Front.
pub fn permute(face_colors: &FaceColors, axis: Axis, direction: TurnDirection) -> FaceColors {
    let mut permuted = *face_colors;
    for face in FaceDirection::ALL {
        permuted[face.turned(axis, direction)] = face_colors[face];
    }
    permuted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::cube_constants::*;
    use FaceDirection::*;

    fn distinct_colors() -> FaceColors {
        FaceColors::new([WHITE, YELLOW, ORANGE, RED, GREEN, BLUE])
    }

    #[test]
    fn positive_y_cycles_side_faces() {
        let before = distinct_colors();
        let after = permute(&before, Axis::Y, TurnDirection::Positive);
        assert_eq!(after[Front], before[Left]);
        assert_eq!(after[Left], before[Back]);
        assert_eq!(after[Back], before[Right]);
        assert_eq!(after[Right], before[Front]);
    }

    #[test]
    fn negative_y_is_the_inverse_cycle() {
        let before = distinct_colors();
        let after = permute(&before, Axis::Y, TurnDirection::Negative);
        assert_eq!(after[Left], before[Front]);
        assert_eq!(after[Back], before[Left]);
        assert_eq!(after[Right], before[Back]);
        assert_eq!(after[Front], before[Right]);
        assert_eq!(permute(&after, Axis::Y, TurnDirection::Positive), before);
    }

    #[test]
    fn faces_crossed_by_the_axis_are_untouched() {
        let before = distinct_colors();
        for direction in TurnDirection::ALL {
            let y = permute(&before, Axis::Y, direction);
            assert_eq!((y[Top], y[Bottom]), (before[Top], before[Bottom]));
            let x = permute(&before, Axis::X, direction);
            assert_eq!((x[Left], x[Right]), (before[Left], before[Right]));
            let z = permute(&before, Axis::Z, direction);
            assert_eq!((z[Front], z[Back]), (before[Front], before[Back]));
        }
    }

    #[test]
    fn x_and_z_turns_move_colors_around_their_axis() {
        let before = distinct_colors();
        let x = permute(&before, Axis::X, TurnDirection::Positive);
        assert_eq!(x[Front], before[Top]);
        assert_eq!(x[Bottom], before[Front]);
        let z = permute(&before, Axis::Z, TurnDirection::Positive);
        assert_eq!(z[Top], before[Right]);
        assert_eq!(z[Left], before[Top]);
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        let before = distinct_colors();
        for axis in Axis::ALL {
            for direction in TurnDirection::ALL {
                let after = (0..4).fold(before, |colors, _| permute(&colors, axis, direction));
                assert_eq!(after, before);
            }
        }
    }
}
