//! Debug visualisation of the selected slice.
use bevy::prelude::*;

use crate::utils::constants::cube_constants::LAYERS_PER_AXIS;
use crate::utils::constants::game_constants::SLICE_OUTLINE_COLOR;
use crate::utils::cube::CubeState;
use crate::utils::objects::{ShowSliceOutline, SliceCursor};

/// Box enclosing the slice under the cursor.
pub fn slice_outline(cursor: &SliceCursor, spacing: f32) -> Transform {
    let axis = cursor.axis.unit();
    let full = spacing * LAYERS_PER_AXIS as f32;
    let size = Vec3::splat(full) - axis * (full - spacing);
    Transform::from_translation(axis * cursor.layer.coordinate() * spacing).with_scale(size)
}

/// Draws the selected slice outline when enabled with G.
pub fn visualize_selected_slice(
    mut gizmos: Gizmos,
    cube: Res<CubeState>,
    cursor: Res<SliceCursor>,
    show: Res<ShowSliceOutline>,
) {
    if !show.0 {
        return;
    }
    gizmos.cuboid(slice_outline(&cursor, cube.spacing()), SLICE_OUTLINE_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::objects::{Axis, Layer};

    #[test]
    fn outline_is_one_layer_thick() {
        let cursor = SliceCursor {
            axis: Axis::Z,
            layer: Layer::Negative,
        };
        let outline = slice_outline(&cursor, 0.26);
        assert!(outline.translation.distance(Vec3::new(0.0, 0.0, -0.26)) < 1e-6);
        assert!(outline.scale.distance(Vec3::new(0.78, 0.78, 0.26)) < 1e-5);
    }
}
