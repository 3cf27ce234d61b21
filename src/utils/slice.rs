//! Slice selection: which pieces sit in a given layer.
use crate::utils::objects::{Axis, Layer, Piece};

/// Returns the indices of the pieces whose coordinate along `axis` lies within
/// `tolerance` of the plane of `layer`. An empty result is valid.
pub fn select_slice(
    pieces: &[Piece],
    axis: Axis,
    layer: Layer,
    spacing: f32,
    tolerance: f32,
) -> Vec<usize> {
    let plane = layer.coordinate() * spacing;
    pieces
        .iter()
        .filter(|piece| (axis.component(piece.position) - plane).abs() < tolerance)
        .map(|piece| piece.index)
        .collect()
}
