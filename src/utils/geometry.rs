//! Piece mesh generation and the rebuild that swaps a piece's mesh asset.
use bevy::asset::RenderAssetUsages;
use bevy::color::ColorToComponents;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::utils::constants::mesh_constants::{PIECE_INDEX_COUNT, PIECE_VERTEX_COUNT};
use crate::utils::objects::{FaceColors, FaceDirection};

/// Corners of each face of the unit cube, counter-clockwise seen from outside.
fn face_corners(face: FaceDirection) -> [[f32; 3]; 4] {
    match face {
        FaceDirection::Top => [
            [-0.5, 0.5, 0.5],
            [0.5, 0.5, 0.5],
            [0.5, 0.5, -0.5],
            [-0.5, 0.5, -0.5],
        ],
        FaceDirection::Bottom => [
            [-0.5, -0.5, -0.5],
            [0.5, -0.5, -0.5],
            [0.5, -0.5, 0.5],
            [-0.5, -0.5, 0.5],
        ],
        FaceDirection::Left => [
            [-0.5, -0.5, -0.5],
            [-0.5, -0.5, 0.5],
            [-0.5, 0.5, 0.5],
            [-0.5, 0.5, -0.5],
        ],
        FaceDirection::Right => [
            [0.5, -0.5, 0.5],
            [0.5, -0.5, -0.5],
            [0.5, 0.5, -0.5],
            [0.5, 0.5, 0.5],
        ],
        FaceDirection::Front => [
            [-0.5, -0.5, 0.5],
            [0.5, -0.5, 0.5],
            [0.5, 0.5, 0.5],
            [-0.5, 0.5, 0.5],
        ],
        FaceDirection::Back => [
            [0.5, -0.5, -0.5],
            [-0.5, -0.5, -0.5],
            [-0.5, 0.5, -0.5],
            [0.5, 0.5, -0.5],
        ],
    }
}

/// Builds the mesh of one piece: a unit cube with 4 unshared vertices and
/// 2 triangles per face, every vertex of a face carrying that face's color.
pub fn build_piece_mesh(face_colors: &FaceColors) -> Mesh {
    let mut positions = Vec::with_capacity(PIECE_VERTEX_COUNT);
    let mut normals = Vec::with_capacity(PIECE_VERTEX_COUNT);
    let mut colors = Vec::with_capacity(PIECE_VERTEX_COUNT);
    let mut indices = Vec::with_capacity(PIECE_INDEX_COUNT);

    for (face, color) in face_colors.iter() {
        let base = positions.len() as u32;
        positions.extend(face_corners(face));
        normals.extend([face.normal().to_array(); 4]);
        colors.extend([color.to_linear().to_f32_array(); 4]);
        indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
        .with_inserted_indices(Indices::U32(indices))
}

/// Replaces the mesh behind `handle` with one built from `face_colors`.
/// The previous mesh asset is released.
pub fn rebuild_piece_mesh(
    meshes: &mut Assets<Mesh>,
    handle: &mut Handle<Mesh>,
    face_colors: &FaceColors,
) {
    let fresh = meshes.add(build_piece_mesh(face_colors));
    let stale = std::mem::replace(handle, fresh);
    meshes.remove(&stale);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::cube_constants::*;
    use bevy::mesh::VertexAttributeValues;

    fn sample_colors() -> FaceColors {
        FaceColors::new([WHITE, YELLOW, ORANGE, RED, GREEN, BLUE])
    }

    fn positions(mesh: &Mesh) -> Vec<Vec3> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(values)) => {
                values.iter().map(|p| Vec3::from_array(*p)).collect()
            }
            other => panic!("unexpected positions {other:?}"),
        }
    }

    fn indices(mesh: &Mesh) -> Vec<usize> {
        mesh.indices().expect("piece mesh is indexed").iter().collect()
    }

    #[test]
    fn mesh_has_unshared_faces() {
        let mesh = build_piece_mesh(&sample_colors());
        assert_eq!(mesh.count_vertices(), PIECE_VERTEX_COUNT);
        assert_eq!(indices(&mesh).len(), PIECE_INDEX_COUNT);
    }

    #[test]
    fn triangles_face_outwards() {
        let mesh = build_piece_mesh(&sample_colors());
        let positions = positions(&mesh);
        for triangle in indices(&mesh).chunks(3) {
            let [a, b, c] = [0, 1, 2].map(|corner| positions[triangle[corner]]);
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "triangle {triangle:?} is wound inwards");
        }
    }

    #[test]
    fn every_face_carries_its_color() {
        let face_colors = sample_colors();
        let mesh = build_piece_mesh(&face_colors);
        let Some(VertexAttributeValues::Float32x4(colors)) = mesh.attribute(Mesh::ATTRIBUTE_COLOR)
        else {
            panic!("piece mesh has no vertex colors");
        };
        for (face_index, (_, color)) in face_colors.iter().enumerate() {
            let expected = color.to_linear().to_f32_array();
            for vertex in 0..4 {
                assert_eq!(colors[face_index * 4 + vertex], expected);
            }
        }
    }

    #[test]
    fn rebuild_swaps_and_releases_the_old_mesh() {
        let mut meshes = Assets::<Mesh>::default();
        let mut handle = meshes.add(build_piece_mesh(&FaceColors::default()));
        let old_id = handle.id();

        rebuild_piece_mesh(&mut meshes, &mut handle, &sample_colors());

        assert_ne!(handle.id(), old_id);
        assert!(meshes.get(old_id).is_none());
        assert!(meshes.get(&handle).is_some());
        assert_eq!(meshes.len(), 1);

        rebuild_piece_mesh(&mut meshes, &mut handle, &sample_colors());
        assert_eq!(meshes.len(), 1);
    }
}
