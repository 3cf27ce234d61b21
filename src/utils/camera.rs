use bevy::prelude::*;

use crate::utils::constants::camera_3d_constants::*;
use crate::utils::objects::OrbitCameraMarker;

pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitCamera>()
            .add_systems(Update, (orbit_camera_inputs, apply_orbit_camera).chain());
    }
}

/// Camera orbiting the origin, described by its distance and two angles.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub distance: f32,
    /// Angle to the ZY plane, turning around the vertical axis.
    pub angle_zy: f32,
    /// Angle to the ZX plane, the elevation.
    pub angle_zx: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            distance: CAMERA_3D_INITIAL_DISTANCE,
            angle_zy: CAMERA_3D_INITIAL_ANGLE_ZY_RAD,
            angle_zx: CAMERA_3D_INITIAL_ANGLE_ZX_RAD,
        }
    }
}

impl OrbitCamera {
    fn point_from_angles(distance: f32, angle_zy: f32, angle_zx: f32) -> Vec3 {
        Vec3::new(
            distance * angle_zx.cos() * angle_zy.sin(),
            distance * angle_zx.sin(),
            distance * angle_zx.cos() * angle_zy.cos(),
        )
    }

    pub fn position(&self) -> Vec3 {
        Self::point_from_angles(self.distance, self.angle_zy, self.angle_zx)
    }

    /// Unit up vector: the orbit point a quarter turn further in elevation.
    pub fn up(&self) -> Vec3 {
        Self::point_from_angles(
            self.distance,
            self.angle_zy,
            self.angle_zx + std::f32::consts::FRAC_PI_2,
        )
        .normalize()
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(Vec3::ZERO, self.up())
    }

    pub fn zoom_out(&mut self) {
        self.distance = (self.distance * CAMERA_3D_DISTANCE_SCALE).min(CAMERA_3D_MAX_DISTANCE);
    }

    pub fn zoom_in(&mut self) {
        self.distance = (self.distance / CAMERA_3D_DISTANCE_SCALE).max(CAMERA_3D_MIN_DISTANCE);
    }
}

/// Orbit steps on key presses: Left/Right turn around, U/D change the elevation,
/// Up/Down zoom.
pub fn orbit_camera_inputs(keyboard: Res<ButtonInput<KeyCode>>, mut orbit: ResMut<OrbitCamera>) {
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        orbit.angle_zy -= CAMERA_3D_ANGLE_STEP_RAD;
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        orbit.angle_zy += CAMERA_3D_ANGLE_STEP_RAD;
    }
    if keyboard.just_pressed(KeyCode::KeyU) {
        orbit.angle_zx += CAMERA_3D_ANGLE_STEP_RAD;
    }
    if keyboard.just_pressed(KeyCode::KeyD) {
        orbit.angle_zx -= CAMERA_3D_ANGLE_STEP_RAD;
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        orbit.zoom_out();
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        orbit.zoom_in();
    }
}

/// Moves the camera entity to the orbit position, looking at the origin.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut camera_query: Query<&mut Transform, With<OrbitCameraMarker>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = orbit.transform();
}
