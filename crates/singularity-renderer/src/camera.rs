//! Orbit camera for the funnel scene

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

/// Camera uniform for GPU
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _padding: f32,
}

/// Default eye position of the funnel scene
pub const DEFAULT_EYE: Vec3 = Vec3::new(15.0, 10.0, 15.0);

/// Orbit speed when idle, in radians per second (one turn every two minutes)
pub const AUTO_ROTATE_SPEED: f32 = std::f32::consts::PI / 60.0;

pub struct OrbitCamera {
    pub distance: f32,
    pub rotation: Quat,
    pub target: Vec3,
    pub aspect: f32,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
    pub auto_rotate: bool,
}

impl OrbitCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self::looking_from(DEFAULT_EYE, Vec3::ZERO, width, height)
    }

    /// Camera at `eye` facing `target`, with world y up
    pub fn looking_from(eye: Vec3, target: Vec3, width: u32, height: u32) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(1.0);
        let direction = offset / distance;

        let yaw = direction.x.atan2(direction.z);
        let pitch = -direction.y.clamp(-1.0, 1.0).asin();
        let rotation = Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch);

        Self {
            distance,
            rotation,
            target,
            aspect: aspect(width, height),
            fovy: 60.0_f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
            auto_rotate: true,
        }
    }

    pub fn position(&self) -> Vec3 {
        let offset = self.rotation * Vec3::new(0.0, 0.0, self.distance);
        self.target + offset
    }

    pub fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        let up = self.rotation * Vec3::Y;
        let yaw_rotation = Quat::from_axis_angle(up, delta_x);

        let right = self.rotation * Vec3::X;
        let pitch_rotation = Quat::from_axis_angle(right, -delta_y);

        self.rotation = yaw_rotation * pitch_rotation * self.rotation;
        self.rotation = self.rotation.normalize();
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance + delta).clamp(2.0, 200.0);
    }

    /// Orbit around the world y axis for `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.auto_rotate {
            let orbit = Quat::from_rotation_y(AUTO_ROTATE_SPEED * dt);
            self.rotation = (orbit * self.rotation).normalize();
        }
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        let position = self.position();
        let rotation_matrix = Mat4::from_quat(self.rotation.conjugate());
        let translation_matrix = Mat4::from_translation(-position);
        let view = rotation_matrix * translation_matrix;
        let proj = Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.build_view_projection_matrix().to_cols_array_2d(),
            position: self.position().to_array(),
            _padding: 0.0,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = aspect(width, height);
    }
}

fn aspect(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_starts_at_default_eye() {
        let camera = OrbitCamera::new(1600, 900);
        let position = camera.position();
        assert_relative_eq!(position.x, 15.0, epsilon = 1e-4);
        assert_relative_eq!(position.y, 10.0, epsilon = 1e-4);
        assert_relative_eq!(position.z, 15.0, epsilon = 1e-4);
        assert_relative_eq!(camera.fovy, 60.0_f32.to_radians());
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let camera = OrbitCamera::new(800, 600);
        let clip = camera.build_view_projection_matrix() * Vec3::ZERO.extend(1.0);
        assert_relative_eq!(clip.x / clip.w, 0.0, epsilon = 1e-5);
        assert_relative_eq!(clip.y / clip.w, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_auto_rotate_keeps_height_and_distance() {
        let mut camera = OrbitCamera::new(800, 600);
        let before = camera.position();
        camera.update(30.0);
        let after = camera.position();

        assert_relative_eq!(after.y, before.y, epsilon = 1e-4);
        assert_relative_eq!(after.length(), before.length(), epsilon = 1e-4);
        // Half a turn after 60 s
        camera.update(30.0);
        let opposite = camera.position();
        assert_relative_eq!(opposite.x, -before.x, epsilon = 1e-3);
        assert_relative_eq!(opposite.z, -before.z, epsilon = 1e-3);
    }

    #[test]
    fn test_auto_rotate_can_be_disabled() {
        let mut camera = OrbitCamera::new(800, 600);
        camera.auto_rotate = false;
        let before = camera.position();
        camera.update(10.0);
        assert_eq!(camera.position(), before);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = OrbitCamera::new(800, 600);
        camera.zoom(-1000.0);
        assert_eq!(camera.distance, 2.0);
        camera.zoom(1000.0);
        assert_eq!(camera.distance, 200.0);
    }
}
