use glam::{Mat4, Vec3};

/// Camera movement and control abstraction
pub trait CameraController {
    /// Advance time-dependent motion by `delta_time` seconds
    fn update(&mut self, delta_time: f32);

    /// Get the view matrix for rendering
    fn view_matrix(&self) -> Mat4;

    /// Get the camera position in world space
    fn position(&self) -> Vec3;

    /// Get the camera forward direction
    fn forward(&self) -> Vec3;

    /// Vertical field of view in degrees
    fn fov_degrees(&self) -> f32;
}
