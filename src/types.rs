use glam::Mat4;

use crate::traits::CameraController;

pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 10000.0;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub fov: f32, // degrees
    pub forward: [f32; 3],
    pub time: f32, // Animation time for the scalar field
}

impl CameraUniform {
    /// Snapshot a camera for the frame. `aspect` is width / height.
    pub fn new<C: CameraController + ?Sized>(camera: &C, aspect: f32, time: f32) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            projection: projection_matrix(camera.fov_degrees(), aspect).to_cols_array_2d(),
            position: camera.position().to_array(),
            fov: camera.fov_degrees(),
            forward: camera.forward().to_array(),
            time,
        }
    }
}

/// Right-handed perspective with a [0, 1] depth range
pub fn projection_matrix(fov_degrees: f32, aspect: f32) -> Mat4 {
    Mat4::perspective_rh(fov_degrees.to_radians(), aspect, Z_NEAR, Z_FAR)
}

/// Flashlight attached to the camera
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLightUniform {
    pub position: [f32; 3],
    pub cut_off: f32, // cosine of the inner cone angle
    pub direction: [f32; 3],
    pub outer_cut_off: f32, // cosine of the outer cone angle
    pub ambient: [f32; 3],
    pub constant: f32,
    pub diffuse: [f32; 3],
    pub linear: f32,
    pub specular: [f32; 3],
    pub quadratic: f32,
    pub on: f32, // 1.0 if lit, 0.0 if off
    pub _pad: [f32; 3],
}

impl SpotLightUniform {
    pub const INNER_ANGLE: f32 = 12.5;
    pub const OUTER_ANGLE: f32 = 15.0;
    pub const AMBIENT: [f32; 3] = [0.1, 0.1, 0.1];

    /// Spotlight at the camera eye pointing along its view direction
    pub fn from_camera<C: CameraController + ?Sized>(camera: &C, on: bool) -> Self {
        Self {
            position: camera.position().to_array(),
            cut_off: Self::INNER_ANGLE.to_radians().cos(),
            direction: camera.forward().to_array(),
            outer_cut_off: Self::OUTER_ANGLE.to_radians().cos(),
            ambient: Self::AMBIENT,
            constant: 1.0,
            diffuse: [1.0, 1.0, 1.0],
            linear: 0.09,
            specular: [1.0, 1.0, 1.0],
            quadratic: 0.032,
            on: if on { 1.0 } else { 0.0 },
            _pad: [0.0; 3],
        }
    }
}
