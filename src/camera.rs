use glam::{Mat4, Vec3};

use crate::traits::CameraController;

// Default camera values
pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const SPEED: f32 = 2.0;
pub const SENSITIVITY: f32 = 0.1;
pub const FOV: f32 = 45.0;

pub const MIN_FOV: f32 = 1.0;
pub const MAX_FOV: f32 = 45.0;
pub const PITCH_LIMIT: f32 = 89.0;

/// Share of each scaled mouse delta added to the look rate in smoothed mode
pub const LOOK_SMOOTHING: f32 = 0.1;
/// Velocity gained per second of held movement input in smoothed mode
pub const MOVE_SMOOTHING: f32 = 0.3;

/// Logical movement direction, independent of any window system's key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Movement {
    pub const ALL: [Movement; 6] = [
        Movement::Forward,
        Movement::Backward,
        Movement::Left,
        Movement::Right,
        Movement::Up,
        Movement::Down,
    ];
}

/// How input is turned into camera motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionMode {
    /// Input moves and rotates the camera on the spot
    #[default]
    Immediate,
    /// Input feeds velocity and look-rate accumulators integrated once per frame
    Smoothed,
}

/// Accumulated state of smoothed mode.
///
/// Velocities are in basis units per second along the camera's own
/// front/right/up axes, look rates in degrees per second.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SmoothedMotion {
    pub forward: f32,
    pub right: f32,
    pub up: f32,
    pub yaw_rate: f32,
    pub pitch_rate: f32,
}

impl SmoothedMotion {
    fn accumulate(&mut self, direction: Movement, amount: f32) {
        match direction {
            Movement::Forward => self.forward += amount,
            Movement::Backward => self.forward -= amount,
            Movement::Right => self.right += amount,
            Movement::Left => self.right -= amount,
            Movement::Up => self.up += amount,
            Movement::Down => self.up -= amount,
        }
    }
}

// The accumulators only exist while smoothing is on, so switching modes
// always starts from rest.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Immediate,
    Smoothed(SmoothedMotion),
}

/// Free-flying camera driven by Euler angles.
///
/// `front`, `right` and `up` are derived from yaw, pitch and the world-up
/// reference and are rebuilt from scratch after every orientation change.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    pub movement_speed: f32,
    /// Transient speed boost, e.g. while sprinting
    pub velocity_multiplier: f32,
    pub mouse_sensitivity: f32,
    fov: f32,
    motion: Motion,
}

impl Camera {
    /// Camera at `position` looking down -Z with a +Y world up
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::Y, YAW, PITCH)
    }

    /// Camera with explicit world up and yaw/pitch in degrees
    pub fn with_orientation(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            world_up,
            yaw,
            pitch,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            movement_speed: SPEED,
            velocity_multiplier: 1.0,
            mouse_sensitivity: SENSITIVITY,
            fov: FOV,
            motion: Motion::Immediate,
        };
        camera.update_camera_vectors();
        camera
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the field of view in degrees, clamped to `[MIN_FOV, MAX_FOV]`
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov.clamp(MIN_FOV, MAX_FOV);
    }

    pub fn mode(&self) -> MotionMode {
        match self.motion {
            Motion::Immediate => MotionMode::Immediate,
            Motion::Smoothed(_) => MotionMode::Smoothed,
        }
    }

    /// Smoothed-mode accumulators, `None` in immediate mode
    pub fn smoothed_motion(&self) -> Option<&SmoothedMotion> {
        match &self.motion {
            Motion::Immediate => None,
            Motion::Smoothed(state) => Some(state),
        }
    }

    /// Switch input-response mode. Any transition starts from zeroed accumulators.
    pub fn set_mode(&mut self, mode: MotionMode) {
        if self.mode() == mode {
            return;
        }
        self.motion = match mode {
            MotionMode::Immediate => Motion::Immediate,
            MotionMode::Smoothed => Motion::Smoothed(SmoothedMotion::default()),
        };
    }

    /// Flip between immediate and smoothed mode, returning the new mode
    pub fn toggle_smoothing(&mut self) -> MotionMode {
        let next = match self.mode() {
            MotionMode::Immediate => MotionMode::Smoothed,
            MotionMode::Smoothed => MotionMode::Immediate,
        };
        self.set_mode(next);
        next
    }

    /// Zero the smoothed velocity and look-rate accumulators
    pub fn reset_motion_accumulators(&mut self) {
        if let Motion::Smoothed(state) = &mut self.motion {
            *state = SmoothedMotion::default();
        }
    }

    /// Rotate from a raw pointer delta.
    ///
    /// In immediate mode yaw and pitch change at once; in smoothed mode a
    /// fraction of the delta is added to the look rate and applied by
    /// [`Camera::integrate_smoothed_look`].
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        let dx = dx * self.mouse_sensitivity;
        let dy = dy * self.mouse_sensitivity;

        if let Motion::Smoothed(state) = &mut self.motion {
            state.yaw_rate += dx * LOOK_SMOOTHING;
            state.pitch_rate += dy * LOOK_SMOOTHING;
            return;
        }

        self.yaw += dx;
        self.pitch += dy;
        if constrain_pitch {
            self.constrain_pitch();
        }
        self.update_camera_vectors();
    }

    /// Move one step in a logical direction.
    ///
    /// Immediate mode translates along the current basis by
    /// `movement_speed * delta_time * velocity_multiplier`. Smoothed mode only
    /// accelerates; the position changes in [`Camera::integrate_smoothed_movement`].
    pub fn apply_movement(&mut self, direction: Movement, delta_time: f32) {
        if let Motion::Smoothed(state) = &mut self.motion {
            state.accumulate(direction, MOVE_SMOOTHING * delta_time * self.velocity_multiplier);
            return;
        }

        let velocity = self.movement_speed * delta_time * self.velocity_multiplier;
        self.position += self.direction_vector(direction) * velocity;
    }

    pub fn integrate_smoothed_movement(&mut self, delta_time: f32) {
        if let Motion::Smoothed(state) = self.motion {
            self.position += self.front * state.forward * delta_time;
            self.position += self.right * state.right * delta_time;
            self.position += self.up * state.up * delta_time;
        }
    }

    pub fn integrate_smoothed_look(&mut self, delta_time: f32, constrain_pitch: bool) {
        if let Motion::Smoothed(state) = self.motion {
            self.yaw += state.yaw_rate * delta_time;
            self.pitch += state.pitch_rate * delta_time;
            if constrain_pitch {
                self.constrain_pitch();
            }
            self.update_camera_vectors();
        }
    }

    /// Per-frame integration: movement first, then look, pitch constrained.
    /// Call after all input for the frame and before reading the view matrix.
    pub fn integrate(&mut self, delta_time: f32) {
        self.integrate_smoothed_movement(delta_time);
        self.integrate_smoothed_look(delta_time, true);
    }

    /// Zoom by narrowing the field of view; positive amounts zoom in
    pub fn apply_scroll(&mut self, amount: f32) {
        self.fov = (self.fov - amount).clamp(MIN_FOV, MAX_FOV);
    }

    fn direction_vector(&self, direction: Movement) -> Vec3 {
        match direction {
            Movement::Forward => self.front,
            Movement::Backward => -self.front,
            Movement::Right => self.right,
            Movement::Left => -self.right,
            Movement::Up => self.up,
            Movement::Down => -self.up,
        }
    }

    fn constrain_pitch(&mut self) {
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    fn update_camera_vectors(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();

        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        // right shrinks towards zero as pitch nears the poles
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl CameraController for Camera {
    fn update(&mut self, delta_time: f32) {
        self.integrate(delta_time);
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.front
    }

    fn fov_degrees(&self) -> f32 {
        self.fov
    }
}
