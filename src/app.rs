use crate::camera::{Camera, MotionMode, Movement};
use crate::config::AppConfig;
use crate::core::{Button, Controller};
use crate::field::{FieldSampler, ScalarField, DEFAULT_GRID_SIZE, DEFAULT_ISO_LEVEL};
use crate::frame::FrameInfo;
use crate::traits::CameraController;
use crate::types::{CameraUniform, SpotLightUniform};

/// Field animation runs at a quarter of wall-clock speed
pub const FIELD_TIME_SCALE: f32 = 0.25;

const MOVEMENT_BINDINGS: [(Button, Movement); 6] = [
    (Button::KeyW, Movement::Forward),
    (Button::KeyS, Movement::Backward),
    (Button::KeyA, Movement::Left),
    (Button::KeyD, Movement::Right),
    (Button::KeyE, Movement::Up),
    (Button::KeyQ, Movement::Down),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolygonMode {
    #[default]
    Fill,
    Line,
}

/// Sampled scalar field handed to surface extraction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldGrid<'a> {
    /// `(cells + 1)^3` node values, x-major
    pub samples: &'a [f32],
    pub cells: u32,
    pub iso_level: f32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate<'a> {
    pub camera: CameraUniform,
    pub spot_light: SpotLightUniform,
    pub polygon_mode: PolygonMode,
    pub sampler: FieldSampler,
    pub field: FieldGrid<'a>,
    /// `Some(active)` on the frame fly mode was entered or left
    pub fly_mode_changed: Option<bool>,
}

/// Root state of the viewer, owned by the main loop
#[derive(Debug, Clone)]
pub struct AppState {
    pub camera: Camera,
    pub field: ScalarField,
    pub sampler: FieldSampler,
    pub flashlight: bool,
    pub polygon_mode: PolygonMode,
    /// Movement and look input only reach the camera while flying
    pub fly_mode: bool,
    pub sprint_multiplier: f32,
    pub iso_level: f32,
    field_samples: Vec<f32>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            camera: config.camera.build(),
            field: ScalarField::new(),
            sampler: config.sampler,
            flashlight: false,
            polygon_mode: PolygonMode::default(),
            fly_mode: false,
            sprint_multiplier: config.camera.sprint_multiplier,
            iso_level: DEFAULT_ISO_LEVEL,
            field_samples: Vec::new(),
        }
    }

    /// Field values at the grid nodes for the current frame
    pub fn field_samples(&self) -> &[f32] {
        &self.field_samples
    }

    /// Run one frame: toggles, input, integration, then the renderer snapshot.
    /// `aspect` is the viewport width / height.
    pub fn update(
        &mut self,
        controller: &dyn Controller,
        frame: &FrameInfo,
        aspect: f32,
    ) -> FrameUpdate<'_> {
        self.handle_toggles(controller);

        let fly_mode = controller.is_down(Button::MouseRight);
        let fly_mode_changed = (fly_mode != self.fly_mode).then_some(fly_mode);
        if let Some(active) = fly_mode_changed {
            log::debug!("Fly mode {}", if active { "on" } else { "off" });
        }
        self.fly_mode = fly_mode;

        self.camera.velocity_multiplier = if controller.is_down(Button::Shift) {
            self.sprint_multiplier
        } else {
            1.0
        };

        if self.fly_mode {
            self.apply_flight_input(controller, frame.delta);
        }

        self.camera.update(frame.delta);

        self.field.set_time(frame.time * FIELD_TIME_SCALE);
        self.field
            .sample_grid_into(self.sampler, DEFAULT_GRID_SIZE, &mut self.field_samples);

        FrameUpdate {
            camera: CameraUniform::new(&self.camera, aspect, frame.time),
            spot_light: SpotLightUniform::from_camera(&self.camera, self.flashlight),
            polygon_mode: self.polygon_mode,
            sampler: self.sampler,
            field: FieldGrid {
                samples: &self.field_samples,
                cells: DEFAULT_GRID_SIZE,
                iso_level: self.iso_level,
            },
            fly_mode_changed,
        }
    }

    fn handle_toggles(&mut self, controller: &dyn Controller) {
        if controller.just_pressed(Button::F8) {
            let mode = self.camera.toggle_smoothing();
            log::info!(
                "Smooth movement {}",
                if mode == MotionMode::Smoothed { "enabled" } else { "disabled" }
            );
        }
        if controller.just_pressed(Button::F7) {
            self.sampler = self.sampler.next();
            log::info!("Field sampler: {}", self.sampler.name());
        }
        if controller.just_pressed(Button::KeyF) {
            self.flashlight = !self.flashlight;
            log::info!("Flashlight {}", if self.flashlight { "on" } else { "off" });
        }
        if controller.just_pressed(Button::KeyR) {
            self.polygon_mode = PolygonMode::Fill;
        }
        if controller.just_pressed(Button::KeyT) {
            self.polygon_mode = PolygonMode::Line;
        }
    }

    fn apply_flight_input(&mut self, controller: &dyn Controller, delta: f32) {
        for (button, movement) in MOVEMENT_BINDINGS {
            if controller.is_down(button) {
                self.camera.apply_movement(movement, delta);
            }
        }

        let (dx, dy) = controller.mouse_delta();
        if dx != 0.0 || dy != 0.0 {
            // screen y grows downwards, pitch grows upwards
            self.camera.apply_mouse_delta(dx, -dy, true);
        }

        let scroll = controller.scroll_delta();
        if scroll != 0.0 {
            self.camera.apply_scroll(scroll);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[derive(Default)]
    struct MockController {
        pressed: Vec<Button>,
        fresh: Vec<Button>,
        mouse: (f32, f32),
        scroll: f32,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }

        fn just_pressed(&self, button: Button) -> bool {
            self.fresh.contains(&button)
        }

        fn mouse_delta(&self) -> (f32, f32) {
            self.mouse
        }

        fn scroll_delta(&self) -> f32 {
            self.scroll
        }
    }

    fn frame(delta: f32) -> FrameInfo {
        FrameInfo::new(1, 1.0, delta)
    }

    #[test]
    fn test_no_motion_outside_fly_mode() {
        let mut state = AppState::default();
        let start = state.camera.position();
        let controller = MockController {
            pressed: vec![Button::KeyW],
            mouse: (40.0, 10.0),
            scroll: 3.0,
            ..Default::default()
        };

        state.update(&controller, &frame(0.1), 1.0);

        assert_eq!(state.camera.position(), start);
        assert_eq!(state.camera.yaw(), crate::camera::YAW);
        assert_eq!(state.camera.fov_degrees(), crate::camera::FOV);
    }

    #[test]
    fn test_fly_mode_moves_forward() {
        let mut state = AppState::default();
        let controller = MockController {
            pressed: vec![Button::MouseRight, Button::KeyW],
            ..Default::default()
        };

        let update = state.update(&controller, &frame(0.5), 1.0);

        assert_eq!(update.fly_mode_changed, Some(true));
        assert!(state.camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-5));

        let update = state.update(&controller, &frame(0.5), 1.0);
        assert_eq!(update.fly_mode_changed, None);
    }

    #[test]
    fn test_sprint_scales_velocity() {
        let mut walking = AppState::default();
        let mut sprinting = AppState::default();
        let walk = MockController {
            pressed: vec![Button::MouseRight, Button::KeyD],
            ..Default::default()
        };
        let sprint = MockController {
            pressed: vec![Button::MouseRight, Button::KeyD, Button::Shift],
            ..Default::default()
        };

        walking.update(&walk, &frame(0.1), 1.0);
        sprinting.update(&sprint, &frame(0.1), 1.0);

        let walked = walking.camera.position().x;
        let sprinted = sprinting.camera.position().x;
        assert!((sprinted - walked * 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_mouse_y_inverted() {
        let mut state = AppState::default();
        let controller = MockController {
            pressed: vec![Button::MouseRight],
            mouse: (0.0, -50.0),
            ..Default::default()
        };

        state.update(&controller, &frame(0.016), 1.0);
        // moving the mouse up looks up
        assert!((state.camera.pitch() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_scroll_zooms_in_fly_mode() {
        let mut state = AppState::default();
        let controller = MockController {
            pressed: vec![Button::MouseRight],
            scroll: 100.0,
            ..Default::default()
        };

        let update = state.update(&controller, &frame(0.016), 1.0);
        assert_eq!(update.camera.fov, crate::camera::MIN_FOV);
    }

    #[test]
    fn test_f8_toggles_smoothing() {
        let mut state = AppState::default();
        let toggle = MockController {
            fresh: vec![Button::F8],
            ..Default::default()
        };

        state.update(&toggle, &frame(0.016), 1.0);
        assert_eq!(state.camera.mode(), MotionMode::Smoothed);

        state.update(&toggle, &frame(0.016), 1.0);
        assert_eq!(state.camera.mode(), MotionMode::Immediate);
    }

    #[test]
    fn test_smoothed_flight_builds_up() {
        let mut state = AppState::default();
        state.camera.set_mode(MotionMode::Smoothed);
        let controller = MockController {
            pressed: vec![Button::MouseRight, Button::KeyW],
            ..Default::default()
        };

        let mut last = state.camera.position().z;
        for _ in 0..5 {
            state.update(&controller, &frame(0.1), 1.0);
            let z = state.camera.position().z;
            assert!(z < last);
            last = z;
        }
    }

    #[test]
    fn test_toggles() {
        let mut state = AppState::default();
        let controller = MockController {
            fresh: vec![Button::F7, Button::KeyF, Button::KeyT],
            ..Default::default()
        };

        let update = state.update(&controller, &frame(0.016), 1.0);

        assert_eq!(update.sampler, FieldSampler::MovingLines);
        assert_eq!(update.spot_light.on, 1.0);
        assert_eq!(update.polygon_mode, PolygonMode::Line);

        let fill = MockController {
            fresh: vec![Button::KeyR],
            ..Default::default()
        };
        let update = state.update(&fill, &frame(0.016), 1.0);
        assert_eq!(update.polygon_mode, PolygonMode::Fill);
    }

    #[test]
    fn test_field_sampled_every_frame() {
        let mut state = AppState::default();
        assert!(state.field_samples().is_empty());

        state.update(&MockController::default(), &FrameInfo::new(0, 4.0, 0.016), 1.0);

        let n = DEFAULT_GRID_SIZE as usize + 1;
        assert_eq!(state.field_samples().len(), n * n * n);
        assert_eq!(state.field.time(), 4.0 * FIELD_TIME_SCALE);
    }

    #[test]
    fn test_frame_update_carries_field_grid() {
        let mut state = AppState::default();
        let frame = FrameInfo::new(3, 2.0, 0.016);

        let update = state.update(&MockController::default(), &frame, 1.0);
        let grid = update.field;

        let n = DEFAULT_GRID_SIZE as usize + 1;
        assert_eq!(grid.cells, DEFAULT_GRID_SIZE);
        assert_eq!(grid.samples.len(), n * n * n);
        assert_eq!(grid.iso_level, DEFAULT_ISO_LEVEL);

        let expected = state.field.sample_grid(state.sampler, DEFAULT_GRID_SIZE);
        assert_eq!(state.field_samples(), expected.as_slice());
    }
}
