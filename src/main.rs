use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window as WinitWindow, WindowId},
};

use fly_camera::app::AppState;
use fly_camera::cli::Cli;
use fly_camera::config::AppConfig;
use fly_camera::core::WinitController;
use fly_camera::frame::FrameIterator;
use fly_camera::window::Window;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

// === Application ===

struct App {
    config: AppConfig,
    window: Option<Window>,
    state: AppState,
    controller: WinitController,
    frames: FrameIterator,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(&config),
            config,
            window: None,
            controller: WinitController::new(),
            frames: FrameIterator::new(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            let camera = &self.state.camera;
            log::info!("FPS: {:.1}", self.fps);
            log::debug!(
                "yaw {:.1} pitch {:.1} front {:?} mode {:?}",
                camera.yaw(),
                camera.pitch(),
                camera.front(),
                camera.mode()
            );
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn redraw(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let aspect = window.aspect();
        let Some(frame) = self.frames.next() else {
            return;
        };

        let update = self.state.update(&self.controller, &frame, aspect);
        if let Some(active) = update.fly_mode_changed {
            window.set_fly_mode(active);
        }
        self.controller.reset_deltas();

        self.update_fps(frame.delta);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attributes = WinitWindow::default_attributes()
                .with_title(self.config.window.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));

            match event_loop.create_window(attributes) {
                Ok(w) => self.window = Some(Window::new(Arc::new(w))),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(),
            event => self.controller.process_event(&event),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.controller.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let config = cli.apply(config);

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(config);

    log::info!("Controls: hold right mouse to fly, WASD/QE move, Shift sprint, scroll zoom");
    log::info!("F8 smooth movement, F7 field sampler, F flashlight, R/T fill/wireframe");
    log::info!("Escape quits");
    event_loop.run_app(&mut app)?;

    Ok(())
}
