pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod field;
pub mod frame;
pub mod traits;
pub mod types;
pub mod window;

pub use app::{AppState, FieldGrid, FrameUpdate};
pub use camera::{Camera, MotionMode, Movement};
pub use traits::CameraController;
