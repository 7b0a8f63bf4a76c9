use std::sync::Arc;
use winit::window::{CursorGrabMode, Window as WinitWindow};

/// Wrapper around winit Window with the few calls the viewer makes
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    pub fn inner_size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.inner.inner_size()
    }

    /// Width / height of the drawable area; 1.0 while minimized
    pub fn aspect(&self) -> f32 {
        let size = self.inner_size();
        if size.width == 0 || size.height == 0 {
            return 1.0;
        }
        size.width as f32 / size.height as f32
    }

    /// Capture and hide the cursor while flying, release it otherwise
    pub fn set_fly_mode(&self, active: bool) {
        if active {
            // Locked isn't supported everywhere (e.g. X11), Confined is the fallback
            let grabbed = self
                .inner
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| self.inner.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grabbed {
                log::warn!("Failed to grab cursor: {}", e);
            }
        } else if let Err(e) = self.inner.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("Failed to release cursor: {}", e);
        }
        self.inner.set_cursor_visible(!active);
    }
}
