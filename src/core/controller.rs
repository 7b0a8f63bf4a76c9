/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    KeyF,
    KeyR,
    KeyT,
    F7,
    F8,
    Shift,
    MouseRight,
}

/// Controller - per-frame view of input state
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Check if button went down since the last frame
    fn just_pressed(&self, button: Button) -> bool;

    /// Pointer movement since the last frame, screen space (y grows downwards)
    fn mouse_delta(&self) -> (f32, f32);

    /// Vertical wheel movement since the last frame, in lines
    fn scroll_delta(&self) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_equality() {
        assert_eq!(Button::KeyW, Button::KeyW);
        assert_eq!(Button::F8, Button::F8);
        assert_ne!(Button::KeyW, Button::KeyA);
    }

    #[test]
    fn test_button_debug() {
        assert_eq!(format!("{:?}", Button::KeyW), "KeyW");
        assert_eq!(format!("{:?}", Button::MouseRight), "MouseRight");
    }

    #[test]
    fn test_all_button_variants_unique() {
        let all_buttons = [
            Button::KeyW,
            Button::KeyA,
            Button::KeyS,
            Button::KeyD,
            Button::KeyQ,
            Button::KeyE,
            Button::KeyF,
            Button::KeyR,
            Button::KeyT,
            Button::F7,
            Button::F8,
            Button::Shift,
            Button::MouseRight,
        ];

        let set: HashSet<_> = all_buttons.iter().collect();
        assert_eq!(set.len(), 13);
    }

    // Test mock controller implementation
    struct MockController {
        pressed: Vec<Button>,
        fresh: Vec<Button>,
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
            (0.0, 0.0)
        }

        fn scroll_delta(&self) -> f32 {
            0.0
        }
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::KeyW, Button::Shift],
            fresh: vec![Button::Shift],
        };

        assert!(controller.is_down(Button::KeyW));
        assert!(controller.is_down(Button::Shift));
        assert!(!controller.is_down(Button::KeyA));
        assert!(controller.just_pressed(Button::Shift));
        assert!(!controller.just_pressed(Button::KeyW));
    }

    #[test]
    fn test_controller_no_keys_pressed() {
        let controller = MockController {
            pressed: vec![],
            fresh: vec![],
        };

        assert!(!controller.is_down(Button::KeyW));
        assert_eq!(controller.get_down_keys().len(), 0);
    }
}
