use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Buttons that went down during the current frame
    fresh_keys: HashSet<Button>,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(keycode) = event.physical_key {
                if let Some(button) = Self::keycode_to_button(keycode) {
                    match event.state {
                        ElementState::Pressed => self.press(button),
                        ElementState::Released => self.release(button),
                    }
                }
            }
        }
    }

    /// Record a button going down; auto-repeat does not re-trigger it
    pub fn press(&mut self, button: Button) {
        if self.pressed_keys.insert(button) {
            self.fresh_keys.insert(button);
        }
    }

    pub fn release(&mut self, button: Button) {
        self.pressed_keys.remove(&button);
    }

    /// Reset per-frame state
    /// Call this at the end of each frame after the layers have seen the input
    pub fn end_frame(&mut self) {
        self.fresh_keys.clear();
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::Space => Some(Button::Space),
            KeyCode::KeyP => Some(Button::KeyP),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn just_pressed(&self, button: Button) -> bool {
        self.fresh_keys.contains(&button)
    }
}
