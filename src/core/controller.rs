/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Toggle cube motion
    Space,
    /// Write a snapshot of the current frame
    KeyP,
    Escape,
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Check if button went down since the previous frame
    fn just_pressed(&self, button: Button) -> bool;
}

/// Controller with nothing pressed, used for headless rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl Controller for NoInput {
    fn is_down(&self, _button: Button) -> bool {
        false
    }

    fn just_pressed(&self, _button: Button) -> bool {
        false
    }
}
