use super::frame::InputFrame;
use super::types::{InputEvent, Modifiers};

/// Keyboard state carried between events for a single window.
///
/// winit reports modifiers separately from key events, so the latest set is
/// kept here and stamped onto each translated key.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
}

impl InputState {
    /// Applies an input event to the current state and records it in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,
            InputEvent::Key { modifiers, .. } => self.modifiers = *modifiers,
        }
        frame.push_event(ev);
    }
}
