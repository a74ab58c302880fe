use super::types::InputEvent;

/// Input events recorded since the previous frame.
///
/// `InputState` carries the modifier state across frames.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order, including key repeats.
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
