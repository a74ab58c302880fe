//! Key → action table.

use ezview_engine::input::{Key, Modifiers};
use ezview_engine::transform::TransformCommand;

use crate::config::ViewerConfig;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    Exit,
    Transform(TransformCommand),
}

/// Maps one key press to an action.
///
/// `repeat` selects the fine step sizes. Keys combined with Ctrl, Alt, or
/// Super are left to the platform, except Escape.
pub fn action_for(key: Key, repeat: bool, modifiers: Modifiers, config: &ViewerConfig) -> Option<Action> {
    if key == Key::Escape {
        return Some(Action::Exit);
    }
    if modifiers.command() {
        return None;
    }

    let step = config.steps(repeat);
    let turn = step.rotate_degrees.to_radians();

    let cmd = match key {
        Key::Q => TransformCommand::Rotate(turn),
        Key::W => TransformCommand::Rotate(-turn),

        Key::A => TransformCommand::Scale(step.scale_down),
        Key::S => TransformCommand::Scale(step.scale_up),

        Key::ArrowUp => TransformCommand::Translate { dx: 0.0, dy: step.translate },
        Key::ArrowDown => TransformCommand::Translate { dx: 0.0, dy: -step.translate },
        Key::ArrowLeft => TransformCommand::Translate { dx: -step.translate, dy: 0.0 },
        Key::ArrowRight => TransformCommand::Translate { dx: step.translate, dy: 0.0 },

        Key::Z => TransformCommand::Shear { xy: -step.shear, yx: 0.0 },
        Key::X => TransformCommand::Shear { xy: step.shear, yx: 0.0 },
        Key::C => TransformCommand::Shear { xy: 0.0, yx: -step.shear },
        Key::V => TransformCommand::Shear { xy: 0.0, yx: step.shear },

        _ => return None,
    };

    Some(Action::Transform(cmd))
}
