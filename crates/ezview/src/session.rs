use ezview_engine::core::{App, AppControl, FrameCtx};
use ezview_engine::input::{InputEvent, KeyState};
use ezview_engine::render::ImageRenderer;
use ezview_engine::transform::TransformAccumulator;
use ezview_ppm::ImageBuffer;

use crate::bindings::{action_for, Action};
use crate::config::ViewerConfig;

/// State of one viewing session: the image on the GPU and its accumulated transform.
pub struct ViewerSession {
    config: ViewerConfig,
    transform: TransformAccumulator,
    renderer: ImageRenderer,
}

impl ViewerSession {
    pub fn new(image: ImageBuffer, config: ViewerConfig) -> anyhow::Result<Self> {
        let width = u32::try_from(image.width())?;
        let height = u32::try_from(image.height())?;
        let renderer = ImageRenderer::new(width, height, image.to_rgba())?;

        Ok(Self {
            transform: TransformAccumulator::new(config.rotation_policy),
            config,
            renderer,
        })
    }

    #[inline]
    pub fn transform(&self) -> &TransformAccumulator {
        &self.transform
    }

    /// Applies the key presses recorded since the last frame, in arrival order.
    ///
    /// `aspect` is the current viewport width / height, if known.
    pub fn handle_input(&mut self, events: &[InputEvent], aspect: Option<f32>) -> AppControl {
        if let Some(aspect) = aspect {
            self.transform.set_aspect(aspect);
        }

        for ev in events {
            let InputEvent::Key { key, state: KeyState::Pressed, modifiers, repeat, .. } = ev else {
                continue;
            };

            match action_for(*key, *repeat, *modifiers, &self.config) {
                Some(Action::Exit) => {
                    log::info!("exit requested");
                    return AppControl::Exit;
                }
                Some(Action::Transform(cmd)) => self.transform.apply(cmd),
                None => log::trace!("unbound key {key}"),
            }
        }

        AppControl::Continue
    }
}

impl App for ViewerSession {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let aspect = ctx.window.viewport().aspect();
        if self.handle_input(&ctx.input_frame.events, aspect) == AppControl::Exit {
            ctx.runtime.exit();
            return AppControl::Exit;
        }

        let clear = self.config.clear_color;
        let matrix = *self.transform.matrix();
        let renderer = &mut self.renderer;

        ctx.render(clear, |rctx, target| renderer.render(rctx, target, &matrix))
    }
}

#[cfg(test)]
mod tests {
    use ezview_engine::coords::{Mat4, Vec3};
    use ezview_engine::input::{Key, Modifiers};

    use super::*;

    fn session() -> ViewerSession {
        let image = ImageBuffer::from_raw(2, 1, vec![255, 0, 0, 0, 0, 255]).unwrap();
        ViewerSession::new(image, ViewerConfig::default()).unwrap()
    }

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, modifiers: Modifiers::default(), code: 0, repeat }
    }

    #[test]
    fn starts_untransformed() {
        assert_eq!(*session().transform().matrix(), Mat4::IDENTITY);
    }

    #[test_log::test]
    fn presses_apply_in_order_and_releases_are_ignored() {
        let mut s = session();
        let events = [
            key(Key::S, KeyState::Pressed, false),
            key(Key::S, KeyState::Released, false),
            key(Key::A, KeyState::Pressed, true),
        ];
        assert_eq!(s.handle_input(&events, Some(1.0)), AppControl::Continue);

        let expected = Mat4::from_scale(Vec3::new(1.1 * 0.97, 1.1 * 0.97, 1.0));
        assert!(s.transform().matrix().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn escape_stops_processing() {
        let mut s = session();
        let events = [key(Key::Escape, KeyState::Pressed, false), key(Key::S, KeyState::Pressed, false)];
        assert_eq!(s.handle_input(&events, None), AppControl::Exit);
        assert_eq!(*s.transform().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn rotate_press_then_opposite_press_restores() {
        let mut s = session();
        s.handle_input(&[key(Key::Q, KeyState::Pressed, false)], Some(1.5));
        assert!((s.transform().angle() - 15f32.to_radians()).abs() < 1e-6);
        s.handle_input(&[key(Key::W, KeyState::Pressed, false)], Some(1.5));
        assert!(s.transform().matrix().abs_diff_eq(Mat4::IDENTITY, 1e-5));
    }
}
