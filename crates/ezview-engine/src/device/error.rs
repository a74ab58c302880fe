/// What the frame loop should do after `get_current_texture` fails.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The surface was reconfigured; the next redraw can proceed.
    Reconfigured,
    /// Drop this frame and try again on the next redraw.
    SkipFrame,
    /// Out of memory; the viewer should exit.
    Fatal,
}
