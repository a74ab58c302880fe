/// The window grows while both sides stay under these bounds.
const MAX_WIDTH: u64 = 1400;
const MAX_HEIGHT: u64 = 750;

/// Initial window size for an image of `width`×`height` pixels.
///
/// Starts at the image size and grows in half-image steps until either side
/// reaches the bounds, then backs off one step. Each step is at least one
/// pixel, and the result is never smaller than 1×1.
pub fn initial_window_size(width: usize, height: usize) -> (u32, u32) {
    let (w0, h0) = (width as u64, height as u64);
    let (step_w, step_h) = ((w0 / 2).max(1), (h0 / 2).max(1));

    let (mut w, mut h) = (w0, h0);
    while w < MAX_WIDTH && h < MAX_HEIGHT {
        w += step_w;
        h += step_h;
    }
    w = w.saturating_sub(step_w).max(1);
    h = h.saturating_sub(step_h).max(1);

    (clamp_u32(w), clamp_u32(h))
}

fn clamp_u32(v: u64) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}
