use crate::coords::Mat4;
use crate::coords::affine::{scale_xy, shear, translation_xy};

use super::command::TransformCommand;

/// How rotation interacts with a non-square viewport.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RotationPolicy {
    /// Rotate in NDC directly; on a non-square window the image skews while turning.
    #[default]
    Plain,
    /// Conjugate rotation by the viewport aspect so angles look correct on screen.
    AspectCorrected,
}

/// Cumulative rotate/scale/translate/shear state for one viewing session.
///
/// The matrix starts as the identity and is only ever changed by composing
/// another affine matrix into it, so it stays affine.
///
/// Rotation keeps a running absolute angle. Each [`rotate`](Self::rotate)
/// first composes out the rotation at the old angle, then composes in the
/// rotation at the new one. Scale and shear are composed on the right (object
/// space); translation on the left (screen space), so arrow keys always move
/// along the window axes regardless of the current rotation.
#[derive(Debug, Clone)]
pub struct TransformAccumulator {
    matrix: Mat4,
    angle: f32,
    policy: RotationPolicy,
    /// Current viewport width / height.
    aspect: f32,
    /// Aspect baked into the rotation currently composed into `matrix`.
    applied_aspect: f32,
}

impl TransformAccumulator {
    pub fn new(policy: RotationPolicy) -> Self {
        Self {
            matrix: Mat4::IDENTITY,
            angle: 0.0,
            policy,
            aspect: 1.0,
            applied_aspect: 1.0,
        }
    }

    #[inline]
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Current absolute rotation angle in radians.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Records the viewport aspect ratio used by the next rotation step.
    ///
    /// Non-positive or non-finite ratios are ignored.
    pub fn set_aspect(&mut self, ratio: f32) {
        if ratio.is_finite() && ratio > 0.0 {
            self.aspect = ratio;
        } else {
            log::debug!("ignoring invalid aspect ratio {ratio}");
        }
    }

    pub fn apply(&mut self, command: TransformCommand) {
        log::trace!("transform: {command:?}");
        match command {
            TransformCommand::Rotate(delta) => self.rotate(delta),
            TransformCommand::Scale(factor) => self.scale(factor),
            TransformCommand::Translate { dx, dy } => self.translate(dx, dy),
            TransformCommand::Shear { xy, yx } => self.shear(xy, yx),
        }
    }

    pub fn rotate(&mut self, delta: f32) {
        let undo = Self::rotation(-self.angle, self.applied_aspect);
        self.matrix = self.matrix * undo;

        self.angle += delta;
        self.applied_aspect = match self.policy {
            RotationPolicy::Plain => 1.0,
            RotationPolicy::AspectCorrected => self.aspect,
        };

        let redo = Self::rotation(self.angle, self.applied_aspect);
        self.matrix = self.matrix * redo;
    }

    pub fn scale(&mut self, factor: f32) {
        self.matrix = self.matrix * scale_xy(factor, factor);
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.matrix = translation_xy(dx, dy) * self.matrix;
    }

    pub fn shear(&mut self, xy: f32, yx: f32) {
        self.matrix = self.matrix * shear(xy, yx);
    }

    /// `A⁻¹ · R(angle) · A` with `A = diag(aspect, 1)`; plain `R` when `aspect == 1`.
    fn rotation(angle: f32, aspect: f32) -> Mat4 {
        let r = Mat4::from_rotation_z(angle);
        if aspect == 1.0 {
            return r;
        }
        scale_xy(1.0 / aspect, 1.0) * r * scale_xy(aspect, 1.0)
    }
}

impl Default for TransformAccumulator {
    fn default() -> Self {
        Self::new(RotationPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::coords::affine::is_affine;

    const EPS: f32 = 1e-5;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() <= EPS && (a.1 - b.1).abs() <= EPS
    }

    fn apply_to(acc: &TransformAccumulator, x: f32, y: f32) -> (f32, f32) {
        let p = acc.matrix().transform_point3(crate::coords::Vec3::new(x, y, 0.0));
        (p.x, p.y)
    }

    /// A session with some history, so properties are not only checked at identity.
    fn busy() -> TransformAccumulator {
        let mut acc = TransformAccumulator::default();
        acc.translate(0.2, -0.1);
        acc.scale(1.3);
        acc.shear(0.1, 0.0);
        acc.rotate(0.4);
        acc
    }

    #[test]
    fn starts_at_identity() {
        let acc = TransformAccumulator::default();
        assert_eq!(*acc.matrix(), Mat4::IDENTITY);
        assert_eq!(acc.angle(), 0.0);
    }

    #[test]
    fn unit_scale_is_a_no_op() {
        let mut acc = busy();
        let before = *acc.matrix();
        for _ in 0..100 {
            acc.scale(1.0);
        }
        assert!(acc.matrix().abs_diff_eq(before, EPS));
    }

    #[test]
    fn scales_compound_multiplicatively() {
        let mut a = busy();
        a.scale(1.1);
        a.scale(0.9);

        let mut b = busy();
        b.scale(1.1 * 0.9);

        assert!(a.matrix().abs_diff_eq(*b.matrix(), EPS));
    }

    #[test]
    fn rotate_then_inverse_restores() {
        let mut acc = busy();
        let before = *acc.matrix();
        acc.rotate(0.7);
        acc.rotate(-0.7);
        assert!(acc.matrix().abs_diff_eq(before, EPS));
        assert!((acc.angle() - 0.4).abs() <= EPS);
    }

    #[test]
    fn aspect_corrected_rotate_then_inverse_restores() {
        let mut acc = TransformAccumulator::new(RotationPolicy::AspectCorrected);
        acc.set_aspect(16.0 / 9.0);
        acc.scale(0.8);
        let before = *acc.matrix();
        acc.rotate(0.3);
        acc.rotate(-0.3);
        assert!(acc.matrix().abs_diff_eq(before, EPS));
    }

    #[test]
    fn aspect_change_between_rotations_still_undoes_exactly() {
        let mut acc = TransformAccumulator::new(RotationPolicy::AspectCorrected);
        acc.set_aspect(2.0);
        acc.rotate(0.5);
        acc.set_aspect(1.0);
        acc.rotate(-0.5);
        assert!(acc.matrix().abs_diff_eq(Mat4::IDENTITY, EPS));
    }

    #[test]
    fn rotation_tracks_absolute_angle() {
        let mut acc = TransformAccumulator::default();
        acc.rotate(FRAC_PI_2);
        assert!(close(apply_to(&acc, 1.0, 0.0), (0.0, 1.0)));
        acc.rotate(FRAC_PI_2);
        assert!(close(apply_to(&acc, 1.0, 0.0), (-1.0, 0.0)));
        assert!((acc.angle() - 2.0 * FRAC_PI_2).abs() <= EPS);
    }

    #[test]
    fn aspect_corrected_rotation_preserves_on_screen_length() {
        // Window twice as wide as tall: NDC x spans twice as many pixels as NDC y.
        let aspect = 2.0;
        let mut acc = TransformAccumulator::new(RotationPolicy::AspectCorrected);
        acc.set_aspect(aspect);
        acc.rotate(FRAC_PI_2);

        let (x, y) = apply_to(&acc, 1.0, 0.0);
        let on_screen = ((x * aspect).powi(2) + y.powi(2)).sqrt();
        assert!((on_screen - aspect).abs() <= EPS);
    }

    #[test]
    fn translation_is_in_screen_space() {
        let mut acc = TransformAccumulator::default();
        acc.scale(3.0);
        acc.rotate(FRAC_PI_2);
        acc.translate(0.1, 0.0);
        // The object origin moves along screen +X by exactly dx.
        assert!(close(apply_to(&acc, 0.0, 0.0), (0.1, 0.0)));
    }

    #[test]
    fn scale_is_in_object_space() {
        let mut acc = TransformAccumulator::default();
        acc.translate(0.5, 0.0);
        acc.scale(2.0);
        assert!(close(apply_to(&acc, 0.0, 0.0), (0.5, 0.0)));
        assert!(close(apply_to(&acc, 1.0, 0.0), (2.5, 0.0)));
    }

    #[test]
    fn shear_is_in_object_space() {
        let mut acc = TransformAccumulator::default();
        acc.translate(0.0, 0.5);
        acc.shear(0.2, 0.0);
        assert!(close(apply_to(&acc, 0.0, 1.0), (0.2, 1.5)));
    }

    #[test]
    fn zero_magnitudes_leave_matrix_unchanged() {
        let mut acc = busy();
        let before = *acc.matrix();
        acc.translate(0.0, 0.0);
        acc.shear(0.0, 0.0);
        acc.rotate(0.0);
        assert!(acc.matrix().abs_diff_eq(before, EPS));
    }

    #[test]
    fn stays_affine_after_mixed_history() {
        let mut acc = TransformAccumulator::new(RotationPolicy::AspectCorrected);
        acc.set_aspect(1.5);
        for i in 0..50 {
            let t = i as f32 * 0.01;
            acc.apply(TransformCommand::Rotate(t));
            acc.apply(TransformCommand::Scale(1.0 + t));
            acc.apply(TransformCommand::Translate { dx: t, dy: -t });
            acc.apply(TransformCommand::Shear { xy: t, yx: -t });
        }
        assert!(is_affine(acc.matrix()));
    }

    #[test_log::test]
    fn invalid_aspect_is_ignored() {
        let mut acc = TransformAccumulator::new(RotationPolicy::AspectCorrected);
        acc.set_aspect(0.0);
        acc.set_aspect(f32::NAN);
        acc.rotate(FRAC_PI_2);
        // Still the square-viewport rotation.
        assert!(close(apply_to(&acc, 1.0, 0.0), (0.0, 1.0)));
    }
}
