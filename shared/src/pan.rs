//! Arrow-key camera panning.

use crate::{PAN_DISTANCE, PAN_DURATION_SECS, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanDirection {
    /// Along the view direction.
    Forward,
    Back,
    /// Sideways, in the ground plane.
    Left,
    Right,
}

/// World-space offset for one pan step.
///
/// Forward/back move along `view_dir` (which may tilt up or down). Left/right move
/// perpendicular to it in the XZ plane, so they never change the camera height.
pub fn pan_offset(view_dir: Vec3, direction: PanDirection, distance: f32) -> Vec3 {
    let forward = view_dir.try_normalize(f32::EPSILON).unwrap_or_else(Vec3::zeros);
    let side = Vec3::new(forward.z, 0.0, -forward.x)
        .try_normalize(f32::EPSILON)
        .unwrap_or_else(Vec3::zeros);

    match direction {
        PanDirection::Forward => forward * distance,
        PanDirection::Back => -forward * distance,
        PanDirection::Left => side * distance,
        PanDirection::Right => -side * distance,
    }
}

/// Linear move from `start` to `target` over `duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanTween {
    start: Vec3,
    target: Vec3,
    elapsed: f32,
    duration: f32,
}

impl PanTween {
    pub fn new(start: Vec3, target: Vec3, duration: f32) -> Self {
        Self {
            start,
            target,
            elapsed: 0.0,
            duration,
        }
    }

    /// A standard pan from `position`, looking along `view_dir`.
    pub fn step(position: Vec3, view_dir: Vec3, direction: PanDirection) -> Self {
        Self::new(
            position,
            position + pan_offset(view_dir, direction, PAN_DISTANCE),
            PAN_DURATION_SECS,
        )
    }

    /// Move the clock forward by `delta` seconds and return the position for the new time.
    pub fn advance(&mut self, delta: f32) -> Vec3 {
        self.elapsed = (self.elapsed + delta.max(0.0)).min(self.duration);
        self.position()
    }

    pub fn position(&self) -> Vec3 {
        if self.duration <= 0.0 {
            return self.target;
        }
        self.start.lerp(&self.target, self.elapsed / self.duration)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).norm() < 1.0e-4
    }

    #[test]
    fn forward_and_back_follow_the_view_direction() {
        let view = Vec3::new(0.0, -3.0, -4.0);
        assert!(close(
            pan_offset(view, PanDirection::Forward, 50.0),
            Vec3::new(0.0, -30.0, -40.0)
        ));
        assert!(close(
            pan_offset(view, PanDirection::Back, 50.0),
            Vec3::new(0.0, 30.0, 40.0)
        ));
    }

    #[test]
    fn sideways_pans_stay_level() {
        // Looking down -Z: left is -X, right is +X.
        let view = Vec3::new(0.0, -1.0, -1.0);
        assert!(close(
            pan_offset(view, PanDirection::Left, 50.0),
            Vec3::new(-50.0, 0.0, 0.0)
        ));
        assert!(close(
            pan_offset(view, PanDirection::Right, 50.0),
            Vec3::new(50.0, 0.0, 0.0)
        ));
    }

    #[test]
    fn straight_down_view_has_no_sideways_axis() {
        let view = Vec3::new(0.0, -1.0, 0.0);
        assert_eq!(pan_offset(view, PanDirection::Left, 50.0), Vec3::zeros());
    }

    #[test]
    fn tween_is_linear_and_clamps_at_the_end() {
        let mut tween = PanTween::new(Vec3::zeros(), Vec3::new(0.0, 0.0, 30.0), 0.3);
        assert!(close(tween.advance(0.1), Vec3::new(0.0, 0.0, 10.0)));
        assert!(!tween.is_finished());
        assert!(close(tween.advance(0.1), Vec3::new(0.0, 0.0, 20.0)));
        assert!(close(tween.advance(1.0), Vec3::new(0.0, 0.0, 30.0)));
        assert!(tween.is_finished());
    }

    #[test]
    fn new_pan_starts_from_the_current_position() {
        let view = Vec3::new(0.0, 0.0, -1.0);
        let mut first = PanTween::step(Vec3::zeros(), view, PanDirection::Forward);
        let midway = first.advance(PAN_DURATION_SECS / 2.0);

        let mut second = PanTween::step(midway, view, PanDirection::Forward);
        assert!(close(second.position(), midway));
        let end = second.advance(PAN_DURATION_SECS);
        assert!(close(end, Vec3::new(0.0, 0.0, -75.0)));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let tween = PanTween::new(Vec3::zeros(), Vec3::new(1.0, 2.0, 3.0), 0.0);
        assert!(tween.is_finished());
        assert_eq!(tween.position(), Vec3::new(1.0, 2.0, 3.0));
    }
}
