//! Mouse orbit around a look-at target.

use std::f32::consts::FRAC_PI_2;

use crate::{ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_ZOOM_FACTOR, Vec3};

/// Keeps the camera off the poles so `looking_at` always has a valid up vector.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Camera position in spherical coordinates around `target`.
///
/// Yaw is measured around +Y from +Z, pitch from the XZ plane (positive is above the target).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    target: Vec3,
    distance: f32,
    yaw: f32,
    pitch: f32,
}

impl Orbit {
    /// The orbit that places the camera at `position`.
    pub fn from_position(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let distance = offset.norm().clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        let (yaw, pitch) = if offset.norm() > f32::EPSILON {
            let horizontal = offset.x.hypot(offset.z);
            (offset.x.atan2(offset.z), offset.y.atan2(horizontal))
        } else {
            (0.0, 0.0)
        };

        Self {
            target,
            distance,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    /// Swing around the target. Pitch stops just short of straight up or down.
    pub fn rotate(&mut self, yaw: f32, pitch: f32) {
        self.yaw = (self.yaw + yaw).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Positive steps move closer. Each step scales the distance by `ORBIT_ZOOM_FACTOR`.
    pub fn zoom(&mut self, steps: f32) {
        self.distance = (self.distance * ORBIT_ZOOM_FACTOR.powf(steps))
            .clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    /// Move target and camera together.
    pub fn translate(&mut self, offset: Vec3) {
        self.target += offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CAMERA_START, CAMERA_TARGET};

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).norm() < 1.0e-3
    }

    fn start() -> Orbit {
        Orbit::from_position(Vec3::from(CAMERA_START), Vec3::from(CAMERA_TARGET))
    }

    #[test]
    fn starts_where_the_camera_is() {
        let orbit = start();
        assert!(close(orbit.position(), Vec3::from(CAMERA_START)));
        assert_eq!(orbit.target(), Vec3::from(CAMERA_TARGET));
    }

    #[test]
    fn rotating_keeps_the_distance() {
        let mut orbit = start();
        let before = orbit.distance();
        orbit.rotate(1.3, -0.4);
        let offset = orbit.position() - orbit.target();
        assert!((offset.norm() - before).abs() < 1.0e-3);
    }

    #[test]
    fn quarter_turn_swings_around_the_vertical_axis() {
        let mut orbit = Orbit::from_position(Vec3::new(0.0, 0.0, 100.0), Vec3::zeros());
        orbit.rotate(FRAC_PI_2, 0.0);
        assert!(close(orbit.position(), Vec3::new(100.0, 0.0, 0.0)));
    }

    #[test]
    fn pitch_stops_short_of_the_poles() {
        let mut orbit = start();
        orbit.rotate(0.0, 10.0);
        let above = orbit.position() - orbit.target();
        assert!(above.y < orbit.distance());
        assert!(above.x.hypot(above.z) > 0.0);

        orbit.rotate(0.0, -20.0);
        assert!(orbit.position().y < orbit.target().y);
    }

    #[test]
    fn zoom_scales_and_clamps_the_distance() {
        let mut orbit = Orbit::from_position(Vec3::new(0.0, 0.0, 100.0), Vec3::zeros());
        orbit.zoom(1.0);
        assert!((orbit.distance() - 100.0 * ORBIT_ZOOM_FACTOR).abs() < 1.0e-3);
        orbit.zoom(-1.0);
        assert!((orbit.distance() - 100.0).abs() < 1.0e-3);

        orbit.zoom(1000.0);
        assert_eq!(orbit.distance(), ORBIT_MIN_DISTANCE);
        orbit.zoom(-1000.0);
        assert_eq!(orbit.distance(), ORBIT_MAX_DISTANCE);
    }

    #[test]
    fn translating_moves_the_camera_with_the_target() {
        let mut orbit = start();
        let before = orbit.position();
        let offset = Vec3::new(-50.0, 0.0, 25.0);
        orbit.translate(offset);
        assert!(close(orbit.position(), before + offset));
        assert!(close(orbit.target(), Vec3::from(CAMERA_TARGET) + offset));
    }

    #[test]
    fn camera_on_the_target_falls_back_to_the_minimum_distance() {
        let orbit = Orbit::from_position(Vec3::zeros(), Vec3::zeros());
        assert_eq!(orbit.distance(), ORBIT_MIN_DISTANCE);
        assert!(close(orbit.position(), Vec3::new(0.0, 0.0, ORBIT_MIN_DISTANCE)));
    }
}
