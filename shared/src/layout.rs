//! Randomized scene layout: where the cubes go and how the ground is roughened.
//!
//! Everything takes the RNG as a parameter so layouts are reproducible from a seed.

use rand::Rng;

use crate::{
    CUBE_HEIGHT_RANGE, CUBE_MIN_HEIGHT, CUBE_SPREAD, GROUND_SEGMENTS, GROUND_SIZE, Pose, Vec3,
};

/// Spawn parameters for one scattered cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropPlacement {
    pub pose: Pose,
    /// Linear RGB, each channel in `[0, 1)`.
    pub color: [f32; 3],
}

/// Place `count` cubes uniformly over the ground footprint, at random heights above it.
pub fn scatter_cubes<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<PropPlacement> {
    (0..count)
        .map(|_| {
            let translation = Vec3::new(
                rng.gen_range(-CUBE_SPREAD..CUBE_SPREAD),
                rng.gen_range(CUBE_MIN_HEIGHT..CUBE_MIN_HEIGHT + CUBE_HEIGHT_RANGE),
                rng.gen_range(-CUBE_SPREAD..CUBE_SPREAD),
            );
            PropPlacement {
                pose: Pose::from_translation(translation),
                color: [rng.r#gen(), rng.r#gen(), rng.r#gen()],
            }
        })
        .collect()
}

/// Hue, saturation, lightness, each in `[0, 1]` (hue in turns).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

/// Offset every ground vertex by a random amount in `[0, 1)` along each axis.
pub fn jitter_vertices<R: Rng + ?Sized>(rng: &mut R, positions: &mut [[f32; 3]]) {
    for p in positions.iter_mut() {
        for c in p.iter_mut() {
            *c += rng.r#gen::<f32>();
        }
    }
}

/// One teal-to-blue color per ground vertex.
pub fn ground_colors<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Hsl> {
    (0..count)
        .map(|_| Hsl {
            hue: 0.5 + rng.r#gen::<f32>() * 0.2,
            saturation: 0.75,
            lightness: 0.5 + rng.r#gen::<f32>() * 0.2,
        })
        .collect()
}

/// Ground edge length and segment count, for building the render mesh.
pub fn ground_dimensions() -> (f32, u32) {
    (GROUND_SIZE, GROUND_SEGMENTS)
}
