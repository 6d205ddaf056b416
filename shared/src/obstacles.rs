/*!
Static obstacle field.

Rocks scattered around the world are projected onto the ground plane as
collision circles. The field is generated once at world-build time and is
read-only afterwards; the character controller walks it in generation order
every frame.

Generation is seeded (ChaCha8) so the same seed always produces the same field
in the same order, which keeps obstacle resolution reproducible.
*/

use std::f32::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::utils::{Vec3, planar_distance_sq};

/// Closest planar distance from the origin a rock is placed at.
const ROCK_MIN_DISTANCE: f32 = 60.0;
/// Extra random distance on top of [`ROCK_MIN_DISTANCE`].
const ROCK_DISTANCE_SPREAD: f32 = 340.0;
const ROCK_MIN_SCALE: f32 = 0.6;
const ROCK_SCALE_SPREAD: f32 = 3.0;
/// Total width of the per-axis positional jitter.
const ROCK_JITTER: f32 = 30.0;

/// A static collision circle.
///
/// `position.y` is the rock's own scale (its center height); only `x`/`z` take
/// part in collision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub position: Vec3,
    pub radius: f32,
}

impl Obstacle {
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self { position, radius }
    }

    /// Does a circle of `radius` centered at `point` overlap this obstacle on the ground plane?
    #[inline]
    pub fn overlaps(&self, point: Vec3, radius: f32) -> bool {
        let min = self.radius + radius;
        planar_distance_sq(self.position, point) < min * min
    }
}

/// The immutable set of obstacles for one world.
#[derive(Clone, Debug, Default)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    /// An empty field (open plain).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a field from explicit obstacles, preserving their order.
    pub fn from_obstacles(obstacles: impl IntoIterator<Item = Obstacle>) -> Self {
        Self {
            obstacles: obstacles.into_iter().collect(),
        }
    }

    /// Scatter `count` rocks in a wide ring around the origin.
    ///
    /// Each rock gets a planar distance in `[60, 400)`, a random bearing, a scale in
    /// `[0.6, 3.6)` used both as its radius and center height, and up to ±15 units
    /// of jitter per axis.
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let obstacles: Vec<Obstacle> = (0..count)
            .map(|_| {
                let distance = ROCK_MIN_DISTANCE + rng.random::<f32>() * ROCK_DISTANCE_SPREAD;
                let angle = rng.random::<f32>() * TAU;
                let scale = ROCK_MIN_SCALE + rng.random::<f32>() * ROCK_SCALE_SPREAD;
                let x = angle.cos() * distance + (rng.random::<f32>() - 0.5) * ROCK_JITTER;
                let z = angle.sin() * distance + (rng.random::<f32>() - 0.5) * ROCK_JITTER;
                Obstacle::new(Vec3::new(x, scale, z), scale)
            })
            .collect();

        log::info!(
            "generated obstacle field: {} rocks (seed {seed:#x})",
            obstacles.len()
        );

        Self { obstacles }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Does any obstacle overlap a circle of `radius` at `point`?
    pub fn any_overlap(&self, point: Vec3, radius: f32) -> bool {
        self.obstacles.iter().any(|o| o.overlaps(point, radius))
    }
}
