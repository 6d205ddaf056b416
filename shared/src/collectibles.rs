/*!
Collectibles and pickup tracking.

Each collectible spins and bobs while visible. Walking within the pickup radius
hides it and bumps the collected count. A collectible is picked up at most once;
hidden collectibles are never animated or tested again.
*/

use std::f32::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    obstacles::ObstacleField,
    settings::PickupSettings,
    utils::{Vec3, from_planar},
};

/// Playable ring collectibles are placed in (planar distance from the origin).
const SCATTER_MIN_DISTANCE: f32 = 12.0;
const SCATTER_MAX_DISTANCE: f32 = 120.0;
/// Resting height of a freshly placed collectible.
const SCATTER_HEIGHT: f32 = 1.5;
const SPIN_SPEED_MIN: f32 = 1.0;
const SPIN_SPEED_MAX: f32 = 3.0;
/// Clearance kept between a collectible and any rock when scattering.
const SCATTER_CLEARANCE: f32 = 1.0;
/// Random placement attempts per collectible before sweeping the ring.
const SCATTER_ATTEMPTS: usize = 32;
/// Radial and angular resolution of the fallback sweep.
const SWEEP_RADIAL_STEP: f32 = 0.25;
const SWEEP_BEARINGS: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collectible {
    pub position: Vec3,
    /// Signed spin rate (radians per second).
    pub spin_speed: f32,
    /// Accumulated spin angle about +Y (radians).
    pub spin: f32,
    /// Flips to false exactly once, on pickup.
    pub visible: bool,
}

impl Collectible {
    pub fn new(position: Vec3, spin_speed: f32) -> Self {
        Self {
            position,
            spin_speed,
            spin: 0.0,
            visible: true,
        }
    }
}

/// All collectibles of a world plus the running collected count.
#[derive(Clone, Debug, Default)]
pub struct CollectibleTracker {
    items: Vec<Collectible>,
    collected: usize,
}

impl CollectibleTracker {
    pub fn new(items: impl IntoIterator<Item = Collectible>) -> Self {
        Self {
            items: items.into_iter().collect(),
            collected: 0,
        }
    }

    /// Place `count` collectibles in the playable ring, avoiding rocks.
    ///
    /// Deterministic for a given seed and obstacle field. Every placed collectible
    /// clears all rocks; if the ring has no clear spot at all, fewer than `count`
    /// are placed.
    pub fn scatter(count: usize, obstacles: &ObstacleField, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let items: Vec<Collectible> = (0..count)
            .filter_map(|index| {
                let Some(spot) = clear_spot(&mut rng, obstacles) else {
                    log::warn!("no clear spot for collectible {index}; skipping it");
                    return None;
                };

                let magnitude = rng.random_range(SPIN_SPEED_MIN..SPIN_SPEED_MAX);
                let spin_speed = if rng.random::<bool>() {
                    magnitude
                } else {
                    -magnitude
                };
                Some(Collectible::new(spot, spin_speed))
            })
            .collect();

        log::info!("placed {} collectibles (seed {seed:#x})", items.len());

        Self::new(items)
    }

    pub fn items(&self) -> &[Collectible] {
        &self.items
    }

    pub fn collected(&self) -> usize {
        self.collected
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_complete(&self) -> bool {
        self.collected == self.items.len()
    }

    /// Animate visible collectibles and pick up the ones within reach.
    ///
    /// `elapsed` is the total simulated time and drives the bob phase. Returns how
    /// many collectibles were picked up by this call.
    pub fn update(
        &mut self,
        character_position: Vec3,
        elapsed: f32,
        dt: f32,
        settings: &PickupSettings,
    ) -> usize {
        if self.is_complete() {
            return 0;
        }

        let radius_sq = settings.radius * settings.radius;
        let mut picked = 0;

        for (index, item) in self.items.iter_mut().enumerate() {
            if !item.visible {
                continue;
            }

            item.spin = (item.spin + dt * item.spin_speed).rem_euclid(TAU);
            // The x coordinate doubles as a per-item phase offset.
            item.position.y += (elapsed * settings.bob_frequency + item.position.x).sin()
                * dt
                * settings.bob_amplitude;

            if (item.position - character_position).norm_squared() < radius_sq {
                item.visible = false;
                picked += 1;
                log::debug!("picked up collectible {index} at {:?}", item.position);
            }
        }

        self.collected += picked;
        debug_assert!(self.collected <= self.items.len());

        if picked > 0 && self.is_complete() {
            log::info!("all {} collectibles collected", self.items.len());
        }

        picked
    }
}

fn ring_spot(distance: f32, angle: f32) -> Vec3 {
    from_planar(
        [angle.cos() * distance, angle.sin() * distance].into(),
        SCATTER_HEIGHT,
    )
}

/// A spot in the playable ring that no rock overlaps.
///
/// Tries random spots first, then sweeps the ring outward from a random bearing.
fn clear_spot(rng: &mut ChaCha8Rng, obstacles: &ObstacleField) -> Option<Vec3> {
    let is_clear = |spot: Vec3| !obstacles.any_overlap(spot, SCATTER_CLEARANCE);

    for _ in 0..SCATTER_ATTEMPTS {
        let distance = rng.random_range(SCATTER_MIN_DISTANCE..SCATTER_MAX_DISTANCE);
        let spot = ring_spot(distance, rng.random::<f32>() * TAU);
        if is_clear(spot) {
            return Some(spot);
        }
    }

    let start = rng.random::<f32>() * TAU;
    let rings = ((SCATTER_MAX_DISTANCE - SCATTER_MIN_DISTANCE) / SWEEP_RADIAL_STEP) as usize;
    (0..rings)
        .map(|ring| SCATTER_MIN_DISTANCE + ring as f32 * SWEEP_RADIAL_STEP)
        .flat_map(|distance| {
            (0..SWEEP_BEARINGS).map(move |step| {
                ring_spot(distance, start + step as f32 * TAU / SWEEP_BEARINGS as f32)
            })
        })
        .find(|&spot| is_clear(spot))
}
