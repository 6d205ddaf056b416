use std::f64::consts::TAU;

use crate::{
    camera::{CameraPose, update_camera},
    collectibles::CollectibleTracker,
    input::{InputSnapshot, sanitize_dt},
    movement::{CharacterState, step_movement},
    obstacles::ObstacleField,
    orientation::OrientationState,
    settings::SimSettings,
    utils::Vec3,
};

/// Everything the presentation layer needs after one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub character_position: Vec3,
    pub facing_yaw: f32,
    pub camera: CameraPose,
    /// Collectibles picked up during this tick.
    pub picked_up: usize,
    pub collected: usize,
    pub total: usize,
}

/// One explorable world: static obstacles, collectibles, the character and its camera.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub settings: SimSettings,
    pub orientation: OrientationState,
    pub character: CharacterState,
    pub camera: CameraPose,
    pub obstacles: ObstacleField,
    pub collectibles: CollectibleTracker,
    /// Total simulated seconds.
    pub elapsed: f64,
}

impl Simulation {
    /// Build the world for `settings.world.seed`.
    ///
    /// Obstacles and collectibles draw from separate streams of the seed, so
    /// changing the rock count does not reshuffle collectibles.
    pub fn new(settings: SimSettings) -> Self {
        let seed = settings.world.seed;
        let obstacles = ObstacleField::generate(settings.world.obstacle_count, seed);
        let collectibles = CollectibleTracker::scatter(
            settings.world.collectible_count,
            &obstacles,
            seed.wrapping_add(1),
        );
        Self::from_parts(settings, obstacles, collectibles)
    }

    /// Assemble a world from pre-built parts. The character starts grounded at the origin.
    pub fn from_parts(
        settings: SimSettings,
        obstacles: ObstacleField,
        collectibles: CollectibleTracker,
    ) -> Self {
        Self {
            character: CharacterState::grounded_at(0.0, 0.0, &settings.movement),
            settings,
            orientation: OrientationState::default(),
            camera: CameraPose::default(),
            obstacles,
            collectibles,
            elapsed: 0.0,
        }
    }

    /// Advance one frame.
    ///
    /// Stages run in a fixed order, each reading what the previous one just wrote:
    /// orientation, character, camera, collectibles.
    pub fn tick(&mut self, input: &InputSnapshot) -> FrameOutput {
        debug_assert!(
            input.dt >= 0.0 && input.dt.is_finite(),
            "tick called with invalid dt {}",
            input.dt
        );
        let dt = sanitize_dt(input.dt);

        if input.pointer_captured {
            self.orientation.apply_mouse_delta(
                input.mouse_delta.x,
                input.mouse_delta.y,
                &self.settings.look,
            );
        }

        self.character = step_movement(
            self.character,
            self.orientation.yaw,
            input,
            &self.obstacles,
            self.settings.world.radius,
            &self.settings.movement,
            dt,
        );

        self.camera = update_camera(
            &self.camera,
            self.character.position,
            &self.orientation,
            &self.settings.camera,
            dt,
        );

        self.elapsed += f64::from(dt);
        let picked_up = self.collectibles.update(
            self.character.position,
            self.bob_clock(),
            dt,
            &self.settings.pickup,
        );

        FrameOutput {
            character_position: self.character.position,
            facing_yaw: self.character.facing_yaw,
            camera: self.camera,
            picked_up,
            collected: self.collectibles.collected(),
            total: self.collectibles.total(),
        }
    }

    /// Elapsed time folded into one bob period, so the phase handed to the
    /// collectibles stays precise however long the session runs.
    fn bob_clock(&self) -> f32 {
        let frequency = f64::from(self.settings.pickup.bob_frequency.abs());
        if frequency > 0.0 {
            self.elapsed.rem_euclid(TAU / frequency) as f32
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        camera::desired_position,
        collectibles::Collectible,
        input::MoveKey,
        settings::COLLECTIBLE_COUNT,
    };

    const DT: f32 = 1.0 / 60.0;

    fn open_plain() -> Simulation {
        Simulation::from_parts(
            SimSettings::default(),
            ObstacleField::empty(),
            CollectibleTracker::default(),
        )
    }

    #[test]
    fn reference_world_has_expected_counts() {
        let sim = Simulation::new(SimSettings::default());
        assert_eq!(sim.obstacles.len(), 240);
        assert_eq!(sim.collectibles.total(), COLLECTIBLE_COUNT);
        assert_eq!(sim.collectibles.collected(), 0);
        assert!(sim.character.grounded);
    }

    #[test]
    fn uncaptured_pointer_discards_mouse() {
        let mut sim = open_plain();
        let mut input = InputSnapshot::new(DT).with_mouse_delta(500.0, 500.0);
        input.pointer_captured = false;
        sim.tick(&input);
        assert_eq!(sim.orientation, OrientationState::default());
    }

    #[test]
    fn movement_uses_this_frames_yaw() {
        let mut sim = open_plain();
        // Turn a quarter left in the same frame as pressing forward.
        let dx = -std::f32::consts::FRAC_PI_2 / sim.settings.look.sensitivity;
        let input = InputSnapshot::new(DT)
            .with_mouse_delta(dx, 0.0)
            .with_key(MoveKey::Forward);
        let out = sim.tick(&input);

        assert!((out.character_position.x - 6.0 * DT).abs() < 1.0e-4);
        assert!(out.character_position.z.abs() < 1.0e-4);
        assert_eq!(out.facing_yaw, sim.orientation.yaw);
    }

    #[test]
    fn camera_targets_this_frames_character() {
        let mut sim = open_plain();
        sim.camera.position = desired_position(
            sim.character.position,
            &sim.orientation,
            &sim.settings.camera,
        );
        let out = sim.tick(&InputSnapshot::new(DT).with_key(MoveKey::Forward));

        let expected_target = out.character_position + Vec3::new(0.0, 1.2, 10.0);
        assert!((out.camera.look_target - expected_target).norm() < 1.0e-4);
    }

    #[test]
    fn pickup_uses_this_frames_position() {
        let mut sim = Simulation::from_parts(
            SimSettings::default(),
            ObstacleField::empty(),
            // Just out of reach before moving, in reach after one sprint frame.
            CollectibleTracker::new([Collectible::new(Vec3::new(0.0, 1.8, 1.7), 0.0)]),
        );
        let out = sim.tick(
            &InputSnapshot::new(DT)
                .with_key(MoveKey::Forward)
                .with_key(MoveKey::Sprint),
        );
        assert_eq!(out.picked_up, 1);
        assert_eq!(out.collected, 1);
        assert_eq!(out.total, 1);
    }

    #[test]
    fn elapsed_accumulates() {
        let mut sim = open_plain();
        for _ in 0..30 {
            sim.tick(&InputSnapshot::new(DT));
        }
        assert!((sim.elapsed - 0.5).abs() < 1.0e-6);
    }

    #[test]
    fn bob_clock_wraps_to_one_period() {
        let mut sim = open_plain();
        // Ten hours in, with the default frequency of 2 rad/s.
        sim.elapsed = 36_000.0;
        let period = TAU / 2.0;
        let expected = 36_000.0f64.rem_euclid(period) as f32;

        let clock = sim.bob_clock();
        assert!((0.0..period as f32).contains(&clock));
        assert!((clock - expected).abs() < 1.0e-5);
        // Same bob phase as the unwrapped time.
        assert!(((clock * 2.0).sin() - (72_000.0f64).sin() as f32).abs() < 1.0e-4);
    }

    #[test]
    fn zero_bob_frequency_freezes_clock() {
        let mut sim = open_plain();
        sim.settings.pickup.bob_frequency = 0.0;
        sim.elapsed = 12.5;
        assert_eq!(sim.bob_clock(), 0.0);
    }

    // Debug builds trip the assertion; release builds must shrug the frame off.
    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "invalid dt"))]
    fn nan_frame_does_not_poison_collectibles() {
        let mut sim = Simulation::from_parts(
            SimSettings::default(),
            ObstacleField::empty(),
            CollectibleTracker::new([Collectible::new(Vec3::new(0.0, 1.8, 5.0), 2.0)]),
        );
        sim.tick(&InputSnapshot::new(f32::NAN));

        let item = sim.collectibles.items()[0];
        assert!(item.spin.is_finite());
        assert!(item.position.y.is_finite());
        assert!(sim.camera.position.iter().all(|c| c.is_finite()));
        assert_eq!(sim.elapsed, 0.0);

        sim.character.position = item.position;
        let out = sim.tick(&InputSnapshot::new(DT));
        assert_eq!(out.picked_up, 1);
        assert!(sim.collectibles.is_complete());
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "invalid dt"))]
    fn negative_frame_is_a_no_op_step() {
        let mut sim = open_plain();
        let before = sim.character;
        sim.tick(&InputSnapshot::new(-0.5).with_key(MoveKey::Forward));
        assert_eq!(sim.character.position, before.position);
        assert_eq!(sim.elapsed, 0.0);
    }
}
