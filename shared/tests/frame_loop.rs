use shared::{
    CollectibleTracker, InputSnapshot, MoveKey, ObstacleField, SimSettings, Simulation, Vec3,
    clamp_frame_dt,
};

const DT: f32 = 1.0 / 60.0;

#[test]
fn walking_forward_for_one_second() {
    let mut sim = Simulation::from_parts(
        SimSettings::default(),
        ObstacleField::empty(),
        CollectibleTracker::default(),
    );
    assert_eq!(sim.character.position, Vec3::new(0.0, 1.8, 0.0));

    let input = InputSnapshot::new(DT).with_key(MoveKey::Forward);
    for _ in 0..60 {
        let out = sim.tick(&input);
        assert_eq!(out.character_position.y, 1.8);
        assert!(sim.character.grounded);
    }

    let p = sim.character.position;
    assert!((p.z - 6.0).abs() < 1.0e-3, "z = {}", p.z);
    assert!(p.x.abs() < 1.0e-6);
}

#[test]
fn sprinting_into_a_rock_never_penetrates_it() {
    let settings = SimSettings::default();
    let rock = shared::Obstacle::new(Vec3::new(0.0, 2.0, 20.0), 2.0);
    let mut sim = Simulation::from_parts(
        settings,
        ObstacleField::from_obstacles([rock]),
        CollectibleTracker::default(),
    );

    let input = InputSnapshot::new(DT)
        .with_key(MoveKey::Forward)
        .with_key(MoveKey::Sprint);
    for _ in 0..300 {
        sim.tick(&input);
        let dx = sim.character.position.x - rock.position.x;
        let dz = sim.character.position.z - rock.position.z;
        let d = (dx * dx + dz * dz).sqrt();
        assert!(d >= rock.radius + settings.movement.character_radius - 1.0e-3);
    }
}

#[test]
fn reaching_every_collectible_completes_the_world() {
    let mut sim = Simulation::new(SimSettings::default());
    let total = sim.collectibles.total();
    let targets: Vec<Vec3> = sim.collectibles.items().iter().map(|c| c.position).collect();

    for target in targets {
        // Teleport next to each collectible and let one frame run.
        sim.character.position = Vec3::new(target.x, 1.8, target.z);
        sim.tick(&InputSnapshot::new(clamp_frame_dt(DT)));
    }

    assert_eq!(sim.collectibles.collected(), total);
    assert!(sim.collectibles.is_complete());
    assert!(sim.collectibles.items().iter().all(|c| !c.visible));

    // Further ticks are harmless no-ops for the tracker.
    let out = sim.tick(&InputSnapshot::new(DT));
    assert_eq!(out.picked_up, 0);
    assert_eq!(out.collected, total);
}

#[test]
fn long_stall_is_clamped_before_integration() {
    let mut sim = Simulation::from_parts(
        SimSettings::default(),
        ObstacleField::empty(),
        CollectibleTracker::default(),
    );
    let input = InputSnapshot::new(clamp_frame_dt(2.0)).with_key(MoveKey::Forward);
    let out = sim.tick(&input);
    assert!((out.character_position.z - 6.0 * 0.033).abs() < 1.0e-4);
}
