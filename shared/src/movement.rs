use crate::{
    input::{InputSnapshot, sanitize_dt},
    obstacles::ObstacleField,
    settings::MovementSettings,
    utils::{Vec2, Vec3, forward_from_yaw, normalize_or_zero, right_from_forward},
};

/// Pose and vertical motion of the player character.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharacterState {
    /// Character center in world space. `y` never drops below the ground height.
    pub position: Vec3,
    /// Signed vertical speed (units per second, +Y up).
    pub vertical_velocity: f32,
    /// True when resting on the ground with no vertical velocity.
    pub grounded: bool,
    /// Yaw the character mesh faces. Only follows the view while moving.
    pub facing_yaw: f32,
}

impl CharacterState {
    /// A character standing on the ground at planar position `(x, z)`.
    pub fn grounded_at(x: f32, z: f32, settings: &MovementSettings) -> Self {
        Self {
            position: Vec3::new(x, settings.ground_height, z),
            vertical_velocity: 0.0,
            grounded: true,
            facing_yaw: 0.0,
        }
    }
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::grounded_at(0.0, 0.0, &MovementSettings::default())
    }
}

/// Perform one controller tick.
///
/// Behavior, in order
/// - Builds planar intent from the held keys and normalizes it.
/// - Rotates intent into world space using the view `yaw` and normalizes again.
/// - Moves horizontally at walk or sprint speed.
/// - Starts a jump when jump is held and the character is grounded.
/// - Integrates gravity, then clamps to the floor plane.
/// - Pushes the character out of each overlapping obstacle (single pass, generation order).
/// - Radially clamps the planar position to `world_radius`.
/// - Faces the view yaw only if there was movement intent this tick.
///
/// Obstacle resolution is not iterated to convergence: overlapping several
/// obstacles at once can leave a small residual penetration.
#[inline]
pub fn step_movement(
    state: CharacterState,
    yaw: f32,
    input: &InputSnapshot,
    obstacles: &ObstacleField,
    world_radius: f32,
    settings: &MovementSettings,
    dt_seconds: f32,
) -> CharacterState {
    debug_assert!(
        dt_seconds >= 0.0 && dt_seconds.is_finite(),
        "step_movement called with invalid dt {dt_seconds}"
    );
    let dt = sanitize_dt(dt_seconds);

    let mut next = state;

    // 1-2) Planar intent, then world-space direction.
    let direction = world_direction(yaw, input.axis());

    // 3) Horizontal displacement.
    let speed = if input.sprinting() {
        settings.sprint_speed
    } else {
        settings.walk_speed
    };
    next.position += direction * (speed * dt);

    // 4) Jump. Held jump re-triggers on every grounded tick.
    if input.jumping() && next.grounded {
        next.vertical_velocity = settings.jump_impulse;
        next.grounded = false;
    }

    // 5) Gravity.
    next.vertical_velocity -= settings.gravity * dt;
    next.position.y += next.vertical_velocity * dt;

    // 6) Floor plane.
    if next.position.y <= settings.ground_height {
        next.position.y = settings.ground_height;
        next.vertical_velocity = 0.0;
        next.grounded = true;
    } else {
        next.grounded = false;
    }

    // 7) Obstacles.
    next.position = resolve_obstacles(next.position, settings.character_radius, obstacles);

    // 8) World bounds.
    next.position = clamp_to_world(next.position, world_radius);

    // 9) Facing.
    if direction.norm_squared() > 0.0 {
        next.facing_yaw = yaw;
    }

    next
}

/// World-space unit direction for the held keys, or zero with no intent.
#[inline]
fn world_direction(yaw: f32, axis: Vec2) -> Vec3 {
    let intent = normalize_or_zero(axis);
    let forward = forward_from_yaw(yaw);
    let right = right_from_forward(forward);
    normalize_or_zero(forward * intent.y + right * intent.x)
}

/// Push `position` out of every obstacle it overlaps on the ground plane.
///
/// A position exactly on an obstacle center has no push direction and is left as is.
fn resolve_obstacles(mut position: Vec3, radius: f32, obstacles: &ObstacleField) -> Vec3 {
    for obstacle in obstacles.iter() {
        let offset = Vec2::new(
            position.x - obstacle.position.x,
            position.z - obstacle.position.z,
        );
        let distance = offset.norm();
        let min_distance = radius + obstacle.radius;

        if distance > 0.0 && distance < min_distance {
            let push = offset / distance * (min_distance - distance);
            position.x += push.x;
            position.z += push.y;
        }
    }
    position
}

/// Project the planar position back onto the boundary circle if it lies outside it.
fn clamp_to_world(mut position: Vec3, world_radius: f32) -> Vec3 {
    let distance = Vec2::new(position.x, position.z).norm();
    if distance > world_radius {
        let scale = world_radius / distance;
        position.x *= scale;
        position.z *= scale;
    }
    position
}
