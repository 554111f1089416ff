//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub projectile_speed: f32,
    /// Active projectiles are recycled after this long even if they never hit a wall.
    pub projectile_lifetime_secs: f32,
    /// Damage level used when no `BulletLevel` provider is present at spawn time.
    pub default_damage_level: u32,
    pub arena_half_extents: Vec2,
    pub turret_position: Vec2,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            projectile_speed: 900.0,
            projectile_lifetime_secs: 3.0,
            default_damage_level: 3,
            arena_half_extents: Vec2::new(640.0, 360.0),
            turret_position: Vec2::new(0.0, -300.0),
        }
    }
}
