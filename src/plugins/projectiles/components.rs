use bevy::prelude::*;

/// Pool membership handle.
///
/// Only the pool hands these out, so holding one means "this entity was allocated by a
/// `ProjectilePool`".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProjectileEntity(pub Entity);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectileState {
    #[default]
    Inactive,
    Active,
}

/// Runtime data written once per activation.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Projectile {
    /// Heading in degrees, measured counter-clockwise from +X.
    pub direction: f32,
    pub damage_level: u32,
}

impl Projectile {
    #[inline]
    pub fn reset_for_fire(&mut self, direction: f32, damage_level: u32) {
        self.direction = direction;
        self.damage_level = damage_level;
    }

    /// Unit vector for `direction`.
    #[inline]
    pub fn heading(&self) -> Vec2 {
        Vec2::from_angle(self.direction.to_radians())
    }
}

/// Time an active projectile may stay in play.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct ProjectileLifetime(pub Timer);

impl ProjectileLifetime {
    pub fn from_secs(secs: f32) -> Self {
        Self(Timer::from_seconds(secs, TimerMode::Once))
    }
}
