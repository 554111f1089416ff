//! Spawn coordinator: the bridge between fire requests, the pool, and the scene.
//!
//! # Invariants owned here
//! Active projectiles are visible, moving along `Projectile::direction`, colliding with the
//! arena, and children of the turret. Inactive projectiles are hidden, still, and collide
//! with nothing. Both sets of writes live in this file so they cannot drift apart.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::signals::ProjectileDeactivated;
use crate::common::tunables::Tunables;
use crate::plugins::session::{BulletLevel, GameState};
use crate::plugins::turret::TurretEntity;

use super::components::{Projectile, ProjectileEntity, ProjectileLifetime, ProjectileState};
use super::messages::SpawnProjectileRequest;
use super::pool::{active_projectile_layers, inactive_projectile_layers, ProjectilePool, Release};

/// What `despawn` ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Despawn {
    Recycled,
    AlreadyInactive,
    /// Not a pool member; the entity was destroyed instead.
    Destroyed,
    /// Not a pool member and not a projectile. Left alone.
    Ignored,
}

/// Everything needed to put a projectile into play or take it out again.
///
/// Scene attach is `ChildOf(turret)`; without a turret the projectile stays at the world
/// origin and is scoped to the session instead.
#[derive(SystemParam)]
pub struct SpawnCoordinator<'w, 's> {
    commands: Commands<'w, 's>,
    pool: ResMut<'w, ProjectilePool>,
    tunables: Res<'w, Tunables>,
    level: Option<Res<'w, BulletLevel>>,
    turret: Option<Res<'w, TurretEntity>>,
    projectiles: Query<'w, 's, &'static mut Projectile>,
}

impl SpawnCoordinator<'_, '_> {
    /// Damage level for the next shot.
    ///
    /// Falls back to `Tunables::default_damage_level` when no level provider exists.
    pub fn current_level(&self) -> u32 {
        match &self.level {
            Some(level) => level.0,
            None => {
                debug!(
                    "No BulletLevel provider, using default level {}",
                    self.tunables.default_damage_level
                );
                self.tunables.default_damage_level
            }
        }
    }

    pub fn spawn(&mut self, aim_angle: f32, damage_level: u32) -> ProjectileEntity {
        let lifetime = self.tunables.projectile_lifetime_secs;
        let acquired = self.pool.acquire(&mut self.commands, lifetime);
        let ProjectileEntity(e) = acquired.entity();

        // Reused members already carry a `Projectile`; fresh ones are still queued.
        let projectile = match self.projectiles.get_mut(e) {
            Ok(mut reused) => {
                reused.reset_for_fire(aim_angle, damage_level);
                *reused
            }
            Err(_) => {
                let fresh = Projectile {
                    direction: aim_angle,
                    damage_level,
                };
                self.commands.entity(e).insert(fresh);
                fresh
            }
        };
        let velocity = projectile.heading() * self.tunables.projectile_speed;

        let mut entity = self.commands.entity(e);
        entity.insert((
            ProjectileState::Active,
            ProjectileLifetime::from_secs(lifetime),
            Transform::from_xyz(0.0, 0.0, 2.0),
            Visibility::Visible,
            LinearVelocity(velocity),
            active_projectile_layers(),
        ));

        match self.turret.as_deref() {
            Some(TurretEntity(turret)) => {
                entity.insert(ChildOf(*turret));
            }
            None => {
                // No parent to take it down with the session.
                entity.insert(DespawnOnExit(GameState::InGame));
            }
        }

        trace!(?acquired, aim_angle, damage_level, "Projectile spawned");
        acquired.entity()
    }

    pub fn despawn(&mut self, e: Entity) -> Despawn {
        match self.pool.release(e) {
            Release::Recycled => {
                self.commands.entity(e).insert((
                    ProjectileState::Inactive,
                    Visibility::Hidden,
                    LinearVelocity(Vec2::ZERO),
                    inactive_projectile_layers(),
                ));
                Despawn::Recycled
            }
            Release::AlreadyInactive => Despawn::AlreadyInactive,
            Release::Unknown => {
                if !self.projectiles.contains(e) {
                    return Despawn::Ignored;
                }
                debug!("Projectile {e} is not pooled, destroying it");
                self.commands.entity(e).despawn();
                Despawn::Destroyed
            }
        }
    }
}

/// Consumer: turn every spawn request of this frame into an active projectile.
pub fn spawn_requested_projectiles(
    mut reader: MessageReader<SpawnProjectileRequest>,
    mut spawner: SpawnCoordinator,
) {
    for req in reader.read() {
        let level = spawner.current_level();
        spawner.spawn(req.angle, level);
    }
}

/// Subscriber for the "projectile-deactivated" signal.
pub fn on_projectile_deactivated(ev: On<ProjectileDeactivated>, mut spawner: SpawnCoordinator) {
    let e = ev.event().projectile;
    let outcome = spawner.despawn(e);
    trace!(?outcome, "Projectile {e} deactivated");
}
