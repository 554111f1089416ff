use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::layers::Layer;

use super::components::{Projectile, ProjectileEntity, ProjectileLifetime, ProjectileState};

/// Sole allocator of projectile entities for one session.
///
/// Members are never despawned by the pool; they move between `free` and `active`.
/// `all` is exactly `free ∪ active` and the two never overlap.
#[derive(Resource, Debug, Default)]
pub struct ProjectilePool {
    all: HashSet<Entity>,
    free: Vec<ProjectileEntity>,
    active: HashSet<Entity>,
}

/// Where an acquired projectile came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acquired {
    Reused(ProjectileEntity),
    Allocated(ProjectileEntity),
}

impl Acquired {
    #[inline]
    pub fn entity(self) -> ProjectileEntity {
        match self {
            Self::Reused(p) | Self::Allocated(p) => p,
        }
    }
}

/// Result of handing a projectile back. None of these is an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// Was active, now on the free list.
    Recycled,
    /// Already on the free list. Nothing changed.
    AlreadyInactive,
    /// Not allocated by this pool. Nothing changed.
    Unknown,
}

impl ProjectilePool {
    /// Hand out a free member, or allocate a new one through `allocate` when none is free.
    ///
    /// Growth is unbounded.
    pub fn acquire_with(&mut self, allocate: impl FnOnce() -> Entity) -> Acquired {
        if let Some(p) = self.free.pop() {
            self.active.insert(p.0);
            return Acquired::Reused(p);
        }

        let e = allocate();
        self.all.insert(e);
        self.active.insert(e);
        Acquired::Allocated(ProjectileEntity(e))
    }

    /// Like [`Self::acquire_with`], spawning an inactive pooled projectile on a miss.
    ///
    /// The caller owns writing the activation state (see `SpawnCoordinator::spawn`).
    pub fn acquire(&mut self, commands: &mut Commands, lifetime_secs: f32) -> Acquired {
        self.acquire_with(|| commands.spawn(pooled_projectile_bundle(lifetime_secs)).id())
    }

    pub fn release(&mut self, e: Entity) -> Release {
        if self.active.remove(&e) {
            self.free.push(ProjectileEntity(e));
            Release::Recycled
        } else if self.all.contains(&e) {
            Release::AlreadyInactive
        } else {
            Release::Unknown
        }
    }

    /// Number of projectiles ever allocated.
    #[inline]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    #[inline]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn contains(&self, e: Entity) -> bool {
        self.all.contains(&e)
    }

    #[inline]
    pub fn is_active(&self, e: Entity) -> bool {
        self.active.contains(&e)
    }

    pub fn is_free(&self, e: Entity) -> bool {
        self.free.iter().any(|p| p.0 == e)
    }

    /// Forget every member. Only valid when the session (and its entities) goes away.
    pub fn clear(&mut self) {
        self.all.clear();
        self.free.clear();
        self.active.clear();
    }
}

#[inline]
pub fn active_projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Projectile, [Layer::World])
}

/// "Disabled" without structural changes: empty filters means we collide with nothing.
#[inline]
pub fn inactive_projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Projectile, [] as [Layer; 0])
}

/// Components of a freshly allocated projectile, in the inactive state.
///
/// Physics components stay present for the entity's whole life. Inactive projectiles are
/// hidden, still, and filter out every layer, so they are neither drawn nor simulated.
pub fn pooled_projectile_bundle(lifetime_secs: f32) -> impl Bundle {
    (
        Name::new("Projectile(Pooled)"),
        Projectile::default(),
        ProjectileState::Inactive,
        ProjectileLifetime::from_secs(lifetime_secs),
        Sprite {
            color: Color::srgb(1.0, 0.85, 0.3),
            custom_size: Some(Vec2::splat(8.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 2.0),
        Visibility::Hidden,
        RigidBody::Dynamic,
        Sensor,
        Collider::circle(4.0),
        inactive_projectile_layers(),
        LinearVelocity(Vec2::ZERO),
        CollisionEventsEnabled,
    )
}

/// New session, new pool. Old members died with the previous session's turret.
pub fn reset_pool(mut pool: ResMut<ProjectilePool>) {
    if !pool.is_empty() {
        debug!("Resetting projectile pool ({} members)", pool.len());
    }
    pool.clear();
}
