//! Projectiles plugin: message-based spawning from a growable pool.
//!
//! # Data flow
//! ```text
//!   Update (variable dt), chained after the turret input system
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) Producer: turret::apply_pointer_input                                 │
//!│      - writes: SpawnProjectileRequest { angle }                            │
//!│                                                                            │
//!│  (B) Consumer: spawner::spawn_requested_projectiles                        │
//!│      - reads: SpawnProjectileRequest, BulletLevel (optional)               │
//!│      - mutates: ProjectilePool (pop free / allocate)                       │
//!│      - writes: Projectile, ProjectileState, Transform, LinearVelocity,     │
//!│                Visibility, CollisionLayers, ChildOf(turret)                │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedUpdate / FixedPostUpdate
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (C) retire::retire_expired          lifetime ran out                      │
//!│  (D) retire::retire_on_arena_contact CollisionStart with a World collider  │
//!│      - both trigger ProjectileDeactivated                                  │
//!│                                                                            │
//!│  (E) Observer: spawner::on_projectile_deactivated                          │
//!│      - ProjectilePool::release, then writes the inactive invariants        │
//!└────────────────────────────────────────────────────────────────────────────┘
//!
//! Feedback loop:
//!   the observer pushes the entity back onto the free list
//!   the consumer pops it again on the next shot
//! ```
//!
//! The pool is the only allocator and never despawns members, so entity identity is stable
//! across reuse.

pub mod components;
pub mod messages;
pub mod pool;
pub mod retire;
pub mod spawner;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::plugins::session::GameState;

pub struct ProjectilesPlugin;

/// Ordering anchor for systems that must see this frame's projectiles.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpawnProjectiles;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<pool::ProjectilePool>()
            .add_message::<messages::SpawnProjectileRequest>()
            .add_observer(spawner::on_projectile_deactivated)
            .add_systems(OnEnter(GameState::InGame), pool::reset_pool)
            .add_systems(OnExit(GameState::InGame), pool::reset_pool);

        app.add_systems(
            Update,
            spawner::spawn_requested_projectiles
                .in_set(SpawnProjectiles)
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            retire::retire_expired.run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedPostUpdate,
            retire::retire_on_arena_contact
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        );
    }
}
