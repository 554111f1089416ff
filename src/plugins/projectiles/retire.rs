//! Retirement: decide when an active projectile leaves play.
//!
//! Neither system touches the pool. They only publish `ProjectileDeactivated`; the
//! spawner's observer does the recycling. Duplicate signals for one projectile are fine.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::signals::ProjectileDeactivated;

use super::components::{ProjectileLifetime, ProjectileState};

#[inline]
fn is_in_layer(layers: &CollisionLayers, layer: Layer) -> bool {
    layers.memberships.has_all(layer)
}

/// Active projectiles touching the arena bounds leave play.
pub fn retire_on_arena_contact(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    q_projectiles: Query<&ProjectileState>,
    q_layers: Query<&CollisionLayers>,
    // Per-frame dedupe
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (projectile, other) = if q_projectiles.contains(ev.collider1) {
            (ev.collider1, ev.collider2)
        } else if q_projectiles.contains(ev.collider2) {
            (ev.collider2, ev.collider1)
        } else {
            continue;
        };

        let Ok(state) = q_projectiles.get(projectile) else { continue; };
        if *state != ProjectileState::Active {
            continue;
        }

        let Ok(other_layers) = q_layers.get(other) else { continue; };
        if !is_in_layer(other_layers, Layer::World) {
            continue;
        }

        if seen.insert(projectile) {
            commands.trigger(ProjectileDeactivated { projectile });
        }
    }
}

/// Active projectiles that outlive their lifetime leave play.
pub fn retire_expired(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &ProjectileState, &mut ProjectileLifetime)>,
) {
    for (e, state, mut lifetime) in &mut q {
        if *state != ProjectileState::Active {
            continue;
        }

        lifetime.tick(time.delta());
        if lifetime.just_finished() {
            commands.trigger(ProjectileDeactivated { projectile: e });
        }
    }
}
