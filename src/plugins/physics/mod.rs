//! Physics: avian2d in a top-down arena.
//!
//! Projectiles are sensor bodies driven purely by `LinearVelocity`; the only contacts we
//! care about are `CollisionStart` messages against the arena bounds.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    // Needs `Tunables`, so `core::plugin` must run first.
    let ppm = app.world().resource::<Tunables>().pixels_per_meter;
    app.add_plugins(PhysicsPlugins::default().with_length_unit(ppm))
        .insert_resource(Gravity(Vec2::ZERO));
}
