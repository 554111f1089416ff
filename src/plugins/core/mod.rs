//! Core plugin: shared resources and the signal log.
//!
//! `SignalLog` subscribes to every signal in the table and keeps running totals. It is the
//! cheapest way for debug tooling (and tests) to see what crossed the bus.

use bevy::prelude::*;

use crate::common::signals::{FireEnabledChanged, FireFailed, ProjectileDeactivated};
use crate::common::tunables::Tunables;

#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct SignalLog {
    pub fire_enabled_changes: u32,
    pub projectiles_deactivated: u32,
    pub fires_failed: u32,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
    app.init_resource::<SignalLog>()
        .add_observer(log_fire_enabled_changed)
        .add_observer(log_projectile_deactivated)
        .add_observer(log_fire_failed);
}

pub fn log_fire_enabled_changed(ev: On<FireEnabledChanged>, mut log: ResMut<SignalLog>) {
    log.fire_enabled_changes += 1;
    info!("Fire gate {}", if ev.event().0 { "opened" } else { "closed" });
}

pub fn log_projectile_deactivated(ev: On<ProjectileDeactivated>, mut log: ResMut<SignalLog>) {
    log.projectiles_deactivated += 1;
    trace!("Projectile {} deactivated", ev.event().projectile);
}

pub fn log_fire_failed(_ev: On<FireFailed>, mut log: ResMut<SignalLog>) {
    log.fires_failed += 1;
    debug!("Fire failed ({} so far)", log.fires_failed);
}
