//! Cross-component signal table.
//!
//! Every signal is a Bevy [`Event`] delivered to global observers, synchronously and in
//! trigger order. Publishers use `commands.trigger(..)` (or `world.trigger(..)` in tests);
//! subscribers register with `app.add_observer(..)`.
//!
//! ```text
//!   name                      payload
//!   "fire-enabled-changed"    FireEnabledChanged(bool)
//!   "projectile-deactivated"  ProjectileDeactivated { projectile: Entity }
//!   "fire-failed"             FireFailed
//! ```

use bevy::prelude::*;

/// Opens or closes the fire gate. Owned by whatever system meters shooting
/// (session hotkeys in this crate).
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FireEnabledChanged(pub bool);

/// A projectile left play and should go back to its pool.
///
/// Publishing this twice for the same projectile is harmless.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectileDeactivated {
    pub projectile: Entity,
}

/// A fire attempt was rejected by the fire gate.
#[derive(Event, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FireFailed;
