//! Buffered spawn requests.
//!
//! The turret only records *intent* to fire. The spawner system is the single consumer that
//! touches the pool, so pool mutation stays in one place.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnProjectileRequest {
    /// Aim angle in degrees at the moment the shot was accepted.
    pub angle: f32,
}
