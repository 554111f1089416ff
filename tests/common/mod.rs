//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `turret_minigame::game::configure_headless` to install gameplay plugins.
//!
//! Pointer input is written straight into the `PointerInput` message queue; there is no
//! window to read a cursor from.

#![allow(dead_code)]

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use turret_minigame::plugins::projectiles::components::{Projectile, ProjectileState};
use turret_minigame::plugins::projectiles::pool::ProjectilePool;
use turret_minigame::plugins::turret::PointerInput;

pub fn app_headless() -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    turret_minigame::game::configure_headless(&mut app);
    app
}

/// Headless app that already went through `OnEnter(GameState::InGame)`.
pub fn app_in_session() -> App {
    let mut app = app_headless();
    app.update();
    app
}

pub fn pointer(app: &mut App, inputs: &[PointerInput]) {
    for input in inputs {
        app.world_mut().write_message(*input);
    }
}

pub fn press_times(app: &mut App, n: usize) {
    for _ in 0..n {
        app.world_mut().write_message(PointerInput::Pressed);
    }
}

pub fn pool(app: &App) -> &ProjectilePool {
    app.world().resource::<ProjectilePool>()
}

/// Every projectile entity with its state, in spawn order.
pub fn projectiles(app: &mut App) -> Vec<(Entity, Projectile, ProjectileState)> {
    let mut found: Vec<_> = app
        .world_mut()
        .query::<(Entity, &Projectile, &ProjectileState)>()
        .iter(app.world())
        .map(|(e, p, s)| (e, *p, *s))
        .collect();
    found.sort_by_key(|(e, _, _)| *e);
    found
}
