//! Session lifecycle and the external collaborators of the turret.
//!
//! - `GameState` scopes everything spawned for one play session.
//! - `BulletLevel` is the damage level provider read at spawn time.
//! - Hotkeys drive the fire gate and level so a build can be played without a cost system:
//!   `Space` toggles the gate (through the "fire-enabled-changed" signal), `1`..`5` pick a level.

use bevy::prelude::*;

use crate::common::signals::FireEnabledChanged;
use crate::plugins::turret::FireController;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}

/// Current damage level. Absent outside a session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletLevel(pub u32);

impl BulletLevel {
    pub const START: u32 = 1;
    pub const MAX: u32 = 5;
}

const LEVEL_KEYS: [(KeyCode, u32); BulletLevel::MAX as usize] = [
    (KeyCode::Digit1, 1),
    (KeyCode::Digit2, 2),
    (KeyCode::Digit3, 3),
    (KeyCode::Digit4, 4),
    (KeyCode::Digit5, 5),
];

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), start_session)
        .add_systems(OnExit(GameState::InGame), end_session)
        .add_systems(Update, session_hotkeys.run_if(in_state(GameState::InGame)));
}

fn start_session(mut commands: Commands) {
    commands.insert_resource(BulletLevel(BulletLevel::START));
    info!("Session started");
}

fn end_session(mut commands: Commands) {
    commands.remove_resource::<BulletLevel>();
    info!("Session ended");
}

fn session_hotkeys(
    mut commands: Commands,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    controller: Res<FireController>,
    level: Option<ResMut<BulletLevel>>,
) {
    let Some(keys) = keys else { return; };

    if keys.just_pressed(KeyCode::Space) {
        commands.trigger(FireEnabledChanged(!controller.can_fire()));
    }

    let Some(mut level) = level else { return; };
    if let Some(&(_, picked)) = LEVEL_KEYS.iter().find(|(key, _)| keys.just_pressed(*key)) {
        if level.0 != picked {
            info!("Bullet level {} -> {}", level.0, picked);
            level.0 = picked;
        }
    }
}
