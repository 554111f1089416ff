//! Turret plugin: aim from pointer movement, fire on pointer press.
//!
//! ```text
//! Update: input::read_pointer -> apply_pointer_input -> (projectiles) spawn_requested_projectiles
//!                                                    -> sync_barrel_rotation
//! ```
//!
//! The turret is a static base with a rotating barrel child. Projectiles are parented to
//! the base so barrel rotation never drags shots already in flight.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::signals::{FireEnabledChanged, FireFailed};
use crate::common::tunables::Tunables;
use crate::plugins::feedback::{FeedbackRequest, Recoil, SoundCue};
use crate::plugins::projectiles::messages::SpawnProjectileRequest;
use crate::plugins::projectiles::SpawnProjectiles;
use crate::plugins::session::GameState;

pub mod controller;
pub mod input;

pub use controller::{FireController, FireOutcome};
pub use input::PointerInput;

const BARREL_LENGTH: f32 = 36.0;

#[derive(Component)]
pub struct Turret;

#[derive(Component)]
pub struct TurretBarrel;

/// Handle to the turret base of the running session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurretEntity(pub Entity);

pub fn plugin(app: &mut App) {
    app.init_resource::<FireController>()
        .add_message::<PointerInput>()
        .add_message::<FeedbackRequest>()
        .add_message::<SpawnProjectileRequest>()
        .add_observer(on_fire_enabled_changed)
        .add_systems(OnEnter(GameState::InGame), (reset_controller, spawn_turret).chain())
        .add_systems(OnExit(GameState::InGame), forget_turret)
        .add_systems(
            Update,
            (
                input::read_pointer,
                apply_pointer_input.before(SpawnProjectiles),
                sync_barrel_rotation,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
}

fn reset_controller(mut controller: ResMut<FireController>) {
    controller.reset();
}

fn spawn_turret(
    mut commands: Commands,
    tunables: Res<Tunables>,
    controller: Res<FireController>,
) {
    let base = commands
        .spawn((
            Name::new("Turret"),
            Turret,
            Sprite {
                color: Color::srgb(0.2, 0.75, 0.9),
                custom_size: Some(Vec2::splat(40.0)),
                ..default()
            },
            Transform::from_translation(tunables.turret_position.extend(1.0)),
            DespawnOnExit(GameState::InGame),
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("TurretBarrel"),
                TurretBarrel,
                Transform::from_rotation(barrel_rotation(controller.aim_angle())),
                Visibility::default(),
            ))
            .with_children(|barrel| {
                // Sprite pivot sits mid-barrel; the barrel entity itself is the hinge.
                barrel.spawn((
                    Name::new("TurretBarrelSprite"),
                    Sprite {
                        color: Color::srgb(0.55, 0.6, 0.68),
                        custom_size: Some(Vec2::new(BARREL_LENGTH, 10.0)),
                        ..default()
                    },
                    Transform::from_xyz(BARREL_LENGTH * 0.5, 0.0, 0.5),
                    Recoil::new(BARREL_LENGTH * 0.5),
                ));
            });
        })
        .id();

    commands.insert_resource(TurretEntity(base));
}

fn forget_turret(mut commands: Commands) {
    commands.remove_resource::<TurretEntity>();
}

#[inline]
fn barrel_rotation(aim_angle: f32) -> Quat {
    Quat::from_rotation_z(aim_angle.to_radians())
}

/// Apply pointer messages in arrival order.
///
/// A press uses the aim as updated by every move before it, and its spawn request carries
/// that angle, so later moves in the same frame cannot retarget it.
pub fn apply_pointer_input(
    mut commands: Commands,
    mut reader: MessageReader<PointerInput>,
    mut controller: ResMut<FireController>,
    mut feedback: MessageWriter<FeedbackRequest>,
    mut spawns: MessageWriter<SpawnProjectileRequest>,
) {
    for input in reader.read() {
        match *input {
            PointerInput::Moved(local) => {
                controller.update_aim(local);
            }
            PointerInput::Pressed => match controller.fire() {
                FireOutcome::Fired { angle } => {
                    feedback.write(FeedbackRequest::Animation);
                    spawns.write(SpawnProjectileRequest { angle });
                    feedback.write(FeedbackRequest::Sound(SoundCue::Shot));
                }
                FireOutcome::Blocked => {
                    debug!("Fire blocked by fire gate");
                    commands.trigger(FireFailed);
                }
            },
        }
    }
}

fn sync_barrel_rotation(
    controller: Res<FireController>,
    mut q_barrel: Query<&mut Transform, With<TurretBarrel>>,
) {
    if !controller.is_changed() {
        return;
    }
    for mut tf in &mut q_barrel {
        tf.rotation = barrel_rotation(controller.aim_angle());
    }
}

/// Subscriber for the "fire-enabled-changed" signal.
pub fn on_fire_enabled_changed(ev: On<FireEnabledChanged>, mut controller: ResMut<FireController>) {
    let FireEnabledChanged(enabled) = *ev.event();
    controller.set_fire_enabled(enabled);
}

#[cfg(test)]
mod tests;
