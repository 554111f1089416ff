//! Best-effort fire feedback: barrel recoil, sound cues and the fire-fail hint.
//!
//! Nothing in here feeds back into gameplay. Missing sinks (no barrel, no audio backend)
//! simply mean the request is dropped.

use bevy::prelude::*;

use crate::common::signals::FireFailed;
use crate::plugins::session::GameState;

const RECOIL_SECS: f32 = 0.12;
const RECOIL_KICK: f32 = 6.0;
const FIRE_FAIL_HINT_SECS: f32 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Shot,
}

/// Fire-and-forget request to a feedback sink.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackRequest {
    Animation,
    Sound(SoundCue),
}

/// Kick-back animation for a barrel sprite along its local -X.
#[derive(Component, Debug, Clone)]
pub struct Recoil {
    timer: Timer,
    rest_x: f32,
}

impl Recoil {
    pub fn new(rest_x: f32) -> Self {
        Self {
            timer: finished_timer(RECOIL_SECS),
            rest_x,
        }
    }

    pub fn restart(&mut self) {
        self.timer.reset();
    }

    /// Current displacement from the rest position, `0` once the kick has played out.
    pub fn offset(&self) -> f32 {
        RECOIL_KICK * (1.0 - self.timer.fraction())
    }
}

/// Short-lived "can't fire" indicator, armed by the "fire-failed" signal.
#[derive(Resource, Debug, Clone)]
pub struct FireFailHint {
    timer: Timer,
}

impl Default for FireFailHint {
    fn default() -> Self {
        Self {
            timer: finished_timer(FIRE_FAIL_HINT_SECS),
        }
    }
}

impl FireFailHint {
    pub fn is_visible(&self) -> bool {
        !self.timer.is_finished()
    }
}

fn finished_timer(secs: f32) -> Timer {
    let mut timer = Timer::from_seconds(secs, TimerMode::Once);
    let duration = timer.duration();
    timer.tick(duration);
    timer
}

pub fn plugin(app: &mut App) {
    app.init_resource::<FireFailHint>()
        .add_message::<FeedbackRequest>()
        .add_observer(arm_fire_fail_hint)
        .add_systems(
            Update,
            (play_feedback, animate_recoil, tick_fire_fail_hint)
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
}

pub fn play_feedback(mut reader: MessageReader<FeedbackRequest>, mut q_recoil: Query<&mut Recoil>) {
    for request in reader.read() {
        match request {
            FeedbackRequest::Animation => {
                for mut recoil in &mut q_recoil {
                    recoil.restart();
                }
            }
            // No audio backend in this build; the cue is only traced.
            FeedbackRequest::Sound(cue) => debug!("Sound cue: {cue:?}"),
        }
    }
}

fn animate_recoil(
    time: Res<Time>,
    hint: Res<FireFailHint>,
    mut q: Query<(&mut Recoil, &mut Transform, Option<&mut Sprite>)>,
) {
    for (mut recoil, mut tf, sprite) in &mut q {
        recoil.timer.tick(time.delta());
        tf.translation.x = recoil.rest_x - recoil.offset();

        if let Some(mut sprite) = sprite {
            sprite.color = if hint.is_visible() {
                Color::srgb(0.9, 0.25, 0.25)
            } else {
                Color::srgb(0.55, 0.6, 0.68)
            };
        }
    }
}

fn tick_fire_fail_hint(time: Res<Time>, mut hint: ResMut<FireFailHint>) {
    hint.timer.tick(time.delta());
}

/// Subscriber for the "fire-failed" signal.
pub fn arm_fire_fail_hint(_ev: On<FireFailed>, mut hint: ResMut<FireFailHint>) {
    hint.timer.reset();
}
