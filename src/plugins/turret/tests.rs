use bevy::input::touch::{touch_screen_input_system, TouchInput, TouchPhase, Touches};
use bevy::prelude::*;

use super::{FireController, FireOutcome, PointerInput, Turret, TurretBarrel, TurretEntity};
use crate::common::signals::FireEnabledChanged;
use crate::common::test_utils::{ensure_messages, read_messages, run_system_once};
use crate::common::tunables::Tunables;
use crate::plugins::camera::MainCamera;
use crate::plugins::core::{self, SignalLog};
use crate::plugins::feedback::{FeedbackRequest, SoundCue};
use crate::plugins::projectiles::messages::SpawnProjectileRequest;

const EPS: f32 = 1e-4;

fn aim_at(x: f32, y: f32) -> f32 {
    FireController::default().update_aim(Vec2::new(x, y))
}

// --------------------------------------------------------------------------------------
// FireController
// --------------------------------------------------------------------------------------

#[test]
fn starts_at_rest_with_gate_open() {
    let c = FireController::default();
    assert_eq!(c.aim_angle(), FireController::REST_AIM_DEG);
    assert!(c.can_fire());
}

#[test]
fn aim_follows_pointer_inside_clamp_range() {
    assert!((aim_at(0.0, 10.0) - 90.0).abs() < EPS);
    assert!((aim_at(1.0, 1.0) - 45.0).abs() < EPS);
    assert!((aim_at(-1.0, 1.0) - 135.0).abs() < EPS);
}

#[test]
fn pointer_opposite_reference_axis_clamps_to_max() {
    assert_eq!(aim_at(-5.0, 0.0), FireController::MAX_AIM_DEG);
    assert_eq!(aim_at(-5.0, -0.0), FireController::MAX_AIM_DEG);
}

#[test]
fn pointer_along_reference_axis_clamps_to_min() {
    assert_eq!(aim_at(5.0, 0.0), FireController::MIN_AIM_DEG);
    assert_eq!(aim_at(5.0, 0.01), FireController::MIN_AIM_DEG);
    assert_eq!(aim_at(5.0, -0.01), FireController::MIN_AIM_DEG);
}

#[test]
fn pointer_below_turret_mirrors_onto_upper_half() {
    assert!((aim_at(1.0, -1.0) - 45.0).abs() < EPS);
    assert!((aim_at(-1.0, -1.0) - 135.0).abs() < EPS);
    assert!((aim_at(0.0, -3.0) - 90.0).abs() < EPS);
}

#[test]
fn zero_pointer_vector_aims_at_min() {
    assert_eq!(aim_at(0.0, 0.0), FireController::MIN_AIM_DEG);
}

#[test]
fn non_finite_pointer_keeps_previous_aim() {
    let mut c = FireController::default();
    c.update_aim(Vec2::new(1.0, 1.0));
    c.update_aim(Vec2::new(f32::NAN, 1.0));
    c.update_aim(Vec2::new(f32::INFINITY, 0.0));
    assert!((c.aim_angle() - 45.0).abs() < EPS);
}

#[test]
fn aim_is_always_within_bounds() {
    let mut c = FireController::default();
    for i in 0..360 {
        let a = (i as f32).to_radians();
        for r in [0.001, 1.0, 250.0, 1.0e6] {
            let angle = c.update_aim(Vec2::from_angle(a) * r);
            assert!(
                (FireController::MIN_AIM_DEG..=FireController::MAX_AIM_DEG).contains(&angle),
                "angle {angle} out of bounds for {i} deg"
            );
        }
    }
}

#[test]
fn fire_respects_gate() {
    let mut c = FireController::default();
    c.update_aim(Vec2::new(-1.0, 1.0));
    assert!(matches!(c.fire(), FireOutcome::Fired { angle } if (angle - 135.0).abs() < EPS));

    c.set_fire_enabled(false);
    assert_eq!(c.fire(), FireOutcome::Blocked);

    c.set_fire_enabled(true);
    assert!(matches!(c.fire(), FireOutcome::Fired { .. }));
}

#[test]
fn reset_restores_defaults() {
    let mut c = FireController::default();
    c.update_aim(Vec2::new(1.0, 0.2));
    c.set_fire_enabled(false);
    c.reset();
    assert_eq!(c, FireController::default());
}

// --------------------------------------------------------------------------------------
// Systems
// --------------------------------------------------------------------------------------

fn input_world() -> World {
    let mut world = World::new();
    world.init_resource::<FireController>();
    world.init_resource::<SignalLog>();
    ensure_messages::<PointerInput>(&mut world);
    ensure_messages::<FeedbackRequest>(&mut world);
    ensure_messages::<SpawnProjectileRequest>(&mut world);
    world.add_observer(super::on_fire_enabled_changed);
    world.add_observer(core::log_fire_failed);
    world.flush();
    world
}

fn press(world: &mut World, inputs: &[PointerInput]) {
    for input in inputs {
        world.write_message(*input);
    }
    run_system_once(world, super::apply_pointer_input);
}

#[test]
fn blocked_fire_only_notifies() {
    let mut world = input_world();
    world.trigger(FireEnabledChanged(false));
    world.flush();

    press(&mut world, &[PointerInput::Pressed]);

    assert_eq!(world.resource::<SignalLog>().fires_failed, 1);
    assert!(read_messages::<SpawnProjectileRequest>(&mut world).is_empty());
    assert!(read_messages::<FeedbackRequest>(&mut world).is_empty());
}

#[test]
fn enabled_fire_requests_one_spawn_with_current_aim() {
    let mut world = input_world();
    world.trigger(FireEnabledChanged(true));
    world.flush();

    press(
        &mut world,
        &[PointerInput::Moved(Vec2::new(-1.0, 1.0)), PointerInput::Pressed],
    );

    let spawns = read_messages::<SpawnProjectileRequest>(&mut world);
    assert_eq!(spawns.len(), 1);
    assert!((spawns[0].angle - 135.0).abs() < EPS);
    assert_eq!(world.resource::<SignalLog>().fires_failed, 0);
}

#[test]
fn fired_shot_requests_animation_then_sound() {
    let mut world = input_world();

    press(&mut world, &[PointerInput::Pressed]);

    assert_eq!(
        read_messages::<FeedbackRequest>(&mut world),
        vec![FeedbackRequest::Animation, FeedbackRequest::Sound(SoundCue::Shot)]
    );
}

#[test]
fn each_press_in_a_frame_fires_with_the_aim_it_saw() {
    let mut world = input_world();

    press(
        &mut world,
        &[
            PointerInput::Moved(Vec2::new(1.0, 1.0)),
            PointerInput::Pressed,
            PointerInput::Moved(Vec2::new(0.0, 1.0)),
            PointerInput::Pressed,
            PointerInput::Pressed,
        ],
    );

    let angles: Vec<f32> = read_messages::<SpawnProjectileRequest>(&mut world)
        .into_iter()
        .map(|r| r.angle)
        .collect();
    assert_eq!(angles.len(), 3);
    assert!((angles[0] - 45.0).abs() < EPS);
    assert!((angles[1] - 90.0).abs() < EPS);
    assert!((angles[2] - 90.0).abs() < EPS);
}

#[test]
fn moving_pointer_does_not_fire() {
    let mut world = input_world();

    press(&mut world, &[PointerInput::Moved(Vec2::new(3.0, 4.0))]);

    assert!(read_messages::<SpawnProjectileRequest>(&mut world).is_empty());
    assert!(world.resource::<FireController>().aim_angle() > FireController::MIN_AIM_DEG);
}

#[test]
fn fire_failed_signal_is_not_sent_when_gate_open() {
    let mut world = input_world();
    let failed = world.resource::<SignalLog>().fires_failed;

    press(&mut world, &[PointerInput::Pressed, PointerInput::Pressed]);

    assert_eq!(world.resource::<SignalLog>().fires_failed, failed);
    assert_eq!(read_messages::<SpawnProjectileRequest>(&mut world).len(), 2);
}

#[test]
fn spawn_turret_builds_base_and_barrel_at_rest_angle() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<FireController>();

    run_system_once(&mut world, super::spawn_turret);

    let TurretEntity(base) = *world.resource::<TurretEntity>();
    assert!(world.get::<Turret>(base).is_some());

    let barrel_rotation = world
        .query_filtered::<&Transform, With<TurretBarrel>>()
        .single(&world)
        .unwrap()
        .rotation;
    let expected = Quat::from_rotation_z(FireController::REST_AIM_DEG.to_radians());
    assert!(barrel_rotation.abs_diff_eq(expected, EPS));
}

#[test]
fn barrel_follows_aim() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<FireController>();
    run_system_once(&mut world, super::spawn_turret);

    world
        .resource_mut::<FireController>()
        .update_aim(Vec2::new(1.0, 1.0));
    run_system_once(&mut world, super::sync_barrel_rotation);

    let rotation = world
        .query_filtered::<&Transform, With<TurretBarrel>>()
        .single(&world)
        .unwrap()
        .rotation;
    assert!(rotation.abs_diff_eq(Quat::from_rotation_z(45f32.to_radians()), EPS));
}

// --------------------------------------------------------------------------------------
// Pointer adapter
// --------------------------------------------------------------------------------------

/// Window, main camera and turret, with no cursor over the window.
fn pointer_world() -> (World, Entity) {
    let mut world = World::new();
    ensure_messages::<PointerInput>(&mut world);
    let window = world.spawn(Window::default()).id();
    world.spawn((Camera::default(), MainCamera, GlobalTransform::default()));
    world.spawn((Turret, GlobalTransform::default()));
    (world, window)
}

#[test]
fn pointer_adapter_is_noop_without_window() {
    let mut world = World::new();
    ensure_messages::<PointerInput>(&mut world);
    let mut buttons = ButtonInput::<MouseButton>::default();
    buttons.press(MouseButton::Left);
    world.insert_resource(buttons);

    run_system_once(&mut world, super::input::read_pointer);

    assert!(read_messages::<PointerInput>(&mut world).is_empty());
}

#[test]
fn left_click_writes_one_press() {
    let (mut world, _) = pointer_world();
    let mut buttons = ButtonInput::<MouseButton>::default();
    buttons.press(MouseButton::Left);
    buttons.press(MouseButton::Right);
    world.insert_resource(buttons);

    run_system_once(&mut world, super::input::read_pointer);

    assert_eq!(read_messages::<PointerInput>(&mut world), vec![PointerInput::Pressed]);
}

#[test]
fn touch_start_fires_without_moving_aim() {
    let (mut world, window) = pointer_world();
    world.init_resource::<Touches>();
    ensure_messages::<TouchInput>(&mut world);
    world.write_message(TouchInput {
        phase: TouchPhase::Started,
        position: Vec2::new(10.0, 20.0),
        window,
        force: None,
        id: 7,
    });
    run_system_once(&mut world, touch_screen_input_system);

    run_system_once(&mut world, super::input::read_pointer);

    assert_eq!(read_messages::<PointerInput>(&mut world), vec![PointerInput::Pressed]);
}
