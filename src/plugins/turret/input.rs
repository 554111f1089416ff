//! Pointer input boundary.
//!
//! Gameplay only sees [`PointerInput`] messages in turret-local space. The adapter below
//! builds them from the window cursor, mouse and touch input; tests write them directly.

use bevy::input::touch::Touches;
use bevy::prelude::*;

use crate::plugins::camera::MainCamera;

use super::Turret;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    /// Pointer position relative to the turret origin.
    Moved(Vec2),
    Pressed,
}

/// Convert viewport input into turret-local pointer messages.
///
/// A no-op in headless apps: missing input resources, window, camera or turret end the
/// system early.
pub fn read_pointer(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    q_turret: Query<&GlobalTransform, With<Turret>>,
    mut last_cursor: Local<Option<Vec2>>,
    mut writer: MessageWriter<PointerInput>,
) {
    let Ok(window) = windows.single() else { return; };
    let Ok((camera, camera_tf)) = q_camera.single() else { return; };
    let Ok(turret_tf) = q_turret.single() else { return; };

    let to_local = |viewport: Vec2| -> Option<Vec2> {
        match camera.viewport_to_world_2d(camera_tf, viewport) {
            Ok(world) => Some(
                turret_tf
                    .affine()
                    .inverse()
                    .transform_point3(world.extend(0.0))
                    .truncate(),
            ),
            Err(e) => {
                debug!("viewport_to_world_2d failed: {e:?}");
                None
            }
        }
    };

    if let Some(cursor) = window.cursor_position() {
        if *last_cursor != Some(cursor) {
            *last_cursor = Some(cursor);
            if let Some(local) = to_local(cursor) {
                writer.write(PointerInput::Moved(local));
            }
        }
    }

    if buttons.is_some_and(|b| b.just_pressed(MouseButton::Left)) {
        writer.write(PointerInput::Pressed);
    }

    // A touch only fires; aim stays where the last cursor move left it.
    if let Some(touches) = touches {
        for touch in touches.iter_just_pressed() {
            trace!("Touch {} pressed", touch.id());
            writer.write(PointerInput::Pressed);
        }
    }
}
