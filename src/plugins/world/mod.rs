//! World plugin: arena bounds.
//!
//! The walls are what retires projectiles that miss everything: a `CollisionStart` between
//! an active projectile and a `Layer::World` collider sends it back to the pool.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::tunables::Tunables;
use crate::plugins::session::GameState;

const WALL_THICKNESS: f32 = 30.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_arena);
}

fn spawn_arena(mut commands: Commands, tunables: Res<Tunables>) {
    let wall_color = Color::srgb(0.25, 0.27, 0.33);
    let half = tunables.arena_half_extents;
    let t = WALL_THICKNESS;

    let wall_layers = CollisionLayers::new(Layer::World, [Layer::Projectile]);

    let walls = [
        ("WallTop", Vec2::new(0.0, half.y + t * 0.5), Vec2::new(half.x * 2.0 + t * 2.0, t)),
        ("WallBottom", Vec2::new(0.0, -half.y - t * 0.5), Vec2::new(half.x * 2.0 + t * 2.0, t)),
        ("WallLeft", Vec2::new(-half.x - t * 0.5, 0.0), Vec2::new(t, half.y * 2.0)),
        ("WallRight", Vec2::new(half.x + t * 0.5, 0.0), Vec2::new(t, half.y * 2.0)),
    ];

    for (name, pos, size) in walls {
        commands.spawn((
            Name::new(name),
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
            DespawnOnExit(GameState::InGame),
        ));
    }
}
