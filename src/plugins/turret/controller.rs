//! Aim and fire-gate state for the turret.
//!
//! Pure state: no ECS access. The turret systems translate [`FireOutcome`] into messages and
//! signals.

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FireOutcome {
    Fired { angle: f32 },
    Blocked,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FireController {
    aim_angle: f32,
    can_fire: bool,
}

impl Default for FireController {
    fn default() -> Self {
        Self {
            aim_angle: Self::REST_AIM_DEG,
            can_fire: true,
        }
    }
}

impl FireController {
    pub const MIN_AIM_DEG: f32 = 20.0;
    pub const MAX_AIM_DEG: f32 = 160.0;
    /// Straight up.
    pub const REST_AIM_DEG: f32 = 90.0;

    #[inline]
    pub fn aim_angle(&self) -> f32 {
        self.aim_angle
    }

    #[inline]
    pub fn can_fire(&self) -> bool {
        self.can_fire
    }

    /// Aim toward a pointer given in turret-local space and return the new angle.
    ///
    /// The signed angle from +X is folded with `abs`, so a pointer below the turret aims
    /// like its mirror image above it. Left and right still map to distinct angles; only
    /// the lower half-plane is collapsed onto the upper one. A zero vector counts as 0°.
    /// Non-finite input is ignored.
    pub fn update_aim(&mut self, pointer_local: Vec2) -> f32 {
        if !pointer_local.is_finite() {
            return self.aim_angle;
        }

        let signed = pointer_local.y.atan2(pointer_local.x).to_degrees();
        self.aim_angle = signed.abs().clamp(Self::MIN_AIM_DEG, Self::MAX_AIM_DEG);
        self.aim_angle
    }

    #[inline]
    pub fn set_fire_enabled(&mut self, enabled: bool) {
        self.can_fire = enabled;
    }

    /// Decide a fire attempt. No cooldown: gating belongs to whoever toggles `can_fire`.
    #[inline]
    pub fn fire(&self) -> FireOutcome {
        if self.can_fire {
            FireOutcome::Fired {
                angle: self.aim_angle,
            }
        } else {
            FireOutcome::Blocked
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
