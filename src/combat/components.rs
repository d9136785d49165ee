//! Combat domain: health, cooldown, and projectile components.

use bevy::prelude::*;

/// Health component for damageable players. Dead means strictly below zero;
/// a player at zero health is still up.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn take_hit(&mut self, amount: i32) {
        self.current -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.current < 0
    }

    pub fn reset(&mut self) {
        self.current = self.max;
    }

    /// Remaining health as a fraction of max, clamped for bar rendering.
    pub fn percent(&self) -> f32 {
        (self.current.max(0) as f32 / self.max as f32).clamp(0.0, 1.0)
    }
}

/// Frames until the player may shoot again. Blocks firing while positive.
#[derive(Component, Debug, Default)]
pub struct ShotCooldown(pub u32);

impl ShotCooldown {
    pub fn tick(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    pub fn ready(&self) -> bool {
        self.0 == 0
    }
}

/// A fired shot with a bounded lifetime.
#[derive(Component, Debug)]
pub struct Projectile {
    pub owner: Entity,
    pub ttl: i32,
    active: bool,
}

impl Projectile {
    pub fn new(owner: Entity, ttl: i32) -> Self {
        Self {
            owner,
            ttl,
            active: true,
        }
    }

    pub fn tick(&mut self) {
        self.ttl -= 1;
    }

    pub fn expired(&self) -> bool {
        self.ttl < 0
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Latch the projectile inactive. Returns true only on the first call,
    /// so destruction stays idempotent.
    pub fn deactivate(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        was_active
    }
}

/// Damage immunity toggle, used by the dev tools.
#[derive(Component, Debug)]
pub struct Invincible;
