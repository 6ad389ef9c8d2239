use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::{layers::Layer, tunables::Tunables};
use crate::plugins::timers::OneShotTimers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GunTimer {
    /// Cooldown over.
    Ready,
}

pub type GunTimers = OneShotTimers<GunTimer>;

/// Projectile weapon. Spawns one bullet per `fire_time` while `trigger` is held.
#[derive(Component, Debug, Clone)]
#[require(Transform, GunTimers)]
pub struct BulletGun {
    pub trigger: MouseButton,
    pub fire_time: Duration,
    /// Distance from the owner's origin to the bullet spawn point, along its facing.
    pub muzzle_offset: f32,
    pub speed: f32,
    pub damage: u32,
    pub lifetime: f32,
    pub firing: bool,
}

impl BulletGun {
    pub fn from_tunables(tunables: &Tunables, trigger: MouseButton) -> Self {
        Self {
            trigger,
            fire_time: tunables.gun_fire_time,
            muzzle_offset: 18.0,
            speed: tunables.bullet_speed,
            damage: tunables.bullet_damage,
            lifetime: tunables.bullet_lifetime,
            firing: false,
        }
    }
}

/// Who fired a bullet. Decides what it can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletSide {
    /// Hits walls and targets.
    Player,
    /// Hits walls and the player.
    Hostile,
}

impl BulletSide {
    pub fn layers(self) -> CollisionLayers {
        match self {
            Self::Player => CollisionLayers::new(Layer::PlayerBullet, [Layer::World, Layer::Enemy]),
            Self::Hostile => {
                CollisionLayers::new(Layer::EnemyBullet, [Layer::World, Layer::Player])
            }
        }
    }

    pub(super) fn color(self) -> Color {
        match self {
            Self::Player => Color::srgb(1.0, 0.85, 0.3),
            Self::Hostile => Color::srgb(0.9, 0.3, 0.9),
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Bullet {
    pub damage: u32,
}

#[derive(Component, Deref, DerefMut)]
pub struct Lifetime(pub Timer);
