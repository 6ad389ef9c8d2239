//! Collision layers.
//!
//! Ray casts use the same layers as contacts: an emitter's mask is just a
//! `LayerMask` built from these variants.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    World,
    Player,
    Enemy,
    PlayerBullet,
    EnemyBullet,
}
