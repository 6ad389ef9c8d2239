//! Hit-scan query seam.
//!
//! The emitter only needs "first thing on this ray within range on these layers".
//! `SpatialQuery` answers that in the game; tests plug in a canned answer.

use avian2d::prelude::*;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanHit {
    pub entity: Entity,
    pub point: Vec2,
    pub distance: f32,
}

pub trait HitScan {
    fn hit_scan(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_range: f32,
        mask: LayerMask,
    ) -> Option<ScanHit>;
}

impl HitScan for SpatialQuery<'_, '_> {
    fn hit_scan(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_range: f32,
        mask: LayerMask,
    ) -> Option<ScanHit> {
        let filter = SpatialQueryFilter::from_mask(mask);
        // Solid: a ray starting inside a target hits it at distance 0.
        self.cast_ray(origin, direction, max_range, true, &filter)
            .map(|hit| ScanHit {
                entity: hit.entity,
                point: origin + *direction * hit.distance,
                distance: hit.distance,
            })
    }
}
