//! Core plugin: shared resources, global settings, and gameplay ordering.

use bevy::prelude::*;

use crate::common::{sets, tunables::Tunables};

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
    sets::configure(app);
}

#[cfg(test)]
mod tests;
