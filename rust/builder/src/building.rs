// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building orchestration
//!
//! Walks the floors bottom to top, threading each flight's cut polygon into
//! the slab one floor up, then closes with the roof slab and a second pass
//! for the walls.

use crate::scene::Scene;
use crate::slab::generate_slab;
use crate::staircase::{generate_flight, CutPolygon, Direction};
use crate::structure::{generate_columns, generate_walls};
use massing_core::BuildingConfig;
use smallvec::SmallVec;

/// Slabs float slightly above the ground plane
pub const BASE_ELEVATION: f64 = 0.1;

/// Elevation of the slab for a given floor
///
/// The roof is `floor_elevation(config.floors, ..)`.
pub fn floor_elevation(floor: u32, floor_height: f64, floor_spacing: f64) -> f64 {
    BASE_ELEVATION + floor as f64 * (floor_height + floor_spacing)
}

/// Generate the full building scene from a configuration
///
/// Total over its numeric domain: degenerate inputs produce empty or
/// zero-extent primitives, never a panic or an error. Every call builds a
/// fresh scene; callers replace the previous one wholesale.
pub fn generate(config: &BuildingConfig) -> Scene {
    let mut scene = Scene::new();
    let mut previous_cut: Option<CutPolygon> = None;

    for floor in 0..config.floors {
        let y = floor_elevation(floor, config.floor_height, config.floor_spacing);

        let flight = generate_flight(
            &config.staircase,
            config.floor_height,
            y,
            Direction::for_floor(floor),
        );

        // The opening cut by the floor below becomes this slab's hole
        let holes: SmallVec<[CutPolygon; 1]> = previous_cut.take().into_iter().collect();
        scene.push(generate_slab(config.width, config.height, y, &holes));

        tracing::trace!(floor, steps = flight.steps.len(), "floor generated");
        scene.extend(flight.steps);
        previous_cut = flight.cut;

        let column_height = config.floor_height + config.floor_spacing;
        scene.extend(generate_columns(
            config.width,
            config.height,
            config.columns,
            config.column_spacing,
            y,
            column_height,
        ));
    }

    // Roof slab, pierced by the top floor's flight
    let roof_y = floor_elevation(config.floors, config.floor_height, config.floor_spacing);
    let holes: SmallVec<[CutPolygon; 1]> = previous_cut.take().into_iter().collect();
    scene.push(generate_slab(config.width, config.height, roof_y, &holes));

    for floor in 0..config.floors {
        scene.extend(generate_walls(
            config.width,
            config.height,
            config.floor_height,
            config.floor_spacing,
            floor,
            config.walls_opacity,
        ));
    }

    tracing::debug!(
        floors = config.floors,
        primitives = scene.len(),
        "generated building scene"
    );

    scene
}
