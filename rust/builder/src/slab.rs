// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor slab generation

use crate::staircase::CutPolygon;
use massing_geometry::{create_rectangle, Material, Placement, Primitive, Shape};
use std::f64::consts::FRAC_PI_2;

/// Extrusion thickness of every slab
pub const SLAB_THICKNESS: f64 = 0.3;

/// Generate one floor slab with stairwell openings subtracted
///
/// The outline is `width × height` centered at the origin. The extrusion is
/// laid flat by a quarter turn about X, so the plate occupies
/// `[elevation - SLAB_THICKNESS, elevation]` vertically. Hole vertex order
/// is consumed exactly as the staircase emitted it.
pub fn generate_slab(width: f64, height: f64, elevation: f64, holes: &[CutPolygon]) -> Primitive {
    let mut profile = create_rectangle(width, height);
    for hole in holes {
        profile.add_hole(hole.vertices.clone());
    }

    Primitive::new(
        Shape::Extrusion {
            profile,
            depth: SLAB_THICKNESS,
        },
        Placement::rotated_x(0.0, elevation, 0.0, FRAC_PI_2),
        Material::Slab,
    )
}
