// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Box and cylinder solid tessellation
//!
//! Both solids are centered at the origin; placement is applied by the
//! caller. Non-positive dimensions produce an empty mesh rather than an
//! error, so degenerate configurations tessellate to nothing.

use crate::extrusion::{apply_transform, extrude_profile};
use crate::mesh::Mesh;
use crate::profile::create_circle;
use nalgebra::{Matrix4, Point3, Rotation3, Vector3};

/// Tessellate an axis-aligned box centered at the origin
///
/// 24 vertices (4 per face) so each face carries its own flat normal.
pub fn box_mesh(width: f64, height: f64, depth: f64) -> Mesh {
    if width <= 0.0 || height <= 0.0 || depth <= 0.0 {
        return Mesh::new();
    }

    let hw = width / 2.0;
    let hh = height / 2.0;
    let hd = depth / 2.0;

    let mut mesh = Mesh::with_capacity(24, 36);

    // Each face: 4 corners in counter-clockwise order viewed from outside
    let faces: [([Point3<f64>; 4], Vector3<f64>); 6] = [
        // +Z
        (
            [
                Point3::new(-hw, -hh, hd),
                Point3::new(hw, -hh, hd),
                Point3::new(hw, hh, hd),
                Point3::new(-hw, hh, hd),
            ],
            Vector3::z(),
        ),
        // -Z
        (
            [
                Point3::new(hw, -hh, -hd),
                Point3::new(-hw, -hh, -hd),
                Point3::new(-hw, hh, -hd),
                Point3::new(hw, hh, -hd),
            ],
            -Vector3::z(),
        ),
        // +Y
        (
            [
                Point3::new(-hw, hh, hd),
                Point3::new(hw, hh, hd),
                Point3::new(hw, hh, -hd),
                Point3::new(-hw, hh, -hd),
            ],
            Vector3::y(),
        ),
        // -Y
        (
            [
                Point3::new(-hw, -hh, -hd),
                Point3::new(hw, -hh, -hd),
                Point3::new(hw, -hh, hd),
                Point3::new(-hw, -hh, hd),
            ],
            -Vector3::y(),
        ),
        // +X
        (
            [
                Point3::new(hw, -hh, hd),
                Point3::new(hw, -hh, -hd),
                Point3::new(hw, hh, -hd),
                Point3::new(hw, hh, hd),
            ],
            Vector3::x(),
        ),
        // -X
        (
            [
                Point3::new(-hw, -hh, -hd),
                Point3::new(-hw, -hh, hd),
                Point3::new(-hw, hh, hd),
                Point3::new(-hw, hh, -hd),
            ],
            -Vector3::x(),
        ),
    ];

    for (corners, normal) in faces {
        let base = mesh.vertex_count() as u32;
        for corner in corners {
            mesh.add_vertex(corner, normal);
        }
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }

    mesh
}

/// Tessellate a Y-axis cylinder centered at the origin
///
/// Built as an extruded circle rotated upright; segment count adapts to the
/// radius.
pub fn cylinder_mesh(radius: f64, height: f64) -> Mesh {
    if radius <= 0.0 || height <= 0.0 {
        return Mesh::new();
    }

    let profile = create_circle(radius, None);

    // Extrusion runs along +Z; stand it up along +Y and center vertically
    let upright = Rotation3::from_axis_angle(&Vector3::x_axis(), -std::f64::consts::FRAC_PI_2)
        .to_homogeneous();
    let center = Matrix4::new_translation(&Vector3::new(0.0, -height / 2.0, 0.0));

    let mut mesh = match extrude_profile(&profile, height, None) {
        Ok(mesh) => mesh,
        Err(_) => return Mesh::new(),
    };
    apply_transform(&mut mesh, &(center * upright));
    mesh
}
