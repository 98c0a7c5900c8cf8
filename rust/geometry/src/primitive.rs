// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed shape descriptors
//!
//! A [`Primitive`] is an atomic renderable shape with a placement and a
//! material tag. Primitives are immutable plain data: generators emit them,
//! consumers tessellate or map them to backend materials as they see fit.

use crate::error::Result;
use crate::extrusion::{apply_transform, extrude_profile};
use crate::mesh::Mesh;
use crate::profile::Profile2D;
use crate::solids::{box_mesh, cylinder_mesh};
use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};

/// Atomic shape kinds a generator can emit
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Axis-aligned box, dimensions along local X/Y/Z
    Box { width: f64, height: f64, depth: f64 },
    /// Cylinder along the local Y axis
    Cylinder { radius: f64, height: f64 },
    /// 2D profile (with holes) extruded along the local Z axis
    Extrusion { profile: Profile2D, depth: f64 },
}

/// Position and orientation of a primitive in world space
#[derive(Debug, Clone)]
pub struct Placement {
    pub position: Point3<f64>,
    pub rotation: UnitQuaternion<f64>,
}

impl Placement {
    /// Placement with identity rotation
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Placement rotated about the world X axis
    ///
    /// A quarter turn lays a Z-extruded shape flat into the XZ plane, the way
    /// floor slabs are placed.
    pub fn rotated_x(x: f64, y: f64, z: f64, angle: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
            rotation: UnitQuaternion::from_axis_angle(&Vector3::x_axis(), angle),
        }
    }

    /// Homogeneous transform: rotation about the local origin, then translation
    pub fn to_matrix(&self) -> Matrix4<f64> {
        Matrix4::new_translation(&self.position.coords) * self.rotation.to_homogeneous()
    }
}

/// Material tag carried by a primitive
///
/// Tags only; mapping tags to actual render materials is the consumer's
/// business.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Slab,
    Column,
    Wall { opacity: f64 },
    Stair,
}

/// A shape descriptor with placement and material
#[derive(Debug, Clone)]
pub struct Primitive {
    pub shape: Shape,
    pub placement: Placement,
    pub material: Material,
}

impl Primitive {
    pub fn new(shape: Shape, placement: Placement, material: Material) -> Self {
        Self {
            shape,
            placement,
            material,
        }
    }

    /// Tessellate into triangle buffers in world space
    ///
    /// Degenerate dimensions (zero or negative extents) produce an empty
    /// mesh; only a genuinely untriangulatable profile is an error.
    pub fn tessellate(&self) -> Result<Mesh> {
        let mut mesh = match &self.shape {
            Shape::Box {
                width,
                height,
                depth,
            } => box_mesh(*width, *height, *depth),
            Shape::Cylinder { radius, height } => cylinder_mesh(*radius, *height),
            Shape::Extrusion { profile, depth } => {
                if *depth <= 0.0 {
                    return Ok(Mesh::new());
                }
                return extrude_profile(profile, *depth, Some(self.placement.to_matrix()));
            }
        };

        if !mesh.is_empty() {
            apply_transform(&mut mesh, &self.placement.to_matrix());
        }
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::create_rectangle;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_box_primitive_translation() {
        let prim = Primitive::new(
            Shape::Box {
                width: 2.0,
                height: 2.0,
                depth: 2.0,
            },
            Placement::at(10.0, 5.0, -3.0),
            Material::Stair,
        );

        let mesh = prim.tessellate().unwrap();
        let (min, max) = mesh.bounds();
        assert!((min.x - 9.0).abs() < 0.01);
        assert!((max.x - 11.0).abs() < 0.01);
        assert!((min.y - 4.0).abs() < 0.01);
        assert!((max.y - 6.0).abs() < 0.01);
        assert!((min.z - -4.0).abs() < 0.01);
        assert!((max.z - -2.0).abs() < 0.01);
    }

    #[test]
    fn test_extrusion_rotated_flat() {
        // Extrude in +Z, quarter turn about X: the slab ends up horizontal,
        // spanning [y - depth, y] vertically.
        let prim = Primitive::new(
            Shape::Extrusion {
                profile: create_rectangle(20.0, 15.0),
                depth: 0.3,
            },
            Placement::rotated_x(0.0, 6.3, 0.0, FRAC_PI_2),
            Material::Slab,
        );

        let mesh = prim.tessellate().unwrap();
        let (min, max) = mesh.bounds();
        assert!((min.x - -10.0).abs() < 0.01);
        assert!((max.x - 10.0).abs() < 0.01);
        assert!((min.y - 6.0).abs() < 0.01);
        assert!((max.y - 6.3).abs() < 0.01);
        assert!((min.z - -7.5).abs() < 0.01);
        assert!((max.z - 7.5).abs() < 0.01);
    }

    #[test]
    fn test_degenerate_shapes_tessellate_empty() {
        let flat_box = Primitive::new(
            Shape::Box {
                width: 1.0,
                height: 0.0,
                depth: 1.0,
            },
            Placement::at(0.0, 0.0, 0.0),
            Material::Stair,
        );
        assert!(flat_box.tessellate().unwrap().is_empty());

        let flat_extrusion = Primitive::new(
            Shape::Extrusion {
                profile: create_rectangle(1.0, 1.0),
                depth: 0.0,
            },
            Placement::at(0.0, 0.0, 0.0),
            Material::Slab,
        );
        assert!(flat_extrusion.tessellate().unwrap().is_empty());
    }

    #[test]
    fn test_material_tag_preserved() {
        let prim = Primitive::new(
            Shape::Cylinder {
                radius: 0.3,
                height: 3.1,
            },
            Placement::at(2.5, 1.65, 2.5),
            Material::Column,
        );
        assert_eq!(prim.material, Material::Column);
    }
}
