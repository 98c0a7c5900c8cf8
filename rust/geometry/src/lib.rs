//! Massing Geometry
//!
//! Geometry leaves for parametric building models: 2D profiles with holes,
//! earcutr triangulation, profile extrusion, box/cylinder solids, and typed
//! primitives with placement and material tags. Uses nalgebra for
//! transformations.

pub mod error;
pub mod extrusion;
pub mod mesh;
pub mod primitive;
pub mod profile;
pub mod solids;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point2, Point3, UnitQuaternion, Vector2, Vector3};

pub use error::{Error, Result};
pub use extrusion::{apply_transform, extrude_profile};
pub use mesh::Mesh;
pub use primitive::{Material, Placement, Primitive, Shape};
pub use profile::{create_circle, create_rectangle, signed_area, Profile2D, Triangulation};
pub use solids::{box_mesh, cylinder_mesh};
