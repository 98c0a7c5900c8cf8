//! Massing Builder
//!
//! Procedural generation of multi-floor buildings: floor slabs with
//! stairwell openings, alternating staircase flights, column grids, and
//! perimeter walls, composed into a renderer-agnostic primitive scene.
//!
//! Generation is a pure function of a [`massing_core::BuildingConfig`]: no
//! validation, no shared state, no retained references, and deterministic
//! output for identical input.

pub mod building;
pub mod scene;
pub mod slab;
pub mod staircase;
pub mod structure;

pub use building::{floor_elevation, generate, BASE_ELEVATION};
pub use scene::Scene;
pub use slab::{generate_slab, SLAB_THICKNESS};
pub use staircase::{generate_flight, CutPolygon, Direction, Flight};
pub use structure::{generate_columns, generate_walls, COLUMN_RADIUS, WALL_THICKNESS};
