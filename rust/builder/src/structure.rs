// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structural columns and perimeter walls
//!
//! Purely per-floor geometry with no cross-floor dependency: a square column
//! grid clipped to the footprint, and four translucent wall panels flush
//! with the footprint edges.

use massing_geometry::{Material, Placement, Primitive, Shape};

/// Column shaft radius
pub const COLUMN_RADIUS: f64 = 0.3;

/// Wall panel thickness
pub const WALL_THICKNESS: f64 = 0.2;

/// Generate one floor's columns on a `columns × columns` grid
///
/// The grid is centered on the footprint; positions falling outside
/// `[-width/2, width/2] × [-height/2, height/2]` are skipped.
pub fn generate_columns(
    width: f64,
    height: f64,
    columns: u32,
    column_spacing: f64,
    y: f64,
    column_height: f64,
) -> Vec<Primitive> {
    let mut out = Vec::with_capacity((columns * columns) as usize);
    let half_grid = (columns as f64 - 1.0) / 2.0;

    for col in 0..columns {
        for row in 0..columns {
            let x = (col as f64 - half_grid) * column_spacing;
            let z = (row as f64 - half_grid) * column_spacing;

            if x.abs() <= width / 2.0 && z.abs() <= height / 2.0 {
                out.push(Primitive::new(
                    Shape::Cylinder {
                        radius: COLUMN_RADIUS,
                        height: column_height,
                    },
                    Placement::at(x, y + column_height / 2.0, z),
                    Material::Column,
                ));
            }
        }
    }

    out
}

/// Generate the four wall panels for one floor
///
/// Panels sit at mid-storey height, flush with the footprint edges, and all
/// share the building-wide opacity.
pub fn generate_walls(
    width: f64,
    height: f64,
    floor_height: f64,
    floor_spacing: f64,
    floor: u32,
    opacity: f64,
) -> Vec<Primitive> {
    let y = floor as f64 * (floor_height + floor_spacing) + floor_height / 2.0;
    let material = Material::Wall { opacity };

    vec![
        // Front and back walls
        Primitive::new(
            Shape::Box {
                width,
                height: floor_height,
                depth: WALL_THICKNESS,
            },
            Placement::at(0.0, y, height / 2.0),
            material,
        ),
        Primitive::new(
            Shape::Box {
                width,
                height: floor_height,
                depth: WALL_THICKNESS,
            },
            Placement::at(0.0, y, -height / 2.0),
            material,
        ),
        // Side walls
        Primitive::new(
            Shape::Box {
                width: WALL_THICKNESS,
                height: floor_height,
                depth: height,
            },
            Placement::at(-width / 2.0, y, 0.0),
            material,
        ),
        Primitive::new(
            Shape::Box {
                width: WALL_THICKNESS,
                height: floor_height,
                depth: height,
            },
            Placement::at(width / 2.0, y, 0.0),
            material,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_grid_within_bounds() {
        // 4x4 grid at 5.0 spacing lands on ±2.5/±7.5, all inside 20x15
        let columns = generate_columns(20.0, 15.0, 4, 5.0, 0.1, 3.1);
        assert_eq!(columns.len(), 16);

        for column in &columns {
            let p = column.placement.position;
            assert!(p.x.abs() <= 10.0);
            assert!(p.z.abs() <= 7.5);
            assert!((p.y - (0.1 + 3.1 / 2.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_grid_clipped_to_footprint() {
        // 4x4 grid at 10.0 spacing lands on ±5/±15; only ±5 survives both axes
        let columns = generate_columns(20.0, 15.0, 4, 10.0, 0.1, 3.1);
        assert_eq!(columns.len(), 4);

        for column in &columns {
            let p = column.placement.position;
            assert!((p.x.abs() - 5.0).abs() < 1e-9);
            assert!((p.z.abs() - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_column_shape() {
        let columns = generate_columns(20.0, 15.0, 2, 5.0, 0.0, 3.1);
        for column in &columns {
            assert_eq!(column.material, Material::Column);
            match column.shape {
                Shape::Cylinder { radius, height } => {
                    assert_eq!(radius, COLUMN_RADIUS);
                    assert_eq!(height, 3.1);
                }
                ref other => panic!("expected cylinder, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_four_walls_per_floor() {
        let walls = generate_walls(20.0, 15.0, 3.0, 0.1, 2, 0.5);
        assert_eq!(walls.len(), 4);

        let y = 2.0 * 3.1 + 1.5;
        for wall in &walls {
            assert!((wall.placement.position.y - y).abs() < 1e-9);
            assert_eq!(wall.material, Material::Wall { opacity: 0.5 });
        }

        // Flush with the footprint edges
        assert!((walls[0].placement.position.z - 7.5).abs() < 1e-9);
        assert!((walls[1].placement.position.z - -7.5).abs() < 1e-9);
        assert!((walls[2].placement.position.x - -10.0).abs() < 1e-9);
        assert!((walls[3].placement.position.x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_wall_panel_sizes() {
        let walls = generate_walls(20.0, 15.0, 3.0, 0.1, 0, 0.3);

        match walls[0].shape {
            Shape::Box {
                width,
                height,
                depth,
            } => {
                assert_eq!(width, 20.0);
                assert_eq!(height, 3.0);
                assert_eq!(depth, WALL_THICKNESS);
            }
            ref other => panic!("expected box wall, got {:?}", other),
        }

        match walls[2].shape {
            Shape::Box {
                width,
                height,
                depth,
            } => {
                assert_eq!(width, WALL_THICKNESS);
                assert_eq!(height, 3.0);
                assert_eq!(depth, 15.0);
            }
            ref other => panic!("expected box wall, got {:?}", other),
        }
    }
}
