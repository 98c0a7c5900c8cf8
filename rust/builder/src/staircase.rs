// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Staircase flight generation
//!
//! One flight connects a floor to the floor above. Flights alternate run
//! direction per floor, and each flight reports the opening the slab above
//! must subtract so the stairs land on something passable.

use crate::slab::SLAB_THICKNESS;
use massing_core::StaircaseConfig;
use massing_geometry::{Material, Placement, Primitive, Shape};
use nalgebra::Point2;

/// Direction a flight runs along the depth (Z) axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    /// Flights strictly alternate per floor, starting positive at floor 0
    pub fn for_floor(floor: u32) -> Self {
        if floor % 2 == 0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Unit sign along Z
    pub fn sign(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// Stairwell opening silhouette in the (x, z) plane
///
/// An ordered closed loop. Vertex winding depends on the flight direction
/// and must reach the slab untouched: the hole side walls and cap
/// subtraction orient themselves off this order.
#[derive(Debug, Clone, PartialEq)]
pub struct CutPolygon {
    pub vertices: Vec<Point2<f64>>,
}

/// One generated flight of stairs
#[derive(Debug, Clone)]
pub struct Flight {
    /// Step primitives, bottom to top
    pub steps: Vec<Primitive>,
    /// Opening for the slab one floor up; `None` when there are no steps
    pub cut: Option<CutPolygon>,
}

/// Generate the flight climbing away from `floor_offset`
///
/// The rise covers the floor height plus one slab thickness so the top step
/// meets the upper slab flush. With zero steps the flight is empty and cuts
/// nothing.
pub fn generate_flight(
    cfg: &StaircaseConfig,
    floor_height: f64,
    floor_offset: f64,
    direction: Direction,
) -> Flight {
    if cfg.number_of_steps == 0 {
        return Flight {
            steps: Vec::new(),
            cut: None,
        };
    }

    let count = cfg.number_of_steps as f64;
    let run = count * cfg.step_depth;
    let step_height = (floor_height + SLAB_THICKNESS) / count;
    let half_width = cfg.step_width / 2.0;

    let start_x = cfg.step_x_position
        + match direction {
            Direction::Positive => cfg.step_width,
            Direction::Negative => 0.0,
        };
    let start_z = cfg.step_y_position
        + match direction {
            Direction::Positive => -run + half_width,
            Direction::Negative => 0.0,
        };

    let mut steps = Vec::with_capacity(cfg.number_of_steps as usize);
    for i in 0..cfg.number_of_steps {
        let i = i as f64;
        steps.push(Primitive::new(
            Shape::Box {
                width: cfg.step_width,
                height: step_height,
                depth: cfg.step_depth,
            },
            Placement::at(
                start_x,
                floor_offset + i * step_height,
                start_z + direction.sign() * i * cfg.step_depth,
            ),
            Material::Stair,
        ));
    }

    // Opening flush with the stair boundaries plus one step of clearance in
    // the travel direction; vertex order differs per direction.
    let vertices = match direction {
        Direction::Positive => vec![
            Point2::new(start_x - half_width, start_z - cfg.step_depth),
            Point2::new(start_x + half_width, start_z - cfg.step_depth),
            Point2::new(start_x + half_width, start_z - cfg.step_depth + run),
            Point2::new(start_x - half_width, start_z - cfg.step_depth + run),
        ],
        Direction::Negative => vec![
            Point2::new(start_x + half_width, start_z + cfg.step_depth),
            Point2::new(start_x - half_width, start_z + cfg.step_depth),
            Point2::new(start_x - half_width, start_z + cfg.step_depth - run),
            Point2::new(start_x + half_width, start_z + cfg.step_depth - run),
        ],
    };

    Flight {
        steps,
        cut: Some(CutPolygon { vertices }),
    }
}
