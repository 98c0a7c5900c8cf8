// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generated scene container

use massing_geometry::{Mesh, Primitive, Result};

/// The full primitive set for one generated building
///
/// Plain owned data: each generation call produces a fresh scene and the
/// previous one is dropped wholesale. Rendering backends tessellate on their
/// side; the scene keeps no handles to anything it hands out.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single primitive
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Add a batch of primitives
    pub fn extend(&mut self, primitives: impl IntoIterator<Item = Primitive>) {
        self.primitives.extend(primitives);
    }

    /// Iterate over the primitives
    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    /// Number of primitives
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene is empty
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Tessellate every primitive into one combined mesh
    pub fn tessellate(&self) -> Result<Mesh> {
        let meshes = self
            .primitives
            .iter()
            .map(|p| p.tessellate())
            .collect::<Result<Vec<_>>>()?;

        let mut combined = Mesh::new();
        combined.merge_all(&meshes);
        Ok(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use massing_geometry::{Material, Placement, Shape};

    fn unit_box() -> Primitive {
        Primitive::new(
            Shape::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            Placement::at(0.0, 0.0, 0.0),
            Material::Stair,
        )
    }

    #[test]
    fn test_tessellate_combines_counts() {
        let mut scene = Scene::new();
        scene.push(unit_box());
        scene.push(unit_box());

        let combined = scene.tessellate().unwrap();
        let single = unit_box().tessellate().unwrap();

        assert_eq!(combined.vertex_count(), single.vertex_count() * 2);
        assert_eq!(combined.triangle_count(), single.triangle_count() * 2);
    }

    #[test]
    fn test_tessellate_indices_in_range() {
        let mut scene = Scene::new();
        for i in 0..3 {
            let mut prim = unit_box();
            prim.placement = Placement::at(i as f64 * 2.0, 0.0, 0.0);
            scene.push(prim);
        }

        let mesh = scene.tessellate().unwrap();
        let vertex_count = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < vertex_count));
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert!(scene.tessellate().unwrap().is_empty());
    }
}
