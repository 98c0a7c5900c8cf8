// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generate the default building and print scene statistics.
//!
//! Run with `RUST_LOG=massing_builder=trace` to watch per-floor generation.

use massing_builder::generate;
use massing_core::{clamp_config, BuildingConfig, ConfigStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "massing_builder=debug".into()),
        )
        .init();

    let config = clamp_config(&BuildingConfig::default());
    let scene = generate(&config);

    println!("Primitives: {}", scene.len());

    let mesh = scene.tessellate().expect("default config tessellates");
    let (min, max) = mesh.bounds();
    println!("Vertices:   {}", mesh.vertex_count());
    println!("Triangles:  {}", mesh.triangle_count());
    println!(
        "Bounds:     ({:.2}, {:.2}, {:.2}) .. ({:.2}, {:.2}, {:.2})",
        min.x, min.y, min.z, max.x, max.y, max.z
    );

    // Round-trip the config through the named store, the way a UI save flow
    // would
    let mut store = ConfigStore::new();
    store
        .save("default tower", config.clone())
        .expect("name is non-empty");
    let restored = store.load("default tower").expect("just saved");
    assert_eq!(restored, &config);
    println!("Saved as:   {:?}", store.names());
}
