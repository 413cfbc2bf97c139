//! Walk a query point along a corridor of random blockers and print how the
//! visible area changes.
//!
//! Usage:
//!   cargo run -p sightline --example shadow_walk -- [seed]

use sightline::api::{
    compute_visibility_many, draw_blockers, BlockerIds, RandomSceneCfg, SceneReplay, SweepCfg,
};
use sightline::Vec2;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025);
    let blockers = match draw_blockers(
        &RandomSceneCfg::default(),
        SceneReplay { seed, index: 0 },
        &mut BlockerIds::default(),
    ) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("scene: {e}");
            return;
        }
    };
    let path: Vec<Vec2<f64>> = (0..=10)
        .map(|k| Vec2::new(50.0 + 90.0 * k as f64, 350.0))
        .collect();
    let polys = match compute_visibility_many(&path, &blockers, &SweepCfg::default()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("sweep: {e}");
            return;
        }
    };
    println!("{} blockers (seed {seed})", blockers.len());
    for (p, poly) in path.iter().zip(&polys) {
        println!(
            "at ({:6.1}, {:6.1}): V={:4}, area={:10.1}",
            p.x,
            p.y,
            poly.len(),
            poly.area()
        );
    }
}
