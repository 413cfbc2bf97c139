//! JSON scene input and per-query output records.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use sightline::api::{Blocker, BlockerIds, VisPolygon};
use sightline::Vec2;

fn default_color() -> String {
    "black".to_string()
}

/// One blocker as written in the scene file.
#[derive(Debug, Deserialize, Serialize)]
pub struct BlockerSpec {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(default = "default_color")]
    pub color: String,
}

impl From<&Blocker> for BlockerSpec {
    fn from(b: &Blocker) -> Self {
        let (x1, y1, x2, y2) = b.coords();
        Self {
            x1,
            y1,
            x2,
            y2,
            color: b.color().to_string(),
        }
    }
}

/// Scene file: `{"blockers": [...]}`.
#[derive(Debug, Deserialize, Serialize)]
pub struct SceneFile {
    pub blockers: Vec<BlockerSpec>,
}

impl SceneFile {
    /// Flatten into blockers, ids assigned by `ids` in file order.
    pub fn into_blockers(self, ids: &mut BlockerIds) -> Result<Vec<Blocker>> {
        let mut out = Vec::with_capacity(self.blockers.len());
        for (k, b) in self.blockers.into_iter().enumerate() {
            if ![b.x1, b.y1, b.x2, b.y2].iter().all(|v| v.is_finite()) {
                bail!("blocker #{k}: coordinates must be finite");
            }
            let blocker = ids
                .blocker(Vec2::new(b.x1, b.y1), Vec2::new(b.x2, b.y2), b.color)
                .with_context(|| format!("blocker #{k}: blocker ids exhausted"))?;
            out.push(blocker);
        }
        Ok(out)
    }
}

pub fn load_scene(path: &Path) -> Result<Vec<Blocker>> {
    let raw = fs::read(path).with_context(|| format!("reading scene {}", path.display()))?;
    let scene: SceneFile = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing scene {}", path.display()))?;
    scene.into_blockers(&mut BlockerIds::starting_at(1))
}

/// Result of one visibility query.
#[derive(Debug, Serialize)]
pub struct QueryRecord {
    pub at: [f64; 2],
    pub vertices: Vec<[f64; 2]>,
    /// `[xmin, ymin, xmax, ymax]`
    pub bbox: [f64; 4],
    pub area: f64,
    /// Ids of blockers reaching into the visible region.
    pub touched: Vec<u32>,
}

impl QueryRecord {
    pub fn new(at: Vec2<f64>, poly: &VisPolygon, blockers: &[Blocker]) -> Self {
        let bb = poly.bounding_box();
        let touched = blockers
            .iter()
            .filter(|b| {
                let s = b.segment();
                poly.touches_segment(s.a, s.b)
            })
            .map(|b| b.id().0)
            .collect();
        Self {
            at: [at.x, at.y],
            vertices: poly.vertices().iter().map(|v| [v.x, v.y]).collect(),
            bbox: [bb.xmin, bb.ymin, bb.xmax, bb.ymax],
            area: poly.area(),
            touched,
        }
    }
}
