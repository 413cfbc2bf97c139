//! Random blocker scenes (seeded, replayable).
//!
//! Purpose
//! - Deterministic blocker sets for benches and property tests: segment
//!   centers are uniform in a region, directions uniform on the circle, and
//!   lengths uniform in a range.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so one seed yields an indexable stream of scenes.

use std::f64::consts::TAU;
use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{Blocker, BlockerIds, Rect};

const PALETTE: [&str; 4] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"];

/// Error type for scene generation.
#[derive(Debug)]
pub enum SceneError {
    InvalidParams { reason: String },
    /// The caller's id allocator ran out before the scene was complete.
    IdsExhausted { drawn: usize },
}

impl SceneError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid scene params: {reason}"),
            Self::IdsExhausted { drawn } => {
                write!(f, "blocker ids exhausted after {drawn} blockers")
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// Blocker count distribution.
#[derive(Clone, Copy, Debug)]
pub enum BlockerCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl BlockerCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            BlockerCount::Fixed(n) => n,
            BlockerCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Random scene configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomSceneCfg {
    pub count: BlockerCount,
    pub len_min: f64,
    pub len_max: f64,
    /// Region the segment centers are drawn from.
    pub region: Rect,
}

impl Default for RandomSceneCfg {
    fn default() -> Self {
        Self {
            count: BlockerCount::Uniform { min: 5, max: 40 },
            len_min: 10.0,
            len_max: 120.0,
            region: Rect::new(0.0, 0.0, 1000.0, 700.0),
        }
    }
}

impl RandomSceneCfg {
    fn validate(&self) -> Result<(), SceneError> {
        if !(self.len_min.is_finite() && self.len_max.is_finite()) {
            return Err(SceneError::invalid("length bounds must be finite"));
        }
        if self.len_min <= 0.0 {
            return Err(SceneError::invalid("len_min must be > 0"));
        }
        if self.len_min > self.len_max {
            return Err(SceneError::invalid("len_min <= len_max required"));
        }
        if !(self.region.width() > 0.0 && self.region.height() > 0.0) {
            return Err(SceneError::invalid("region must have positive extent"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a blocker set; ids come from `ids` in draw order.
pub fn draw_blockers(
    cfg: &RandomSceneCfg,
    tok: ReplayToken,
    ids: &mut BlockerIds,
) -> Result<Vec<Blocker>, SceneError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let r = cfg.region;
    let mut out = Vec::with_capacity(n);
    for k in 0..n {
        let center = Vector2::new(
            rng.gen_range(r.xmin..=r.xmax),
            rng.gen_range(r.ymin..=r.ymax),
        );
        let theta = rng.gen::<f64>() * TAU;
        let half = 0.5 * rng.gen_range(cfg.len_min..=cfg.len_max);
        let offset = Vector2::new(theta.cos(), theta.sin()) * half;
        let blocker = ids
            .blocker(center - offset, center + offset, PALETTE[k % PALETTE.len()])
            .ok_or(SceneError::IdsExhausted { drawn: k })?;
        out.push(blocker);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = RandomSceneCfg::default();
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_blockers(&cfg, tok, &mut BlockerIds::default()).unwrap();
        let b = draw_blockers(&cfg, tok, &mut BlockerIds::default()).unwrap();
        assert_eq!(a, b);
        let c = draw_blockers(&cfg, ReplayToken { seed: 42, index: 8 }, &mut BlockerIds::default())
            .unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn blockers_respect_bounds() {
        let cfg = RandomSceneCfg {
            count: BlockerCount::Fixed(200),
            len_min: 5.0,
            len_max: 20.0,
            region: Rect::new(100.0, 100.0, 300.0, 200.0),
        };
        let mut ids = BlockerIds::starting_at(1);
        let bs = draw_blockers(&cfg, ReplayToken { seed: 3, index: 0 }, &mut ids).unwrap();
        assert_eq!(bs.len(), 200);
        assert_eq!(bs[0].id().0, 1);
        assert_eq!(bs[199].id().0, 200);
        for b in &bs {
            let s = b.segment();
            let len = (s.b - s.a).norm();
            assert!((5.0 - 1e-9..=20.0 + 1e-9).contains(&len));
            assert!(cfg.region.contains((s.a + s.b) * 0.5));
        }
    }

    #[test]
    fn reports_exhausted_ids() {
        let cfg = RandomSceneCfg {
            count: BlockerCount::Fixed(3),
            ..RandomSceneCfg::default()
        };
        let mut ids = BlockerIds::starting_at(u32::MAX - 1);
        let err = draw_blockers(&cfg, ReplayToken { seed: 1, index: 0 }, &mut ids).unwrap_err();
        assert!(matches!(err, SceneError::IdsExhausted { drawn: 2 }));
    }

    #[test]
    fn rejects_bad_params() {
        let mut ids = BlockerIds::default();
        let tok = ReplayToken { seed: 0, index: 0 };
        let bad_len = RandomSceneCfg {
            len_min: 10.0,
            len_max: 1.0,
            ..RandomSceneCfg::default()
        };
        assert!(draw_blockers(&bad_len, tok, &mut ids).is_err());
        let flat = RandomSceneCfg {
            region: Rect::new(0.0, 0.0, 0.0, 10.0),
            ..RandomSceneCfg::default()
        };
        assert!(draw_blockers(&flat, tok, &mut ids).is_err());
    }
}
