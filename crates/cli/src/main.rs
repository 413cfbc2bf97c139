use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use sightline::api::{
    compute_visibility_many, draw_blockers, BlockerCount, BlockerIds, RandomSceneCfg, Rect,
    SceneReplay, SweepCfg, DEFAULT_FRAME,
};
use sightline::Vec2;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod scene_io;

use provenance::Payload;
use scene_io::{BlockerSpec, QueryRecord, SceneFile};

#[derive(Parser)]
#[command(name = "sightline")]
#[command(about = "Visibility polygons among blocking segments")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the visibility polygon for each query point of a JSON scene
    Sweep {
        #[arg(long)]
        scene: PathBuf,
        /// Query point `x,y`; repeat for several queries
        #[arg(long = "at", value_parser = parse_point, required = true)]
        at: Vec<Vec2<f64>>,
        #[arg(long)]
        out: PathBuf,
        /// World frame `xmin,ymin,xmax,ymax` (default -100,-100,1100,800)
        #[arg(long, value_parser = parse_frame)]
        frame: Option<Rect>,
    },
    /// Write a seeded random scene in the JSON scene format
    Scene {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 20)]
        count: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sweep {
            scene,
            at,
            out,
            frame,
        } => sweep(&scene, &at, &out, frame),
        Action::Scene { seed, count, out } => random_scene(seed, count, &out),
        Action::Report => report(),
    }
}

fn parse_floats<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got `{s}`"));
    }
    let mut out = [0.0; N];
    for (slot, p) in out.iter_mut().zip(parts) {
        let v: f64 = p.parse().map_err(|e| format!("`{p}`: {e}"))?;
        if !v.is_finite() {
            return Err(format!("`{p}` is not finite"));
        }
        *slot = v;
    }
    Ok(out)
}

fn parse_point(s: &str) -> Result<Vec2<f64>, String> {
    let [x, y] = parse_floats::<2>(s)?;
    Ok(Vec2::new(x, y))
}

fn parse_frame(s: &str) -> Result<Rect, String> {
    let [xmin, ymin, xmax, ymax] = parse_floats::<4>(s)?;
    if xmin >= xmax || ymin >= ymax {
        return Err(format!("frame `{s}` must have xmin < xmax and ymin < ymax"));
    }
    Ok(Rect::new(xmin, ymin, xmax, ymax))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn sweep(scene: &Path, at: &[Vec2<f64>], out: &Path, frame: Option<Rect>) -> Result<()> {
    let blockers = scene_io::load_scene(scene)?;
    let cfg = SweepCfg {
        frame: frame.unwrap_or(DEFAULT_FRAME),
    };
    tracing::info!(
        scene = %scene.display(),
        blockers = blockers.len(),
        queries = at.len(),
        "sweep"
    );

    let polys = compute_visibility_many(at, &blockers, &cfg)?;
    let records: Vec<QueryRecord> = at
        .iter()
        .zip(&polys)
        .map(|(p, poly)| QueryRecord::new(*p, poly, &blockers))
        .collect();
    for r in &records {
        tracing::info!(
            x = r.at[0],
            y = r.at[1],
            vertices = r.vertices.len(),
            area = r.area,
            touched = r.touched.len(),
            "query"
        );
    }

    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&records)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let f = cfg.frame;
    let prov = provenance::write_sidecar(
        out,
        Payload::new(json!({
            "scene": scene.to_string_lossy(),
            "queries": at.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
            "frame": [f.xmin, f.ymin, f.xmax, f.ymax],
        })),
    )?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    Ok(())
}

fn random_scene(seed: u64, count: usize, out: &Path) -> Result<()> {
    tracing::info!(seed, count, "scene");
    let cfg = RandomSceneCfg {
        count: BlockerCount::Fixed(count),
        ..RandomSceneCfg::default()
    };
    let blockers = draw_blockers(&cfg, SceneReplay { seed, index: 0 }, &mut BlockerIds::default())?;
    let file = SceneFile {
        blockers: blockers.iter().map(BlockerSpec::from).collect(),
    };
    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&file)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let prov = provenance::write_sidecar(
        out,
        Payload::new(json!({
            "seed": seed,
            "count": count,
            "blockers": file.blockers.len(),
        })),
    )?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new(json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_points_and_frames() {
        assert_eq!(parse_point("1.5, -2").unwrap(), Vec2::new(1.5, -2.0));
        assert!(parse_point("1,2,3").is_err());
        assert!(parse_point("a,2").is_err());
        assert!(parse_point("inf,2").is_err());
        assert_eq!(
            parse_frame("0,0,10,20").unwrap(),
            Rect::new(0.0, 0.0, 10.0, 20.0)
        );
        assert!(parse_frame("10,0,0,20").is_err());
    }

    #[test]
    fn scene_then_sweep_round_trip() {
        let dir = tempdir().unwrap();
        let scene = dir.path().join("scene.json");
        let out = dir.path().join("run/polys.json");
        random_scene(9, 12, &scene).unwrap();
        let scene_prov: serde_json::Value =
            serde_json::from_slice(&fs::read(dir.path().join("scene.provenance.json")).unwrap())
                .unwrap();
        assert_eq!(scene_prov["params"]["seed"], 9);
        assert_eq!(scene_prov["params"]["blockers"], 12);
        let at = [Vec2::new(-50.0, -50.0), Vec2::new(1050.0, 750.0)];
        sweep(&scene, &at, &out, None).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        let queries = parsed.as_array().unwrap();
        assert_eq!(queries.len(), 2);
        for q in queries {
            assert!(q["vertices"].as_array().unwrap().len() >= 3);
            assert!(q["area"].as_f64().unwrap() > 0.0);
        }
        assert!(dir.path().join("run/polys.provenance.json").exists());
    }
}
