use anyhow::{Context, Result};
use serde_json::{json, Value};
use sightline::api::DEFAULT_FRAME;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run parameters recorded next to an output file.
pub struct Payload {
    pub params: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params }
    }
}

/// Provenance document: code revision, library version, default frame,
/// params, outputs.
///
/// The default frame is recorded even when a run overrides it, so outputs from
/// builds with different frame constants can be told apart.
pub fn document(payload: &Payload, outputs: &[String]) -> Value {
    let f = DEFAULT_FRAME;
    json!({
        "code_rev": current_git_rev(),
        "sightline": sightline::VERSION,
        "default_frame": [f.xmin, f.ymin, f.xmax, f.ymax],
        "params": payload.params,
        "outputs": outputs,
    })
}

/// Write `<artifact>.provenance.json` next to `artifact`, including the callsite.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut doc = document(&payload, &[artifact.to_string_lossy().into_owned()]);
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// `dir/polys.json` → `dir/polys.provenance.json`; a path without a file
/// name gets `sightline.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sightline".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Revision from `GIT_COMMIT` (build time, then run time), else `git rev-parse`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|rev| !rev.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|rev| !rev.is_empty()))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/visibility.json");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/output/visibility.provenance.json"));
        assert_eq!(
            provenance_path(Path::new("")),
            Path::new("sightline.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_params_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("polys.json");
        fs::write(&artifact, "[]").unwrap();
        let payload = Payload::new(json!({"queries": 2}));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["queries"], 2);
        assert_eq!(parsed["sightline"], sightline::VERSION);
        assert_eq!(parsed["default_frame"], json!([-100.0, -100.0, 1100.0, 800.0]));
        assert!(parsed["callsite"]["line"].is_u64());
    }
}
