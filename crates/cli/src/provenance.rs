use anyhow::Result;
use planar::GeomCfg;
use serde_json::{json, Value};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::io::write_json;

/// Parameters of one CLI run, recorded next to its output.
pub struct RunRecord {
    pub command: &'static str,
    pub params: Value,
    pub cfg: GeomCfg,
}

impl RunRecord {
    pub fn new(command: &'static str, params: Value, cfg: GeomCfg) -> Self {
        Self {
            command,
            params,
            cfg,
        }
    }

    fn to_json(&self, artifact: &Path, callsite: &Location<'_>) -> Value {
        json!({
            "code_rev": current_git_rev(),
            "version": planar::VERSION,
            "callsite": { "file": callsite.file(), "line": callsite.line() },
            "command": self.command,
            "cfg": cfg_json(&self.cfg),
            "params": self.params,
            "outputs": [artifact.to_string_lossy()]
        })
    }
}

/// Write the run record for `artifact` to `<artifact-stem>.provenance.json`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, record: RunRecord) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact);
    write_json(&sidecar, &record.to_json(artifact, Location::caller()))?;
    Ok(sidecar)
}

pub fn cfg_json(cfg: &GeomCfg) -> Value {
    json!({ "eps": cfg.eps, "round_digits": cfg.round_digits })
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "artifact".into(), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` at build or run time, else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
