//! Provenance sidecars for hull artifacts.
//!
//! Every report written by the CLI gets a `<stem>.provenance.json` next to it
//! recording which code produced it, with which parameters, and what each hull
//! run yielded.

use anyhow::{Context, Result};
use hull2::HullAlgorithm;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Counts from one hull computation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RunSummary {
    pub algo: &'static str,
    pub points: usize,
    pub vertices: usize,
    pub edges: usize,
}

/// What a command did: its parameters, hull runs, and the files it wrote
/// besides the primary artifact.
pub struct Provenance {
    pub params: Value,
    pub runs: Vec<RunSummary>,
    pub extra_outputs: Vec<PathBuf>,
}

impl Provenance {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            runs: Vec::new(),
            extra_outputs: Vec::new(),
        }
    }

    pub fn with_run(mut self, algo: HullAlgorithm, points: usize, vertices: usize, edges: usize) -> Self {
        self.runs.push(RunSummary {
            algo: algo.name(),
            points,
            vertices,
            edges,
        });
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.extra_outputs.push(path.into());
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    hull2_version: &'static str,
    callsite: Callsite,
    params: &'a Value,
    runs: &'a [RunSummary],
    outputs: Vec<String>,
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, prov: Provenance) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let caller = Location::caller();
    let outputs = std::iter::once(artifact)
        .chain(prov.extra_outputs.iter().map(PathBuf::as_path))
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        hull2_version: hull2::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        params: &prov.params,
        runs: &prov.runs,
        outputs,
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `out/hull.json` → `out/hull.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hull".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit of the working tree: `GIT_COMMIT` (build time, then run time), else
/// `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            output
                .status
                .success()
                .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .filter(|rev| !rev.is_empty())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
