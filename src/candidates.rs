//! Candidate set loading
//!
//! Candidates are opaque to the sampler; the binary treats them as JSON
//! values. A candidate file is either a JSON array (one candidate per
//! element, e.g. model manifests) or a plain list with one candidate per
//! line. Blank lines and lines starting with `#` are skipped in the latter.

use crate::config::{CandidateConfig, DEFAULT_CANDIDATE_COUNT};
use crate::Result;
use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load candidates according to the configuration
pub fn load_candidates(config: &CandidateConfig) -> Result<Vec<Value>> {
    if let Some(path) = &config.path {
        return from_file(path);
    }

    Ok(integer_candidates(config.size.unwrap_or(DEFAULT_CANDIDATE_COUNT)))
}

/// Parse a candidate file
pub fn from_file(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read candidate file: {}", path.display()))?;

    let candidates = from_string(&content)
        .with_context(|| format!("Failed to parse candidate file: {}", path.display()))?;
    if candidates.is_empty() {
        anyhow::bail!("Candidate file is empty: {}", path.display());
    }

    Ok(candidates)
}

/// Parse candidates from a JSON array or a line-based list
pub fn from_string(content: &str) -> Result<Vec<Value>> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        let candidates: Vec<Value> =
            serde_json::from_str(trimmed).context("Invalid JSON candidate array")?;
        return Ok(candidates);
    }

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| Value::String(line.to_string()))
        .collect())
}

/// The integers `0..n` as candidates
pub fn integer_candidates(n: usize) -> Vec<Value> {
    (0..n).map(Value::from).collect()
}
