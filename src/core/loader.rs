//! Loader: fallback-guarded JSON reads
//!
//! An absent file and a present-but-unusable file both recover to the
//! caller's fallback, but the outcome says which one happened.

use std::io::ErrorKind;
use std::path::Path;
use serde_json::Value;
use tracing::{debug, info, warn};
use crate::{ASPECTS_PER_RING, STAGE_MAX};
use crate::types::{
    Aspect, CodexData, LoadOutcome, LoadReason, SyncError, SyncResult, DEFAULT_ASPECT_NAMES,
};

/// Read and parse a JSON file without ever failing
pub fn load_json(path: &Path) -> LoadOutcome<Value> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return LoadOutcome::Absent,
        Err(e) => return LoadOutcome::invalid(LoadReason::L003_READ_FAILED, e.to_string()),
    };

    match serde_json::from_str(&text) {
        Ok(value) => LoadOutcome::Loaded(value),
        Err(e) => LoadOutcome::invalid(LoadReason::L003_PARSE_FAILED, e.to_string()),
    }
}

/// Parsed content of `path`, or `fallback` if it is absent or malformed
pub fn load(path: &Path, fallback: Value) -> Value {
    let outcome = load_json(path);
    trace_outcome(path, &outcome);
    outcome.or_fallback(fallback)
}

/// Load the codex, defaulting every value the file does not provide
pub fn load_codex(path: &Path) -> (CodexData, LoadOutcome<()>) {
    let outcome = match load_json(path) {
        LoadOutcome::Loaded(value) if !value.is_object() => {
            LoadOutcome::invalid(LoadReason::L003_WRONG_SHAPE, "codex is not a JSON object")
        }
        other => other,
    };
    trace_outcome(path, &outcome);

    let (value, status) = outcome.split();
    let codex = value
        .map(|v| CodexData::from_value(&v))
        .unwrap_or_default();
    debug!(
        ci = codex.coherence_index,
        cf = codex.compassion_constraint,
        signature = %codex.sync_signature,
        "codex resolved"
    );
    (codex, status)
}

/// Load the aspects of the previous state, or generate the defaults.
///
/// A state document that parses but has no `aspects` array, or an aspect
/// without integer `ring`/`stage`, is an error rather than a fallback.
pub fn load_state_aspects(path: &Path) -> SyncResult<(Vec<Aspect>, LoadOutcome<()>)> {
    let outcome = match load_json(path) {
        LoadOutcome::Loaded(value) if !value.is_object() => {
            LoadOutcome::invalid(LoadReason::L003_WRONG_SHAPE, "state is not a JSON object")
        }
        other => other,
    };
    trace_outcome(path, &outcome);

    let (value, status) = outcome.split();
    let Some(mut value) = value else {
        return Ok((default_aspects(), status));
    };

    let raw = match value.get_mut("aspects").map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => {
            return Err(SyncError::MissingField {
                path: path.to_path_buf(),
                field: "aspects",
            })
        }
    };

    let aspects = raw
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Aspect>(item).map_err(|e| SyncError::InvalidAspect {
                index,
                reason: e.to_string(),
            })
        })
        .collect::<SyncResult<Vec<_>>>()?;

    debug!(count = aspects.len(), "previous aspects loaded");
    Ok((aspects, status))
}

/// Load the log entries, or start a new log
pub fn load_log(path: &Path) -> (Vec<Value>, LoadOutcome<()>) {
    let outcome = match load_json(path) {
        LoadOutcome::Loaded(Value::Array(entries)) => LoadOutcome::Loaded(entries),
        LoadOutcome::Loaded(_) => {
            LoadOutcome::invalid(LoadReason::L003_WRONG_SHAPE, "log is not a JSON array")
        }
        LoadOutcome::Absent => LoadOutcome::Absent,
        LoadOutcome::Invalid { reason, detail } => LoadOutcome::Invalid { reason, detail },
    };
    trace_outcome(path, &outcome);

    let (entries, status) = outcome.split();
    (entries.unwrap_or_default(), status)
}

/// The 32 aspects of a fresh clock
///
/// ring = i / 4 + 1, stage = i % 12 + 1, activation = 0
pub fn default_aspects() -> Vec<Aspect> {
    DEFAULT_ASPECT_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let ring = (i / ASPECTS_PER_RING) as i64 + 1;
            let stage = (i as i64) % STAGE_MAX + 1;
            Aspect::new(*name, ring, stage)
        })
        .collect()
}

fn trace_outcome<T>(path: &Path, outcome: &LoadOutcome<T>) {
    match outcome {
        LoadOutcome::Loaded(_) => debug!(path = %path.display(), "loaded"),
        LoadOutcome::Absent => info!(path = %path.display(), "file absent, using defaults"),
        LoadOutcome::Invalid { reason, detail } => warn!(
            path = %path.display(),
            reason = reason.code(),
            %detail,
            "unusable file, using defaults"
        ),
    }
}
