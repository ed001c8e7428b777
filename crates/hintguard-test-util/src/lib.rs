//! Shared test utilities for the hintguard workspace.
//!
//! `xtask` and the CLI integration tests both compare reports against golden
//! files, so normalization lives in a regular crate rather than a
//! `#[cfg(test)]` module.

use serde_json::Value;

const TIMESTAMP: &str = "__TIMESTAMP__";
const VERSION: &str = "__VERSION__";
const PROJECT_FOLDER: &str = "__PROJECT_FOLDER__";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// - Root only: `tool.version` becomes `"__VERSION__"` when the root object is
///   a report envelope (`schema`, `tool`, `verdict`, `findings`, `data`).
/// - Root only: `started_at` / `finished_at` become `"__TIMESTAMP__"`.
/// - Inside findings: `data.project_folder` is an absolute, machine-specific
///   path and becomes `"__PROJECT_FOLDER__"`.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    let Some(obj) = value.as_object_mut() else {
        return value;
    };

    let is_envelope = ["schema", "tool", "verdict", "findings", "data"]
        .iter()
        .all(|k| obj.contains_key(*k));
    if !is_envelope {
        return value;
    }

    if let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
        && tool.contains_key("version")
    {
        tool.insert("version".to_string(), Value::String(VERSION.to_string()));
    }

    for key in ["started_at", "finished_at"] {
        if obj.contains_key(key) {
            obj.insert(key.to_string(), Value::String(TIMESTAMP.to_string()));
        }
    }

    if let Some(findings) = obj.get_mut("findings").and_then(Value::as_array_mut) {
        for finding in findings {
            if let Some(data) = finding.get_mut("data").and_then(Value::as_object_mut)
                && data.contains_key("project_folder")
            {
                data.insert(
                    "project_folder".to_string(),
                    Value::String(PROJECT_FOLDER.to_string()),
                );
            }
        }
    }

    value
}
