use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_CONFIG_V1: &str = "hintguard.config.v1";

/// `hintguard.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional so a missing
/// or partial file falls back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct HintguardConfigV1 {
    /// Optional schema string for tooling (`hintguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Folder hint paths are resolved against. Relative values are taken from
    /// the repo root. Defaults to each project file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_folder: Option<String>,

    /// References whose id starts with one of these are not checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_reference_prefixes: Option<Vec<String>>,

    /// Hint paths must start with one of these. `""` accepts every hint path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub known_hint_path_prefixes: Option<Vec<String>>,

    /// Report violations as errors and fail the build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treat_warnings_as_errors: Option<bool>,

    /// How many findings to emit in the report before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Turn the rule on or off (default: on).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
