//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod prefixes;
mod resolve;

pub use model::{CheckConfig, HintguardConfigV1, SCHEMA_CONFIG_V1};
pub use prefixes::parse_prefix_list;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `hintguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<HintguardConfigV1> {
    let cfg: HintguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (defaults + config file + overrides).
pub fn resolve_config(
    cfg: HintguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
