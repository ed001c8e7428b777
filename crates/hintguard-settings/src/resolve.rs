use crate::model::{HintguardConfigV1, SCHEMA_CONFIG_V1};
use crate::prefixes::parse_prefix_list;
use camino::Utf8PathBuf;
use hintguard_domain::ViolationKind;
use hintguard_domain::policy::EffectiveConfig;

/// Values supplied by the host (CLI flags or build task parameters).
///
/// Prefix lists arrive as comma-separated strings, the way MSBuild passes them.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub project_folder: Option<Utf8PathBuf>,
    pub excluded_reference_prefixes: Option<String>,
    pub known_hint_path_prefixes: Option<String>,
    pub treat_warnings_as_errors: Option<bool>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    /// Explicit project folder; `None` means each project's own directory.
    pub project_folder: Option<Utf8PathBuf>,
}

pub fn resolve_config(
    cfg: HintguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let mut effective = EffectiveConfig::default();

    effective.excluded_reference_prefixes = match overrides.excluded_reference_prefixes {
        Some(raw) => parse_prefix_list(&raw),
        None => cfg.excluded_reference_prefixes.unwrap_or_default(),
    };
    effective.known_hint_path_prefixes = match overrides.known_hint_path_prefixes {
        Some(raw) => parse_prefix_list(&raw),
        None => cfg.known_hint_path_prefixes.unwrap_or_default(),
    };

    if let Some(treat) = overrides
        .treat_warnings_as_errors
        .or(cfg.treat_warnings_as_errors)
    {
        effective.treat_warnings_as_errors = treat;
    }

    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        let kind = ViolationKind::from_check_id(check_id)
            .ok_or_else(|| anyhow::anyhow!("unknown check id in [checks]: {check_id}"))?;
        if let Some(enabled) = cc.enabled {
            effective.rules.set(kind, enabled);
        }
    }

    let project_folder = overrides
        .project_folder
        .or_else(|| cfg.project_folder.map(Utf8PathBuf::from));

    Ok(ResolvedConfig {
        effective,
        project_folder,
    })
}
