//! Developer tasks (schema generation, fixture checks, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use hintguard_test_util::normalize_nondeterministic;
use schemars::schema_for;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(PathBuf::from)
            .context("xtask has no parent directory")
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(hintguard_types::HintguardReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(hintguard_settings::HintguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "hintguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "hintguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    for (label, names) in [("Missing schemas:", &missing), ("Schemas out of date:", &mismatched)] {
        if !names.is_empty() {
            eprintln!("{label}");
            for name in names {
                eprintln!("  - {}", name);
            }
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Check every `tests/fixtures/*/expected.report.json` for internal consistency.
///
/// Golden reports must already be normalized, carry the v1 schema, and have a
/// verdict and totals that agree with their findings.
fn check_fixtures() -> anyhow::Result<()> {
    let dir = fixtures_dir()?;
    let mut entries: Vec<PathBuf> = fs::read_dir(&dir)
        .with_context(|| format!("read {}", dir.display()))?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_dir())
        .collect();
    entries.sort();

    let mut errors = Vec::new();
    for fixture in &entries {
        let name = fixture
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let path = fixture.join("expected.report.json");
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                errors.push(format!("{name}: cannot read expected.report.json: {err}"));
                continue;
            }
        };
        let value: Value = serde_json::from_str(&text)
            .with_context(|| format!("parse {}", path.display()))?;
        errors.extend(fixture_problems(&value).into_iter().map(|p| format!("{name}: {p}")));
    }

    if errors.is_empty() {
        println!("✓ {} fixtures are consistent", entries.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Fixture check failed with {} errors", errors.len())
    }
}

fn fixture_problems(report: &Value) -> Vec<String> {
    let mut problems = Vec::new();

    if normalize_nondeterministic(report.clone()) != *report {
        problems.push("report is not normalized".to_string());
    }
    if report["schema"] != hintguard_types::SCHEMA_REPORT_V1 {
        problems.push(format!("unexpected schema {}", report["schema"]));
    }

    let findings = report["findings"].as_array().map(Vec::len).unwrap_or(0);
    let has_errors = report["findings"]
        .as_array()
        .is_some_and(|fs| fs.iter().any(|f| f["severity"] == "error"));
    let expected_verdict = match (findings, has_errors) {
        (0, _) => "pass",
        (_, true) => "fail",
        (_, false) => "warn",
    };
    if report["verdict"] != expected_verdict {
        problems.push(format!(
            "verdict {} does not match findings (expected {expected_verdict})",
            report["verdict"]
        ));
    }
    if report["data"]["findings_emitted"] != findings {
        problems.push("data.findings_emitted does not match findings".to_string());
    }

    problems
}

/// Validate that all check IDs and codes have complete explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let check_ids = hintguard_types::explain::all_check_ids();
    let codes = hintguard_types::explain::all_codes();
    let mut errors = Vec::new();

    for (kind, ids) in [("Check ID", check_ids), ("Code", codes)] {
        for id in ids {
            match hintguard_types::explain::lookup_explanation(id) {
                Some(exp) => {
                    for (field, value) in [
                        ("title", exp.title),
                        ("description", exp.description),
                        ("remediation", exp.remediation),
                        ("before example", exp.examples.before),
                        ("after example", exp.examples.after),
                    ] {
                        if value.trim().is_empty() {
                            errors.push(format!("{kind} '{id}' has empty {field}"));
                        }
                    }
                }
                None => errors.push(format!("{kind} '{id}' has no explanation")),
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} check IDs have explanations", check_ids.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  check-fixtures    Check golden reports under tests/fixtures/ for consistency");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "check-fixtures" => check_fixtures(),
        "explain-coverage" => explain_coverage(),
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(verdict: &str, severities: &[&str]) -> Value {
        let findings: Vec<Value> = severities.iter().map(|s| json!({ "severity": s })).collect();
        json!({
            "schema": "hintguard.report.v1",
            "tool": { "name": "hintguard", "version": "__VERSION__" },
            "started_at": "__TIMESTAMP__",
            "finished_at": "__TIMESTAMP__",
            "verdict": verdict,
            "findings": findings,
            "data": { "findings_emitted": severities.len() }
        })
    }

    #[test]
    fn consistent_reports_have_no_problems() {
        assert!(fixture_problems(&report("pass", &[])).is_empty());
        assert!(fixture_problems(&report("warn", &["warning"])).is_empty());
        assert!(fixture_problems(&report("fail", &["error", "error"])).is_empty());
    }

    #[test]
    fn wrong_verdict_is_reported() {
        let problems = fixture_problems(&report("pass", &["warning"]));
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("expected warn"));
    }

    #[test]
    fn unnormalized_timestamps_are_reported() {
        let mut r = report("pass", &[]);
        r["started_at"] = json!("2025-01-01T00:00:00Z");
        assert!(fixture_problems(&r).iter().any(|p| p.contains("normalized")));
    }

    #[test]
    fn explain_coverage_passes() {
        explain_coverage().expect("every id has an explanation");
    }
}
