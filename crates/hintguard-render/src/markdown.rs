use crate::{RenderableFinding, RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Hintguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    let d = &report.data;
    out.push_str(&format!(
        "- Verdict: **{}**\n- Projects: {}\n- References: {} scanned, {} excluded\n- Findings: {} (emitted) / {} (total)\n\n",
        verdict,
        d.projects_scanned,
        d.references_scanned,
        d.references_excluded,
        d.findings_emitted,
        d.findings_total
    ));

    if let Some(r) = &d.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");
    out.push_str("| Severity | Check | Reference | HintPath | Location |\n");
    out.push_str("|---|---|---|---|---|\n");
    for f in &report.findings {
        out.push_str(&format!(
            "| {} | `{}` | {} | {} | {} |\n",
            severity_label(f.severity),
            f.check_id,
            cell(f.reference.as_deref()),
            cell(f.hint_path.as_deref()),
            location_cell(f)
        ));
    }

    let mut helps: Vec<(&str, &str)> = Vec::new();
    for f in &report.findings {
        if let Some(help) = f.help.as_deref()
            && !helps.iter().any(|(id, _)| *id == f.check_id)
        {
            helps.push((f.check_id.as_str(), help));
        }
    }
    if !helps.is_empty() {
        out.push_str("\n## How to fix\n\n");
        for (check_id, help) in helps {
            out.push_str(&format!("- `{}`: {}\n", check_id, help));
        }
    }

    out
}

fn severity_label(s: RenderableSeverity) -> &'static str {
    match s {
        RenderableSeverity::Info => "INFO",
        RenderableSeverity::Warning => "WARN",
        RenderableSeverity::Error => "ERROR",
    }
}

fn cell(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("`{}`", v.replace('|', "\\|")),
        None => "-".to_string(),
    }
}

fn location_cell(f: &RenderableFinding) -> String {
    match &f.location {
        Some(loc) => match loc.line {
            Some(line) => format!("`{}`:{}", loc.path, line),
            None => format!("`{}`", loc.path),
        },
        None => "-".to_string(),
    }
}
