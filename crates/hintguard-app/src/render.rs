//! Render use cases: markdown and GitHub annotations from in-memory reports.

use hintguard_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    hintguard_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    hintguard_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hintguard_render::{
        RenderableData, RenderableFinding, RenderableReport, RenderableSeverity,
        RenderableVerdictStatus,
    };

    fn sample_report() -> RenderableReport {
        let finding = |reference: &str| RenderableFinding {
            severity: RenderableSeverity::Warning,
            check_id: "hintpath.missing".to_string(),
            code: "missing_hint_path".to_string(),
            message: format!("missing HintPath (reference '{reference}')"),
            reference: Some(reference.to_string()),
            hint_path: None,
            location: None,
            help: None,
        };
        RenderableReport {
            verdict: RenderableVerdictStatus::Warn,
            findings: vec![finding("Foo"), finding("Bar")],
            data: RenderableData {
                findings_emitted: 2,
                findings_total: 2,
                ..RenderableData::default()
            },
        }
    }

    #[test]
    fn render_annotations_respects_max() {
        let annotations = render_annotations(&sample_report(), 1);
        assert_eq!(annotations.len(), 1);
        assert!(annotations[0].contains("'Foo'"));
    }

    #[test]
    fn render_markdown_smoke() {
        let markdown = render_markdown(&sample_report());
        assert!(markdown.contains("Verdict: **WARN**"));
    }
}
