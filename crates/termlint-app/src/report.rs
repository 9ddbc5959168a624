use std::sync::Arc;

use kanal::AsyncReceiver;
use termlint_config::report::ReportConfig;
use termlint_core::types::{AnalysisEvent, SymbolDiagnostic};

use crate::state::AppState;

/// Drains the report channel and renders diagnostics to stdout.
pub async fn report_loop(
    state: Arc<AppState>,
    report_rx: AsyncReceiver<AnalysisEvent>,
) -> anyhow::Result<()> {
    let report_config = {
        let config = state.config.read().await;
        config.report.clone()
    };

    loop {
        let event = report_rx.recv().await?;

        match event {
            AnalysisEvent::Diagnostic(item) => {
                println!("{}", render(&item, &report_config));
            }
            AnalysisEvent::Completed => break,
            AnalysisEvent::SymbolInput(_) => {
                // Intake-side event; nothing to render
            }
        }
    }

    Ok(())
}

fn render(item: &SymbolDiagnostic, report_config: &ReportConfig) -> String {
    let diagnostic = &item.diagnostic;

    let mut out = match &item.location {
        Some(location) => format!(
            "{}[{}] {}: {} ({}/{})",
            diagnostic.level,
            diagnostic.rule_id,
            location,
            diagnostic.message,
            report_config.category,
            item.kind.as_str()
        ),
        None => format!(
            "{}[{}] {} ({}/{})",
            diagnostic.level,
            diagnostic.rule_id,
            diagnostic.message,
            report_config.category,
            item.kind.as_str()
        ),
    };

    for line in diagnostic.description.lines() {
        out.push_str("\n    ");
        out.push_str(line);
    }

    if !report_config.help_uri.is_empty() {
        out.push_str("\n    See: ");
        out.push_str(report_config.help_uri.as_str());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use termlint_core::dictionary::{Term, TermDictionary};
    use termlint_core::engine;
    use termlint_core::types::{SourceLocation, SymbolKind};

    fn report_config(help_uri: &str) -> ReportConfig {
        ReportConfig {
            help_uri: help_uri.to_string(),
            ..Default::default()
        }
    }

    fn flagged(symbol: &str) -> SymbolDiagnostic {
        let dictionary = TermDictionary::new(vec![Term {
            id: "1234".to_string(),
            name: "Weird".to_string(),
            severity: "2".to_string(),
            recommendation: "Reconsider renaming".to_string(),
            why: "Weird is in the eye of the beholder".to_string(),
            ..Default::default()
        }]);
        let result = engine::check(symbol, &dictionary).unwrap();

        SymbolDiagnostic {
            diagnostic: result.to_diagnostic("TL0001"),
            kind: SymbolKind::Method,
            location: Some(SourceLocation {
                file: "src/lib.rs".to_string(),
                line: 7,
            }),
        }
    }

    #[test]
    fn renders_location_level_and_rule() {
        let rendered = render(&flagged("WeirdValue"), &report_config(""));

        assert!(rendered.starts_with("warning[TL0001] src/lib.rs:7:"));
        assert!(rendered.contains("WeirdValue"));
        assert!(rendered.contains("(Naming/method)"));
        assert!(rendered.contains("\n    Recommendation: Reconsider renaming"));
        assert!(rendered.contains("\n    Reason: Weird is in the eye of the beholder"));
    }

    #[test]
    fn renders_without_location() {
        let mut item = flagged("WeirdValue");
        item.location = None;

        let rendered = render(&item, &report_config(""));
        assert!(rendered.starts_with("warning[TL0001] Symbol"));
    }

    #[test]
    fn appends_help_link_when_configured() {
        let rendered = render(
            &flagged("WeirdValue"),
            &report_config("https://example.com/rules/TL0001"),
        );
        assert!(rendered.ends_with("See: https://example.com/rules/TL0001"));
    }
}
