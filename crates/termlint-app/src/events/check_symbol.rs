use std::sync::Arc;
use std::sync::atomic::Ordering;

use kanal::AsyncSender;
use termlint_core::engine;
use termlint_core::types::{AnalysisEvent, SymbolDiagnostic, SymbolRecord};

use crate::state::AppState;

pub async fn handle_symbol(
    state: Arc<AppState>,
    record: SymbolRecord,
    rule_id: &str,
    report_tx: &AsyncSender<AnalysisEvent>,
) -> anyhow::Result<()> {
    state.status.symbols_checked.fetch_add(1, Ordering::Relaxed);

    let Some(result) = engine::check(&record.name, &state.dictionary) else {
        tracing::debug!("'{}' is clean", record.name);
        return Ok(());
    };

    state.status.symbols_flagged.fetch_add(1, Ordering::Relaxed);
    tracing::debug!(
        "'{}' flagged by term '{}' ({})",
        record.name,
        result.term.name,
        result.level
    );

    let diagnostic = result.to_diagnostic(rule_id);
    report_tx
        .send(AnalysisEvent::Diagnostic(SymbolDiagnostic {
            diagnostic,
            kind: record.kind,
            location: record.location,
        }))
        .await?;

    Ok(())
}
