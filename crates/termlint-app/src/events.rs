use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use termlint_core::types::AnalysisEvent;
use tokio::task::JoinSet;

use crate::state::AppState;

pub mod check_symbol;

use check_symbol::handle_symbol;

/// App's main loop
///
/// Receives symbol records from intake, screens each one on its own task over
/// the shared dictionary snapshot, and forwards diagnostics to the report
/// loop. Ends after draining in-flight checks once intake reports completion.
pub async fn event_loop(
    state: Arc<AppState>,
    intake_rx: AsyncReceiver<AnalysisEvent>,
    report_tx: AsyncSender<AnalysisEvent>,
) -> anyhow::Result<()> {
    let rule_id = {
        let config = state.config.read().await;
        config.report.rule_id.clone()
    };

    tracing::info!(
        "Event loop started, screening against {} terms",
        state.dictionary.len()
    );

    let mut workers: JoinSet<()> = JoinSet::new();

    loop {
        let event = intake_rx.recv().await?;

        match event {
            AnalysisEvent::SymbolInput(record) => {
                let state = Arc::clone(&state);
                let report_tx = report_tx.clone();
                let rule_id = rule_id.clone();

                workers.spawn(async move {
                    let name = record.name.clone();
                    if let Err(e) = handle_symbol(state, record, &rule_id, &report_tx).await {
                        // One bad symbol must not abort the rest of the run
                        tracing::warn!("check failed for '{}': {e}", name);
                    }
                });

                // Reap finished workers without blocking intake
                while let Some(result) = workers.try_join_next() {
                    if let Err(e) = result {
                        tracing::error!("symbol task panicked: {e}");
                    }
                }
            }
            AnalysisEvent::Completed => {
                while let Some(result) = workers.join_next().await {
                    if let Err(e) = result {
                        tracing::error!("symbol task panicked: {e}");
                    }
                }
                report_tx.send(AnalysisEvent::Completed).await?;
                break;
            }
            AnalysisEvent::Diagnostic(_) => {
                // Report-side event; nothing to do here
            }
        }
    }

    Ok(())
}
