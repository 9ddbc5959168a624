use std::path::PathBuf;

use kanal::AsyncSender;
use termlint_core::types::{AnalysisEvent, SourceLocation, SymbolKind, SymbolRecord};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Reads symbol records from a file (or stdin) and feeds the event loop.
///
/// One record per line: a bare identifier, optionally followed by
/// tab-separated `kind`, `file` and `line` fields. Blank lines are skipped.
/// Always finishes by emitting `Completed`, even when cancelled early.
pub async fn symbol_intake(
    input: Option<PathBuf>,
    cancel: CancellationToken,
    intake_tx: AsyncSender<AnalysisEvent>,
) -> anyhow::Result<()> {
    match input {
        Some(path) => {
            tracing::info!("Reading symbols from {}", path.display());
            let file = tokio::fs::File::open(&path).await?;
            pump_lines(BufReader::new(file), cancel, intake_tx).await
        }
        None => {
            tracing::info!("Reading symbols from stdin");
            pump_lines(BufReader::new(tokio::io::stdin()), cancel, intake_tx).await
        }
    }
}

async fn pump_lines<R>(
    reader: R,
    cancel: CancellationToken,
    intake_tx: AsyncSender<AnalysisEvent>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Symbol intake stopping");
                break;
            }
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if let Some(record) = parse_symbol_line(&line) {
                            intake_tx.send(AnalysisEvent::SymbolInput(record)).await?;
                        }
                    }
                    None => break,
                }
            }
        }
    }

    intake_tx.send(AnalysisEvent::Completed).await?;
    Ok(())
}

fn parse_symbol_line(line: &str) -> Option<SymbolRecord> {
    let mut fields = line.split('\t');

    let name = fields.next()?.trim();
    if name.is_empty() {
        return None;
    }

    let kind = fields
        .next()
        .map(SymbolKind::parse)
        .unwrap_or(SymbolKind::Other);

    // A location needs both a file and a parseable line number
    let location = match (fields.next(), fields.next()) {
        (Some(file), Some(line_no)) => line_no.trim().parse().ok().map(|line| SourceLocation {
            file: file.trim().to_string(),
            line,
        }),
        _ => None,
    };

    Some(SymbolRecord {
        name: name.to_string(),
        kind,
        location,
    })
}
