use std::path::PathBuf;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use termlint_core::types::AnalysisEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::symbol_intake;
use crate::report::report_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub intake: (AsyncSender<AnalysisEvent>, AsyncReceiver<AnalysisEvent>),
    pub report: (AsyncSender<AnalysisEvent>, AsyncReceiver<AnalysisEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            intake: kanal::bounded_async(capacity),
            report: kanal::bounded_async(capacity),
        }
    }
}

/// Task spawning and lifecycle for one analysis run
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        let channels = ChannelSet::new(state.channel_capacity);

        Self {
            channels,
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self, input: Option<PathBuf>) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Symbol intake
        tasks.spawn(symbol_intake(
            input,
            self.cancel_token.child_token(),
            self.channels.intake.0.clone(),
        ));

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.intake.1.clone(),
            self.channels.report.0.clone(),
        ));

        // Report loop
        tasks.spawn(report_loop(
            self.state.clone(),
            self.channels.report.1.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
