use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use scout_logging::{scout_debug, scout_warn};

use crate::client::{ClientSettings, GithubSearchClient, SearchClient};
use crate::debounce::Debouncer;
use crate::{SearchError, SearchPage, SearchRequest};

enum EngineCommand {
    Search { seq: u64, request: SearchRequest },
    DebounceQuery { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The free-text input survived the debounce window unchanged.
    QuerySettled { text: String },
    /// A provider search finished, success or not.
    SearchCompleted {
        seq: u64,
        result: Result<SearchPage, SearchError>,
    },
}

/// Runs the provider client on a dedicated runtime thread and exchanges
/// commands and events over channels with the UI loop.
///
/// Overlapping searches are allowed to race here; the core discards
/// completions whose sequence number is no longer the latest.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings, debounce_delay: Duration) -> Result<Self, SearchError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(GithubSearchClient::new(settings)?);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut debouncer =
                Debouncer::new(debounce_delay, runtime.handle().clone(), event_tx.clone());

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Search { seq, request } => {
                        scout_debug!("Search seq={} q={}", seq, request.query);
                        let client = client.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = client.search(&request).await;
                            if let Err(err) = &result {
                                scout_warn!("Search seq={} failed: {}", seq, err);
                            }
                            let _ = event_tx.send(EngineEvent::SearchCompleted { seq, result });
                        });
                    }
                    EngineCommand::DebounceQuery { text } => {
                        debouncer.feed(EngineEvent::QuerySettled { text });
                    }
                }
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn search(&self, seq: u64, request: SearchRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Search { seq, request });
    }

    pub fn debounce_query(&self, text: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::DebounceQuery { text: text.into() });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}
