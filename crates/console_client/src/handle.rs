use std::sync::{mpsc, Arc};
use std::thread;

use console_logging::{console_debug, console_error};

use crate::{ApiError, ApiStats, FailureKind, RequestId, SearchApi, SearchHit};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCommand {
    Search {
        request_id: RequestId,
        query: String,
        limit: u32,
    },
    FetchDomains {
        request_id: RequestId,
    },
    AddDomain {
        request_id: RequestId,
        domain: String,
    },
    SubmitCrawl {
        request_id: RequestId,
        urls: Vec<String>,
    },
    FetchStats {
        request_id: RequestId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEvent {
    SearchCompleted {
        request_id: RequestId,
        result: Result<Vec<SearchHit>, ApiError>,
    },
    DomainsLoaded {
        request_id: RequestId,
        result: Result<Vec<String>, ApiError>,
    },
    DomainAdded {
        request_id: RequestId,
        result: Result<String, ApiError>,
    },
    CrawlAccepted {
        request_id: RequestId,
        result: Result<String, ApiError>,
    },
    StatsLoaded {
        request_id: RequestId,
        result: Result<ApiStats, ApiError>,
    },
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: ApiEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<ApiEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<ApiEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: ApiEvent) {
        let _ = self.tx.send(event);
    }
}

/// Runs backend requests on a private tokio runtime.
///
/// Commands are executed concurrently, so events may arrive in a different
/// order than the commands were submitted.
pub struct ApiHandle {
    cmd_tx: mpsc::Sender<ApiCommand>,
    sink: Arc<dyn EventSink>,
}

impl ApiHandle {
    pub fn new(api: Arc<dyn SearchApi>, sink: Arc<dyn EventSink>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ApiCommand>();
        let worker_sink = sink.clone();

        thread::spawn(move || {
            let sink = worker_sink;
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    console_error!("Failed to start API runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    let event = handle_command(api.as_ref(), command).await;
                    log_failure(&event);
                    sink.emit(event);
                });
            }
        });

        Self { cmd_tx, sink }
    }

    /// Queues a command. If the worker is gone the command is answered
    /// immediately with a failure so callers never wait on it.
    pub fn submit(&self, command: ApiCommand) {
        console_debug!("Submitting {:?}", command);
        if let Err(mpsc::SendError(command)) = self.cmd_tx.send(command) {
            console_error!("API worker is not running; dropping {:?}", command);
            self.sink.emit(worker_unavailable(command));
        }
    }
}

fn worker_unavailable(command: ApiCommand) -> ApiEvent {
    let err = ApiError::new(FailureKind::Network, "API worker is not running");
    match command {
        ApiCommand::Search { request_id, .. } => ApiEvent::SearchCompleted {
            request_id,
            result: Err(err),
        },
        ApiCommand::FetchDomains { request_id } => ApiEvent::DomainsLoaded {
            request_id,
            result: Err(err),
        },
        ApiCommand::AddDomain { request_id, .. } => ApiEvent::DomainAdded {
            request_id,
            result: Err(err),
        },
        ApiCommand::SubmitCrawl { request_id, .. } => ApiEvent::CrawlAccepted {
            request_id,
            result: Err(err),
        },
        ApiCommand::FetchStats { request_id } => ApiEvent::StatsLoaded {
            request_id,
            result: Err(err),
        },
    }
}

async fn handle_command(api: &dyn SearchApi, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::Search {
            request_id,
            query,
            limit,
        } => ApiEvent::SearchCompleted {
            request_id,
            result: api.search(&query, limit).await,
        },
        ApiCommand::FetchDomains { request_id } => ApiEvent::DomainsLoaded {
            request_id,
            result: api.domains().await,
        },
        ApiCommand::AddDomain { request_id, domain } => ApiEvent::DomainAdded {
            request_id,
            result: api.add_domain(&domain).await,
        },
        ApiCommand::SubmitCrawl { request_id, urls } => ApiEvent::CrawlAccepted {
            request_id,
            result: api.crawl(&urls).await,
        },
        ApiCommand::FetchStats { request_id } => ApiEvent::StatsLoaded {
            request_id,
            result: api.stats().await,
        },
    }
}

fn log_failure(event: &ApiEvent) {
    let (operation, err) = match event {
        ApiEvent::SearchCompleted {
            result: Err(err), ..
        } => ("Search", err),
        ApiEvent::DomainsLoaded {
            result: Err(err), ..
        } => ("Load domains", err),
        ApiEvent::DomainAdded {
            result: Err(err), ..
        } => ("Add domain", err),
        ApiEvent::CrawlAccepted {
            result: Err(err), ..
        } => ("Crawl", err),
        ApiEvent::StatsLoaded {
            result: Err(err), ..
        } => ("Load stats", err),
        _ => return,
    };
    console_error!("{} error ({}): {}", operation, err.kind, err.message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_fail_fast_when_worker_is_gone() {
        let (event_tx, event_rx) = mpsc::channel();
        let (cmd_tx, cmd_rx) = mpsc::channel();
        drop(cmd_rx);
        let handle = ApiHandle {
            cmd_tx,
            sink: Arc::new(ChannelEventSink::new(event_tx)),
        };

        handle.submit(ApiCommand::Search {
            request_id: 3,
            query: "rust".to_string(),
            limit: 20,
        });

        match event_rx.try_recv() {
            Ok(ApiEvent::SearchCompleted {
                request_id: 3,
                result: Err(err),
            }) => assert_eq!(err.kind, FailureKind::Network),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
