use std::sync::{mpsc, Arc};
use std::thread;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use console_client::{
    ApiCommand, ApiError, ApiEvent, ApiHandle, ApiStats, ChannelEventSink, SearchApi, SearchHit,
};
use console_core::{ApiFailure, Effect, Msg, SearchHitFields, SearchResult, Stats};
use console_logging::{console_debug, console_info};

use super::app::AppEvent;

/// Executes effects produced by `update` and feeds their outcomes back as messages.
pub struct EffectRunner {
    api: ApiHandle,
    events: mpsc::Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(api: Arc<dyn SearchApi>, events: mpsc::Sender<AppEvent>) -> Self {
        let (api_tx, api_rx) = mpsc::channel::<ApiEvent>();
        let handle = ApiHandle::new(api, Arc::new(ChannelEventSink::new(api_tx)));
        let runner = Self {
            api: handle,
            events,
        };
        runner.spawn_event_loop(api_rx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Search { seq, query, limit } => {
                    console_info!("Search seq={} query={:?} limit={}", seq, query, limit);
                    self.api.submit(ApiCommand::Search {
                        request_id: seq,
                        query,
                        limit,
                    });
                }
                Effect::FetchDomains { seq } => {
                    self.api.submit(ApiCommand::FetchDomains { request_id: seq });
                }
                Effect::AddDomain { seq, domain } => {
                    console_info!("AddDomain seq={} domain={}", seq, domain);
                    self.api.submit(ApiCommand::AddDomain {
                        request_id: seq,
                        domain,
                    });
                }
                Effect::SubmitCrawl { seq, urls } => {
                    console_info!("SubmitCrawl seq={} url_count={}", seq, urls.len());
                    self.api.submit(ApiCommand::SubmitCrawl {
                        request_id: seq,
                        urls,
                    });
                }
                Effect::FetchStats { seq } => {
                    self.api.submit(ApiCommand::FetchStats { request_id: seq });
                }
                Effect::OpenUrl { url } => {
                    console_info!("OpenUrl {}", url);
                    let _ = self.events.send(AppEvent::OpenUrl(url));
                }
                Effect::FocusSearchInput => {
                    // The prompt follows the focused field; nothing else to do in a terminal.
                    console_debug!("FocusSearchInput");
                }
                Effect::ScheduleToastExpiry { toast_id, after } => {
                    let events = self.events.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        let _ = events.send(AppEvent::Msg(Msg::ToastExpired { toast_id }));
                    });
                }
            }
        }
    }

    fn spawn_event_loop(&self, api_rx: mpsc::Receiver<ApiEvent>) {
        let events = self.events.clone();
        thread::spawn(move || {
            for event in api_rx {
                if events.send(AppEvent::Msg(map_event(event))).is_err() {
                    break;
                }
            }
        });
    }
}

fn map_event(event: ApiEvent) -> Msg {
    match event {
        ApiEvent::SearchCompleted { request_id, result } => Msg::SearchCompleted {
            seq: request_id,
            result: result
                .map(|hits| hits.into_iter().map(map_hit).collect())
                .map_err(map_error),
        },
        ApiEvent::DomainsLoaded { request_id, result } => Msg::DomainsLoaded {
            seq: request_id,
            result: result.map_err(map_error),
        },
        ApiEvent::DomainAdded { request_id, result } => Msg::DomainAdded {
            seq: request_id,
            result: result.map_err(map_error),
        },
        ApiEvent::CrawlAccepted { request_id, result } => Msg::CrawlAccepted {
            seq: request_id,
            result: result.map_err(map_error),
        },
        ApiEvent::StatsLoaded { request_id, result } => Msg::StatsLoaded {
            seq: request_id,
            result: result.map(map_stats).map_err(map_error),
        },
    }
}

fn map_hit(hit: SearchHit) -> SearchResult {
    SearchResult::from_fields(SearchHitFields {
        title: hit.title,
        url: hit.url,
        description: hit.description,
        content: hit.content,
        domain: hit.domain,
        last_updated: hit.last_updated.as_deref().map(format_last_updated),
    })
}

fn map_stats(stats: ApiStats) -> Stats {
    Stats {
        total_pages: stats.total_pages,
        total_domains: stats.total_domains,
        pages_per_domain: stats.pages_per_domain,
    }
}

fn map_error(err: ApiError) -> ApiFailure {
    ApiFailure::new(err.message)
}

/// Shows an ISO-8601 timestamp as `d/m/yyyy`; anything unparseable is shown as sent.
fn format_last_updated(raw: &str) -> String {
    const DISPLAY: &str = "%-d/%-m/%Y";

    if raw.is_empty() {
        return String::new();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(DISPLAY).to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format(DISPLAY).to_string();
    }
    raw.to_string()
}
