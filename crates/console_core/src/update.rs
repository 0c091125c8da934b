use crate::state::{DomainList, SearchPhase, StatsDisplay};
use crate::{
    AppState, Effect, Field, Key, Msg, RequestKind, ToastKind, SEARCH_RESULT_LIMIT,
    TOAST_DURATION,
};

const EMPTY_CRAWL_MESSAGE: &str = "Please enter at least one URL";
const CRAWL_STARTING_MESSAGE: &str = "Starting crawl process...";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    match msg {
        Msg::Started => refresh_admin_data(&mut state, &mut effects),
        Msg::SearchInputChanged(text) => state.set_search_input(text),
        Msg::SearchSubmitted => {
            let query = state.search_input().trim().to_string();
            if !query.is_empty() {
                let seq = state.issue_request(RequestKind::Search);
                state.set_search(SearchPhase::Loading {
                    query: query.clone(),
                });
                effects.push(Effect::Search {
                    seq,
                    query,
                    limit: SEARCH_RESULT_LIMIT,
                });
            }
        }
        Msg::SearchCompleted { seq, result } => {
            if state.is_current_request(RequestKind::Search, seq) {
                match result {
                    Ok(items) if items.is_empty() => state.set_search(SearchPhase::NoResults),
                    Ok(items) => {
                        // The header shows the submitted query, not whatever the input holds now.
                        let query = state.pending_query().unwrap_or_default().to_string();
                        state.set_search(SearchPhase::Results { query, items });
                    }
                    Err(failure) => {
                        state.set_search(SearchPhase::Idle);
                        show_error(&mut state, &failure.message, &mut effects);
                    }
                }
            }
        }
        Msg::ResultClicked { index, on_link } => {
            // Clicks on the title link follow the link natively.
            if !on_link {
                if let Some(url) = state.result_url(index) {
                    effects.push(Effect::OpenUrl {
                        url: url.to_string(),
                    });
                }
            }
        }
        Msg::AdminOpenClicked => {
            state.set_admin_open(true);
            refresh_admin_data(&mut state, &mut effects);
        }
        Msg::AdminCloseClicked | Msg::OverlayClicked { on_backdrop: true } => {
            state.set_admin_open(false);
        }
        Msg::OverlayClicked { on_backdrop: false } => {}
        Msg::KeyPressed(Key::Escape) => state.set_admin_open(false),
        Msg::KeyPressed(Key::Slash) => {
            if state.focus().is_none() {
                state.set_focus(Some(Field::SearchInput));
                effects.push(Effect::FocusSearchInput);
            }
        }
        Msg::KeyPressed(Key::Other) => {}
        Msg::FocusChanged(focus) => state.set_focus(focus),
        Msg::DomainInputChanged(text) => state.set_domain_input(text),
        Msg::DomainSubmitted => {
            let domain = state.domain_input().trim().to_string();
            if !domain.is_empty() {
                let seq = state.issue_request(RequestKind::AddDomain);
                effects.push(Effect::AddDomain { seq, domain });
            }
        }
        Msg::DomainAdded { seq, result } => {
            if state.is_current_request(RequestKind::AddDomain, seq) {
                match result {
                    Ok(message) => {
                        show_toast(&mut state, message, ToastKind::Success, &mut effects);
                        state.clear_domain_input();
                        refresh_admin_data(&mut state, &mut effects);
                    }
                    Err(failure) => show_error(&mut state, &failure.message, &mut effects),
                }
            }
        }
        Msg::DomainsLoaded { seq, result } => {
            if state.is_current_request(RequestKind::Domains, seq) {
                state.set_domains(match result {
                    Ok(domains) => DomainList::Loaded(domains),
                    Err(_) => DomainList::Failed,
                });
            }
        }
        Msg::CrawlInputChanged(text) => state.set_crawl_input(text),
        Msg::CrawlSubmitted => {
            let urls = parse_urls(state.crawl_input());
            if urls.is_empty() {
                show_toast(
                    &mut state,
                    EMPTY_CRAWL_MESSAGE.to_string(),
                    ToastKind::Error,
                    &mut effects,
                );
            } else {
                show_toast(
                    &mut state,
                    CRAWL_STARTING_MESSAGE.to_string(),
                    ToastKind::Info,
                    &mut effects,
                );
                let seq = state.issue_request(RequestKind::Crawl);
                effects.push(Effect::SubmitCrawl { seq, urls });
            }
        }
        Msg::CrawlAccepted { seq, result } => {
            if state.is_current_request(RequestKind::Crawl, seq) {
                match result {
                    Ok(message) => {
                        show_toast(&mut state, message, ToastKind::Success, &mut effects);
                        state.clear_crawl_input();
                        let seq = state.issue_request(RequestKind::Stats);
                        effects.push(Effect::FetchStats { seq });
                    }
                    Err(failure) => show_error(&mut state, &failure.message, &mut effects),
                }
            }
        }
        Msg::StatsLoaded { seq, result } => {
            if state.is_current_request(RequestKind::Stats, seq) {
                state.set_stats(match result {
                    Ok(stats) => StatsDisplay::Loaded(stats),
                    Err(_) => StatsDisplay::Failed,
                });
            }
        }
        Msg::ToastExpired { toast_id } => state.expire_toast(toast_id),
        Msg::NoOp => {}
    }

    (state, effects)
}

fn refresh_admin_data(state: &mut AppState, effects: &mut Vec<Effect>) {
    let seq = state.issue_request(RequestKind::Domains);
    effects.push(Effect::FetchDomains { seq });
    let seq = state.issue_request(RequestKind::Stats);
    effects.push(Effect::FetchStats { seq });
}

fn show_toast(state: &mut AppState, message: String, kind: ToastKind, effects: &mut Vec<Effect>) {
    let toast_id = state.show_toast(message, kind);
    effects.push(Effect::ScheduleToastExpiry {
        toast_id,
        after: TOAST_DURATION,
    });
}

fn show_error(state: &mut AppState, message: &str, effects: &mut Vec<Effect>) {
    show_toast(state, format!("Error: {message}"), ToastKind::Error, effects);
}

fn parse_urls(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
