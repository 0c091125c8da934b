use crate::sequence::RequestLedger;
use crate::toast::ToastSlot;
use crate::view_model::{
    AppViewModel, DomainListView, ResultsView, StatsView, ToastView, STATS_ERROR_TEXT,
};
use crate::{Field, RequestKind, RequestSeq, SearchResult, Stats, ToastId, ToastKind};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum SearchPhase {
    #[default]
    Idle,
    Loading {
        query: String,
    },
    Results {
        query: String,
        items: Vec<SearchResult>,
    },
    NoResults,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum DomainList {
    #[default]
    NotLoaded,
    Loaded(Vec<String>),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum StatsDisplay {
    #[default]
    Pending,
    Loaded(Stats),
    Failed,
}

/// Component state for the whole console. Built once and threaded through `update`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    search_input: String,
    search: SearchPhase,
    focus: Option<Field>,
    admin_open: bool,
    domain_input: String,
    crawl_input: String,
    domains: DomainList,
    stats: StatsDisplay,
    toast: ToastSlot,
    requests: RequestLedger,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            search_input: self.search_input.clone(),
            focus: self.focus,
            loading: matches!(self.search, SearchPhase::Loading { .. }),
            results: match &self.search {
                SearchPhase::Results { query, items } => Some(ResultsView {
                    query: query.clone(),
                    title: format!("Search results for \"{query}\""),
                    count_label: format!("{} results found", items.len()),
                    items: items.clone(),
                }),
                _ => None,
            },
            no_results: self.search == SearchPhase::NoResults,
            admin_open: self.admin_open,
            domain_input: self.domain_input.clone(),
            crawl_input: self.crawl_input.clone(),
            domains: match &self.domains {
                DomainList::NotLoaded => DomainListView::NotLoaded,
                DomainList::Loaded(domains) if domains.is_empty() => DomainListView::Empty,
                DomainList::Loaded(domains) => DomainListView::Tags(domains.clone()),
                DomainList::Failed => DomainListView::Failed,
            },
            stats: match &self.stats {
                StatsDisplay::Pending => StatsView::default(),
                StatsDisplay::Loaded(stats) => StatsView {
                    total_pages: stats.total_pages.to_string(),
                    total_domains: stats.total_domains.to_string(),
                    pages_per_domain: stats
                        .pages_per_domain
                        .iter()
                        .map(|(domain, count)| (domain.clone(), *count))
                        .collect(),
                },
                StatsDisplay::Failed => StatsView {
                    total_pages: STATS_ERROR_TEXT.to_string(),
                    total_domains: STATS_ERROR_TEXT.to_string(),
                    pages_per_domain: Vec::new(),
                },
            },
            toast: self.toast.current().map(|toast| ToastView {
                message: toast.message.clone(),
                kind: toast.kind,
                icon_class: toast.kind.icon_class(),
            }),
            dirty: self.dirty,
        }
    }

    /// Returns whether state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn search_input(&self) -> &str {
        &self.search_input
    }

    pub(crate) fn set_search_input(&mut self, text: String) {
        self.search_input = text;
    }

    pub(crate) fn set_search(&mut self, phase: SearchPhase) {
        self.search = phase;
        self.mark_dirty();
    }

    pub(crate) fn pending_query(&self) -> Option<&str> {
        match &self.search {
            SearchPhase::Loading { query } => Some(query),
            _ => None,
        }
    }

    pub(crate) fn result_url(&self, index: usize) -> Option<&str> {
        match &self.search {
            SearchPhase::Results { items, .. } => items.get(index).map(|r| r.url.as_str()),
            _ => None,
        }
    }

    pub(crate) fn focus(&self) -> Option<Field> {
        self.focus
    }

    pub(crate) fn set_focus(&mut self, focus: Option<Field>) {
        if self.focus != focus {
            self.focus = focus;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_admin_open(&mut self, open: bool) {
        if self.admin_open != open {
            self.admin_open = open;
            self.mark_dirty();
        }
    }

    pub(crate) fn domain_input(&self) -> &str {
        &self.domain_input
    }

    pub(crate) fn set_domain_input(&mut self, text: String) {
        self.domain_input = text;
    }

    pub(crate) fn clear_domain_input(&mut self) {
        self.domain_input.clear();
        self.mark_dirty();
    }

    pub(crate) fn crawl_input(&self) -> &str {
        &self.crawl_input
    }

    pub(crate) fn set_crawl_input(&mut self, text: String) {
        self.crawl_input = text;
    }

    pub(crate) fn clear_crawl_input(&mut self) {
        self.crawl_input.clear();
        self.mark_dirty();
    }

    pub(crate) fn set_domains(&mut self, domains: DomainList) {
        self.domains = domains;
        self.mark_dirty();
    }

    pub(crate) fn set_stats(&mut self, stats: StatsDisplay) {
        self.stats = stats;
        self.mark_dirty();
    }

    pub(crate) fn show_toast(&mut self, message: String, kind: ToastKind) -> ToastId {
        self.mark_dirty();
        self.toast.show(message, kind)
    }

    pub(crate) fn expire_toast(&mut self, id: ToastId) {
        if self.toast.expire(id) {
            self.mark_dirty();
        }
    }

    pub(crate) fn issue_request(&mut self, kind: RequestKind) -> RequestSeq {
        self.requests.issue(kind)
    }

    pub(crate) fn is_current_request(&self, kind: RequestKind, seq: RequestSeq) -> bool {
        self.requests.is_current(kind, seq)
    }
}
