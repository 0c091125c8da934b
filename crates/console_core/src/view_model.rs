use crate::{Field, SearchResult, ToastKind};

pub const NO_DOMAINS_TEXT: &str = "No domains added yet";
pub const DOMAINS_FAILED_TEXT: &str = "Failed to load domains";
pub const NO_RESULTS_TEXT: &str = "No results found";
pub const STATS_ERROR_TEXT: &str = "Error";
pub const STATS_PENDING_TEXT: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search_input: String,
    pub focus: Option<Field>,
    pub loading: bool,
    /// Present only when the last search returned at least one hit.
    pub results: Option<ResultsView>,
    pub no_results: bool,
    pub admin_open: bool,
    pub domain_input: String,
    pub crawl_input: String,
    pub domains: DomainListView,
    pub stats: StatsView,
    pub toast: Option<ToastView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub query: String,
    pub title: String,
    pub count_label: String,
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DomainListView {
    #[default]
    NotLoaded,
    Empty,
    Tags(Vec<String>),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub total_pages: String,
    pub total_domains: String,
    pub pages_per_domain: Vec<(String, u64)>,
}

impl Default for StatsView {
    fn default() -> Self {
        Self {
            total_pages: STATS_PENDING_TEXT.to_string(),
            total_domains: STATS_PENDING_TEXT.to_string(),
            pages_per_domain: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub message: String,
    pub kind: ToastKind,
    pub icon_class: &'static str,
}
