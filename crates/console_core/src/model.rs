use std::collections::BTreeMap;

/// Maximum number of hits requested per search.
pub const SEARCH_RESULT_LIMIT: u32 = 20;

pub const UNTITLED: &str = "Untitled";
pub const NO_DESCRIPTION: &str = "No description available";
const MISSING_URL: &str = "#";

/// One search hit, with display fallbacks already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub description: String,
    pub domain: String,
    /// Display form of the last-updated timestamp, if the backend sent one.
    pub last_updated: Option<String>,
}

/// Raw fields of a hit as the backend delivers them; every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHitFields {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub domain: Option<String>,
    pub last_updated: Option<String>,
}

impl SearchResult {
    /// Builds a result, treating empty strings like missing values.
    ///
    /// The description falls back to the page content and then to a placeholder.
    pub fn from_fields(fields: SearchHitFields) -> Self {
        let SearchHitFields {
            title,
            url,
            description,
            content,
            domain,
            last_updated,
        } = fields;

        Self {
            title: non_empty(title).unwrap_or_else(|| UNTITLED.to_string()),
            url: non_empty(url).unwrap_or_else(|| MISSING_URL.to_string()),
            description: non_empty(description)
                .or_else(|| non_empty(content))
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            domain: domain.unwrap_or_default(),
            last_updated: non_empty(last_updated),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_pages: u64,
    pub total_domains: u64,
    pub pages_per_domain: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub message: String,
}

impl ApiFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Text fields the platform can focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SearchInput,
    DomainInput,
    CrawlInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Slash,
    Escape,
    Other,
}
