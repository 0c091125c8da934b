use crate::{ApiFailure, Field, Key, RequestSeq, SearchResult, Stats, ToastId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The console finished starting up.
    Started,
    /// User edited the search box.
    SearchInputChanged(String),
    /// User submitted the search form.
    SearchSubmitted,
    /// User clicked a rendered result. `on_link` is true when the click hit the title link.
    ResultClicked { index: usize, on_link: bool },
    /// User clicked the admin button.
    AdminOpenClicked,
    /// User clicked the admin close button.
    AdminCloseClicked,
    /// Click somewhere on the admin overlay; `on_backdrop` is false for clicks on its content.
    OverlayClicked { on_backdrop: bool },
    KeyPressed(Key),
    /// Platform reports which text field (if any) holds focus.
    FocusChanged(Option<Field>),
    DomainInputChanged(String),
    DomainSubmitted,
    CrawlInputChanged(String),
    CrawlSubmitted,
    /// Backend answered a search.
    SearchCompleted {
        seq: RequestSeq,
        result: Result<Vec<SearchResult>, ApiFailure>,
    },
    /// Backend answered a domain listing.
    DomainsLoaded {
        seq: RequestSeq,
        result: Result<Vec<String>, ApiFailure>,
    },
    /// Backend answered an add-domain request with its confirmation message.
    DomainAdded {
        seq: RequestSeq,
        result: Result<String, ApiFailure>,
    },
    /// Backend accepted (or rejected) a crawl request.
    CrawlAccepted {
        seq: RequestSeq,
        result: Result<String, ApiFailure>,
    },
    StatsLoaded {
        seq: RequestSeq,
        result: Result<Stats, ApiFailure>,
    },
    /// Auto-dismiss timer for a toast fired.
    ToastExpired { toast_id: ToastId },
    /// Fallback for placeholder wiring.
    NoOp,
}
