use std::time::Duration;

use crate::{RequestSeq, ToastId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Search {
        seq: RequestSeq,
        query: String,
        limit: u32,
    },
    FetchDomains { seq: RequestSeq },
    AddDomain { seq: RequestSeq, domain: String },
    SubmitCrawl { seq: RequestSeq, urls: Vec<String> },
    FetchStats { seq: RequestSeq },
    /// Open the URL in a new browsing context.
    OpenUrl { url: String },
    FocusSearchInput,
    ScheduleToastExpiry { toast_id: ToastId, after: Duration },
}
