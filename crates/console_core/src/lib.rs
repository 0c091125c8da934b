//! Search console core: pure state machine, view model and markup rendering.
mod effect;
pub mod markup;
mod model;
mod msg;
mod sequence;
mod state;
mod toast;
mod update;
mod view_model;

pub use effect::Effect;
pub use model::{
    ApiFailure, Field, Key, SearchHitFields, SearchResult, Stats, NO_DESCRIPTION,
    SEARCH_RESULT_LIMIT, UNTITLED,
};
pub use msg::Msg;
pub use sequence::{RequestKind, RequestSeq};
pub use state::AppState;
pub use toast::{ToastId, ToastKind, TOAST_DURATION};
pub use update::update;
pub use view_model::{
    AppViewModel, DomainListView, ResultsView, StatsView, ToastView, DOMAINS_FAILED_TEXT,
    NO_DOMAINS_TEXT, NO_RESULTS_TEXT, STATS_ERROR_TEXT, STATS_PENDING_TEXT,
};
