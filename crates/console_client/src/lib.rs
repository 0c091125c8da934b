//! Search console client: backend HTTP API and request execution.
mod api;
mod handle;
mod types;

pub use api::{ApiSettings, ReqwestSearchApi, SearchApi, DEFAULT_BASE_URL};
pub use handle::{ApiCommand, ApiEvent, ApiHandle, ChannelEventSink, EventSink};
pub use types::{ApiError, ApiStats, FailureKind, RequestId, SearchHit};
