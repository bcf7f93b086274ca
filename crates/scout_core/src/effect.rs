/// Everything the engine needs to issue one provider request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub sort: crate::SortKey,
    pub order: crate::SortOrder,
    pub page: u32,
    pub per_page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one provider search, tagged for stale-response fencing.
    StartSearch { seq: u64, request: SearchRequest },
    /// Route the free-text input through the debounce timer.
    DebounceQuery { text: String },
    /// Replace the address-bar query string (no navigation entry).
    SyncUrl { query: String },
}
