#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User changed one or more filter fields.
    FiltersUpdated(crate::FilterPatch),
    /// One-shot merge of the deep-linked address-bar parameters.
    UrlParamsLoaded(crate::FilterPatch),
    /// The free-text input has been stable for the debounce delay.
    QuerySettled(String),
    /// Provider returned a result page for the request with this sequence number.
    FetchSucceeded {
        seq: u64,
        total_count: u64,
        hits: Vec<crate::SearchHit>,
    },
    /// Provider request failed.
    FetchFailed {
        seq: u64,
        failure: crate::SearchFailure,
    },
}
