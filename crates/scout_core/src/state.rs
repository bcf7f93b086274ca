use crate::filters::ApplyOutcome;
use crate::view_model::SearchViewModel;
use crate::{FilterPatch, FilterSet};

/// One search result, carried through unmodified for presentation.
///
/// The core counts and carries hits; it never branches on their fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchHit {
    pub id: u64,
    pub full_name: String,
    pub owner_login: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers: u64,
    pub forks: u64,
    pub language: Option<String>,
    pub license: Option<String>,
    pub updated_at: String,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// A search failure as categorized at the state-machine boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFailure {
    /// The provider signaled quota exhaustion.
    RateLimited,
    /// Any other non-success status outcome.
    RequestFailed(String),
    /// Non-categorizable transport-level failure.
    Unknown(String),
}

impl SearchFailure {
    /// Human-readable message shown inline next to the results.
    pub fn message(&self) -> String {
        match self {
            SearchFailure::RateLimited => {
                "API rate limit exceeded. Please try again later.".to_string()
            }
            SearchFailure::RequestFailed(detail) => format!("Search failed: {detail}"),
            SearchFailure::Unknown(detail) => {
                if detail.is_empty() {
                    "An error occurred while searching".to_string()
                } else {
                    detail.clone()
                }
            }
        }
    }
}

/// The in-memory search session: filters, results and fetch lifecycle.
///
/// Mutated only through [`crate::update`]; nothing here performs IO.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    filters: FilterSet,
    debounced_query: String,
    hits: Vec<SearchHit>,
    total_count: u64,
    phase: SessionPhase,
    error: Option<String>,
    has_searched: bool,
    url_loaded: bool,
    latest_seq: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> SearchViewModel {
        SearchViewModel {
            filters: self.filters.clone(),
            hits: self.hits.clone(),
            total_count: self.total_count,
            loading: self.phase == SessionPhase::Loading,
            error: self.error.clone(),
            has_searched: self.has_searched,
            total_pages: crate::total_pages(self.total_count, self.filters.per_page),
            dirty: self.dirty,
        }
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Filters as the fetch path sees them: the live free text is
    /// replaced by the last debounced value.
    pub fn effective_filters(&self) -> FilterSet {
        let mut filters = self.filters.clone();
        filters.free_text = self.debounced_query.clone();
        filters
    }

    /// Returns true and clears the dirty flag if a render is due.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn apply_patch(&mut self, patch: FilterPatch) -> ApplyOutcome {
        let outcome = self.filters.apply(patch);
        if outcome.changed() {
            self.mark_dirty();
        }
        outcome
    }

    /// Adopts a settled free-text value; returns whether it changed.
    pub(crate) fn settle_query(&mut self, text: String) -> bool {
        if self.debounced_query == text {
            return false;
        }
        self.debounced_query = text;
        true
    }

    /// Aligns the debounced slot with the live free text, used when the
    /// deep link loads so the initial fetch does not wait for a timer.
    pub(crate) fn sync_debounced_query(&mut self) {
        self.debounced_query = self.filters.free_text.clone();
    }

    pub(crate) fn open_url_gate(&mut self) {
        self.url_loaded = true;
    }

    pub(crate) fn url_gate_open(&self) -> bool {
        self.url_loaded
    }

    /// Enters Loading and issues the next request sequence number.
    pub(crate) fn begin_fetch(&mut self) -> u64 {
        self.phase = SessionPhase::Loading;
        self.error = None;
        self.latest_seq += 1;
        self.mark_dirty();
        self.latest_seq
    }

    /// Stale-response fence: only the latest issued request may land.
    pub(crate) fn accepts(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    pub(crate) fn complete_fetch(&mut self, total_count: u64, hits: Vec<SearchHit>) {
        self.hits = hits;
        self.total_count = total_count;
        self.phase = SessionPhase::Ready;
        self.error = None;
        self.has_searched = true;
        self.mark_dirty();
    }

    /// Records a failure; previous hits stay in place, only flags change.
    pub(crate) fn fail_fetch(&mut self, failure: &SearchFailure) {
        self.phase = SessionPhase::Error;
        self.error = Some(failure.message());
        self.has_searched = true;
        self.mark_dirty();
    }
}
