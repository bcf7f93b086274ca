//! Scout core: pure search state machine, query builder and URL codecs.
mod effect;
mod filters;
mod msg;
mod query;
mod state;
mod update;
mod url_state;
mod view_model;

pub use effect::{Effect, SearchRequest};
pub use filters::{
    ApplyOutcome, FilterPatch, FilterSet, SortKey, SortOrder, DEFAULT_PER_PAGE, PER_PAGE_CHOICES,
};
pub use msg::Msg;
pub use query::build_search_query;
pub use state::{AppState, SearchFailure, SearchHit, SessionPhase};
pub use update::update;
pub use url_state::{from_query_string, to_query_string};
pub use view_model::{total_pages, SearchViewModel, PROVIDER_PAGE_CAP};
