//! Scout engine: provider IO, debounce timer and effect execution.
mod client;
mod debounce;
mod engine;
mod types;

pub use client::{ClientSettings, GithubSearchClient, SearchClient};
pub use debounce::Debouncer;
pub use engine::{EngineEvent, EngineHandle};
pub use types::{
    FailureKind, License, Owner, Repository, SearchError, SearchPage, SearchRequest,
};
