use scout_core::{Effect, Msg, SearchFailure, SearchHit};
use scout_engine::{EngineEvent, EngineHandle, FailureKind, Repository, SearchError};
use scout_logging::scout_info;

use crate::url_store::ParamStore;

/// Executes core effects against the engine and the param store, and
/// maps engine events back into core messages.
pub struct EffectRunner {
    engine: EngineHandle,
    params: Box<dyn ParamStore>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, params: Box<dyn ParamStore>) -> Self {
        Self { engine, params }
    }

    pub fn share_query(&self) -> String {
        self.params.read()
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartSearch { seq, request } => {
                    scout_info!("StartSearch seq={} q={}", seq, request.query);
                    self.engine.search(
                        seq,
                        scout_engine::SearchRequest {
                            query: request.query,
                            sort: request.sort.as_param().to_string(),
                            order: request.order.as_param().to_string(),
                            page: request.page,
                            per_page: request.per_page,
                        },
                    );
                }
                Effect::DebounceQuery { text } => {
                    self.engine.debounce_query(text);
                }
                Effect::SyncUrl { query } => {
                    self.params.write(&query);
                }
            }
        }
    }

    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(|event| match event {
            EngineEvent::QuerySettled { text } => Msg::QuerySettled(text),
            EngineEvent::SearchCompleted { seq, result } => match result {
                Ok(page) => Msg::FetchSucceeded {
                    seq,
                    total_count: page.total_count,
                    hits: page.items.into_iter().map(to_hit).collect(),
                },
                Err(err) => Msg::FetchFailed {
                    seq,
                    failure: map_failure(err),
                },
            },
        })
    }
}

fn to_hit(repo: Repository) -> SearchHit {
    SearchHit {
        id: repo.id,
        full_name: repo.full_name,
        owner_login: repo.owner.login,
        description: repo.description,
        html_url: repo.html_url,
        stargazers: repo.stargazers_count,
        forks: repo.forks_count,
        language: repo.language,
        license: repo.license.map(|license| license.name),
        updated_at: repo.updated_at,
        topics: repo.topics,
    }
}

fn map_failure(err: SearchError) -> SearchFailure {
    match err.kind {
        FailureKind::RateLimited => SearchFailure::RateLimited,
        FailureKind::HttpStatus(_) => SearchFailure::RequestFailed(err.message),
        FailureKind::Timeout | FailureKind::Network | FailureKind::InvalidResponse => {
            SearchFailure::Unknown(err.message)
        }
    }
}
