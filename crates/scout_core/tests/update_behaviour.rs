use std::sync::Once;

use scout_core::{
    from_query_string, update, AppState, Effect, FilterPatch, Msg, SearchFailure, SearchHit,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scout_logging::initialize_for_tests);
}

fn loaded_state(deep_link: &str) -> (AppState, Vec<Effect>) {
    let state = AppState::new();
    update(state, Msg::UrlParamsLoaded(from_query_string(deep_link)))
}

fn set_filters(state: AppState, patch: FilterPatch) -> (AppState, Vec<Effect>) {
    update(state, Msg::FiltersUpdated(patch))
}

fn start_seq(effects: &[Effect]) -> Option<u64> {
    effects.iter().find_map(|effect| match effect {
        Effect::StartSearch { seq, .. } => Some(*seq),
        _ => None,
    })
}

fn hit(id: u64) -> SearchHit {
    SearchHit {
        id,
        full_name: format!("octo/repo-{id}"),
        ..Default::default()
    }
}

#[test]
fn deep_link_loads_filters_and_starts_search() {
    init_logging();
    let (state, effects) = loaded_state("q=react&minStars=50&sort=forks");

    let request = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::StartSearch { request, .. } => Some(request.clone()),
            _ => None,
        })
        .expect("deep link with criteria should search");
    assert_eq!(request.query, "react stars:>=50");
    assert_eq!(request.sort.as_param(), "forks");
    assert_eq!(request.page, 1);

    let view = state.view();
    assert!(view.loading);
    assert!(!view.has_searched);
}

#[test]
fn empty_deep_link_opens_gate_without_searching() {
    init_logging();
    let (state, effects) = loaded_state("");

    assert!(start_seq(&effects).is_none());
    assert!(!state.view().loading);
    // The gate is open: the next change writes the URL.
    let (_state, effects) = set_filters(
        state,
        FilterPatch {
            language: Some("rust".to_string()),
            ..Default::default()
        },
    );
    assert!(effects
        .iter()
        .any(|effect| matches!(effect, Effect::SyncUrl { query } if query == "language=rust")));
}

#[test]
fn no_url_write_before_deep_link_loads() {
    init_logging();
    let state = AppState::new();
    let (_state, effects) = set_filters(
        state,
        FilterPatch {
            language: Some("rust".to_string()),
            ..Default::default()
        },
    );
    assert!(!effects
        .iter()
        .any(|effect| matches!(effect, Effect::SyncUrl { .. })));
}

#[test]
fn free_text_change_is_debounced_not_fetched() {
    init_logging();
    let (state, _) = loaded_state("");
    let (state, effects) = set_filters(
        state,
        FilterPatch {
            free_text: Some("react".to_string()),
            ..Default::default()
        },
    );

    assert!(start_seq(&effects).is_none());
    assert!(effects
        .iter()
        .any(|effect| matches!(effect, Effect::DebounceQuery { text } if text == "react")));
    assert!(!state.view().loading);
}

#[test]
fn settled_query_starts_search() {
    init_logging();
    let (state, _) = loaded_state("");
    let (state, _) = set_filters(
        state,
        FilterPatch {
            free_text: Some("react".to_string()),
            ..Default::default()
        },
    );
    let (state, effects) = update(state, Msg::QuerySettled("react".to_string()));

    assert!(start_seq(&effects).is_some());
    assert!(state.view().loading);
}

#[test]
fn settling_the_same_text_twice_is_a_noop() {
    init_logging();
    let (state, _) = loaded_state("q=react");
    let (state, effects) = update(state, Msg::QuerySettled("react".to_string()));
    assert!(effects.is_empty());
    assert!(state.view().loading); // still loading from the deep-link fetch
}

#[test]
fn page_change_without_criteria_never_fetches() {
    init_logging();
    let (state, _) = loaded_state("");
    let before = state.view();

    let (state, effects) = set_filters(
        state,
        FilterPatch {
            page: Some(2),
            ..Default::default()
        },
    );

    assert!(start_seq(&effects).is_none());
    let after = state.view();
    assert_eq!(after.loading, before.loading);
    assert_eq!(after.error, before.error);
    assert_eq!(after.has_searched, before.has_searched);
}

#[test]
fn facet_change_fetches_immediately_and_resets_page() {
    init_logging();
    let (state, _) = loaded_state("q=react&page=5");
    assert_eq!(state.filters().page, 5);

    let (state, effects) = set_filters(
        state,
        FilterPatch {
            language: Some("rust".to_string()),
            ..Default::default()
        },
    );

    assert_eq!(state.filters().page, 1);
    let request = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::StartSearch { request, .. } => Some(request.clone()),
            _ => None,
        })
        .expect("facet change should fetch");
    assert_eq!(request.query, "react language:rust");
    assert_eq!(request.page, 1);
}

#[test]
fn per_page_outside_choices_is_ignored() {
    init_logging();
    let (state, _) = loaded_state("q=react");
    let per_page_before = state.filters().per_page;

    let (state, effects) = set_filters(
        state,
        FilterPatch {
            per_page: Some(37),
            ..Default::default()
        },
    );

    assert_eq!(state.filters().per_page, per_page_before);
    assert!(effects.is_empty());
    assert!(start_seq(&effects).is_none());
}

#[test]
fn page_zero_is_clamped_to_one() {
    init_logging();
    let (state, _) = loaded_state("q=react&page=5");
    assert_eq!(state.filters().page, 5);

    let (state, effects) = set_filters(
        state,
        FilterPatch {
            page: Some(0),
            ..Default::default()
        },
    );

    assert_eq!(state.filters().page, 1);
    let request = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::StartSearch { request, .. } => Some(request.clone()),
            _ => None,
        })
        .expect("page change with criteria should fetch");
    assert_eq!(request.page, 1);
}

#[test]
fn explicit_page_in_patch_wins_over_reset() {
    init_logging();
    let (state, _) = loaded_state("q=react");
    let (state, _) = set_filters(
        state,
        FilterPatch {
            language: Some("rust".to_string()),
            page: Some(3),
            ..Default::default()
        },
    );
    assert_eq!(state.filters().page, 3);
}

#[test]
fn successful_fetch_populates_results() {
    init_logging();
    let (state, effects) = loaded_state("q=react");
    let seq = start_seq(&effects).unwrap();

    let (state, effects) = update(
        state,
        Msg::FetchSucceeded {
            seq,
            total_count: 42,
            hits: vec![hit(1), hit(2)],
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.error, None);
    assert!(view.has_searched);
    assert_eq!(view.total_count, 42);
    assert_eq!(view.hits.len(), 2);
}

#[test]
fn stale_completion_is_discarded() {
    init_logging();
    let (state, effects) = loaded_state("q=react");
    let first_seq = start_seq(&effects).unwrap();

    // A facet change supersedes the in-flight request.
    let (state, effects) = set_filters(
        state,
        FilterPatch {
            language: Some("rust".to_string()),
            ..Default::default()
        },
    );
    let second_seq = start_seq(&effects).unwrap();
    assert!(second_seq > first_seq);

    let (state, _) = update(
        state,
        Msg::FetchSucceeded {
            seq: first_seq,
            total_count: 999,
            hits: vec![hit(1)],
        },
    );
    let view = state.view();
    assert!(view.loading);
    assert_eq!(view.total_count, 0);
    assert!(view.hits.is_empty());

    let (state, _) = update(
        state,
        Msg::FetchSucceeded {
            seq: second_seq,
            total_count: 7,
            hits: vec![hit(2)],
        },
    );
    assert_eq!(state.view().total_count, 7);
}

#[test]
fn rate_limit_message_differs_from_generic_failure() {
    init_logging();
    let (state, effects) = loaded_state("q=react");
    let seq = start_seq(&effects).unwrap();

    let (rate_limited, _) = update(
        state.clone(),
        Msg::FetchFailed {
            seq,
            failure: SearchFailure::RateLimited,
        },
    );
    let (generic, _) = update(
        state,
        Msg::FetchFailed {
            seq,
            failure: SearchFailure::RequestFailed("500 Internal Server Error".to_string()),
        },
    );

    let rate_limited_message = rate_limited.view().error.unwrap();
    let generic_message = generic.view().error.unwrap();
    assert_ne!(rate_limited_message, generic_message);
    assert!(rate_limited_message.contains("rate limit"));
}

#[test]
fn failure_keeps_previous_results() {
    init_logging();
    let (state, effects) = loaded_state("q=react");
    let seq = start_seq(&effects).unwrap();
    let (state, _) = update(
        state,
        Msg::FetchSucceeded {
            seq,
            total_count: 2,
            hits: vec![hit(1), hit(2)],
        },
    );

    // Next page fails; the old rows stay on screen.
    let (state, effects) = set_filters(
        state,
        FilterPatch {
            page: Some(2),
            ..Default::default()
        },
    );
    let seq = start_seq(&effects).unwrap();
    let (state, _) = update(
        state,
        Msg::FetchFailed {
            seq,
            failure: SearchFailure::Unknown(String::new()),
        },
    );

    let view = state.view();
    assert_eq!(view.error.as_deref(), Some("An error occurred while searching"));
    assert_eq!(view.hits.len(), 2);
    assert_eq!(view.total_count, 2);
    assert!(view.has_searched);
}

#[test]
fn has_searched_is_monotonic() {
    init_logging();
    let (state, effects) = loaded_state("q=react");
    let seq = start_seq(&effects).unwrap();
    let (state, _) = update(
        state,
        Msg::FetchFailed {
            seq,
            failure: SearchFailure::RateLimited,
        },
    );
    assert!(state.view().has_searched);

    // Clearing everything does not reset the flag.
    let (state, _) = set_filters(
        state,
        FilterPatch {
            free_text: Some(String::new()),
            ..Default::default()
        },
    );
    let (state, _) = update(state, Msg::QuerySettled(String::new()));
    assert!(state.view().has_searched);
}
