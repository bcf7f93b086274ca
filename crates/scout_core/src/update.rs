use crate::{build_search_query, url_state, AppState, Effect, Msg, SearchRequest};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FiltersUpdated(patch) => {
            let outcome = state.apply_patch(patch);
            if !outcome.changed() {
                return (state, Vec::new());
            }

            let mut effects = Vec::new();
            // Outbound URL sync never runs before the deep link loaded,
            // so the default state cannot overwrite it.
            if state.url_gate_open() {
                effects.push(Effect::SyncUrl {
                    query: url_state::to_query_string(state.filters()),
                });
            }
            if outcome.free_text_changed {
                effects.push(Effect::DebounceQuery {
                    text: state.filters().free_text.clone(),
                });
            } else if let Some(effect) = begin_search(&mut state) {
                effects.push(effect);
            }
            effects
        }
        Msg::UrlParamsLoaded(patch) => {
            state.apply_patch(patch);
            state.sync_debounced_query();
            state.open_url_gate();
            state.mark_dirty();

            // Write back once to canonicalize the deep link, then fetch
            // if it carried anything worth searching for.
            let mut effects = vec![Effect::SyncUrl {
                query: url_state::to_query_string(state.filters()),
            }];
            if let Some(effect) = begin_search(&mut state) {
                effects.push(effect);
            }
            effects
        }
        Msg::QuerySettled(text) => {
            if !state.settle_query(text) {
                return (state, Vec::new());
            }
            begin_search(&mut state).into_iter().collect()
        }
        Msg::FetchSucceeded {
            seq,
            total_count,
            hits,
        } => {
            if state.accepts(seq) {
                state.complete_fetch(total_count, hits);
            }
            Vec::new()
        }
        Msg::FetchFailed { seq, failure } => {
            if state.accepts(seq) {
                state.fail_fetch(&failure);
            }
            Vec::new()
        }
    };

    (state, effects)
}

/// Starts a fetch against the effective filters, unless there is nothing
/// to search for (no term, no facet): an unconstrained provider query is
/// skipped entirely and state stays as it is.
fn begin_search(state: &mut AppState) -> Option<Effect> {
    let effective = state.effective_filters();
    if !effective.has_criteria() {
        return None;
    }

    let seq = state.begin_fetch();
    Some(Effect::StartSearch {
        seq,
        request: SearchRequest {
            query: build_search_query(&effective),
            sort: effective.sort,
            order: effective.order,
            page: effective.page,
            per_page: effective.per_page,
        },
    })
}
