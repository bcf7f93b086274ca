use scout_core::{update, AppState, Msg};

#[test]
fn unchanged_patch_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::FiltersUpdated(Default::default()));

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
