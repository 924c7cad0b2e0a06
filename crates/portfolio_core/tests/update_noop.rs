use portfolio_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn page_messages_are_ignored_on_other_pages() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::SearchChanged("react".to_string()));
    let (next, _) = update(next, Msg::ContactSubmitClicked);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
