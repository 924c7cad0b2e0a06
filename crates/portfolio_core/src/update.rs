use site_logging::{site_debug, CONTACT_TARGET};

use crate::{AppState, ContactPhase, Effect, Msg, Route};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Navigate(path) => {
            let route = Route::from_href(&path);
            match state.enter_route(route) {
                Some(submission_id) => {
                    site_debug!(
                        target: CONTACT_TARGET,
                        "left contact page with submission {} in flight",
                        submission_id
                    );
                    vec![Effect::CancelSubmission { submission_id }]
                }
                None => Vec::new(),
            }
        }
        Msg::CategorySelected(category) => {
            if state.route() == &Route::Projects && state.query().category != category {
                state.query_mut().category = category;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SearchChanged(search) => {
            if state.route() == &Route::Projects && state.query().search != search {
                state.query_mut().search = search;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ResetFilters => {
            if state.route() == &Route::Projects && !state.query().is_default() {
                *state.query_mut() = Default::default();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ContactFieldChanged { field, value } => {
            if state.route() == &Route::Contact && state.contact_mut().edit(field, value) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ContactSubmitClicked => {
            if state.route() != &Route::Contact || state.contact().phase() != ContactPhase::Idle {
                return (state, Vec::new());
            }
            let submission_id = state.allocate_submission_id();
            let started = state.contact_mut().begin_submit(submission_id);
            state.mark_dirty();
            match started {
                Some(fields) => vec![Effect::SubmitContact {
                    submission_id,
                    fields,
                }],
                None => Vec::new(),
            }
        }
        Msg::ContactSubmitResolved {
            submission_id,
            outcome,
        } => {
            if state.contact_mut().resolve(submission_id, outcome) {
                state.mark_dirty();
            } else {
                site_debug!(
                    target: CONTACT_TARGET,
                    "ignoring result of stale submission {}",
                    submission_id
                );
            }
            Vec::new()
        }
        Msg::SendAnotherClicked => {
            if state.contact_mut().send_another() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::AboutTabSelected(tab) => {
            if state.select_about_tab(tab) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SkillGroupSelected(key) => {
            if state.select_skill_group(&key) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SectionRevealed(section) => {
            if state.reveal(section) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Tick => {
            if state.advance_typing() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
