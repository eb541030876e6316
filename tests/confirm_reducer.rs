use pomoclock::ui::confirm::{ConfirmChoice, ConfirmDialogState, ConfirmIntent, ConfirmReducer};
use pomoclock::ui::mvi::Reducer;

fn visible(selected: ConfirmChoice) -> ConfirmDialogState {
    ConfirmDialogState::Visible { selected }
}

#[test]
fn open_shows_prompt_with_yes_selected() {
    let state = ConfirmReducer::reduce(ConfirmDialogState::Hidden, ConfirmIntent::Open);
    assert_eq!(state, visible(ConfirmChoice::Yes));
}

#[test]
fn open_again_resets_selection() {
    let state = ConfirmReducer::reduce(visible(ConfirmChoice::No), ConfirmIntent::Open);
    assert_eq!(state.selected(), Some(ConfirmChoice::Yes));
}

#[test]
fn toggle_flips_between_buttons() {
    let state = ConfirmReducer::reduce(visible(ConfirmChoice::Yes), ConfirmIntent::ToggleSelection);
    assert_eq!(state.selected(), Some(ConfirmChoice::No));
    let state = ConfirmReducer::reduce(state, ConfirmIntent::ToggleSelection);
    assert_eq!(state.selected(), Some(ConfirmChoice::Yes));
}

#[test]
fn toggle_on_hidden_is_noop() {
    let state = ConfirmReducer::reduce(ConfirmDialogState::Hidden, ConfirmIntent::ToggleSelection);
    assert!(!state.is_visible());
}

#[test]
fn accept_and_dismiss_hide_prompt() {
    for intent in [ConfirmIntent::Accept, ConfirmIntent::Dismiss] {
        let state = ConfirmReducer::reduce(visible(ConfirmChoice::No), intent);
        assert!(!state.is_visible(), "{intent:?} should hide");
    }
}
