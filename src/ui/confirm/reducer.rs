use crate::ui::confirm::intent::ConfirmIntent;
use crate::ui::confirm::state::{ConfirmChoice, ConfirmDialogState};
use crate::ui::mvi::Reducer;

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmDialogState;
    type Intent = ConfirmIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::Open => ConfirmDialogState::Visible {
                selected: ConfirmChoice::Yes,
            },
            ConfirmIntent::ToggleSelection => match state {
                ConfirmDialogState::Visible { selected } => ConfirmDialogState::Visible {
                    selected: match selected {
                        ConfirmChoice::Yes => ConfirmChoice::No,
                        ConfirmChoice::No => ConfirmChoice::Yes,
                    },
                },
                other => other,
            },
            ConfirmIntent::Accept | ConfirmIntent::Dismiss => ConfirmDialogState::Hidden,
        }
    }
}
