use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmIntent {
    /// Show the prompt with `Yes` highlighted.
    Open,
    /// Move the highlight to the other button.
    ToggleSelection,
    /// User answered yes. Hides the prompt; the caller performs the action.
    Accept,
    /// User answered no or dismissed the prompt.
    Dismiss,
}

impl Intent for ConfirmIntent {}
