use crate::ui::mvi::UiState;

/// Highlighted button of the yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmChoice {
    #[default]
    Yes,
    No,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfirmDialogState {
    #[default]
    Hidden,
    Visible {
        /// Button that `Enter` activates.
        selected: ConfirmChoice,
    },
}

impl UiState for ConfirmDialogState {}

impl ConfirmDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn selected(&self) -> Option<ConfirmChoice> {
        match self {
            Self::Hidden => None,
            Self::Visible { selected } => Some(*selected),
        }
    }
}
