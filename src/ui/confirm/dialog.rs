//! Rendering for the reset confirmation prompt.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::Palette;

use super::state::{ConfirmChoice, ConfirmDialogState};

const DIALOG_WIDTH: u16 = 40;
const DIALOG_HEIGHT: u16 = 6;

pub fn render_confirm_dialog(frame: &mut Frame, state: &ConfirmDialogState, palette: Palette) {
    let Some(selected) = state.selected() else {
        return;
    };

    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Reset timer ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.background).fg(palette.text));

    let lines = vec![
        Line::from("Are you sure?"),
        Line::from(""),
        Line::from(vec![
            button("Yes", selected == ConfirmChoice::Yes, palette),
            Span::raw("   "),
            button("No", selected == ConfirmChoice::No, palette),
        ]),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(widget, area);
}

fn button(label: &str, focused: bool, palette: Palette) -> Span<'static> {
    let text = format!("[ {} ]", label);
    if focused {
        Span::styled(
            text,
            Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(text, Style::default().fg(palette.text))
    }
}
