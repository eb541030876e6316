use crate::ui::theme::{Palette, GLOBAL_BORDER};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, palette: Palette) -> Paragraph<'static> {
        let title_style = Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD);
        let line = Line::from(vec![Span::styled("Pomodoro Technique", title_style)]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(Style::default().bg(palette.background))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
