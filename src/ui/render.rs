use crate::ui::app::App;
use crate::ui::confirm::render_confirm_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, centered_rect_by_size, layout_regions};
use crate::ui::theme::{Palette, GLOBAL_BORDER, STATUS_ERROR, STATUS_OK};
use crate::ui::timer::{format_clock, TimerState};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const HELP_URL: &str =
    "https://brasilescola.uol.com.br/dicas-de-estudo/tecnica-pomodoro-que-e-e-como-funciona.htm";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let palette = app.theme().palette();
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(palette), header);
    frame.render_widget(Clear, body);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        body,
    );

    let (session_area, break_area, clock_area) = body_regions(body);
    let timer = app.timer();
    frame.render_widget(
        length_panel("Session Length", timer.session_length, "↑/k", "↓/j", palette),
        session_area,
    );
    frame.render_widget(
        length_panel("Break Length", timer.break_length, "→/l", "←/h", palette),
        break_area,
    );
    frame.render_widget(clock_panel(timer, palette), clock_area);

    frame.render_widget(Footer::new().widget(footer, palette), footer);

    if app.show_help() {
        render_help(frame, body, palette);
    }
    render_confirm_dialog(frame, app.confirm_dialog(), palette);
}

fn length_panel(
    title: &'static str,
    minutes: u8,
    up: &'static str,
    down: &'static str,
    palette: Palette,
) -> Paragraph<'static> {
    let hint_style = Style::default().fg(palette.text).add_modifier(Modifier::DIM);
    let lines = vec![
        Line::from(Span::styled(format!("▲ {}", up), hint_style)),
        Line::from(Span::styled(
            minutes.to_string(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("▼ {}", down), hint_style)),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(palette.background))
        .block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(palette.accent)))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

fn clock_panel(timer: &TimerState, palette: Palette) -> Paragraph<'static> {
    let (glyph, glyph_color) = if timer.running {
        ("⏸  running", STATUS_OK)
    } else {
        ("▶  paused", STATUS_ERROR)
    };
    let clock_style = if timer.running {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            timer.phase.label(),
            Style::default().fg(palette.text),
        )),
        Line::from(""),
        Line::from(Span::styled(format_clock(timer.remaining_seconds), clock_style)),
        Line::from(""),
        Line::from(Span::styled(glyph, Style::default().fg(glyph_color))),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(palette.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

fn render_help(frame: &mut Frame<'_>, body: Rect, palette: Palette) {
    let lines = vec![
        Line::from("Work in focused sessions separated by short breaks."),
        Line::from("When a session ends a break starts on its own, and"),
        Line::from("when the break ends the next session begins."),
        Line::from(""),
        Line::from("Changing the session length restarts the countdown."),
        Line::from("Changing the break length applies to the next break."),
        Line::from(""),
        Line::from(Span::styled(HELP_URL, Style::default().fg(palette.accent))),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    // Borders plus one spare row for the wrapped URL.
    let height = lines.len().saturating_add(3) as u16;
    let area = centered_rect_by_size(body, 60, height);
    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(" Help ", Style::default().fg(palette.accent)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.background).fg(palette.text));
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(popup);
    frame.render_widget(widget, area);
}
