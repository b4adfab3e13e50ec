pub mod format;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::App,
    clock::Clock,
    session::{Phase, SlotState},
    ui::format::{format_percent, format_secs, leaderboard_line},
};

const HORIZONTAL_MARGIN: u16 = 2;
const TITLE: &str = "Arrow Up";
const FOOTER: &str = "© 2024 Arrower. All rights reserved.";
const INPUT_PLACEHOLDER: &str = "Type the arrows...";
const LEGEND: &str = "(enter) start / cancel / restart   (arrows) play   (esc) quit";

impl<C: Clock> Widget for &App<C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let game = &self.game;
        let session = game.session();

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let banner_style = Style::default()
            .patch(bold_style)
            .fg(Color::White)
            .bg(Color::DarkGray);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(1), // padding
                Constraint::Length(1), // arrows
                Constraint::Length(1), // padding
                Constraint::Length(3), // input field
                Constraint::Length(3), // action button
                Constraint::Length(1), // timer
                Constraint::Length(1), // accuracy
                Constraint::Length(1), // error line
                Constraint::Min(3),    // leaderboard
                Constraint::Length(1), // legend
                Constraint::Length(1), // footer
            ])
            .split(area);

        Paragraph::new(Span::styled(TITLE, banner_style))
            .style(banner_style)
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        render_arrows(self, chunks[2], buf);

        // vestigial: input is captured globally, the field only mirrors the phase
        let input_style = if game.phase() == Phase::Running {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        Paragraph::new(Span::styled(INPUT_PLACEHOLDER, input_style))
            .block(Block::default().borders(Borders::ALL).border_style(input_style))
            .render(chunks[4], buf);

        Paragraph::new(Span::styled(game.action_label().to_string(), bold_style))
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .render(chunks[5], buf);

        Paragraph::new(format!("Time: {}", format_secs(session.elapsed_secs)))
            .alignment(Alignment::Center)
            .render(chunks[6], buf);

        Paragraph::new(format!("Accuracy: {}", format_percent(session.accuracy)))
            .alignment(Alignment::Center)
            .render(chunks[7], buf);

        Paragraph::new(Span::styled(
            session.error.unwrap_or_default(),
            Style::default().fg(Color::Red),
        ))
        .alignment(Alignment::Center)
        .render(chunks[8], buf);

        render_leaderboard(self, chunks[9], buf);

        Paragraph::new(Span::styled(
            LEGEND,
            Style::default().add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .render(chunks[10], buf);

        Paragraph::new(Span::styled(FOOTER, dim_style))
            .style(banner_style)
            .alignment(Alignment::Center)
            .render(chunks[11], buf);
    }
}

fn slot_style(state: SlotState) -> Style {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    match state {
        SlotState::Pending => bold_style,
        SlotState::Current => bold_style
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
        SlotState::Correct => bold_style.fg(Color::Black).bg(Color::LightGreen),
        SlotState::Wrong => bold_style.fg(Color::Black).bg(Color::LightRed),
    }
}

fn render_arrows<C: Clock>(app: &App<C>, area: Rect, buf: &mut Buffer) {
    let session = app.game.session();
    let spans = session
        .sequence
        .iter()
        .zip(session.slot_states())
        .flat_map(|(arrow, state)| {
            [
                Span::styled(format!(" {arrow} "), slot_style(state)),
                Span::raw(" "),
            ]
        })
        .collect::<Vec<Span>>();

    let row_width: usize = spans.iter().map(|s| s.content.width()).sum();

    Paragraph::new(Line::from(spans))
        .alignment(if row_width <= area.width as usize {
            Alignment::Center
        } else {
            Alignment::Left
        })
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn render_leaderboard<C: Clock>(app: &App<C>, area: Rect, buf: &mut Buffer) {
    let board = app.game.leaderboard();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            "Leaderboard",
            Style::default().add_modifier(Modifier::BOLD),
        ));

    // newest runs stay visible when the list outgrows the box
    let visible = area.height.saturating_sub(2) as usize;
    let skip = board.len().saturating_sub(visible);
    let fastest = board.fastest();

    let lines = board
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(idx, entry)| {
            let text = leaderboard_line(idx + 1, entry.time_secs, entry.accuracy);
            if Some(idx) == fastest {
                Line::from(vec![
                    Span::raw(text),
                    Span::styled(" ★", Style::default().fg(Color::Yellow)),
                ])
            } else {
                Line::from(text)
            }
        })
        .collect::<Vec<Line>>();

    Paragraph::new(lines).block(block).render(area, buf);
}
