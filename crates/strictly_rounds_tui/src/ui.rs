//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strictly_rounds::{Cell, Player, Position, RoundStatus, Scoreboard, Snapshot};

use crate::app::{App, Modal};
use crate::summary::RoundSummary;

const ROWS: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
];

/// Renders the whole table: title, turn, board, scores, status, modal.
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.snapshot();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Turn
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Scores
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new(format!("Strictly Rounds - Round {}", snapshot.round()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    frame.render_widget(turn_indicator(&snapshot), chunks[1]);
    draw_board(frame, chunks[2], &snapshot, app.cursor());
    frame.render_widget(scores(snapshot.scoreboard()), chunks[3]);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("1-9 or arrows+Enter: play  r: restart  q: quit"),
        );
    frame.render_widget(status, chunks[4]);

    if let Modal::Open(summary) = app.modal() {
        draw_summary(frame, area, summary);
    }
}

fn player_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn turn_indicator(snapshot: &Snapshot) -> Paragraph<'static> {
    let line = match snapshot.status() {
        RoundStatus::InProgress => {
            let player = *snapshot.current_player();
            Line::from(vec![
                Span::styled(player.to_string(), player_style(player)),
                Span::raw(" TURN"),
            ])
        }
        status => Line::from(status.to_string()),
    };
    Paragraph::new(line).alignment(Alignment::Center)
}

fn scores(scoreboard: &Scoreboard) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(format!("X  {}", scoreboard.wins(Player::X)), player_style(Player::X)),
        Span::raw("   |   "),
        Span::raw(format!("TIES  {}", scoreboard.ties())),
        Span::raw("   |   "),
        Span::styled(format!("O  {}", scoreboard.wins(Player::O)), player_style(Player::O)),
    ]);
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"))
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, positions) in ROWS.iter().enumerate() {
        draw_row(frame, rows[i * 2], snapshot, cursor, positions);
        if i < 2 {
            draw_separator(frame, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    cursor: Position,
    positions: &[Position; 3],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[i * 2], snapshot, cursor, *pos);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position, pos: Position) {
    let (symbol, base_style) = match snapshot.board().get(pos) {
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(player) => (player.to_string(), player_style(player)),
    };

    let on_winning_line = snapshot
        .winning_line()
        .as_ref()
        .is_some_and(|line| line.contains(&pos));

    let style = if on_winning_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == cursor && *snapshot.status() == RoundStatus::InProgress {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(" ".repeat(12), style)),
        Line::from(Span::styled(format!("{:^12}", symbol), style)),
        Line::from(Span::styled(" ".repeat(12), style)),
    ]);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_summary(frame: &mut Frame, area: Rect, summary: &RoundSummary) {
    let modal_area = center_rect(area, 36, 9);
    let title_style = match summary.winner {
        Some(player) => player_style(player),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    };
    let board = &summary.scoreboard;

    let text = vec![
        Line::from(Span::raw(summary.subtitle.clone())),
        Line::from(Span::styled(summary.title.clone(), title_style)),
        Line::from(""),
        Line::from(format!(
            "X {}  |  TIES {}  |  O {}",
            board.wins(Player::X),
            board.ties(),
            board.wins(Player::O)
        )),
        Line::from(""),
        Line::from("[n] NEXT ROUND    [q] QUIT"),
    ];

    let modal = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Round {}", summary.round)),
    );
    frame.render_widget(Clear, modal_area);
    frame.render_widget(modal, modal_area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
