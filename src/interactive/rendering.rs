//! TUI rendering with ratatui
//!
//! Board grid, status bar, and the end-of-game modal.

use super::app::App;
use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{Board, Cell, Outcome, ROW_COUNT};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    if app.board.is_loading() {
        render_loading(f, app, f.area());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(TILE_HEIGHT * ROW_COUNT as u16),
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_status(f, &app.board, chunks[2]);

    if app.board.modal_visible() {
        render_modal(f, &app.board);
    }
}

fn render_loading(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "LOADING...",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("source: {} | Esc to quit", app.source_name),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, centered_rect(area.width, 2, area));
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let grid = centered_rect(
        TILE_WIDTH * WORD_LENGTH as u16,
        TILE_HEIGHT * ROW_COUNT as u16,
        area,
    );

    for (row_index, row) in app.board.rows().iter().enumerate() {
        let enabled = app.board.is_row_enabled(row_index);
        for (cell_index, cell) in row.cells().iter().enumerate() {
            let tile = tile_rect(grid, row_index, cell_index);
            if tile.bottom() > area.bottom() || tile.right() > area.right() {
                continue;
            }
            render_tile(f, cell, enabled, tile);
        }
    }

    if let Some(focus) = app.cursor
        && app.board.is_row_enabled(focus.row)
        && !app.board.is_evaluating()
    {
        let tile = tile_rect(grid, focus.row, focus.cell);
        if tile.bottom() <= area.bottom() && tile.right() <= area.right() {
            f.set_cursor_position(Position::new(tile.x + TILE_WIDTH / 2, tile.y + 1));
        }
    }
}

fn tile_rect(grid: Rect, row: usize, cell: usize) -> Rect {
    Rect::new(
        grid.x + TILE_WIDTH * cell as u16,
        grid.y + TILE_HEIGHT * row as u16,
        TILE_WIDTH,
        TILE_HEIGHT,
    )
}

/// Style for a tile: status colour, inverted while flipping
#[must_use]
pub fn tile_style(cell: &Cell) -> Style {
    let style = match cell.status {
        LetterStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Idle => Style::default().fg(Color::White),
    };
    let style = style.add_modifier(Modifier::BOLD);
    if cell.animating {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn render_tile(f: &mut Frame, cell: &Cell, enabled: bool, area: Rect) {
    let border = if enabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let tile = Paragraph::new(cell.display_char().to_string())
        .style(tile_style(cell))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    f.render_widget(tile, area);
}

fn render_status(f: &mut Frame, board: &Board, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let row_text = format!("Row: {}/{ROW_COUNT}", board.active_row() + 1);
    f.render_widget(
        Paragraph::new(row_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats = board.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.games_played,
        stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if board.modal_visible() {
        "n: New Word | r: Retry | q: Quit"
    } else {
        "Backspace: Delete | Enter: Check | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_modal(f: &mut Frame, board: &Board) {
    let Some(outcome) = board.outcome() else {
        return;
    };

    let (title, color) = match outcome {
        Outcome::Won => ("YOU WON!", Color::Green),
        Outcome::Lost => ("YOU LOST...", Color::Red),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];
    if outcome == Outcome::Lost
        && let Some(target) = board.target()
    {
        lines.push(Line::from(format!("The word was {target}")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[n] New Word", Style::default().fg(Color::Cyan)),
        Span::raw("   "),
        Span::styled("[r] Do it again", Style::default().fg(Color::Yellow)),
    ]));

    let area = centered_rect(36, 8, f.area());
    let modal = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(modal, area);
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
