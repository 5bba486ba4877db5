//! Widget painting for each view.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use crate::flow::GameMode;
use crate::game::{Mark, WinLine};

/// Paints the start screen and returns the two option rectangles.
pub(crate) fn draw_start(frame: &mut Frame, menu_index: usize) -> [Rect; 2] {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let options_area = center_rect(chunks[1], 34, 5);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(options_area);

    for (i, mode) in GameMode::iter().enumerate() {
        let style = if i == menu_index {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let option = Paragraph::new(mode.label())
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(option, columns[i]);
    }

    let help = Paragraph::new("←→: Navigate | Enter: Select | 1/2: Pick | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    [columns[0], columns[1]]
}

/// Paints the name-entry prompt for the given 1-based player slot.
pub(crate) fn draw_add_player(frame: &mut Frame, prompt_index: usize, name_input: &str) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let prompt = Paragraph::new(format!("Enter a name for player {}:", prompt_index))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(prompt, chunks[1]);

    let input = Paragraph::new(name_input)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Name (Enter to confirm)"),
        );
    frame.render_widget(input, chunks[2]);

    let help = Paragraph::new("Type name | Enter: Confirm | Esc: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);
}

/// Paints the scoreboard and board grid; returns the nine cell
/// rectangles for hit-testing.
pub(crate) fn draw_round(
    frame: &mut Frame,
    cells: &[Option<Mark>; 9],
    win_line: Option<WinLine>,
    cursor: usize,
    scoreboard: &[(String, u32)],
) -> [Rect; 9] {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(11),
            Constraint::Length(3),
        ])
        .split(area);

    draw_scoreboard(frame, chunks[0], scoreboard);

    let board_area = center_rect(chunks[1], 23, 11);
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

    let mut areas = [Rect::default(); 9];
    for (i, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        if i > 0 {
            draw_separator(frame, rows[i * 2 - 1]);
        }
        let row_cells = draw_row(frame, row_area, cells, win_line, cursor, i * 3);
        areas[i * 3..i * 3 + 3].copy_from_slice(&row_cells);
    }

    let help = Paragraph::new("Click a cell | 1-9 or arrows+Enter: Place | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    areas
}

/// Paints the play-again confirm control and returns its rectangle.
pub(crate) fn draw_play_again(frame: &mut Frame) -> Rect {
    let area = frame.area();
    let button_area = center_rect(area, 30, 5);

    let button = Paragraph::new("Another Round ?\n\nPress Enter or click here")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, button_area);

    button_area
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, scoreboard: &[(String, u32)]) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (i, (name, wins)) in scoreboard.iter().take(2).enumerate() {
        let entry = Paragraph::new(format!("{}: {}", name, wins))
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Score"));
        frame.render_widget(entry, columns[i]);
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    cells: &[Option<Mark>; 9],
    win_line: Option<WinLine>,
    cursor: usize,
    start: usize,
) -> [Rect; 3] {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for offset in 0..3 {
        let index = start + offset;
        if offset > 0 {
            draw_vertical_separator(frame, columns[offset * 2 - 1]);
        }
        draw_cell(
            frame,
            columns[offset * 2],
            cells[index],
            index,
            win_line,
            cursor,
        );
    }

    [columns[0], columns[2], columns[4]]
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    cell: Option<Mark>,
    index: usize,
    win_line: Option<WinLine>,
    cursor: usize,
) {
    let winning = win_line.is_some_and(|line| line.contains(&index));
    let (text, mut style) = match cell {
        None => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Some(Mark::X) => (
            "X".to_string(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if winning {
        style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
    }
    if index == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let paragraph = Paragraph::new(format!("\n{}", text))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
