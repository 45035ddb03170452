use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::Game;

const BLOCK_COLOR: Color = Color::Red;

pub fn ui(f: &mut Frame, game: &Game) {
    let size = f.size();

    // Two terminal columns per cell plus the borders
    let board_width = (game.board.width() * 2 + 2) as u16;
    let board_height = (game.board.height() + 2) as u16;

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_height),
            Constraint::Min(0),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_width),
            Constraint::Min(0),
        ])
        .split(vertical_chunks[1]);

    render_board(f, game, horizontal_chunks[1]);
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let width = game.board.width();
    let height = game.board.height();

    let mut filled = vec![vec![false; width]; height];
    for (x, y) in game.drawable_cells() {
        filled[y][x] = true;
    }

    let board_lines: Vec<Line> = filled
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&cell| {
                    if cell {
                        Span::styled("██", Style::default().fg(BLOCK_COLOR))
                    } else {
                        Span::raw("  ")
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("stackfall"));

    f.render_widget(board_widget, area);
}
