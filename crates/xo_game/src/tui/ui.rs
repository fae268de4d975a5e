//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use xo_tictactoe::{Opponent, Player, Position, Snapshot, Square};

use super::app::App;

const HELP: &str = "Arrows/1-9: move  Enter: play  U: undo  C: computer  N: new  R: reset  Q: quit";

/// Draws the whole screen.
pub fn draw<O: Opponent>(frame: &mut Frame, app: &App<O>) {
    let snapshot = app.game().snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Score
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let score = Paragraph::new(snapshot.score_text())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(score, chunks[1]);

    draw_board(frame, chunks[2], &snapshot, app.cursor());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[3]);

    let undo_style = if *snapshot.can_undo() {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let help = Paragraph::new(HELP)
        .style(undo_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);
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

    for row in 0..3 {
        draw_row(frame, rows[row * 2], snapshot, cursor, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position, row: usize) {
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

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], snapshot, cursor, row * 3 + col);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

/// Style for one cell: mark colour, then cyan for a winning line, red on a
/// tie, inverted under the cursor while input is accepted.
fn cell_style(snapshot: &Snapshot, cursor: Position, index: usize) -> Style {
    let base = match snapshot.board()[index] {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    };

    if snapshot.highlight().contains(index) {
        let bg = if snapshot.outcome().winner().is_some() {
            Color::Cyan
        } else {
            Color::Red
        };
        base.bg(bg).fg(Color::Black)
    } else if snapshot.accepts_input() && cursor.to_index() == index {
        base.bg(Color::White).fg(Color::Black)
    } else {
        base
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position, index: usize) {
    let symbol = match snapshot.board()[index] {
        Square::Empty => format!(" {} ", index + 1),
        occupied => format!(" {} ", occupied.symbol()),
    };
    let style = cell_style(snapshot, cursor, index);

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use xo_tictactoe::{GameState, RandomOpponent};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_score_and_status() {
        let game = GameState::from_moves(RandomOpponent::seeded(1), &[0, 3, 1, 4]).unwrap();
        let mut app = App::new(game);
        app.handle_key(crossterm::event::KeyCode::Char('3'));

        let screen = rendered(&app);
        assert!(screen.contains("Player: 1  Computer: 0"));
        assert!(screen.contains("You Win!"));
    }

    #[test]
    fn test_help_lists_every_command_key() {
        let app = App::new(GameState::new(RandomOpponent::seeded(1)));
        let screen = rendered(&app);
        for key in ["U: undo", "C: computer", "N: new", "R: reset", "Q: quit"] {
            assert!(screen.contains(key), "help is missing {:?}", key);
        }
    }

    #[test]
    fn test_winning_line_is_cyan() {
        let game = GameState::from_moves(RandomOpponent::seeded(1), &[0, 3, 1, 4]).unwrap();
        let mut app = App::new(game);
        app.handle_key(crossterm::event::KeyCode::Char('3'));
        let snapshot = app.game().snapshot();

        assert_eq!(cell_style(&snapshot, app.cursor(), 0).bg, Some(Color::Cyan));
        assert_eq!(cell_style(&snapshot, app.cursor(), 3).bg, None);
    }
}
