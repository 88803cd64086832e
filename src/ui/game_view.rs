use crate::game::{Board, GameState, Player, PITS_PER_SIDE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_pit: Option<usize>,
    message: &Option<String>,
    game_mode: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, game_mode, chunks[0]);
    render_board(frame, game_state, selected_pit, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn side_color(side: Player) -> Color {
    match side {
        Player::South => Color::Green,
        Player::North => Color::Red,
    }
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    game_mode: &str,
    area: ratatui::layout::Rect,
) {
    let current = game_state.current_player();

    let status = if game_state.is_terminal() {
        format!("Game Over  |  {}", game_mode)
    } else {
        format!("To sow: {}  |  {}", current.name(), game_mode)
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(side_color(current))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Oware"));

    frame.render_widget(header, area);
}

fn pit_span(board: &Board, pos: usize, side: Player) -> Span<'static> {
    Span::styled(
        format!(" {:>2} ", board.pit(pos)),
        Style::default().fg(side_color(side)),
    )
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    selected_pit: Option<usize>,
    area: ratatui::layout::Rect,
) {
    let board = game_state.board();
    let side_to_move = game_state.current_player();
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        format!("North: {} seeds captured", board.score(Player::North)),
        Style::default().fg(side_color(Player::North)),
    )));
    lines.push(Line::from(""));

    // Selector for a human North sits above its row, mirrored like the row.
    if let Some(pit) = selected_pit.filter(|_| side_to_move == Player::North) {
        let (numbers, cursor) = selector_lines(pit, true);
        lines.push(cursor);
        lines.push(numbers);
    }

    // North's row runs right to left so seeds flow counterclockwise on
    // screen, matching the sowing order.
    lines.push(Line::from("  ╔════════════════════════╗"));
    let mut north_row = vec![Span::raw("  ║")];
    for pos in (PITS_PER_SIDE..2 * PITS_PER_SIDE).rev() {
        north_row.push(pit_span(board, pos, Player::North));
    }
    north_row.push(Span::raw("║"));
    lines.push(Line::from(north_row));

    lines.push(Line::from("  ╟────────────────────────╢"));

    let mut south_row = vec![Span::raw("  ║")];
    for pos in 0..PITS_PER_SIDE {
        south_row.push(pit_span(board, pos, Player::South));
    }
    south_row.push(Span::raw("║"));
    lines.push(Line::from(south_row));
    lines.push(Line::from("  ╚════════════════════════╝"));

    if let Some(pit) = selected_pit.filter(|_| side_to_move == Player::South) {
        let (numbers, cursor) = selector_lines(pit, false);
        lines.push(numbers);
        lines.push(cursor);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("South: {} seeds captured", board.score(Player::South)),
        Style::default().fg(side_color(Player::South)),
    )));

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

/// Pit-number labels and the selection cursor, one 4-wide cell per pit.
/// `mirrored` lays the labels out right to left for the North row.
fn selector_lines(selected: usize, mirrored: bool) -> (Line<'static>, Line<'static>) {
    let mut numbers = vec![Span::raw("   ")];
    let mut cursor = vec![Span::raw("   ")];
    let order: Vec<usize> = if mirrored {
        (0..PITS_PER_SIDE).rev().collect()
    } else {
        (0..PITS_PER_SIDE).collect()
    };
    let marker = if mirrored { " ▼  " } else { " ▲  " };
    for pit in order {
        let label = format!(" {}  ", pit + 1);
        if pit == selected {
            numbers.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
            cursor.push(Span::styled(marker, Style::default().fg(Color::Cyan)));
        } else {
            numbers.push(Span::raw(label));
            cursor.push(Span::raw("    "));
        }
    }
    (Line::from(numbers), Line::from(cursor))
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from("←/→: Select pit  |  Enter: Sow  |  R: New game  |  Q: Quit");
    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(controls, area);
}
