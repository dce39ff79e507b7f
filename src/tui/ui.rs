//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use tictac_core::{BOARD_SIZE, Cell, Marker, Mode};

use super::app::{App, Screen};
use super::input::HitMap;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 18;
const RESTART_WIDTH: u16 = 13;

/// Renders the whole screen and returns the clickable regions.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(1),  // Score
            Constraint::Length(3),  // Status
            Constraint::Min(11),    // Board or mode menu
            Constraint::Length(3),  // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let score = Paragraph::new(app.score_line())
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center);
    frame.render_widget(score, chunks[1]);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let mut hits = HitMap::default();
    match app.screen() {
        Screen::ModeMenu => hits.mode_buttons = draw_mode_menu(frame, chunks[3]),
        Screen::Board => hits.cells = draw_board(frame, chunks[3], app),
    }
    hits.restart = Some(draw_controls(frame, chunks[4], app.screen()));
    hits
}

fn draw_mode_menu(frame: &mut Frame, area: Rect) -> Vec<(Mode, Rect)> {
    let modes: Vec<Mode> = Mode::iter().collect();
    let menu = center_rect(area, BUTTON_WIDTH * 2 + 4, 3);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(4),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(menu);

    modes
        .into_iter()
        .zip([cols[0], cols[2]])
        .enumerate()
        .map(|(i, (mode, rect))| {
            let label = format!("[{}] {}", i + 1, mode.label());
            let button = Paragraph::new(label)
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(button, rect);
            (mode, rect)
        })
        .collect()
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> Vec<(usize, Rect)> {
    let grid = center_rect(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(grid);

    let winning = app.winning_cells();
    let mut cells = Vec::with_capacity(BOARD_SIZE);
    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            let index = row * 3 + col;
            let highlighted = winning.is_some_and(|line| line.contains(&index));
            draw_cell(frame, *cell_area, index, app.board()[index], highlighted);
            cells.push((index, *cell_area));
        }
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, index: usize, cell: Cell, highlighted: bool) {
    let (symbol, base_style) = match cell {
        Cell::Empty => (
            (index + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Marker::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Marker::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.bg(Color::Green).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}

fn draw_controls(frame: &mut Frame, area: Rect, screen: Screen) -> Rect {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(RESTART_WIDTH), Constraint::Min(0)])
        .split(area);

    let restart = Paragraph::new("Restart")
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(restart, cols[0]);

    let help = match screen {
        Screen::ModeMenu => "Click a mode or press 1/2 | q quit",
        Screen::Board => "Click a cell or press 1-9 | r restart | n rematch | q quit",
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, cols[1]);

    cols[0]
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
    use tictac_core::{GameEvent, Status};

    fn render(app: &App) -> (HitMap, String) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut hits = HitMap::default();
        terminal
            .draw(|frame| hits = draw(frame, app))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let text: String = buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        (hits, text)
    }

    #[test]
    fn test_mode_menu_has_buttons() {
        let app = App::new();
        let (hits, text) = render(&app);
        assert_eq!(hits.mode_buttons.len(), 2);
        assert!(hits.cells.is_empty());
        assert!(hits.restart.is_some());
        assert!(text.contains("1 Player"));
        assert!(text.contains("2 Players"));
        assert!(text.contains("Choose a game mode"));
    }

    #[test]
    fn test_board_has_nine_clickable_cells() {
        let mut app = App::new();
        app.handle_event(GameEvent::StatusChanged(Status::Turn {
            name: "Player 1".to_string(),
        }));
        let (hits, text) = render(&app);
        assert_eq!(hits.cells.len(), BOARD_SIZE);
        assert!(hits.mode_buttons.is_empty());
        assert!(text.contains("Player 1's turn"));
        assert!(text.contains("Wins: 0 | Losses: 0"));

        // Every cell area resolves back to its own index.
        for (index, rect) in &hits.cells {
            assert_eq!(
                hits.hit(rect.x + 1, rect.y + 1),
                Some(crate::tui::input::UiAction::Play(*index))
            );
        }
    }
}
