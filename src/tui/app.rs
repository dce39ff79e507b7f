//! Application view state.
//!
//! `App` holds only what the screen shows. It is fed exclusively by engine
//! notifications, so it never disagrees with the engine about what to draw.

use tictac_core::rules::winning_line;
use tictac_core::{BOARD_SIZE, Board, Cell, CpuTicket, GameEvent, Score, Status};
use tracing::debug;

/// Which panel occupies the middle of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The "1 Player" / "2 Players" buttons.
    ModeMenu,
    /// The 3x3 grid.
    Board,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    board: [Cell; BOARD_SIZE],
    status: Status,
    score: Score,
    thinking: bool,
    should_quit: bool,
}

impl App {
    /// Creates the view for a freshly started engine.
    pub fn new() -> Self {
        Self {
            board: [Cell::Empty; BOARD_SIZE],
            status: Status::ChooseMode,
            score: Score::default(),
            thinking: false,
            should_quit: false,
        }
    }

    /// Applies an engine notification.
    ///
    /// Returns the ticket to schedule when the computer starts thinking.
    pub fn handle_event(&mut self, event: GameEvent) -> Option<CpuTicket> {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::BoardChanged(cells) => self.board = cells,
            GameEvent::StatusChanged(status) => {
                self.thinking = false;
                self.status = status;
            }
            GameEvent::ScoreChanged(score) => self.score = score,
            GameEvent::ComputerThinking(ticket) => {
                self.thinking = true;
                return Some(ticket);
            }
        }
        None
    }

    /// Cells as last published.
    pub fn board(&self) -> &[Cell; BOARD_SIZE] {
        &self.board
    }

    /// Panel to show.
    pub fn screen(&self) -> Screen {
        if self.status == Status::ChooseMode {
            Screen::ModeMenu
        } else {
            Screen::Board
        }
    }

    /// Text for the status line.
    pub fn status_line(&self) -> String {
        match &self.status {
            Status::Turn { name } if self.thinking => format!("{} is thinking...", name),
            status => status.to_string(),
        }
    }

    /// Text for the score line.
    pub fn score_line(&self) -> String {
        self.score.to_string()
    }

    /// Cells to highlight after a win.
    pub fn winning_cells(&self) -> Option<[usize; 3]> {
        match self.status {
            Status::Won { .. } => winning_line(&Board::from_cells(self.board)),
            _ => None,
        }
    }

    /// True while a computer move is pending.
    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    /// Asks the event loop to stop.
    pub fn quit(&mut self) {
        debug!("Quit requested");
        self.should_quit = true;
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
