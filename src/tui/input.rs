//! Pointer and keyboard input mapping.
//!
//! Clicks are resolved against the [`HitMap`] produced by the last draw, so
//! the hit areas always match what is on screen.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use tictac_core::{BOARD_SIZE, Mode};

use super::app::Screen;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Place a marker at a cell (0-8).
    Play(usize),
    /// Start a round in a mode.
    SelectMode(Mode),
    /// Back to the mode menu.
    Reset,
    /// New round, same mode.
    Rematch,
    /// Leave the game.
    Quit,
}

/// Clickable regions from the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Board cells, by index. Empty while the mode menu is shown.
    pub cells: Vec<(usize, Rect)>,
    /// Mode buttons. Empty while the board is shown.
    pub mode_buttons: Vec<(Mode, Rect)>,
    /// The restart button.
    pub restart: Option<Rect>,
}

impl HitMap {
    /// Resolves a click at terminal coordinates.
    pub fn hit(&self, column: u16, row: u16) -> Option<UiAction> {
        if let Some((index, _)) = self
            .cells
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
        {
            return Some(UiAction::Play(*index));
        }
        if let Some((mode, _)) = self
            .mode_buttons
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
        {
            return Some(UiAction::SelectMode(*mode));
        }
        self.restart
            .filter(|rect| contains(*rect, column, row))
            .map(|_| UiAction::Reset)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Translates a terminal event into an action.
pub fn map_event(event: &Event, hits: &HitMap, screen: Screen) -> Option<UiAction> {
    match event {
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            hits.hit(mouse.column, mouse.row)
        }
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key.code, screen),
        _ => None,
    }
}

fn map_key(code: KeyCode, screen: Screen) -> Option<UiAction> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiAction::Quit),
        KeyCode::Char('r') => Some(UiAction::Reset),
        KeyCode::Char('n') => Some(UiAction::Rematch),
        KeyCode::Char(c) => {
            let digit = c.to_digit(10)? as usize;
            match screen {
                Screen::ModeMenu => match digit {
                    1 => Some(UiAction::SelectMode(Mode::SinglePlayer)),
                    2 => Some(UiAction::SelectMode(Mode::TwoPlayer)),
                    _ => None,
                },
                Screen::Board if (1..=BOARD_SIZE).contains(&digit) => {
                    Some(UiAction::Play(digit - 1))
                }
                Screen::Board => None,
            }
        }
        _ => None,
    }
}
