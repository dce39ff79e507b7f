//! Turn orchestration, scoring, and mode handling.
//!
//! [`GameEngine`] owns the whole game state. It is an ordinary value: build
//! one per table, pass it by `&mut` to whatever drives it. Every action
//! either applies completely or returns a [`GameError`] with the state left
//! exactly as it was.

use crate::error::GameError;
use crate::events::{GameEvent, GameObserver, Status};
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::phases::{Phase, Score};
use crate::player::{FirstMove, Mode, Player, Seat};
use crate::rules;
use crate::schedule::{CpuTicket, SessionToken};
use crate::settings::EngineSettings;
use crate::types::Board;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// What a successful move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The round goes on.
    Continue {
        /// Seat now holding the turn.
        next: Seat,
        /// Present when the computer now holds the turn.
        cpu: Option<CpuTicket>,
    },
    /// The mover completed a line.
    Won {
        /// Seat that won.
        winner: Seat,
    },
    /// The board filled with no line.
    Tied,
}

impl TurnOutcome {
    /// Ticket to schedule, if the computer moves next.
    pub fn cpu_ticket(&self) -> Option<CpuTicket> {
        match self {
            TurnOutcome::Continue { cpu, .. } => *cpu,
            _ => None,
        }
    }
}

/// Tic-tac-toe game engine.
pub struct GameEngine<R = StdRng> {
    settings: EngineSettings,
    board: Board,
    players: [Player; 2],
    current: Seat,
    mode: Option<Mode>,
    score: Score,
    phase: Phase,
    session: SessionToken,
    rng: R,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameEngine<StdRng> {
    /// Creates an engine seeded from the operating system.
    #[instrument(skip(settings))]
    pub fn new(settings: EngineSettings) -> Self {
        Self::with_rng(settings, StdRng::from_os_rng())
    }

    /// Creates an engine whose computer moves replay for a given seed.
    #[instrument(skip(settings))]
    pub fn seeded(settings: EngineSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Creates an engine drawing randomness from `rng`.
    ///
    /// The engine starts awaiting a mode selection.
    #[instrument(skip_all)]
    pub fn with_rng(settings: EngineSettings, rng: R) -> Self {
        let players = default_players(&settings);
        Self {
            settings,
            board: Board::new(),
            players,
            current: Seat::First,
            mode: None,
            score: Score::default(),
            phase: Phase::AwaitingModeSelection,
            session: SessionToken::default(),
            rng,
            observers: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Observers
    // ─────────────────────────────────────────────────────────────

    /// Registers an observer for every later event.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }

    fn publish_board(&mut self) {
        self.emit(GameEvent::BoardChanged(*self.board.cells()));
    }

    fn publish_status(&mut self) {
        let status = self.status();
        self.emit(GameEvent::StatusChanged(status));
    }

    fn publish_score(&mut self) {
        self.emit(GameEvent::ScoreChanged(self.score));
    }

    // ─────────────────────────────────────────────────────────────
    //  Actions
    // ─────────────────────────────────────────────────────────────

    /// Starts a fresh round in `mode`.
    ///
    /// Any round in progress is abandoned and its tickets go stale. Returns
    /// a ticket when the computer opens.
    #[instrument(skip(self), fields(session = %self.session))]
    pub fn select_mode(&mut self, mode: Mode) -> Option<CpuTicket> {
        self.session = self.session.next();
        self.board.reset();
        self.mode = Some(mode);
        self.phase = Phase::InProgress;

        let second = match mode {
            Mode::SinglePlayer => Player::computer(&self.settings.cpu_name),
            Mode::TwoPlayer => Player::human(Seat::Second, &self.settings.second_player_name),
        };
        self.players = [
            Player::human(Seat::First, &self.settings.first_player_name),
            second,
        ];

        self.current = match mode {
            Mode::TwoPlayer => Seat::First,
            Mode::SinglePlayer => match self.settings.first_move {
                FirstMove::Random => {
                    if self.rng.random_bool(0.5) {
                        Seat::First
                    } else {
                        Seat::Second
                    }
                }
                FirstMove::Human => Seat::First,
                FirstMove::Computer => Seat::Second,
            },
        };

        info!(
            ?mode,
            session = %self.session,
            starter = %self.current_player().name(),
            "Round started"
        );

        self.publish_board();
        self.publish_status();
        self.publish_score();
        self.hand_turn_to_computer()
    }

    /// Starts a new round in the mode already selected.
    #[instrument(skip(self))]
    pub fn rematch(&mut self) -> Result<Option<CpuTicket>, GameError> {
        let mode = self.mode.ok_or(GameError::AwaitingModeSelection)?;
        Ok(self.select_mode(mode))
    }

    /// Plays the human holding the turn at `index`.
    ///
    /// Ignored (with an error) unless a round is in progress, the index is
    /// on the board, the cell is empty, and a human holds the turn.
    #[instrument(skip(self), fields(session = %self.session))]
    pub fn play_turn(&mut self, index: usize) -> Result<TurnOutcome, GameError> {
        self.ensure_in_progress()?;
        if self.current_player().is_computer() {
            return Err(GameError::ComputerToMove);
        }
        match self.board.cell(index) {
            None => Err(GameError::OutOfRange { index }),
            Some(cell) if cell.marker().is_some() => Err(GameError::Occupied { index }),
            Some(_) => self.apply_move(index),
        }
    }

    /// Fires a scheduled computer move.
    ///
    /// The cell is drawn uniformly from the empty cells at fire time. Tickets
    /// from earlier rounds are rejected.
    #[instrument(skip(self, ticket), fields(session = %self.session, ticket = %ticket.session()))]
    pub fn play_computer_turn(&mut self, ticket: CpuTicket) -> Result<TurnOutcome, GameError> {
        if ticket.session() != self.session {
            debug!("Discarding computer move from an earlier round");
            return Err(GameError::StaleTicket);
        }
        self.ensure_in_progress()?;
        if !self.current_player().is_computer() {
            return Err(GameError::NotComputerTurn);
        }

        let index = *self
            .board
            .empty_indices()
            .choose(&mut self.rng)
            .ok_or(GameError::GameOver)?;
        debug!(index, "Computer chose cell");
        self.apply_move(index)
    }

    /// Clears the table for a new game.
    ///
    /// Seats return to their two-player defaults, the mode must be picked
    /// again, and outstanding tickets go stale. The tally is kept.
    #[instrument(skip(self), fields(session = %self.session))]
    pub fn reset_game(&mut self) {
        self.session = self.session.next();
        self.players = default_players(&self.settings);
        self.current = Seat::First;
        self.board.reset();
        self.mode = None;
        self.phase = Phase::AwaitingModeSelection;

        info!(session = %self.session, score = %self.score, "Game reset");

        self.publish_board();
        self.publish_status();
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::AwaitingModeSelection => Err(GameError::AwaitingModeSelection),
            Phase::Won { .. } | Phase::Tied => Err(GameError::GameOver),
            Phase::InProgress => Ok(()),
        }
    }

    fn apply_move(&mut self, index: usize) -> Result<TurnOutcome, GameError> {
        let mover = self.current;
        self.board.set_cell(index, mover.marker())?;
        debug!(index, player = %self.current_player().name(), board = %self.board.display(), "Move applied");

        let invariants = BoardInvariants::check_all(&self.board);
        debug_assert!(invariants.is_ok(), "{:?}", invariants);

        self.publish_board();

        if rules::check_winner(&self.board).is_some() {
            self.phase = Phase::Won { winner: mover };
            self.score.record(mover);
            info!(winner = %self.current_player().name(), score = %self.score, "Round won");
            self.publish_status();
            self.publish_score();
            return Ok(TurnOutcome::Won { winner: mover });
        }

        if rules::is_full(&self.board) {
            self.phase = Phase::Tied;
            info!(score = %self.score, "Round tied");
            self.publish_status();
            return Ok(TurnOutcome::Tied);
        }

        self.current = mover.other();
        self.publish_status();
        let cpu = self.hand_turn_to_computer();
        Ok(TurnOutcome::Continue {
            next: self.current,
            cpu,
        })
    }

    fn hand_turn_to_computer(&mut self) -> Option<CpuTicket> {
        if !self.current_player().is_computer() {
            return None;
        }
        let ticket = CpuTicket::new(self.session, self.settings.cpu_delay);
        debug!(delay_ms = ticket.delay().as_millis() as u64, "Computer is thinking");
        self.emit(GameEvent::ComputerThinking(ticket));
        Some(ticket)
    }
}

// ─────────────────────────────────────────────────────────────
//  Queries
// ─────────────────────────────────────────────────────────────

impl<R> GameEngine<R> {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True when a line is complete or the board is full.
    pub fn is_game_over(&self) -> bool {
        rules::is_game_over(&self.board)
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Mode of the current round, if one was selected.
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Session tally.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Token of the current round.
    pub fn session(&self) -> SessionToken {
        self.session
    }

    /// Player holding the turn.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.slot()]
    }

    /// Status line for the current state.
    pub fn status(&self) -> Status {
        match self.phase {
            Phase::AwaitingModeSelection => Status::ChooseMode,
            Phase::InProgress => Status::Turn {
                name: self.current_player().name().to_string(),
            },
            Phase::Won { winner } => Status::Won {
                name: self.player(winner).name().to_string(),
                seat: winner,
            },
            Phase::Tied => Status::Tied,
        }
    }
}

impl<R> std::fmt::Debug for GameEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("players", &self.players)
            .field("current", &self.current)
            .field("mode", &self.mode)
            .field("score", &self.score)
            .field("phase", &self.phase)
            .field("session", &self.session)
            .field("observers", &self.observers.len())
            .finish()
    }
}

fn default_players(settings: &EngineSettings) -> [Player; 2] {
    [
        Player::human(Seat::First, &settings.first_player_name),
        Player::human(Seat::Second, &settings.second_player_name),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn two_player() -> GameEngine {
        let mut engine = GameEngine::seeded(EngineSettings::default(), 7);
        assert_eq!(engine.select_mode(Mode::TwoPlayer), None);
        engine
    }

    fn cpu_engine(first_move: FirstMove) -> GameEngine {
        let settings = EngineSettings::default()
            .with_first_move(first_move)
            .with_cpu_delay(Duration::ZERO);
        GameEngine::seeded(settings, 11)
    }

    #[test]
    fn test_starts_awaiting_mode() {
        let mut engine = GameEngine::seeded(EngineSettings::default(), 1);
        assert_eq!(engine.phase(), Phase::AwaitingModeSelection);
        assert_eq!(engine.status(), Status::ChooseMode);
        assert_eq!(engine.play_turn(0), Err(GameError::AwaitingModeSelection));
        assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn test_two_player_alternates() {
        let mut engine = two_player();
        assert_eq!(engine.current_player().seat(), Seat::First);

        let outcome = engine.play_turn(4).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Continue {
                next: Seat::Second,
                cpu: None
            }
        );
        assert_eq!(engine.current_player().name(), "Player 2");
    }

    #[test]
    fn test_computer_turn_rejects_human_input() {
        let mut engine = cpu_engine(FirstMove::Computer);
        let ticket = engine.select_mode(Mode::SinglePlayer).unwrap();
        assert_eq!(engine.play_turn(0), Err(GameError::ComputerToMove));

        let outcome = engine.play_computer_turn(ticket).unwrap();
        assert_eq!(outcome.cpu_ticket(), None);
        assert_eq!(engine.board().count(crate::Marker::O), 1);
        assert_eq!(engine.current_player().seat(), Seat::First);
    }

    #[test]
    fn test_computer_ticket_cannot_move_for_human() {
        let mut engine = cpu_engine(FirstMove::Computer);
        let ticket = engine.select_mode(Mode::SinglePlayer).unwrap();
        engine.play_computer_turn(ticket).unwrap();
        assert_eq!(
            engine.play_computer_turn(ticket),
            Err(GameError::NotComputerTurn)
        );
    }

    #[test]
    fn test_rematch_requires_mode() {
        let mut engine = GameEngine::seeded(EngineSettings::default(), 3);
        assert_eq!(engine.rematch(), Err(GameError::AwaitingModeSelection));

        engine.select_mode(Mode::TwoPlayer);
        engine.play_turn(0).unwrap();
        let before = engine.session();
        assert_eq!(engine.rematch(), Ok(None));
        assert!(engine.session() > before);
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.mode(), Some(Mode::TwoPlayer));
    }

    #[test]
    fn test_debug_skips_rng() {
        let engine = two_player();
        let text = format!("{:?}", engine);
        assert!(text.contains("GameEngine"));
        assert!(text.contains("InProgress"));
    }
}
