//! Wiring between the engine, the view, and the computer timer.

use super::app::App;
use super::input::UiAction;
use super::scheduler::CpuScheduler;
use tictac_core::{CpuTicket, GameEngine, GameEvent};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Drives one engine from user actions and fired computer tickets.
///
/// The view is only ever updated from engine notifications, which are
/// queued on a channel and drained after every action.
#[derive(Debug)]
pub struct Orchestrator {
    engine: GameEngine,
    app: App,
    scheduler: CpuScheduler,
    events: mpsc::UnboundedReceiver<GameEvent>,
    fired: mpsc::UnboundedReceiver<CpuTicket>,
}

impl Orchestrator {
    /// Takes ownership of `engine` and subscribes the view to it.
    #[instrument(skip(engine))]
    pub fn new(mut engine: GameEngine) -> Self {
        let (event_tx, events) = mpsc::unbounded_channel();
        engine.subscribe(move |event: &GameEvent| {
            // Receiver lives as long as the orchestrator.
            let _ = event_tx.send(event.clone());
        });

        let (fired_tx, fired) = mpsc::unbounded_channel();
        info!("Orchestrator ready");
        Self {
            engine,
            app: App::new(),
            scheduler: CpuScheduler::new(fired_tx),
            events,
            fired,
        }
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: UiAction) {
        match action {
            UiAction::Play(index) => match self.engine.play_turn(index) {
                Ok(outcome) => debug!(?outcome, "Move played"),
                Err(e) => debug!(error = %e, "Move ignored"),
            },
            UiAction::SelectMode(mode) => {
                self.scheduler.cancel();
                self.engine.select_mode(mode);
            }
            UiAction::Rematch => {
                self.scheduler.cancel();
                if let Err(e) = self.engine.rematch() {
                    debug!(error = %e, "Rematch ignored");
                }
            }
            UiAction::Reset => {
                self.scheduler.cancel();
                self.engine.reset_game();
            }
            UiAction::Quit => self.app.quit(),
        }
        self.drain_events();
    }

    /// Plays any fired computer moves and refreshes the view.
    pub fn pump(&mut self) {
        while let Ok(ticket) = self.fired.try_recv() {
            self.fire(ticket);
        }
        self.drain_events();
    }

    /// Waits for the next fired computer move and plays it.
    pub async fn await_computer(&mut self) {
        if let Some(ticket) = self.fired.recv().await {
            self.fire(ticket);
            self.drain_events();
        }
    }

    fn fire(&mut self, ticket: CpuTicket) {
        match self.engine.play_computer_turn(ticket) {
            Ok(outcome) => debug!(?outcome, "Computer moved"),
            Err(e) => debug!(error = %e, "Computer move discarded"),
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            if let Some(ticket) = self.app.handle_event(event) {
                self.scheduler.schedule(ticket);
            }
        }
    }

    /// View state.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// The engine being driven.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// True while a computer move is waiting on its timer.
    pub fn computer_pending(&self) -> bool {
        self.scheduler.is_pending()
    }
}
