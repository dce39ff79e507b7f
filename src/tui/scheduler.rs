//! Delayed delivery of computer moves.
//!
//! At most one computer move is pending at a time. Scheduling a new ticket or
//! cancelling aborts the pending timer, so a reset never lets an old move land.

use tictac_core::CpuTicket;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, instrument};

/// Fires computer tickets after their delay.
#[derive(Debug)]
pub struct CpuScheduler {
    tx: mpsc::UnboundedSender<CpuTicket>,
    pending: Option<JoinHandle<()>>,
}

impl CpuScheduler {
    /// Creates a scheduler that delivers fired tickets on `tx`.
    pub fn new(tx: mpsc::UnboundedSender<CpuTicket>) -> Self {
        Self { tx, pending: None }
    }

    /// Starts the timer for `ticket`, replacing any pending one.
    #[instrument(skip(self, ticket), fields(session = %ticket.session()))]
    pub fn schedule(&mut self, ticket: CpuTicket) {
        self.cancel();
        let tx = self.tx.clone();
        debug!(delay_ms = ticket.delay().as_millis() as u64, "Scheduling computer move");
        self.pending = Some(tokio::spawn(async move {
            sleep(ticket.delay()).await;
            // Receiver gone means the UI is shutting down.
            let _ = tx.send(ticket);
        }));
    }

    /// Drops the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Cancelling pending computer move");
            handle.abort();
        }
    }

    /// True while a timer is running.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for CpuScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
