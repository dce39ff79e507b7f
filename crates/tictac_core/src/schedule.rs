//! Session tokens and computer-move tickets.
//!
//! The engine never sleeps. When the computer takes the turn it issues a
//! [`CpuTicket`]; the presentation layer waits out the ticket's delay and
//! hands it back. A ticket is honored only while its session is current, so
//! a reset or a new round invalidates every ticket still in flight.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Identifies one round. Bumped on every mode selection, rematch, and reset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
    derive_more::Display,
)]
#[display("session-{}", _0)]
pub struct SessionToken(u64);

impl SessionToken {
    /// Token for the following round.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// A scheduled computer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CpuTicket {
    session: SessionToken,
    delay: Duration,
}

impl CpuTicket {
    pub(crate) fn new(session: SessionToken, delay: Duration) -> Self {
        Self { session, delay }
    }

    /// Round that issued this ticket.
    pub fn session(&self) -> SessionToken {
        self.session
    }

    /// How long to wait before firing.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
