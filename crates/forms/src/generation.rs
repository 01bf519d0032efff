//! Stale-response discipline for overlapping requests.
//!
//! Live-typing fires a new lookup on every change. Each request takes a
//! [`Ticket`] from a shared [`GenerationTracker`]; starting a request cancels
//! the previous ticket's token, and a result is only used while its ticket
//! is still the latest. Lookups that ignore cancellation are therefore
//! harmless: their late answers fail the generation check.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

/// One request's generation number and cancellation token.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    cancel: CancellationToken,
}

impl Ticket {
    /// Monotonic request number, starting at 1.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Token cancelled once a newer request starts.
    pub fn token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

/// Hands out tickets and remembers which one is current.
#[derive(Debug, Default)]
pub struct GenerationTracker {
    latest: AtomicU64,
    in_flight: Mutex<Option<CancellationToken>>,
}

impl GenerationTracker {
    /// Creates a tracker with no request in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request, superseding and cancelling the previous one.
    pub fn begin(&self) -> Ticket {
        let mut in_flight = self.in_flight.lock();
        if let Some(previous) = in_flight.take() {
            previous.cancel();
        }
        let cancel = CancellationToken::new();
        *in_flight = Some(cancel.clone());
        let generation = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        Ticket { generation, cancel }
    }

    /// Whether `ticket` belongs to the most recent request.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.generation
    }

    /// Generation of the most recent request, 0 before the first.
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }
}
