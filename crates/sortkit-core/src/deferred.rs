#![forbid(unsafe_code)]

//! Zero-delay deferred work for a cooperative event loop.
//!
//! A [`DeferredQueue`] holds work scheduled during one turn of the host event
//! loop ("tick") and releases it only once the host has advanced to a later
//! tick. This models `setTimeout(f, 0)`: the work runs after the current
//! synchronous callback completes and before the next input is handled.
//!
//! # Invariants
//!
//! 1. Work scheduled during tick `n` is never released during tick `n`.
//! 2. Released work comes out in scheduling order.
//! 3. Cleared work is never released.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
struct Pending<W> {
    scheduled_at: u64,
    work: W,
}

/// FIFO of deferred work items, gated by tick.
#[derive(Debug, Clone)]
pub struct DeferredQueue<W> {
    pending: VecDeque<Pending<W>>,
    tick: u64,
}

impl<W> Default for DeferredQueue<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> DeferredQueue<W> {
    /// Create an empty queue at tick 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            tick: 0,
        }
    }

    /// Schedule `work` for the next tick.
    pub fn schedule(&mut self, work: W) {
        self.pending.push_back(Pending {
            scheduled_at: self.tick,
            work,
        });
    }

    /// Advance to the next tick and release everything scheduled before it.
    pub fn advance(&mut self) -> Vec<W> {
        self.tick = self.tick.saturating_add(1);
        self.take_ready()
    }

    /// Release work scheduled on an earlier tick, without advancing.
    pub fn take_ready(&mut self) -> Vec<W> {
        let tick = self.tick;
        let mut ready = Vec::new();
        while self
            .pending
            .front()
            .is_some_and(|pending| pending.scheduled_at < tick)
        {
            if let Some(pending) = self.pending.pop_front() {
                ready.push(pending.work);
            }
        }
        ready
    }

    /// Drop all pending work. Returns how many items were discarded.
    pub fn clear(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
