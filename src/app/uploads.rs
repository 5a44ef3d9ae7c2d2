//! Upload generation tracking.
//!
//! Parses may finish out of order. Each upload takes a ticket from a
//! monotonically increasing generation counter; a finished parse is applied
//! only while its ticket is still the newest one issued. Any other dataset
//! replacement also advances the counter, so a slow parse can never overwrite
//! data the user loaded after starting it (last write wins, stale results are
//! dropped). A ticket finishes once; a repeated finish is refused.

use std::collections::HashSet;

/// Identifies one upload attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UploadTicket {
    generation: u64,
}

impl UploadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct UploadTracker {
    latest: u64,
    /// Generations issued and not yet finished
    pending: HashSet<u64>,
}

impl UploadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an upload; supersedes every earlier ticket
    pub fn issue(&mut self) -> UploadTicket {
        self.latest += 1;
        self.pending.insert(self.latest);
        UploadTicket {
            generation: self.latest,
        }
    }

    /// Supersede outstanding tickets without starting an upload
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    /// Record that a ticket's parse finished. Returns whether its result may
    /// be applied: the ticket must be the newest and not finished before.
    pub fn finish(&mut self, ticket: UploadTicket) -> bool {
        self.pending.remove(&ticket.generation) && self.is_current(ticket)
    }

    pub fn is_current(&self, ticket: UploadTicket) -> bool {
        ticket.generation == self.latest
    }

    /// Number of parses started but not yet finished
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }
}
