use std::cell::Cell;

/// Identity of one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Hands out monotonically increasing tickets so a page can tell whether a
/// response belongs to the latest request it issued.
///
/// Only the most recently issued ticket is current. Issuing a new ticket or
/// calling [`RequestTracker::invalidate`] makes every earlier ticket stale.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: Cell<u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the ticket for a new request.
    pub fn issue(&self) -> RequestTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestTicket(next)
    }

    /// Marks all outstanding tickets stale without issuing a new one.
    pub fn invalidate(&self) {
        self.latest.set(self.latest.get() + 1);
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest.get()
    }
}
