//! Search-input debouncing
//!
//! Each keystroke takes a ticket; the delayed re-filter carries its ticket
//! back and only runs if no newer ticket was issued in the meantime. A
//! superseded invocation is dropped, never executed.

use std::time::Duration;

/// Default quiet window before a search term is applied
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Identifies one scheduled invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    latest: u64,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, latest: 0 }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules a new invocation, superseding every earlier ticket
    pub fn schedule(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Returns true if `ticket` is still the most recent one
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Invalidates every outstanding ticket
    pub fn cancel(&mut self) {
        self.latest += 1;
    }

    /// Sleeps for the quiet window, then hands the ticket back
    pub fn wait(&self, ticket: Ticket) -> impl Future<Output = Ticket> + Send + 'static {
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            ticket
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_fires() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.schedule();
        let second = debouncer.schedule();
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }

    #[test]
    fn test_cancel_drops_pending_ticket() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.schedule();
        debouncer.cancel();
        assert!(!debouncer.is_current(ticket));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_sleeps_for_window() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let ticket = debouncer.schedule();
        let started = tokio::time::Instant::now();
        let returned = debouncer.wait(ticket).await;
        assert_eq!(returned, ticket);
        assert!(started.elapsed() >= Duration::from_millis(300));
    }
}
