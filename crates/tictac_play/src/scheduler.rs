//! The delayed computer reply.
//!
//! At most one reply is armed at a time. Cancelling drops the timer, and the
//! ticket it carried is refused by the engine after a reset anyway, so a
//! reply meant for an old game can never reach a new one.
//!
//! Arming only records a deadline. The tokio timer is created the first time
//! [`ReplyScheduler::fired`] is polled, so `arm` and `cancel` work outside a
//! runtime.

use std::pin::Pin;
use std::time::Duration;
use tictac_engine::ReplyTicket;
use tokio::time::{Instant, Sleep, sleep_until};
use tracing::{debug, instrument};

struct Armed {
    ticket: ReplyTicket,
    deadline: Instant,
    timer: Option<Pin<Box<Sleep>>>,
}

/// Single-slot timer for the computer's reply.
pub struct ReplyScheduler {
    delay: Duration,
    armed: Option<Armed>,
}

impl ReplyScheduler {
    /// Creates an idle scheduler that waits `delay` before each reply.
    pub fn new(delay: Duration) -> Self {
        Self { delay, armed: None }
    }

    /// Starts the timer for `ticket`.
    ///
    /// Re-arming with the ticket already armed keeps the running timer; any
    /// other ticket replaces it.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn arm(&mut self, ticket: ReplyTicket) {
        if self.armed.as_ref().is_some_and(|armed| armed.ticket == ticket) {
            return;
        }
        debug!("Computer reply scheduled");
        self.armed = Some(Armed {
            ticket,
            deadline: Instant::now() + self.delay,
            timer: None,
        });
    }

    /// Drops the pending reply, returning whether one was armed.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.armed.take().is_some();
        if cancelled {
            debug!("Computer reply cancelled");
        }
        cancelled
    }

    /// True while a reply is waiting to fire.
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// The ticket of the armed reply, if any.
    pub fn armed_ticket(&self) -> Option<ReplyTicket> {
        self.armed.as_ref().map(|armed| armed.ticket)
    }

    /// Waits for the armed reply to come due and disarms it.
    ///
    /// Never resolves while idle. Safe to drop mid-wait (as a `select!`
    /// branch): the timer stays armed and keeps its deadline.
    pub async fn fired(&mut self) -> ReplyTicket {
        let Some(armed) = self.armed.as_mut() else {
            return std::future::pending().await;
        };
        let deadline = armed.deadline;
        armed
            .timer
            .get_or_insert_with(|| Box::pin(sleep_until(deadline)))
            .as_mut()
            .await;
        let ticket = armed.ticket;
        self.armed = None;
        ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_engine::{Coordinate, GameEngine, GameMode, Mark};
    use tokio::time::timeout;

    fn pending_ticket(engine: &mut GameEngine) -> ReplyTicket {
        engine.apply_move(Coordinate::ALL[0], Mark::X);
        engine.pending_reply().expect("reply pending")
    }

    #[test]
    fn test_arm_and_cancel_without_runtime() {
        let mut engine = GameEngine::with_seed(GameMode::Single, Mark::X, 1);
        let ticket = pending_ticket(&mut engine);
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(300));

        scheduler.arm(ticket);
        scheduler.arm(ticket);
        assert_eq!(scheduler.armed_ticket(), Some(ticket));

        assert!(scheduler.cancel());
        assert!(!scheduler.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let mut engine = GameEngine::with_seed(GameMode::Single, Mark::X, 1);
        let ticket = pending_ticket(&mut engine);
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(300));

        let start = Instant::now();
        scheduler.arm(ticket);
        let fired = scheduler.fired().await;

        assert_eq!(fired, ticket);
        assert!(start.elapsed() >= Duration::from_millis(300));
        assert!(!scheduler.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_does_not_fire_early() {
        let mut engine = GameEngine::with_seed(GameMode::Single, Mark::X, 1);
        let ticket = pending_ticket(&mut engine);
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(300));
        scheduler.arm(ticket);

        let early = timeout(Duration::from_millis(299), scheduler.fired()).await;

        assert!(early.is_err());
        assert!(scheduler.is_armed());
        assert_eq!(scheduler.fired().await, ticket);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_keeps_it_from_firing() {
        let mut engine = GameEngine::with_seed(GameMode::Single, Mark::X, 1);
        let ticket = pending_ticket(&mut engine);
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(300));
        scheduler.arm(ticket);

        assert!(scheduler.cancel());
        assert!(!scheduler.cancel());

        let waited = timeout(Duration::from_secs(5), scheduler.fired()).await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearming_same_ticket_keeps_deadline() {
        let mut engine = GameEngine::with_seed(GameMode::Single, Mark::X, 1);
        let ticket = pending_ticket(&mut engine);
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(300));

        let start = Instant::now();
        scheduler.arm(ticket);
        tokio::time::advance(Duration::from_millis(200)).await;
        scheduler.arm(ticket);
        scheduler.fired().await;

        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
