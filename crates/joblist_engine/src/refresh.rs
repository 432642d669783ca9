use std::time::Duration;

use engine_logging::engine_debug;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

const TICK_BUFFER: usize = 16;

/// Payload-free refresh ticks shared by every view on the dashboard.
#[derive(Debug, Clone)]
pub struct RefreshSignal {
    tx: broadcast::Sender<()>,
}

impl Default for RefreshSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshSignal {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(TICK_BUFFER);
        Self { tx }
    }

    /// Fires one tick. Returns the number of subscribers that will see it.
    pub fn tick(&self) -> usize {
        self.tx.send(()).unwrap_or(0)
    }

    pub fn subscribe(&self) -> RefreshSubscription {
        RefreshSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Ticks every `period`, starting immediately, until the returned token
    /// is cancelled.
    pub fn spawn_interval(&self, period: Duration) -> CancellationToken {
        let stop = CancellationToken::new();
        let stopped = stop.clone();
        let signal = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = stopped.cancelled() => break,
                    _ = interval.tick() => {
                        signal.tick();
                    }
                }
            }
            engine_debug!("Refresh interval stopped");
        });
        stop
    }
}

pub struct RefreshSubscription {
    rx: broadcast::Receiver<()>,
}

impl RefreshSubscription {
    /// Waits for the next tick. Returns `false` once every signal handle is gone.
    pub async fn next(&mut self) -> bool {
        match self.rx.recv().await {
            Ok(()) => true,
            Err(RecvError::Lagged(missed)) => {
                engine_debug!("Refresh subscriber lagged by {} ticks", missed);
                true
            }
            Err(RecvError::Closed) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscriber_sees_manual_ticks() {
        let signal = RefreshSignal::new();
        let mut sub = signal.subscribe();

        assert_eq!(signal.tick(), 1);
        assert!(sub.next().await);
    }

    #[tokio::test]
    async fn tick_without_subscribers_is_dropped() {
        let signal = RefreshSignal::new();
        assert_eq!(signal.tick(), 0);
    }

    #[tokio::test]
    async fn lagging_subscriber_collapses_missed_ticks() {
        let signal = RefreshSignal::new();
        let mut sub = signal.subscribe();
        for _ in 0..TICK_BUFFER + 4 {
            signal.tick();
        }

        assert!(sub.next().await);
    }

    #[tokio::test]
    async fn subscription_ends_when_signal_dropped() {
        let signal = RefreshSignal::new();
        let mut sub = signal.subscribe();
        drop(signal);

        assert!(!sub.next().await);
    }

    #[tokio::test(start_paused = true)]
    async fn interval_ticks_until_cancelled() {
        let signal = RefreshSignal::new();
        let mut sub = signal.subscribe();
        let stop = signal.spawn_interval(Duration::from_secs(3));

        assert!(sub.next().await);
        assert!(sub.next().await);
        stop.cancel();
    }
}
