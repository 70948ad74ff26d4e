//! Ticker actor: periodic `Tick` messages for time-bounded UI state.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::clog_debug;
use crate::tea::Message;

use super::ActorHandle;

pub struct TickerActor {
    msg_tx: mpsc::UnboundedSender<Message>,
    interval: Duration,
}

impl TickerActor {
    pub fn new(msg_tx: mpsc::UnboundedSender<Message>, interval: Duration) -> Self {
        Self { msg_tx, interval }
    }

    pub fn spawn(self) -> ActorHandle {
        let cancel = CancellationToken::new();
        let cancel_clone = cancel.clone();

        clog_debug!("TickerActor::spawn interval={:?}", self.interval);

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            // A stalled logic thread should not get a burst of catch-up ticks
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = cancel_clone.cancelled() => {
                        clog_debug!("TickerActor cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        if self.msg_tx.send(Message::Tick(Instant::now())).is_err() {
                            clog_debug!("TickerActor: message channel closed");
                            break;
                        }
                    }
                }
            }
        });

        ActorHandle::new(cancel)
    }
}
