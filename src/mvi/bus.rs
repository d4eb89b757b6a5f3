//! Action intake with latest-wins buffering.

use tokio::sync::watch;

use super::action::Action;

/// Sequence-stamped slot value. The stamp distinguishes repeated
/// submissions of equal actions and lets each subscriber track what it
/// has already consumed.
#[derive(Clone)]
struct Stamped<A> {
    seq: u64,
    action: A,
}

/// Accepts actions from input handlers and republishes them to
/// subscribers, retaining only the most recent unconsumed action.
///
/// [`ActionBus::submit`] never blocks and never fails. Under a burst, a
/// subscriber that is not ready sees only the newest action (buffer depth
/// 1, latest wins). Each subscriber starts with its own replay of the
/// latest action submitted before it subscribed.
pub struct ActionBus<A> {
    tx: watch::Sender<Option<Stamped<A>>>,
}

impl<A: Action> ActionBus<A> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Fire-and-forget intake.
    pub fn submit(&self, action: A) {
        self.tx.send_modify(|slot| {
            let seq = slot.as_ref().map_or(1, |stamped| stamped.seq + 1);
            *slot = Some(Stamped { seq, action });
        });
    }

    pub fn subscribe(&self) -> ActionSubscription<A> {
        ActionSubscription {
            rx: self.tx.subscribe(),
            last_seen: 0,
        }
    }
}

impl<A: Action> Default for ActionBus<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read half of the bus, one per engine instance.
pub struct ActionSubscription<A> {
    rx: watch::Receiver<Option<Stamped<A>>>,
    last_seen: u64,
}

impl<A: Action> ActionSubscription<A> {
    /// The next action this subscriber has not yet consumed, waiting if
    /// none is pending. Returns `None` once the bus has been dropped.
    pub async fn recv(&mut self) -> Option<A> {
        loop {
            let pending = {
                let slot = self.rx.borrow_and_update();
                slot.as_ref()
                    .filter(|stamped| stamped.seq > self.last_seen)
                    .map(|stamped| (stamped.seq, stamped.action.clone()))
            };
            if let Some((seq, action)) = pending {
                self.last_seen = seq;
                return Some(action);
            }
            if self.rx.changed().await.is_err() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Ping(u32);

    impl Action for Ping {
        type Category = ();

        fn category(&self) -> Option<()> {
            Some(())
        }
    }

    #[tokio::test]
    async fn burst_delivers_only_latest() {
        let bus = ActionBus::new();
        let mut sub = bus.subscribe();
        bus.submit(Ping(1));
        bus.submit(Ping(2));
        bus.submit(Ping(3));
        assert_eq!(sub.recv().await, Some(Ping(3)));
    }

    #[tokio::test]
    async fn subscriber_replays_latest_at_subscription() {
        let bus = ActionBus::new();
        bus.submit(Ping(7));
        let mut late = bus.subscribe();
        assert_eq!(late.recv().await, Some(Ping(7)));
    }

    #[tokio::test]
    async fn subscribers_consume_independently() {
        let bus = ActionBus::new();
        let mut first = bus.subscribe();
        bus.submit(Ping(1));
        assert_eq!(first.recv().await, Some(Ping(1)));

        // A new subscriber still sees the action the first one consumed.
        let mut second = bus.subscribe();
        assert_eq!(second.recv().await, Some(Ping(1)));
    }

    #[tokio::test]
    async fn same_action_twice_notifies_twice() {
        let bus = ActionBus::new();
        let mut sub = bus.subscribe();
        bus.submit(Ping(5));
        assert_eq!(sub.recv().await, Some(Ping(5)));
        bus.submit(Ping(5));
        assert_eq!(sub.recv().await, Some(Ping(5)));
    }

    #[tokio::test]
    async fn recv_ends_when_bus_dropped() {
        let bus = ActionBus::<Ping>::new();
        let mut sub = bus.subscribe();
        drop(bus);
        assert_eq!(sub.recv().await, None);
    }
}
