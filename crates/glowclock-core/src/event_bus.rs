//! Queue carrying clock events from the timer task to the UI thread.

use std::{
    collections::VecDeque,
    num::NonZeroUsize,
    sync::{Arc, Mutex},
};

use thiserror::Error;

use crate::modules;

/// Payload published by a module's background task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleEvent {
    Clock(modules::clock::Message),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventBusError {
    #[error("event queue is full (capacity: {capacity})")]
    QueueFull { capacity: usize },
    #[error("event queue state is poisoned")]
    Poisoned,
}

#[derive(Debug)]
struct Queue {
    events:   Mutex<VecDeque<ModuleEvent>>,
    capacity: usize,
}

/// Bounded queue shared by one [`EventSender`] side and one
/// [`EventReceiver`] side.
///
/// Publishing never blocks: once `capacity` events are waiting, further
/// events are rejected until the receiver drains the queue.
#[derive(Debug, Clone)]
pub struct EventBus {
    queue: Arc<Queue>,
}

impl EventBus {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            queue: Arc::new(Queue {
                events:   Mutex::new(VecDeque::with_capacity(capacity.get())),
                capacity: capacity.get(),
            }),
        }
    }

    pub fn sender(&self) -> EventSender {
        EventSender {
            queue: Arc::clone(&self.queue),
        }
    }

    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            queue: Arc::clone(&self.queue),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventSender {
    queue: Arc<Queue>,
}

impl EventSender {
    pub fn try_send(&self, event: ModuleEvent) -> Result<(), EventBusError> {
        let mut events = self
            .queue
            .events
            .lock()
            .map_err(|_| EventBusError::Poisoned)?;

        if events.len() >= self.queue.capacity {
            return Err(EventBusError::QueueFull {
                capacity: self.queue.capacity,
            });
        }

        events.push_back(event);
        Ok(())
    }
}

#[derive(Debug)]
pub struct EventReceiver {
    queue: Arc<Queue>,
}

impl EventReceiver {
    /// Takes every queued event, oldest first.
    pub fn drain(&self) -> Result<Vec<ModuleEvent>, EventBusError> {
        let mut events = self
            .queue
            .events
            .lock()
            .map_err(|_| EventBusError::Poisoned)?;

        Ok(events.drain(..).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::modules::clock::Message;

    fn tick(generation: u64) -> ModuleEvent {
        ModuleEvent::Clock(Message::Tick {
            instant: Utc
                .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
                .single()
                .expect("valid instant"),
            generation,
        })
    }

    fn bus(capacity: usize) -> EventBus {
        EventBus::new(NonZeroUsize::new(capacity).expect("non-zero capacity"))
    }

    #[test]
    fn full_queue_rejects_events() {
        let bus = bus(1);
        let sender = bus.sender();

        sender.try_send(tick(1)).expect("first event fits");

        let error = sender.try_send(tick(2)).expect_err("queue is full");
        assert_eq!(error, EventBusError::QueueFull { capacity: 1 });
    }

    #[test]
    fn drain_returns_events_in_order_and_frees_capacity() {
        let bus = bus(2);
        let sender = bus.sender();
        let receiver = bus.receiver();

        sender.try_send(tick(1)).expect("first");
        sender.try_send(tick(2)).expect("second");

        assert_eq!(receiver.drain().expect("drain"), vec![tick(1), tick(2)]);
        assert!(receiver.drain().expect("drain").is_empty());

        sender.try_send(tick(3)).expect("room again");
    }
}
