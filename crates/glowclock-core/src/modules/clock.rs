mod time;

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use glowclock_proto::{config::GmtOffset, ports::time::TimeSource};
use log::{debug, error};
use tokio::{
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};

pub use time::DisplayedTime;

use crate::{ModuleContext, ModuleEventSender, event_bus::ModuleEvent};

/// Period of the clock timer.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Clock data for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockData {
    pub displayed: DisplayedTime,
    pub offset:    GmtOffset,
    pub last_tick: Option<DateTime<Utc>>,
}

impl ClockData {
    pub fn new(offset: GmtOffset) -> Self {
        Self {
            displayed: DisplayedTime::placeholder(),
            offset,
            last_tick: None,
        }
    }

    fn refresh(&mut self, instant: DateTime<Utc>) {
        self.displayed = DisplayedTime::compute(instant, self.offset);
        self.last_tick = Some(instant);
    }
}

/// Message type for GUI communication
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Periodic tick from the timer started by registration `generation`.
    Tick {
        instant:    DateTime<Utc>,
        generation: u64,
    },
}

/// Clock module - business logic only, no GUI!
///
/// Owns at most one timer task. Registering again (for example after the
/// offset changed) aborts the running task before starting a new one, and
/// dropping the module aborts it as well. Every registration gets a new
/// generation; ticks still queued from an earlier one are ignored.
#[derive(Debug)]
pub struct Clock {
    data:       ClockData,
    source:     Arc<dyn TimeSource>,
    task:       Option<JoinHandle<()>>,
    generation: u64,
}

impl Clock {
    pub fn new(source: Arc<dyn TimeSource>) -> Self {
        Self {
            data: ClockData::new(GmtOffset::UTC),
            source,
            task: None,
            generation: 0,
        }
    }

    /// Get current clock data for rendering
    pub fn data(&self) -> &ClockData {
        &self.data
    }

    pub fn offset(&self) -> GmtOffset {
        self.data.offset
    }

    /// Generation of the latest registration, `0` before the first one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a timer task is currently alive.
    pub fn is_ticking(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Computes the readout for `offset` immediately and (re)starts the
    /// one-second timer.
    pub fn register(&mut self, ctx: &ModuleContext, offset: GmtOffset) {
        self.stop();

        self.generation += 1;
        self.data.offset = offset;
        self.data.refresh(self.source.now());

        let generation = self.generation;
        let ticker_sender: ModuleEventSender<Message> = ctx.module_sender(ModuleEvent::Clock);
        let source = Arc::clone(&self.source);

        self.task = Some(ctx.runtime_handle().spawn(async move {
            let mut ticker = interval(TICK_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            // The first tick completes immediately; registration already
            // rendered that instant.
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let tick = Message::Tick {
                    instant: source.now(),
                    generation,
                };

                if let Err(err) = ticker_sender.try_send(tick) {
                    error!("Failed to publish clock tick: {err}");
                }
            }
        }));

        debug!("Clock timer #{generation} started for {offset}");
    }

    /// Aborts the running timer, if any.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Clock timer #{} cleared", self.generation);
        }
    }

    /// Update clock state from GUI message.
    ///
    /// Returns `false` when the tick came from an earlier registration and
    /// was therefore ignored.
    pub fn update(&mut self, message: Message) -> bool {
        match message {
            Message::Tick {
                instant,
                generation,
            } if generation == self.generation => {
                self.data.refresh(instant);
                true
            }
            Message::Tick { generation, .. } => {
                debug!("Ignoring stale tick from clock timer #{generation}");
                false
            }
        }
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.stop();
    }
}
