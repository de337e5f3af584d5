use std::sync::Arc;

use tokio::runtime::Handle;

use crate::event_bus::{EventBusError, EventSender, ModuleEvent};

/// Shared utilities exposed to modules that need to talk to the UI event loop.
///
/// Tasks spawned through the runtime handle must tolerate being aborted at
/// any await point; publishing is synchronous, so an aborted task never
/// leaves a half-published event behind.
#[derive(Debug, Clone)]
pub struct ModuleContext {
    event_sender:   EventSender,
    runtime_handle: Handle,
}

impl ModuleContext {
    /// Create a new context bound to the provided event sender and runtime handle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glowclock_core::{event_bus::EventBus, module_context::ModuleContext};
    /// # use std::num::NonZeroUsize;
    /// # let runtime = tokio::runtime::Runtime::new().expect("runtime");
    /// let bus = EventBus::new(NonZeroUsize::new(4).expect("capacity"));
    /// let context = ModuleContext::new(bus.sender(), runtime.handle().clone());
    /// # drop(context);
    /// ```
    pub fn new(event_sender: EventSender, runtime_handle: Handle) -> Self {
        Self {
            event_sender,
            runtime_handle,
        }
    }

    /// Access the runtime handle used for spawning background tasks.
    pub fn runtime_handle(&self) -> &Handle {
        &self.runtime_handle
    }

    /// Build a type-safe module event sender from the provided conversion function.
    pub fn module_sender<T, F>(&self, convert: F) -> ModuleEventSender<T>
    where
        T: Send + 'static,
        F: Fn(T) -> ModuleEvent + Send + Sync + 'static,
    {
        ModuleEventSender {
            sender:  self.event_sender.clone(),
            convert: Arc::new(convert),
        }
    }
}

/// Typed handle a module task publishes its own messages through.
#[derive(Clone)]
pub struct ModuleEventSender<T> {
    sender:  EventSender,
    convert: Arc<dyn Fn(T) -> ModuleEvent + Send + Sync>,
}

impl<T> std::fmt::Debug for ModuleEventSender<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleEventSender")
            .field("sender", &self.sender)
            .finish_non_exhaustive()
    }
}

impl<T> ModuleEventSender<T>
where
    T: Send + 'static,
{
    /// Converts `payload` and enqueues it, failing when the bus is full or
    /// poisoned.
    pub fn try_send(&self, payload: T) -> Result<(), EventBusError> {
        self.sender.try_send((self.convert)(payload))
    }
}
