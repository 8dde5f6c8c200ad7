//! Event bus — buffered event dispatch with pluggable sinks.
//!
//! `emit` is cheap (a buffered push); sinks only run when `flush` is
//! called, typically once per frame. A disabled bus drops events.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::events::SimulationEvent;
use crate::sinks::EventSink;

/// Buffered event bus for simulation telemetry.
pub struct EventBus {
    /// Pending events, drained on `flush`.
    pending: RefCell<VecDeque<SimulationEvent>>,
    /// Registered sinks.
    sinks: Vec<Box<dyn EventSink>>,
    /// Whether the bus is active. A disabled bus is a no-op.
    enabled: bool,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        Self {
            pending: RefCell::new(VecDeque::new()),
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queue an event. If the bus is disabled, this is a no-op.
    pub fn emit(&self, event: SimulationEvent) {
        if !self.enabled {
            return;
        }
        self.pending.borrow_mut().push_back(event);
    }

    /// Deliver all pending events to the registered sinks, in emission
    /// order. Call once per frame or at shutdown.
    pub fn flush(&mut self) {
        let drained: Vec<SimulationEvent> = self.pending.borrow_mut().drain(..).collect();
        for event in &drained {
            for sink in &mut self.sinks {
                sink.handle(event);
            }
        }
    }

    /// Number of events waiting to be flushed.
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Finalizes all sinks (flush buffers, close files).
    pub fn finalize(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
