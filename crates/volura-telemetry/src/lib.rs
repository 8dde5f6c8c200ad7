//! # volura-telemetry
//!
//! Structured telemetry for the simulation engine. The solver emits
//! lightweight events (timing, convergence, strain limiting, energy)
//! into a bus; pluggable sinks consume them for logging or inspection.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
