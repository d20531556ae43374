//! Recordboard Infrastructure Layer
//!
//! Adapters for the application ports: event sources that decode real-time
//! frames, and display surfaces that show the record table.
pub mod events;
pub mod surface;
