//! Motion control for the Sandial clock plotter
//!
//! This crate owns everything that touches threads or actuators:
//!
//! - A reusable rendezvous barrier gating the two axis legs
//! - The sketch controller: coordinated dual-axis relative moves with
//!   a single commit point for position and path log
//! - The clock sketch: face outline, perimeter walk, hand routines
//! - A simulated axis driver for tests and host-side runs

#![deny(unsafe_code)]

pub mod barrier;
pub mod clock;
pub mod controller;
pub mod sim;

pub use barrier::{Arrival, Rendezvous};
pub use clock::ClockSketch;
pub use controller::{SketchController, SketchError};
pub use sim::SimulatedAxis;
