//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic and
//! hardware-specific axis actuator implementations.

pub mod axis;

pub use axis::{AxisDriver, AxisFault, AxisId, Direction};
