//! Axis actuator driver trait
//!
//! This trait abstracts over the motor driving one axis of the drawing
//! head (GPIO H-bridge on the real machine, a simulator in tests).

use core::fmt;

use thiserror::Error;

/// Axis identifier for moves and fault reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisId {
    /// Horizontal axis of the drawing head
    X,
    /// Vertical axis of the drawing head
    Y,
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisId::X => f.write_str("X"),
            AxisId::Y => f.write_str("Y"),
        }
    }
}

/// Motor travel direction along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward increasing coordinates
    Forward,
    /// Toward decreasing coordinates
    Reverse,
}

impl Direction {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// Direction implied by the sign of a relative move
    ///
    /// A zero delta has no direction; the axis is not driven at all.
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Direction::Forward)
        } else if delta < 0.0 {
            Some(Direction::Reverse)
        } else {
            None
        }
    }
}

/// Errors reported by an axis actuator
///
/// Any fault is hard: the in-flight move is abandoned and the fault
/// propagates to the caller. No retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AxisFault {
    /// Driver is disabled or not powered
    #[error("driver disabled")]
    Disabled,
    /// Start requested while the motor is already running
    #[error("motor already running")]
    AlreadyRunning,
    /// Direction change requested while the motor is running
    #[error("direction change while running")]
    ChangeWhileRunning,
    /// I/O failure talking to the driver hardware
    #[error("driver I/O failure")]
    Io,
}

/// Trait for axis actuator drivers
///
/// Implementations drive one motor. Direction must be set before
/// `start`, and only while the motor is stopped. The controller never
/// drives one actuator from more than one thread at a time.
pub trait AxisDriver: Send {
    /// Set the travel direction
    fn set_direction(&mut self, dir: Direction) -> Result<(), AxisFault>;

    /// Get the current direction
    fn direction(&self) -> Direction;

    /// Start the motor
    fn start(&mut self) -> Result<(), AxisFault>;

    /// Stop the motor
    fn stop(&mut self) -> Result<(), AxisFault>;

    /// Check if the motor is currently running
    fn is_running(&self) -> bool;

    /// Check if the motor is fully stopped
    fn is_stopped(&self) -> bool {
        !self.is_running()
    }
}
