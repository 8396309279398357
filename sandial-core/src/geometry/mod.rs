//! Clock face geometry
//!
//! The face is a square traced by the drawing head. Hands are computed
//! from hour/minute input: the minute hand tip lies on the face
//! perimeter, the hour hand tip on an inner circle at half the radius.

pub mod face;
pub mod hands;

pub use face::{edge_of, Edge, Point, EDGE_EPS};
pub use hands::{hour_hand_tip, minute_hand_tip, ClockTime, Meridiem};

use thiserror::Error;

/// Errors raised by geometry operations
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Hour outside the half-open range [0, 24)
    #[error("hour {0} outside [0, 24)")]
    HourOutOfRange(f64),
    /// Minute outside the half-open range [0, 60)
    #[error("minute {0} outside [0, 60)")]
    MinuteOutOfRange(f64),
    /// Perimeter walk target does not lie on any face edge
    #[error("target ({x}, {y}) does not lie on any face edge")]
    OffPerimeter { x: f64, y: f64 },
}
