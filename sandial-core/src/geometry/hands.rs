//! Hand-tip trigonometry
//!
//! Both hands divide the dial into four sectors and work with a local
//! angle inside the sector; a fixed per-sector table maps the local
//! right-triangle legs onto absolute face coordinates. The hand
//! geometry assumes a square face (radius taken from the width).
//!
//! - Minute hand: 15-minute sectors, tip on the face perimeter. The
//!   parameterized triangle leg switches at 45 degrees so the tangent
//!   stays bounded near the corners.
//! - Hour hand: 3-hour sectors, tip on an inner circle at half the
//!   radius via sin/cos of the local angle.

use crate::config::FaceConfig;
use crate::geometry::{Edge, GeometryError, Point};

/// Degrees of dial rotation per minute
const DEG_PER_MINUTE: f64 = 6.0;

/// Minutes covered by one perimeter sector
const MINUTES_PER_SECTOR: f64 = 15.0;

/// Degrees of dial rotation per hour within a sector
const DEG_PER_HOUR: f64 = 30.0;

/// Hours covered by one hour-hand sector
const HOURS_PER_SECTOR: f64 = 3.0;

/// Per-sector mapping of the hour-hand legs onto face coordinates:
/// (x sign, y sign, swap opposite/adjacent)
const HOUR_SECTOR_SIGNS: [(f64, f64, bool); 4] = [
    (1.0, -1.0, false),
    (1.0, 1.0, true),
    (-1.0, 1.0, false),
    (-1.0, -1.0, true),
];

/// AM/PM half of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// A validated time of day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockTime {
    hour: f64,
    minute: f64,
}

impl ClockTime {
    /// Validate an hour in [0, 24) and a minute in [0, 60)
    pub fn new(hour: f64, minute: f64) -> Result<Self, GeometryError> {
        if !hour.is_finite() || !(0.0..24.0).contains(&hour) {
            return Err(GeometryError::HourOutOfRange(hour));
        }
        if !minute.is_finite() || !(0.0..60.0).contains(&minute) {
            return Err(GeometryError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> f64 {
        self.hour
    }

    pub fn minute(&self) -> f64 {
        self.minute
    }

    /// Which half of the day this time falls in
    pub fn meridiem(&self) -> Meridiem {
        if self.hour < 12.0 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    }
}

/// Minute hand tip on the face perimeter
///
/// The sector selects a quarter of the perimeter running midpoint to
/// midpoint across one corner. Below 45 degrees the tip sits on the
/// sector's first edge at `radius * tan(angle)` past the midpoint;
/// above, on the next edge at `radius * tan(90 - angle)` before its
/// midpoint.
pub fn minute_hand_tip(face: &FaceConfig, minute: f64) -> Point {
    let radius = face.radius();
    let sector = ((minute / MINUTES_PER_SECTOR) as usize).min(3);
    let local_deg = (minute % MINUTES_PER_SECTOR) * DEG_PER_MINUTE;

    let (edge, offset) = if local_deg <= 45.0 {
        let edge = Edge::CLOCKWISE[sector];
        (edge, radius * local_deg.to_radians().tan())
    } else {
        let edge = Edge::CLOCKWISE[sector].next_clockwise();
        (edge, -radius * (90.0 - local_deg).to_radians().tan())
    };

    let mid = edge.midpoint(face);
    let (ax, ay) = edge.along();
    Point::new(mid.x + offset * ax, mid.y + offset * ay)
}

/// Hour hand tip on the inner circle
///
/// The local angle advances with the minutes so the hand sweeps
/// continuously between hour marks.
pub fn hour_hand_tip(face: &FaceConfig, time: &ClockTime) -> Point {
    let inner = face.inner_radius();
    let (cx, cy) = face.center();
    let sector = (((time.hour() % 12.0) / HOURS_PER_SECTOR) as usize).min(3);
    let local_deg = ((time.hour() + time.minute() / 60.0) % HOURS_PER_SECTOR) * DEG_PER_HOUR;
    let local = local_deg.to_radians();

    let opp = inner * local.sin();
    let adj = inner * local.cos();
    let (sign_x, sign_y, swap) = HOUR_SECTOR_SIGNS[sector];
    let (off_x, off_y) = if swap { (adj, opp) } else { (opp, adj) };
    Point::new(cx + sign_x * off_x, cy + sign_y * off_y)
}
