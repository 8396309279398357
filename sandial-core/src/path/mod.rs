//! Traced path accumulation
//!
//! Every committed move is appended to the segment log together with
//! the absolute head position it produced. The log is append-only;
//! rendering reads it without mutating, and only an explicit clear
//! ("shake to clear") resets it.

pub mod render;

pub use render::{animated_tracks, path_data, render_svg, AnimatedTracks};

use crate::geometry::Point;

/// One committed relative move
///
/// A zero-length segment is a pen-reset marker: the renderer emits an
/// absolute move back to the origin for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub dx: f64,
    pub dy: f64,
}

impl Segment {
    /// The pen-reset marker
    pub const PEN_RESET: Segment = Segment { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Check whether this segment is the pen-reset marker
    pub fn is_pen_reset(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// A segment together with the absolute position sampled after it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceEntry {
    pub segment: Segment,
    pub position: Point,
}

/// Ordered log of committed segments
///
/// A fresh (or cleared) log holds a single pen-reset entry at the
/// origin, so an empty trace still renders as a valid path.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentLog {
    entries: Vec<TraceEntry>,
}

impl SegmentLog {
    /// Create a log seeded with the origin pen-reset entry
    pub fn new() -> Self {
        let mut log = Self {
            entries: Vec::new(),
        };
        log.clear();
        log
    }

    /// Append a committed segment and the position it produced
    pub fn record(&mut self, segment: Segment, position: Point) {
        self.entries.push(TraceEntry { segment, position });
    }

    /// Drop all entries and re-seed with the origin pen-reset entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.entries.push(TraceEntry {
            segment: Segment::PEN_RESET,
            position: Point::ORIGIN,
        });
    }

    /// All entries in chronological order
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SegmentLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_is_seeded() {
        let log = SegmentLog::new();
        assert_eq!(log.len(), 1);
        assert!(log.entries()[0].segment.is_pen_reset());
        assert_eq!(log.entries()[0].position, Point::ORIGIN);
    }

    #[test]
    fn test_record_preserves_order() {
        let mut log = SegmentLog::new();
        log.record(Segment::new(5.3, 7.9), Point::new(5.3, 7.9));
        log.record(Segment::new(-5.3, 0.0), Point::new(0.0, 7.9));
        assert_eq!(log.len(), 3);
        assert_eq!(log.entries()[1].segment, Segment::new(5.3, 7.9));
        assert_eq!(log.entries()[2].position, Point::new(0.0, 7.9));
    }

    #[test]
    fn test_clear_reseeds() {
        let mut log = SegmentLog::new();
        log.record(Segment::new(1.0, 2.0), Point::new(1.0, 2.0));
        log.clear();
        assert_eq!(log.len(), 1);
        assert!(log.entries()[0].segment.is_pen_reset());
    }

    #[test]
    fn test_pen_reset_detection() {
        assert!(Segment::PEN_RESET.is_pen_reset());
        assert!(Segment::new(0.0, 0.0).is_pen_reset());
        assert!(!Segment::new(0.0, 0.1).is_pen_reset());
        assert!(!Segment::new(-0.1, 0.0).is_pen_reset());
    }
}
