//! Clock face sketch
//!
//! Drives the controller through the fixed drawing routine: face
//! outline (bounding square plus four tick marks), minute hand via a
//! clockwise perimeter walk, hour hand from the center, and the AM/PM
//! indicator. `refresh_clock` is a full idempotent redraw from a
//! clean, post-reset state; the sketch itself holds no drawing state
//! beyond what the controller records.

use tracing::{debug, info};

use sandial_core::config::FaceConfig;
use sandial_core::geometry::{
    hour_hand_tip, minute_hand_tip, ClockTime, Edge, GeometryError, Meridiem, Point,
};
use sandial_core::path::render_svg;
use sandial_core::traits::AxisDriver;

use crate::controller::{SketchController, SketchError};

/// Width of the AM/PM indicator rectangle
const MERIDIEM_WIDTH: f64 = 30.0;

/// Height of the AM/PM indicator rectangle
const MERIDIEM_HEIGHT: f64 = 10.0;

/// Gap between the face center and the indicator rectangle
const MERIDIEM_OFFSET: f64 = 40.0;

/// Clock drawing routine on top of a sketch controller
#[derive(Debug)]
pub struct ClockSketch<A: AxisDriver> {
    controller: SketchController<A>,
    face: FaceConfig,
}

impl<A: AxisDriver> ClockSketch<A> {
    pub fn new(controller: SketchController<A>, face: FaceConfig) -> Self {
        Self { controller, face }
    }

    /// The underlying controller
    pub fn controller(&self) -> &SketchController<A> {
        &self.controller
    }

    /// Redraw the whole face for the given time and render the path
    ///
    /// Order is fixed: return to origin, clear the path, face outline,
    /// minute hand, hour hand, AM/PM indicator. The head finishes at
    /// the face center.
    pub fn refresh_clock(
        &mut self,
        hour: f64,
        minute: f64,
        animated: bool,
    ) -> Result<String, SketchError> {
        let time = ClockTime::new(hour, minute)?;
        info!(hour, minute, animated, "refreshing clock face");

        self.controller.return_to_origin()?;
        self.controller.shake_to_clear();
        self.draw_face()?;
        let edge = self.draw_minute_hand(&time)?;
        debug!(edge = edge.index(), "minute hand placed");
        self.draw_hour_hand(&time)?;
        self.draw_meridiem(time.meridiem())?;

        Ok(render_svg(self.controller.log(), &self.face, animated))
    }

    /// Trace the bounding square with a tick mark at each edge midpoint
    ///
    /// Starts and ends at the origin corner, walking clockwise.
    fn draw_face(&mut self) -> Result<(), SketchError> {
        let half_w = self.face.width / 2.0;
        let half_h = self.face.height / 2.0;
        let tick = self.face.tick_len;

        // Top edge, tick pointing down into the face
        self.controller.move_xy(half_w, 0.0)?;
        self.controller.move_xy(0.0, tick)?;
        self.controller.move_xy(0.0, -tick)?;
        self.controller.move_xy(half_w, 0.0)?;
        // Right edge, tick pointing left
        self.controller.move_xy(0.0, half_h)?;
        self.controller.move_xy(-tick, 0.0)?;
        self.controller.move_xy(tick, 0.0)?;
        self.controller.move_xy(0.0, half_h)?;
        // Bottom edge, tick pointing up
        self.controller.move_xy(-half_w, 0.0)?;
        self.controller.move_xy(0.0, -tick)?;
        self.controller.move_xy(0.0, tick)?;
        self.controller.move_xy(-half_w, 0.0)?;
        // Left edge, tick pointing right
        self.controller.move_xy(0.0, -half_h)?;
        self.controller.move_xy(tick, 0.0)?;
        self.controller.move_xy(-tick, 0.0)?;
        self.controller.move_xy(0.0, -half_h)?;
        Ok(())
    }

    /// Walk clockwise along the perimeter to a target edge point
    ///
    /// Edges are tested top, right, bottom, left. An edge that does
    /// not hold the target is traversed to its end corner; the first
    /// edge that does is traversed to the target itself. The target
    /// must lie on the perimeter, otherwise this is a caller contract
    /// violation.
    pub fn walk_perimeter(&mut self, target: Point) -> Result<Edge, SketchError> {
        for edge in Edge::CLOCKWISE {
            if edge.contains(&self.face, target) {
                let (dx, dy) = self.controller.position().delta_to(target);
                self.controller.move_xy(dx, dy)?;
                return Ok(edge);
            }
            let corner = edge.end_corner(&self.face);
            let (dx, dy) = self.controller.position().delta_to(corner);
            self.controller.move_xy(dx, dy)?;
        }
        Err(SketchError::Geometry(GeometryError::OffPerimeter {
            x: target.x,
            y: target.y,
        }))
    }

    /// Walk to the minute tip on the perimeter, then stroke inward to
    /// the face center. Returns the edge the tip landed on.
    fn draw_minute_hand(&mut self, time: &ClockTime) -> Result<Edge, SketchError> {
        let tip = minute_hand_tip(&self.face, time.minute());
        let edge = self.walk_perimeter(tip)?;

        let (cx, cy) = self.face.center();
        let (dx, dy) = self.controller.position().delta_to(Point::new(cx, cy));
        self.controller.move_xy(dx, dy)?;
        Ok(edge)
    }

    /// Stroke from the center out to the hour tip and back
    fn draw_hour_hand(&mut self, time: &ClockTime) -> Result<(), SketchError> {
        let tip = hour_hand_tip(&self.face, time);
        let (dx, dy) = self.controller.position().delta_to(tip);
        self.controller.move_xy(dx, dy)?;
        self.controller.move_xy(-dx, -dy)?;
        Ok(())
    }

    /// Draw the AM/PM rectangle above (AM) or below (PM) the center,
    /// returning the head to the center afterwards
    fn draw_meridiem(&mut self, meridiem: Meridiem) -> Result<(), SketchError> {
        let to_top_left_y = match meridiem {
            Meridiem::Am => -(MERIDIEM_OFFSET + MERIDIEM_HEIGHT),
            Meridiem::Pm => MERIDIEM_OFFSET,
        };

        self.controller.move_xy(-MERIDIEM_WIDTH / 2.0, to_top_left_y)?;
        self.controller.move_xy(MERIDIEM_WIDTH, 0.0)?;
        self.controller.move_xy(0.0, MERIDIEM_HEIGHT)?;
        self.controller.move_xy(-MERIDIEM_WIDTH, 0.0)?;
        self.controller.move_xy(0.0, -MERIDIEM_HEIGHT)?;
        self.controller.move_xy(MERIDIEM_WIDTH / 2.0, -to_top_left_y)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimulatedAxis;
    use sandial_core::config::MotionConfig;
    use sandial_core::path::SegmentLog;

    fn sketch() -> ClockSketch<SimulatedAxis> {
        let motion = MotionConfig {
            units_per_s: 1e12,
            barrier_timeout_ms: 1_000,
        };
        let controller =
            SketchController::new(SimulatedAxis::new(), SimulatedAxis::new(), motion);
        ClockSketch::new(controller, FaceConfig::default())
    }

    fn has_position(log: &SegmentLog, x: f64, y: f64) -> bool {
        log.entries()
            .iter()
            .any(|e| (e.position.x - x).abs() < 1e-9 && (e.position.y - y).abs() < 1e-9)
    }

    #[test]
    fn test_walk_to_top_edge_is_direct() {
        let mut sketch = sketch();
        let edge = sketch.walk_perimeter(Point::new(300.0, 0.0)).unwrap();
        assert_eq!(edge, Edge::Top);
        assert_eq!(edge.index(), 0);
        assert_eq!(sketch.controller().position(), Point::new(300.0, 0.0));
        // Seed entry plus a single direct move
        assert_eq!(sketch.controller().log().len(), 2);
    }

    #[test]
    fn test_walk_to_left_edge_traverses_three_edges() {
        let mut sketch = sketch();
        let edge = sketch.walk_perimeter(Point::new(0.0, 300.0)).unwrap();
        assert_eq!(edge, Edge::Left);
        assert_eq!(edge.index(), 3);
        assert_eq!(sketch.controller().position(), Point::new(0.0, 300.0));

        // Walked through the three corners before the final edge
        let log = sketch.controller().log();
        assert!(has_position(log, 600.0, 0.0));
        assert!(has_position(log, 600.0, 600.0));
        assert!(has_position(log, 0.0, 600.0));
        assert_eq!(log.len(), 5);
    }

    #[test]
    fn test_walk_rejects_off_perimeter_target() {
        let mut sketch = sketch();
        let err = sketch.walk_perimeter(Point::new(10.0, 10.0)).unwrap_err();
        assert_eq!(
            err,
            SketchError::Geometry(GeometryError::OffPerimeter { x: 10.0, y: 10.0 })
        );
    }

    #[test]
    fn test_refresh_clock_three_oclock() {
        let mut sketch = sketch();
        let svg = sketch.refresh_clock(3.0, 0.0, false).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("M 0 0"));

        let log = sketch.controller().log();
        // Minute hand tip at the top edge center
        assert!(has_position(log, 300.0, 0.0));
        // Hour hand tip at its sector-1 inner position
        assert!(has_position(log, 450.0, 300.0));
        // The head finishes at the face center
        assert_eq!(sketch.controller().position(), Point::new(300.0, 300.0));
    }

    #[test]
    fn test_refresh_clock_is_idempotent() {
        let mut sketch = sketch();
        let first = sketch.refresh_clock(9.0, 45.0, false).unwrap();
        let second = sketch.refresh_clock(9.0, 45.0, false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_refresh_clock_hour_sector_boundaries() {
        // hour % 3 == 0 on both sides of the AM/PM split
        let mut sketch = sketch();
        assert!(sketch.refresh_clock(0.0, 0.0, false).is_ok());
        assert!(sketch.refresh_clock(12.0, 0.0, false).is_ok());
        assert!(sketch.refresh_clock(6.0, 0.0, false).is_ok());
        assert!(sketch.refresh_clock(23.99, 59.9, false).is_ok());
    }

    #[test]
    fn test_refresh_clock_rejects_bad_time() {
        let mut sketch = sketch();
        assert_eq!(
            sketch.refresh_clock(24.0, 0.0, false).unwrap_err(),
            SketchError::Geometry(GeometryError::HourOutOfRange(24.0))
        );
        assert_eq!(
            sketch.refresh_clock(0.0, 60.0, false).unwrap_err(),
            SketchError::Geometry(GeometryError::MinuteOutOfRange(60.0))
        );
    }

    #[test]
    fn test_refresh_clock_animated_document() {
        let mut sketch = sketch();
        let svg = sketch.refresh_clock(10.0, 10.0, true).unwrap();
        assert!(svg.contains(r#"<animate attributeName="d""#));
        assert!(svg.contains(r#"<animate attributeName="cx""#));
    }

    #[test]
    fn test_meridiem_indicator_position() {
        let mut sketch = sketch();
        sketch.refresh_clock(9.0, 0.0, false).unwrap();
        // AM: indicator rectangle sits above the center
        assert!(has_position(sketch.controller().log(), 285.0, 250.0));

        sketch.refresh_clock(21.0, 0.0, false).unwrap();
        // PM: below the center
        assert!(has_position(sketch.controller().log(), 285.0, 340.0));
    }
}
