//! Dual-axis sketch controller
//!
//! `SketchController` owns both axis drivers, the head position, the
//! segment log, and the rendezvous barrier. A relative move runs the
//! two axis legs on scoped threads, gated by the barrier so both
//! motors start together; the caller blocks until both legs finish.
//! Position and log are committed exactly once, on the joined
//! continuation, so a fault on either leg leaves them untouched.
//!
//! Exclusive access is structural: `move_xy` takes `&mut self`, so two
//! moves can never interleave their axis threads and no actuator is
//! ever driven from two threads at once.

use std::thread;

use thiserror::Error;
use tracing::{debug, info, warn};

use sandial_core::config::MotionConfig;
use sandial_core::geometry::{GeometryError, Point};
use sandial_core::path::{Segment, SegmentLog};
use sandial_core::traits::{AxisDriver, AxisFault, AxisId, Direction};

use crate::barrier::{Arrival, Rendezvous};

/// Participants in one move rendezvous: the X leg and the Y leg
const MOVE_PARTICIPANTS: usize = 2;

/// Errors surfaced by sketch operations
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SketchError {
    /// An axis actuator failed to start, stop, or change direction
    #[error("{axis} axis actuator fault: {fault}")]
    Actuator { axis: AxisId, fault: AxisFault },
    /// A geometry contract was violated
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Coordinated controller for the two-axis drawing head
#[derive(Debug)]
pub struct SketchController<A: AxisDriver> {
    x_axis: A,
    y_axis: A,
    position: Point,
    log: SegmentLog,
    barrier: Rendezvous,
    motion: MotionConfig,
}

impl<A: AxisDriver> SketchController<A> {
    /// Create a controller at the origin with a fresh path log
    pub fn new(x_axis: A, y_axis: A, motion: MotionConfig) -> Self {
        Self {
            x_axis,
            y_axis,
            position: Point::ORIGIN,
            log: SegmentLog::new(),
            barrier: Rendezvous::new(MOVE_PARTICIPANTS, motion.barrier_timeout()),
            motion,
        }
    }

    /// Current absolute head position
    pub fn position(&self) -> Point {
        self.position
    }

    /// The recorded path so far
    pub fn log(&self) -> &SegmentLog {
        &self.log
    }

    /// Move both axes by a relative delta, concurrently
    ///
    /// Each leg arrives at the barrier, then drives its motor for
    /// `|delta| / velocity` if its delta is non-zero. The call returns
    /// only after both legs have finished. A `(0, 0)` move is legal
    /// and recorded as a pen-reset segment.
    pub fn move_xy(&mut self, dx: f64, dy: f64) -> Result<(), SketchError> {
        let motion = self.motion;
        let barrier = &self.barrier;
        let x_axis = &mut self.x_axis;
        let y_axis = &mut self.y_axis;

        let (res_x, res_y) = thread::scope(|s| {
            let x_leg =
                s.spawn(move || drive_axis(AxisId::X, x_axis, dx, &motion, barrier));
            let y_leg =
                s.spawn(move || drive_axis(AxisId::Y, y_axis, dy, &motion, barrier));
            (join_leg(x_leg), join_leg(y_leg))
        });

        if let (Err(first), Err(second)) = (&res_x, &res_y) {
            warn!(%first, %second, "both axis legs faulted; reporting the X fault");
        }
        res_x?;
        res_y?;

        // Both legs done: commit position and log in one step
        self.position = Point::new(self.position.x + dx, self.position.y + dy);
        self.log.record(Segment::new(dx, dy), self.position);
        debug!(dx, dy, x = self.position.x, y = self.position.y, "move committed");
        Ok(())
    }

    /// Move the head back to the origin
    pub fn return_to_origin(&mut self) -> Result<(), SketchError> {
        let (dx, dy) = self.position.delta_to(Point::ORIGIN);
        self.move_xy(dx, dy)
    }

    /// Clear the recorded path, re-seeding it at the origin
    ///
    /// The head itself does not move; callers return it to the origin
    /// first so the re-seeded log matches the physical position.
    pub fn shake_to_clear(&mut self) {
        self.log.clear();
        info!("path log cleared");
    }
}

/// Run one axis leg of a move
///
/// Arrives at the rendezvous first so both motors start together; a
/// timed-out rendezvous is degraded but never fatal. A zero delta
/// leaves the actuator untouched.
fn drive_axis<A: AxisDriver>(
    axis: AxisId,
    driver: &mut A,
    delta: f64,
    motion: &MotionConfig,
    barrier: &Rendezvous,
) -> Result<(), SketchError> {
    if barrier.arrive() == Arrival::TimedOut {
        warn!(%axis, "rendezvous timed out; axis proceeding unsynchronized");
    }

    let Some(direction) = Direction::from_delta(delta) else {
        return Ok(());
    };
    let fault = |fault| SketchError::Actuator { axis, fault };

    driver.set_direction(direction).map_err(fault)?;
    driver.start().map_err(fault)?;
    thread::sleep(motion.travel_time(delta));
    driver.stop().map_err(fault)?;
    debug!(%axis, delta, "axis leg complete");
    Ok(())
}

/// Join an axis leg, forwarding panics to the caller
fn join_leg<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    match handle.join() {
        Ok(value) => value,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}
