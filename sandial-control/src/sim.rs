//! Simulated axis driver
//!
//! Stands in for the physical GPIO actuator: tracks direction and
//! running state, counts starts/stops, and can inject a fault at a
//! chosen call site. Used by the tests and by host-side runs of the
//! binary where no hardware is attached.

use sandial_core::traits::{AxisDriver, AxisFault, Direction};

/// Call site at which the simulator injects a fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultPoint {
    SetDirection,
    Start,
    Stop,
}

/// In-memory axis actuator
#[derive(Debug, Clone)]
pub struct SimulatedAxis {
    direction: Direction,
    running: bool,
    starts: u32,
    stops: u32,
    fail_at: Option<FaultPoint>,
}

impl SimulatedAxis {
    /// Create a healthy simulated axis
    pub fn new() -> Self {
        Self {
            direction: Direction::Forward,
            running: false,
            starts: 0,
            stops: 0,
            fail_at: None,
        }
    }

    /// Create a simulated axis that faults at the given call site
    pub fn failing_at(point: FaultPoint) -> Self {
        Self {
            fail_at: Some(point),
            ..Self::new()
        }
    }

    /// Number of completed start calls
    pub fn starts(&self) -> u32 {
        self.starts
    }

    /// Number of completed stop calls
    pub fn stops(&self) -> u32 {
        self.stops
    }

    fn check(&self, point: FaultPoint) -> Result<(), AxisFault> {
        if self.fail_at == Some(point) {
            Err(AxisFault::Io)
        } else {
            Ok(())
        }
    }
}

impl Default for SimulatedAxis {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisDriver for SimulatedAxis {
    fn set_direction(&mut self, dir: Direction) -> Result<(), AxisFault> {
        self.check(FaultPoint::SetDirection)?;
        if self.running {
            return Err(AxisFault::ChangeWhileRunning);
        }
        self.direction = dir;
        Ok(())
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn start(&mut self) -> Result<(), AxisFault> {
        self.check(FaultPoint::Start)?;
        if self.running {
            return Err(AxisFault::AlreadyRunning);
        }
        self.running = true;
        self.starts += 1;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AxisFault> {
        self.check(FaultPoint::Stop)?;
        self.running = false;
        self.stops += 1;
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_stop_cycle() {
        let mut axis = SimulatedAxis::new();
        assert!(axis.is_stopped());
        axis.set_direction(Direction::Reverse).unwrap();
        axis.start().unwrap();
        assert!(axis.is_running());
        assert_eq!(axis.direction(), Direction::Reverse);
        axis.stop().unwrap();
        assert!(axis.is_stopped());
        assert_eq!(axis.starts(), 1);
        assert_eq!(axis.stops(), 1);
    }

    #[test]
    fn test_double_start_is_a_fault() {
        let mut axis = SimulatedAxis::new();
        axis.start().unwrap();
        assert_eq!(axis.start(), Err(AxisFault::AlreadyRunning));
    }

    #[test]
    fn test_direction_change_while_running_is_a_fault() {
        let mut axis = SimulatedAxis::new();
        axis.start().unwrap();
        assert_eq!(
            axis.set_direction(Direction::Reverse),
            Err(AxisFault::ChangeWhileRunning)
        );
    }

    #[test]
    fn test_fault_injection() {
        let mut axis = SimulatedAxis::failing_at(FaultPoint::Start);
        axis.set_direction(Direction::Forward).unwrap();
        assert_eq!(axis.start(), Err(AxisFault::Io));
        assert_eq!(axis.starts(), 0);

        let mut axis = SimulatedAxis::failing_at(FaultPoint::Stop);
        axis.start().unwrap();
        assert_eq!(axis.stop(), Err(AxisFault::Io));
    }
}
