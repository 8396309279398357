//! Face perimeter model
//!
//! The perimeter is four edges indexed clockwise from the top. A point
//! is "on" an edge when its fixed coordinate matches the edge line and
//! its varying coordinate falls within the edge span.

use crate::config::FaceConfig;

/// Tolerance for matching a coordinate against an edge line
pub const EDGE_EPS: f64 = 1e-6;

/// Absolute position of the drawing head
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The drawing origin (top-left face corner)
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Relative move taking `self` to `other`
    pub fn delta_to(self, other: Point) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }
}

/// One edge of the face perimeter
///
/// Indices follow the clockwise walk order: top, right, bottom, left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// Edges in clockwise walk order, starting from the top
    pub const CLOCKWISE: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Edge index (0-3) in clockwise order
    pub fn index(self) -> usize {
        match self {
            Edge::Top => 0,
            Edge::Right => 1,
            Edge::Bottom => 2,
            Edge::Left => 3,
        }
    }

    /// Next edge in clockwise order
    pub fn next_clockwise(self) -> Edge {
        match self {
            Edge::Top => Edge::Right,
            Edge::Right => Edge::Bottom,
            Edge::Bottom => Edge::Left,
            Edge::Left => Edge::Top,
        }
    }

    /// Value of the fixed coordinate along this edge
    pub fn fixed_coord(self, face: &FaceConfig) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Right => face.width,
            Edge::Bottom => face.height,
            Edge::Left => 0.0,
        }
    }

    /// The fixed coordinate of a point relative to this edge
    ///
    /// Horizontal edges fix y, vertical edges fix x.
    pub fn fixed_coord_of(self, p: Point) -> f64 {
        match self {
            Edge::Top | Edge::Bottom => p.y,
            Edge::Right | Edge::Left => p.x,
        }
    }

    /// The varying coordinate of a point relative to this edge
    pub fn varying_coord_of(self, p: Point) -> f64 {
        match self {
            Edge::Top | Edge::Bottom => p.x,
            Edge::Right | Edge::Left => p.y,
        }
    }

    /// Edge midpoint
    pub fn midpoint(self, face: &FaceConfig) -> Point {
        match self {
            Edge::Top => Point::new(face.width / 2.0, 0.0),
            Edge::Right => Point::new(face.width, face.height / 2.0),
            Edge::Bottom => Point::new(face.width / 2.0, face.height),
            Edge::Left => Point::new(0.0, face.height / 2.0),
        }
    }

    /// Corner reached when traversing this edge clockwise to its end
    pub fn end_corner(self, face: &FaceConfig) -> Point {
        match self {
            Edge::Top => Point::new(face.width, 0.0),
            Edge::Right => Point::new(face.width, face.height),
            Edge::Bottom => Point::new(0.0, face.height),
            Edge::Left => Point::new(0.0, 0.0),
        }
    }

    /// Unit direction of a clockwise traversal of this edge
    pub fn along(self) -> (f64, f64) {
        match self {
            Edge::Top => (1.0, 0.0),
            Edge::Right => (0.0, 1.0),
            Edge::Bottom => (-1.0, 0.0),
            Edge::Left => (0.0, -1.0),
        }
    }

    /// Check whether a point lies on this edge
    pub fn contains(self, face: &FaceConfig, p: Point) -> bool {
        let fixed_ok = (self.fixed_coord_of(p) - self.fixed_coord(face)).abs() <= EDGE_EPS;
        let span = match self {
            Edge::Top | Edge::Bottom => face.width,
            Edge::Right | Edge::Left => face.height,
        };
        let varying = self.varying_coord_of(p);
        fixed_ok && varying >= -EDGE_EPS && varying <= span + EDGE_EPS
    }
}

/// Classify a point against the perimeter
///
/// Edges are tested in clockwise walk order, so a corner point reports
/// the earlier edge. Returns `None` for points off the perimeter.
pub fn edge_of(face: &FaceConfig, p: Point) -> Option<Edge> {
    Edge::CLOCKWISE
        .into_iter()
        .find(|edge| edge.contains(face, p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face() -> FaceConfig {
        FaceConfig::default()
    }

    #[test]
    fn test_edge_of_midpoints() {
        let face = face();
        assert_eq!(edge_of(&face, Point::new(300.0, 0.0)), Some(Edge::Top));
        assert_eq!(edge_of(&face, Point::new(600.0, 300.0)), Some(Edge::Right));
        assert_eq!(edge_of(&face, Point::new(300.0, 600.0)), Some(Edge::Bottom));
        assert_eq!(edge_of(&face, Point::new(0.0, 300.0)), Some(Edge::Left));
    }

    #[test]
    fn test_edge_of_corners_prefer_walk_order() {
        let face = face();
        // Corners belong to both adjacent edges; the clockwise test
        // order picks the earlier one.
        assert_eq!(edge_of(&face, Point::new(0.0, 0.0)), Some(Edge::Top));
        assert_eq!(edge_of(&face, Point::new(600.0, 0.0)), Some(Edge::Top));
        assert_eq!(edge_of(&face, Point::new(600.0, 600.0)), Some(Edge::Right));
        assert_eq!(edge_of(&face, Point::new(0.0, 600.0)), Some(Edge::Bottom));
    }

    #[test]
    fn test_edge_of_rejects_interior_and_outside() {
        let face = face();
        assert_eq!(edge_of(&face, Point::new(10.0, 10.0)), None);
        assert_eq!(edge_of(&face, Point::new(300.0, 300.0)), None);
        // On the edge line but beyond the span
        assert_eq!(edge_of(&face, Point::new(0.0, 900.0)), None);
        assert_eq!(edge_of(&face, Point::new(700.0, 0.0)), None);
    }

    #[test]
    fn test_edge_indices_and_order() {
        for (i, edge) in Edge::CLOCKWISE.into_iter().enumerate() {
            assert_eq!(edge.index(), i);
        }
        assert_eq!(Edge::Top.next_clockwise(), Edge::Right);
        assert_eq!(Edge::Left.next_clockwise(), Edge::Top);
    }

    #[test]
    fn test_end_corners_chain() {
        let face = face();
        // Each edge ends where the next begins; a full walk returns
        // to the origin corner.
        assert_eq!(Edge::Top.end_corner(&face), Point::new(600.0, 0.0));
        assert_eq!(Edge::Right.end_corner(&face), Point::new(600.0, 600.0));
        assert_eq!(Edge::Bottom.end_corner(&face), Point::new(0.0, 600.0));
        assert_eq!(Edge::Left.end_corner(&face), Point::ORIGIN);
    }

    #[test]
    fn test_delta_to() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, -2.0);
        assert_eq!(a.delta_to(b), (3.0, -4.0));
        assert_eq!(b.delta_to(b), (0.0, 0.0));
    }
}
