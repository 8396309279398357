//! Path rendering
//!
//! Converts the segment log into SVG path data using the shortest
//! per-segment command (`h`/`v` for axis-aligned moves, `l` for
//! diagonals, `M 0 0` for pen resets), and optionally into
//! time-indexed animation tracks replaying the trace step by step.
//!
//! Rendering is a pure pass over the log: it never mutates it and is
//! deterministic for an unchanged log.

use std::fmt::{self, Write};

use crate::config::FaceConfig;
use crate::path::{Segment, SegmentLog};

/// Replay cadence of the animated rendering (one log step per sample)
pub const SECONDS_PER_STEP: f64 = 0.5;

/// Coordinate formatter: integer-valued deltas drop the fractional
/// part, everything else keeps full round-trip precision.
struct Coord(f64);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 && self.0.abs() < i64::MAX as f64 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Append the minimal encoding of one segment
fn encode_into(out: &mut String, segment: &Segment) {
    if segment.is_pen_reset() {
        out.push_str("M 0 0");
    } else if segment.dx == 0.0 {
        let _ = write!(out, "v {}", Coord(segment.dy));
    } else if segment.dy == 0.0 {
        let _ = write!(out, "h {}", Coord(segment.dx));
    } else {
        let _ = write!(out, "l {} {}", Coord(segment.dx), Coord(segment.dy));
    }
}

/// Render the full static path data string
pub fn path_data(log: &SegmentLog) -> String {
    let mut out = String::new();
    for entry in log.entries() {
        if !out.is_empty() {
            out.push(' ');
        }
        encode_into(&mut out, &entry.segment);
    }
    out
}

/// Time-indexed replay tracks derived from the segment log
///
/// Each track leads with the final cumulative state and then replays
/// the history, so a viewer shows the finished drawing first and the
/// trace loops from the start.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedTracks {
    /// Cumulative path data after each step
    pub path_steps: Vec<String>,
    /// Absolute head X coordinate at each step
    pub head_x: Vec<f64>,
    /// Absolute head Y coordinate at each step
    pub head_y: Vec<f64>,
}

impl AnimatedTracks {
    /// Number of samples in each track
    pub fn sample_count(&self) -> usize {
        self.path_steps.len()
    }

    /// Total replay duration in seconds
    pub fn duration_s(&self) -> f64 {
        self.sample_count() as f64 * SECONDS_PER_STEP
    }
}

/// Build the animated replay tracks
pub fn animated_tracks(log: &SegmentLog) -> AnimatedTracks {
    let entries = log.entries();
    let mut partials = Vec::with_capacity(entries.len());
    let mut acc = String::new();
    for entry in entries {
        if !acc.is_empty() {
            acc.push(' ');
        }
        encode_into(&mut acc, &entry.segment);
        partials.push(acc.clone());
    }

    let final_path = partials.last().cloned().unwrap_or_default();
    let final_pos = entries.last().map(|e| e.position);

    let mut path_steps = Vec::with_capacity(partials.len() + 1);
    path_steps.push(final_path);
    path_steps.extend(partials);

    let mut head_x = Vec::with_capacity(entries.len() + 1);
    let mut head_y = Vec::with_capacity(entries.len() + 1);
    if let Some(pos) = final_pos {
        head_x.push(pos.x);
        head_y.push(pos.y);
    }
    for entry in entries {
        head_x.push(entry.position.x);
        head_y.push(entry.position.y);
    }

    AnimatedTracks {
        path_steps,
        head_x,
        head_y,
    }
}

/// Render a complete SVG document for the current log
///
/// The static form holds a single `<path>`; the animated form adds a
/// discrete SMIL replay of the path plus a marker circle following the
/// head position.
pub fn render_svg(log: &SegmentLog, face: &FaceConfig, animated: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
        Coord(face.width),
        Coord(face.height)
    );

    if animated {
        let tracks = animated_tracks(log);
        let dur = tracks.duration_s();
        let _ = writeln!(
            out,
            r#"  <path fill="none" stroke="black" stroke-width="2" d="{}">"#,
            tracks.path_steps[0]
        );
        let _ = writeln!(
            out,
            r#"    <animate attributeName="d" calcMode="discrete" dur="{dur}s" repeatCount="indefinite" values="{}"/>"#,
            tracks.path_steps.join(";")
        );
        out.push_str("  </path>\n");

        let xs: Vec<String> = tracks.head_x.iter().map(|v| Coord(*v).to_string()).collect();
        let ys: Vec<String> = tracks.head_y.iter().map(|v| Coord(*v).to_string()).collect();
        let _ = writeln!(
            out,
            r#"  <circle r="6" fill="black" cx="{}" cy="{}">"#,
            xs[0], ys[0]
        );
        let _ = writeln!(
            out,
            r#"    <animate attributeName="cx" calcMode="discrete" dur="{dur}s" repeatCount="indefinite" values="{}"/>"#,
            xs.join(";")
        );
        let _ = writeln!(
            out,
            r#"    <animate attributeName="cy" calcMode="discrete" dur="{dur}s" repeatCount="indefinite" values="{}"/>"#,
            ys.join(";")
        );
        out.push_str("  </circle>\n");
    } else {
        let _ = writeln!(
            out,
            r#"  <path fill="none" stroke="black" stroke-width="2" d="{}"/>"#,
            path_data(log)
        );
    }

    out.push_str("</svg>\n");
    out
}
