//! Hardware-agnostic core logic for the Sandial clock plotter
//!
//! This crate contains all logic that does not depend on threads or
//! specific hardware implementations:
//!
//! - Axis driver trait and direction types
//! - Clock face geometry (perimeter edges, hand-tip trigonometry)
//! - Segment log and SVG path rendering
//! - Configuration type definitions

#![deny(unsafe_code)]

pub mod config;
pub mod geometry;
pub mod path;
pub mod traits;
