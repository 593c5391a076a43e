#![forbid(unsafe_code)]

//! Core: geometry primitives shared by the ctxmenu placement crates.
//!
//! # Role in ctxmenu
//! `ctxmenu-core` owns the value types every layout pass is expressed in:
//! offsets, sizes, rectangles, compass alignments and loose measurement
//! constraints. All coordinates are `f64` logical units with the origin at
//! the top-left and `y` growing downwards.
//!
//! # How it fits in the system
//! `ctxmenu-layout` builds placement candidates out of these types and the
//! `ctxmenu` facade re-exports them. Nothing here allocates or fails.

pub mod geometry;

pub use geometry::{Alignment, Constraints, Offset, Rect, Size};
