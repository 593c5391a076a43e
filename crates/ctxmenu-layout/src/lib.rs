#![forbid(unsafe_code)]

//! Best-fit placement of a context menu and its preview.
//!
//! A layout pass takes a viewport, the anchor item, a desired preview size
//! and a menu measurement callback, and returns the preview rectangle, the
//! menu position rule and a stable layout id to feed back on the next pass.
//!
//! Two strategies exist. [`MenuLayoutStrategy::Standard`] attaches the menu
//! to a corner of a centered preview; [`MenuLayoutStrategy::CompactPortrait`]
//! stacks the menu above or below the preview on portrait phones. Both emit
//! an ordered candidate list which [`selector::select`] resolves.
//!
//! # Feature Flags
//!
//! - `tracing`: emit a `menu_layout.pass` span and selection events.

pub mod candidate;
pub mod compact;
pub mod config;
pub mod diagnostics;
pub mod position;
pub mod selector;
pub mod standard;
pub mod strategy;

pub use candidate::GeometryCandidate;
pub use config::MenuLayoutConfig;
pub use diagnostics::{CandidateReport, explain, render_report};
pub use position::{MenuAnchor, MenuPosition, VerticalEdge};
pub use selector::{Selection, SelectionReason, select, select_best_fit};
pub use strategy::{
    CandidateSet, FormFactor, MenuLayout, MenuLayoutInput, MenuLayoutStrategy, Orientation,
    layout_menu,
};

pub use ctxmenu_core::geometry::{Alignment, Constraints, Offset, Rect, Size};
