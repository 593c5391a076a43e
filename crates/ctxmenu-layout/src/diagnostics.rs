#![forbid(unsafe_code)]

//! Candidate introspection for debugging placements.
//!
//! [`explain`] reports, for every candidate of a [`CandidateSet`], how it
//! relates to the target: whether it fits as is, whether it is small enough
//! to fit once moved, how far the preview would travel, and which candidate
//! the selector ends up choosing.
//!
//! # Usage
//!
//! ```ignore
//! use ctxmenu_layout::{diagnostics, MenuLayoutStrategy};
//!
//! let set = strategy.candidates(&input, &config, measure);
//! let report = diagnostics::explain(&set, input.previous_layout_id, config.epsilon);
//! eprintln!("{}", diagnostics::render_report(&report));
//! ```

use std::fmt::Write as _;

use ctxmenu_core::geometry::Rect;
use serde::Serialize;

use crate::selector::{self, SelectionReason};
use crate::strategy::CandidateSet;

/// What the selector sees for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateReport {
    /// Position in preference order.
    pub index: usize,
    pub id: String,
    /// Union of preview and menu before any adjustment.
    pub bounds: Rect,
    /// Lies inside the target as is.
    pub fits: bool,
    /// Small enough to fit once moved.
    pub could_fit: bool,
    /// Squared distance the preview center would move to fit.
    pub displacement: f64,
    /// Matches the continuity hint.
    pub matches_previous: bool,
    /// Set on the chosen candidate only.
    pub selected: Option<SelectionReason>,
}

/// Report on every candidate of `set`, in order.
pub fn explain(set: &CandidateSet, previous_id: Option<&str>, eps: f64) -> Vec<CandidateReport> {
    let target = set.target();
    let selection = selector::select(&target, set.candidates(), previous_id, eps);

    set.candidates()
        .iter()
        .enumerate()
        .map(|(index, candidate)| CandidateReport {
            index,
            id: candidate.id.to_string(),
            bounds: candidate.bounds(),
            fits: candidate.fits_into(&target, eps),
            could_fit: candidate.could_fit_into(&target, eps),
            displacement: candidate.displacement_into(&target),
            matches_previous: previous_id.is_some_and(|id| candidate.id == id),
            selected: selection
                .as_ref()
                .filter(|s| s.index == index)
                .map(|s| s.reason),
        })
        .collect()
}

/// Format a report as a fixed-width table.
pub fn render_report(reports: &[CandidateReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>2}  {:<24} {:>28}  {:<4} {:<5} {:>10}  {}",
        "#", "id", "bounds", "fits", "could", "displ", "selected"
    );
    for r in reports {
        let bounds = format!(
            "{:.1},{:.1} {:.1}x{:.1}",
            r.bounds.x, r.bounds.y, r.bounds.width, r.bounds.height
        );
        let selected = match r.selected {
            Some(reason) => reason.as_str(),
            None if r.matches_previous => "(previous)",
            None => "",
        };
        let _ = writeln!(
            out,
            "{:>2}  {:<24} {:>28}  {:<4} {:<5} {:>10.2}  {}",
            r.index,
            r.id,
            bounds,
            yes_no(r.fits),
            yes_no(r.could_fit),
            r.displacement,
            selected
        );
    }
    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
