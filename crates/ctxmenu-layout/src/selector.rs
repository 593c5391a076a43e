#![forbid(unsafe_code)]

//! Best-fit selection over an ordered candidate list.
//!
//! The list order encodes preference. Selection runs in priority order:
//!
//! 1. **Continuity**: a candidate whose id matches the previous layout id is
//!    returned (moved into the target), even if another candidate fits better.
//! 2. **First fit**: the first candidate that already fits is returned
//!    untouched.
//! 3. **Nearest fit**: among candidates small enough to fit, the one whose
//!    preview moves least when pushed inside wins (ties go to list order).
//! 4. **Fallback**: otherwise the first candidate, unmodified. It may
//!    overflow the target.
//!
//! # Failure Modes
//!
//! None: an empty list yields `None` from [`select`]; the strategies never
//! build one.

use serde::{Deserialize, Serialize};

use ctxmenu_core::geometry::Rect;

use crate::candidate::GeometryCandidate;

/// Which rule produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionReason {
    /// Matched the previous layout id.
    Continuity,
    /// First candidate that fit without adjustment.
    FirstFit,
    /// Smallest displacement among candidates that fit once moved.
    NearestFit,
    /// Nothing fits; first candidate returned as-is.
    Fallback,
}

impl SelectionReason {
    /// Short label for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Continuity => "continuity",
            Self::FirstFit => "first_fit",
            Self::NearestFit => "nearest_fit",
            Self::Fallback => "fallback",
        }
    }
}

/// Result of a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The chosen candidate, possibly moved into the target.
    pub candidate: GeometryCandidate,
    /// Position of the chosen candidate in the input list.
    pub index: usize,
    pub reason: SelectionReason,
}

/// Pick one candidate for `target`.
///
/// Returns `None` only when `candidates` is empty.
pub fn select(
    target: &Rect,
    candidates: &[GeometryCandidate],
    previous_id: Option<&str>,
    eps: f64,
) -> Option<Selection> {
    let first = candidates.first()?;

    if let Some(previous_id) = previous_id
        && let Some((index, candidate)) = candidates
            .iter()
            .enumerate()
            .find(|(_, c)| c.id == previous_id)
    {
        return Some(Selection {
            candidate: candidate.fit_into(target),
            index,
            reason: SelectionReason::Continuity,
        });
    }

    if let Some((index, candidate)) = candidates
        .iter()
        .enumerate()
        .find(|(_, c)| c.fits_into(target, eps))
    {
        return Some(Selection {
            candidate: candidate.clone(),
            index,
            reason: SelectionReason::FirstFit,
        });
    }

    let mut best: Option<(usize, GeometryCandidate, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        if !candidate.could_fit_into(target, eps) {
            continue;
        }
        let fitted = candidate.fit_into(target);
        let displacement = candidate
            .preview_rect
            .center()
            .distance_squared(fitted.preview_rect.center());
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "menu_layout.candidate",
            id = %candidate.id,
            index,
            displacement
        );
        let better = match &best {
            None => true,
            Some((_, _, best_displacement)) => displacement < best_displacement - eps,
        };
        if better {
            best = Some((index, fitted, displacement));
        }
    }

    Some(match best {
        Some((index, candidate, _)) => Selection {
            candidate,
            index,
            reason: SelectionReason::NearestFit,
        },
        None => Selection {
            candidate: first.clone(),
            index: 0,
            reason: SelectionReason::Fallback,
        },
    })
}

/// Pick one candidate for `target`, discarding the selection metadata.
pub fn select_best_fit(
    target: &Rect,
    candidates: &[GeometryCandidate],
    previous_id: Option<&str>,
    eps: f64,
) -> Option<GeometryCandidate> {
    select(target, candidates, previous_id, eps).map(|selection| selection.candidate)
}
