#![forbid(unsafe_code)]

//! One possible placement of preview and menu.
//!
//! A [`GeometryCandidate`] pairs a preview rectangle with a menu size and a
//! [`MenuPosition`] rule. Everything else (menu rectangle, combined bounds,
//! fit tests) is derived on demand.
//!
//! # Invariants
//!
//! 1. `menu_rect() == menu_position.menu_rect(preview_rect, menu_size)`.
//! 2. `bounds()` is the union of `preview_rect` and `menu_rect()`.
//! 3. `fit_into(r)` never changes `id`, `menu_size` or `menu_alignment`.
//! 4. After `fit_into(r)` the menu rectangle has moved by exactly
//!    [`translation_into`](GeometryCandidate::translation_into)`(r)`.

use std::borrow::Cow;

use ctxmenu_core::geometry::{Alignment, Offset, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::position::MenuPosition;

/// A candidate placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCandidate {
    /// Stable name of the placement kind, e.g. `"vertical-bottom-left"`.
    pub id: Cow<'static, str>,
    pub preview_rect: Rect,
    pub menu_size: Size,
    pub menu_position: MenuPosition,
    /// Which part of the menu touches the preview. Rendering only.
    pub menu_alignment: Alignment,
}

impl GeometryCandidate {
    /// Create a candidate.
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        preview_rect: Rect,
        menu_size: Size,
        menu_position: MenuPosition,
        menu_alignment: Alignment,
    ) -> Self {
        Self {
            id: id.into(),
            preview_rect,
            menu_size,
            menu_position,
            menu_alignment,
        }
    }

    /// The menu rectangle for the current preview rectangle.
    #[inline]
    pub fn menu_rect(&self) -> Rect {
        self.menu_position
            .menu_rect(&self.preview_rect, self.menu_size)
    }

    /// Smallest rectangle containing both preview and menu.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.preview_rect.union(&self.menu_rect())
    }

    /// Whether the whole placement lies inside `rect`, give or take `eps`.
    #[inline]
    pub fn fits_into(&self, rect: &Rect, eps: f64) -> bool {
        rect.contains_rect_eps(&self.bounds(), eps)
    }

    /// Whether the placement is small enough to fit in `rect` if it were
    /// moved, give or take `eps`.
    #[inline]
    pub fn could_fit_into(&self, rect: &Rect, eps: f64) -> bool {
        self.bounds().size().fits_within(rect.size(), eps)
    }

    /// Whether the menu sits beside the preview rather than above or below
    /// it (the horizontal spans don't overlap).
    #[inline]
    pub fn is_horizontally_detached(&self) -> bool {
        self.menu_rect().horizontal_overlap(&self.preview_rect) <= 0.0
    }

    /// Minimal translation that pushes `bounds()` inside `rect`, computed
    /// independently per axis. The left/top edge wins when the bounds are
    /// larger than `rect`.
    pub fn translation_into(&self, rect: &Rect) -> Offset {
        translation_to_fit(&self.bounds(), rect)
    }

    /// Move the placement so that it fits inside `rect`.
    ///
    /// The preview rectangle is translated and the menu follows through its
    /// position rule. When the menu is beside the preview, the preview keeps
    /// its vertical position unless it doesn't fit `rect` on its own; the
    /// menu alone absorbs the rest of the vertical shift.
    #[must_use]
    pub fn fit_into(&self, rect: &Rect) -> Self {
        let offset = self.translation_into(rect);
        let mut fitted = self.clone();
        fitted.preview_rect = self.preview_rect.shift(offset);

        if fitted.is_horizontally_detached() {
            let preview_dy = translation_to_fit(&self.preview_rect, rect).dy;
            let correction = Offset::new(0.0, preview_dy - offset.dy);
            fitted.preview_rect = fitted.preview_rect.shift(correction);
            fitted.menu_position = fitted.menu_position.nudged(-correction);
        }
        fitted
    }

    /// Squared distance the preview center travels under `fit_into(rect)`.
    pub fn displacement_into(&self, rect: &Rect) -> f64 {
        let fitted = self.fit_into(rect);
        self.preview_rect
            .center()
            .distance_squared(fitted.preview_rect.center())
    }
}

fn translation_to_fit(bounds: &Rect, rect: &Rect) -> Offset {
    let dx = if bounds.left() < rect.left() {
        rect.left() - bounds.left()
    } else if bounds.right() > rect.right() {
        rect.right() - bounds.right()
    } else {
        0.0
    };
    let dy = if bounds.top() < rect.top() {
        rect.top() - bounds.top()
    } else if bounds.bottom() > rect.bottom() {
        rect.bottom() - bounds.bottom()
    } else {
        0.0
    };
    Offset::new(dx, dy)
}
