#![forbid(unsafe_code)]

//! Menu position rules.
//!
//! A [`MenuPosition`] says where the menu goes *relative to* a preview
//! rectangle. It is evaluated against whatever preview rectangle the caller
//! currently has, so translating the preview translates the menu with it.
//! The only exception is [`MenuAnchor::CenteredOn`], whose horizontal
//! coordinate is absolute (the menu is centered on the viewport, not on the
//! preview).
//!
//! # Invariants
//!
//! 1. `evaluate(preview.shift(o), size) == evaluate(preview, size) + o` for
//!    [`MenuAnchor::Attached`].
//! 2. For [`MenuAnchor::CenteredOn`] only the vertical component follows the
//!    preview.
//! 3. The accumulated `nudge` is added last, after the anchor rule.

use ctxmenu_core::geometry::{Alignment, Offset, Rect, Size};
use serde::{Deserialize, Serialize};

/// Which horizontal edge of the preview a centered menu hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalEdge {
    /// Menu sits above the preview.
    Top,
    /// Menu sits below the preview.
    Bottom,
}

/// The rule that places the menu's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuAnchor {
    /// Put the menu's `menu_point` on the preview's `preview_point`, then
    /// move it by `gap`.
    Attached {
        preview_point: Alignment,
        menu_point: Alignment,
        gap: Offset,
    },
    /// Center the menu horizontally on the absolute `center_x` and hang it
    /// `spacing` away from the given preview edge.
    CenteredOn {
        center_x: f64,
        edge: VerticalEdge,
        spacing: f64,
    },
}

/// Where the menu goes relative to a preview rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MenuPosition {
    anchor: MenuAnchor,
    #[serde(default)]
    nudge: Offset,
}

impl MenuPosition {
    /// A menu glued to a point on the preview.
    pub const fn attached(preview_point: Alignment, menu_point: Alignment, gap: Offset) -> Self {
        Self {
            anchor: MenuAnchor::Attached {
                preview_point,
                menu_point,
                gap,
            },
            nudge: Offset::ZERO,
        }
    }

    /// A menu centered on `center_x`, above or below the preview.
    pub const fn centered_on(center_x: f64, edge: VerticalEdge, spacing: f64) -> Self {
        Self {
            anchor: MenuAnchor::CenteredOn {
                center_x,
                edge,
                spacing,
            },
            nudge: Offset::ZERO,
        }
    }

    /// The anchor rule.
    #[inline]
    pub const fn anchor(&self) -> MenuAnchor {
        self.anchor
    }

    /// Extra translation applied after the anchor rule.
    #[inline]
    pub const fn nudge(&self) -> Offset {
        self.nudge
    }

    /// Return a copy with `by` added to the nudge.
    #[must_use]
    pub fn nudged(self, by: Offset) -> Self {
        Self {
            nudge: self.nudge + by,
            ..self
        }
    }

    /// Top-left corner of a menu of `menu_size` for the given preview.
    pub fn evaluate(&self, preview: &Rect, menu_size: Size) -> Offset {
        let base = match self.anchor {
            MenuAnchor::Attached {
                preview_point,
                menu_point,
                gap,
            } => preview_point.along(preview) + gap - menu_point.offset_in(menu_size),
            MenuAnchor::CenteredOn {
                center_x,
                edge,
                spacing,
            } => {
                let x = center_x - menu_size.width / 2.0;
                let y = match edge {
                    VerticalEdge::Bottom => preview.bottom() + spacing,
                    VerticalEdge::Top => preview.top() - spacing - menu_size.height,
                };
                Offset::new(x, y)
            }
        };
        base + self.nudge
    }

    /// The full menu rectangle for the given preview.
    #[inline]
    pub fn menu_rect(&self, preview: &Rect, menu_size: Size) -> Rect {
        Rect::from_origin_size(self.evaluate(preview, menu_size), menu_size)
    }
}
