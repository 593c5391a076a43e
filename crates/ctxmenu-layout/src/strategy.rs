#![forbid(unsafe_code)]

//! Strategy choice and the layout entry point.
//!
//! A layout pass has two phases: a strategy builds an ordered
//! [`CandidateSet`], then the selector resolves it into a [`MenuLayout`].
//! [`layout_menu`] runs both after picking the strategy for the viewport.
//!
//! # Usage
//!
//! ```ignore
//! use ctxmenu_layout::{layout_menu, MenuLayoutConfig, MenuLayoutInput};
//!
//! let input = MenuLayoutInput::new(viewport, anchor, Size::new(300.0, 200.0))
//!     .previous_layout_id(last.as_deref());
//! let layout = layout_menu(&input, &MenuLayoutConfig::default(), |c| menu.measure(c));
//! last = Some(layout.layout_id.to_string());
//! ```
//!
//! # Invariants
//!
//! 1. Strategy choice depends only on the viewport size and the phone
//!    threshold.
//! 2. The measure callback is called exactly once per pass.
//! 3. A [`CandidateSet`] built by a strategy is never empty.

use std::borrow::Cow;

use ctxmenu_core::geometry::{Alignment, Constraints, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::candidate::GeometryCandidate;
use crate::config::MenuLayoutConfig;
use crate::position::MenuPosition;
use crate::selector::{self, SelectionReason};
use crate::{compact, standard};

/// Inputs of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuLayoutInput<'a> {
    /// Viewport.
    pub bounds: Rect,
    /// The item the menu was opened on.
    pub primary_item: Rect,
    /// Desired preview size, before shrinking.
    pub menu_preview_size: Size,
    /// Drag-to-resize fraction in `[0, 1]`.
    pub menu_drag_offset: f64,
    /// `layout_id` of the previous pass, if any.
    pub previous_layout_id: Option<&'a str>,
}

impl<'a> MenuLayoutInput<'a> {
    /// Input with no drag and no previous layout.
    pub fn new(bounds: Rect, primary_item: Rect, menu_preview_size: Size) -> Self {
        Self {
            bounds,
            primary_item,
            menu_preview_size,
            menu_drag_offset: 0.0,
            previous_layout_id: None,
        }
    }

    /// Set the drag offset.
    #[must_use]
    pub fn drag_offset(mut self, offset: f64) -> Self {
        self.menu_drag_offset = offset;
        self
    }

    /// Set the continuity hint.
    #[must_use]
    pub fn previous_layout_id(mut self, id: Option<&'a str>) -> Self {
        self.previous_layout_id = id;
        self
    }
}

/// The ordered candidates of one pass and what to resolve them against.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet {
    pub(crate) candidates: Vec<GeometryCandidate>,
    pub(crate) target: Rect,
    pub(crate) menu_drag_extent: f64,
    pub(crate) can_scroll_menu: bool,
}

impl CandidateSet {
    /// Candidates in preference order.
    pub fn candidates(&self) -> &[GeometryCandidate] {
        &self.candidates
    }

    /// Rectangle the selector fits into.
    pub fn target(&self) -> Rect {
        self.target
    }

    pub fn menu_drag_extent(&self) -> f64 {
        self.menu_drag_extent
    }

    pub fn can_scroll_menu(&self) -> bool {
        self.can_scroll_menu
    }

    /// Run the selector and package the result.
    pub fn resolve(&self, previous_id: Option<&str>, eps: f64) -> MenuLayout {
        // Both strategies always emit at least one candidate.
        let selection = selector::select(&self.target, &self.candidates, previous_id, eps)
            .expect("candidate set is never empty");

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "menu_layout.select",
            id = %selection.candidate.id,
            index = selection.index,
            reason = selection.reason.as_str(),
            candidates = self.candidates.len()
        );

        let GeometryCandidate {
            id,
            preview_rect,
            menu_size,
            menu_position,
            menu_alignment,
        } = selection.candidate;

        MenuLayout {
            preview_rect,
            menu_position,
            menu_size,
            menu_alignment,
            menu_drag_extent: self.menu_drag_extent,
            can_scroll_menu: self.can_scroll_menu,
            layout_id: id,
            selection: selection.reason,
        }
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuLayout {
    pub preview_rect: Rect,
    /// Rule placing the menu relative to `preview_rect`.
    pub menu_position: MenuPosition,
    pub menu_size: Size,
    pub menu_alignment: Alignment,
    /// How far the menu may be dragged over the preview.
    pub menu_drag_extent: f64,
    pub can_scroll_menu: bool,
    /// Feed back as `previous_layout_id` on the next pass.
    pub layout_id: Cow<'static, str>,
    pub selection: SelectionReason,
}

impl MenuLayout {
    /// The menu rectangle.
    #[inline]
    pub fn menu_rect(&self) -> Rect {
        self.menu_position
            .menu_rect(&self.preview_rect, self.menu_size)
    }
}

/// Device class derived from the viewport's shortest side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormFactor {
    Phone,
    /// Anything at or above the phone threshold.
    Tablet,
}

impl FormFactor {
    /// Classify a viewport against `phone_shortest_side`.
    #[must_use]
    pub fn classify(viewport: Size, phone_shortest_side: f64) -> Self {
        if viewport.shortest_side() < phone_shortest_side {
            Self::Phone
        } else {
            Self::Tablet
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Strictly taller than wide.
    Portrait,
    Landscape,
}

impl Orientation {
    #[must_use]
    pub fn of(viewport: Size) -> Self {
        if viewport.is_taller_than_wide() {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }
}

/// How candidates are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuLayoutStrategy {
    /// Preview centered on the anchor, menu attached to a corner.
    Standard { allow_vertical_attachment: bool },
    /// Portrait phones: menu below or above, clamped to the padded viewport.
    CompactPortrait,
}

impl MenuLayoutStrategy {
    /// Pick the strategy for a viewport.
    #[must_use]
    pub fn choose(viewport: Size, config: &MenuLayoutConfig) -> Self {
        match (
            FormFactor::classify(viewport, config.phone_shortest_side),
            Orientation::of(viewport),
        ) {
            (FormFactor::Phone, Orientation::Portrait) => Self::CompactPortrait,
            (FormFactor::Phone, Orientation::Landscape) => Self::Standard {
                allow_vertical_attachment: false,
            },
            (FormFactor::Tablet, _) => Self::Standard {
                allow_vertical_attachment: true,
            },
        }
    }

    /// Short label for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard {
                allow_vertical_attachment: true,
            } => "standard",
            Self::Standard {
                allow_vertical_attachment: false,
            } => "standard_horizontal",
            Self::CompactPortrait => "compact_portrait",
        }
    }

    /// Build the ordered candidates without selecting.
    pub fn candidates<F>(
        self,
        input: &MenuLayoutInput<'_>,
        config: &MenuLayoutConfig,
        measure: F,
    ) -> CandidateSet
    where
        F: FnOnce(Constraints) -> Size,
    {
        match self {
            Self::Standard {
                allow_vertical_attachment,
            } => standard::candidates(input, config, allow_vertical_attachment, measure),
            Self::CompactPortrait => compact::candidates(input, config, measure),
        }
    }

    /// Build and select.
    pub fn layout<F>(
        self,
        input: &MenuLayoutInput<'_>,
        config: &MenuLayoutConfig,
        measure: F,
    ) -> MenuLayout
    where
        F: FnOnce(Constraints) -> Size,
    {
        self.candidates(input, config, measure)
            .resolve(input.previous_layout_id, config.epsilon)
    }
}

/// Lay out a preview and its menu for the viewport in `input.bounds`.
///
/// `measure` receives loose constraints and returns the menu's size.
pub fn layout_menu<F>(input: &MenuLayoutInput<'_>, config: &MenuLayoutConfig, measure: F) -> MenuLayout
where
    F: FnOnce(Constraints) -> Size,
{
    #[cfg(feature = "tracing")]
    let pass_span = tracing::debug_span!(
        "menu_layout.pass",
        viewport_width = input.bounds.width,
        viewport_height = input.bounds.height,
        has_previous = input.previous_layout_id.is_some(),
        layout_id = tracing::field::Empty
    );
    #[cfg(feature = "tracing")]
    let _pass_guard = pass_span.enter();

    let strategy = MenuLayoutStrategy::choose(input.bounds.size(), config);

    #[cfg(feature = "tracing")]
    tracing::debug!(message = "menu_layout.strategy", strategy = strategy.name());

    let layout = strategy.layout(input, config, measure);

    #[cfg(feature = "tracing")]
    pass_span.record("layout_id", layout.layout_id.as_ref());

    layout
}
