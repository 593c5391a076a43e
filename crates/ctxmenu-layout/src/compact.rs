#![forbid(unsafe_code)]

//! Compact strategy for portrait phones.
//!
//! The preview stays vertically centered on the anchor and is only clamped
//! horizontally. The menu goes below or above it, aligned to the preview's
//! left or right edge when that keeps it inside the padded viewport, with a
//! viewport-centered menu as the guaranteed fallback on each side.
//!
//! # Drag to resize
//!
//! The input carries a drag offset meant to let the user pull the menu up
//! over the preview. The overflow that drag would consume is currently
//! pinned to zero, so the drag offset has no effect on the geometry and the
//! menu is always scrollable.

use ctxmenu_core::geometry::{Alignment, Constraints, Offset, Rect, Size};

use crate::candidate::GeometryCandidate;
use crate::config::MenuLayoutConfig;
use crate::position::{MenuPosition, VerticalEdge};
use crate::strategy::{CandidateSet, MenuLayoutInput};

/// Smallest preview the compact strategy reserves room for, as a fraction of
/// the viewport height.
const MIN_PREVIEW_HEIGHT_FACTOR: f64 = 0.25;

/// Largest preview height, as a fraction of the viewport height.
const MAX_PREVIEW_HEIGHT_FACTOR: f64 = 0.75;

/// Pin `rect` inside `bounds` minus `padding` on the left and right.
///
/// The left edge wins when `rect` is wider than the padded bounds. The
/// vertical position is never touched.
pub fn clamp_horizontally(rect: Rect, bounds: &Rect, padding: f64) -> Rect {
    let lane = bounds.deflate_horizontal(padding);
    let (min_x, max_x) = (lane.left(), lane.right());
    if rect.left() < min_x {
        Rect::new(min_x, rect.y, rect.width, rect.height)
    } else if rect.right() > max_x {
        Rect::new(max_x - rect.width, rect.y, rect.width, rect.height)
    } else {
        rect
    }
}

/// Whether the menu should go below the preview.
///
/// Below wins unless it lacks room for the menu, above has more room than
/// below, and above does have room.
pub fn prefers_bottom(preview: &Rect, bounds: &Rect, needed: f64) -> bool {
    let space_above = preview.top() - bounds.top();
    let space_below = bounds.bottom() - preview.bottom();
    space_below >= needed || space_below >= space_above || space_above < needed
}

/// Overflow the drag gesture may consume. Drag-to-resize is disabled.
fn drag_overflow() -> f64 {
    0.0
}

fn side_candidates(
    edge: VerticalEdge,
    preview_rect: Rect,
    menu_size: Size,
    bounds: &Rect,
    config: &MenuLayoutConfig,
) -> Vec<GeometryCandidate> {
    let spacing = config.spacing;
    let lane = bounds.deflate_horizontal(config.compact_padding);
    let eps = config.epsilon;
    let within =
        |left: f64| left >= lane.left() - eps && left + menu_size.width <= lane.right() + eps;

    let (prefix, gap, preview_left, preview_right, menu_left, menu_right, menu_center) =
        match edge {
            VerticalEdge::Bottom => (
                "bottom",
                Offset::new(0.0, spacing),
                Alignment::BottomLeft,
                Alignment::BottomRight,
                Alignment::TopLeft,
                Alignment::TopRight,
                Alignment::TopCenter,
            ),
            VerticalEdge::Top => (
                "top",
                Offset::new(0.0, -spacing),
                Alignment::TopLeft,
                Alignment::TopRight,
                Alignment::BottomLeft,
                Alignment::BottomRight,
                Alignment::BottomCenter,
            ),
        };

    let mut out = Vec::with_capacity(3);
    if within(preview_rect.left()) {
        out.push(GeometryCandidate::new(
            format!("{prefix}-left"),
            preview_rect,
            menu_size,
            MenuPosition::attached(preview_left, menu_left, gap),
            menu_left,
        ));
    }
    if within(preview_rect.right() - menu_size.width) {
        out.push(GeometryCandidate::new(
            format!("{prefix}-right"),
            preview_rect,
            menu_size,
            MenuPosition::attached(preview_right, menu_right, gap),
            menu_right,
        ));
    }
    out.push(GeometryCandidate::new(
        format!("{prefix}-center"),
        preview_rect,
        menu_size,
        MenuPosition::centered_on(bounds.center().dx, edge, spacing),
        menu_center,
    ));
    out
}

/// Build the ordered candidate list.
pub fn candidates<F>(
    input: &MenuLayoutInput<'_>,
    config: &MenuLayoutConfig,
    measure: F,
) -> CandidateSet
where
    F: FnOnce(Constraints) -> Size,
{
    let bounds = input.bounds;
    let spacing = config.spacing;
    let padding = config.compact_padding;
    let requested = input.menu_preview_size;

    let min_preview = requested.fit_into(Size::new(
        bounds.width,
        bounds.height * MIN_PREVIEW_HEIGHT_FACTOR,
    ));
    let max_preview = requested.fit_into(Size::new(
        bounds.width,
        bounds.height * MAX_PREVIEW_HEIGHT_FACTOR,
    ));

    let menu_size = measure(Constraints::loose(Size::new(
        bounds.width - 2.0 * padding,
        bounds.height - min_preview.height - spacing,
    )));

    let overflow = drag_overflow();
    let preview_size = requested.fit_into(Size::new(
        bounds.width,
        max_preview.height - input.menu_drag_offset * overflow,
    ));

    let preview_rect = clamp_horizontally(
        Rect::from_center(input.primary_item.center(), preview_size),
        &bounds,
        padding,
    );

    let below = side_candidates(
        VerticalEdge::Bottom,
        preview_rect,
        menu_size,
        &bounds,
        config,
    );
    let above = side_candidates(VerticalEdge::Top, preview_rect, menu_size, &bounds, config);

    let candidates = if prefers_bottom(&preview_rect, &bounds, menu_size.height + spacing) {
        below.into_iter().chain(above).collect()
    } else {
        above.into_iter().chain(below).collect()
    };

    CandidateSet {
        candidates,
        target: Rect::new(bounds.x, bounds.y, bounds.width, bounds.height + overflow),
        menu_drag_extent: overflow,
        can_scroll_menu: overflow == 0.0 || input.menu_drag_offset == 1.0,
    }
}
