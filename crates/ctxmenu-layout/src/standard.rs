#![forbid(unsafe_code)]

//! Standard strategy for tablets, desktops and landscape phones.
//!
//! The preview is centered on the anchor and the menu is attached to one of
//! its corners, either above/below (vertical attachment) or beside it
//! (horizontal attachment). Eight candidates are built; the order depends on
//! the preview's shape and on whether vertical attachment is allowed.

use ctxmenu_core::geometry::{Alignment, Constraints, Offset, Rect, Size};

use crate::candidate::GeometryCandidate;
use crate::config::MenuLayoutConfig;
use crate::position::MenuPosition;
use crate::strategy::{CandidateSet, MenuLayoutInput};

/// A corner attachment: which preview point the menu's `menu_point` sits
/// on, and which direction the spacing pushes the menu.
struct Attachment {
    id: &'static str,
    preview_point: Alignment,
    menu_point: Alignment,
    direction: (f64, f64),
}

const VERTICAL: [Attachment; 4] = [
    Attachment {
        id: "vertical-bottom-left",
        preview_point: Alignment::BottomLeft,
        menu_point: Alignment::TopLeft,
        direction: (0.0, 1.0),
    },
    Attachment {
        id: "vertical-bottom-right",
        preview_point: Alignment::BottomRight,
        menu_point: Alignment::TopRight,
        direction: (0.0, 1.0),
    },
    Attachment {
        id: "vertical-top-left",
        preview_point: Alignment::TopLeft,
        menu_point: Alignment::BottomLeft,
        direction: (0.0, -1.0),
    },
    Attachment {
        id: "vertical-top-right",
        preview_point: Alignment::TopRight,
        menu_point: Alignment::BottomRight,
        direction: (0.0, -1.0),
    },
];

const HORIZONTAL: [Attachment; 4] = [
    Attachment {
        id: "horizontal-right-top",
        preview_point: Alignment::TopRight,
        menu_point: Alignment::TopLeft,
        direction: (1.0, 0.0),
    },
    Attachment {
        id: "horizontal-right-bottom",
        preview_point: Alignment::BottomRight,
        menu_point: Alignment::BottomLeft,
        direction: (1.0, 0.0),
    },
    Attachment {
        id: "horizontal-left-top",
        preview_point: Alignment::TopLeft,
        menu_point: Alignment::TopRight,
        direction: (-1.0, 0.0),
    },
    Attachment {
        id: "horizontal-left-bottom",
        preview_point: Alignment::BottomLeft,
        menu_point: Alignment::BottomRight,
        direction: (-1.0, 0.0),
    },
];

impl Attachment {
    fn candidate(&self, preview_rect: Rect, menu_size: Size, spacing: f64) -> GeometryCandidate {
        let gap = Offset::new(self.direction.0 * spacing, self.direction.1 * spacing);
        GeometryCandidate::new(
            self.id,
            preview_rect,
            menu_size,
            MenuPosition::attached(self.preview_point, self.menu_point, gap),
            self.menu_point,
        )
    }
}

/// Preview size for the standard strategy: the requested size shrunk so the
/// preview and a side-attached menu fit next to each other.
pub fn preview_size(requested: Size, viewport: Size, menu_size: Size, spacing: f64) -> Size {
    requested.fit_into(Size::new(
        viewport.width - menu_size.width - spacing,
        viewport.height,
    ))
}

/// Build the ordered candidate list.
pub fn candidates<F>(
    input: &MenuLayoutInput<'_>,
    config: &MenuLayoutConfig,
    allow_vertical_attachment: bool,
    measure: F,
) -> CandidateSet
where
    F: FnOnce(Constraints) -> Size,
{
    let viewport = input.bounds;
    let spacing = config.spacing;
    let menu_size = measure(Constraints::loose(viewport.size()));
    let preview = preview_size(
        input.menu_preview_size,
        viewport.size(),
        menu_size,
        spacing,
    );
    let preview_rect = Rect::from_center(input.primary_item.center(), preview);

    let build = |group: &[Attachment]| {
        group
            .iter()
            .map(|a| a.candidate(preview_rect, menu_size, spacing))
            .collect::<Vec<_>>()
    };

    let candidates = if !allow_vertical_attachment {
        build(&HORIZONTAL)
    } else if input.menu_preview_size.is_wider_than_tall() {
        let mut list = build(&VERTICAL);
        list.extend(build(&HORIZONTAL));
        list
    } else {
        let mut list = build(&HORIZONTAL);
        list.extend(build(&VERTICAL));
        list
    };

    CandidateSet {
        candidates,
        target: viewport,
        menu_drag_extent: 0.0,
        can_scroll_menu: true,
    }
}
