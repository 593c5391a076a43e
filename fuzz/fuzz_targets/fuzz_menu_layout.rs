#![no_main]

use arbitrary::Arbitrary;
use ctxmenu_layout::{
    MenuLayoutConfig, MenuLayoutInput, MenuLayoutStrategy, Rect, SelectionReason, Size, explain,
    layout_menu,
};
use libfuzzer_sys::fuzz_target;

const EPS: f64 = 0.001;

#[derive(Debug, Arbitrary)]
struct LayoutCase {
    viewport: (u16, u16),
    anchor: (u16, u16, u8, u8),
    preview: (u16, u16),
    menu: (u16, u16),
    drag: u8,
    use_previous: bool,
}

// Geometry comes from integers so every input is finite and non-negative.
fuzz_target!(|case: LayoutCase| {
    let vw = f64::from(case.viewport.0 % 4000) + 1.0;
    let vh = f64::from(case.viewport.1 % 4000) + 1.0;
    let viewport = Rect::new(0.0, 0.0, vw, vh);
    let anchor = Rect::new(
        f64::from(case.anchor.0) % vw,
        f64::from(case.anchor.1) % vh,
        f64::from(case.anchor.2),
        f64::from(case.anchor.3),
    );
    let preview = Size::new(f64::from(case.preview.0), f64::from(case.preview.1));
    let menu = Size::new(f64::from(case.menu.0), f64::from(case.menu.1));
    let drag = f64::from(case.drag) / 255.0;
    let config = MenuLayoutConfig::default();

    let input = MenuLayoutInput::new(viewport, anchor, preview).drag_offset(drag);
    let mut calls = 0;
    let layout = layout_menu(&input, &config, |c| {
        calls += 1;
        c.constrain(menu)
    });

    // Post-conditions that must always hold:
    assert_eq!(calls, 1, "measure called more than once");
    assert!(layout.preview_rect.is_finite(), "non-finite preview");
    assert!(layout.menu_rect().is_finite(), "non-finite menu");
    assert!(layout.preview_rect.width <= preview.width + EPS, "preview grew");
    assert!(layout.preview_rect.height <= preview.height + EPS, "preview grew");
    assert!(layout.can_scroll_menu);
    assert_eq!(layout.menu_drag_extent, 0.0);
    if layout.selection == SelectionReason::FirstFit {
        let bounds = layout.preview_rect.union(&layout.menu_rect());
        assert!(viewport.contains_rect_eps(&bounds, EPS), "first fit escaped");
    }

    // Re-running with the chosen id keeps the same placement kind.
    if case.use_previous {
        let again = layout_menu(
            &input.previous_layout_id(Some(layout.layout_id.as_ref())),
            &config,
            |c| c.constrain(menu),
        );
        assert_eq!(again.layout_id, layout.layout_id);
        assert_eq!(again.selection, SelectionReason::Continuity);
    }

    let strategy = MenuLayoutStrategy::choose(viewport.size(), &config);
    let set = strategy.candidates(&input, &config, |c| c.constrain(menu));
    let report = explain(&set, None, EPS);
    assert_eq!(report.len(), set.candidates().len());
    assert_eq!(
        report.iter().filter(|r| r.selected.is_some()).count(),
        1,
        "exactly one selected candidate"
    );
});
