//! Validated entry point behavior through the public facade.

use ctxmenu::{
    Error, InputError, MeasureError, MenuLayout, MenuLayoutConfig, MenuLayoutInput, Offset, Rect,
    SelectionReason, Size, layout_menu, try_layout_menu,
};
use proptest::prelude::*;

fn phone_input() -> MenuLayoutInput<'static> {
    MenuLayoutInput::new(
        Rect::new(0.0, 0.0, 400.0, 800.0),
        Rect::new(150.0, 380.0, 50.0, 40.0),
        Size::new(200.0, 150.0),
    )
}

#[test]
fn compact_scenario_through_facade() {
    let layout = try_layout_menu(&phone_input(), &MenuLayoutConfig::default(), |_| {
        Size::new(180.0, 60.0)
    })
    .expect("valid input");
    assert_eq!(layout.layout_id, "bottom-left");
    assert_eq!(layout.selection, SelectionReason::FirstFit);
    assert_eq!(layout.preview_rect.center(), Offset::new(175.0, 400.0));
}

#[test]
fn negative_preview_is_rejected() {
    let input = MenuLayoutInput::new(
        Rect::new(0.0, 0.0, 400.0, 800.0),
        Rect::new(150.0, 380.0, 50.0, 40.0),
        Size::new(-1.0, 150.0),
    );
    let err = try_layout_menu(&input, &MenuLayoutConfig::default(), |_| {
        Size::new(10.0, 10.0)
    })
    .expect_err("negative preview");
    assert_eq!(
        err,
        Error::Input(InputError::NegativeSize {
            field: "menu_preview_size"
        })
    );
    assert_eq!(err.field(), Some("menu_preview_size"));
}

#[test]
fn negative_anchor_is_rejected() {
    let input = MenuLayoutInput::new(
        Rect::new(0.0, 0.0, 400.0, 800.0),
        Rect::new(150.0, 380.0, -50.0, 40.0),
        Size::new(200.0, 150.0),
    );
    let err = try_layout_menu(&input, &MenuLayoutConfig::default(), |_| {
        Size::new(10.0, 10.0)
    })
    .expect_err("negative anchor");
    assert_eq!(err.field(), Some("primary_item"));
}

#[test]
fn invalid_config_is_rejected() {
    let config = MenuLayoutConfig::default().compact_padding(f64::INFINITY);
    let err = try_layout_menu(&phone_input(), &config, |_| Size::new(10.0, 10.0))
        .expect_err("infinite padding");
    assert_eq!(err, Error::Input(InputError::InvalidConfig("compact_padding")));
}

#[test]
fn nan_drag_offset_is_non_finite() {
    let err = try_layout_menu(
        &phone_input().drag_offset(f64::NAN),
        &MenuLayoutConfig::default(),
        |_| Size::new(10.0, 10.0),
    )
    .expect_err("nan drag");
    assert_eq!(
        err,
        Error::Input(InputError::NonFinite {
            field: "menu_drag_offset"
        })
    );
}

#[test]
fn bad_measurement_is_reported() {
    let err = try_layout_menu(&phone_input(), &MenuLayoutConfig::default(), |_| {
        Size::new(180.0, f64::INFINITY)
    })
    .expect_err("infinite menu");
    assert_eq!(
        err,
        Error::Measure(MeasureError::InvalidMenuSize(Size::new(180.0, f64::INFINITY)))
    );
    assert_eq!(err.error_type(), "measure");
}

#[test]
fn unchecked_path_accepts_out_of_range_drag() {
    // The core does no validation; an out-of-range drag is inert today.
    let layout = layout_menu(
        &phone_input().drag_offset(3.0),
        &MenuLayoutConfig::default(),
        |_| Size::new(180.0, 60.0),
    );
    assert_eq!(layout.layout_id, "bottom-left");
    assert!(layout.can_scroll_menu);
    assert_eq!(layout.menu_drag_extent, 0.0);
}

#[test]
fn layout_result_round_trips_through_json() {
    let layout = try_layout_menu(&phone_input(), &MenuLayoutConfig::default(), |_| {
        Size::new(180.0, 60.0)
    })
    .expect("valid input");
    let text = serde_json::to_string(&layout).expect("serialize");
    let back: MenuLayout = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back.menu_rect(), layout.menu_rect());
    assert_eq!(back, layout);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn valid_inputs_never_error(
        vw in 100.0f64..2000.0,
        vh in 100.0f64..2000.0,
        ax in 0.0f64..=1.0,
        ay in 0.0f64..=1.0,
        pw in 0.0f64..1500.0,
        ph in 0.0f64..1500.0,
        mw in 0.0f64..800.0,
        mh in 0.0f64..800.0,
        drag in 0.0f64..=1.0,
    ) {
        let input = MenuLayoutInput::new(
            Rect::new(0.0, 0.0, vw, vh),
            Rect::new(ax * (vw - 40.0).max(0.0), ay * (vh - 40.0).max(0.0), 40.0, 40.0),
            Size::new(pw, ph),
        )
        .drag_offset(drag);
        let layout = try_layout_menu(&input, &MenuLayoutConfig::default(), |c| {
            c.constrain(Size::new(mw, mh))
        });
        prop_assert!(layout.is_ok(), "unexpected error: {:?}", layout.as_ref().err());
        let layout = layout.expect("checked above");
        prop_assert!(layout.preview_rect.is_finite());
        prop_assert!(layout.menu_rect().is_finite());
    }
}
