#![forbid(unsafe_code)]

//! ctxmenu public facade.
//!
//! Re-exports the geometry and layout crates and adds a validated entry
//! point, [`try_layout_menu`], for callers that cannot vouch for their
//! inputs. [`layout_menu`] stays available for the unchecked path.

pub mod error;

pub use error::{Error, InputError, MeasureError, Result};

// --- Geometry re-exports ---------------------------------------------------

pub use ctxmenu_core::geometry::{Alignment, Constraints, Offset, Rect, Size};

// --- Layout re-exports -----------------------------------------------------

pub use ctxmenu_layout::{
    CandidateReport, CandidateSet, FormFactor, GeometryCandidate, MenuAnchor, MenuLayout,
    MenuLayoutConfig, MenuLayoutInput, MenuLayoutStrategy, MenuPosition, Orientation, Selection,
    SelectionReason, VerticalEdge, explain, layout_menu, render_report, select, select_best_fit,
};

pub use ctxmenu_core as core;
pub use ctxmenu_layout as layout;

/// Lay out a menu after checking the inputs and the measured menu size.
///
/// Rejects non-finite geometry, negative sizes, a drag offset outside
/// `[0, 1]` and invalid configuration before any work is done. The measure
/// callback is still invoked exactly once; a negative or non-finite answer
/// is reported as [`MeasureError::InvalidMenuSize`].
pub fn try_layout_menu<F>(
    input: &MenuLayoutInput<'_>,
    config: &MenuLayoutConfig,
    measure: F,
) -> Result<MenuLayout>
where
    F: FnOnce(Constraints) -> Size,
{
    if let Err(err) = validate(input, config) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "menu_layout.rejected",
            error_type = err.error_type(),
            field = err.field().unwrap_or(""),
            %err
        );
        return Err(err);
    }

    let mut rejected = None;
    let layout = layout_menu(input, config, |constraints| {
        let size = measure(constraints);
        if valid_size(size) {
            size
        } else {
            rejected = Some(size);
            Size::ZERO
        }
    });

    match rejected {
        Some(size) => {
            let err = Error::from(MeasureError::InvalidMenuSize(size));
            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "menu_layout.rejected",
                error_type = err.error_type(),
                %err
            );
            Err(err)
        }
        None => Ok(layout),
    }
}

fn validate(input: &MenuLayoutInput<'_>, config: &MenuLayoutConfig) -> Result<()> {
    if let Some(field) = config.invalid_field() {
        return Err(InputError::InvalidConfig(field).into());
    }
    check_rect("bounds", &input.bounds)?;
    check_rect("primary_item", &input.primary_item)?;
    check_size("menu_preview_size", input.menu_preview_size)?;

    let offset = input.menu_drag_offset;
    if !offset.is_finite() {
        return Err(InputError::NonFinite {
            field: "menu_drag_offset",
        }
        .into());
    }
    if !(0.0..=1.0).contains(&offset) {
        return Err(InputError::DragOffsetOutOfRange(offset).into());
    }
    Ok(())
}

fn check_rect(field: &'static str, rect: &Rect) -> Result<()> {
    if !rect.is_finite() {
        return Err(InputError::NonFinite { field }.into());
    }
    check_size(field, rect.size())
}

fn check_size(field: &'static str, size: Size) -> Result<()> {
    if !size.is_finite() {
        return Err(InputError::NonFinite { field }.into());
    }
    if size.width < 0.0 || size.height < 0.0 {
        return Err(InputError::NegativeSize { field }.into());
    }
    Ok(())
}

fn valid_size(size: Size) -> bool {
    size.is_finite() && size.width >= 0.0 && size.height >= 0.0
}

/// Everything needed for a typical layout call.
pub mod prelude {
    pub use crate::{
        Alignment, Constraints, Error, MenuLayout, MenuLayoutConfig, MenuLayoutInput, Offset,
        Rect, Result, Size, layout_menu, try_layout_menu,
    };

    pub use crate::{core, layout};
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> MenuLayoutInput<'static> {
        MenuLayoutInput::new(
            Rect::new(0.0, 0.0, 400.0, 800.0),
            Rect::new(150.0, 380.0, 50.0, 40.0),
            Size::new(200.0, 150.0),
        )
    }

    #[test]
    fn valid_input_matches_unchecked_layout() {
        let config = MenuLayoutConfig::default();
        let checked =
            try_layout_menu(&input(), &config, |_| Size::new(180.0, 60.0)).expect("valid input");
        let unchecked = layout_menu(&input(), &config, |_| Size::new(180.0, 60.0));
        assert_eq!(checked, unchecked);
    }

    #[test]
    fn rejects_before_measuring() {
        let mut measured = false;
        let bad = MenuLayoutInput::new(
            Rect::new(0.0, f64::NAN, 400.0, 800.0),
            Rect::new(150.0, 380.0, 50.0, 40.0),
            Size::new(200.0, 150.0),
        );
        let err = try_layout_menu(&bad, &MenuLayoutConfig::default(), |_| {
            measured = true;
            Size::new(1.0, 1.0)
        })
        .expect_err("nan bounds");
        assert_eq!(err, Error::Input(InputError::NonFinite { field: "bounds" }));
        assert!(!measured);
    }

    #[test]
    fn drag_offset_range_is_inclusive() {
        let config = MenuLayoutConfig::default();
        for offset in [0.0, 0.5, 1.0] {
            assert!(
                try_layout_menu(&input().drag_offset(offset), &config, |_| Size::new(
                    10.0, 10.0
                ))
                .is_ok()
            );
        }
        let err = try_layout_menu(&input().drag_offset(1.01), &config, |_| {
            Size::new(10.0, 10.0)
        })
        .expect_err("out of range");
        assert_eq!(err, Error::Input(InputError::DragOffsetOutOfRange(1.01)));
    }
}
