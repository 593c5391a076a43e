#![forbid(unsafe_code)]

//! Error model for the validated layout entry point.
//!
//! The layout core itself never fails: degenerate geometry is handled by
//! policy (fallback candidate, clamped allowances). [`crate::try_layout_menu`]
//! layers input checks on top and reports what it rejected through these
//! types.

use std::fmt;

use ctxmenu_core::geometry::Size;

// ── Domain-Specific Error Types ─────────────────────────────────────────

/// Rejected layout inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// A coordinate or dimension is NaN or infinite.
    NonFinite { field: &'static str },
    /// A width or height is negative.
    NegativeSize { field: &'static str },
    /// The drag offset lies outside `[0, 1]`.
    DragOffsetOutOfRange(f64),
    /// A configuration field is negative or not finite.
    InvalidConfig(&'static str),
}

/// Bad answers from the menu measurement callback.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasureError {
    /// The returned size is negative or not finite.
    InvalidMenuSize(Size),
}

// ── Unified Error ───────────────────────────────────────────────────────

/// Top-level error type.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Input(InputError),
    Measure(MeasureError),
}

/// Standard result type for ctxmenu APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Error type label for metrics and tracing.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Input(_) => "input",
            Self::Measure(_) => "measure",
        }
    }

    /// Name of the offending input field, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Input(InputError::NonFinite { field } | InputError::NegativeSize { field }) => {
                Some(*field)
            }
            Self::Input(InputError::DragOffsetOutOfRange(_)) => Some("menu_drag_offset"),
            Self::Input(InputError::InvalidConfig(field)) => Some(*field),
            Self::Measure(_) => None,
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────────

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "{field} is not finite"),
            Self::NegativeSize { field } => write!(f, "{field} has a negative size"),
            Self::DragOffsetOutOfRange(offset) => {
                write!(f, "drag offset {offset} outside [0, 1]")
            }
            Self::InvalidConfig(field) => write!(f, "invalid config field: {field}"),
        }
    }
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMenuSize(size) => {
                write!(f, "invalid menu size: {}x{}", size.width, size.height)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(err) => write!(f, "{err}"),
            Self::Measure(err) => write!(f, "{err}"),
        }
    }
}

// ── std::error::Error ───────────────────────────────────────────────────

impl std::error::Error for InputError {}
impl std::error::Error for MeasureError {}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
            Self::Measure(err) => Some(err),
        }
    }
}

// ── From conversions ────────────────────────────────────────────────────

impl From<InputError> for Error {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

impl From<MeasureError> for Error {
    fn from(err: MeasureError) -> Self {
        Self::Measure(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::from(InputError::NonFinite { field: "bounds" }).to_string(),
            "bounds is not finite"
        );
        assert_eq!(
            Error::from(InputError::DragOffsetOutOfRange(1.5)).to_string(),
            "drag offset 1.5 outside [0, 1]"
        );
        assert_eq!(
            Error::from(MeasureError::InvalidMenuSize(Size::new(-1.0, 2.0))).to_string(),
            "invalid menu size: -1x2"
        );
    }

    #[test]
    fn error_type_and_field() {
        let err = Error::from(InputError::NegativeSize {
            field: "menu_preview_size",
        });
        assert_eq!(err.error_type(), "input");
        assert_eq!(err.field(), Some("menu_preview_size"));

        let err = Error::from(MeasureError::InvalidMenuSize(Size::new(f64::NAN, 0.0)));
        assert_eq!(err.error_type(), "measure");
        assert_eq!(err.field(), None);
    }

    #[test]
    fn source_chain() {
        use std::error::Error as _;
        let err = Error::from(InputError::InvalidConfig("spacing"));
        let source = err.source().expect("has source");
        assert_eq!(source.to_string(), "invalid config field: spacing");
    }
}
