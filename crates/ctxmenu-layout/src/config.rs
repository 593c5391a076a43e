#![forbid(unsafe_code)]

//! Tunables for a layout pass.
//!
//! [`MenuLayoutConfig::default`] reproduces the stock behavior; every field
//! can be overridden through the builder setters or deserialized (missing
//! fields fall back to their defaults).
//!
//! ```ignore
//! use ctxmenu_layout::MenuLayoutConfig;
//!
//! let config: MenuLayoutConfig = serde_json::from_str(r#"{ "spacing": 8.0 }"#)?;
//! assert_eq!(config.compact_padding, 12.0);
//! ```

use serde::{Deserialize, Serialize};

/// Gap between the preview and the menu.
pub const DEFAULT_SPACING: f64 = 15.0;

/// Horizontal inset kept free on both sides of the viewport by the compact
/// strategy.
pub const DEFAULT_COMPACT_PADDING: f64 = 12.0;

/// Viewports whose shortest side is below this are treated as phones.
pub const DEFAULT_PHONE_SHORTEST_SIDE: f64 = 550.0;

/// Tolerance used by every fit comparison.
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Configuration shared by the strategies and the selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuLayoutConfig {
    /// Gap between preview and menu.
    pub spacing: f64,
    /// Horizontal viewport inset for the compact strategy.
    pub compact_padding: f64,
    /// Shortest-side threshold separating phones from larger screens.
    pub phone_shortest_side: f64,
    /// Fit tolerance.
    pub epsilon: f64,
}

impl Default for MenuLayoutConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            compact_padding: DEFAULT_COMPACT_PADDING,
            phone_shortest_side: DEFAULT_PHONE_SHORTEST_SIDE,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl MenuLayoutConfig {
    /// Set the preview/menu gap.
    #[must_use]
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the compact horizontal padding.
    #[must_use]
    pub fn compact_padding(mut self, padding: f64) -> Self {
        self.compact_padding = padding;
        self
    }

    /// Set the phone threshold.
    #[must_use]
    pub fn phone_shortest_side(mut self, threshold: f64) -> Self {
        self.phone_shortest_side = threshold;
        self
    }

    /// Set the fit tolerance.
    #[must_use]
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Name of the first field that is negative or not finite, if any.
    pub fn invalid_field(&self) -> Option<&'static str> {
        [
            ("spacing", self.spacing),
            ("compact_padding", self.compact_padding),
            ("phone_shortest_side", self.phone_shortest_side),
            ("epsilon", self.epsilon),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
        .map(|(name, _)| name)
    }
}
