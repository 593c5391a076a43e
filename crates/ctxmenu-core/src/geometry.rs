#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Logical coordinates (`f64`), origin at top-left, `y` grows downwards.
//! None of these types validate their inputs: negative or non-finite values
//! flow through the arithmetic unchanged.

use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D translation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Offset {
    /// Horizontal component.
    pub dx: f64,
    /// Vertical component.
    pub dy: f64,
}

impl Offset {
    /// No translation.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new offset.
    #[inline]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Return this offset moved by the given components.
    #[inline]
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.dx + dx, self.dy + dy)
    }

    /// Squared euclidean distance between two points.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.dx - other.dx;
        let dy = self.dy - other.dy;
        dx * dx + dy * dy
    }

    /// Whether both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }
}

impl Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for Offset {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Neg for Offset {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if the size has zero (or negative) area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether both dimensions are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Width divided by height. Returns `None` for a zero height.
    #[inline]
    pub fn aspect_ratio(&self) -> Option<f64> {
        (self.height != 0.0).then(|| self.width / self.height)
    }

    /// Strictly wider than tall.
    #[inline]
    pub fn is_wider_than_tall(&self) -> bool {
        self.width > self.height
    }

    /// Strictly taller than wide.
    #[inline]
    pub fn is_taller_than_wide(&self) -> bool {
        self.height > self.width
    }

    /// The smaller of the two dimensions.
    #[inline]
    pub fn shortest_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Whether this size is no larger than `other` on both axes, allowing
    /// `eps` of slack.
    #[inline]
    pub fn fits_within(&self, other: Size, eps: f64) -> bool {
        self.width <= other.width + eps && self.height <= other.height + eps
    }

    /// Scale this size down uniformly so it fits inside `max`.
    ///
    /// The aspect ratio is preserved and the size is never grown. Negative
    /// maxima are treated as zero. A zero dimension never constrains the
    /// scale factor, so degenerate sizes don't produce NaN.
    #[must_use]
    pub fn fit_into(self, max: Size) -> Size {
        let max_w = max.width.max(0.0);
        let max_h = max.height.max(0.0);
        if self.width <= max_w && self.height <= max_h {
            return self;
        }
        let mut scale = 1.0_f64;
        if self.width > max_w && self.width > 0.0 {
            scale = scale.min(max_w / self.width);
        }
        if self.height > max_h && self.height > 0.0 {
            scale = scale.min(max_h / self.height);
        }
        Size::new(self.width * scale, self.height * scale)
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from its top-left corner and size.
    #[inline]
    pub const fn from_origin_size(origin: Offset, size: Size) -> Self {
        Self::new(origin.dx, origin.dy, size.width, size.height)
    }

    /// Create a rectangle of `size` centered on `center`.
    #[inline]
    pub fn from_center(center: Offset, size: Size) -> Self {
        Self::new(
            center.dx - size.width / 2.0,
            center.dy - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Offset {
        Offset::new(self.x, self.y)
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Offset {
        Offset::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Whether every coordinate is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.origin().is_finite() && self.size().is_finite()
    }

    /// Return this rectangle translated by `offset`.
    #[inline]
    #[must_use]
    pub fn shift(&self, offset: Offset) -> Rect {
        Rect::new(self.x + offset.dx, self.y + offset.dy, self.width, self.height)
    }

    /// The smallest rectangle that contains both.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.left().min(other.left());
        let y = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Shrink the rectangle by `padding` on the left and right edges only.
    #[must_use]
    pub fn deflate_horizontal(&self, padding: f64) -> Rect {
        Rect::new(
            self.x + padding,
            self.y,
            self.width - 2.0 * padding,
            self.height,
        )
    }

    /// Length of the overlap between the horizontal spans of two rectangles.
    ///
    /// Zero when the spans only touch or are disjoint.
    #[inline]
    pub fn horizontal_overlap(&self, other: &Rect) -> f64 {
        (self.right().min(other.right()) - self.left().max(other.left())).max(0.0)
    }

    /// Whether `other` lies within this rectangle, allowing `eps` of slack on
    /// every edge.
    #[inline]
    pub fn contains_rect_eps(&self, other: &Rect, eps: f64) -> bool {
        other.left() >= self.left() - eps
            && other.top() >= self.top() - eps
            && other.right() <= self.right() + eps
            && other.bottom() <= self.bottom() + eps
    }
}

/// A point within a rectangle, named by compass direction.
///
/// Used both to pick the attachment point on the preview and to describe
/// which part of the menu touches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Alignment {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Alignment {
    /// All nine values, row by row.
    pub const ALL: [Alignment; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::CenterLeft,
        Self::Center,
        Self::CenterRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Horizontal factor: 0 = left, 0.5 = center, 1 = right.
    #[inline]
    pub const fn x_factor(self) -> f64 {
        match self {
            Self::TopLeft | Self::CenterLeft | Self::BottomLeft => 0.0,
            Self::TopCenter | Self::Center | Self::BottomCenter => 0.5,
            Self::TopRight | Self::CenterRight | Self::BottomRight => 1.0,
        }
    }

    /// Vertical factor: 0 = top, 0.5 = center, 1 = bottom.
    #[inline]
    pub const fn y_factor(self) -> f64 {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => 0.0,
            Self::CenterLeft | Self::Center | Self::CenterRight => 0.5,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => 1.0,
        }
    }

    /// Offset of this point from the top-left of a box of `size`.
    #[inline]
    pub fn offset_in(self, size: Size) -> Offset {
        Offset::new(size.width * self.x_factor(), size.height * self.y_factor())
    }

    /// Absolute position of this point on `rect`.
    #[inline]
    pub fn along(self, rect: &Rect) -> Offset {
        rect.origin() + self.offset_in(rect.size())
    }
}

/// Loose or tight bounds handed to a measurement callback.
///
/// Mirrors the usual box-constraints model: a measured size is valid when it
/// lies between the minimum and maximum on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constraints {
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl Constraints {
    /// Constraints that allow anything from zero up to `max`.
    ///
    /// Negative maxima are clamped to zero.
    #[inline]
    pub fn loose(max: Size) -> Self {
        Self {
            min_width: 0.0,
            max_width: max.width.max(0.0),
            min_height: 0.0,
            max_height: max.height.max(0.0),
        }
    }

    /// Constraints that only allow exactly `size`.
    #[inline]
    pub const fn tight(size: Size) -> Self {
        Self {
            min_width: size.width,
            max_width: size.width,
            min_height: size.height,
            max_height: size.height,
        }
    }

    /// The largest size these constraints allow.
    #[inline]
    pub const fn biggest(&self) -> Size {
        Size::new(self.max_width, self.max_height)
    }

    /// Clamp `size` into these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width.max(self.min_width)),
            size.height
                .clamp(self.min_height, self.max_height.max(self.min_height)),
        )
    }

    /// Whether `size` satisfies these constraints.
    #[inline]
    pub fn is_satisfied_by(&self, size: Size) -> bool {
        size.width >= self.min_width
            && size.width <= self.max_width
            && size.height >= self.min_height
            && size.height <= self.max_height
    }
}

#[cfg(test)]
mod tests {
    use super::{Alignment, Constraints, Offset, Rect, Size};
    use proptest::prelude::*;

    #[test]
    fn rect_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Offset::new(25.0, 40.0));
        assert_eq!(Rect::from_center(r.center(), r.size()), r);
    }

    #[test]
    fn rect_union_covers_both() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, -5.0, 5.0, 5.0);
        assert_eq!(a.union(&b), Rect::new(0.0, -5.0, 25.0, 15.0));
        assert_eq!(b.union(&a), a.union(&b));
    }

    #[test]
    fn rect_shift_keeps_size() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0).shift(Offset::new(10.0, -2.0));
        assert_eq!(r, Rect::new(11.0, 0.0, 3.0, 4.0));
    }

    #[test]
    fn horizontal_overlap_touching_is_zero() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 50.0, 10.0, 10.0);
        let overlapping = Rect::new(5.0, 50.0, 10.0, 10.0);
        assert_eq!(a.horizontal_overlap(&touching), 0.0);
        assert_eq!(a.horizontal_overlap(&overlapping), 5.0);
    }

    #[test]
    fn contains_rect_eps_tolerates_small_overshoot() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect_eps(&Rect::new(-0.0005, 0.0, 100.0, 100.0), 0.001));
        assert!(!outer.contains_rect_eps(&Rect::new(-0.01, 0.0, 100.0, 100.0), 0.001));
        assert!(!outer.contains_rect_eps(&Rect::new(0.0, 0.0, 100.01, 100.0), 0.001));
    }

    #[test]
    fn deflate_horizontal_leaves_vertical_alone() {
        let r = Rect::new(0.0, 5.0, 100.0, 50.0).deflate_horizontal(12.0);
        assert_eq!(r, Rect::new(12.0, 5.0, 76.0, 50.0));
    }

    #[test]
    fn fit_into_scales_uniformly() {
        let fitted = Size::new(200.0, 100.0).fit_into(Size::new(100.0, 100.0));
        assert_eq!(fitted, Size::new(100.0, 50.0));
        let fitted = Size::new(200.0, 100.0).fit_into(Size::new(400.0, 25.0));
        assert_eq!(fitted, Size::new(50.0, 25.0));
    }

    #[test]
    fn fit_into_never_grows() {
        let s = Size::new(20.0, 10.0);
        assert_eq!(s.fit_into(Size::new(1000.0, 1000.0)), s);
    }

    #[test]
    fn fit_into_degenerate_sizes() {
        assert_eq!(
            Size::new(0.0, 50.0).fit_into(Size::new(10.0, 25.0)),
            Size::new(0.0, 25.0)
        );
        assert_eq!(
            Size::new(30.0, 10.0).fit_into(Size::new(-5.0, 100.0)),
            Size::ZERO
        );
    }

    #[test]
    fn alignment_points() {
        let r = Rect::new(10.0, 10.0, 20.0, 40.0);
        assert_eq!(Alignment::TopLeft.along(&r), Offset::new(10.0, 10.0));
        assert_eq!(Alignment::BottomRight.along(&r), Offset::new(30.0, 50.0));
        assert_eq!(Alignment::Center.along(&r), r.center());
        assert_eq!(Alignment::TopCenter.along(&r), Offset::new(20.0, 10.0));
        assert_eq!(Alignment::CenterLeft.along(&r), Offset::new(10.0, 30.0));
        assert_eq!(Alignment::ALL.len(), 9);
    }

    #[test]
    fn constraints_loose_and_constrain() {
        let c = Constraints::loose(Size::new(100.0, -10.0));
        assert_eq!(c.biggest(), Size::new(100.0, 0.0));
        assert_eq!(c.constrain(Size::new(150.0, 20.0)), Size::new(100.0, 0.0));
        assert!(c.is_satisfied_by(Size::new(50.0, 0.0)));
        let t = Constraints::tight(Size::new(5.0, 6.0));
        assert_eq!(t.constrain(Size::ZERO), Size::new(5.0, 6.0));
    }

    #[test]
    fn offset_ops() {
        let a = Offset::new(1.0, 2.0);
        let b = Offset::new(4.0, 6.0);
        assert_eq!(a + b, Offset::new(5.0, 8.0));
        assert_eq!(b - a, Offset::new(3.0, 4.0));
        assert_eq!(-a, Offset::new(-1.0, -2.0));
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.translate(1.0, 1.0), Offset::new(2.0, 3.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_snake_case_alignment() {
        let json = serde_json::to_string(&Alignment::BottomCenter).expect("serialize");
        assert_eq!(json, "\"bottom_center\"");
        let rect: Rect = serde_json::from_str(r#"{"x":1.0,"y":2.0,"width":3.0,"height":4.0}"#)
            .expect("deserialize");
        assert_eq!(rect, Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    proptest! {
        #[test]
        fn fit_into_result_fits_and_keeps_ratio(
            w in 1.0f64..2000.0,
            h in 1.0f64..2000.0,
            max_w in 0.0f64..2000.0,
            max_h in 0.0f64..2000.0,
        ) {
            let fitted = Size::new(w, h).fit_into(Size::new(max_w, max_h));
            prop_assert!(fitted.width <= w + 1e-9);
            prop_assert!(fitted.height <= h + 1e-9);
            prop_assert!(fitted.fits_within(Size::new(max_w, max_h), 1e-6));
            if fitted.height > 1e-6 {
                prop_assert!((fitted.width / fitted.height - w / h).abs() < 1e-6 * (w / h).max(1.0));
            }
        }
    }
}
