// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tagged style values.
//!
//! This module provides [`StyleProperty`], the value stored for one styling
//! attribute of one widget in one visual state, and [`StyleKind`], the tag
//! recording which representation the value was built with.

use kurbo::Vec2;
use peniko::Color;

/// The representation a [`StyleProperty`] was constructed with or last written as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleKind {
    /// An RGBA color.
    Color,
    /// A 2D vector (sizes, offsets, paddings).
    Vector,
    /// A floating point number.
    Float,
    /// An integer, stored in the numeric cell shared with [`StyleKind::Float`].
    Int,
    /// A boolean flag.
    Bool,
}

/// A single style value, readable as any of the supported kinds.
///
/// A property is usually built from one kind (`StyleProperty::from(Color::BLACK)`,
/// `StyleProperty::from(2.0_f32)`, ...) and read back as that kind, but nothing
/// enforces it: every accessor is always valid and a kind that was never written
/// reads as its fixed default.
///
/// | kind   | default       |
/// |--------|---------------|
/// | color  | opaque white  |
/// | vector | `(1.0, 1.0)`  |
/// | float  | `0.0`         |
/// | int    | `0`           |
/// | bool   | `false`       |
///
/// ## Shared numeric cell
///
/// Float and Int are two views of one numeric cell:
///
/// - [`set_int`](Self::set_int) stores the integer in that cell, so
///   [`as_float`](Self::as_float) afterwards returns `n as f32`.
/// - [`as_int`](Self::as_int) truncates the stored number toward zero, so after
///   `set_float(2.9)` it returns `2`, and after `set_float(-2.9)` it returns `-2`.
///
/// The cell is an `f64`, which represents every `i32` exactly; `set_int(n)`
/// followed by `as_int()` always yields `n`.
///
/// Only the color and vector cells know whether they were written. The numeric
/// and bool cells start at `0.0`/`false`, indistinguishable from explicit writes.
///
/// ```rust
/// use peniko::Color;
/// use trellis_style::{StyleKind, StyleProperty};
///
/// let mut prop = StyleProperty::from(3.75_f32);
/// assert_eq!(prop.kind(), Some(StyleKind::Float));
/// assert_eq!(prop.as_int(), 3);
///
/// // Unset kinds read as their defaults.
/// assert_eq!(prop.as_color().components, Color::WHITE.components);
/// assert!(!prop.as_bool());
///
/// prop.set_int(-7);
/// assert_eq!(prop.as_float(), -7.0);
/// ```
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "repr::StylePropertyRepr", into = "repr::StylePropertyRepr")
)]
pub struct StyleProperty {
    kind: Option<StyleKind>,
    color: Option<Color>,
    vector: Option<Vec2>,
    number: f64,
    flag: bool,
}

impl StyleProperty {
    /// Default color for a property whose color was never set.
    pub const DEFAULT_COLOR: Color = Color::WHITE;

    /// Default vector for a property whose vector was never set.
    pub const DEFAULT_VECTOR: Vec2 = Vec2::new(1.0, 1.0);

    /// Creates a property with every kind at its default.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            kind: None,
            color: None,
            vector: None,
            number: 0.0,
            flag: false,
        }
    }

    /// Creates a float property.
    #[must_use]
    pub const fn from_float(value: f32) -> Self {
        let mut prop = Self::new();
        prop.kind = Some(StyleKind::Float);
        prop.number = value as f64;
        prop
    }

    /// Creates a vector property.
    #[must_use]
    pub const fn from_vector(value: Vec2) -> Self {
        let mut prop = Self::new();
        prop.kind = Some(StyleKind::Vector);
        prop.vector = Some(value);
        prop
    }

    /// Creates a color property.
    #[must_use]
    pub const fn from_color(value: Color) -> Self {
        let mut prop = Self::new();
        prop.kind = Some(StyleKind::Color);
        prop.color = Some(value);
        prop
    }

    /// Creates a bool property.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        let mut prop = Self::new();
        prop.kind = Some(StyleKind::Bool);
        prop.flag = value;
        prop
    }

    /// The kind this property was constructed with or last written as.
    ///
    /// `None` for a property built with [`StyleProperty::new`]. The tag is
    /// informational only; it never changes what the accessors return.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> Option<StyleKind> {
        self.kind
    }

    /// The color value, or opaque white if no color was written.
    #[must_use]
    #[inline]
    pub fn as_color(&self) -> Color {
        self.color.unwrap_or(Self::DEFAULT_COLOR)
    }

    /// The vector value, or `(1.0, 1.0)` if no vector was written.
    #[must_use]
    #[inline]
    pub fn as_vector(&self) -> Vec2 {
        self.vector.unwrap_or(Self::DEFAULT_VECTOR)
    }

    /// The numeric cell as a float.
    #[must_use]
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the cell only ever holds values written as f32 or i32"
    )]
    pub fn as_float(&self) -> f32 {
        self.number as f32
    }

    /// The numeric cell truncated toward zero.
    ///
    /// Values outside the `i32` range saturate; NaN reads as `0`.
    #[must_use]
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "truncation toward zero is the documented int view"
    )]
    pub fn as_int(&self) -> i32 {
        self.number as i32
    }

    /// The bool cell.
    #[must_use]
    #[inline]
    pub fn as_bool(&self) -> bool {
        self.flag
    }

    /// Returns `true` if a color was written.
    #[must_use]
    #[inline]
    pub fn is_color_set(&self) -> bool {
        self.color.is_some()
    }

    /// Returns `true` if a vector was written.
    #[must_use]
    #[inline]
    pub fn is_vector_set(&self) -> bool {
        self.vector.is_some()
    }

    /// Writes the color cell.
    pub fn set_color(&mut self, value: Color) {
        self.kind = Some(StyleKind::Color);
        self.color = Some(value);
    }

    /// Writes the vector cell.
    pub fn set_vector(&mut self, value: Vec2) {
        self.kind = Some(StyleKind::Vector);
        self.vector = Some(value);
    }

    /// Writes the numeric cell as a float.
    pub fn set_float(&mut self, value: f32) {
        self.kind = Some(StyleKind::Float);
        self.number = f64::from(value);
    }

    /// Writes the numeric cell as an integer.
    ///
    /// This overwrites any float written earlier; see the type docs.
    pub fn set_int(&mut self, value: i32) {
        self.kind = Some(StyleKind::Int);
        self.number = f64::from(value);
    }

    /// Writes the bool cell.
    pub fn set_bool(&mut self, value: bool) {
        self.kind = Some(StyleKind::Bool);
        self.flag = value;
    }
}

impl From<f32> for StyleProperty {
    fn from(value: f32) -> Self {
        Self::from_float(value)
    }
}

impl From<Vec2> for StyleProperty {
    fn from(value: Vec2) -> Self {
        Self::from_vector(value)
    }
}

impl From<Color> for StyleProperty {
    fn from(value: Color) -> Self {
        Self::from_color(value)
    }
}

impl From<bool> for StyleProperty {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

#[cfg(feature = "serde")]
mod repr {
    use super::{StyleKind, StyleProperty};
    use kurbo::Vec2;
    use peniko::Color;

    /// Serialized form: every cell is an optional key.
    #[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
    pub(super) struct StylePropertyRepr {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        vector: Option<Vec2>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        float: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        int: Option<i32>,
        #[serde(default, rename = "bool", skip_serializing_if = "Option::is_none")]
        flag: Option<bool>,
    }

    impl From<StyleProperty> for StylePropertyRepr {
        fn from(prop: StyleProperty) -> Self {
            let kind = prop.kind();
            let (float, int) = match kind {
                Some(StyleKind::Int) => (None, Some(prop.as_int())),
                Some(StyleKind::Float) => (Some(prop.as_float()), None),
                _ if prop.number != 0.0 => (Some(prop.as_float()), None),
                _ => (None, None),
            };
            let flag = (kind == Some(StyleKind::Bool) || prop.flag).then_some(prop.flag);
            Self {
                color: prop.color,
                vector: prop.vector,
                float,
                int,
                flag,
            }
        }
    }

    impl From<StylePropertyRepr> for StyleProperty {
        fn from(repr: StylePropertyRepr) -> Self {
            let mut prop = Self::new();
            if let Some(color) = repr.color {
                prop.set_color(color);
            }
            if let Some(vector) = repr.vector {
                prop.set_vector(vector);
            }
            if let Some(float) = repr.float {
                prop.set_float(float);
            }
            if let Some(int) = repr.int {
                prop.set_int(int);
            }
            if let Some(flag) = repr.flag {
                prop.set_bool(flag);
            }
            prop
        }
    }
}
