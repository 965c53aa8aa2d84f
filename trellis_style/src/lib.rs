// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Style: tagged style values and per-state style sheets.
//!
//! Every styling attribute of a Trellis widget (its fill tint, background
//! color, scale, padding, ...) is stored as a [`StyleProperty`]: one value
//! that can be read as a color, a 2D vector, a float, an integer or a bool.
//! Widgets keep their values in a [`StyleSheet`], keyed by [`VisualState`]
//! and property name, and read them back on every draw.
//!
//! ## Reading never fails
//!
//! A [`StyleProperty`] never reports a missing value. Reading a kind that was
//! never written yields that kind's default:
//!
//! - color: opaque white
//! - vector: `(1.0, 1.0)`
//! - float / int: `0`
//! - bool: `false`
//!
//! Likewise [`StyleSheet::resolve`] falls back from the requested state to
//! [`VisualState::Default`] and then to the value defaults.
//!
//! ```rust
//! use kurbo::Vec2;
//! use peniko::Color;
//! use trellis_style::{names, StyleProperty, StyleSheet, VisualState};
//!
//! let mut sheet = StyleSheet::new();
//! sheet.set(
//!     VisualState::Default,
//!     names::BACKGROUND_COLOR,
//!     StyleProperty::from(Color::from_rgba8(40, 40, 40, 255)),
//! );
//!
//! let bg = sheet.resolve(VisualState::Pressed, names::BACKGROUND_COLOR);
//! let rgba = bg.as_color().to_rgba8();
//! assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (40, 40, 40, 255));
//!
//! // A color property read as a vector gives the vector default.
//! assert_eq!(bg.as_vector(), Vec2::new(1.0, 1.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo and Peniko.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `serde`: serialize values with each representation as an optional key,
//!   and sheets as a map from state to name to value.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod property;
mod sheet;

pub use property::{StyleKind, StyleProperty};
pub use sheet::{StyleSheet, VisualState, names};
