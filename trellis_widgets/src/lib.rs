// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Widgets: a vertical scrollbar and an icon over host-owned layout.
//!
//! Widgets here do not own a tree, a renderer, or an input device. The host
//! provides three things:
//!
//! - a [`LayoutTree`] giving each widget key its rectangles, parent and children,
//! - an [`InputSnapshot`] sampled once per tick,
//! - a [`Resources`] catalog and a [`DrawBatch`] to draw into.
//!
//! Each tick the host builds a [`FrameCx`], runs [`update_interactive`] on its
//! interactive widgets, then calls [`Drawable::draw`] on everything.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use trellis_widgets::{
//!     DrawCx, DrawOp, Drawable, FrameCx, InputSnapshot, LayoutTree, ScrollbarConfig, Texture,
//!     TextureCatalog, TextureId, VerticalScrollbar, update_interactive,
//! };
//!
//! // A scrollbar with no parent, 300 pixels tall.
//! struct Lone;
//! impl LayoutTree<u32> for Lone {
//!     fn dest_rect(&self, _id: u32) -> Rect { Rect::new(0.0, 0.0, 30.0, 300.0) }
//!     fn internal_rect(&self, id: u32) -> Rect { self.dest_rect(id) }
//!     fn parent(&self, _id: u32) -> Option<u32> { None }
//!     fn children_into(&self, _id: u32, _out: &mut Vec<u32>) {}
//! }
//!
//! let catalog = TextureCatalog::new(
//!     Texture::new(TextureId(1), 64, 64),
//!     Texture::new(TextureId(2), 30, 300),
//!     Texture::new(TextureId(3), 30, 60),
//!     0.1,
//! );
//! let mut bar = VerticalScrollbar::new(0_u32, 0, 100, false, &ScrollbarConfig::default());
//!
//! // Drawing measures the end caps (30 px each) and emits track and mark.
//! let idle = InputSnapshot::default();
//! let mut ops: Vec<DrawOp> = Vec::new();
//! bar.draw(&FrameCx::new(&Lone, &idle, None), &mut DrawCx::new(&catalog, &mut ops));
//! assert_eq!(ops.len(), 2);
//!
//! // One press on the bottom end cap steps the value down the list.
//! let press = InputSnapshot::at(Point::new(15.0, 295.0)).pressing();
//! update_interactive(&mut bar, &FrameCx::new(&Lone, &press, Some(0_u32)));
//! assert_eq!(bar.value(), 1);
//! ```
//!
//! ## Logging
//!
//! Range changes are reported through the [`log`] facade: automatic `max`
//! adjustments at `debug`, value steps at `trace`.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo, Peniko and `trellis_style`.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `serde`: enable `serde` support on the style types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod capability;
mod draw;
mod host;
mod icon;
mod image;
mod range;
mod resources;
mod scrollbar;

pub use capability::{
    AfterUpdate, Drawable, PointerInteractive, WheelInteractive, Widget, update_interactive,
};
pub use draw::{DrawBatch, DrawCx, DrawOp};
pub use host::{FrameCx, InputSnapshot, LayoutTree};
pub use icon::{Icon, IconConfig};
pub use image::Image;
pub use range::RangeValue;
pub use resources::{ResourceError, Resources, Texture, TextureCatalog, TextureId};
pub use scrollbar::{PressState, ScrollbarConfig, VerticalScrollbar};
