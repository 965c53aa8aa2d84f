// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget capabilities and the per-tick update driver.
//!
//! Widgets implement only the capabilities they need instead of overriding
//! hooks of a base class. The host runs one update pass and one draw pass per
//! frame:
//!
//! 1. For every interactive widget, [`update_interactive`] dispatches this
//!    tick's pointer and wheel input and then runs the widget's
//!    [`AfterUpdate`] hook.
//! 2. For every widget, [`Drawable::draw`] emits draw calls.

use crate::{DrawCx, FrameCx};

/// A widget known to the host tree by key `K`.
pub trait Widget<K> {
    /// The widget's key in the host tree.
    fn id(&self) -> K;
}

/// A widget that emits draw calls.
pub trait Drawable<K: Copy + PartialEq>: Widget<K> {
    /// Draws the widget. Called once per frame, after the update pass.
    fn draw(&mut self, cx: &FrameCx<'_, K>, dcx: &mut DrawCx<'_>);
}

/// A widget that reacts to the primary pointer button while it is active.
pub trait PointerInteractive<K: Copy + PartialEq>: Widget<K> {
    /// The button went down on this widget this tick.
    fn on_pointer_down(&mut self, cx: &FrameCx<'_, K>);

    /// The button is held; also called on the tick it went down.
    fn while_pointer_down(&mut self, cx: &FrameCx<'_, K>);

    /// The button went up this tick.
    fn on_pointer_up(&mut self, cx: &FrameCx<'_, K>);
}

/// A widget that reacts to wheel input while it is active.
pub trait WheelInteractive<K: Copy + PartialEq>: Widget<K> {
    /// The wheel moved this tick; `cx.input.wheel_delta` is non-zero.
    fn on_wheel(&mut self, cx: &FrameCx<'_, K>);
}

/// A widget with a hook that runs every tick, after input dispatch.
pub trait AfterUpdate<K: Copy + PartialEq>: Widget<K> {
    /// Runs once per tick whether or not the widget is active.
    fn after_update(&mut self, cx: &FrameCx<'_, K>);
}

/// Runs one tick of the update pass for `widget`.
///
/// When the widget is the active element this dispatches, in order: press
/// start, held, release, and wheel. The [`AfterUpdate`] hook always runs last.
pub fn update_interactive<K, W>(widget: &mut W, cx: &FrameCx<'_, K>)
where
    K: Copy + PartialEq,
    W: PointerInteractive<K> + WheelInteractive<K> + AfterUpdate<K>,
{
    if cx.is_active(widget.id()) {
        let input = cx.input;
        if input.pressed {
            widget.on_pointer_down(cx);
        }
        if input.down {
            widget.while_pointer_down(cx);
        }
        if input.released {
            widget.on_pointer_up(cx);
        }
        if input.wheel_delta != 0 {
            widget.on_wheel(cx);
        }
    }
    widget.after_update(cx);
}
