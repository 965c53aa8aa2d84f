// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical scrollbar: pointer and wheel input mapped onto a bounded value.
//!
//! ## Track layout
//!
//! ```text
//!  y0 ┌──────┐ ─┐
//!     │ ▲▲▲▲ │  │ frame (fixed-size end cap; a press here steps up)
//!     ├──────┤ ─┘
//!     │┌────┐│ ─┐
//!     ││mark││  │ mark height, from the mark texture's aspect ratio
//!     │└────┘│ ─┘
//!     │      │    travel = height − 2·frame − mark
//!     ├──────┤ ─┐
//!     │ ▼▼▼▼ │  │ frame (a press here steps down)
//!  y1 └──────┘ ─┘
//! ```
//!
//! Frame and mark heights are derived from the textures and the current track
//! width on every draw; nothing is cached between frames.

use alloc::vec::Vec;
use core::fmt::Debug;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round` and `trunc`
use kurbo::{Rect, Vec2};
use trellis_style::{StyleSheet, VisualState, names};

use crate::{
    AfterUpdate, DrawCx, Drawable, FrameCx, LayoutTree, PointerInteractive, RangeValue, Resources,
    WheelInteractive, Widget,
};

/// Mark height used until the first draw measures the mark texture.
const INITIAL_MARK_HEIGHT: f64 = 20.0;

/// Construction defaults shared by all vertical scrollbars of a theme.
#[derive(Clone, Debug)]
pub struct ScrollbarConfig {
    /// Size requested from the host layout; a zero height means "fill parent".
    pub default_size: Vec2,
    /// Style merged into every new scrollbar's sheet.
    pub default_style: StyleSheet,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            default_size: Vec2::new(30.0, 0.0),
            default_style: StyleSheet::new(),
        }
    }
}

/// Where the current press started.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PressState {
    /// No press in progress.
    #[default]
    Idle,
    /// Pressed on the top end cap; stepped once toward `min`.
    TopFrame,
    /// Pressed on the bottom end cap; stepped once toward `max`.
    BottomFrame,
    /// Pressed on the track; the value follows the pointer until release.
    Track,
}

/// A vertical scrollbar bound to a host widget key.
///
/// The scrollbar is usually a child of a scrollable container; it reads its
/// own, its parent's and its siblings' rectangles through [`LayoutTree`] and
/// mutates only its own value and range.
///
/// Interaction:
///
/// - Pressing on the top or bottom end cap moves the value by one
///   [`step size`](RangeValue::step_size).
/// - Pressing on the track starts a drag; while held, the pointer position
///   maps linearly onto `[min, max]`, rounded to the nearest integer.
/// - The wheel subtracts `delta × step size`. This applies when the scrollbar
///   is active and also when the active element is its parent or anything
///   inside its parent, so wheeling over a list scrolls it.
///
/// With [`adjust_max_automatically`](Self::set_adjust_max_automatically), each
/// draw sets `max` to how far the lowest sibling extends below the parent's
/// visible content area.
#[derive(Clone, Debug)]
pub struct VerticalScrollbar<K> {
    id: K,
    range: RangeValue,
    adjust_max_automatically: bool,
    interactable: bool,
    frame_height_px: f64,
    mark_height: f64,
    press: PressState,
    visual_state: VisualState,
    style: StyleSheet,
    size: Vec2,
    siblings: Vec<K>,
}

impl<K: Copy + PartialEq + Debug> VerticalScrollbar<K> {
    /// Creates a scrollbar for host widget `id` with the value at `min`.
    pub fn new(
        id: K,
        min: u32,
        max: u32,
        adjust_max_automatically: bool,
        config: &ScrollbarConfig,
    ) -> Self {
        let mut style = StyleSheet::new();
        style.merge_from(&config.default_style);
        Self {
            id,
            range: RangeValue::new(min, max),
            adjust_max_automatically,
            interactable: true,
            frame_height_px: 0.0,
            mark_height: INITIAL_MARK_HEIGHT,
            press: PressState::Idle,
            visual_state: VisualState::Default,
            style,
            size: config.default_size,
            siblings: Vec::new(),
        }
    }

    /// The bounded value.
    #[must_use]
    pub fn range(&self) -> &RangeValue {
        &self.range
    }

    /// Mutable access to the bounded value (bounds, steps, value).
    pub fn range_mut(&mut self) -> &mut RangeValue {
        &mut self.range
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.range.value()
    }

    /// Sets the value, clamped to the range. Returns `true` if it changed.
    pub fn set_value(&mut self, value: i64) -> bool {
        self.range.set_value(value)
    }

    /// Whether `max` is derived from sibling layout on every draw.
    #[must_use]
    pub fn adjust_max_automatically(&self) -> bool {
        self.adjust_max_automatically
    }

    /// Enables or disables deriving `max` from sibling layout.
    pub fn set_adjust_max_automatically(&mut self, enabled: bool) {
        self.adjust_max_automatically = enabled;
    }

    /// Whether the scrollbar captures wheel input aimed at its parent.
    #[must_use]
    pub fn interactable(&self) -> bool {
        self.interactable
    }

    /// Enables or disables capturing wheel input aimed at the parent.
    pub fn set_interactable(&mut self, interactable: bool) {
        self.interactable = interactable;
    }

    /// Pixel height of each end cap, as measured by the last draw.
    #[must_use]
    pub fn frame_height_px(&self) -> f64 {
        self.frame_height_px
    }

    /// Pixel height of the mark, as measured by the last draw.
    #[must_use]
    pub fn mark_height(&self) -> f64 {
        self.mark_height
    }

    /// Where the current press started.
    #[must_use]
    pub fn press_state(&self) -> PressState {
        self.press
    }

    /// Visual state used to resolve style values.
    #[must_use]
    pub fn visual_state(&self) -> VisualState {
        self.visual_state
    }

    /// Sets the visual state, e.g. to [`VisualState::Hover`] from host hit testing.
    pub fn set_visual_state(&mut self, state: VisualState) {
        self.visual_state = state;
    }

    /// Style values of this scrollbar.
    #[must_use]
    pub fn style(&self) -> &StyleSheet {
        &self.style
    }

    /// Mutable style values of this scrollbar.
    pub fn style_mut(&mut self) -> &mut StyleSheet {
        &mut self.style
    }

    /// Size requested from the host layout.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Recomputes `max` from sibling layout, if enabled.
    ///
    /// `max` becomes how far the lowest sibling's bottom edge lies below the
    /// top of the parent's content area, minus that area's height, floored at
    /// zero. It is only assigned when it differs, so an unchanged layout never
    /// re-clamps the value.
    pub fn calc_auto_max(&mut self, tree: &dyn LayoutTree<K>) {
        if !self.adjust_max_automatically {
            return;
        }
        let Some(parent) = tree.parent(self.id) else {
            return;
        };
        let content = tree.internal_rect(parent);

        self.siblings.clear();
        tree.children_into(parent, &mut self.siblings);
        let mut lowest = 0.0_f64;
        for &child in &self.siblings {
            if child == self.id {
                continue;
            }
            lowest = lowest.max(tree.dest_rect(child).y1 - content.y0);
        }

        let overflow = (lowest - content.height()).max(0.0);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "overflow is non-negative; float-to-int casts saturate"
        )]
        let new_max = overflow as u32;
        if new_max != self.range.max() {
            log::debug!(
                "scrollbar {:?}: max {} -> {}",
                self.id,
                self.range.max(),
                new_max
            );
            self.range.set_max(new_max);
        }
    }

    /// Measures the end caps and the mark for a track `track_width` pixels wide.
    ///
    /// The frame fraction is a fraction of the track texture's height, but is
    /// scaled by the horizontal ratio `track_width / texture_width`: the
    /// border graphic is assumed to scale uniformly.
    pub fn measure(&mut self, track_width: f64, resources: &dyn Resources) {
        let track = resources.scrollbar_track();
        let mark = resources.scrollbar_mark();
        let scale = track_width / f64::from(track.width);
        self.frame_height_px =
            resources.scrollbar_frame_height() * f64::from(track.height) * scale;
        self.mark_height = (mark.aspect() * track_width).trunc();
    }

    /// Where the mark is drawn inside `track`, for the current value and the
    /// last measured geometry.
    ///
    /// With an empty range the mark sits at the top of its travel.
    #[must_use]
    pub fn mark_rect(&self, track: Rect) -> Rect {
        let travel = track.height() - self.frame_height_px * 2.0 - self.mark_height;
        let center = track.y0
            + self.frame_height_px
            + self.mark_height * 0.5
            + travel * self.range.percent();
        let top = center.round() - (self.mark_height / 2.0).trunc();
        Rect::new(track.x0, top, track.x1, top + self.mark_height)
    }

    fn step(&mut self, steps: i64) {
        if self.range.step_by(steps) {
            log::trace!("scrollbar {:?}: stepped to {}", self.id, self.range.value());
        }
    }

    fn scroll(&mut self, wheel_delta: i32) {
        self.step(-i64::from(wheel_delta));
    }

    /// Maps a pointer `y` inside `track` onto the range.
    ///
    /// Returns `None` outside the usable band (strictly between the end cap
    /// midpoints) or when the track is too short to have any travel.
    fn value_at(&self, track: Rect, y: f64) -> Option<i64> {
        let frame = self.frame_height_px;
        let mark = self.mark_height;
        if !(y > track.y0 + frame * 0.5 && y < track.y1 - frame * 0.5) {
            return None;
        }
        let internal_height = (track.height() - frame) - mark * 0.5;
        if internal_height <= 0.0 {
            return None;
        }
        let relative_pos = y - track.y0 - frame * 0.5 - mark * 0.5;
        let relative_val = relative_pos / internal_height;
        let min = f64::from(self.range.min());
        let max = f64::from(self.range.max());
        #[allow(
            clippy::cast_possible_truncation,
            reason = "rounded value; out-of-range results are clamped by the range"
        )]
        let value = (min + relative_val * (max - min)).round() as i64;
        Some(value)
    }
}

impl<K: Copy> Widget<K> for VerticalScrollbar<K> {
    fn id(&self) -> K {
        self.id
    }
}

impl<K: Copy + PartialEq + Debug> PointerInteractive<K> for VerticalScrollbar<K> {
    fn on_pointer_down(&mut self, cx: &FrameCx<'_, K>) {
        let track = cx.tree.dest_rect(self.id);
        let y = cx.input.pointer.y;
        self.visual_state = VisualState::Pressed;
        if y <= track.y0 + self.frame_height_px {
            self.press = PressState::TopFrame;
            self.step(-1);
        } else if y >= track.y1 - self.frame_height_px {
            self.press = PressState::BottomFrame;
            self.step(1);
        } else {
            self.press = PressState::Track;
        }
    }

    fn while_pointer_down(&mut self, cx: &FrameCx<'_, K>) {
        if self.press != PressState::Track {
            return;
        }
        let track = cx.tree.dest_rect(self.id);
        if let Some(value) = self.value_at(track, cx.input.pointer.y) {
            self.range.set_value(value);
        }
    }

    fn on_pointer_up(&mut self, _cx: &FrameCx<'_, K>) {
        self.press = PressState::Idle;
        self.visual_state = VisualState::Default;
    }
}

impl<K: Copy + PartialEq + Debug> WheelInteractive<K> for VerticalScrollbar<K> {
    fn on_wheel(&mut self, cx: &FrameCx<'_, K>) {
        self.scroll(cx.input.wheel_delta);
    }
}

impl<K: Copy + PartialEq + Debug> AfterUpdate<K> for VerticalScrollbar<K> {
    /// Ends a press whose release happened elsewhere, and scrolls on wheel
    /// input aimed at the parent or anything inside it.
    ///
    /// The scrollbar's own wheel input is handled by
    /// [`WheelInteractive::on_wheel`] and is skipped here.
    fn after_update(&mut self, cx: &FrameCx<'_, K>) {
        if !cx.input.down && self.press != PressState::Idle {
            self.press = PressState::Idle;
            self.visual_state = VisualState::Default;
        }

        let delta = cx.input.wheel_delta;
        if !self.interactable || delta == 0 {
            return;
        }
        let Some(active) = cx.active else {
            return;
        };
        if active == self.id {
            return;
        }
        let Some(parent) = cx.tree.parent(self.id) else {
            return;
        };
        if active == parent || cx.tree.is_descendant_of(active, parent) {
            self.scroll(delta);
        }
    }
}

impl<K: Copy + PartialEq + Debug> Drawable<K> for VerticalScrollbar<K> {
    fn draw(&mut self, cx: &FrameCx<'_, K>, dcx: &mut DrawCx<'_>) {
        self.calc_auto_max(cx.tree);

        let track = cx.tree.dest_rect(self.id);
        let tint = self
            .style
            .resolve(self.visual_state, names::FILL_COLOR)
            .as_color();
        let frame = Vec2::new(0.0, dcx.resources.scrollbar_frame_height());
        dcx.batch
            .draw_surface(dcx.resources.scrollbar_track().id, track, frame, 1.0, tint);

        self.measure(track.width(), dcx.resources);
        let mark = self.mark_rect(track);
        dcx.batch
            .draw_image(dcx.resources.scrollbar_mark().id, mark, tint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawOp, InputSnapshot, Texture, TextureCatalog, TextureId, update_interactive};
    use kurbo::Point;
    use peniko::Color;
    use trellis_style::StyleProperty;

    const PARENT: u32 = 0;
    const BAR: u32 = 1;
    const ROW_A: u32 = 2;
    const ROW_B: u32 = 3;
    const ELSEWHERE: u32 = 4;

    struct Node {
        parent: Option<u32>,
        rect: Rect,
    }

    /// A list container with a scrollbar and two rows, plus an unrelated root.
    struct ListTree {
        nodes: Vec<Node>,
        content: Rect,
    }

    impl ListTree {
        fn new() -> Self {
            let nodes = alloc::vec![
                Node {
                    parent: None,
                    rect: Rect::new(0.0, 0.0, 200.0, 150.0),
                },
                Node {
                    parent: Some(PARENT),
                    rect: Rect::new(170.0, 0.0, 200.0, 300.0),
                },
                Node {
                    parent: Some(PARENT),
                    rect: Rect::new(0.0, 0.0, 170.0, 120.0),
                },
                Node {
                    parent: Some(PARENT),
                    rect: Rect::new(0.0, 120.0, 170.0, 260.0),
                },
                Node {
                    parent: None,
                    rect: Rect::new(500.0, 0.0, 600.0, 100.0),
                },
            ];
            Self {
                nodes,
                content: Rect::new(0.0, 0.0, 200.0, 150.0),
            }
        }
    }

    impl LayoutTree<u32> for ListTree {
        fn dest_rect(&self, id: u32) -> Rect {
            self.nodes[id as usize].rect
        }
        fn internal_rect(&self, id: u32) -> Rect {
            if id == PARENT {
                self.content
            } else {
                self.dest_rect(id)
            }
        }
        fn parent(&self, id: u32) -> Option<u32> {
            self.nodes[id as usize].parent
        }
        fn children_into(&self, id: u32, out: &mut Vec<u32>) {
            out.extend(
                (0..self.nodes.len() as u32).filter(|&n| self.nodes[n as usize].parent == Some(id)),
            );
        }
    }

    // Track 30 px wide: frame = 0.1 * 300 * (30 / 30) = 30 px, mark = 2 * 30 = 60 px.
    fn catalog() -> TextureCatalog {
        TextureCatalog::new(
            Texture::new(TextureId(1), 64, 64),
            Texture::new(TextureId(2), 30, 300),
            Texture::new(TextureId(3), 30, 60),
            0.1,
        )
    }

    fn scrollbar(min: u32, max: u32) -> VerticalScrollbar<u32> {
        let mut bar = VerticalScrollbar::new(BAR, min, max, false, &ScrollbarConfig::default());
        bar.measure(30.0, &catalog());
        bar
    }

    fn tick(bar: &mut VerticalScrollbar<u32>, input: InputSnapshot, active: Option<u32>) {
        let tree = ListTree::new();
        let cx = FrameCx::new(&tree, &input, active);
        update_interactive(bar, &cx);
    }

    fn at(y: f64) -> InputSnapshot {
        InputSnapshot::at(Point::new(185.0, y))
    }

    #[test]
    fn new_scrollbar_uses_config_and_initial_geometry() {
        let bar = VerticalScrollbar::new(BAR, 0, 10, true, &ScrollbarConfig::default());
        assert_eq!(bar.size(), Vec2::new(30.0, 0.0));
        assert_eq!(bar.frame_height_px(), 0.0);
        assert_eq!(bar.mark_height(), 20.0);
        assert_eq!(bar.value(), 0);
        assert!(bar.adjust_max_automatically());
        assert!(bar.interactable());
    }

    #[test]
    fn measure_scales_frame_by_track_width() {
        let mut bar = scrollbar(0, 10);
        assert_eq!(bar.frame_height_px(), 30.0);
        assert_eq!(bar.mark_height(), 60.0);

        bar.measure(15.0, &catalog());
        assert_eq!(bar.frame_height_px(), 15.0);
        assert_eq!(bar.mark_height(), 30.0);

        // Mark height truncates to whole pixels.
        bar.measure(17.0, &catalog());
        assert_eq!(bar.mark_height(), 34.0);
        bar.measure(16.7, &catalog());
        assert_eq!(bar.mark_height(), 33.0);
    }

    #[test]
    fn top_frame_press_steps_once_toward_min() {
        let mut bar = scrollbar(0, 100);
        bar.range_mut().set_steps_count(20);
        bar.set_value(50);

        tick(&mut bar, at(10.0).pressing(), Some(BAR));
        assert_eq!(bar.value(), 45);
        assert_eq!(bar.press_state(), PressState::TopFrame);

        // Holding in the frame does not keep stepping or jump to the pointer.
        tick(&mut bar, at(20.0).holding(), Some(BAR));
        assert_eq!(bar.value(), 45);
    }

    #[test]
    fn bottom_frame_press_steps_once_toward_max() {
        let mut bar = scrollbar(0, 100);
        bar.range_mut().set_steps_count(20);
        bar.set_value(50);

        tick(&mut bar, at(290.0).pressing(), Some(BAR));
        assert_eq!(bar.value(), 55);
        assert_eq!(bar.press_state(), PressState::BottomFrame);
    }

    #[test]
    fn frame_press_near_bound_stops_at_bound() {
        let mut bar = scrollbar(0, 100);
        bar.range_mut().set_steps_count(20);
        bar.set_value(3);
        tick(&mut bar, at(0.0).pressing(), Some(BAR));
        assert_eq!(bar.value(), 0);
    }

    #[test]
    fn frame_edges_are_inclusive() {
        let mut bar = scrollbar(0, 10);
        bar.set_value(5);
        tick(&mut bar, at(30.0).pressing(), Some(BAR));
        assert_eq!(bar.press_state(), PressState::TopFrame);
        assert_eq!(bar.value(), 4);

        tick(&mut bar, at(270.0).releasing(), Some(BAR));
        tick(&mut bar, at(270.0).pressing(), Some(BAR));
        assert_eq!(bar.press_state(), PressState::BottomFrame);
        assert_eq!(bar.value(), 5);
    }

    #[test]
    fn drag_to_band_center_maps_to_midpoint() {
        // internal height = (300 - 30) - 30 = 240; center = 15 + 30 + 120.
        let mut bar = scrollbar(0, 10);
        tick(&mut bar, at(165.0).pressing(), Some(BAR));
        assert_eq!(bar.press_state(), PressState::Track);
        assert_eq!(bar.value(), 5);
    }

    #[test]
    fn drag_follows_pointer_while_held() {
        let mut bar = scrollbar(0, 240);
        tick(&mut bar, at(165.0).pressing(), Some(BAR));
        assert_eq!(bar.value(), 120);

        tick(&mut bar, at(105.0).holding(), Some(BAR));
        assert_eq!(bar.value(), 60);

        // Above the mark's reference point maps below min and clamps.
        tick(&mut bar, at(20.0).holding(), Some(BAR));
        assert_eq!(bar.value(), 0);
    }

    #[test]
    fn drag_rounds_half_away_from_zero() {
        // Frame 0.5 * 28 = 14 px, mark 60 px: internal height (300 - 14) - 30 = 256.
        let short_caps = TextureCatalog::new(
            Texture::new(TextureId(1), 64, 64),
            Texture::new(TextureId(2), 30, 28),
            Texture::new(TextureId(3), 30, 60),
            0.5,
        );
        let mut bar = scrollbar(0, 512);
        bar.measure(30.0, &short_caps);
        assert_eq!(bar.frame_height_px(), 14.0);
        tick(&mut bar, at(100.0).pressing(), Some(BAR));
        assert_eq!(bar.press_state(), PressState::Track);

        // relative position 30.25 -> 60.5 -> 61
        tick(&mut bar, at(67.25).holding(), Some(BAR));
        assert_eq!(bar.value(), 61);
        // relative position 30.0 -> 60
        tick(&mut bar, at(67.0).holding(), Some(BAR));
        assert_eq!(bar.value(), 60);
    }

    #[test]
    fn drag_outside_usable_band_is_inert() {
        let mut bar = scrollbar(0, 240);
        tick(&mut bar, at(165.0).pressing(), Some(BAR));
        assert_eq!(bar.value(), 120);

        // Band is strictly between 15 and 285.
        tick(&mut bar, at(15.0).holding(), Some(BAR));
        assert_eq!(bar.value(), 120);
        tick(&mut bar, at(290.0).holding(), Some(BAR));
        assert_eq!(bar.value(), 120);
    }

    #[test]
    fn release_ends_drag() {
        let mut bar = scrollbar(0, 240);
        tick(&mut bar, at(165.0).pressing(), Some(BAR));
        tick(&mut bar, at(165.0).releasing(), Some(BAR));
        assert_eq!(bar.press_state(), PressState::Idle);
        assert_eq!(bar.visual_state(), VisualState::Default);

        // A later hold without a new press does not drag.
        tick(&mut bar, at(105.0).holding(), Some(BAR));
        assert_eq!(bar.value(), 120);
    }

    #[test]
    fn release_elsewhere_resets_press() {
        let mut bar = scrollbar(0, 240);
        tick(&mut bar, at(165.0).pressing(), Some(BAR));
        tick(&mut bar, at(165.0).releasing(), Some(ROW_A));
        assert_eq!(bar.press_state(), PressState::Idle);
    }

    #[test]
    fn wheel_on_active_scrollbar_steps_once() {
        let mut bar = scrollbar(0, 100);
        bar.range_mut().set_steps_count(20);
        bar.set_value(50);

        tick(&mut bar, at(165.0).with_wheel(-1), Some(BAR));
        assert_eq!(bar.value(), 55);

        tick(&mut bar, at(165.0).with_wheel(2), Some(BAR));
        assert_eq!(bar.value(), 45);
    }

    #[test]
    fn wheel_over_parent_or_siblings_scrolls() {
        let mut bar = scrollbar(0, 100);
        bar.set_value(50);

        tick(&mut bar, at(0.0).with_wheel(1), Some(PARENT));
        assert_eq!(bar.value(), 49);

        tick(&mut bar, at(0.0).with_wheel(-3), Some(ROW_B));
        assert_eq!(bar.value(), 52);
    }

    #[test]
    fn wheel_elsewhere_or_without_focus_is_ignored() {
        let mut bar = scrollbar(0, 100);
        bar.set_value(50);

        tick(&mut bar, at(0.0).with_wheel(1), Some(ELSEWHERE));
        tick(&mut bar, at(0.0).with_wheel(1), None);
        assert_eq!(bar.value(), 50);

        bar.set_interactable(false);
        tick(&mut bar, at(0.0).with_wheel(1), Some(ROW_A));
        assert_eq!(bar.value(), 50);
    }

    #[test]
    fn auto_max_uses_lowest_sibling() {
        let tree = ListTree::new();
        let mut bar = VerticalScrollbar::new(BAR, 0, 1000, true, &ScrollbarConfig::default());
        bar.set_value(300);

        bar.calc_auto_max(&tree);
        // Rows end at 120 and 260; the scrollbar itself (bottom 300) is skipped.
        assert_eq!(bar.range().max(), 110);
        assert_eq!(bar.value(), 110);
    }

    #[test]
    fn auto_max_floors_at_zero_and_needs_opt_in() {
        let mut tree = ListTree::new();
        tree.content = Rect::new(0.0, 0.0, 200.0, 400.0);

        let mut bar = VerticalScrollbar::new(BAR, 0, 50, true, &ScrollbarConfig::default());
        bar.calc_auto_max(&tree);
        assert_eq!(bar.range().max(), 0);

        let mut manual = VerticalScrollbar::new(BAR, 0, 50, false, &ScrollbarConfig::default());
        manual.calc_auto_max(&tree);
        assert_eq!(manual.range().max(), 50);
    }

    #[test]
    fn auto_max_without_parent_is_a_no_op() {
        let tree = ListTree::new();
        let mut bar = VerticalScrollbar::new(ELSEWHERE, 0, 50, true, &ScrollbarConfig::default());
        bar.calc_auto_max(&tree);
        assert_eq!(bar.range().max(), 50);
    }

    #[test]
    fn mark_rect_tracks_value() {
        let mut bar = scrollbar(0, 100);
        let track = Rect::new(170.0, 0.0, 200.0, 300.0);

        // Travel = 300 - 60 - 60 = 180.
        assert_eq!(bar.mark_rect(track), Rect::new(170.0, 30.0, 200.0, 90.0));
        bar.set_value(50);
        assert_eq!(bar.mark_rect(track), Rect::new(170.0, 120.0, 200.0, 180.0));
        bar.set_value(100);
        assert_eq!(bar.mark_rect(track), Rect::new(170.0, 210.0, 200.0, 270.0));
    }

    #[test]
    fn empty_range_puts_mark_at_top() {
        let bar = scrollbar(5, 5);
        let track = Rect::new(170.0, 0.0, 200.0, 300.0);
        assert_eq!(bar.mark_rect(track), Rect::new(170.0, 30.0, 200.0, 90.0));
    }

    #[test]
    fn draw_emits_track_then_mark_with_fill_tint() {
        let tree = ListTree::new();
        let catalog = catalog();
        let input = InputSnapshot::default();
        let cx = FrameCx::new(&tree, &input, None);

        let mut bar = VerticalScrollbar::new(BAR, 0, 100, false, &ScrollbarConfig::default());
        bar.style_mut().set(
            VisualState::Default,
            names::FILL_COLOR,
            StyleProperty::from(Color::BLACK),
        );
        bar.set_value(100);

        let mut ops: Vec<DrawOp> = Vec::new();
        bar.draw(&cx, &mut DrawCx::new(&catalog, &mut ops));

        assert_eq!(ops.len(), 2);
        match ops[0] {
            DrawOp::Surface {
                texture,
                dest,
                frame,
                scale,
                ..
            } => {
                assert_eq!(texture, TextureId(2));
                assert_eq!(dest, tree.dest_rect(BAR));
                assert_eq!(frame, Vec2::new(0.0, 0.1));
                assert_eq!(scale, 1.0);
            }
            DrawOp::Image { .. } => panic!("track must be drawn as a surface"),
        }
        assert_eq!(ops[1].texture(), TextureId(3));
        assert_eq!(ops[1].dest(), Rect::new(170.0, 210.0, 200.0, 270.0));
        for op in &ops {
            assert_eq!(op.tint().components, Color::BLACK.components);
        }
    }

    #[test]
    fn draw_recomputes_auto_max_every_frame() {
        let mut tree = ListTree::new();
        let catalog = catalog();
        let input = InputSnapshot::default();
        let mut bar = VerticalScrollbar::new(BAR, 0, 0, true, &ScrollbarConfig::default());
        let mut ops: Vec<DrawOp> = Vec::new();

        {
            let cx = FrameCx::new(&tree, &input, None);
            bar.draw(&cx, &mut DrawCx::new(&catalog, &mut ops));
        }
        assert_eq!(bar.range().max(), 110);

        tree.nodes[ROW_B as usize].rect = Rect::new(0.0, 120.0, 170.0, 400.0);
        {
            let cx = FrameCx::new(&tree, &input, None);
            bar.draw(&cx, &mut DrawCx::new(&catalog, &mut ops));
        }
        assert_eq!(bar.range().max(), 250);
    }

    #[test]
    fn pressed_state_selects_pressed_style() {
        let mut bar = scrollbar(0, 10);
        bar.style_mut()
            .set(VisualState::Pressed, names::FILL_COLOR, Color::BLACK.into());
        tick(&mut bar, at(165.0).pressing(), Some(BAR));
        assert_eq!(bar.visual_state(), VisualState::Pressed);
        let tint = bar
            .style()
            .resolve(bar.visual_state(), names::FILL_COLOR)
            .as_color();
        assert_eq!(tint.components, Color::BLACK.components);
    }
}
