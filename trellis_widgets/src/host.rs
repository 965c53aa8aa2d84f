// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contracts: the widget tree and the per-tick input snapshot.
//!
//! Trellis widgets do not own a tree or talk to an input device. The host
//! implements [`LayoutTree`] over whatever structure it keeps (an arena, a box
//! tree, an ECS), samples input once per tick into an [`InputSnapshot`], and
//! passes both to widgets in a [`FrameCx`] together with the currently active
//! element.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

/// Read-only view of the host's widget tree.
///
/// `K` is the host's widget key. Rectangles are in the same coordinate space
/// as [`InputSnapshot::pointer`], with `y` growing downward.
pub trait LayoutTree<K: Copy + PartialEq> {
    /// The widget's destination rectangle, as computed by the host's layout.
    fn dest_rect(&self, id: K) -> Rect;

    /// The widget's internal content area (its destination rectangle minus
    /// padding and decorations).
    fn internal_rect(&self, id: K) -> Rect;

    /// The widget's parent, if it has one.
    fn parent(&self, id: K) -> Option<K>;

    /// Appends the widget's children to `out`, in layout order.
    ///
    /// Callers clear `out` beforehand; implementations only push.
    fn children_into(&self, id: K, out: &mut Vec<K>);

    /// Returns `true` if `ancestor` is a strict ancestor of `id`.
    ///
    /// The default implementation walks [`LayoutTree::parent`].
    fn is_descendant_of(&self, id: K, ancestor: K) -> bool {
        let mut current = self.parent(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }
}

/// Pointer and wheel input sampled once per tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    /// Current pointer position.
    pub pointer: Point,
    /// The primary button went down this tick.
    pub pressed: bool,
    /// The primary button is held (including the tick it went down).
    pub down: bool,
    /// The primary button went up this tick.
    pub released: bool,
    /// Signed wheel steps this tick; positive is away from the user.
    pub wheel_delta: i32,
}

impl InputSnapshot {
    /// An idle snapshot with the pointer at `pointer`.
    #[must_use]
    pub fn at(pointer: Point) -> Self {
        Self {
            pointer,
            ..Self::default()
        }
    }

    /// Marks the primary button as going down this tick (and held).
    #[must_use]
    pub fn pressing(mut self) -> Self {
        self.pressed = true;
        self.down = true;
        self
    }

    /// Marks the primary button as held from an earlier tick.
    #[must_use]
    pub fn holding(mut self) -> Self {
        self.pressed = false;
        self.down = true;
        self
    }

    /// Marks the primary button as going up this tick.
    #[must_use]
    pub fn releasing(mut self) -> Self {
        self.down = false;
        self.released = true;
        self
    }

    /// Sets the wheel delta for this tick.
    #[must_use]
    pub fn with_wheel(mut self, delta: i32) -> Self {
        self.wheel_delta = delta;
        self
    }
}

/// Everything a widget may read during one tick.
///
/// Passed by reference into update and draw hooks in place of any global
/// "current UI" state, so independent trees can run side by side.
#[derive(Copy, Clone)]
pub struct FrameCx<'a, K: Copy + PartialEq> {
    /// The host's widget tree.
    pub tree: &'a dyn LayoutTree<K>,
    /// Input for this tick.
    pub input: &'a InputSnapshot,
    /// The element that currently holds pointer focus, if any.
    pub active: Option<K>,
}

impl<'a, K: Copy + PartialEq> FrameCx<'a, K> {
    /// Creates a context for one tick.
    pub fn new(tree: &'a dyn LayoutTree<K>, input: &'a InputSnapshot, active: Option<K>) -> Self {
        Self {
            tree,
            input,
            active,
        }
    }

    /// Returns `true` if `id` is the active element.
    #[must_use]
    pub fn is_active(&self, id: K) -> bool {
        self.active == Some(id)
    }
}

impl<K: Copy + PartialEq + core::fmt::Debug> core::fmt::Debug for FrameCx<'_, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameCx")
            .field("input", &self.input)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
