// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stretched image widget.

use kurbo::{Rect, Vec2};
use trellis_style::{StyleSheet, VisualState, names};

use crate::{DrawBatch, DrawCx, Drawable, FrameCx, Texture, Widget};

/// A texture drawn stretched over the widget's destination rectangle.
///
/// The texture is tinted with the resolved `FillColor` style value. An image
/// without a texture draws nothing.
#[derive(Clone, Debug)]
pub struct Image<K> {
    id: K,
    texture: Option<Texture>,
    scale: f64,
    size: Vec2,
    space_after: Vec2,
    style: StyleSheet,
    visual_state: VisualState,
}

impl<K: Copy> Image<K> {
    /// Creates an image of base `size` for host widget `id`.
    pub fn new(id: K, texture: Option<Texture>, size: Vec2) -> Self {
        Self {
            id,
            texture,
            scale: 1.0,
            size,
            space_after: Vec2::ZERO,
            style: StyleSheet::new(),
            visual_state: VisualState::Default,
        }
    }

    /// The texture drawn, if any.
    #[must_use]
    pub fn texture(&self) -> Option<Texture> {
        self.texture
    }

    /// Replaces the texture.
    pub fn set_texture(&mut self, texture: Option<Texture>) {
        self.texture = texture;
    }

    /// Uniform scale applied to the base size.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the uniform scale.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Base size before scaling.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Extra layout space reserved after the image.
    #[must_use]
    pub fn space_after(&self) -> Vec2 {
        self.space_after
    }

    /// Sets the extra layout space reserved after the image.
    pub fn set_space_after(&mut self, space: Vec2) {
        self.space_after = space;
    }

    /// Total layout space requested: the scaled size plus the trailing space.
    #[must_use]
    pub fn reserved_size(&self) -> Vec2 {
        self.size * self.scale + self.space_after
    }

    /// Style values of this image.
    #[must_use]
    pub fn style(&self) -> &StyleSheet {
        &self.style
    }

    /// Mutable style values of this image.
    pub fn style_mut(&mut self) -> &mut StyleSheet {
        &mut self.style
    }

    /// Visual state used to resolve style values.
    #[must_use]
    pub fn visual_state(&self) -> VisualState {
        self.visual_state
    }

    /// Sets the visual state.
    pub fn set_visual_state(&mut self, state: VisualState) {
        self.visual_state = state;
    }

    /// Draws the texture over `dest`.
    pub fn draw_at(&self, dest: Rect, batch: &mut dyn DrawBatch) {
        let Some(texture) = self.texture else {
            return;
        };
        let tint = self
            .style
            .resolve(self.visual_state, names::FILL_COLOR)
            .as_color();
        batch.draw_image(texture.id, dest, tint);
    }
}

impl<K: Copy> Widget<K> for Image<K> {
    fn id(&self) -> K {
        self.id
    }
}

impl<K: Copy + PartialEq> Drawable<K> for Image<K> {
    fn draw(&mut self, cx: &FrameCx<'_, K>, dcx: &mut DrawCx<'_>) {
        self.draw_at(cx.tree.dest_rect(self.id), &mut *dcx.batch);
    }
}
