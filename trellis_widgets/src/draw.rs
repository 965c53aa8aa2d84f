// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw contract: the batch widgets emit draw calls into.

use alloc::vec::Vec;

use kurbo::{Rect, Vec2};
use peniko::Color;

use crate::{Resources, TextureId};

/// Sink for widget draw calls.
///
/// A renderer implements this over its sprite batch or display list.
/// `Vec<DrawOp>` implements it by recording every call.
pub trait DrawBatch {
    /// Draws a texture as a nine-slice style surface stretched over `dest`.
    ///
    /// `frame` is the size of the fixed border as a fraction of the texture's
    /// width and height; `scale` scales that border in destination pixels.
    fn draw_surface(
        &mut self,
        texture: TextureId,
        dest: Rect,
        frame: Vec2,
        scale: f64,
        tint: Color,
    );

    /// Draws a texture stretched over `dest`.
    fn draw_image(&mut self, texture: TextureId, dest: Rect, tint: Color);
}

/// A recorded draw call.
#[derive(Copy, Clone, Debug)]
pub enum DrawOp {
    /// See [`DrawBatch::draw_surface`].
    Surface {
        /// Texture to draw.
        texture: TextureId,
        /// Destination rectangle.
        dest: Rect,
        /// Border size as a fraction of the texture size.
        frame: Vec2,
        /// Border scale.
        scale: f64,
        /// Tint.
        tint: Color,
    },
    /// See [`DrawBatch::draw_image`].
    Image {
        /// Texture to draw.
        texture: TextureId,
        /// Destination rectangle.
        dest: Rect,
        /// Tint.
        tint: Color,
    },
}

impl DrawOp {
    /// The texture this call draws.
    #[must_use]
    pub fn texture(&self) -> TextureId {
        match self {
            Self::Surface { texture, .. } | Self::Image { texture, .. } => *texture,
        }
    }

    /// The destination rectangle of this call.
    #[must_use]
    pub fn dest(&self) -> Rect {
        match self {
            Self::Surface { dest, .. } | Self::Image { dest, .. } => *dest,
        }
    }

    /// The tint of this call.
    #[must_use]
    pub fn tint(&self) -> Color {
        match self {
            Self::Surface { tint, .. } | Self::Image { tint, .. } => *tint,
        }
    }
}

impl DrawBatch for Vec<DrawOp> {
    fn draw_surface(
        &mut self,
        texture: TextureId,
        dest: Rect,
        frame: Vec2,
        scale: f64,
        tint: Color,
    ) {
        self.push(DrawOp::Surface {
            texture,
            dest,
            frame,
            scale,
            tint,
        });
    }

    fn draw_image(&mut self, texture: TextureId, dest: Rect, tint: Color) {
        self.push(DrawOp::Image {
            texture,
            dest,
            tint,
        });
    }
}

/// Resources and output batch for one draw pass.
pub struct DrawCx<'a> {
    /// Texture catalog.
    pub resources: &'a dyn Resources,
    /// Output batch.
    pub batch: &'a mut dyn DrawBatch,
}

impl<'a> DrawCx<'a> {
    /// Creates a draw context.
    pub fn new(resources: &'a dyn Resources, batch: &'a mut dyn DrawBatch) -> Self {
        Self { resources, batch }
    }
}

impl core::fmt::Debug for DrawCx<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DrawCx").finish_non_exhaustive()
    }
}
