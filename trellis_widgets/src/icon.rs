// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icon widget: an image with an optional inventory-slot background.

use kurbo::{Rect, Vec2};
use peniko::Color;
use trellis_style::{StyleProperty, StyleSheet, VisualState, names};

use crate::{DrawCx, Drawable, FrameCx, Image, ResourceError, Resources, Texture, Widget};

/// Construction defaults shared by all icons of a theme.
#[derive(Clone, Debug)]
pub struct IconConfig {
    /// Base size of a new icon, before scaling.
    pub default_size: Vec2,
    /// How far the background plate extends around the icon, in pixels.
    pub background_size: u32,
    /// Style merged into every new icon's sheet, after the built-in defaults.
    pub default_style: StyleSheet,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            default_size: Vec2::new(50.0, 50.0),
            background_size: 10,
            default_style: StyleSheet::new(),
        }
    }
}

/// A small image, optionally drawn on an inventory-slot background plate.
///
/// The background is tinted with the resolved `BackgroundColor` style value
/// (white unless the theme or the caller overrides it). When a background is
/// requested the icon reserves `background_size` extra pixels after itself on
/// both axes so neighbouring widgets do not overlap the plate.
///
/// ```rust
/// use kurbo::Vec2;
/// use trellis_widgets::{Icon, IconConfig, Texture, TextureId};
///
/// let config = IconConfig::default();
/// let icon = Icon::with_texture(7_u32, Texture::new(TextureId(3), 32, 32), 1.0, true, &config);
/// assert_eq!(icon.image().space_after(), Vec2::new(10.0, 10.0));
/// assert_eq!(icon.image().reserved_size(), Vec2::new(60.0, 60.0));
/// ```
#[derive(Clone, Debug)]
pub struct Icon<K> {
    image: Image<K>,
    draw_background: bool,
    background_size: u32,
}

impl<K: Copy> Icon<K> {
    /// Creates an icon without a texture; set one later through [`Icon::image_mut`].
    pub fn empty(id: K, scale: f64, background: bool, config: &IconConfig) -> Self {
        Self::setup(id, None, scale, background, config)
    }

    /// Creates an icon showing the catalog texture registered as `name`.
    pub fn named(
        id: K,
        name: &str,
        resources: &dyn Resources,
        scale: f64,
        background: bool,
        config: &IconConfig,
    ) -> Result<Self, ResourceError> {
        let texture = resources.icon(name)?;
        Ok(Self::setup(id, Some(texture), scale, background, config))
    }

    /// Creates an icon showing `texture`.
    pub fn with_texture(
        id: K,
        texture: Texture,
        scale: f64,
        background: bool,
        config: &IconConfig,
    ) -> Self {
        Self::setup(id, Some(texture), scale, background, config)
    }

    fn setup(
        id: K,
        texture: Option<Texture>,
        scale: f64,
        background: bool,
        config: &IconConfig,
    ) -> Self {
        let mut image = Image::new(id, texture, config.default_size);
        image.set_scale(scale);
        image.style_mut().set(
            VisualState::Default,
            names::BACKGROUND_COLOR,
            StyleProperty::from_color(Color::WHITE),
        );
        if background {
            let space = f64::from(config.background_size);
            image.set_space_after(Vec2::new(space, space));
        }
        image.style_mut().merge_from(&config.default_style);
        Self {
            image,
            draw_background: background,
            background_size: config.background_size,
        }
    }

    /// The underlying image.
    #[must_use]
    pub fn image(&self) -> &Image<K> {
        &self.image
    }

    /// Mutable access to the underlying image (texture, scale, style).
    pub fn image_mut(&mut self) -> &mut Image<K> {
        &mut self.image
    }

    /// Whether the background plate is drawn.
    #[must_use]
    pub fn draw_background(&self) -> bool {
        self.draw_background
    }

    /// Shows or hides the background plate.
    ///
    /// This does not change the trailing space reserved at construction.
    pub fn set_draw_background(&mut self, draw_background: bool) {
        self.draw_background = draw_background;
    }

    /// How far the background plate extends around the icon, in pixels.
    #[must_use]
    pub fn background_size(&self) -> u32 {
        self.background_size
    }

    /// The background plate's rectangle for an icon drawn at `dest`.
    ///
    /// Shifted up and left by half the background size (rounded down) and
    /// grown by the full background size on both axes.
    #[must_use]
    pub fn background_rect(&self, dest: Rect) -> Rect {
        let half = f64::from(self.background_size / 2);
        let grow = f64::from(self.background_size);
        let x0 = dest.x0 - half;
        let y0 = dest.y0 - half;
        Rect::new(x0, y0, x0 + dest.width() + grow, y0 + dest.height() + grow)
    }
}

impl<K: Copy> Widget<K> for Icon<K> {
    fn id(&self) -> K {
        self.image.id()
    }
}

impl<K: Copy + PartialEq> Drawable<K> for Icon<K> {
    fn draw(&mut self, cx: &FrameCx<'_, K>, dcx: &mut DrawCx<'_>) {
        let dest = cx.tree.dest_rect(self.id());
        if self.draw_background {
            let tint = self
                .image
                .style()
                .resolve(self.image.visual_state(), names::BACKGROUND_COLOR)
                .as_color();
            dcx.batch.draw_image(
                dcx.resources.icon_background().id,
                self.background_rect(dest),
                tint,
            );
        }
        self.image.draw_at(dest, &mut *dcx.batch);
    }
}
