// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resource catalog contract: textures widgets draw with.

use alloc::string::{String, ToString};

use hashbrown::HashMap;

/// Opaque handle to a texture owned by the renderer.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// A texture handle together with its pixel size.
///
/// Widgets only need the size to derive aspect ratios; the pixels stay with
/// the renderer behind [`TextureId`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Texture {
    /// Renderer handle.
    pub id: TextureId,
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
}

impl Texture {
    /// Creates a texture description.
    #[must_use]
    pub const fn new(id: TextureId, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    /// Height divided by width.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }
}

/// Errors reported by a resource catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    /// No icon is registered under the requested name.
    #[error("no icon texture named `{name}`")]
    MissingIcon {
        /// The name that was looked up.
        name: String,
    },
}

/// Textures and theme data the widgets look up by fixed role.
///
/// Only the named icon lookup can fail; the fixed-role entries are part of
/// every theme and are infallible by contract.
pub trait Resources {
    /// The icon texture registered as `name`.
    fn icon(&self, name: &str) -> Result<Texture, ResourceError>;

    /// The inventory-slot plate drawn behind icons.
    fn icon_background(&self) -> Texture;

    /// The vertical scrollbar track.
    fn scrollbar_track(&self) -> Texture;

    /// The vertical scrollbar drag handle.
    fn scrollbar_mark(&self) -> Texture;

    /// Height of each end cap of the track graphic, as a fraction of the
    /// track texture's height.
    fn scrollbar_frame_height(&self) -> f64;
}

/// In-memory [`Resources`] implementation.
///
/// ```rust
/// use trellis_widgets::{Resources, Texture, TextureCatalog, TextureId};
///
/// let mut catalog = TextureCatalog::new(
///     Texture::new(TextureId(1), 64, 64),
///     Texture::new(TextureId(2), 30, 300),
///     Texture::new(TextureId(3), 30, 60),
///     0.1,
/// );
/// catalog.insert_icon("sword", Texture::new(TextureId(10), 32, 32));
///
/// assert_eq!(catalog.icon("sword").unwrap().id, TextureId(10));
/// assert!(catalog.icon("shield").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct TextureCatalog {
    icons: HashMap<String, Texture>,
    icon_background: Texture,
    scrollbar_track: Texture,
    scrollbar_mark: Texture,
    scrollbar_frame_height: f64,
}

impl TextureCatalog {
    /// Creates a catalog with the fixed-role entries and no icons.
    #[must_use]
    pub fn new(
        icon_background: Texture,
        scrollbar_track: Texture,
        scrollbar_mark: Texture,
        scrollbar_frame_height: f64,
    ) -> Self {
        Self {
            icons: HashMap::new(),
            icon_background,
            scrollbar_track,
            scrollbar_mark,
            scrollbar_frame_height,
        }
    }

    /// Registers an icon texture under `name`, returning any texture it replaces.
    pub fn insert_icon(&mut self, name: &str, texture: Texture) -> Option<Texture> {
        self.icons.insert(name.to_string(), texture)
    }
}

impl Resources for TextureCatalog {
    fn icon(&self, name: &str) -> Result<Texture, ResourceError> {
        self.icons
            .get(name)
            .copied()
            .ok_or_else(|| ResourceError::MissingIcon {
                name: name.to_string(),
            })
    }

    fn icon_background(&self) -> Texture {
        self.icon_background
    }

    fn scrollbar_track(&self) -> Texture {
        self.scrollbar_track
    }

    fn scrollbar_mark(&self) -> Texture {
        self.scrollbar_mark
    }

    fn scrollbar_frame_height(&self) -> f64 {
        self.scrollbar_frame_height
    }
}
