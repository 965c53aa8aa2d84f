// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-state style sheets.

use alloc::string::String;

use hashbrown::HashMap;

use crate::StyleProperty;

/// Visual state of a widget, used to pick which style values apply.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisualState {
    /// Resting state; also the fallback for every other state.
    #[default]
    Default,
    /// The pointer is over the widget.
    Hover,
    /// The pointer is held down on the widget.
    Pressed,
}

/// Style values of one widget, keyed by visual state and property name.
///
/// Lookups through [`StyleSheet::resolve`] fall back from the requested state
/// to [`VisualState::Default`], and from there to [`StyleProperty::default`],
/// so drawing code can always read a value.
///
/// ```rust
/// use peniko::Color;
/// use trellis_style::{names, StyleProperty, StyleSheet, VisualState};
///
/// let mut sheet = StyleSheet::new();
/// sheet.set(VisualState::Default, names::FILL_COLOR, Color::BLACK.into());
/// sheet.set(VisualState::Hover, names::SCALE, StyleProperty::from(1.1_f32));
///
/// // Hover has no fill color of its own and falls back to Default.
/// let fill = sheet.resolve(VisualState::Hover, names::FILL_COLOR);
/// assert_eq!(fill.as_color().components, Color::BLACK.components);
///
/// // Nothing anywhere: the value's own defaults apply.
/// assert_eq!(sheet.resolve(VisualState::Pressed, "Padding").as_vector().x, 1.0);
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleSheet {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "HashMap::is_empty")
    )]
    default: HashMap<String, StyleProperty>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "HashMap::is_empty")
    )]
    hover: HashMap<String, StyleProperty>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "HashMap::is_empty")
    )]
    pressed: HashMap<String, StyleProperty>,
}

impl StyleSheet {
    /// Creates an empty style sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self, state: VisualState) -> &HashMap<String, StyleProperty> {
        match state {
            VisualState::Default => &self.default,
            VisualState::Hover => &self.hover,
            VisualState::Pressed => &self.pressed,
        }
    }

    fn state_mut(&mut self, state: VisualState) -> &mut HashMap<String, StyleProperty> {
        match state {
            VisualState::Default => &mut self.default,
            VisualState::Hover => &mut self.hover,
            VisualState::Pressed => &mut self.pressed,
        }
    }

    /// Sets the value of `name` for `state`, replacing any previous value.
    pub fn set(&mut self, state: VisualState, name: &str, value: StyleProperty) {
        let map = self.state_mut(state);
        match map.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                map.insert(String::from(name), value);
            }
        }
    }

    /// Returns the value of `name` set for exactly `state`, without fallback.
    #[must_use]
    pub fn get(&self, state: VisualState, name: &str) -> Option<&StyleProperty> {
        self.state(state).get(name)
    }

    /// Removes the value of `name` for `state`, returning it.
    pub fn remove(&mut self, state: VisualState, name: &str) -> Option<StyleProperty> {
        self.state_mut(state).remove(name)
    }

    /// Returns the effective value of `name` in `state`.
    ///
    /// Resolution order: `state`, then [`VisualState::Default`], then
    /// [`StyleProperty::default`].
    #[must_use]
    pub fn resolve(&self, state: VisualState, name: &str) -> StyleProperty {
        self.get(state, name)
            .or_else(|| self.get(VisualState::Default, name))
            .copied()
            .unwrap_or_default()
    }

    /// Copies every entry of `other` into this sheet, overwriting on conflict.
    ///
    /// Widgets call this after setting construction-time defaults so a
    /// theme's default style for the widget type wins.
    pub fn merge_from(&mut self, other: &Self) {
        for (state, name, value) in other.iter() {
            self.set(state, name, *value);
        }
    }

    /// Number of entries across all states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.default.len() + self.hover.len() + self.pressed.len()
    }

    /// Returns `true` if no state has any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over `(state, name, value)` for every entry, state by state.
    pub fn iter(&self) -> impl Iterator<Item = (VisualState, &str, &StyleProperty)> + '_ {
        [VisualState::Default, VisualState::Hover, VisualState::Pressed]
            .into_iter()
            .flat_map(move |state| {
                self.state(state)
                    .iter()
                    .map(move |(name, value)| (state, name.as_str(), value))
            })
    }
}

/// Well-known style property names.
pub mod names {
    /// Tint applied to a widget's main graphic.
    pub const FILL_COLOR: &str = "FillColor";
    /// Tint applied to a widget's background plate.
    pub const BACKGROUND_COLOR: &str = "BackgroundColor";
    /// Uniform scale factor.
    pub const SCALE: &str = "Scale";
    /// Opacity multiplier.
    pub const OPACITY: &str = "Opacity";
}
