//! Scroll restoration policy applied after each navigation.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use std::collections::VecDeque;

/// Window scroll offset in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

impl ScrollPosition {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where the window should end up after a navigation.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollTarget {
    /// Scroll the element with this id into view.
    Element(String),
    /// Scroll to an absolute offset.
    Position(ScrollPosition),
}

/// Pick the scroll target for a navigation.
///
/// A URL fragment wins, then a saved position for the destination, then the
/// origin.
#[must_use]
pub fn scroll_target(fragment: &str, saved: Option<ScrollPosition>) -> ScrollTarget {
    let id = fragment.strip_prefix('#').unwrap_or(fragment);
    if !id.is_empty() {
        let id = urlencoding::decode(id).map_or_else(|_| id.to_owned(), std::borrow::Cow::into_owned);
        return ScrollTarget::Element(id);
    }
    ScrollTarget::Position(saved.unwrap_or(ScrollPosition::ORIGIN))
}

/// How the current location was reached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Navigation {
    /// Link click or programmatic navigation.
    #[default]
    Push,
    /// Browser back/forward (`popstate`).
    Traverse,
}

/// Upper bound on remembered offsets; the least recently recorded go first.
pub const MAX_SAVED_POSITIONS: usize = 64;

/// Last known scroll offset per path, recorded when leaving a page.
///
/// Offsets are only handed back on history traversal, so following a link to
/// a page seen before still starts at the top.
#[derive(Clone, Debug, Default)]
pub struct ScrollMemory {
    positions: VecDeque<(String, ScrollPosition)>,
}

impl ScrollMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: &str, position: ScrollPosition) {
        self.positions.retain(|(saved, _)| saved != path);
        self.positions.push_back((path.to_owned(), position));
        while self.positions.len() > MAX_SAVED_POSITIONS {
            self.positions.pop_front();
        }
    }

    #[must_use]
    pub fn saved(&self, path: &str) -> Option<ScrollPosition> {
        self.positions.iter().find(|(saved, _)| saved == path).map(|(_, position)| *position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Target for arriving at `path` with `fragment`.
    #[must_use]
    pub fn target_for(&self, path: &str, fragment: &str, navigation: Navigation) -> ScrollTarget {
        let saved = match navigation {
            Navigation::Traverse => self.saved(path),
            Navigation::Push => None,
        };
        scroll_target(fragment, saved)
    }
}
