//! Load-more pagination over the filtered, sorted catalog.

use serde::{Deserialize, Serialize};

/// Initial visible count and the increment each reveal adds.
pub const REVEAL_STEP: usize = 10;

/// The incrementally growing prefix of the filtered list shown to the user.
///
/// The counter only grows; when active filters shrink the result set below
/// it, the rendered slice shrinks (see [`RevealWindow::end`]) but the
/// counter is left alone. Not persisted: a fresh view starts back at
/// [`REVEAL_STEP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealWindow {
    visible: usize,
}

impl RevealWindow {
    /// A fresh window showing the first [`REVEAL_STEP`] items.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible: REVEAL_STEP,
        }
    }

    /// Restore a window from a caller-held visible count.
    #[must_use]
    pub const fn with_visible(visible: usize) -> Self {
        Self { visible }
    }

    /// The current visible count.
    #[must_use]
    pub const fn visible(self) -> usize {
        self.visible
    }

    /// Grow the window by [`REVEAL_STEP`], clamped to the result size.
    ///
    /// A no-op once the window already covers the whole result set; the
    /// caller should hide the load-more affordance in that state rather
    /// than merely disable it.
    pub const fn reveal_more(&mut self, total: usize) {
        if self.visible >= total {
            return;
        }
        let grown = self.visible + REVEAL_STEP;
        self.visible = if grown < total { grown } else { total };
    }

    /// End of the rendered slice: `min(visible, total)`.
    #[must_use]
    pub const fn end(self, total: usize) -> usize {
        if self.visible < total { self.visible } else { total }
    }

    /// Whether the window already covers the whole result set.
    #[must_use]
    pub const fn is_exhausted(self, total: usize) -> bool {
        self.visible >= total
    }
}

impl Default for RevealWindow {
    fn default() -> Self {
        Self::new()
    }
}
