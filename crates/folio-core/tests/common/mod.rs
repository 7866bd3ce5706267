//! Common test utilities for folio-core integration tests.

use folio_core::reveal::{Rect, RevealConfig, RevealSequencer, Viewport};

/// Desktop viewport used by most scenarios.
pub const DESKTOP: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

/// Phone-sized viewport.
pub const PHONE: Viewport = Viewport {
    width: 375.0,
    height: 800.0,
};

/// A page with one reveal section laid out at a fixed document offset.
///
/// Scrolling moves the section's bounding rect the way a browser would:
/// `top = offset - scroll_y`.
pub struct PageHarness {
    /// Sequencer under test
    pub sequencer: RevealSequencer,
    /// Document offset of the section container
    pub offset: f64,
    /// Height of the section container
    pub height: f64,
    /// Current viewport
    pub viewport: Viewport,
    /// Current scroll offset
    pub scroll_y: f64,
}

impl PageHarness {
    /// Create a harness and deliver the initial resize, as mounting does.
    pub fn new(config: RevealConfig, item_count: usize, viewport: Viewport) -> Self {
        let mut harness = Self {
            sequencer: RevealSequencer::new(config, item_count),
            offset: 1000.0,
            height: 600.0,
            viewport,
            scroll_y: 0.0,
        };
        harness.resize(viewport);
        harness
    }

    /// Current container rect.
    pub fn rect(&self) -> Rect {
        Rect::new(self.offset - self.scroll_y, self.height)
    }

    /// Scroll to `scroll_y` and tick the sequencer.
    pub fn scroll_to(&mut self, scroll_y: f64) -> bool {
        self.scroll_y = scroll_y;
        let rect = self.rect();
        self.sequencer.on_scroll(Some(rect), self.viewport)
    }

    /// Resize the viewport and tick the sequencer.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        self.viewport = viewport;
        let rect = self.rect();
        self.sequencer.on_resize(Some(rect), viewport)
    }

    /// Visible indices as a vector.
    pub fn visible(&self) -> Vec<usize> {
        self.sequencer.state().visible.iter().copied().collect()
    }
}
