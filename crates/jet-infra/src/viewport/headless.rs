use std::sync::atomic::{AtomicU64, Ordering};

use jet_core::ports::ViewportPort;
use tracing::debug;

/// Viewport for sessions driven without a browser (server rendering, CLI).
///
/// Scroll requests are counted so callers can tell when the page should be
/// re-rendered from the top.
#[derive(Debug, Default)]
pub struct HeadlessViewport {
    scrolls: AtomicU64,
}

impl HeadlessViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_count(&self) -> u64 {
        self.scrolls.load(Ordering::SeqCst)
    }
}

impl ViewportPort for HeadlessViewport {
    fn scroll_to_top(&self) {
        let count = self.scrolls.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(count, "scroll to top requested");
    }
}
