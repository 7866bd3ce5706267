//! Reveal sections mounted on the event hub.

use crate::events::{EventHub, EventKind, ListenerGuard, ViewportEvent, ViewportMetrics};
use crate::registry::lock;
use folio_core::reveal::{Rect, RevealConfig, RevealSequencer};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Live bounding rect of a section container.
///
/// `None` until the renderer has laid the container out, and again after it
/// is detached. Cheap to clone (Arc internals).
#[derive(Debug, Clone, Default)]
pub struct ContainerRef {
    rect: Arc<Mutex<Option<Rect>>>,
}

impl ContainerRef {
    /// An unattached container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the container's rect relative to the viewport.
    pub fn attach(&self, rect: Rect) {
        *lock(&self.rect) = Some(rect);
    }

    /// The container is no longer in the document.
    pub fn detach(&self) {
        *lock(&self.rect) = None;
    }

    /// Current rect, if laid out.
    pub fn get(&self) -> Option<Rect> {
        *lock(&self.rect)
    }

    /// Move the container by `dy` (a scroll of `-dy`).
    pub fn shift(&self, dy: f64) {
        if let Some(rect) = lock(&self.rect).as_mut() {
            rect.top += dy;
        }
    }
}

/// A [`RevealSequencer`] driven by hub scroll and resize events.
///
/// Mounting registers one scroll and one resize listener; dropping the
/// section releases both.
#[derive(Debug)]
pub struct RevealSection {
    sequencer: Arc<Mutex<RevealSequencer>>,
    container: ContainerRef,
    changed: Arc<AtomicBool>,
    _on_scroll: ListenerGuard,
    _on_resize: ListenerGuard,
}

impl RevealSection {
    /// Mount a section of `item_count` items on `hub`.
    ///
    /// The intersection gate is evaluated once immediately, so a section
    /// already in view when mounted starts revealing without a scroll.
    pub fn mount(
        hub: &EventHub,
        container: ContainerRef,
        config: RevealConfig,
        item_count: usize,
    ) -> Self {
        let sequencer = Arc::new(Mutex::new(RevealSequencer::new(config, item_count)));
        let changed = Arc::new(AtomicBool::new(false));

        let initial = lock(&sequencer).on_resize(container.get(), hub.viewport());
        changed.store(initial, Ordering::SeqCst);

        let handler = |kind: EventKind| {
            let sequencer = Arc::clone(&sequencer);
            let container = container.clone();
            let changed = Arc::clone(&changed);
            move |_: &ViewportEvent, metrics: &ViewportMetrics| {
                let mut sequencer = lock(&sequencer);
                let rect = container.get();
                let did_change = match kind {
                    EventKind::Resize => sequencer.on_resize(rect, metrics.viewport),
                    _ => sequencer.on_scroll(rect, metrics.viewport),
                };
                if did_change {
                    changed.store(true, Ordering::SeqCst);
                }
            }
        };
        let on_scroll = hub.listen(EventKind::Scroll, handler(EventKind::Scroll));
        let on_resize = hub.listen(EventKind::Resize, handler(EventKind::Resize));
        log::debug!("Mounted reveal section with {item_count} items");

        Self {
            sequencer,
            container,
            changed,
            _on_scroll: on_scroll,
            _on_resize: on_resize,
        }
    }

    /// Copy of the sequencer as of the latest event.
    pub fn snapshot(&self) -> RevealSequencer {
        lock(&self.sequencer).clone()
    }

    /// The container this section observes.
    pub fn container(&self) -> &ContainerRef {
        &self.container
    }

    /// Change the number of items.
    pub fn set_item_count(&self, item_count: usize) {
        lock(&self.sequencer).set_item_count(item_count);
        self.changed.store(true, Ordering::SeqCst);
    }

    /// Whether the reveal state changed since the last call.
    pub fn take_changed(&self) -> bool {
        self.changed.swap(false, Ordering::SeqCst)
    }
}
