//! Window-level event fan-out.
//!
//! The hub stands in for the browser window: it records the latest viewport
//! size, scroll offset and cursor position, and forwards each event to the
//! listeners of its kind. Listener lifetimes are tied to [`ListenerGuard`]s,
//! so a section that is torn down early can never be called again.

use crate::registry::{Registration, Registry, lock};
use folio_core::motion::Point;
use folio_core::reveal::Viewport;
use std::sync::{Arc, Mutex};

/// Handle of a hub listener. Dropping it removes the listener.
pub type ListenerGuard = Registration;

/// Kinds of window events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Page scroll.
    Scroll,
    /// Viewport resize.
    Resize,
    /// Pointer movement.
    MouseMove,
}

/// A window event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// The page scrolled to `scroll_y`.
    Scroll {
        /// Vertical scroll offset of the document.
        scroll_y: f64,
    },
    /// The viewport changed size.
    Resize(Viewport),
    /// The pointer moved.
    MouseMove {
        /// Horizontal pointer position.
        x: f64,
        /// Vertical pointer position.
        y: f64,
    },
}

impl ViewportEvent {
    /// Kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            ViewportEvent::Scroll { .. } => EventKind::Scroll,
            ViewportEvent::Resize(_) => EventKind::Resize,
            ViewportEvent::MouseMove { .. } => EventKind::MouseMove,
        }
    }
}

/// Window measurements as of the latest event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    /// Viewport size.
    pub viewport: Viewport,
    /// Document scroll offset.
    pub scroll_y: f64,
    /// Last pointer position.
    pub cursor: Point,
}

impl ViewportMetrics {
    fn apply(&mut self, event: &ViewportEvent) {
        match *event {
            ViewportEvent::Scroll { scroll_y } => self.scroll_y = scroll_y,
            ViewportEvent::Resize(viewport) => self.viewport = viewport,
            ViewportEvent::MouseMove { x, y } => self.cursor = Point::new(x, y),
        }
    }
}

struct Dispatch {
    event: ViewportEvent,
    metrics: ViewportMetrics,
}

struct HubInner {
    metrics: Mutex<ViewportMetrics>,
    listeners: Registry<Dispatch>,
}

/// Shared event hub. Cheap to clone (Arc internals).
#[derive(Clone)]
pub struct EventHub {
    inner: Arc<HubInner>,
}

impl EventHub {
    /// Create a hub for a window of the given size.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            inner: Arc::new(HubInner {
                metrics: Mutex::new(ViewportMetrics {
                    viewport,
                    ..ViewportMetrics::default()
                }),
                listeners: Registry::new(),
            }),
        }
    }

    /// Call `f` for every event of `kind` until the guard is dropped.
    ///
    /// The listener receives the event together with the metrics after the
    /// event has been applied.
    pub fn listen<F>(&self, kind: EventKind, f: F) -> ListenerGuard
    where
        F: Fn(&ViewportEvent, &ViewportMetrics) + Send + Sync + 'static,
    {
        self.inner.listeners.add(move |dispatch: &Dispatch| {
            if dispatch.event.kind() == kind {
                f(&dispatch.event, &dispatch.metrics);
            }
        })
    }

    /// Record `event` and forward it to its listeners.
    pub fn dispatch(&self, event: ViewportEvent) {
        let metrics = {
            let mut metrics = lock(&self.inner.metrics);
            metrics.apply(&event);
            *metrics
        };
        self.inner.listeners.emit(&Dispatch { event, metrics });
    }

    /// Latest measurements.
    pub fn metrics(&self) -> ViewportMetrics {
        *lock(&self.inner.metrics)
    }

    /// Latest viewport size.
    pub fn viewport(&self) -> Viewport {
        self.metrics().viewport
    }

    /// Latest scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.metrics().scroll_y
    }

    /// Number of live listeners, across all kinds.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }
}

impl std::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHub")
            .field("metrics", &self.metrics())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
