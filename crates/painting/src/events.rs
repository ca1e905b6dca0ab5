//! Typed notification bus for editor state changes.
//!
//! Every mutation of the cube model is announced as an [`EditorEvent`].
//! Subscribers register for one [`EventKind`] (or for everything) on an
//! [`EventBus`] handle that is passed to the model at construction time, so
//! independent editors never share listeners.
//!
//! Delivery is synchronous: by the time `emit` returns, every listener has
//! seen the event and the model has already finished the mutation.

use std::cell::RefCell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use tracing::error;

use crate::color::Color;
use crate::face::Snapshot;
use crate::types::{BrushSize, FaceName, ReplaceScope};

/// Events emitted by the cube model and the history manager.
#[derive(Debug, Clone)]
pub enum EditorEvent {
    /// A single cell was written.
    PixelChanged {
        face: FaceName,
        x: u32,
        y: u32,
        color: Color,
    },
    /// The active face changed.
    FaceChanged { face: FaceName },
    /// The drawing color changed.
    ColorChanged { color: Color },
    /// The brush size changed.
    BrushSizeChanged { size: BrushSize },
    /// A face was overwritten with a copy of another.
    FaceCopied { source: FaceName, target: FaceName },
    /// A face was reset to the blank fill.
    FaceCleared { face: FaceName },
    /// A bulk color replacement changed `count` cells.
    ColorReplaced {
        from: Color,
        to: Color,
        scope: ReplaceScope,
        count: usize,
    },
    /// Many cells changed at once; listeners should re-render everything.
    StateRestored { faces: Snapshot },
    /// The pointer hovers a cell while not drawing (None when it leaves the grid).
    PixelHover { color: Option<Color> },
    /// Undo/redo availability changed.
    HistoryChanged {
        can_undo: bool,
        can_redo: bool,
        undo_count: usize,
        redo_count: usize,
    },
}

/// Subscription key, one per [`EditorEvent`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PixelChange,
    FaceChange,
    ColorChange,
    BrushSizeChange,
    FaceCopied,
    FaceCleared,
    ColorReplaced,
    StateRestored,
    PixelHover,
    HistoryChange,
}

impl EditorEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            EditorEvent::PixelChanged { .. } => EventKind::PixelChange,
            EditorEvent::FaceChanged { .. } => EventKind::FaceChange,
            EditorEvent::ColorChanged { .. } => EventKind::ColorChange,
            EditorEvent::BrushSizeChanged { .. } => EventKind::BrushSizeChange,
            EditorEvent::FaceCopied { .. } => EventKind::FaceCopied,
            EditorEvent::FaceCleared { .. } => EventKind::FaceCleared,
            EditorEvent::ColorReplaced { .. } => EventKind::ColorReplaced,
            EditorEvent::StateRestored { .. } => EventKind::StateRestored,
            EditorEvent::PixelHover { .. } => EventKind::PixelHover,
            EditorEvent::HistoryChanged { .. } => EventKind::HistoryChange,
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&EditorEvent)>;

struct Subscriber {
    id: SubscriptionId,
    /// None subscribes to every kind
    kind: Option<EventKind>,
    listener: Listener,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

/// Cloneable handle to a set of listeners.
///
/// Clones share the same registry. Listeners may subscribe or unsubscribe
/// from inside a callback; the change applies from the next emission.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Rc<RefCell<Registry>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listener_count = self.registry.borrow().subscribers.len();
        f.debug_struct("EventBus")
            .field("listener_count", &listener_count)
            .finish()
    }
}

impl EventBus {
    /// Create a bus with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for one kind of event.
    pub fn subscribe<F>(&self, kind: EventKind, listener: F) -> SubscriptionId
    where
        F: Fn(&EditorEvent) + 'static,
    {
        self.register(Some(kind), Rc::new(listener))
    }

    /// Register a listener for every event.
    pub fn subscribe_all<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&EditorEvent) + 'static,
    {
        self.register(None, Rc::new(listener))
    }

    fn register(&self, kind: Option<EventKind>, listener: Listener) -> SubscriptionId {
        let mut registry = self.registry.borrow_mut();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.subscribers.push(Subscriber { id, kind, listener });
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.subscribers.len();
        registry.subscribers.retain(|s| s.id != id);
        registry.subscribers.len() != before
    }

    /// Number of listeners that would receive an event of this kind.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.registry
            .borrow()
            .subscribers
            .iter()
            .filter(|s| s.kind.is_none_or(|k| k == kind))
            .count()
    }

    /// Remove every listener.
    pub fn clear(&self) {
        self.registry.borrow_mut().subscribers.clear();
    }

    /// Deliver an event to all matching listeners.
    ///
    /// A panicking listener is logged and skipped; the remaining listeners
    /// still receive the event.
    pub fn emit(&self, event: EditorEvent) {
        let kind = event.kind();
        let listeners: Vec<Listener> = self
            .registry
            .borrow()
            .subscribers
            .iter()
            .filter(|s| s.kind.is_none_or(|k| k == kind))
            .map(|s| Rc::clone(&s.listener))
            .collect();

        for listener in listeners {
            let result = catch_unwind(AssertUnwindSafe(|| listener(&event)));
            if result.is_err() {
                error!("Listener for {:?} panicked; continuing delivery", kind);
            }
        }
    }
}
