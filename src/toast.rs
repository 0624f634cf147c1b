// Toast notifications: a process-wide broadcast bus decoupling producers
// from renderer views.
//
// `ToastBus` owns the subscriber list (no module-level globals). Producers
// clone the bus and call `post`; each subscriber view owns a `ToastFeed`
// holding its local projection of active toasts. Delivery is fan-out over
// unbounded channels, so a dead or wedged subscriber never blocks the rest.
// With zero subscribers a post is silently dropped; this is fire-and-forget,
// not a durable queue.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;

/// Auto-dismiss delay applied when a post does not specify one.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Sentinel duration meaning "never auto-dismiss".
pub const NEVER: Duration = Duration::MAX;

// ---------------------------------------------------------------------------
// Toast
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    pub fn label(self) -> &'static str {
        match self {
            ToastKind::Success => "OK",
            ToastKind::Error => "ERR",
            ToastKind::Info => "INF",
            ToastKind::Warning => "WRN",
        }
    }
}

/// A single notification message.
///
/// Ids are assigned from a process-lifetime monotonic counter and never
/// reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
    pub duration: Duration,
}

// ---------------------------------------------------------------------------
// ToastBus
// ---------------------------------------------------------------------------

struct BusInner {
    next_id: AtomicU64,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<Toast>>>,
}

/// The broadcast bus. Cloning shares the same subscriber list and id
/// counter; create one at application start and pass clones to producers.
#[derive(Clone)]
pub struct ToastBus {
    inner: Arc<BusInner>,
}

impl ToastBus {
    pub fn new() -> Self {
        ToastBus {
            inner: Arc::new(BusInner {
                next_id: AtomicU64::new(0),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Post with the default duration and no body text. Returns the
    /// assigned id.
    pub fn post(&self, kind: ToastKind, title: impl Into<String>) -> u64 {
        self.post_with(kind, title, None, DEFAULT_TOAST_DURATION)
    }

    /// Post a fully-specified toast to every live subscriber, in call
    /// order. Subscribers whose feed is gone are pruned here; their absence
    /// never affects delivery to the rest.
    pub fn post_with(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
        message: Option<String>,
        duration: Duration,
    ) -> u64 {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let toast = Toast {
            id,
            kind,
            title: title.into(),
            message,
            duration,
        };
        let mut subscribers = self.inner.subscribers.lock().expect("toast lock poisoned");
        subscribers.retain(|tx| tx.send(toast.clone()).is_ok());
        id
    }

    /// Register a new subscriber. Dropping the returned feed unsubscribes.
    pub fn subscribe(&self) -> ToastFeed {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner
            .subscribers
            .lock()
            .expect("toast lock poisoned")
            .push(tx);
        ToastFeed {
            rx,
            active: Vec::new(),
        }
    }

    /// Number of registered subscriber channels (live or not yet pruned).
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .subscribers
            .lock()
            .expect("toast lock poisoned")
            .len()
    }
}

impl Default for ToastBus {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// ToastFeed
// ---------------------------------------------------------------------------

/// A delivered toast with its local expiry deadline (`None` = never).
#[derive(Debug, Clone)]
pub struct ActiveToast {
    pub toast: Toast,
    deadline: Option<Instant>,
}

/// A subscriber's local projection of the active queue, independent of
/// every other subscriber.
///
/// Expiry is poll-based: the owning view calls `poll` from its render tick,
/// which both drains newly delivered toasts and prunes expired ones. A
/// toast leaves the list exactly once; dismissing an already-removed id is
/// a no-op.
pub struct ToastFeed {
    rx: mpsc::UnboundedReceiver<Toast>,
    active: Vec<ActiveToast>,
}

impl ToastFeed {
    /// Drain deliveries and drop entries whose deadline has passed.
    pub fn poll(&mut self, now: Instant) {
        while let Ok(toast) = self.rx.try_recv() {
            let deadline = if toast.duration == NEVER {
                None
            } else {
                now.checked_add(toast.duration)
            };
            self.active.push(ActiveToast { toast, deadline });
        }
        self.active
            .retain(|entry| entry.deadline.is_none_or(|deadline| deadline > now));
    }

    /// Remove the toast with `id`. Idempotent.
    pub fn dismiss(&mut self, id: u64) {
        self.active.retain(|entry| entry.toast.id != id);
    }

    /// Active entries in arrival order.
    pub fn active(&self) -> &[ActiveToast] {
        &self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
