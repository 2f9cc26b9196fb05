//! Overlay surface shared by every drawer on the page.
//!
//! DESIGN
//! ======
//! Each open overlay holds one [`OverlaySession`]. Sessions stack in open
//! order on the [`OverlaySurface`]: the body scroll lock is held while the
//! stack is non-empty, and only the top-most session reacts to `Escape`, so
//! stacked drawers close one press at a time. Dropping a session detaches its
//! key listener and releases its place in the stack.
//!
//! [`OverlaySlot`] is the per-component holder a drawer drives from its
//! open signal; `sync` is idempotent so repeated renders never register a
//! second listener.
//!
//! TRADE-OFFS
//! ==========
//! The surface is `Arc<Mutex<_>>` rather than `Rc<RefCell<_>>` because Leptos
//! context values and cleanup hooks must be `Send + Sync`, even though the
//! browser only ever touches it from one thread.

use std::sync::{Arc, Mutex, PoisonError};

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

pub const ESCAPE_KEY: &str = "Escape";

type EscapeHandler = Arc<dyn Fn() + Send + Sync>;

/// Ordered registry of open overlays.
#[derive(Debug, Default)]
pub struct OverlayLocks {
    next_id: u64,
    stack: Vec<u64>,
    saved_overflow: Option<String>,
}

impl OverlayLocks {
    /// Push a new holder. Returns its id and whether it took the scroll lock.
    pub fn acquire(&mut self) -> (u64, bool) {
        self.next_id += 1;
        let first = self.stack.is_empty();
        self.stack.push(self.next_id);
        (self.next_id, first)
    }

    /// Remove a holder. Returns `true` when it was the last one, i.e. the
    /// scroll lock should be lifted. Unknown ids are ignored.
    pub fn release(&mut self, id: u64) -> bool {
        let Some(pos) = self.stack.iter().position(|held| *held == id) else {
            return false;
        };
        self.stack.remove(pos);
        self.stack.is_empty()
    }

    #[must_use]
    pub fn is_top(&self, id: u64) -> bool {
        self.stack.last() == Some(&id)
    }

    #[must_use]
    pub fn holders(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        !self.stack.is_empty()
    }
}

/// Context service owning the overlay stack and the document scroll lock.
#[derive(Clone, Default)]
pub struct OverlaySurface {
    locks: Arc<Mutex<OverlayLocks>>,
}

impl OverlaySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_locks<R>(&self, f: impl FnOnce(&mut OverlayLocks) -> R) -> R {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut locks)
    }

    /// Register an open overlay. `on_escape` runs when `Escape` is pressed
    /// while this overlay is the top-most one.
    pub fn open(&self, on_escape: impl Fn() + Send + Sync + 'static) -> OverlaySession {
        let id = self.with_locks(|locks| {
            let (id, first) = locks.acquire();
            if first {
                locks.saved_overflow = lock_body_scroll();
            }
            id
        });

        let on_escape: EscapeHandler = Arc::new(on_escape);
        #[cfg(feature = "hydrate")]
        let listener = {
            let surface = self.clone();
            let handler = on_escape.clone();
            Some(leptos::prelude::window_event_listener(leptos::ev::keydown, move |ev| {
                if route_key(&surface, id, &ev.key(), &handler) {
                    ev.prevent_default();
                }
            }))
        };

        OverlaySession {
            surface: self.clone(),
            id,
            on_escape,
            #[cfg(feature = "hydrate")]
            listener,
        }
    }

    fn release(&self, id: u64) {
        self.with_locks(|locks| {
            if locks.release(id) {
                restore_body_scroll(locks.saved_overflow.take());
            }
        });
    }

    #[must_use]
    pub fn is_top(&self, id: u64) -> bool {
        self.with_locks(|locks| locks.is_top(id))
    }

    /// Open overlays, which is also the number of attached key listeners.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.with_locks(|locks| locks.holders())
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.with_locks(|locks| locks.is_locked())
    }
}

fn route_key(surface: &OverlaySurface, id: u64, key: &str, on_escape: &EscapeHandler) -> bool {
    if key != ESCAPE_KEY || !surface.is_top(id) {
        return false;
    }
    on_escape();
    true
}

/// One open overlay's claim on the surface. Dropping it detaches the key
/// listener and releases the scroll lock if it was the last holder.
pub struct OverlaySession {
    surface: OverlaySurface,
    id: u64,
    on_escape: EscapeHandler,
    #[cfg(feature = "hydrate")]
    listener: Option<leptos::prelude::WindowListenerHandle>,
}

impl OverlaySession {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Dispatch a key press as the window listener does. Returns whether the
    /// press closed this overlay.
    pub fn handle_key(&self, key: &str) -> bool {
        route_key(&self.surface, self.id, key, &self.on_escape)
    }
}

impl Drop for OverlaySession {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        if let Some(listener) = self.listener.take() {
            listener.remove();
        }
        self.surface.release(self.id);
    }
}

/// Holder for at most one session, driven by a component's open flag.
#[derive(Clone, Default)]
pub struct OverlaySlot {
    session: Arc<Mutex<Option<OverlaySession>>>,
}

impl OverlaySlot {
    /// Follow the open flag: open acquires a session if none is held, closed
    /// drops the held one. Returns whether anything changed.
    pub fn sync(&self, open: bool, surface: &OverlaySurface, on_escape: impl Fn() + Send + Sync + 'static) -> bool {
        let mut slot = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        match (open, slot.is_some()) {
            (true, false) => {
                *slot = Some(surface.open(on_escape));
                true
            }
            (false, true) => {
                let session = slot.take();
                drop(slot);
                drop(session);
                true
            }
            _ => false,
        }
    }

    /// Drop the held session, if any. Called on unmount.
    pub fn clear(&self) {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner).take();
        drop(session);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    /// Route a key press to the held session.
    pub fn handle_key(&self, key: &str) -> bool {
        let slot = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref().is_some_and(|session| session.handle_key(key))
    }
}

/// Hide body overflow, returning the previous inline value.
fn lock_body_scroll() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let body = web_sys::window()?.document()?.body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").ok();
        let _ = style.set_property("overflow", "hidden");
        previous
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn restore_body_scroll(previous: Option<String>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let style = body.style();
            match previous.as_deref() {
                Some(value) if !value.is_empty() => {
                    let _ = style.set_property("overflow", value);
                }
                _ => {
                    let _ = style.remove_property("overflow");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = previous;
    }
}
