#![cfg(not(feature = "hydrate"))]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let hook = count.clone();
    (count, move || {
        hook.fetch_add(1, Ordering::SeqCst);
    })
}

// =============================================================
// OverlayLocks
// =============================================================

#[test]
fn first_acquire_takes_lock_and_last_release_lifts_it() {
    let mut locks = OverlayLocks::default();
    let (a, first_a) = locks.acquire();
    let (b, first_b) = locks.acquire();
    assert!(first_a);
    assert!(!first_b);
    assert!(locks.is_top(b));

    assert!(!locks.release(a));
    assert!(locks.is_locked());
    assert!(locks.release(b));
    assert!(!locks.is_locked());
}

#[test]
fn releasing_unknown_id_is_ignored() {
    let mut locks = OverlayLocks::default();
    let (id, _) = locks.acquire();
    assert!(!locks.release(id + 100));
    assert_eq!(locks.holders(), 1);
    assert!(locks.release(id));
    assert!(!locks.release(id));
}

// =============================================================
// Sessions
// =============================================================

#[test]
fn dropping_session_restores_scroll_lock() {
    let surface = OverlaySurface::new();
    let session = surface.open(|| {});
    assert!(surface.is_scroll_locked());
    drop(session);
    assert!(!surface.is_scroll_locked());
    assert_eq!(surface.holders(), 0);
}

#[test]
fn escape_closes_once_per_press_and_other_keys_never() {
    let surface = OverlaySurface::new();
    let (closes, on_escape) = counter();
    let session = surface.open(on_escape);

    assert!(!session.handle_key("Enter"));
    assert!(!session.handle_key("a"));
    assert!(!session.handle_key("escape"));
    assert_eq!(closes.load(Ordering::SeqCst), 0);

    assert!(session.handle_key(ESCAPE_KEY));
    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert!(session.handle_key(ESCAPE_KEY));
    assert_eq!(closes.load(Ordering::SeqCst), 2);
}

#[test]
fn only_top_most_session_reacts_to_escape() {
    let surface = OverlaySurface::new();
    let (lower_closes, lower_hook) = counter();
    let (upper_closes, upper_hook) = counter();
    let lower = surface.open(lower_hook);
    let upper = surface.open(upper_hook);

    assert!(!lower.handle_key(ESCAPE_KEY));
    assert!(upper.handle_key(ESCAPE_KEY));
    assert_eq!(lower_closes.load(Ordering::SeqCst), 0);
    assert_eq!(upper_closes.load(Ordering::SeqCst), 1);

    drop(upper);
    assert!(surface.is_scroll_locked());
    assert!(lower.handle_key(ESCAPE_KEY));
    assert_eq!(lower_closes.load(Ordering::SeqCst), 1);
}

#[test]
fn closing_lower_overlay_keeps_lock_for_upper() {
    let surface = OverlaySurface::new();
    let lower = surface.open(|| {});
    let upper = surface.open(|| {});
    drop(lower);
    assert!(surface.is_scroll_locked());
    assert!(surface.is_top(upper.id()));
    drop(upper);
    assert!(!surface.is_scroll_locked());
}

// =============================================================
// OverlaySlot
// =============================================================

#[test]
fn repeated_toggles_leave_exactly_one_session() {
    let surface = OverlaySurface::new();
    let slot = OverlaySlot::default();

    assert!(!slot.sync(false, &surface, || {}));
    assert!(slot.sync(true, &surface, || {}));
    assert!(slot.sync(false, &surface, || {}));
    assert!(!surface.is_scroll_locked());
    assert!(slot.sync(true, &surface, || {}));

    assert!(slot.is_active());
    assert_eq!(surface.holders(), 1);
    assert!(surface.is_scroll_locked());
}

#[test]
fn syncing_open_twice_keeps_the_first_session() {
    let surface = OverlaySurface::new();
    let slot = OverlaySlot::default();
    let (first, first_hook) = counter();
    let (second, second_hook) = counter();

    slot.sync(true, &surface, first_hook);
    assert!(!slot.sync(true, &surface, second_hook));
    assert_eq!(surface.holders(), 1);

    assert!(slot.handle_key(ESCAPE_KEY));
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 0);
}

#[test]
fn clear_on_unmount_releases_lock() {
    let surface = OverlaySurface::new();
    let slot = OverlaySlot::default();
    slot.sync(true, &surface, || {});
    slot.clear();
    assert!(!slot.is_active());
    assert!(!surface.is_scroll_locked());
    assert!(!slot.handle_key(ESCAPE_KEY));
    slot.clear();
}

#[test]
fn cloned_surfaces_share_one_stack() {
    let surface = OverlaySurface::new();
    let other = surface.clone();
    let _a = surface.open(|| {});
    let _b = other.open(|| {});
    assert_eq!(surface.holders(), 2);
}
