use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }

    fn gen_f32(&mut self, start: f32, end: f32) -> f32 {
        let unit = (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32;
        start + (end - start) * unit
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.gen_range_usize(0, i + 1);
            items.swap(i, j);
        }
    }
}

fn is_permutation(order: &[usize], count: usize) -> bool {
    let mut seen = alloc::vec![false; count];
    order.len() == count
        && order.iter().all(|&id| {
            if id >= count || seen[id] {
                return false;
            }
            seen[id] = true;
            true
        })
}

/// Counts live listener registrations per host.
#[derive(Clone, Default)]
struct CountingHost {
    acquired: Arc<AtomicUsize>,
    active: Arc<AtomicUsize>,
}

impl ListenerHost for CountingHost {
    fn acquire(&mut self, kind: PointerKind) -> ListenerGuard {
        self.acquired.fetch_add(1, Ordering::SeqCst);
        self.active.fetch_add(1, Ordering::SeqCst);
        let active = Arc::clone(&self.active);
        ListenerGuard::new(kind, move |_| {
            active.fetch_sub(1, Ordering::SeqCst);
        })
    }
}

impl CountingHost {
    fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

#[test]
fn reorder_yields_permutation_for_all_index_pairs() {
    let mut rng = Lcg::new(7);
    for count in [1usize, 2, 5, 8] {
        for _ in 0..16 {
            let mut base: Vec<usize> = (0..count).collect();
            rng.shuffle(&mut base);
            for i in 0..count {
                for j in 0..count {
                    let out = reorder(&base, i, j);
                    assert!(is_permutation(&out, count), "{base:?} {i}->{j} = {out:?}");
                    assert_eq!(out.iter().position(|&x| x == base[i]), Some(j));
                }
            }
        }
    }
}

#[test]
fn reorder_shifts_neighbours_by_one() {
    assert_eq!(reorder(&[0, 1, 2, 3, 4], 1, 3), [0, 2, 3, 1, 4]);
    assert_eq!(reorder(&[0, 1, 2, 3, 4], 4, 0), [4, 0, 1, 2, 3]);
    assert_eq!(reorder(&['a', 'b', 'c'], 0, 2), ['b', 'c', 'a']);
}

#[test]
fn reorder_same_index_is_identity() {
    let order = Order::identity(5);
    for i in 0..5 {
        assert_eq!(reorder(order.as_slice(), i, i), order.to_vec());
        let same = order.reorder(i, i);
        assert_eq!(same, order);
        assert!(Order::ptr_eq(&same, &order));
    }
}

#[test]
fn order_reorder_returns_fresh_snapshot() {
    let order = Order::identity(5);
    let next = order.reorder(2, 3);
    assert!(!Order::ptr_eq(&order, &next));
    assert_eq!(order.to_vec(), [0, 1, 2, 3, 4]);
    assert_eq!(next.to_vec(), [0, 1, 3, 2, 4]);
    assert!(next.is_permutation_of(&order));
}

#[test]
fn try_reorder_reports_out_of_bounds() {
    let order = Order::identity(3);
    assert_eq!(
        order.try_reorder(3, 0),
        Err(OrderError::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(
        order.try_reorder(0, 5),
        Err(OrderError::IndexOutOfBounds { index: 5, len: 3 })
    );
    assert_eq!(
        order.try_reorder(4, 4),
        Err(OrderError::IndexOutOfBounds { index: 4, len: 3 })
    );
    assert_eq!(
        try_reorder(&[1, 2], 0, 2),
        Err(OrderError::IndexOutOfBounds { index: 2, len: 2 })
    );
}

#[test]
#[should_panic(expected = "out of bounds")]
fn reorder_panics_on_invalid_index() {
    let _ = reorder(&[0, 1, 2], 0, 3);
}

#[test]
fn order_rejects_duplicates() {
    assert_eq!(
        Order::from_vec(alloc::vec![3, 1, 3]),
        Err(OrderError::DuplicateItem { position: 2 })
    );
    let order = Order::try_from(alloc::vec!["a", "b"]).unwrap();
    assert_eq!(order.index_of(&"b"), Some(1));
    assert_eq!(order.index_of(&"z"), None);
}

#[test]
fn target_row_is_always_in_range() {
    let geometry = Geometry::new(5, 75.0);
    let mut rng = Lcg::new(42);
    for _ in 0..2_000 {
        let y = rng.gen_f32(-10_000.0, 10_000.0);
        assert!(geometry.target_row(y) < 5, "y={y}");
    }
    for y in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, f32::MAX, -0.0] {
        assert!(geometry.target_row(y) < 5, "y={y}");
    }
    assert_eq!(geometry.target_row(f32::INFINITY), 4);
    assert_eq!(geometry.target_row(-300.0), 0);
}

#[test]
fn target_row_rounds_halves_up() {
    let geometry = Geometry::new(5, 75.0);
    assert_eq!(geometry.target_row(37.4), 0);
    assert_eq!(geometry.target_row(37.5), 1);
    assert_eq!(geometry.target_row(225.0), 3);
    assert_eq!(geometry.target_row(262.5), 4);
    assert_eq!(geometry.row_top(3), 225.0);
    assert_eq!(geometry.total_height(), 375.0);
}

#[test]
fn drag_item_two_down_one_row() {
    let mut t = PointerTracker::new(ListOptions::reference());

    assert_eq!(
        t.press(PointerKind::Mouse, 2, 150.0, 160.0),
        Transition::Started { row: 2 }
    );
    assert_eq!(t.state().top_delta(), 10.0);
    assert_eq!(t.state().live_y(), Some(150.0));

    assert_eq!(
        t.move_to(PointerKind::Mouse, 235.0),
        Transition::Moved {
            row: 3,
            reordered: true
        }
    );
    assert_eq!(t.state().live_y(), Some(225.0));
    assert_eq!(t.order().to_vec(), [0, 1, 3, 2, 4]);

    assert_eq!(t.release(PointerKind::Mouse), Transition::Ended);
    assert!(!t.is_dragging());
    assert_eq!(t.state().top_delta(), 0.0);
    assert_eq!(t.order().to_vec(), [0, 1, 3, 2, 4]);
}

#[test]
fn stray_events_are_ignored() {
    let mut t = PointerTracker::new(ListOptions::reference());
    let before = t.order().clone();

    assert_eq!(
        t.move_to(PointerKind::Mouse, 300.0),
        Transition::Ignored(IgnoreReason::NotDragging)
    );
    assert_eq!(
        t.release(PointerKind::Touch),
        Transition::Ignored(IgnoreReason::NotDragging)
    );
    assert!(Order::ptr_eq(&before, t.order()));
    assert!(!t.is_dragging());
    assert_eq!(t.state().last_pressed(), None);
}

#[test]
fn move_within_same_row_keeps_snapshot() {
    let mut t = PointerTracker::new(ListOptions::reference());
    t.press(PointerKind::Mouse, 0, 0.0, 20.0);
    let before = t.order().clone();

    assert_eq!(
        t.move_to(PointerKind::Mouse, 40.0),
        Transition::Moved {
            row: 0,
            reordered: false
        }
    );
    assert!(Order::ptr_eq(&before, t.order()));
    assert_eq!(t.state().live_y(), Some(20.0));

    // Dragging above the list clamps to row 0.
    t.move_to(PointerKind::Mouse, -500.0);
    assert!(Order::ptr_eq(&before, t.order()));
}

#[test]
fn monotonic_moves_keep_a_valid_permutation() {
    let options = ListOptions::reference();
    let geometry = options.geometry();
    let mut t = PointerTracker::new(options);
    t.press(PointerKind::Touch, 0, 0.0, 10.0);

    for step in 0..100 {
        let page_y = -40.0 + step as f32 * 5.0;
        t.move_to(PointerKind::Touch, page_y);
        assert!(is_permutation(t.order().as_slice(), 5), "step={step}");
        let live_y = page_y - 10.0;
        assert_eq!(t.state().live_y(), Some(live_y));
        assert_eq!(t.order().index_of(&0), Some(geometry.target_row(live_y)));
    }
    assert_eq!(t.order().to_vec(), [1, 2, 3, 4, 0]);

    for step in 0..100 {
        let page_y = 460.0 - step as f32 * 5.0;
        t.move_to(PointerKind::Touch, page_y);
        assert!(is_permutation(t.order().as_slice(), 5), "step={step}");
    }
    assert_eq!(t.order().to_vec(), [0, 1, 2, 3, 4]);
}

#[test]
fn random_sessions_preserve_permutation() {
    let mut rng = Lcg::new(0xdead_beef);
    let mut t = PointerTracker::new(ListOptions::new(8, 20.0));
    for _ in 0..50 {
        let item = rng.gen_range_usize(0, 8);
        let row = t.order().index_of(&item).unwrap();
        let row_top = t.geometry().row_top(row);
        t.press(PointerKind::Mouse, item, row_top, row_top + 5.0);
        for _ in 0..20 {
            t.move_to(PointerKind::Mouse, rng.gen_f32(-100.0, 300.0));
            assert!(is_permutation(t.order().as_slice(), 8));
        }
        t.release(PointerKind::Mouse);
    }
}

#[test]
fn events_from_other_pointer_kind_are_ignored() {
    let mut t = PointerTracker::new(ListOptions::reference());
    t.press(PointerKind::Mouse, 1, 75.0, 80.0);

    assert_eq!(
        t.move_to(PointerKind::Touch, 300.0),
        Transition::Ignored(IgnoreReason::PointerKindMismatch)
    );
    assert_eq!(
        t.release(PointerKind::Touch),
        Transition::Ignored(IgnoreReason::PointerKindMismatch)
    );
    assert!(t.is_dragging());
    assert_eq!(t.order().to_vec(), [0, 1, 2, 3, 4]);
}

#[test]
fn second_press_is_rejected_by_default() {
    let host = CountingHost::default();
    let mut t = PointerTracker::with_host(ListOptions::reference(), host.clone());
    t.press(PointerKind::Mouse, 1, 75.0, 80.0);

    assert_eq!(
        t.press(PointerKind::Touch, 3, 225.0, 230.0),
        Transition::Rejected(DragError::SessionActive)
    );
    assert_eq!(t.state().dragged_item(), Some(&1));
    assert_eq!(t.listening_to(), Some(PointerKind::Mouse));
    assert_eq!(host.acquired(), 1);
    assert_eq!(host.active(), 1);
}

#[test]
fn replace_policy_swaps_session_and_listeners() {
    let host = CountingHost::default();
    let options = ListOptions::reference().with_press_policy(PressPolicy::Replace);
    let mut t = PointerTracker::with_host(options, host.clone());
    t.press(PointerKind::Mouse, 1, 75.0, 80.0);

    assert_eq!(
        t.press(PointerKind::Touch, 3, 225.0, 230.0),
        Transition::Started { row: 3 }
    );
    assert_eq!(t.state().dragged_item(), Some(&3));
    assert_eq!(t.listening_to(), Some(PointerKind::Touch));
    assert_eq!(host.acquired(), 2);
    assert_eq!(host.active(), 1);

    // The replaced mouse session no longer owns the gesture.
    assert_eq!(
        t.release(PointerKind::Mouse),
        Transition::Ignored(IgnoreReason::PointerKindMismatch)
    );
    assert_eq!(t.release(PointerKind::Touch), Transition::Ended);
    assert_eq!(host.active(), 0);
}

#[test]
fn listeners_live_exactly_as_long_as_the_session() {
    let host = CountingHost::default();
    let mut t = PointerTracker::with_host(ListOptions::reference(), host.clone());
    assert_eq!(t.listening_to(), None);

    for round in 1..=3 {
        t.press(PointerKind::Touch, 4, 300.0, 310.0);
        assert_eq!(host.active(), 1);
        t.move_to(PointerKind::Touch, 100.0);
        t.move_to(PointerKind::Touch, 30.0);
        assert_eq!(host.active(), 1);
        t.release(PointerKind::Touch);
        assert_eq!(host.active(), 0);
        assert_eq!(host.acquired(), round);
        assert_eq!(t.listening_to(), None);
    }
}

#[test]
fn dropping_tracker_mid_drag_releases_listeners() {
    let host = CountingHost::default();
    {
        let mut t = PointerTracker::with_host(ListOptions::reference(), host.clone());
        t.press(PointerKind::Mouse, 0, 0.0, 0.0);
        assert_eq!(host.active(), 1);
    }
    assert_eq!(host.acquired(), 1);
    assert_eq!(host.active(), 0);
}

#[test]
fn closure_hosts_are_supported() {
    let released = Arc::new(AtomicUsize::new(0));
    let host = {
        let released = Arc::clone(&released);
        move |kind| {
            let released = Arc::clone(&released);
            ListenerGuard::new(kind, move |_| {
                released.fetch_add(1, Ordering::SeqCst);
            })
        }
    };
    let mut t = PointerTracker::with_host(ListOptions::reference(), host);
    t.press(PointerKind::Mouse, 2, 150.0, 150.0);
    t.release(PointerKind::Mouse);
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[test]
fn invalid_presses_are_rejected_without_state_change() {
    let host = CountingHost::default();
    let mut t = PointerTracker::with_host(ListOptions::reference(), host.clone());

    assert_eq!(
        t.press(PointerKind::Mouse, 9, 0.0, 0.0),
        Transition::Rejected(DragError::UnknownItem)
    );
    assert_eq!(
        t.press(PointerKind::Mouse, 1, f32::NAN, 0.0),
        Transition::Rejected(DragError::NonFiniteCoordinate)
    );
    assert!(!t.is_dragging());
    assert_eq!(host.acquired(), 0);

    t.press(PointerKind::Mouse, 1, 75.0, 75.0);
    assert_eq!(
        t.move_to(PointerKind::Mouse, f32::INFINITY),
        Transition::Rejected(DragError::NonFiniteCoordinate)
    );
    assert_eq!(t.state().live_y(), Some(75.0));
}

#[test]
fn on_change_fires_for_state_changes_only() {
    let calls = Arc::new(AtomicUsize::new(0));
    let options = ListOptions::reference().with_on_change(Some({
        let calls = Arc::clone(&calls);
        move |state: &DragState, transition: &Transition| {
            assert!(transition.is_change());
            assert!(is_permutation(state.order().as_slice(), 5));
            calls.fetch_add(1, Ordering::SeqCst);
        }
    }));
    let mut t = PointerTracker::new(options);

    t.move_to(PointerKind::Mouse, 10.0);
    t.press(PointerKind::Mouse, 2, 150.0, 160.0);
    t.press(PointerKind::Mouse, 3, 225.0, 230.0);
    t.move_to(PointerKind::Mouse, 235.0);
    t.release(PointerKind::Mouse);
    t.release(PointerKind::Mouse);

    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn apply_is_pure() {
    let geometry = Geometry::new(5, 75.0);
    let state = DragState::new(Order::identity(5));

    let step = state.apply(
        &PointerEvent::press(PointerKind::Mouse, 2, 150.0, 160.0),
        &geometry,
        PressPolicy::default(),
    );
    assert_eq!(step.effect, Effect::Acquire(PointerKind::Mouse));
    assert!(!state.is_dragging());

    let pressed = step.state;
    let step = pressed.apply(
        &PointerEvent::moved(PointerKind::Mouse, 235.0),
        &geometry,
        PressPolicy::default(),
    );
    assert_eq!(step.effect, Effect::None);
    assert_eq!(step.state.order().to_vec(), [0, 1, 3, 2, 4]);
    assert_eq!(pressed.order().to_vec(), [0, 1, 2, 3, 4]);

    let step = step.state.apply(
        &PointerEvent::release(PointerKind::Mouse),
        &geometry,
        PressPolicy::default(),
    );
    assert_eq!(step.effect, Effect::Release(PointerKind::Mouse));
    assert_eq!(step.transition, Transition::Ended);
}

#[test]
fn rows_pin_and_lift_the_dragged_item() {
    let mut t = PointerTracker::new(ListOptions::reference());
    t.press(PointerKind::Mouse, 2, 150.0, 160.0);
    t.move_to(PointerKind::Mouse, 235.0);

    let rows = t.rows();
    assert_eq!(rows.len(), 5);
    let ids: Vec<usize> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, [0, 1, 2, 3, 4]);

    let dragged = &rows[2];
    assert!(dragged.is_lifted);
    assert_eq!(dragged.slot, 3);
    assert_eq!(dragged.target_y, 225.0);
    assert_eq!(dragged.z_rank, LIFTED_Z_RANK);
    assert_eq!(dragged.label(), 4);

    let displaced = &rows[3];
    assert!(!displaced.is_lifted);
    assert_eq!(displaced.slot, 2);
    assert_eq!(displaced.target_y, 150.0);
    assert_eq!(displaced.z_rank, 3);

    let mut count = 0;
    t.for_each_row(|row| {
        count += 1;
        assert_eq!(row.is_lifted, row.id == 2);
    });
    assert_eq!(count, 5);
}

#[test]
fn last_pressed_row_stays_on_top_after_release() {
    let mut t = PointerTracker::new(ListOptions::reference());
    t.press(PointerKind::Mouse, 2, 150.0, 160.0);
    t.move_to(PointerKind::Mouse, 240.0);
    t.release(PointerKind::Mouse);

    let rows = t.rows();
    assert!(rows.iter().all(|r| !r.is_lifted));
    assert_eq!(rows[2].z_rank, LIFTED_Z_RANK);
    assert_eq!(rows[2].target_y, 225.0);
    for row in &rows {
        assert_eq!(row.target_y, row.slot as f32 * 75.0);
    }
}

#[test]
fn idle_rows_stack_by_identity() {
    let t = PointerTracker::new(ListOptions::reference());
    for row in t.rows() {
        assert_eq!(row.z_rank, row.id as u32);
        assert_eq!(row.target_y, row.id as f32 * 75.0);
        assert!(!row.is_lifted);
    }
}

#[test]
fn long_lists_lift_above_every_rank() {
    let mut t = PointerTracker::new(ListOptions::new(150, 10.0));
    t.press(PointerKind::Mouse, 0, 0.0, 0.0);
    let rows = t.rows();
    let top = rows[0].z_rank;
    assert_eq!(top, 150);
    assert!(rows[1..].iter().all(|r| r.z_rank < top));
}

#[test]
fn custom_keys_follow_identity_order() {
    let items = Order::from_vec(alloc::vec!["inbox", "drafts", "sent"]).unwrap();
    let mut t = PointerTracker::new(ListOptions::new_with_items(items, 30.0));
    t.press(PointerKind::Touch, "sent", 60.0, 70.0);
    t.move_to(PointerKind::Touch, 10.0);
    t.release(PointerKind::Touch);

    assert_eq!(t.order().to_vec(), ["sent", "inbox", "drafts"]);
    let rows = t.rows();
    assert_eq!(rows[0].id, "inbox");
    assert_eq!(rows[0].slot, 1);
    assert_eq!(rows[2].slot, 0);
}
