use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::presentation;
use crate::{
    DetachedHost, DragState, Effect, Geometry, ItemId, ListOptions, ListenerGuard, ListenerHost,
    Order, PointerEvent, PointerKind, RowPresentation, Transition,
};

/// The single owner of a list's drag state.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter feeds it [`PointerEvent`]s in arrival order.
/// - Rendering reads snapshots via [`PointerTracker::rows`] / [`PointerTracker::for_each_row`].
///
/// Each event is handled synchronously by the pure [`DragState::apply`]; the tracker then swaps
/// in the new state, acquires or drops listener guards through its [`ListenerHost`], and fires
/// `on_change`. Multi-threaded hosts should route every event through one tracker (e.g. behind a
/// single `Mutex`).
///
/// For animated rendering, see the `draglist-adapter` crate.
#[derive(Debug)]
pub struct PointerTracker<K = ItemId, H = DetachedHost> {
    options: ListOptions<K>,
    geometry: Geometry,
    state: DragState<K>,
    host: H,
    listeners: Option<ListenerGuard>,
}

impl<K: Clone + PartialEq> PointerTracker<K, DetachedHost> {
    /// Creates an idle tracker showing `options.items` in order.
    pub fn new(options: ListOptions<K>) -> Self {
        Self::with_host(options, DetachedHost)
    }
}

impl<K: Clone + PartialEq, H: ListenerHost> PointerTracker<K, H> {
    /// Creates an idle tracker that registers session listeners on `host`.
    pub fn with_host(options: ListOptions<K>, host: H) -> Self {
        let geometry = options.geometry();
        let state = DragState::new(options.items.clone());
        ddebug!(
            count = geometry.count,
            row_height = geometry.row_height,
            "PointerTracker::new"
        );
        Self {
            options,
            geometry,
            state,
            host,
            listeners: None,
        }
    }

    pub fn options(&self) -> &ListOptions<K> {
        &self.options
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn state(&self) -> &DragState<K> {
        &self.state
    }

    /// The current display order. Cloning it is cheap and yields a stable snapshot.
    pub fn order(&self) -> &Order<K> {
        self.state.order()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// The pointer kind whose listeners are currently registered, if any.
    pub fn listening_to(&self) -> Option<PointerKind> {
        self.listeners.as_ref().map(ListenerGuard::kind)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&DragState<K>, &Transition) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    /// Feeds one event to the tracker and returns what happened.
    pub fn handle(&mut self, event: &PointerEvent<K>) -> Transition {
        let step = self
            .state
            .apply(event, &self.geometry, self.options.press_policy);
        if !step.transition.is_change() {
            return step.transition;
        }

        self.state = step.state;
        self.run_effect(step.effect);

        if let Some(cb) = &self.options.on_change {
            cb(&self.state, &step.transition);
        }
        step.transition
    }

    /// Mouse-down or touch-start on `item`, whose row currently sits at `row_top`.
    pub fn press(&mut self, kind: PointerKind, item: K, row_top: f32, page_y: f32) -> Transition {
        self.handle(&PointerEvent::press(kind, item, row_top, page_y))
    }

    pub fn move_to(&mut self, kind: PointerKind, page_y: f32) -> Transition {
        self.handle(&PointerEvent::moved(kind, page_y))
    }

    pub fn release(&mut self, kind: PointerKind) -> Transition {
        self.handle(&PointerEvent::release(kind))
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Acquire(kind) => {
                debug_assert!(
                    self.listeners.is_none(),
                    "PointerTracker: listeners already registered"
                );
                self.listeners = Some(self.host.acquire(kind));
            }
            Effect::Release(_) => {
                self.listeners = None;
            }
            Effect::Swap { acquire, .. } => {
                // Release before acquiring so the host never sees two live sessions.
                self.listeners = None;
                self.listeners = Some(self.host.acquire(acquire));
            }
        }
    }

    /// Presentation records for every item, in identity order.
    pub fn rows(&self) -> Vec<RowPresentation<K>> {
        presentation::rows(&self.options.items, &self.state, &self.geometry)
    }

    /// Zero-allocation variant of [`PointerTracker::rows`].
    pub fn for_each_row(&self, f: impl FnMut(RowPresentation<K>)) {
        presentation::for_each_row(&self.options.items, &self.state, &self.geometry, f);
    }
}
