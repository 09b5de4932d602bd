use crate::{
    DragError, Effect, Geometry, IgnoreReason, ItemId, Order, PointerEvent, PointerKind,
    PressPolicy, Transition,
};

/// An in-progress drag: exists from press to release.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSession<K = ItemId> {
    pub item: K,
    /// The device that started the session; only its events are listened to.
    pub kind: PointerKind,
    /// Pointer page offset minus the row's top at press time. Constant for the session.
    pub top_delta: f32,
    /// Current top offset of the dragged row.
    pub live_y: f32,
}

/// The complete drag state: the current order plus the active session, if any.
///
/// `DragState` is a plain value. [`DragState::apply`] is a pure function that computes the next
/// state for an event; [`crate::PointerTracker`] owns the state and is the only writer.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "K: Clone + serde::Serialize",
        deserialize = "K: PartialEq + serde::Deserialize<'de>"
    ))
)]
pub struct DragState<K = ItemId> {
    order: Order<K>,
    session: Option<DragSession<K>>,
    last_pressed: Option<K>,
}

/// The result of applying one event to a [`DragState`].
#[derive(Clone, Debug, PartialEq)]
pub struct Step<K = ItemId> {
    pub state: DragState<K>,
    pub transition: Transition,
    pub effect: Effect,
}

impl<K> DragState<K> {
    /// An idle state showing `order`.
    pub fn new(order: Order<K>) -> Self {
        Self {
            order,
            session: None,
            last_pressed: None,
        }
    }

    pub fn order(&self) -> &Order<K> {
        &self.order
    }

    pub fn session(&self) -> Option<&DragSession<K>> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn dragged_item(&self) -> Option<&K> {
        self.session.as_ref().map(|s| &s.item)
    }

    pub fn live_y(&self) -> Option<f32> {
        self.session.as_ref().map(|s| s.live_y)
    }

    /// The session's pointer offset, or `0.0` while idle.
    pub fn top_delta(&self) -> f32 {
        self.session.as_ref().map_or(0.0, |s| s.top_delta)
    }

    /// The most recently pressed item. Survives the end of its session.
    pub fn last_pressed(&self) -> Option<&K> {
        self.last_pressed.as_ref()
    }
}

impl<K: Clone + PartialEq> DragState<K> {
    /// Computes the state that follows `event`.
    ///
    /// Never panics on bad input: stray events are ignored and invalid presses are rejected,
    /// in both cases returning an unchanged state with [`Effect::None`].
    pub fn apply(
        &self,
        event: &PointerEvent<K>,
        geometry: &Geometry,
        press_policy: PressPolicy,
    ) -> Step<K> {
        match event {
            PointerEvent::Press {
                kind,
                item,
                row_top,
                page_y,
            } => self.press(*kind, item, *row_top, *page_y, press_policy),
            PointerEvent::Move { kind, page_y } => self.move_to(*kind, *page_y, geometry),
            PointerEvent::Release { kind } => self.release(*kind),
        }
    }

    fn unchanged(&self, transition: Transition) -> Step<K> {
        Step {
            state: self.clone(),
            transition,
            effect: Effect::None,
        }
    }

    fn press(
        &self,
        kind: PointerKind,
        item: &K,
        row_top: f32,
        page_y: f32,
        press_policy: PressPolicy,
    ) -> Step<K> {
        if !row_top.is_finite() || !page_y.is_finite() {
            dwarn!(row_top, page_y, "DragState::press: non-finite coordinate");
            return self.unchanged(Transition::Rejected(DragError::NonFiniteCoordinate));
        }
        let Some(row) = self.order.index_of(item) else {
            dwarn!("DragState::press: unknown item");
            return self.unchanged(Transition::Rejected(DragError::UnknownItem));
        };

        let effect = match (&self.session, press_policy) {
            (None, _) => Effect::Acquire(kind),
            (Some(_), PressPolicy::RejectWhileActive) => {
                dwarn!(?kind, "DragState::press: session already active");
                return self.unchanged(Transition::Rejected(DragError::SessionActive));
            }
            (Some(prev), PressPolicy::Replace) => Effect::Swap {
                release: prev.kind,
                acquire: kind,
            },
        };

        ddebug!(?kind, row, row_top, page_y, "DragState::press");
        Step {
            state: Self {
                order: self.order.clone(),
                session: Some(DragSession {
                    item: item.clone(),
                    kind,
                    top_delta: page_y - row_top,
                    live_y: row_top,
                }),
                last_pressed: Some(item.clone()),
            },
            transition: Transition::Started { row },
            effect,
        }
    }

    fn move_to(&self, kind: PointerKind, page_y: f32, geometry: &Geometry) -> Step<K> {
        let Some(session) = &self.session else {
            dtrace!("DragState::move_to: not dragging");
            return self.unchanged(Transition::Ignored(IgnoreReason::NotDragging));
        };
        if session.kind != kind {
            dtrace!(?kind, "DragState::move_to: pointer kind mismatch");
            return self.unchanged(Transition::Ignored(IgnoreReason::PointerKindMismatch));
        }
        if !page_y.is_finite() {
            dwarn!(page_y, "DragState::move_to: non-finite coordinate");
            return self.unchanged(Transition::Rejected(DragError::NonFiniteCoordinate));
        }
        let Some(current) = self.order.index_of(&session.item) else {
            // Orders are permutations, so the dragged item cannot disappear mid-session.
            dwarn!("DragState::move_to: dragged item missing from order");
            return self.unchanged(Transition::Rejected(DragError::UnknownItem));
        };

        let live_y = page_y - session.top_delta;
        let target = geometry.target_row(live_y);
        let reordered = target != current;
        let order = if reordered {
            ddebug!(from = current, to = target, "DragState::move_to: reorder");
            self.order.reorder(current, target)
        } else {
            self.order.clone()
        };
        dtrace!(live_y, row = target, "DragState::move_to");

        Step {
            state: Self {
                order,
                session: Some(DragSession {
                    live_y,
                    ..session.clone()
                }),
                last_pressed: self.last_pressed.clone(),
            },
            transition: Transition::Moved {
                row: target,
                reordered,
            },
            effect: Effect::None,
        }
    }

    fn release(&self, kind: PointerKind) -> Step<K> {
        let Some(session) = &self.session else {
            dtrace!("DragState::release: not dragging");
            return self.unchanged(Transition::Ignored(IgnoreReason::NotDragging));
        };
        if session.kind != kind {
            dtrace!(?kind, "DragState::release: pointer kind mismatch");
            return self.unchanged(Transition::Ignored(IgnoreReason::PointerKindMismatch));
        }

        ddebug!(?kind, "DragState::release");
        Step {
            state: Self {
                order: self.order.clone(),
                session: None,
                last_pressed: self.last_pressed.clone(),
            },
            transition: Transition::Ended,
            effect: Effect::Release(kind),
        }
    }
}
