use crate::DragError;

/// The default item identifier: a small integer `0..count`.
pub type ItemId = usize;

/// The input device that produced a pointer event.
///
/// A session only listens to events of the kind that started it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// A raw pointer event, in page coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEvent<K = ItemId> {
    /// Mouse-down or touch-start on a row.
    Press {
        kind: PointerKind,
        item: K,
        /// The row's current (possibly mid-animation) top offset.
        row_top: f32,
        page_y: f32,
    },
    Move {
        kind: PointerKind,
        page_y: f32,
    },
    /// Mouse-up or touch-end.
    Release { kind: PointerKind },
}

impl<K> PointerEvent<K> {
    pub fn press(kind: PointerKind, item: K, row_top: f32, page_y: f32) -> Self {
        Self::Press {
            kind,
            item,
            row_top,
            page_y,
        }
    }

    pub fn moved(kind: PointerKind, page_y: f32) -> Self {
        Self::Move { kind, page_y }
    }

    pub fn release(kind: PointerKind) -> Self {
        Self::Release { kind }
    }

    pub fn kind(&self) -> PointerKind {
        match self {
            Self::Press { kind, .. } | Self::Move { kind, .. } | Self::Release { kind } => *kind,
        }
    }
}

/// Why an event was dropped without touching the drag state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IgnoreReason {
    /// Move or release with no active session.
    NotDragging,
    /// Move or release from a different input device than the active session.
    PointerKindMismatch,
}

/// The outcome of feeding one event to the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// A session began with the pressed item at `row`.
    Started { row: usize },
    /// The dragged item moved; `row` is its index after the move.
    Moved { row: usize, reordered: bool },
    Ended,
    Ignored(IgnoreReason),
    Rejected(DragError),
}

impl Transition {
    /// Returns `true` if the event changed the drag state.
    pub fn is_change(&self) -> bool {
        matches!(
            self,
            Self::Started { .. } | Self::Moved { .. } | Self::Ended
        )
    }
}

/// Listener bookkeeping requested by a state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    None,
    /// Start listening for move/release events of this kind.
    Acquire(PointerKind),
    /// Stop listening for move/release events of this kind.
    Release(PointerKind),
    /// A press replaced a running session.
    Swap {
        release: PointerKind,
        acquire: PointerKind,
    },
}

/// What the renderer needs to draw one row.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowPresentation<K = ItemId> {
    pub id: K,
    /// Current row index of the item.
    pub slot: usize,
    /// `slot * row_height`, or the live pointer offset for the dragged row.
    pub target_y: f32,
    /// Whether the row is being dragged (elevated shadow/scale).
    pub is_lifted: bool,
    /// Stacking order; higher draws on top.
    pub z_rank: u32,
}

impl<K> RowPresentation<K> {
    /// One-based position shown inside the row.
    pub fn label(&self) -> usize {
        self.slot + 1
    }
}
