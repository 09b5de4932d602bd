use alloc::sync::Arc;

use crate::{DragState, Geometry, ItemId, Order, Transition};

/// A callback fired after every event that changed the drag state.
pub type OnChangeCallback<K> = Arc<dyn Fn(&DragState<K>, &Transition) + Send + Sync>;

/// What to do with a press that arrives while a session is already running (e.g. a touch-start
/// in the middle of a mouse drag).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressPolicy {
    /// Keep the running session and reject the new press.
    #[default]
    RejectWhileActive,
    /// End the running session and start a new one from the new press.
    Replace,
}

/// Configuration for [`crate::PointerTracker`].
///
/// Cheap to clone: the callback is stored in an `Arc` and `items` is a shared [`Order`].
pub struct ListOptions<K = ItemId> {
    /// The items in their initial display order.
    ///
    /// This order also defines each item's identity rank, which decides how non-dragged rows
    /// stack on top of each other.
    pub items: Order<K>,
    /// Height of every row, in the same unit as pointer coordinates.
    pub row_height: f32,
    pub press_policy: PressPolicy,
    pub on_change: Option<OnChangeCallback<K>>,
}

impl<K> Clone for ListOptions<K> {
    fn clone(&self) -> Self {
        Self {
            items: Order::clone(&self.items),
            row_height: self.row_height,
            press_policy: self.press_policy,
            on_change: self.on_change.clone(),
        }
    }
}

impl ListOptions<ItemId> {
    /// Options for `count` rows identified by `0..count`.
    pub fn new(count: usize, row_height: f32) -> Self {
        Self::new_with_items(Order::identity(count), row_height)
    }

    /// Five rows of height 75: the classic draggable-list demo.
    pub fn reference() -> Self {
        Self::new(5, 75.0)
    }
}

impl<K> ListOptions<K> {
    /// Options for a custom set of item identifiers.
    pub fn new_with_items(items: Order<K>, row_height: f32) -> Self {
        Self {
            items,
            row_height,
            press_policy: PressPolicy::default(),
            on_change: None,
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.items.len(), self.row_height)
    }

    pub fn with_row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_press_policy(mut self, press_policy: PressPolicy) -> Self {
        self.press_policy = press_policy;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&DragState<K>, &Transition) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for ListOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("items", &self.items)
            .field("row_height", &self.row_height)
            .field("press_policy", &self.press_policy)
            .finish_non_exhaustive()
    }
}
