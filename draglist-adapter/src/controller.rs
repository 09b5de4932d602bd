use alloc::vec::Vec;

use draglist::{
    DetachedHost, ItemId, ListOptions, ListenerHost, PointerEvent, PointerKind, PointerTracker,
    RowPresentation, Transition,
};

use crate::{Easing, Tween};

/// How rows move between presentation targets.
///
/// The defaults reproduce the classic draggable-list demo: 350ms exponential ease-out, with the
/// dragged row scaled to 1.1 and its shadow raised from 1 to 5.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationOptions {
    pub duration_ms: u64,
    pub easing: Easing,
    pub rest_scale: f32,
    pub lifted_scale: f32,
    pub rest_shadow: f32,
    pub lifted_shadow: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration_ms: 350,
            easing: Easing::ExpOut,
            rest_scale: 1.0,
            lifted_scale: 1.1,
            rest_shadow: 1.0,
            lifted_shadow: 5.0,
        }
    }
}

impl AnimationOptions {
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_scale(mut self, rest_scale: f32, lifted_scale: f32) -> Self {
        self.rest_scale = rest_scale;
        self.lifted_scale = lifted_scale;
        self
    }

    pub fn with_shadow(mut self, rest_shadow: f32, lifted_shadow: f32) -> Self {
        self.rest_shadow = rest_shadow;
        self.lifted_shadow = lifted_shadow;
        self
    }
}

/// The animated properties of one row.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowAnimation {
    pub y: Tween,
    pub scale: Tween,
    pub shadow: Tween,
}

impl RowAnimation {
    fn is_done(&self, now_ms: u64) -> bool {
        self.y.is_done(now_ms) && self.scale.is_done(now_ms) && self.shadow.is_done(now_ms)
    }
}

/// One row, ready to draw.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowFrame<K = ItemId> {
    pub id: K,
    pub slot: usize,
    pub y: f32,
    pub scale: f32,
    /// Shadow offset; the blur radius is conventionally twice this.
    pub shadow: f32,
    pub z_rank: u32,
    pub is_lifted: bool,
}

impl<K> RowFrame<K> {
    /// One-based position shown inside the row.
    pub fn label(&self) -> usize {
        self.slot + 1
    }

    pub fn shadow_blur(&self) -> f32 {
        self.shadow * 2.0
    }
}

/// A framework-neutral controller that wraps a [`PointerTracker`] and animates rows toward its
/// presentation targets.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_press` / `on_move` / `on_release` when pointer events occur
/// - `tick(now_ms)` each frame/timer tick
/// - `frame()` / `for_each_frame` to read what to draw
///
/// After every state change, rows whose target moved get their tween retargeted from the value
/// currently on screen; untouched rows keep animating undisturbed. The dragged row is pinned to
/// the pointer and, on release, eases from wherever it was dropped into its slot.
#[derive(Debug)]
pub struct Controller<K = ItemId, H = DetachedHost> {
    tracker: PointerTracker<K, H>,
    options: AnimationOptions,
    rows: Vec<RowAnimation>,
    now_ms: u64,
}

impl<K: Clone + PartialEq> Controller<K, DetachedHost> {
    pub fn new(list: ListOptions<K>, options: AnimationOptions) -> Self {
        Self::from_tracker(PointerTracker::new(list), options)
    }
}

impl<K: Clone + PartialEq, H: ListenerHost> Controller<K, H> {
    pub fn with_host(list: ListOptions<K>, options: AnimationOptions, host: H) -> Self {
        Self::from_tracker(PointerTracker::with_host(list, host), options)
    }

    /// Wraps an existing tracker; rows start settled at their current targets.
    pub fn from_tracker(tracker: PointerTracker<K, H>, options: AnimationOptions) -> Self {
        let mut rows = Vec::with_capacity(tracker.options().count());
        tracker.for_each_row(|row| {
            let (scale, shadow) = targets(&options, &row);
            rows.push(RowAnimation {
                y: Tween::settled(row.target_y, 0, options.easing),
                scale: Tween::settled(scale, 0, options.easing),
                shadow: Tween::settled(shadow, 0, options.easing),
            });
        });
        Self {
            tracker,
            options,
            rows,
            now_ms: 0,
        }
    }

    pub fn tracker(&self) -> &PointerTracker<K, H> {
        &self.tracker
    }

    pub fn into_tracker(self) -> PointerTracker<K, H> {
        self.tracker
    }

    pub fn options(&self) -> &AnimationOptions {
        &self.options
    }

    /// Per-row tweens, in identity order.
    pub fn animations(&self) -> &[RowAnimation] {
        &self.rows
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Returns `true` if any row has not reached its target as of the last tick.
    pub fn is_animating(&self) -> bool {
        self.rows.iter().any(|r| !r.is_done(self.now_ms))
    }

    /// Advances the clock. Returns whether rows are still moving.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.now_ms = now_ms;
        self.is_animating()
    }

    /// Feeds one pointer event at `now_ms` and retargets affected rows.
    pub fn handle(&mut self, event: &PointerEvent<K>, now_ms: u64) -> Transition {
        self.now_ms = now_ms;
        let transition = self.tracker.handle(event);
        if transition.is_change() {
            self.sync();
        } else {
            atrace!(?transition, "Controller::handle: no state change");
        }
        transition
    }

    /// Press on `item`. The row's top is taken from its on-screen (animated) position, so a row
    /// grabbed mid-flight does not jump.
    pub fn on_press(&mut self, kind: PointerKind, item: K, page_y: f32, now_ms: u64) -> Transition {
        let row_top = self
            .tracker
            .options()
            .items
            .index_of(&item)
            .and_then(|i| self.rows.get(i))
            .map_or(0.0, |r| r.y.sample(now_ms));
        self.handle(&PointerEvent::press(kind, item, row_top, page_y), now_ms)
    }

    pub fn on_move(&mut self, kind: PointerKind, page_y: f32, now_ms: u64) -> Transition {
        self.handle(&PointerEvent::moved(kind, page_y), now_ms)
    }

    pub fn on_release(&mut self, kind: PointerKind, now_ms: u64) -> Transition {
        self.handle(&PointerEvent::release(kind), now_ms)
    }

    fn sync(&mut self) {
        let now_ms = self.now_ms;
        let options = self.options;
        let rows = &mut self.rows;
        let mut index = 0;
        self.tracker.for_each_row(|row| {
            let Some(anim) = rows.get_mut(index) else {
                return;
            };
            index += 1;

            if row.is_lifted {
                anim.y = Tween::settled(row.target_y, now_ms, options.easing);
            } else if anim.y.to != row.target_y {
                adebug!(slot = row.slot, target_y = row.target_y, "Controller: retarget y");
                anim.y.retarget(now_ms, row.target_y, options.duration_ms);
            }

            let (scale, shadow) = targets(&options, &row);
            if anim.scale.to != scale {
                anim.scale.retarget(now_ms, scale, options.duration_ms);
            }
            if anim.shadow.to != shadow {
                anim.shadow.retarget(now_ms, shadow, options.duration_ms);
            }
        });
    }

    /// What to draw as of the last tick, in identity order.
    pub fn frame(&self) -> Vec<RowFrame<K>> {
        let mut out = Vec::with_capacity(self.rows.len());
        self.for_each_frame(|f| out.push(f));
        out
    }

    /// Zero-allocation variant of [`Controller::frame`].
    pub fn for_each_frame(&self, mut f: impl FnMut(RowFrame<K>)) {
        let now_ms = self.now_ms;
        let mut index = 0;
        self.tracker.for_each_row(|row| {
            let Some(anim) = self.rows.get(index) else {
                return;
            };
            index += 1;
            let y = if row.is_lifted {
                row.target_y
            } else {
                anim.y.sample(now_ms)
            };
            f(RowFrame {
                id: row.id,
                slot: row.slot,
                y,
                scale: anim.scale.sample(now_ms),
                shadow: anim.shadow.sample(now_ms),
                z_rank: row.z_rank,
                is_lifted: row.is_lifted,
            });
        });
    }
}

fn targets<K>(options: &AnimationOptions, row: &RowPresentation<K>) -> (f32, f32) {
    if row.is_lifted {
        (options.lifted_scale, options.lifted_shadow)
    } else {
        (options.rest_scale, options.rest_shadow)
    }
}
