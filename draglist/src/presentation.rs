use alloc::vec::Vec;

use crate::{DragState, Geometry, Order, RowPresentation};

/// Base stacking rank of the last pressed row.
///
/// Lists longer than this lift the row to `count` instead, so it always stays on top.
pub const LIFTED_Z_RANK: u32 = 99;

/// Emits one [`RowPresentation`] per item, in identity order (the order of `items`).
///
/// - Rows sit at `slot * row_height`, except the dragged row which follows the pointer.
/// - Only the dragged row is lifted.
/// - The last pressed row stacks above all others, even after release, so it stays on top while
///   it settles. Other rows stack by their position in `items`.
pub fn for_each_row<K: Clone + PartialEq>(
    items: &Order<K>,
    state: &DragState<K>,
    geometry: &Geometry,
    mut f: impl FnMut(RowPresentation<K>),
) {
    let top_rank = LIFTED_Z_RANK.max(u32::try_from(items.len()).unwrap_or(u32::MAX));
    let dragged = state.session();
    let last_pressed = state.last_pressed();

    for (rank, id) in items.iter().enumerate() {
        let slot = state.order().index_of(id);
        debug_assert!(
            slot.is_some(),
            "for_each_row: item at identity rank {rank} missing from order"
        );
        let Some(slot) = slot else {
            dwarn!(rank, "for_each_row: item missing from order");
            continue;
        };
        let live_y = dragged.filter(|s| s.item == *id).map(|s| s.live_y);
        let z_rank = if last_pressed == Some(id) {
            top_rank
        } else {
            u32::try_from(rank).unwrap_or(u32::MAX)
        };
        f(RowPresentation {
            id: id.clone(),
            slot,
            target_y: live_y.unwrap_or_else(|| geometry.row_top(slot)),
            is_lifted: live_y.is_some(),
            z_rank,
        });
    }
}

/// Allocating variant of [`for_each_row`].
pub fn rows<K: Clone + PartialEq>(
    items: &Order<K>,
    state: &DragState<K>,
    geometry: &Geometry,
) -> Vec<RowPresentation<K>> {
    let mut out = Vec::with_capacity(items.len());
    for_each_row(items, state, geometry, |row| out.push(row));
    out
}
