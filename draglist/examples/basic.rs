use draglist::{ListOptions, PointerKind, PointerTracker};

fn main() {
    // Example: the classic five-row list, dragging row 2 down by one slot.
    let mut t = PointerTracker::new(ListOptions::reference());

    // Press 10px below the top edge of the row at 150.
    let tr = t.press(PointerKind::Mouse, 2, 150.0, 160.0);
    println!("press: {tr:?}");

    for page_y in [180.0, 210.0, 235.0, 260.0] {
        let tr = t.move_to(PointerKind::Mouse, page_y);
        println!(
            "move page_y={page_y}: {tr:?} live_y={:?} order={:?}",
            t.state().live_y(),
            t.order()
        );
    }

    println!("release: {:?}", t.release(PointerKind::Mouse));

    for row in t.rows() {
        println!(
            "item={} label={} y={} lifted={} z={}",
            row.id,
            row.label(),
            row.target_y,
            row.is_lifted,
            row.z_rank
        );
    }
}
