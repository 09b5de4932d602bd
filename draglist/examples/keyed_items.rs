use draglist::{
    DragState, ListOptions, Order, PointerKind, PointerTracker, PressPolicy, Transition,
};

fn main() {
    // Example: string keys and a touch drag that gets interrupted by a mouse press.
    let items =
        Order::from_vec(vec!["inbox", "drafts", "sent", "archive"]).expect("distinct keys");
    let options = ListOptions::new_with_items(items, 40.0)
        .with_press_policy(PressPolicy::RejectWhileActive)
        .with_on_change(Some(
            |state: &DragState<&'static str>, tr: &Transition| {
                println!("on_change: {tr:?} order={:?}", state.order());
            },
        ));
    let mut t = PointerTracker::new(options);

    t.press(PointerKind::Touch, "archive", 120.0, 130.0);
    t.move_to(PointerKind::Touch, 50.0);

    // A second pointer cannot hijack the running session.
    println!("mouse press: {:?}", t.press(PointerKind::Mouse, "inbox", 0.0, 5.0));

    t.move_to(PointerKind::Touch, 10.0);
    t.release(PointerKind::Touch);
    println!("final order={:?}", t.order());
}
