use draglist::{ListOptions, PointerKind};
use draglist_adapter::{AnimationOptions, Controller};

fn main() {
    // Example: an adapter driving the animated controller from a 16ms frame loop.
    //
    // An adapter would:
    // - forward pointer events with the current time
    // - call tick(now_ms) in a frame loop / timer while is_animating()
    // - draw each RowFrame (translate by y, scale, shadow, stack by z_rank)
    let mut c = Controller::new(ListOptions::reference(), AnimationOptions::default());

    let mut now_ms = 0u64;
    c.on_press(PointerKind::Mouse, 0, 10.0, now_ms);
    for page_y in [60.0, 120.0, 180.0, 240.0] {
        now_ms += 16;
        c.on_move(PointerKind::Mouse, page_y, now_ms);
        print_frame(&c);
    }

    now_ms += 16;
    c.on_release(PointerKind::Mouse, now_ms);

    while c.tick(now_ms) {
        if now_ms % 80 == 0 {
            print_frame(&c);
        }
        now_ms += 16;
    }

    println!("settled at t={now_ms}");
    print_frame(&c);
}

fn print_frame(c: &Controller) {
    let rows: Vec<String> = c
        .frame()
        .iter()
        .map(|r| format!("#{}@{:.1}x{:.2}", r.label(), r.y, r.scale))
        .collect();
    println!("t={} {}", c.now_ms(), rows.join(" "));
}
