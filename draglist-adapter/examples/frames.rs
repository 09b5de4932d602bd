use draglist_adapter::{Easing, Tween};

fn main() {
    // Example: sampling a tween lazily at 60fps, e.g. to precompute keyframes.
    let tween = Tween::new(225.0, 150.0, 0, 350, Easing::ExpOut);
    for (now_ms, y) in tween.frames(16) {
        println!("t={now_ms:>3} y={y:.2}");
    }
}
