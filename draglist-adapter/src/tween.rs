/// A small tween helper for adapter-driven row animation.
///
/// Tweens are plain values sampled against a caller-provided clock; nothing here reads time.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// A tween that holds `value` forever.
    pub fn settled(value: f32, now_ms: u64, easing: Easing) -> Self {
        Self::new(value, value, now_ms, 1, easing)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        self.from == self.to || now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);
        self.from + (self.to - self.from) * eased
    }

    /// Restarts toward `new_to` from the value currently on screen.
    pub fn retarget(&mut self, now_ms: u64, new_to: f32, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }

    /// Lazily samples the tween every `frame_ms`, starting at `start_ms`.
    ///
    /// The last item is always `(start_ms + duration_ms, to)`.
    pub fn frames(&self, frame_ms: u64) -> Frames {
        Frames {
            tween: *self,
            frame_ms: frame_ms.max(1),
            next_ms: Some(self.start_ms),
        }
    }
}

/// Iterator returned by [`Tween::frames`]: `(now_ms, value)` pairs.
#[derive(Clone, Debug)]
pub struct Frames {
    tween: Tween,
    frame_ms: u64,
    next_ms: Option<u64>,
}

impl Iterator for Frames {
    type Item = (u64, f32);

    fn next(&mut self) -> Option<Self::Item> {
        let now_ms = self.next_ms?;
        let end_ms = self.tween.start_ms.saturating_add(self.tween.duration_ms);
        self.next_ms = if now_ms >= end_ms {
            None
        } else {
            Some(now_ms.saturating_add(self.frame_ms).min(end_ms))
        };
        Some((now_ms, self.tween.sample(now_ms)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    /// Exponential ease-out: fast start, long soft landing.
    ExpOut,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            // 2^(-10t), shifted and rescaled so the curve hits exactly 0 and 1.
            Self::ExpOut => {
                const FLOOR: f32 = 1.0 / 1024.0;
                1.0 - (exp2(-10.0 * t) - FLOOR) / (1.0 - FLOOR)
            }
        }
    }
}

#[cfg(feature = "std")]
fn exp2(x: f32) -> f32 {
    x.exp2()
}

/// `2^x` for `x` in the normal exponent range, without `std`.
#[cfg(not(feature = "std"))]
fn exp2(x: f32) -> f32 {
    let x = x.clamp(-126.0, 127.0);
    let mut whole = x as i32;
    if whole as f32 > x {
        whole -= 1;
    }
    // 2^frac = e^(frac * ln 2), frac in [0, 1).
    let y = (x - whole as f32) * core::f32::consts::LN_2;
    let mut term = 1.0f32;
    let mut frac = 1.0f32;
    for n in 1..=7 {
        term *= y / n as f32;
        frac += term;
    }
    f32::from_bits(((whole + 127) as u32) << 23) * frac
}
