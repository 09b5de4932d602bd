/// Fixed-height row layout of a vertical list.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub count: usize,
    pub row_height: f32,
}

impl Geometry {
    /// Creates a layout of `count` rows.
    ///
    /// `row_height` must be finite and positive; anything else falls back to `1.0`.
    pub fn new(count: usize, row_height: f32) -> Self {
        let valid = row_height.is_finite() && row_height > 0.0;
        debug_assert!(valid, "Geometry: invalid row height ({row_height})");
        let row_height = if valid {
            row_height
        } else {
            dwarn!(row_height, "Geometry: invalid row height, using 1.0");
            1.0
        };
        Self { count, row_height }
    }

    /// Top offset of the row at `row`.
    pub fn row_top(&self, row: usize) -> f32 {
        row as f32 * self.row_height
    }

    pub fn total_height(&self) -> f32 {
        self.row_top(self.count)
    }

    /// The row a dragged item whose top sits at `y` should occupy.
    ///
    /// Rounds to the nearest row (halves round up) and clamps into `0..count`. Negative and NaN
    /// offsets map to row 0.
    pub fn target_row(&self, y: f32) -> usize {
        let last = self.count.saturating_sub(1);
        let rows = y / self.row_height;
        // `!(rows > 0.0)` also catches NaN.
        if !(rows > 0.0) {
            return 0;
        }
        // Float-to-int `as` saturates, so huge offsets land on `usize::MAX` before clamping.
        let row = (rows + 0.5) as usize;
        row.min(last)
    }
}
