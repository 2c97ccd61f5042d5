use super::metadata::{TIMING_LINE, WIDTH};

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

// Walks column pairs right to left in the zigzag order, skipping the vertical timing
// column. Yields every coordinate of each pair, function modules included.
pub struct EncRegionIter {
    r: i16,
    c: i16,
    width: i16,
    vert_timing_col: i16,
}

impl EncRegionIter {
    pub const fn new() -> Self {
        let w = WIDTH as i16;
        Self { r: w - 1, c: w - 1, width: w, vert_timing_col: TIMING_LINE }
    }
}

impl Default for EncRegionIter {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);
    fn next(&mut self) -> Option<Self::Item> {
        if self.c < 0 {
            return None;
        }
        let adjusted_col = if self.c <= self.vert_timing_col { self.c + 1 } else { self.c };
        let res = (self.r, self.c);
        let col_type = (self.width - adjusted_col) % 4;
        match col_type {
            // Right module of an upward pair
            2 if self.r > 0 => {
                self.r -= 1;
                self.c += 1;
            }
            // Right module of a downward pair
            0 if self.r < self.width - 1 => {
                self.r += 1;
                self.c += 1;
            }
            0 | 2 if self.c == self.vert_timing_col + 1 => {
                self.c -= 2;
            }
            _ => {
                self.c -= 1;
            }
        }
        Some(res)
    }
}
