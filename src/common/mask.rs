use std::ops::Deref;

use tracing::{debug, trace};

use super::error::{QRError, QRResult};
use super::metadata::{Matrix, MODULE_COUNT, WIDTH};
use crate::builder::QR;

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub fn new(pattern: u8) -> Self {
        assert!(pattern < 8, "Invalid masking pattern: {pattern}");
        Self(pattern)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).map(Self)
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        (((r + c) & 1) + ((r * c) % 3)) & 1 == 0
    }
}

impl MaskPattern {
    pub fn mask_function(self) -> fn(i16, i16) -> bool {
        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!("Invalid masking pattern"),
        }
    }
}

// Mask selection
//------------------------------------------------------------------------------

// Tries every pattern on a copy of the unmasked symbol and keeps the first one with the
// lowest penalty.
pub(crate) fn apply_best_mask(qr: &mut QR) -> QRResult<MaskPattern> {
    let mut best: Option<(MaskPattern, u32, QR)> = None;
    for mask in MaskPattern::all() {
        let mut candidate = qr.clone();
        candidate.apply_mask(mask);
        let score = penalty_score(&candidate.to_matrix());
        trace!(mask = *mask, score, "Scored mask candidate");
        if best.as_ref().map_or(true, |(_, best_score, _)| score < *best_score) {
            best = Some((mask, score, candidate));
        }
    }

    let (mask, score, candidate) = best.ok_or(QRError::InternalInvariantViolation)?;
    debug!(mask = *mask, score, "Selected mask");
    *qr = candidate;
    Ok(mask)
}

// Penalty
//------------------------------------------------------------------------------

pub fn penalty_score(matrix: &Matrix) -> u32 {
    let adj_pen = adjacent_penalty(matrix);
    let blk_pen = block_penalty(matrix);
    let fp_pen = finder_pattern_penalty(matrix);
    let bal_pen = balance_penalty(matrix);
    adj_pen + blk_pen + fp_pen + bal_pen
}

fn rows(matrix: &Matrix) -> impl Iterator<Item = [bool; WIDTH]> + '_ {
    matrix.iter().copied()
}

fn cols(matrix: &Matrix) -> impl Iterator<Item = [bool; WIDTH]> + '_ {
    (0..WIDTH).map(move |c| std::array::from_fn(|r| matrix[r][c]))
}

// Each run of 5 or more same colored modules in a row or column costs 3 + (len - 5)
pub fn adjacent_penalty(matrix: &Matrix) -> u32 {
    rows(matrix).chain(cols(matrix)).map(|line| line_run_penalty(&line)).sum()
}

fn line_run_penalty(line: &[bool]) -> u32 {
    let run_cost = |len: u32| if len >= 5 { 3 + (len - 5) } else { 0 };

    let mut pen = 0;
    let mut last = line[0];
    let mut run_len = 0;
    for &m in line {
        if m != last {
            pen += run_cost(run_len);
            last = m;
            run_len = 0;
        }
        run_len += 1;
    }
    pen + run_cost(run_len)
}

// Each 2x2 block of one color costs 3
pub fn block_penalty(matrix: &Matrix) -> u32 {
    let mut pen = 0;
    for r in 0..WIDTH - 1 {
        for c in 0..WIDTH - 1 {
            let clr = matrix[r][c];
            if clr == matrix[r + 1][c] && clr == matrix[r][c + 1] && clr == matrix[r + 1][c + 1]
            {
                pen += 3;
            }
        }
    }
    pen
}

// Every row or column holding a finder-like sequence costs 40 once. The light
// surroundings of the sequence are not checked.
pub fn finder_pattern_penalty(matrix: &Matrix) -> u32 {
    static PATTERN: [bool; 7] = [true, false, true, true, true, false, true];
    static INVERTED: [bool; 7] = [false, true, false, false, false, true, false];

    let count = rows(matrix)
        .chain(cols(matrix))
        .filter(|line| line.windows(7).any(|w| *w == PATTERN || *w == INVERTED))
        .count();
    count as u32 * 40
}

// 10 points for every full 5% the dark ratio deviates from 50%
pub fn balance_penalty(matrix: &Matrix) -> u32 {
    let dark_cnt = matrix.iter().flatten().filter(|&&m| m).count();
    let deviation = (dark_cnt * 100).abs_diff(MODULE_COUNT * 50);
    (deviation / (MODULE_COUNT * 5)) as u32 * 10
}
