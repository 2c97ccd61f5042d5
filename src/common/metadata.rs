use std::ops::Not;

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn select<T>(&self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl From<bool> for Color {
    fn from(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

// Error correction level
//------------------------------------------------------------------------------

// Only M is encoded; the other levels exist for their format bits.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ECLevel {
    L = 1,
    M = 0,
    Q = 3,
    H = 2,
}

// Global constants
//------------------------------------------------------------------------------

pub const VERSION: usize = 1;

pub const WIDTH: usize = 21;

pub const MODULE_COUNT: usize = WIDTH * WIDTH;

// Finalized symbol, indexed [row][col], true for dark modules
pub type Matrix = [[bool; WIDTH]; WIDTH];

pub const EC_LEVEL: ECLevel = ECLevel::M;

pub const DATA_CODEWORDS: usize = 16;

pub const EC_CODEWORDS: usize = 10;

pub const TOTAL_CODEWORDS: usize = DATA_CODEWORDS + EC_CODEWORDS;

pub const DATA_BIT_CAPACITY: usize = DATA_CODEWORDS << 3;

pub const QUIET_ZONE: usize = 4;

pub const TIMING_LINE: i16 = 6;

pub const FORMAT_INFO_BIT_LEN: usize = 15;

pub const FORMAT_GENERATOR: u32 = 0b101_0011_0111;

pub const FORMAT_MASK: u32 = 0b101_0100_0001_0010;

// Bit i of the format info goes to coordinate i, LSB first. Negative values wrap from
// the far edge of the symbol.
pub static FORMAT_INFO_COORDS_MAIN: [(i16, i16); FORMAT_INFO_BIT_LEN] = [
    (0, 8),
    (1, 8),
    (2, 8),
    (3, 8),
    (4, 8),
    (5, 8),
    (7, 8),
    (8, 8),
    (8, 7),
    (8, 5),
    (8, 4),
    (8, 3),
    (8, 2),
    (8, 1),
    (8, 0),
];

pub static FORMAT_INFO_COORDS_SIDE: [(i16, i16); FORMAT_INFO_BIT_LEN] = [
    (8, -1),
    (8, -2),
    (8, -3),
    (8, -4),
    (8, -5),
    (8, -6),
    (8, -7),
    (8, -8),
    (-7, 8),
    (-6, 8),
    (-5, 8),
    (-4, 8),
    (-3, 8),
    (-2, 8),
    (-1, 8),
];

pub const DARK_MODULE: (i16, i16) = (-8, 8);

pub const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];

pub const BYTE_MODE_INDICATOR: u8 = 0b0100;

pub const MODE_INDICATOR_BIT_LEN: usize = 4;

pub const CHAR_COUNT_BIT_LEN: usize = 8;
