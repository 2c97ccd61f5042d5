use std::sync::LazyLock;

// GF(256) lookup tables
//------------------------------------------------------------------------------

// x^8 + x^4 + x^3 + x^2 + 1
pub const PRIMITIVE_POLY: u16 = 0x11D;

// Exp table is mirrored over [255, 510) so the sum of two logs never needs a modulo
pub struct GaloisTables {
    pub exp: [u8; 510],
    pub log: [u8; 256],
}

impl GaloisTables {
    fn new() -> Self {
        let mut exp = [0u8; 510];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        for i in 0..255 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE_POLY;
            }
        }
        exp.copy_within(0..255, 255);
        Self { exp, log }
    }
}

pub static TABLES: LazyLock<GaloisTables> = LazyLock::new(GaloisTables::new);

pub fn gf_exp(i: usize) -> u8 {
    TABLES.exp[i]
}

pub fn gf_mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let tables = &*TABLES;
    let log_sum = tables.log[a as usize] as usize + tables.log[b as usize] as usize;
    debug_assert!(log_sum < 510, "Log sum has crossed 510: {log_sum}");
    tables.exp[log_sum]
}
