use image::{GrayImage, Luma};

use crate::common::format::format_info;
use crate::common::metadata::*;
use crate::common::{BitStream, EncRegionIter, MaskPattern};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Unset,
    Light,
    Dark,
}

impl From<Color> for Module {
    fn from(clr: Color) -> Self {
        match clr {
            Color::Light => Self::Light,
            Color::Dark => Self::Dark,
        }
    }
}

impl Module {
    // Unset modules read as light
    pub fn color(self) -> Color {
        match self {
            Self::Dark => Color::Dark,
            Self::Light | Self::Unset => Color::Light,
        }
    }
}

/// A finalized symbol. Only the read side is public; modules are drawn by [`QRBuilder`].
///
/// ```compile_fail
/// let mut qr = qrv1m::QRBuilder::new(b"A").build().unwrap();
/// qr.apply_mask(qrv1m::MaskPattern::new(0));
/// ```
///
/// [`QRBuilder`]: crate::QRBuilder
#[derive(Debug, Clone)]
pub struct QR {
    grid: [Module; MODULE_COUNT],
    // Modules owned by finder, separator, timing, format & dark module
    func: [bool; MODULE_COUNT],
    mask: Option<MaskPattern>,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn new() -> Self {
        Self { grid: [Module::Unset; MODULE_COUNT], func: [false; MODULE_COUNT], mask: None }
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&&m| m == Module::Dark).count()
    }

    pub fn to_matrix(&self) -> Matrix {
        let mut res = [[false; WIDTH]; WIDTH];
        for (row, chunk) in res.iter_mut().zip(self.grid.chunks_exact(WIDTH)) {
            for (m, &module) in row.iter_mut().zip(chunk) {
                *m = module == Module::Dark;
            }
        }
        res
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = WIDTH as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match (self.is_func(i, j), self.get(i, j)) {
                    (true, Module::Unset) => 'r',
                    (true, Module::Dark) => 'f',
                    (true, Module::Light) => 'F',
                    (false, Module::Unset) => '.',
                    (false, Module::Dark) => 'd',
                    (false, Module::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = WIDTH as i16;
        debug_assert!(-w <= r && r < w, "row should be less than w");
        debug_assert!(-w <= c && c < w, "column should be less than w");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub(crate) fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub(crate) fn is_func(&self, r: i16, c: i16) -> bool {
        self.func[self.coord_to_index(r, c)]
    }

    pub(crate) fn set(&mut self, r: i16, c: i16, module: Module) {
        let index = self.coord_to_index(r, c);
        self.grid[index] = module;
    }

    fn set_func(&mut self, r: i16, c: i16, module: Module) {
        let index = self.coord_to_index(r, c);
        self.grid[index] = module;
        self.func[index] = true;
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    // Draws the 7x7 pattern centered at (r, c) with its light separator ring
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                self.set_func(
                    r + i,
                    c + j,
                    match (i, j) {
                        (4 | -4, _) | (_, 4 | -4) => Module::Light,
                        (3 | -3, _) | (_, 3 | -3) => Module::Dark,
                        (2 | -2, _) | (_, 2 | -2) => Module::Light,
                        _ => Module::Dark,
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod finder_pattern_tests {
    use crate::builder::QR;

    #[test]
    fn test_finder_pattern_qr() {
        let mut qr = QR::new();
        qr.draw_finder_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.....Ffffffff\n\
             fFFFFFfF.....FfFFFFFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFFFFFfF.....FfFFFFFf\n\
             fffffffF.....Ffffffff\n\
             FFFFFFFF.....FFFFFFFF\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             FFFFFFFF.............\n\
             fffffffF.............\n\
             fFFFFFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFFFFFfF.............\n\
             fffffffF.............\n"
        );
    }
}

// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_timing_pattern(&mut self) {
        let last = WIDTH as i16 - 9;
        self.draw_line(TIMING_LINE, 8, TIMING_LINE, last);
        self.draw_line(8, TIMING_LINE, last, TIMING_LINE);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                let m = if j & 1 == 0 { Module::Dark } else { Module::Light };
                self.set_func(r1, j, m);
            }
        } else {
            for i in r1..=r2 {
                let m = if i & 1 == 0 { Module::Dark } else { Module::Light };
                self.set_func(i, c1, m);
            }
        }
    }
}


// Format info & dark module
//------------------------------------------------------------------------------

impl QR {
    fn reserve_format_area(&mut self) {
        for &(r, c) in FORMAT_INFO_COORDS_MAIN.iter().chain(FORMAT_INFO_COORDS_SIDE.iter()) {
            self.set_func(r, c, Module::Unset);
        }
    }

    fn draw_dark_module(&mut self) {
        let (r, c) = DARK_MODULE;
        self.set_func(r, c, Module::Dark);
    }

    fn draw_format_info(&mut self, format_info: u32) {
        self.draw_number(format_info, &FORMAT_INFO_COORDS_MAIN);
        self.draw_number(format_info, &FORMAT_INFO_COORDS_SIDE);
    }

    // Bit i of the number goes to coords[i]
    fn draw_number(&mut self, number: u32, coords: &[(i16, i16)]) {
        for (i, &(r, c)) in coords.iter().enumerate() {
            let clr = Color::from((number >> i) & 1 == 1);
            self.set_func(r, c, Module::from(clr));
        }
    }
}

#[cfg(test)]
mod qr_information_tests {
    use crate::builder::QR;

    #[test]
    fn test_reserve_format_info_qr() {
        let mut qr = QR::new();
        qr.reserve_format_area();
        qr.draw_dark_module();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             ........r............\n\
             ........r............\n\
             ........r............\n\
             ........r............\n\
             ........r............\n\
             ........r............\n\
             .....................\n\
             ........r............\n\
             rrrrrr.rr....rrrrrrrr\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             ........f............\n\
             ........r............\n\
             ........r............\n\
             ........r............\n\
             ........r............\n\
             ........r............\n\
             ........r............\n\
             ........r............\n"
        );
    }

    #[test]
    fn test_draw_format_info() {
        let mut qr = QR::new();
        // EC level M, mask 0
        qr.draw_format_info(0b101010000010010);
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             ........F............\n\
             ........f............\n\
             ........F............\n\
             ........F............\n\
             ........f............\n\
             ........F............\n\
             .....................\n\
             ........F............\n\
             fFfFfF.FF....FFFfFFfF\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             ........F............\n\
             ........F............\n\
             ........f............\n\
             ........F............\n\
             ........f............\n\
             ........F............\n\
             ........f............\n"
        );
    }

    #[test]
    fn test_all_function_patterns() {
        let mut qr = QR::new();
        qr.draw_all_function_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffFr....Ffffffff\n\
             fFFFFFfFr....FfFFFFFf\n\
             fFfffFfFr....FfFfffFf\n\
             fFfffFfFr....FfFfffFf\n\
             fFfffFfFr....FfFfffFf\n\
             fFFFFFfFr....FfFFFFFf\n\
             fffffffFfFfFfFfffffff\n\
             FFFFFFFFr....FFFFFFFF\n\
             rrrrrrfrr....rrrrrrrr\n\
             ......F..............\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             FFFFFFFFf............\n\
             fffffffFr............\n\
             fFFFFFfFr............\n\
             fFfffFfFr............\n\
             fFfffFfFr............\n\
             fFfffFfFr............\n\
             fFFFFFfFr............\n\
             fffffffFr............\n"
        );
    }
}

// All function patterns
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_timing_pattern();
        self.reserve_format_area();
        self.draw_dark_module();
    }
}

// Encoding region
//------------------------------------------------------------------------------

impl QR {
    // Places the payload MSB first along the zigzag, light once the payload runs out
    pub(crate) fn draw_encoding_region(&mut self, mut payload: BitStream) {
        for (r, c) in EncRegionIter::new() {
            if self.is_func(r, c) {
                continue;
            }
            let clr = Color::from(payload.next().unwrap_or(false));
            self.set(r, c, Module::from(clr));
        }

        debug_assert!(
            self.grid.iter().zip(self.func.iter()).all(|(&m, &f)| f || m != Module::Unset),
            "Empty data module found"
        );
    }

    pub(crate) fn apply_mask(&mut self, pattern: MaskPattern) {
        self.mask = Some(pattern);
        let mask_fn = pattern.mask_function();
        let w = WIDTH as i16;
        for r in 0..w {
            for c in 0..w {
                if !self.is_func(r, c) && mask_fn(r, c) {
                    let clr = !self.get(r, c).color();
                    self.set(r, c, Module::from(clr));
                }
            }
        }
        let format_info = format_info(EC_LEVEL, pattern);
        self.draw_format_info(format_info);
    }
}


// Render
//------------------------------------------------------------------------------

impl QR {
    pub fn render(&self, module_sz: u32) -> GrayImage {
        let qz_sz = QUIET_ZONE as u32 * module_sz;
        let qr_sz = WIDTH as u32 * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = GrayImage::new(total_sz, total_sz);
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.put_pixel(j, i, Luma([255]));
                    continue;
                }
                let r = (i - qz_sz) / module_sz;
                let c = (j - qz_sz) / module_sz;

                let clr = self.get(r as i16, c as i16).color();
                canvas.put_pixel(j, i, Luma([clr.select(255, 0)]));
            }
        }

        canvas
    }

    // Light modules are drawn filled, for terminals with a dark background
    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_sz = QUIET_ZONE * module_sz;
        let qr_sz = WIDTH * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::new();
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.push('█');
                    continue;
                }
                let r = ((i - qz_sz) / module_sz) as i16;
                let c = ((j - qz_sz) / module_sz) as i16;

                canvas.push(self.get(r, c).color().select('█', ' '));
            }
            canvas.push('\n');
        }

        canvas
    }
}
