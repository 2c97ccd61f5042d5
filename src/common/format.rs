use super::mask::MaskPattern;
use super::metadata::{ECLevel, FORMAT_GENERATOR, FORMAT_INFO_BIT_LEN, FORMAT_MASK};

// Format info
//------------------------------------------------------------------------------

const FORMAT_DATA_BIT_LEN: usize = 5;

const FORMAT_ERROR_BIT_LEN: usize = FORMAT_INFO_BIT_LEN - FORMAT_DATA_BIT_LEN;

// BCH(15, 5) remainder of the data word shifted up by 10 bits
fn bch_remainder(data: u32) -> u32 {
    let mut rem = data << FORMAT_ERROR_BIT_LEN;
    for i in (FORMAT_ERROR_BIT_LEN..FORMAT_INFO_BIT_LEN).rev() {
        if rem & (1 << i) != 0 {
            rem ^= FORMAT_GENERATOR << (i - FORMAT_ERROR_BIT_LEN);
        }
    }
    rem
}

pub fn format_info(ec_level: ECLevel, mask: MaskPattern) -> u32 {
    let data = ((ec_level as u32) << 3) | *mask as u32;
    let info = (data << FORMAT_ERROR_BIT_LEN) | bch_remainder(data);
    info ^ FORMAT_MASK
}

#[cfg(test)]
mod format_tests {
    use test_case::test_case;

    use super::{bch_remainder, format_info};
    use crate::common::mask::MaskPattern;
    use crate::common::metadata::ECLevel;

    #[test_case(0, 0b101010000010010)]
    #[test_case(1, 0b101000100100101)]
    #[test_case(2, 0b101111001111100)]
    #[test_case(3, 0b101101101001011)]
    #[test_case(4, 0b100010111111001)]
    #[test_case(5, 0b100000011001110)]
    #[test_case(6, 0b100111110010111)]
    #[test_case(7, 0b100101010100000)]
    fn test_format_info_m(mask: u8, exp: u32) {
        assert_eq!(format_info(ECLevel::M, MaskPattern::new(mask)), exp);
    }

    #[test_case(ECLevel::L, 0, 0b111011111000100)]
    #[test_case(ECLevel::Q, 0, 0b011010101011111)]
    #[test_case(ECLevel::H, 7, 0b000100000111011)]
    fn test_format_info_other_levels(ec_level: ECLevel, mask: u8, exp: u32) {
        assert_eq!(format_info(ec_level, MaskPattern::new(mask)), exp);
    }

    #[test]
    fn test_bch_remainder() {
        assert_eq!(bch_remainder(0), 0);
        assert_eq!(bch_remainder(0b00001), 0b0100110111);
        for data in 0..32 {
            assert!(bch_remainder(data) < 1 << 10);
        }
    }
}
