use tracing::debug;

use super::bitstream::BitStream;
use super::ec::compute_ecc;
use super::error::{QRError, QRResult};
use super::metadata::{
    BYTE_MODE_INDICATOR, CHAR_COUNT_BIT_LEN, DATA_BIT_CAPACITY, DATA_CODEWORDS,
    MODE_INDICATOR_BIT_LEN, PAD_CODEWORDS, TOTAL_CODEWORDS,
};

// Encoder
//------------------------------------------------------------------------------

pub fn encoded_bit_len(data: &[u8]) -> usize {
    MODE_INDICATOR_BIT_LEN + CHAR_COUNT_BIT_LEN + (data.len() << 3)
}

// Byte mode segment followed by terminator, bit padding and pad codewords
pub fn encode(data: &[u8]) -> QRResult<[u8; DATA_CODEWORDS]> {
    let bits = encoded_bit_len(data);
    if bits > DATA_BIT_CAPACITY {
        return Err(QRError::InputTooLarge { bits });
    }

    let mut bs = BitStream::new(DATA_BIT_CAPACITY);
    bs.push_bits(BYTE_MODE_INDICATOR, MODE_INDICATOR_BIT_LEN);
    // Fits in 8 bits since the payload is at most 14 bytes
    bs.push_bits(data.len() as u8, CHAR_COUNT_BIT_LEN);
    bs.extend(data);

    push_terminator(&mut bs);
    push_padding_bits(&mut bs);
    push_padding_codewords(&mut bs);

    debug_assert_eq!(bs.len(), DATA_BIT_CAPACITY, "Data codewords are not filled");

    let mut res = [0u8; DATA_CODEWORDS];
    res.copy_from_slice(bs.data());
    debug!(payload_bits = bits, "Encoded data codewords");
    Ok(res)
}

fn push_terminator(bs: &mut BitStream) {
    let term_len = bs.remaining().min(4);
    bs.push_bits(0, term_len);
}

fn push_padding_bits(bs: &mut BitStream) {
    let offset = bs.len() & 7;
    if offset > 0 {
        bs.push_bits(0, 8 - offset);
    }
}

fn push_padding_codewords(bs: &mut BitStream) {
    debug_assert!(bs.len() & 7 == 0, "Bit stream is not byte aligned: Length {}", bs.len());

    let remain_bytes = bs.remaining() >> 3;
    for &pad in PAD_CODEWORDS.iter().cycle().take(remain_bytes) {
        bs.push_bits(pad, 8);
    }
}

// Final codeword sequence: data codewords followed by their ecc
pub fn build_payload(data: &[u8]) -> QRResult<BitStream> {
    let data_codewords = encode(data)?;
    let ecc = compute_ecc(&data_codewords);
    debug!(?ecc, "Computed error correction codewords");

    let mut payload = BitStream::new(TOTAL_CODEWORDS << 3);
    payload.extend(&data_codewords);
    payload.extend(&ecc);
    Ok(payload)
}
