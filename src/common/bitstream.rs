use super::metadata::TOTAL_CODEWORDS;

// Bit stream
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct BitStream {
    data: [u8; TOTAL_CODEWORDS],
    // Bit length
    len: usize,
    // Max bit capacity
    capacity: usize,
    // Read cursor
    cursor: usize,
}

impl BitStream {
    pub fn new(capacity: usize) -> Self {
        debug_assert!(
            capacity <= TOTAL_CODEWORDS << 3,
            "Capacity exceeds symbol size: Capacity {capacity}"
        );
        Self { data: [0; TOTAL_CODEWORDS], len: 0, capacity, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.len
    }

    // Whole bytes written so far; a trailing partial byte is excluded
    pub fn data(&self) -> &[u8] {
        &self.data[..self.len >> 3]
    }

    pub fn push_bits(&mut self, bits: u8, size: usize) {
        debug_assert!(size <= 8, "Bit count exceeds a byte: Size {size}");
        debug_assert!(
            size >= (8 - bits.leading_zeros()) as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );
        debug_assert!(
            self.len + size <= self.capacity,
            "Insufficient capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + size
        );

        if size == 0 {
            return;
        }

        let offset = self.len & 7;
        let pos = self.len >> 3;

        if offset + size <= 8 {
            self.data[pos] |= bits << (8 - size - offset);
        } else {
            self.data[pos] |= bits >> (size + offset - 8);
            self.data[pos + 1] = bits << (16 - size - offset);
        }

        self.len += size;
    }

    pub fn push(&mut self, bit: bool) {
        debug_assert!(
            self.len < self.capacity,
            "Insufficient capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + 1
        );

        if bit {
            let offset = self.len & 7;
            let pos = self.len >> 3;
            self.data[pos] |= 0b10000000 >> offset;
        }

        self.len += 1;
    }

    pub fn extend(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push_bits(b, 8);
        }
    }
}

// Reads the stream MSB first, from the start of the stream
impl Iterator for BitStream {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.len {
            return None;
        }
        let bit = self.data[self.cursor >> 3] & (0b10000000 >> (self.cursor & 7)) != 0;
        self.cursor += 1;
        Some(bit)
    }
}

#[cfg(test)]
mod bit_stream_tests {

    use super::BitStream;

    #[test]
    fn test_len() {
        let bit_capacity = 152;
        let mut eb = BitStream::new(bit_capacity);
        assert_eq!(eb.len(), 0);
        eb.push_bits(0, 0);
        assert_eq!(eb.len(), 0);
        eb.push_bits(0b1000, 4);
        assert_eq!(eb.len(), 4);
        eb.push_bits(0b1000, 8);
        assert_eq!(eb.len(), 12);
        eb.push_bits(0b1000, 4);
        assert_eq!(eb.len(), 16);
        eb.push_bits(0b1111111, 7);
        assert_eq!(eb.len(), 23);
        assert_eq!(eb.remaining(), 152 - 23);
    }

    #[test]
    fn test_push() {
        let mut eb = BitStream::new(2);
        eb.push(false);
        assert_eq!(eb.data[..1], [0b00000000]);
        eb.push(true);
        assert_eq!(eb.data[..1], [0b01000000]);
    }

    #[test]
    fn test_push_bits() {
        let bit_capacity = 152;
        let exp_vec = [0b11010010, 0b00110100, 0b10001101, 0b00100011, 0b01001000, 0b11010010];
        let mut cursor = 0;
        let mut eb = BitStream::new(bit_capacity);
        for n in [0, 1, 2, 3, 4, 5, 6, 7, 8, 4, 8] {
            let offset = cursor & 7;
            let pos = cursor >> 3;
            let bits = if n == 0 {
                0
            } else if n + offset <= 8 {
                (exp_vec[pos] << offset) >> (8 - n)
            } else {
                let bits = (exp_vec[pos] << offset) >> (8 - n);
                bits | (exp_vec[pos + 1] >> (16 - offset - n))
            };
            cursor += n;
            eb.push_bits(bits, n);
            let eb_offset = eb.len() & 7;
            let len = eb.len() >> 3;
            assert_eq!(eb.data[..len], exp_vec[..len], "n {n}");
            if eb_offset > 0 {
                assert_eq!(eb.data[len] >> (8 - eb_offset), exp_vec[len] >> (8 - eb_offset));
            }
        }
    }

    #[test]
    fn test_iter_reads_msb_first() {
        let mut eb = BitStream::new(16);
        eb.push_bits(0b1011, 4);
        eb.extend(&[0b0000_0001]);
        let bits = eb.collect::<Vec<_>>();
        assert_eq!(
            bits,
            [true, false, true, true, false, false, false, false, false, false, false, true]
        );
    }

    #[test]
    #[should_panic]
    fn test_push_bits_capacity_overflow() {
        let mut eb = BitStream::new(8);
        eb.push_bits(0b1111, 4);
        eb.push_bits(0b11111, 5);
    }
}
