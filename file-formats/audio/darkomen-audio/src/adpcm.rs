//! IMA-style 4-bit ADPCM sample codec.
//!
//! MAD and SAD streams compress their audio payloads with a variant of IMA
//! ADPCM: each 4-bit nibble adjusts a running predictor by a magnitude looked
//! up from an 89-entry step table, and the step index itself adapts per
//! nibble. Every block in a stream carries its own starting predictor and
//! step index, so blocks decode independently; no state is carried from one
//! block to the next.

/// Per-nibble step index adjustments.
const INDEX_TABLE: [i32; 16] = [
    -1, -1, -1, -1, 2, 4, 6, 8, //
    -1, -1, -1, -1, 2, 4, 6, 8,
];

/// Step size table indexed by the adaptive step index.
const STEP_TABLE: [i32; 89] = [
    7, 8, 9, 10, 11, 12, 13, 14, 16, 17, 19, 21, 23, 25, 28, 31, 34, 37, 41, 45, 50, 55, 60, 66,
    73, 80, 88, 97, 107, 118, 130, 143, 157, 173, 190, 209, 230, 253, 279, 307, 337, 371, 408, 449,
    494, 544, 598, 658, 724, 796, 876, 963, 1060, 1166, 1282, 1411, 1552, 1707, 1878, 2066, 2272,
    2499, 2749, 3024, 3327, 3660, 4026, 4428, 4871, 5358, 5894, 6484, 7132, 7845, 8630, 9493,
    10442, 11487, 12635, 13899, 15289, 16818, 18500, 20350, 22385, 24623, 27086, 29794, 32767,
];

/// Stateful nibble-at-a-time ADPCM decoder.
///
/// The predictor lives in an `i32` so that a starting value outside the
/// signed 16-bit range (as stored in some block headers) survives until the
/// first clamp; every emitted sample is clamped into `i16` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    predictor: i32,
    index: i32,
}

impl Decoder {
    /// Creates a decoder from a block's starting predictor and step index.
    ///
    /// The step index is clamped into the step table range, so corrupt
    /// headers cannot cause out-of-bounds lookups.
    pub fn new(predictor: i32, index: i32) -> Self {
        Self {
            predictor,
            index: index.clamp(0, STEP_TABLE.len() as i32 - 1),
        }
    }

    /// Current predictor value.
    pub fn predictor(&self) -> i32 {
        self.predictor
    }

    /// Current step index.
    pub fn index(&self) -> i32 {
        self.index
    }

    /// Decodes one 4-bit nibble and returns the reconstructed sample.
    ///
    /// Only the low four bits of `nibble` are considered. Bit 3 is the sign,
    /// bits 0 to 2 select which step fractions contribute to the magnitude.
    pub fn decode_nibble(&mut self, nibble: u8) -> i16 {
        let nibble = (nibble & 0x0F) as usize;
        let step = STEP_TABLE[self.index as usize];

        let mut diff = step >> 3;
        if nibble & 0x04 != 0 {
            diff += step;
        }
        if nibble & 0x02 != 0 {
            diff += step >> 1;
        }
        if nibble & 0x01 != 0 {
            diff += step >> 2;
        }
        if nibble & 0x08 != 0 {
            diff = -diff;
        }

        self.predictor = (self.predictor + diff).clamp(i32::from(i16::MIN), i32::from(i16::MAX));
        self.index = (self.index + INDEX_TABLE[nibble]).clamp(0, STEP_TABLE.len() as i32 - 1);

        self.predictor as i16
    }

    /// Decodes a packed nibble buffer, low nibble of each byte first.
    ///
    /// Expands to exactly two samples per input byte.
    pub fn decode(&mut self, data: &[u8]) -> Vec<i16> {
        let mut samples = Vec::with_capacity(data.len() * 2);
        for &byte in data {
            samples.push(self.decode_nibble(byte & 0x0F));
            samples.push(self.decode_nibble(byte >> 4));
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn clamps_predictor_at_positive_bound() {
        // Starting predictor 0x8700 is above i16 range; one small positive
        // step must land exactly on the clamp boundary.
        let mut decoder = Decoder::new(0x8700, 24);
        let sample = decoder.decode_nibble(0x3);
        assert_eq!(sample, 0x7FFF);
        assert_eq!(decoder.predictor(), 32767);
        assert_eq!(decoder.index(), 23);
    }

    #[test]
    fn clamps_predictor_at_negative_bound() {
        let mut decoder = Decoder::new(-32_760, 30);
        let sample = decoder.decode_nibble(0xF);
        assert_eq!(sample, i16::MIN);
    }

    #[test]
    fn low_nibble_decodes_before_high() {
        // 0x83 = low nibble 3, high nibble 8. Nibble 3 moves the predictor,
        // nibble 8 contributes a zero magnitude at step index 0.
        let mut decoder = Decoder::new(0, 0);
        assert_eq!(decoder.decode(&[0x83]), vec![4, 4]);

        // Swapped packing decodes the zero-magnitude nibble first.
        let mut decoder = Decoder::new(0, 0);
        assert_eq!(decoder.decode(&[0x38]), vec![0, 4]);
    }

    #[test]
    fn index_stays_in_table_range() {
        let mut decoder = Decoder::new(0, 0);
        decoder.decode_nibble(0x0);
        assert_eq!(decoder.index(), 0);

        let mut decoder = Decoder::new(0, 88);
        decoder.decode_nibble(0x7);
        assert_eq!(decoder.index(), 88);
    }

    #[test_case(200, 88; "above table range")]
    #[test_case(-5, 0; "below table range")]
    #[test_case(40, 40; "in range unchanged")]
    fn out_of_range_starting_index_is_clamped(start: i32, expected: i32) {
        assert_eq!(Decoder::new(0, start).index(), expected);
    }

    #[test]
    fn expands_two_samples_per_byte() {
        let mut decoder = Decoder::new(0, 40);
        assert_eq!(decoder.decode(&[0u8; 510]).len(), 1020);
    }

    #[test]
    fn sign_bit_negates_magnitude() {
        let mut decoder = Decoder::new(1000, 10);
        // Index 10 has step 19: nibble 7 adds 19 + 9 + 4 + 2 = 34.
        assert_eq!(decoder.decode_nibble(0x7), 1034);

        let mut decoder = Decoder::new(1000, 10);
        assert_eq!(decoder.decode_nibble(0xF), 966);
    }
}
