//! Bit frames as a reader puts them on the wire.
//!
//! Wiegand frames wrap the data word between two parity bits:
//!
//! ```text
//!   [even parity over high half][data bits, MSB first][odd parity over low half]
//! ```
//!
//! EM4100 frames are the bare 40-bit `version || card id` word.

use std::fmt;

/// A transmitted bit sequence, stored right-aligned in a `u64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    bits: u64,
    len: u8,
}

impl Frame {
    pub fn wiegand26(facility_code: u8, card_number: u16) -> Self {
        let data: u32 = ((facility_code as u32) << 16) | card_number as u32;
        Self::wiegand(data, 24)
    }

    pub fn wiegand34(facility_code: u16, card_number: u16) -> Self {
        let data: u32 = ((facility_code as u32) << 16) | card_number as u32;
        Self::wiegand(data, 32)
    }

    pub fn em4100(version: u8, card_id: u32) -> Self {
        Self {
            bits: ((version as u64) << 32) | card_id as u64,
            len: 40,
        }
    }

    fn wiegand(data: u32, data_bits: u8) -> Self {
        let leading: u64 = even_parity(data, data_bits) as u64;
        let trailing: u64 = odd_parity(data, data_bits) as u64;
        Self {
            bits: (leading << (data_bits + 1)) | ((data as u64) << 1) | trailing,
            len: data_bits + 2,
        }
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn leading_bit(&self) -> bool {
        self.len > 0 && (self.bits >> (self.len - 1)) & 1 == 1
    }

    pub fn trailing_bit(&self) -> bool {
        self.bits & 1 == 1
    }
}

impl fmt::Display for Frame {
    /// MSB-first `0`/`1` string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for idx in (0..self.len).rev() {
            let bit = if (self.bits >> idx) & 1 == 1 { '1' } else { '0' };
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

/// 1 when the high half of `data` holds an odd number of ones.
fn even_parity(data: u32, data_bits: u8) -> u8 {
    let half = data_bits / 2;
    let high = (data >> half) & low_mask(half);
    (high.count_ones() % 2) as u8
}

/// 1 when the low half of `data` holds an even number of ones.
fn odd_parity(data: u32, data_bits: u8) -> u8 {
    let half = data_bits / 2;
    let low = data & low_mask(half);
    1 - (low.count_ones() % 2) as u8
}

fn low_mask(bits: u8) -> u32 {
    if bits >= 32 { u32::MAX } else { (1u32 << bits) - 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wiegand26_frame_wraps_data_in_parity() {
        let frame = Frame::wiegand26(123, 0xEEFF);
        assert_eq!(frame.len(), 26);
        assert_eq!(frame.bits(), 0x2F7DDFE);
        assert!(frame.leading_bit());
        assert!(!frame.trailing_bit());
        assert_eq!(frame.to_string(), "10111101111101110111111110");
    }

    #[test]
    fn wiegand26_frame_of_zero_sets_only_odd_parity() {
        let frame = Frame::wiegand26(0, 0);
        assert_eq!(frame.bits(), 1);
        assert_eq!(frame.to_string(), format!("{}1", "0".repeat(25)));
    }

    #[test]
    fn wiegand26_firmware_example() {
        let frame = Frame::wiegand26(0xAB, 0xCDEF);
        assert_eq!(frame.to_string(), "11010101111001101111011111");
    }

    #[test]
    fn wiegand34_frame_wraps_data_in_parity() {
        let frame = Frame::wiegand34(0xCCDD, 0xEEFF);
        assert_eq!(frame.len(), 34);
        assert_eq!(frame.bits(), 0x1_99BB_DDFF);
        assert!(!frame.leading_bit());
        assert!(frame.trailing_bit());
        assert_eq!(frame.to_string(), "0110011001101110111101110111111111");
    }

    #[test]
    fn em4100_frame_has_no_parity() {
        let frame = Frame::em4100(0xAA, 0xBBCCDDEE);
        assert_eq!(frame.len(), 40);
        assert_eq!(frame.bits(), 0xAA_BBCC_DDEE);
        assert_eq!(
            frame.to_string(),
            "1010101010111011110011001101110111101110"
        );
    }
}
