//! Bit layout of a signal within a frame payload
//!
//! The same layout drives both packing and extraction, so the two are
//! inverses by construction.

use crate::signals::database::{ByteOrder, SignalDefinition, ValueType};

/// One contiguous run of bits within a single payload byte.
///
/// Take `num_bits` consecutive bits starting at `bit_offset` in
/// `data[byte_index]` and place them at `value_shift` in the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitSpan {
    pub byte_index: usize,
    /// Lowest bit position within the byte (0..=7)
    pub bit_offset: u8,
    /// Consecutive bits in this span (1..=8)
    pub num_bits: u8,
    /// LSB-relative position of these bits in the raw value
    pub value_shift: u8,
}

impl BitSpan {
    fn mask(&self) -> u8 {
        ((1u16 << self.num_bits) - 1) as u8
    }
}

/// Precomputed mapping from a DBC signal's bit positions to payload bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalLayout {
    pub segments: Vec<BitSpan>,
    pub length: u16,
    pub signed: bool,
}

impl SignalLayout {
    /// Build a layout from a signal definition.
    ///
    /// Intel signals start at their LSB and walk upward through the bytes.
    /// Motorola signals start at their MSB and walk downward within a byte
    /// before continuing at bit 7 of the next one.
    pub fn from_definition(signal: &SignalDefinition) -> Self {
        let mut segments = Vec::new();
        let mut byte_index = (signal.start_bit / 8) as usize;
        let mut bit_index = (signal.start_bit % 8) as u8;
        let mut remaining = signal.length;

        match signal.byte_order {
            ByteOrder::BigEndian => {
                while remaining > 0 {
                    let num_bits = std::cmp::min(u16::from(bit_index) + 1, remaining) as u8;
                    let bit_offset = bit_index + 1 - num_bits;
                    remaining -= u16::from(num_bits);
                    segments.push(BitSpan {
                        byte_index,
                        bit_offset,
                        num_bits,
                        value_shift: remaining as u8,
                    });
                    byte_index += 1;
                    bit_index = 7;
                }
            }
            ByteOrder::LittleEndian => {
                let mut value_shift: u16 = 0;
                while remaining > 0 {
                    let num_bits = std::cmp::min(8 - u16::from(bit_index), remaining) as u8;
                    segments.push(BitSpan {
                        byte_index,
                        bit_offset: bit_index,
                        num_bits,
                        value_shift: value_shift as u8,
                    });
                    value_shift += u16::from(num_bits);
                    remaining -= u16::from(num_bits);
                    byte_index += 1;
                    bit_index = 0;
                }
            }
        }

        Self {
            segments,
            length: signal.length,
            signed: signal.value_type == ValueType::Signed,
        }
    }

    /// Number of payload bytes needed to hold this signal
    pub fn required_bytes(&self) -> usize {
        self.segments
            .iter()
            .map(|span| span.byte_index + 1)
            .max()
            .unwrap_or(0)
    }

    /// Mask covering the signal's raw width
    pub fn raw_mask(&self) -> u64 {
        if self.length >= 64 {
            u64::MAX
        } else {
            (1u64 << self.length) - 1
        }
    }

    /// Extract the raw unsigned value from payload bytes
    pub fn extract(&self, data: &[u8]) -> u64 {
        let mut result: u64 = 0;
        for span in &self.segments {
            if let Some(byte) = data.get(span.byte_index) {
                let bits = (byte >> span.bit_offset) & span.mask();
                result |= u64::from(bits) << span.value_shift;
            }
        }
        result
    }

    /// Extract the raw value with sign extension applied
    pub fn extract_signed(&self, data: &[u8]) -> i64 {
        let raw = self.extract(data);
        if self.signed {
            sign_extend(raw, self.length as usize)
        } else {
            raw as i64
        }
    }

    /// Pack a raw value into payload bytes.
    ///
    /// Target bits are cleared first so several signals can share a byte.
    /// Bits above the signal width are discarded.
    pub fn pack(&self, data: &mut [u8], raw: u64) {
        let raw = raw & self.raw_mask();
        for span in &self.segments {
            if let Some(byte) = data.get_mut(span.byte_index) {
                let mask = span.mask();
                let bits = ((raw >> span.value_shift) as u8) & mask;
                *byte &= !(mask << span.bit_offset);
                *byte |= bits << span.bit_offset;
            }
        }
    }
}

/// Sign-extend a value from N bits to 64 bits
fn sign_extend(value: u64, bit_length: usize) -> i64 {
    if bit_length == 0 || bit_length >= 64 {
        return value as i64;
    }

    let sign_bit = 1u64 << (bit_length - 1);
    if (value & sign_bit) != 0 {
        let mask = !0u64 << bit_length;
        (value | mask) as i64
    } else {
        value as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(start_bit: u16, length: u16, byte_order: ByteOrder, value_type: ValueType) -> SignalDefinition {
        SignalDefinition {
            name: "Test".to_string(),
            start_bit,
            length,
            byte_order,
            value_type,
            factor: 1.0,
            offset: 0.0,
            min: 0.0,
            max: 0.0,
            unit: None,
        }
    }

    #[test]
    fn test_extract_little_endian_simple() {
        let layout = SignalLayout::from_definition(&signal(0, 8, ByteOrder::LittleEndian, ValueType::Unsigned));
        let data = [0xAB, 0xCD, 0xEF, 0x12];
        assert_eq!(layout.extract(&data), 0xAB);
    }

    #[test]
    fn test_extract_little_endian_cross_byte() {
        let layout = SignalLayout::from_definition(&signal(0, 16, ByteOrder::LittleEndian, ValueType::Unsigned));
        let data = [0xAB, 0xCD, 0xEF, 0x12];
        assert_eq!(layout.extract(&data), 0xCDAB);
    }

    #[test]
    fn test_extract_big_endian_simple() {
        let layout = SignalLayout::from_definition(&signal(7, 8, ByteOrder::BigEndian, ValueType::Unsigned));
        let data = [0xAB, 0xCD, 0xEF, 0x12];
        assert_eq!(layout.extract(&data), 0xAB);
    }

    #[test]
    fn test_big_endian_cross_byte() {
        // MSB at bit 3 of byte 0, 12 bits: low nibble of byte 0 then all of byte 1
        let layout = SignalLayout::from_definition(&signal(3, 12, ByteOrder::BigEndian, ValueType::Unsigned));
        let mut data = [0u8; 2];
        layout.pack(&mut data, 0xABC);
        assert_eq!(data, [0x0A, 0xBC]);
        assert_eq!(layout.extract(&data), 0xABC);
    }

    #[test]
    fn test_pack_preserves_neighbouring_bits() {
        // COUNTER-like nibble at bit 8
        let layout = SignalLayout::from_definition(&signal(8, 4, ByteOrder::LittleEndian, ValueType::Unsigned));
        let mut data = [0xFF, 0xF0, 0xFF];
        layout.pack(&mut data, 0x5);
        assert_eq!(data, [0xFF, 0xF5, 0xFF]);
    }

    #[test]
    fn test_pack_truncates_to_width() {
        let layout = SignalLayout::from_definition(&signal(12, 3, ByteOrder::LittleEndian, ValueType::Unsigned));
        let mut data = [0u8; 2];
        layout.pack(&mut data, 0b1111);
        assert_eq!(layout.extract(&data), 0b111);
    }

    #[test]
    fn test_signed_round_trip() {
        // 13-bit steering command
        let layout = SignalLayout::from_definition(&signal(16, 13, ByteOrder::LittleEndian, ValueType::Signed));
        let mut data = [0u8; 8];
        layout.pack(&mut data, (-1500i64) as u64);
        assert_eq!(layout.extract_signed(&data), -1500);
        assert_eq!(layout.required_bytes(), 4);
    }

    #[test]
    fn test_sign_extend() {
        assert_eq!(sign_extend(0x7F, 8), 127);
        assert_eq!(sign_extend(0xFF, 8), -1);
        assert_eq!(sign_extend(0x8000, 16), -32768);
    }
}
