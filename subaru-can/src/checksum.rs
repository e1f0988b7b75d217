//! Pre-global checksum pipeline
//!
//! The pre-global checksum covers the whole serialized payload except its
//! own byte, so it is computed in three stages: draft serialize, sum the
//! draft, then serialize again with the checksum inserted.

use crate::config::CanBus;
use crate::messages::{SignalSet, Values};
use crate::packer::FramePacker;
use crate::types::{CanFrame, Result};

/// Byte holding the checksum unless a message defines otherwise
pub const DEFAULT_CHECKSUM_BYTE: usize = 7;

/// A pre-global message whose checksum this crate computes
pub trait PreglobalChecksum: SignalSet {
    /// Signal receiving the computed checksum
    const CHECKSUM: Self;

    /// Payload byte excluded from the sum
    const CHECKSUM_BYTE: usize = DEFAULT_CHECKSUM_BYTE;
}

/// Stage 1: serialize the values without a checksum
pub fn draft_payload<P, S>(packer: &P, values: &Values<S>) -> Result<Vec<u8>>
where
    P: FramePacker + ?Sized,
    S: PreglobalChecksum,
{
    let mut draft = values.clone();
    draft.remove(S::CHECKSUM);
    Ok(packer.pack(S::MESSAGE, CanBus::MAIN, &draft.to_signal_map())?.data)
}

/// Stage 2: sum every byte except `checksum_byte`, mod 256
pub fn preglobal_checksum(payload: &[u8], checksum_byte: usize) -> u8 {
    if checksum_byte >= payload.len() {
        log::warn!(
            "Checksum byte {} is outside the {}-byte payload",
            checksum_byte,
            payload.len()
        );
    }

    let sum: u32 = payload
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != checksum_byte)
        .map(|(_, &b)| u32::from(b))
        .sum();
    (sum % 256) as u8
}

/// Stage 3: insert the checksum and serialize the final frame
pub fn seal<P, S>(packer: &P, mut values: Values<S>, bus: u8) -> Result<CanFrame>
where
    P: FramePacker + ?Sized,
    S: PreglobalChecksum,
{
    let draft = draft_payload(packer, &values)?;
    let checksum = preglobal_checksum(&draft, S::CHECKSUM_BYTE);
    values.set(S::CHECKSUM, i64::from(checksum));
    packer.pack(S::MESSAGE, bus, &values.to_signal_map())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_skips_its_byte() {
        let payload = [1, 2, 3, 4, 5, 6, 7, 0xFF];
        assert_eq!(preglobal_checksum(&payload, 7), 28);
        assert_eq!(preglobal_checksum(&payload, 0), ((2 + 3 + 4 + 5 + 6 + 7 + 0xFF) % 256) as u8);
    }

    #[test]
    fn test_checksum_wraps() {
        let payload = [0xFF; 8];
        assert_eq!(preglobal_checksum(&payload, 7), ((0xFF * 7) % 256) as u8);
    }

    #[test]
    fn test_checksum_byte_outside_payload_sums_everything() {
        let payload = [10, 20, 30];
        assert_eq!(preglobal_checksum(&payload, 7), 60);
    }
}
