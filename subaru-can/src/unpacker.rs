//! Frame unpacker
//!
//! Extracts signal values from a serialized frame based on its message
//! definition. Used to turn observed stock frames into snapshots and to
//! inspect frames produced by the builders.

use crate::signals::{MessageDefinition, SignalDefinition, SignalLayout};
use crate::types::{CanFrame, Result, SignalMap, SignalValue, SynthError};

/// Frame unpacker - extracts signals from CAN frames
pub struct FrameUnpacker;

impl FrameUnpacker {
    /// Decode every signal of `message_def` from the frame payload
    ///
    /// # Returns
    /// * `Ok(SignalMap)` with one entry per signal in the definition
    /// * `Err(InvalidData)` if the payload is shorter than the definition
    pub fn unpack(frame: &CanFrame, message_def: &MessageDefinition) -> Result<SignalMap> {
        Self::unpack_bytes(&frame.data, message_def)
    }

    /// Decode raw payload bytes
    pub fn unpack_bytes(data: &[u8], message_def: &MessageDefinition) -> Result<SignalMap> {
        if data.len() < message_def.size {
            return Err(SynthError::InvalidData(format!(
                "{} expects {} bytes, got {}",
                message_def.name,
                message_def.size,
                data.len()
            )));
        }

        Ok(message_def
            .signals
            .iter()
            .map(|signal| (signal.name.clone(), Self::decode_signal(data, signal)))
            .collect())
    }

    /// Decode a single signal to its physical value
    fn decode_signal(data: &[u8], signal: &SignalDefinition) -> SignalValue {
        let raw_value = SignalLayout::from_definition(signal).extract_signed(data);

        if signal.is_unscaled() && signal.length == 1 {
            // Boolean signal (single bit, no scaling)
            SignalValue::Boolean(raw_value != 0)
        } else if !signal.is_unscaled() {
            SignalValue::Float(signal.offset + signal.factor * (raw_value as f64))
        } else {
            SignalValue::Integer(raw_value)
        }
    }
}
