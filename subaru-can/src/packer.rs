//! Frame packer
//!
//! Turns a message name plus a signal map into a serialized frame on a bus.
//! Builders only depend on the [`FramePacker`] trait; [`DbcPacker`] is the
//! DBC-backed implementation.

use crate::signals::{MessageDefinition, SignalDatabase, SignalDefinition, SignalLayout};
use crate::types::{CanFrame, Result, SignalMap, SignalValue, SynthError};
use std::path::Path;

/// Name of the checksum signal the packer fills in on global-protocol layouts
pub const CHECKSUM_SIGNAL: &str = "CHECKSUM";

/// Encodes named messages into frames.
///
/// Signals not present in `values` are encoded as raw zero.
pub trait FramePacker {
    fn pack(&self, message: &str, bus: u8, values: &SignalMap) -> Result<CanFrame>;
}

impl<P: FramePacker + ?Sized> FramePacker for &P {
    fn pack(&self, message: &str, bus: u8, values: &SignalMap) -> Result<CanFrame> {
        (**self).pack(message, bus, values)
    }
}

/// Checksum the packer computes for layouts carrying a `CHECKSUM` signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    /// Sum of the address bytes and every payload byte after byte 0, mod 256
    Subaru,
}

impl ChecksumAlgorithm {
    pub fn compute(&self, address: u32, data: &[u8]) -> u8 {
        match self {
            ChecksumAlgorithm::Subaru => {
                let mut sum: u32 = 0;
                let mut addr = address;
                while addr != 0 {
                    sum += addr & 0xFF;
                    addr >>= 8;
                }
                sum += data.iter().skip(1).map(|&b| u32::from(b)).sum::<u32>();
                (sum & 0xFF) as u8
            }
        }
    }
}

/// DBC-backed frame packer
#[derive(Debug, Clone, Default)]
pub struct DbcPacker {
    signal_db: SignalDatabase,
    checksum: Option<ChecksumAlgorithm>,
}

impl DbcPacker {
    /// Create a packer with an empty database and no checksum
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: compute the `CHECKSUM` signal with this algorithm
    pub fn with_checksum(mut self, algorithm: ChecksumAlgorithm) -> Self {
        self.checksum = Some(algorithm);
        self
    }

    /// Load a DBC file into the packer's database
    pub fn add_dbc(&mut self, path: &Path) -> Result<()> {
        log::info!("Loading DBC file: {:?}", path);

        for message in crate::signals::dbc::parse_dbc_file(path)? {
            self.add_message(message)?;
        }

        Ok(())
    }

    /// Load DBC content held in memory
    pub fn add_dbc_str(&mut self, content: &str, source: &str) -> Result<()> {
        for message in crate::signals::dbc::parse_dbc_str(content, source)? {
            self.add_message(message)?;
        }

        Ok(())
    }

    /// Add a single message layout, rejecting signals that overrun the payload
    pub fn add_message(&mut self, message: MessageDefinition) -> Result<()> {
        for signal in &message.signals {
            let layout = SignalLayout::from_definition(signal);
            if layout.required_bytes() > message.size {
                return Err(SynthError::InvalidSignalDefinition(format!(
                    "Signal '{}' needs {} bytes but '{}' is {} bytes",
                    signal.name,
                    layout.required_bytes(),
                    message.name,
                    message.size
                )));
            }
        }

        self.signal_db.add_message(message);
        Ok(())
    }

    /// Access the underlying signal database
    pub fn database(&self) -> &SignalDatabase {
        &self.signal_db
    }

    /// Look up a message layout by name
    pub fn message(&self, name: &str) -> Result<&MessageDefinition> {
        self.signal_db
            .get_message_by_name(name)
            .ok_or_else(|| SynthError::MessageNotFound(name.to_string()))
    }
}

impl FramePacker for DbcPacker {
    fn pack(&self, message: &str, bus: u8, values: &SignalMap) -> Result<CanFrame> {
        let definition = self.message(message)?;
        let mut data = vec![0u8; definition.size];

        for (name, value) in values {
            let signal = definition
                .signal(name)
                .ok_or_else(|| SynthError::SignalNotFound {
                    message: message.to_string(),
                    signal: name.clone(),
                })?;
            SignalLayout::from_definition(signal).pack(&mut data, to_raw(signal, value) as u64);
        }

        if let (Some(algorithm), Some(signal)) =
            (self.checksum, definition.signal(CHECKSUM_SIGNAL))
        {
            let checksum = algorithm.compute(definition.id, &data);
            SignalLayout::from_definition(signal).pack(&mut data, u64::from(checksum));
        }

        let frame = CanFrame::new(definition.id, bus, data);
        log::trace!("Packed {} -> {}", message, frame);
        Ok(frame)
    }
}

/// Convert a physical value to the signal's raw integer representation
fn to_raw(signal: &SignalDefinition, value: &SignalValue) -> i64 {
    match value {
        SignalValue::Boolean(b) => i64::from(*b),
        SignalValue::Integer(v) if signal.is_unscaled() => *v,
        other => ((other.as_f64() - signal.offset) / signal.factor).round() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::{ByteOrder, ValueType};

    const SCALED_DBC: &str = r#"
VERSION ""

NS_ :

BS_:

BU_: XXX

BO_ 1024 Scaled: 4 XXX
 SG_ CHECKSUM : 0|8@1+ (1,0) [0|255] "" XXX
 SG_ Speed : 8|16@1+ (0.05,0) [0|3276] "kph" XXX
 SG_ Temp : 24|8@1+ (1,-40) [-40|215] "C" XXX
"#;

    fn global_packer() -> DbcPacker {
        let mut packer = DbcPacker::new().with_checksum(ChecksumAlgorithm::Subaru);
        packer
            .add_dbc_str(include_str!("../dbc/subaru_global_2017.dbc"), "global")
            .unwrap();
        packer
    }

    #[test]
    fn test_pack_defaults_to_zero() {
        let mut packer = DbcPacker::new();
        packer
            .add_dbc_str(include_str!("../dbc/subaru_global_2017.dbc"), "global")
            .unwrap();

        let frame = packer.pack("ES_Status", 1, &SignalMap::new()).unwrap();
        assert_eq!(frame.address, 546);
        assert_eq!(frame.bus, 1);
        assert_eq!(frame.data, vec![0u8; 8]);
    }

    #[test]
    fn test_pack_computes_subaru_checksum() {
        let packer = global_packer();
        let mut values = SignalMap::new();
        values.insert("COUNTER".to_string(), SignalValue::Integer(3));

        let frame = packer.pack("ES_Status", 0, &values).unwrap();
        // 546 = 0x222: address bytes 0x22 + 0x02, payload byte 1 = 0x03
        assert_eq!(frame.data[1], 0x03);
        assert_eq!(frame.data[0], (0x22 + 0x02 + 0x03) as u8);
    }

    #[test]
    fn test_checksum_ignores_caller_value() {
        let packer = global_packer();
        let mut values = SignalMap::new();
        values.insert("CHECKSUM".to_string(), SignalValue::Integer(0xAA));

        let frame = packer.pack("ES_Status", 0, &values).unwrap();
        assert_eq!(frame.data[0], 0x22 + 0x02);
    }

    #[test]
    fn test_unknown_message_and_signal() {
        let packer = global_packer();
        assert!(matches!(
            packer.pack("ES_Nope", 0, &SignalMap::new()),
            Err(SynthError::MessageNotFound(_))
        ));

        let mut values = SignalMap::new();
        values.insert("LKAS_State_Infotainement".to_string(), SignalValue::Integer(0));
        assert!(matches!(
            packer.pack("ES_Infotainment", 0, &values),
            Err(SynthError::SignalNotFound { .. })
        ));
    }

    #[test]
    fn test_scaled_values() {
        let mut packer = DbcPacker::new();
        packer.add_dbc_str(SCALED_DBC, "scaled").unwrap();

        let mut values = SignalMap::new();
        values.insert("Speed".to_string(), SignalValue::Float(12.5));
        values.insert("Temp".to_string(), SignalValue::Integer(20));

        let frame = packer.pack("Scaled", 0, &values).unwrap();
        // 12.5 / 0.05 = 250, 20 - (-40) = 60
        assert_eq!(frame.data, vec![0x00, 250, 0x00, 60]);
    }

    #[test]
    fn test_reject_overrunning_signal() {
        let mut packer = DbcPacker::new();
        let message = MessageDefinition {
            id: 0x10,
            name: "Short".to_string(),
            size: 1,
            sender: None,
            signals: vec![SignalDefinition {
                name: "Wide".to_string(),
                start_bit: 4,
                length: 8,
                byte_order: ByteOrder::LittleEndian,
                value_type: ValueType::Unsigned,
                factor: 1.0,
                offset: 0.0,
                min: 0.0,
                max: 255.0,
                unit: None,
            }],
            source: "test".to_string(),
        };

        assert!(matches!(
            packer.add_message(message),
            Err(SynthError::InvalidSignalDefinition(_))
        ));
    }

    #[test]
    fn test_subaru_checksum_multibyte_address() {
        let data = [0x00, 0x01, 0x02];
        // 0x651: 0x51 + 0x06 + 1 + 2
        assert_eq!(ChecksumAlgorithm::Subaru.compute(0x651, &data), 0x5A);
    }
}
