//! DBC file parser
//!
//! Parses Vector DBC files and converts them into our internal signal database format.

use crate::signals::database::{ByteOrder, MessageDefinition, SignalDefinition, ValueType};
use crate::types::{Result, SynthError};
use std::path::Path;

/// Parse a DBC file and return message definitions
pub fn parse_dbc_file(path: &Path) -> Result<Vec<MessageDefinition>> {
    log::info!("Parsing DBC file: {:?}", path);

    // Read the DBC file as bytes first (handle non-UTF8 encodings)
    let bytes = std::fs::read(path).map_err(|e| {
        SynthError::DbcParseError(format!("Failed to read file {:?}: {}", path, e))
    })?;

    // Fall back to Latin-1 when the file is not valid UTF-8
    let dbc_content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("DBC file is not UTF-8, trying Latin-1 encoding");
            e.into_bytes().iter().map(|&b| b as char).collect()
        }
    };

    let source_filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown.dbc");

    parse_dbc_str(&dbc_content, source_filename)
}

/// Parse DBC content held in memory
pub fn parse_dbc_str(content: &str, source: &str) -> Result<Vec<MessageDefinition>> {
    let dbc = can_dbc::DBC::from_slice(content.as_bytes()).map_err(|e| {
        SynthError::DbcParseError(format!("Failed to parse DBC {}: {:?}", source, e))
    })?;

    let messages = dbc
        .messages()
        .iter()
        .map(|dbc_msg| convert_message(dbc_msg, source))
        .collect::<Result<Vec<_>>>()?;

    log::info!("Parsed {} messages from {}", messages.len(), source);

    Ok(messages)
}

/// Convert a can-dbc message to our MessageDefinition
fn convert_message(dbc_msg: &can_dbc::Message, source: &str) -> Result<MessageDefinition> {
    let mut signals = Vec::new();

    for dbc_sig in dbc_msg.signals() {
        if !matches!(
            dbc_sig.multiplexer_indicator(),
            can_dbc::MultiplexIndicator::Plain
        ) {
            return Err(SynthError::InvalidSignalDefinition(format!(
                "Multiplexed signal '{}' in '{}' is not supported for packing",
                dbc_sig.name(),
                dbc_msg.message_name()
            )));
        }
        signals.push(convert_signal(dbc_sig));
    }

    Ok(MessageDefinition {
        id: dbc_msg.message_id().0,
        name: dbc_msg.message_name().to_string(),
        size: *dbc_msg.message_size() as usize,
        sender: match dbc_msg.transmitter() {
            can_dbc::Transmitter::NodeName(name) => Some(name.to_string()),
            _ => None,
        },
        signals,
        source: source.to_string(),
    })
}

/// Convert a can-dbc signal to our SignalDefinition
fn convert_signal(dbc_sig: &can_dbc::Signal) -> SignalDefinition {
    let byte_order = match *dbc_sig.byte_order() {
        can_dbc::ByteOrder::LittleEndian => ByteOrder::LittleEndian,
        can_dbc::ByteOrder::BigEndian => ByteOrder::BigEndian,
    };

    let value_type = match *dbc_sig.value_type() {
        can_dbc::ValueType::Signed => ValueType::Signed,
        can_dbc::ValueType::Unsigned => ValueType::Unsigned,
    };

    SignalDefinition {
        name: dbc_sig.name().to_string(),
        start_bit: *dbc_sig.start_bit() as u16,
        length: *dbc_sig.signal_size() as u16,
        byte_order,
        value_type,
        factor: *dbc_sig.factor(),
        offset: *dbc_sig.offset(),
        min: *dbc_sig.min(),
        max: *dbc_sig.max(),
        unit: if dbc_sig.unit().is_empty() {
            None
        } else {
            Some(dbc_sig.unit().to_string())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const STATUS_DBC: &str = r#"
VERSION ""

NS_ :

BS_:

BU_: XXX

BO_ 546 ES_Status: 8 XXX
 SG_ COUNTER : 8|4@1+ (1,0) [0|15] "" XXX
 SG_ Cruise_RPM : 16|13@1+ (1,0) [0|8191] "rpm" XXX
 SG_ Cruise_Activated : 29|1@1+ (1,0) [0|1] "" XXX
"#;

    #[test]
    fn test_parse_dbc_str() {
        let messages = parse_dbc_str(STATUS_DBC, "inline.dbc").unwrap();
        assert_eq!(messages.len(), 1);

        let msg = &messages[0];
        assert_eq!(msg.id, 546);
        assert_eq!(msg.name, "ES_Status");
        assert_eq!(msg.size, 8);
        assert_eq!(msg.sender, Some("XXX".to_string()));
        assert_eq!(msg.signals.len(), 3);
        assert_eq!(msg.source, "inline.dbc");

        let rpm = msg.signal("Cruise_RPM").unwrap();
        assert_eq!(rpm.start_bit, 16);
        assert_eq!(rpm.length, 13);
        assert_eq!(rpm.byte_order, ByteOrder::LittleEndian);
        assert_eq!(rpm.value_type, ValueType::Unsigned);
        assert_eq!(rpm.unit, Some("rpm".to_string()));
    }

    #[test]
    fn test_parse_dbc_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(STATUS_DBC.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let messages = parse_dbc_file(temp_file.path()).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].name, "ES_Status");
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_dbc_file(Path::new("/nonexistent/layout.dbc"));
        assert!(matches!(result, Err(SynthError::DbcParseError(_))));
    }

    #[test]
    fn test_parse_shipped_layouts() {
        let global = parse_dbc_str(include_str!("../../dbc/subaru_global_2017.dbc"), "global").unwrap();
        assert_eq!(global.len(), 10);

        let preglobal =
            parse_dbc_str(include_str!("../../dbc/subaru_outback_2015.dbc"), "preglobal").unwrap();
        let lkas = preglobal.iter().find(|m| m.name == "ES_LKAS").unwrap();
        assert_eq!(lkas.signal("LKAS_Command").unwrap().value_type, ValueType::Signed);
    }
}
