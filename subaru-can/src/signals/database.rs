//! Signal database
//!
//! Holds the message layouts loaded from DBC files, indexed both by CAN ID
//! and by message name (the packer addresses messages by name).

use std::collections::HashMap;

/// A complete CAN message definition
#[derive(Debug, Clone)]
pub struct MessageDefinition {
    /// CAN message ID
    pub id: u32,
    /// Message name
    pub name: String,
    /// Message size in bytes
    pub size: usize,
    /// Sender ECU name (optional)
    pub sender: Option<String>,
    /// All signals in this message
    pub signals: Vec<SignalDefinition>,
    /// Source file (DBC filename)
    pub source: String,
}

impl MessageDefinition {
    /// Look up a signal by name
    pub fn signal(&self, name: &str) -> Option<&SignalDefinition> {
        self.signals.iter().find(|s| s.name == name)
    }
}

/// A CAN signal definition
#[derive(Debug, Clone)]
pub struct SignalDefinition {
    /// Signal name
    pub name: String,
    /// Start bit in the CAN frame (DBC numbering)
    pub start_bit: u16,
    /// Length in bits
    pub length: u16,
    /// Byte order
    pub byte_order: ByteOrder,
    /// Value type (signed/unsigned)
    pub value_type: ValueType,
    /// Scale factor to convert raw value to physical value
    pub factor: f64,
    /// Offset to add after scaling
    pub offset: f64,
    /// Minimum physical value
    pub min: f64,
    /// Maximum physical value
    pub max: f64,
    /// Engineering unit (e.g., "km/h", "rpm")
    pub unit: Option<String>,
}

impl SignalDefinition {
    /// True when raw and physical values coincide
    pub fn is_unscaled(&self) -> bool {
        self.factor == 1.0 && self.offset == 0.0
    }
}

/// Byte order for signal packing and extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian (Intel format)
    LittleEndian,
    /// Big-endian (Motorola format)
    BigEndian,
}

/// Value type for signal interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Signed integer
    Signed,
    /// Unsigned integer
    Unsigned,
}

/// The signal database
#[derive(Debug, Clone, Default)]
pub struct SignalDatabase {
    /// All message definitions by CAN ID
    messages: HashMap<u32, MessageDefinition>,

    /// Key: Message name, Value: CAN ID
    message_lookup: HashMap<String, u32>,
}

impl SignalDatabase {
    /// Create a new empty signal database
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message definition to the database
    ///
    /// A later definition with the same ID or name replaces the earlier one.
    pub fn add_message(&mut self, message: MessageDefinition) {
        if let Some(previous) = self.messages.get(&message.id) {
            log::warn!(
                "Message 0x{:X} ({}) from {} replaces definition from {}",
                message.id,
                message.name,
                message.source,
                previous.source
            );
            self.message_lookup.remove(&previous.name);
        }

        self.message_lookup.insert(message.name.clone(), message.id);
        self.messages.insert(message.id, message);
    }

    /// Get a message definition by CAN ID
    pub fn get_message(&self, can_id: u32) -> Option<&MessageDefinition> {
        self.messages.get(&can_id)
    }

    /// Get a message definition by name
    pub fn get_message_by_name(&self, message_name: &str) -> Option<&MessageDefinition> {
        self.message_lookup
            .get(message_name)
            .and_then(|can_id| self.messages.get(can_id))
    }

    /// Get database statistics
    pub fn stats(&self) -> DatabaseStats {
        let num_messages = self.messages.len();
        let num_signals: usize = self.messages.values().map(|msg| msg.signals.len()).sum();

        DatabaseStats {
            num_messages,
            num_signals,
        }
    }

    /// Get all CAN IDs in the database, sorted
    pub fn get_all_can_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.messages.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Database statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseStats {
    /// Total number of message definitions
    pub num_messages: usize,
    /// Total number of signal definitions
    pub num_signals: usize,
}
