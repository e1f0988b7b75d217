//! Core types for the frame synthesis library
//!
//! This module defines the values that flow between the builders and the
//! frame packer: signal values, name-keyed signal maps, finished frames and
//! the error type shared by every operation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Result type for synthesis operations
pub type Result<T> = std::result::Result<T, SynthError>;

/// Signal values keyed by their wire name, as handed to the packer
pub type SignalMap = BTreeMap<String, SignalValue>;

/// A serialized CAN frame ready for transmission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanFrame {
    /// CAN message ID (11-bit or 29-bit)
    pub address: u32,
    /// Bus the frame is destined for
    pub bus: u8,
    /// Frame data bytes
    pub data: Vec<u8>,
}

impl CanFrame {
    /// Create a new frame
    pub fn new(address: u32, bus: u8, data: Vec<u8>) -> Self {
        Self { address, bus, data }
    }

    /// Get the data length code (DLC) - number of data bytes
    pub fn dlc(&self) -> usize {
        self.data.len()
    }

    /// Payload rendered as contiguous uppercase hex
    pub fn hex(&self) -> String {
        hex::encode_upper(&self.data)
    }
}

impl fmt::Display for CanFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:03X}@{} [{}]", self.address, self.bus, self.hex())
    }
}

/// Errors that can occur while building or packing frames
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    #[error("Failed to parse DBC file: {0}")]
    DbcParseError(String),

    #[error("Message not found: {0}")]
    MessageNotFound(String),

    #[error("Signal '{signal}' not found in message '{message}'")]
    SignalNotFound { message: String, signal: String },

    #[error("Stock {message} snapshot is missing pass-through signal '{signal}'")]
    MissingStockSignal {
        message: &'static str,
        signal: &'static str,
    },

    #[error("Invalid signal definition: {0}")]
    InvalidSignalDefinition(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Signal value types understood by the packer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalValue {
    /// Boolean value (0/1)
    Boolean(bool),
    /// Signed integer value
    Integer(i64),
    /// Floating-point physical value (before scaling to raw)
    Float(f64),
}

impl fmt::Display for SignalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalValue::Integer(v) => write!(f, "{}", v),
            SignalValue::Float(v) => write!(f, "{:.3}", v),
            SignalValue::Boolean(v) => write!(f, "{}", if *v { "true" } else { "false" }),
        }
    }
}

impl SignalValue {
    /// Convert signal value to f64
    pub fn as_f64(&self) -> f64 {
        match self {
            SignalValue::Integer(v) => *v as f64,
            SignalValue::Float(v) => *v,
            SignalValue::Boolean(v) => if *v { 1.0 } else { 0.0 },
        }
    }

    /// Convert signal value to i64, truncating floats
    pub fn as_i64(&self) -> i64 {
        match self {
            SignalValue::Integer(v) => *v,
            SignalValue::Float(v) => *v as i64,
            SignalValue::Boolean(v) => i64::from(*v),
        }
    }

    /// Check if this is a non-zero value
    pub fn as_bool(&self) -> bool {
        match self {
            SignalValue::Boolean(v) => *v,
            SignalValue::Integer(v) => *v != 0,
            SignalValue::Float(v) => *v != 0.0,
        }
    }
}

impl From<bool> for SignalValue {
    fn from(value: bool) -> Self {
        SignalValue::Boolean(value)
    }
}

impl From<i64> for SignalValue {
    fn from(value: i64) -> Self {
        SignalValue::Integer(value)
    }
}

impl From<i32> for SignalValue {
    fn from(value: i32) -> Self {
        SignalValue::Integer(i64::from(value))
    }
}

impl From<u8> for SignalValue {
    fn from(value: u8) -> Self {
        SignalValue::Integer(i64::from(value))
    }
}

impl From<u64> for SignalValue {
    fn from(value: u64) -> Self {
        SignalValue::Integer(value as i64)
    }
}

impl From<f64> for SignalValue {
    fn from(value: f64) -> Self {
        SignalValue::Float(value)
    }
}
