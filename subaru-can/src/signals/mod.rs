//! Signal database and DBC parser
//!
//! This module contains the DBC parser, the bit layout shared by packing and
//! unpacking, and the signal database the packer looks messages up in.

pub mod database;
pub mod dbc;
pub mod layout;

// Re-export key types for convenience
pub use database::{
    ByteOrder, DatabaseStats, MessageDefinition, SignalDatabase, SignalDefinition, ValueType,
};
pub use layout::{BitSpan, SignalLayout};
