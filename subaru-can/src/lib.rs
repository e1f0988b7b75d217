//! Subaru EyeSight CAN Frame Synthesis
//!
//! A stateless library that builds replacement frames for the stock
//! EyeSight camera's driver-assistance messages. Each builder takes the last
//! observed stock frame (if any) plus commands from the driving-control
//! layer, and produces a frame that passes unmodified stock behaviour
//! through field by field while substituting the fields the controlling
//! system owns.
//!
//! # Architecture
//!
//! - Stock snapshots and outgoing values are keyed by per-message signal
//!   enums ([`messages`]), never by free-form strings
//! - Pass-through composition, stock-alert filtering and longitudinal
//!   overrides are separate layers applied in a fixed order
//! - Serialization goes through the [`FramePacker`] trait; [`DbcPacker`]
//!   implements it on top of DBC layouts
//! - Global-protocol checksums are computed by the packer, pre-global
//!   checksums by a two-pass pipeline in [`checksum`]
//!
//! The library does NOT:
//! - Decide when frames are sent, or send them
//! - Pick the protocol generation for a vehicle
//! - Validate that commanded values are physically safe
//!
//! # Example Usage
//!
//! ```no_run
//! use subaru_can::{builders, DbcPacker, ChecksumAlgorithm, DistanceCommand, SynthConfig};
//! use std::path::Path;
//!
//! let mut packer = DbcPacker::new().with_checksum(ChecksumAlgorithm::Subaru);
//! packer.add_dbc(Path::new("subaru_global_2017.dbc")).unwrap();
//! let config = SynthConfig::new();
//!
//! let cmd = DistanceCommand {
//!     pcm_cancel_cmd: true,
//!     ..Default::default()
//! };
//!
//! for tick in 0..100 {
//!     let frame = builders::create_es_distance(&packer, tick, None, config.distance_bus, &cmd).unwrap();
//!     println!("{}", frame);
//! }
//! ```

// Public modules
pub mod alerts;
pub mod builders;
pub mod checksum;
pub mod commands;
pub mod composer;
pub mod config;
pub mod counter;
pub mod longitudinal;
pub mod messages;
pub mod packer;
pub mod signals;
pub mod types;
pub mod unpacker;

// Re-export main types for convenience
pub use commands::{
    BrakeCommand, DashStatusCommand, DistanceCommand, LkasStateCommand, StatusCommand,
    SteeringCommand, VisualAlert,
};
pub use config::{CanBus, SynthConfig};
pub use messages::{SignalSet, Values};
pub use packer::{ChecksumAlgorithm, DbcPacker, FramePacker};
pub use types::{CanFrame, Result, SignalMap, SignalValue, SynthError};
pub use unpacker::FrameUnpacker;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
