//! Message builders
//!
//! One function per outgoing message. Every builder is a pure function of
//! its inputs: pass-through values from the stock snapshot first, then the
//! rolling counter, then overrides, then a single call into the packer.

use crate::messages::{SignalSet, Values};
use crate::packer::FramePacker;
use crate::types::{CanFrame, Result};

pub mod global;
pub mod preglobal;

pub use global::{
    create_es_brake, create_es_dashstatus, create_es_distance, create_es_highbeamassist,
    create_es_infotainment, create_es_lkas_state, create_es_static_1, create_es_static_2,
    create_es_status, create_steering_control, create_steering_status,
};
pub use preglobal::{create_preglobal_es_distance, create_preglobal_steering_control};

/// Hand the finished values to the packer
fn emit<P, S>(packer: &P, values: &Values<S>, bus: u8) -> Result<CanFrame>
where
    P: FramePacker + ?Sized,
    S: SignalSet,
{
    let frame = packer.pack(S::MESSAGE, bus, &values.to_signal_map())?;
    log::trace!("{} {:?} -> {}", S::MESSAGE, values, frame);
    Ok(frame)
}
