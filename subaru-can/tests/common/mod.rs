//! Shared fixtures for the builder integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use subaru_can::{
    CanFrame, ChecksumAlgorithm, DbcPacker, FramePacker, FrameUnpacker, Result, SignalMap,
    SignalSet, SignalValue, Values,
};

pub const GLOBAL_DBC: &str = include_str!("../../dbc/subaru_global_2017.dbc");
pub const PREGLOBAL_DBC: &str = include_str!("../../dbc/subaru_outback_2015.dbc");

/// Packer over the global layouts, computing CHECKSUM
pub fn global_packer() -> DbcPacker {
    let mut packer = DbcPacker::new().with_checksum(ChecksumAlgorithm::Subaru);
    packer.add_dbc_str(GLOBAL_DBC, "subaru_global_2017.dbc").unwrap();
    packer
}

/// Packer over the pre-global layouts (no packer-side checksum)
pub fn preglobal_packer() -> DbcPacker {
    let mut packer = DbcPacker::new();
    packer.add_dbc_str(PREGLOBAL_DBC, "subaru_outback_2015.dbc").unwrap();
    packer
}

/// Decode a built frame back into signal values
pub fn decode(packer: &DbcPacker, frame: &CanFrame) -> SignalMap {
    let definition = packer.database().get_message(frame.address).unwrap();
    FrameUnpacker::unpack(frame, definition).unwrap()
}

/// Integer view of a decoded signal
pub fn int(decoded: &SignalMap, name: &str) -> i64 {
    decoded
        .get(name)
        .unwrap_or_else(|| panic!("signal {name} not decoded"))
        .as_i64()
}

/// Pack `signals` as if the stock camera had sent them, then decode the
/// result into a typed snapshot
pub fn stock_snapshot<S: SignalSet>(packer: &DbcPacker, signals: &[(&str, i64)]) -> Values<S> {
    let map: SignalMap = signals
        .iter()
        .map(|(name, value)| (name.to_string(), SignalValue::Integer(*value)))
        .collect();
    let frame = packer.pack(S::MESSAGE, 2, &map).unwrap();
    Values::from_decoded(&decode(packer, &frame)).unwrap()
}

/// Snapshot with every pass-through signal set to `value`
pub fn uniform_snapshot<S: SignalSet>(value: i64) -> Values<S> {
    S::PASSTHROUGH
        .iter()
        .map(|&s| (s, SignalValue::Integer(value)))
        .collect()
}

/// Packer that records the value maps it is handed
#[derive(Default)]
pub struct RecordingPacker {
    pub calls: RefCell<Vec<(String, u8, SignalMap)>>,
}

impl RecordingPacker {
    pub fn last(&self) -> (String, u8, SignalMap) {
        self.calls.borrow().last().cloned().expect("no frame packed")
    }
}

impl FramePacker for RecordingPacker {
    fn pack(&self, message: &str, bus: u8, values: &SignalMap) -> Result<CanFrame> {
        self.calls
            .borrow_mut()
            .push((message.to_string(), bus, values.clone()));
        Ok(CanFrame::new(0, bus, vec![0; 8]))
    }
}

/// Route library logs to the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
