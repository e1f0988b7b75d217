//! Stock payload decoding into typed snapshots

use crate::config::{parse_hex, Generation};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use subaru_can::messages::{
    EsBrakeSignal, EsDashStatusSignal, EsDistanceSignal, EsInfotainmentSignal, EsLkasStateSignal,
    EsStatusSignal, PreglobalEsDistanceSignal,
};
use subaru_can::{DbcPacker, FrameUnpacker, SignalSet, Values};

/// Last observed stock frame per synthesized message
#[derive(Debug, Default)]
pub struct StockSnapshots {
    pub distance: Option<Values<EsDistanceSignal>>,
    pub lkas_state: Option<Values<EsLkasStateSignal>>,
    pub dash_status: Option<Values<EsDashStatusSignal>>,
    pub brake: Option<Values<EsBrakeSignal>>,
    pub status: Option<Values<EsStatusSignal>>,
    pub infotainment: Option<Values<EsInfotainmentSignal>>,
    pub preglobal_distance: Option<Values<PreglobalEsDistanceSignal>>,
}

impl StockSnapshots {
    /// Decode hex payloads against the packer's layouts
    pub fn decode(
        packer: &DbcPacker,
        generation: Generation,
        stock: &BTreeMap<String, String>,
    ) -> Result<Self> {
        let snapshots = match generation {
            Generation::Global => Self {
                distance: snapshot(packer, stock)?,
                lkas_state: snapshot(packer, stock)?,
                dash_status: snapshot(packer, stock)?,
                brake: snapshot(packer, stock)?,
                status: snapshot(packer, stock)?,
                infotainment: snapshot(packer, stock)?,
                ..Default::default()
            },
            Generation::Preglobal => Self {
                preglobal_distance: snapshot(packer, stock)?,
                ..Default::default()
            },
        };

        let used = snapshots.messages();
        for message in stock.keys() {
            if !used.contains(&message.as_str()) {
                log::warn!(
                    "Ignoring stock payload for {}: not used by {:?} builders",
                    message,
                    generation
                );
            }
        }

        Ok(snapshots)
    }

    /// Names of the messages with a snapshot
    fn messages(&self) -> Vec<&'static str> {
        fn name<S: SignalSet>(values: &Option<Values<S>>) -> Option<&'static str> {
            values.as_ref().map(|_| S::MESSAGE)
        }

        [
            name(&self.distance),
            name(&self.lkas_state),
            name(&self.dash_status),
            name(&self.brake),
            name(&self.status),
            name(&self.infotainment),
            name(&self.preglobal_distance),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

fn snapshot<S: SignalSet>(
    packer: &DbcPacker,
    stock: &BTreeMap<String, String>,
) -> Result<Option<Values<S>>> {
    let Some(payload) = stock.get(S::MESSAGE) else {
        return Ok(None);
    };

    let data = parse_hex(payload)
        .with_context(|| format!("Invalid stock payload for {}", S::MESSAGE))?;
    let definition = packer.message(S::MESSAGE)?;
    let decoded = FrameUnpacker::unpack_bytes(&data, definition)?;
    log::debug!("Stock {}: {} signals decoded", S::MESSAGE, decoded.len());

    Ok(Some(Values::from_decoded(&decoded)?))
}
