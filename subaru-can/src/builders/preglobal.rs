//! Pre-global builders
//!
//! Both messages carry a checksum computed here through the two-pass
//! pipeline in [`crate::checksum`].

use crate::checksum::seal;
use crate::commands::SteeringCommand;
use crate::composer::passthrough;
use crate::config::CanBus;
use crate::counter::{stamp, PREGLOBAL_LKAS_COUNTER_MODULUS};
use crate::messages::{PreglobalEsDistanceSignal, PreglobalEsLkasSignal, Values};
use crate::packer::FramePacker;
use crate::types::{CanFrame, Result};

/// Pre-global ES_LKAS steering command, `COUNTER = tick mod 8`
pub fn create_preglobal_steering_control<P: FramePacker + ?Sized>(
    packer: &P,
    tick: u64,
    cmd: &SteeringCommand,
) -> Result<CanFrame> {
    let mut values = Values::new()
        .with(PreglobalEsLkasSignal::LkasCommand, cmd.apply_steer)
        .with(PreglobalEsLkasSignal::LkasActive, cmd.steer_req);
    stamp(
        &mut values,
        PreglobalEsLkasSignal::Counter,
        tick,
        PREGLOBAL_LKAS_COUNTER_MODULUS,
    );

    seal(packer, values, CanBus::MAIN)
}

/// Pre-global ES_Distance with an injected cruise button.
///
/// The counter is passed through from the stock frame, not recomputed.
pub fn create_preglobal_es_distance<P: FramePacker + ?Sized>(
    packer: &P,
    cruise_button: i64,
    stock: Option<&Values<PreglobalEsDistanceSignal>>,
) -> Result<CanFrame> {
    let mut values = passthrough(stock)?;
    values.set(PreglobalEsDistanceSignal::CruiseButton, cruise_button);

    seal(packer, values, CanBus::MAIN)
}
