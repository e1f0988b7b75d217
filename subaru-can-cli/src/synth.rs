//! Per-tick frame synthesis

use crate::config::{Generation, Scenario};
use crate::stock::StockSnapshots;
use subaru_can::builders::*;
use subaru_can::{CanFrame, FramePacker, Result};

/// Build every frame the scenario's generation emits on one tick
pub fn frames_for_tick<P: FramePacker + ?Sized>(
    packer: &P,
    tick: u64,
    scenario: &Scenario,
    stock: &StockSnapshots,
) -> Result<Vec<CanFrame>> {
    let cmds = &scenario.commands;
    let buses = &scenario.buses;

    match scenario.generation {
        Generation::Global => Ok(vec![
            create_steering_control(packer, tick, &cmds.steering)?,
            create_steering_status(packer, tick)?,
            create_es_distance(
                packer,
                tick,
                stock.distance.as_ref(),
                buses.distance_bus,
                &cmds.distance,
            )?,
            create_es_lkas_state(packer, tick, stock.lkas_state.as_ref(), &cmds.lkas_state)?,
            create_es_dashstatus(
                packer,
                tick,
                stock.dash_status.as_ref(),
                &cmds.dash_status,
            )?,
            create_es_brake(packer, tick, stock.brake.as_ref(), buses.brake_bus, &cmds.brake)?,
            create_es_status(
                packer,
                tick,
                stock.status.as_ref(),
                buses.status_bus,
                &cmds.status,
            )?,
            create_es_infotainment(
                packer,
                tick,
                stock.infotainment.as_ref(),
                cmds.visual_alert,
            )?,
            create_es_highbeamassist(packer, tick)?,
            create_es_static_1(packer, tick)?,
            create_es_static_2(packer, tick)?,
        ]),
        Generation::Preglobal => Ok(vec![
            create_preglobal_steering_control(packer, tick, &cmds.steering)?,
            create_preglobal_es_distance(
                packer,
                cmds.cruise_button,
                stock.preglobal_distance.as_ref(),
            )?,
        ]),
    }
}
