//! Global-protocol builders
//!
//! Checksums are left to the packer. Every message is stamped with
//! `COUNTER = tick mod 16`.

use super::emit;
use crate::alerts::{
    apply_infotainment_alert, apply_lkas_hud, filter_stock_dash_alerts, filter_stock_lkas_alerts,
};
use crate::commands::{
    BrakeCommand, DashStatusCommand, DistanceCommand, LkasStateCommand, StatusCommand,
    SteeringCommand, VisualAlert,
};
use crate::composer::passthrough;
use crate::config::CanBus;
use crate::counter::{stamp, GLOBAL_COUNTER_MODULUS};
use crate::longitudinal::{
    inject_brake, inject_cruise_buttons, inject_dash_status, inject_distance, inject_status,
};
use crate::messages::{
    EsBrakeSignal, EsDashStatusSignal, EsDistanceSignal, EsHighBeamAssistSignal,
    EsInfotainmentSignal, EsLkasSignal, EsLkasStateSignal, EsStatic1Signal, EsStatic2Signal,
    EsStatusSignal, Values,
};
use crate::packer::FramePacker;
use crate::types::{CanFrame, Result};

/// ES_LKAS steering command
pub fn create_steering_control<P: FramePacker + ?Sized>(
    packer: &P,
    tick: u64,
    cmd: &SteeringCommand,
) -> Result<CanFrame> {
    let mut values = Values::new()
        .with(EsLkasSignal::LkasOutput, cmd.apply_steer)
        .with(EsLkasSignal::LkasRequest, cmd.steer_req)
        .with(EsLkasSignal::Set1, 1);
    stamp(&mut values, EsLkasSignal::Counter, tick, GLOBAL_COUNTER_MODULUS);

    emit(packer, &values, CanBus::MAIN)
}

/// ES_LKAS_State acknowledgement carrying only the counter
pub fn create_steering_status<P: FramePacker + ?Sized>(packer: &P, tick: u64) -> Result<CanFrame> {
    let mut values = Values::new();
    stamp(&mut values, EsLkasStateSignal::Counter, tick, GLOBAL_COUNTER_MODULUS);

    emit(packer, &values, CanBus::MAIN)
}

/// ES_Distance: stock pass-through, longitudinal overrides, cruise buttons
pub fn create_es_distance<P: FramePacker + ?Sized>(
    packer: &P,
    tick: u64,
    stock: Option<&Values<EsDistanceSignal>>,
    bus: u8,
    cmd: &DistanceCommand,
) -> Result<CanFrame> {
    let mut values = passthrough(stock)?;
    stamp(&mut values, EsDistanceSignal::Counter, tick, GLOBAL_COUNTER_MODULUS);

    inject_distance(&mut values, cmd);
    inject_cruise_buttons(&mut values, cmd);

    emit(packer, &values, bus)
}

/// ES_LKAS_State: stock alerts filtered, then the HUD request applied
pub fn create_es_lkas_state<P: FramePacker + ?Sized>(
    packer: &P,
    tick: u64,
    stock: Option<&Values<EsLkasStateSignal>>,
    cmd: &LkasStateCommand,
) -> Result<CanFrame> {
    let mut values = passthrough(stock)?;
    stamp(&mut values, EsLkasStateSignal::Counter, tick, GLOBAL_COUNTER_MODULUS);

    filter_stock_lkas_alerts(&mut values);
    apply_lkas_hud(&mut values, cmd);

    emit(packer, &values, CanBus::MAIN)
}

/// ES_DashStatus: longitudinal overrides, then the dash text filter
pub fn create_es_dashstatus<P: FramePacker + ?Sized>(
    packer: &P,
    tick: u64,
    stock: Option<&Values<EsDashStatusSignal>>,
    cmd: &DashStatusCommand,
) -> Result<CanFrame> {
    let mut values = passthrough(stock)?;
    stamp(&mut values, EsDashStatusSignal::Counter, tick, GLOBAL_COUNTER_MODULUS);

    inject_dash_status(&mut values, cmd);
    filter_stock_dash_alerts(&mut values);

    emit(packer, &values, CanBus::MAIN)
}

/// ES_Brake
pub fn create_es_brake<P: FramePacker + ?Sized>(
    packer: &P,
    tick: u64,
    stock: Option<&Values<EsBrakeSignal>>,
    bus: u8,
    cmd: &BrakeCommand,
) -> Result<CanFrame> {
    let mut values = passthrough(stock)?;
    stamp(&mut values, EsBrakeSignal::Counter, tick, GLOBAL_COUNTER_MODULUS);

    inject_brake(&mut values, cmd);

    emit(packer, &values, bus)
}

/// ES_Status
pub fn create_es_status<P: FramePacker + ?Sized>(
    packer: &P,
    tick: u64,
    stock: Option<&Values<EsStatusSignal>>,
    bus: u8,
    cmd: &StatusCommand,
) -> Result<CanFrame> {
    let mut values = passthrough(stock)?;
    stamp(&mut values, EsStatusSignal::Counter, tick, GLOBAL_COUNTER_MODULUS);

    inject_status(&mut values, cmd);

    emit(packer, &values, bus)
}

/// ES_Infotainment
pub fn create_es_infotainment<P: FramePacker + ?Sized>(
    packer: &P,
    tick: u64,
    stock: Option<&Values<EsInfotainmentSignal>>,
    visual_alert: VisualAlert,
) -> Result<CanFrame> {
    let mut values = passthrough(stock)?;
    stamp(&mut values, EsInfotainmentSignal::Counter, tick, GLOBAL_COUNTER_MODULUS);

    apply_infotainment_alert(&mut values, visual_alert);

    emit(packer, &values, CanBus::MAIN)
}

/// ES_HighBeamAssist, always reporting HBA unavailable
pub fn create_es_highbeamassist<P: FramePacker + ?Sized>(packer: &P, tick: u64) -> Result<CanFrame> {
    let mut values = Values::new().with(EsHighBeamAssistSignal::HbaAvailable, false);
    stamp(&mut values, EsHighBeamAssistSignal::Counter, tick, GLOBAL_COUNTER_MODULUS);

    emit(packer, &values, CanBus::MAIN)
}

pub fn create_es_static_1<P: FramePacker + ?Sized>(packer: &P, tick: u64) -> Result<CanFrame> {
    let mut values = Values::new().with(EsStatic1Signal::Set3, 3);
    stamp(&mut values, EsStatic1Signal::Counter, tick, GLOBAL_COUNTER_MODULUS);

    emit(packer, &values, CanBus::MAIN)
}

pub fn create_es_static_2<P: FramePacker + ?Sized>(packer: &P, tick: u64) -> Result<CanFrame> {
    let mut values = Values::new().with(EsStatic2Signal::Set3, 3);
    stamp(&mut values, EsStatic2Signal::Counter, tick, GLOBAL_COUNTER_MODULUS);

    emit(packer, &values, CanBus::MAIN)
}
