//! Longitudinal override injection
//!
//! When the controlling system owns longitudinal control it replaces a
//! fixed set of cruise fields per message. Each injector is a no-op while
//! longitudinal control is disabled, except the ES_Distance cruise-button
//! block which always runs.

use crate::commands::{BrakeCommand, DashStatusCommand, DistanceCommand, StatusCommand};
use crate::messages::{EsBrakeSignal, EsDashStatusSignal, EsDistanceSignal, EsStatusSignal, Values};

/// `Cruise_Throttle` value the stock unit sends while cruise is inactive
pub const INACTIVE_THROTTLE: i64 = 1818;

/// Brake pressure at or above which the brake lights are requested
pub const BRAKE_LIGHTS_THRESHOLD: i64 = 70;

/// ES_Distance longitudinal overrides
pub fn inject_distance(values: &mut Values<EsDistanceSignal>, cmd: &DistanceCommand) {
    use EsDistanceSignal::*;

    if !cmd.long_enabled {
        return;
    }

    values.set(CruiseThrottle, cmd.cruise_throttle);
    values.set(CloseDistance, 5);
    values.set(Signal1, 1);
    values.set(Signal2, 2);
    values.set(Signal4, 1);
    values.set(LowSpeedFollow, cmd.low_speed);

    // Stock soft disable must not disengage while we own longitudinal
    values.set(CruiseSoftDisable, 0);
    values.set(CruiseFault, 0);

    values.set(CruiseBrakeActive, cmd.brake_cmd);
}

/// ES_Distance cruise-button pass-through.
///
/// Applied after [`inject_distance`]. Without a set request, cancel also
/// forces the inactive throttle value, overwriting the commanded throttle.
pub fn inject_cruise_buttons(values: &mut Values<EsDistanceSignal>, cmd: &DistanceCommand) {
    use EsDistanceSignal::*;

    if cmd.pcm_cancel_cmd {
        values.set(CruiseCancel, 1);
    }

    if cmd.pcm_resume_cmd {
        values.set(CruiseResume, 1);
    }

    if cmd.pcm_set_cmd {
        values.set(CruiseSet, 1);
    } else if cmd.pcm_cancel_cmd {
        log::debug!("Cruise cancel without set, forcing inactive throttle");
        values.set(CruiseCancel, 1);
        values.set(CruiseThrottle, INACTIVE_THROTTLE);
    }
}

/// ES_DashStatus longitudinal overrides
pub fn inject_dash_status(values: &mut Values<EsDashStatusSignal>, cmd: &DashStatusCommand) {
    use EsDashStatusSignal::*;

    if !cmd.long_enabled {
        return;
    }

    values.set(DisplayOwnCar, 1);
    values.set(CruiseOn, cmd.cruise_on);
    values.set(CruiseSetSpeed, cmd.cruise_set_speed);
    values.set(FarDistance, 10);
    values.set(CruiseDistance, 10);
    values.set(Signal4, 1);

    values.set(CruiseState, 0);
    values.set(CruiseActivated, cmd.enabled);
    values.set(CruiseDisengaged, 0);
    values.set(CarFollow, i64::from(cmd.lead_visible));

    // AEB is not preserved, so show PCB off on the dash
    values.set(PcbOff, 1);
    values.set(LdwOff, 0);
    values.set(CruiseFault, 0);
}

/// ES_Brake longitudinal overrides
pub fn inject_brake(values: &mut Values<EsBrakeSignal>, cmd: &BrakeCommand) {
    use EsBrakeSignal::*;

    if !cmd.long_enabled {
        return;
    }

    values.set(CruiseBrakeFault, 0);
    values.set(CruiseActivated, cmd.long_active);

    values.set(BrakePressure, cmd.brake_value);

    values.set(CruiseBrakeActive, cmd.brake_value > 0);
    values.set(CruiseBrakeLights, cmd.brake_value >= BRAKE_LIGHTS_THRESHOLD);
}

/// ES_Status longitudinal overrides
pub fn inject_status(values: &mut Values<EsStatusSignal>, cmd: &StatusCommand) {
    use EsStatusSignal::*;

    if !cmd.long_enabled {
        return;
    }

    values.set(CruiseRpm, cmd.cruise_rpm);
    values.set(CruiseFault, 0);

    values.set(CruiseActivated, cmd.long_active);
}
