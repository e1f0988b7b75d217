//! Stock-alert filtering and HUD alert substitution
//!
//! Stock alerts that only make sense while the stock LKAS is steering are
//! suppressed, then the controlling system's own HUD request is layered on
//! top. Suppression never touches codes outside the listed ones, so stock
//! safety alerts such as FCW survive.

use crate::commands::{LkasStateCommand, VisualAlert};
use crate::messages::{EsDashStatusSignal, EsInfotainmentSignal, EsLkasStateSignal, Values};

/// `LKAS_Alert_Msg`: "Keep hands on wheel"
pub const ALERT_MSG_KEEP_HANDS_ON_WHEEL: i64 = 1;
/// `LKAS_Alert_Msg`: "Keep hands on wheel OFF" (2020+ models)
pub const ALERT_MSG_HANDS_ON_WHEEL_OFF: i64 = 7;

/// `LKAS_Alert`: audible alert when stock LKAS turns off
pub const ALERT_LKAS_OFF_CHIME: i64 = 27;
/// `LKAS_Alert`: audible alert accompanying "Keep hands on wheel" (2020+ models)
pub const ALERT_HANDS_ON_WHEEL_CHIME: i64 = 28;
/// `LKAS_Alert`: audible alert accompanying "Keep hands on wheel OFF" (2020+ models)
pub const ALERT_HANDS_ON_WHEEL_OFF_CHIME: i64 = 30;
/// `LKAS_Alert`: right lane departure
pub const ALERT_RIGHT_LANE_DEPARTURE: i64 = 11;
/// `LKAS_Alert`: left lane departure
pub const ALERT_LEFT_LANE_DEPARTURE: i64 = 12;

/// `LKAS_Dash_State`: green enabled indicator
pub const DASH_STATE_ENABLED: i64 = 2;

/// `LKAS_State_Infotainment`: obstacle detected
pub const INFOTAINMENT_OBSTACLE_DETECTED: i64 = 2;
/// `LKAS_State_Infotainment`: keep hands on wheel
pub const INFOTAINMENT_KEEP_HANDS_ON_WHEEL: i64 = 3;

/// Suppress stock LKAS alerts in ES_LKAS_State.
///
/// Only runs when both `LKAS_Alert` and `LKAS_Alert_Msg` are present. The
/// rules are evaluated in order against the already rewritten values.
pub fn filter_stock_lkas_alerts(values: &mut Values<EsLkasStateSignal>) {
    use EsLkasStateSignal::{LkasAlert, LkasAlertMsg};

    if !(values.contains(LkasAlert) && values.contains(LkasAlertMsg)) {
        return;
    }

    if values.get_i64(LkasAlertMsg) == Some(ALERT_MSG_KEEP_HANDS_ON_WHEEL) {
        log::debug!("Suppressing stock 'keep hands on wheel' message");
        values.set(LkasAlertMsg, 0);
    }

    if values.get_i64(LkasAlertMsg) == Some(ALERT_MSG_HANDS_ON_WHEEL_OFF) {
        log::debug!("Suppressing stock 'keep hands on wheel OFF' message");
        values.set(LkasAlertMsg, 0);
    }

    if values.get_i64(LkasAlert) == Some(ALERT_LKAS_OFF_CHIME) {
        values.set(LkasAlert, 0);
    }

    // Never true after the rule above clears message 7; kept in this order.
    if values.get_i64(LkasAlert) == Some(ALERT_HANDS_ON_WHEEL_CHIME)
        && values.get_i64(LkasAlertMsg) == Some(ALERT_MSG_HANDS_ON_WHEEL_OFF)
    {
        values.set(LkasAlert, 0);
    }

    if values.get_i64(LkasAlert) == Some(ALERT_HANDS_ON_WHEEL_OFF_CHIME) {
        values.set(LkasAlert, 0);
    }
}

/// Layer the controlling system's HUD state onto ES_LKAS_State
pub fn apply_lkas_hud(values: &mut Values<EsLkasStateSignal>, cmd: &LkasStateCommand) {
    use EsLkasStateSignal::*;

    if cmd.visual_alert == VisualAlert::SteerRequired {
        values.set(LkasAlertMsg, ALERT_MSG_KEEP_HANDS_ON_WHEEL);
    }

    // Only raise lane departure when stock is not already showing an alert (e.g. FCW)
    let stock_alert_clear = values.get_i64(LkasAlert).map_or(true, |alert| alert == 0);
    if cmd.visual_alert == VisualAlert::Ldw && stock_alert_clear {
        if cmd.left_lane_depart {
            values.set(LkasAlert, ALERT_LEFT_LANE_DEPARTURE);
        } else if cmd.right_lane_depart {
            values.set(LkasAlert, ALERT_RIGHT_LANE_DEPARTURE);
        }
    }

    if cmd.enabled {
        values.set(LkasActive, 1);
        values.set(LkasDashState, DASH_STATE_ENABLED);
    } else {
        values.set(LkasDashState, 0);
    }

    values.set(LkasLeftLineVisible, i64::from(cmd.left_line));
    values.set(LkasRightLineVisible, i64::from(cmd.right_line));
}

/// Suppress the stock "LKAS disabled" / "hands off" dash text in ES_DashStatus
pub fn filter_stock_dash_alerts(values: &mut Values<EsDashStatusSignal>) {
    if let Some(2 | 3) = values.get_i64(EsDashStatusSignal::LkasStateMsg) {
        log::debug!("Suppressing stock dash LKAS state message");
        values.set(EsDashStatusSignal::LkasStateMsg, 0);
    }
}

/// Map the HUD request onto ES_Infotainment.
///
/// Stock states are otherwise left as observed.
pub fn apply_infotainment_alert(values: &mut Values<EsInfotainmentSignal>, visual_alert: VisualAlert) {
    use EsInfotainmentSignal::LkasStateInfotainment;

    match visual_alert {
        VisualAlert::SteerRequired => {
            values.set(LkasStateInfotainment, INFOTAINMENT_KEEP_HANDS_ON_WHEEL)
        }
        VisualAlert::Fcw => values.set(LkasStateInfotainment, INFOTAINMENT_OBSTACLE_DETECTED),
        _ => {}
    }
}
