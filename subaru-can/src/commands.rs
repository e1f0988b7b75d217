//! Commands supplied by the driving-control layer
//!
//! Plain values computed elsewhere; the builders trust them as given and
//! perform no range checks.

use serde::{Deserialize, Serialize};

/// HUD alert requested by the controlling system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisualAlert {
    #[default]
    None,
    Fcw,
    SteerRequired,
    BrakePressed,
    WrongGear,
    SeatbeltUnbuckled,
    SpeedTooHigh,
    Ldw,
}

/// Steering command for ES_LKAS (both protocol generations)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringCommand {
    /// Signed steering torque command
    pub apply_steer: i64,
    pub steer_req: bool,
}

/// Inputs for ES_Distance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceCommand {
    pub long_enabled: bool,
    pub brake_cmd: bool,
    pub cruise_throttle: i64,
    pub low_speed: bool,
    pub pcm_cancel_cmd: bool,
    pub pcm_resume_cmd: bool,
    pub pcm_set_cmd: bool,
}

/// Inputs for ES_LKAS_State
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LkasStateCommand {
    pub enabled: bool,
    pub visual_alert: VisualAlert,
    pub left_line: bool,
    pub right_line: bool,
    pub left_lane_depart: bool,
    pub right_lane_depart: bool,
}

/// Inputs for ES_DashStatus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashStatusCommand {
    pub cruise_on: bool,
    pub enabled: bool,
    pub long_enabled: bool,
    pub lead_visible: bool,
    pub cruise_set_speed: i64,
}

/// Inputs for ES_Brake
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrakeCommand {
    pub long_enabled: bool,
    pub long_active: bool,
    pub brake_value: i64,
}

/// Inputs for ES_Status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusCommand {
    pub long_enabled: bool,
    pub long_active: bool,
    pub cruise_rpm: i64,
}
