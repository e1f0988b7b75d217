//! Pre-global message signal sets
//!
//! These layouts carry a `Checksum` signal that this crate computes itself
//! (see [`crate::checksum`]); the counter of ES_Distance is passed through.

use crate::checksum::PreglobalChecksum;

signal_set! {
    /// Pre-global ES_LKAS: steering command
    pub enum PreglobalEsLkasSignal for "ES_LKAS" {
        Counter => "COUNTER",
        LkasCommand => "LKAS_Command",
        LkasActive => "LKAS_Active",
        Checksum => "Checksum",
    }
    passthrough []
}

signal_set! {
    /// Pre-global ES_Distance: stock frame with an injected cruise button
    pub enum PreglobalEsDistanceSignal for "ES_Distance" {
        CruiseThrottle => "Cruise_Throttle",
        Signal1 => "Signal1",
        CarFollow => "Car_Follow",
        Signal2 => "Signal2",
        CruiseBrakeActive => "Cruise_Brake_Active",
        DistanceSwap => "Distance_Swap",
        Standstill => "Standstill",
        Signal3 => "Signal3",
        CloseDistance => "Close_Distance",
        Signal4 => "Signal4",
        Standstill2 => "Standstill_2",
        CruiseFault => "Cruise_Fault",
        Signal5 => "Signal5",
        Counter => "COUNTER",
        Signal6 => "Signal6",
        CruiseButton => "Cruise_Button",
        Signal7 => "Signal7",
        Checksum => "Checksum",
    }
    passthrough [
        CruiseThrottle, Signal1, CarFollow, Signal2, CruiseBrakeActive, DistanceSwap,
        Standstill, Signal3, CloseDistance, Signal4, Standstill2, CruiseFault, Signal5,
        Counter, Signal6, CruiseButton, Signal7,
    ]
}

impl PreglobalChecksum for PreglobalEsLkasSignal {
    const CHECKSUM: Self = PreglobalEsLkasSignal::Checksum;
}

impl PreglobalChecksum for PreglobalEsDistanceSignal {
    const CHECKSUM: Self = PreglobalEsDistanceSignal::Checksum;
}
