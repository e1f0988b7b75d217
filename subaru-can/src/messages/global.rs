//! Global-protocol message signal sets
//!
//! `CHECKSUM` has no variant here: the packer computes it.

signal_set! {
    /// ES_LKAS: steering command
    pub enum EsLkasSignal for "ES_LKAS" {
        Counter => "COUNTER",
        Set1 => "SET_1",
        LkasOutput => "LKAS_Output",
        LkasRequest => "LKAS_Request",
    }
    passthrough []
}

signal_set! {
    /// ES_Distance: cruise throttle, follow state and cruise buttons
    pub enum EsDistanceSignal for "ES_Distance" {
        Counter => "COUNTER",
        Signal1 => "Signal1",
        CruiseFault => "Cruise_Fault",
        CruiseThrottle => "Cruise_Throttle",
        Signal2 => "Signal2",
        CarFollow => "Car_Follow",
        LowSpeedFollow => "Low_Speed_Follow",
        CruiseSoftDisable => "Cruise_Soft_Disable",
        Signal7 => "Signal7",
        CruiseBrakeActive => "Cruise_Brake_Active",
        DistanceSwap => "Distance_Swap",
        CruiseEpb => "Cruise_EPB",
        Signal4 => "Signal4",
        CloseDistance => "Close_Distance",
        Signal5 => "Signal5",
        CruiseCancel => "Cruise_Cancel",
        CruiseSet => "Cruise_Set",
        CruiseResume => "Cruise_Resume",
        Signal6 => "Signal6",
    }
    passthrough [
        Signal1, CruiseFault, CruiseThrottle, Signal2, CarFollow, LowSpeedFollow,
        CruiseSoftDisable, Signal7, CruiseBrakeActive, DistanceSwap, CruiseEpb, Signal4,
        CloseDistance, Signal5, CruiseCancel, CruiseSet, CruiseResume, Signal6,
    ]
}

signal_set! {
    /// ES_LKAS_State: LKAS HUD alerts and lane-line display
    pub enum EsLkasStateSignal for "ES_LKAS_State" {
        Counter => "COUNTER",
        LkasAlertMsg => "LKAS_Alert_Msg",
        Signal1 => "Signal1",
        LkasActive => "LKAS_ACTIVE",
        LkasDashState => "LKAS_Dash_State",
        Signal2 => "Signal2",
        BackwardSpeedLimitMenu => "Backward_Speed_Limit_Menu",
        LkasLeftLineEnable => "LKAS_Left_Line_Enable",
        LkasLeftLineLightBlink => "LKAS_Left_Line_Light_Blink",
        LkasRightLineEnable => "LKAS_Right_Line_Enable",
        LkasRightLineLightBlink => "LKAS_Right_Line_Light_Blink",
        LkasLeftLineVisible => "LKAS_Left_Line_Visible",
        LkasRightLineVisible => "LKAS_Right_Line_Visible",
        LkasAlert => "LKAS_Alert",
        Signal3 => "Signal3",
    }
    passthrough [
        LkasAlertMsg, Signal1, LkasActive, LkasDashState, Signal2, BackwardSpeedLimitMenu,
        LkasLeftLineEnable, LkasLeftLineLightBlink, LkasRightLineEnable,
        LkasRightLineLightBlink, LkasLeftLineVisible, LkasRightLineVisible, LkasAlert, Signal3,
    ]
}

signal_set! {
    /// ES_DashStatus: cruise state shown on the instrument cluster
    pub enum EsDashStatusSignal for "ES_DashStatus" {
        Counter => "COUNTER",
        PcbOff => "PCB_Off",
        LdwOff => "LDW_Off",
        Signal1 => "Signal1",
        CruiseStateMsg => "Cruise_State_Msg",
        LkasStateMsg => "LKAS_State_Msg",
        Signal2 => "Signal2",
        CruiseSoftDisable => "Cruise_Soft_Disable",
        CruiseStatusMsg => "Cruise_Status_Msg",
        Signal3 => "Signal3",
        CruiseDistance => "Cruise_Distance",
        Signal4 => "Signal4",
        ConventionalCruise => "Conventional_Cruise",
        Signal5 => "Signal5",
        CruiseDisengaged => "Cruise_Disengaged",
        CruiseActivated => "Cruise_Activated",
        Signal6 => "Signal6",
        CruiseSetSpeed => "Cruise_Set_Speed",
        CruiseFault => "Cruise_Fault",
        CruiseOn => "Cruise_On",
        DisplayOwnCar => "Display_Own_Car",
        BrakeLights => "Brake_Lights",
        CarFollow => "Car_Follow",
        Signal7 => "Signal7",
        FarDistance => "Far_Distance",
        CruiseState => "Cruise_State",
    }
    passthrough [
        PcbOff, LdwOff, Signal1, CruiseStateMsg, LkasStateMsg, Signal2, CruiseSoftDisable,
        CruiseStatusMsg, Signal3, CruiseDistance, Signal4, ConventionalCruise, Signal5,
        CruiseDisengaged, CruiseActivated, Signal6, CruiseSetSpeed, CruiseFault, BrakeLights,
        CarFollow, Signal7, FarDistance, CruiseState,
    ]
}

signal_set! {
    /// ES_Brake: requested brake pressure
    pub enum EsBrakeSignal for "ES_Brake" {
        Counter => "COUNTER",
        Signal1 => "Signal1",
        BrakePressure => "Brake_Pressure",
        AebStatus => "AEB_Status",
        CruiseBrakeLights => "Cruise_Brake_Lights",
        CruiseBrakeFault => "Cruise_Brake_Fault",
        CruiseBrakeActive => "Cruise_Brake_Active",
        CruiseActivated => "Cruise_Activated",
        Signal3 => "Signal3",
    }
    passthrough [
        Signal1, BrakePressure, AebStatus, CruiseBrakeLights, CruiseBrakeFault,
        CruiseBrakeActive, CruiseActivated, Signal3,
    ]
}

signal_set! {
    /// ES_Status: engine RPM request
    pub enum EsStatusSignal for "ES_Status" {
        Counter => "COUNTER",
        Signal1 => "Signal1",
        CruiseFault => "Cruise_Fault",
        CruiseRpm => "Cruise_RPM",
        CruiseActivated => "Cruise_Activated",
        BrakeLights => "Brake_Lights",
        CruiseHold => "Cruise_Hold",
        Signal3 => "Signal3",
    }
    passthrough [
        Signal1, CruiseFault, CruiseRpm, CruiseActivated, BrakeLights, CruiseHold, Signal3,
    ]
}

signal_set! {
    /// ES_Infotainment: LKAS state on the head unit
    pub enum EsInfotainmentSignal for "ES_Infotainment" {
        Counter => "COUNTER",
        LkasStateInfotainment => "LKAS_State_Infotainment",
        LkasBlueLines => "LKAS_Blue_Lines",
        Signal1 => "Signal1",
        Signal2 => "Signal2",
    }
    passthrough [LkasStateInfotainment, LkasBlueLines, Signal1, Signal2]
}

signal_set! {
    /// ES_HighBeamAssist
    pub enum EsHighBeamAssistSignal for "ES_HighBeamAssist" {
        Counter => "COUNTER",
        HbaAvailable => "HBA_Available",
    }
    passthrough []
}

signal_set! {
    pub enum EsStatic1Signal for "ES_STATIC_1" {
        Counter => "COUNTER",
        Set3 => "SET_3",
    }
    passthrough []
}

signal_set! {
    pub enum EsStatic2Signal for "ES_STATIC_2" {
        Counter => "COUNTER",
        Set3 => "SET_3",
    }
    passthrough []
}
