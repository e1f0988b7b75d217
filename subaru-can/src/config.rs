//! Synthesis configuration types
//!
//! Bus routing for the messages whose destination depends on how the
//! harness is wired.

use serde::{Deserialize, Serialize};

/// Well-known bus numbers on the driver-assistance harness
pub struct CanBus;

impl CanBus {
    pub const MAIN: u8 = 0;
    pub const ALT: u8 = 1;
    pub const CAMERA: u8 = 2;
}

/// Bus routing shared by the builders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Bus for ES_Distance (main, or the alternate bus on gen2 longitudinal)
    #[serde(default = "default_bus")]
    pub distance_bus: u8,

    /// Bus for ES_Brake
    #[serde(default = "default_bus")]
    pub brake_bus: u8,

    /// Bus for ES_Status
    #[serde(default = "default_bus")]
    pub status_bus: u8,
}

fn default_bus() -> u8 {
    CanBus::MAIN
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            distance_bus: default_bus(),
            brake_bus: default_bus(),
            status_bus: default_bus(),
        }
    }
}

impl SynthConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: route ES_Distance to a bus
    pub fn with_distance_bus(mut self, bus: u8) -> Self {
        self.distance_bus = bus;
        self
    }

    /// Builder method: route ES_Brake to a bus
    pub fn with_brake_bus(mut self, bus: u8) -> Self {
        self.brake_bus = bus;
        self
    }

    /// Builder method: route ES_Status to a bus
    pub fn with_status_bus(mut self, bus: u8) -> Self {
        self.status_bus = bus;
        self
    }
}
