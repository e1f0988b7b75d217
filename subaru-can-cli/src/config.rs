//! Scenario loading and parsing

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use subaru_can::{
    BrakeCommand, DashStatusCommand, DistanceCommand, LkasStateCommand, StatusCommand,
    SteeringCommand, SynthConfig, VisualAlert,
};

/// A synthesis scenario (loaded from scenario.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Scenario {
    #[serde(default)]
    pub generation: Generation,
    #[serde(default)]
    pub buses: SynthConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
    /// Last observed stock payloads, hex encoded, keyed by message name
    #[serde(default)]
    pub stock: BTreeMap<String, String>,
}

/// Protocol generation of the target vehicle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    #[default]
    Global,
    Preglobal,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CommandsConfig {
    pub steering: SteeringCommand,
    pub distance: DistanceCommand,
    pub lkas_state: LkasStateCommand,
    pub dash_status: DashStatusCommand,
    pub brake: BrakeCommand,
    pub status: StatusCommand,
    /// Alert shown on the infotainment screen
    pub visual_alert: VisualAlert,
    /// Pre-global only
    pub cruise_button: i64,
}

/// Decode a payload written as hex, ignoring spaces
pub fn parse_hex(text: &str) -> std::result::Result<Vec<u8>, hex::FromHexError> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(digits)
}

/// Load a scenario from a TOML file
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file: {:?}", path))?;

    let scenario: Scenario = toml::from_str(&content)
        .with_context(|| format!("Failed to parse scenario file: {:?}", path))?;

    for (message, payload) in &scenario.stock {
        parse_hex(payload)
            .with_context(|| format!("Invalid stock payload for {}", message))?;
    }

    Ok(scenario)
}
