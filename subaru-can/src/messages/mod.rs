//! Typed signal sets for every synthesized message
//!
//! Each message kind gets its own signal enum, so pass-through lists,
//! override tables and the wire names handed to the packer all refer to the
//! same variants. A misspelled key is a compile error rather than a lookup
//! failure at runtime.

use crate::types::{Result, SignalMap, SignalValue, SynthError};
use std::collections::BTreeMap;
use std::fmt;

/// The signals of one message kind
pub trait SignalSet: Copy + Ord + fmt::Debug + 'static {
    /// Message name in the packer's layout table
    const MESSAGE: &'static str;

    /// Signals copied from the stock frame, in layout order
    const PASSTHROUGH: &'static [Self];

    /// Wire name of the signal
    fn name(self) -> &'static str;
}

/// Declares a signal enum and its [`SignalSet`] implementation.
macro_rules! signal_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $message:literal {
            $( $variant:ident => $wire:literal ),+ $(,)?
        }
        passthrough [ $( $pass:ident ),* $(,)? ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $( $variant, )+
        }

        impl $crate::messages::SignalSet for $name {
            const MESSAGE: &'static str = $message;
            const PASSTHROUGH: &'static [Self] = &[ $( $name::$pass, )* ];

            fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }
    };
}

pub mod global;
pub mod preglobal;

pub use global::{
    EsBrakeSignal, EsDashStatusSignal, EsDistanceSignal, EsHighBeamAssistSignal,
    EsInfotainmentSignal, EsLkasSignal, EsLkasStateSignal, EsStatic1Signal, EsStatic2Signal,
    EsStatusSignal,
};
pub use preglobal::{PreglobalEsDistanceSignal, PreglobalEsLkasSignal};

/// Signal values for one outgoing (or observed) frame, keyed by signal
#[derive(Clone, PartialEq)]
pub struct Values<S: SignalSet> {
    values: BTreeMap<S, SignalValue>,
}

impl<S: SignalSet> Default for Values<S> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<S: SignalSet> fmt::Debug for Values<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.values.iter().map(|(k, v)| (k.name(), v)))
            .finish()
    }
}

impl<S: SignalSet> Values<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stock snapshot from a decoded frame.
    ///
    /// Every pass-through signal must be present; a missing one means the
    /// layout table and this crate's signal list have drifted apart.
    pub fn from_decoded(decoded: &SignalMap) -> Result<Self> {
        let mut values = Self::new();
        for &signal in S::PASSTHROUGH {
            let value = decoded
                .get(signal.name())
                .ok_or(SynthError::MissingStockSignal {
                    message: S::MESSAGE,
                    signal: signal.name(),
                })?;
            values.set(signal, *value);
        }
        Ok(values)
    }

    /// Set a signal, replacing any previous value
    pub fn set(&mut self, signal: S, value: impl Into<SignalValue>) {
        self.values.insert(signal, value.into());
    }

    /// Builder method: set a signal
    pub fn with(mut self, signal: S, value: impl Into<SignalValue>) -> Self {
        self.set(signal, value);
        self
    }

    pub fn get(&self, signal: S) -> Option<SignalValue> {
        self.values.get(&signal).copied()
    }

    /// Integer view of a signal, if present
    pub fn get_i64(&self, signal: S) -> Option<i64> {
        self.get(signal).map(|v| v.as_i64())
    }

    pub fn contains(&self, signal: S) -> bool {
        self.values.contains_key(&signal)
    }

    pub fn remove(&mut self, signal: S) -> Option<SignalValue> {
        self.values.remove(&signal)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, SignalValue)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    /// Name-keyed map for the packer
    pub fn to_signal_map(&self) -> SignalMap {
        self.values
            .iter()
            .map(|(k, v)| (k.name().to_string(), *v))
            .collect()
    }
}

impl<S: SignalSet> FromIterator<(S, SignalValue)> for Values<S> {
    fn from_iter<I: IntoIterator<Item = (S, SignalValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(EsDistanceSignal::MESSAGE, "ES_Distance");
        assert_eq!(EsDistanceSignal::CruiseEpb.name(), "Cruise_EPB");
        assert_eq!(EsLkasStateSignal::LkasActive.name(), "LKAS_ACTIVE");
        assert_eq!(EsInfotainmentSignal::LkasStateInfotainment.name(), "LKAS_State_Infotainment");
        assert_eq!(PreglobalEsDistanceSignal::Standstill2.name(), "Standstill_2");
    }

    #[test]
    fn test_passthrough_excludes_counter_on_global() {
        assert!(!EsDistanceSignal::PASSTHROUGH.contains(&EsDistanceSignal::Counter));
        assert!(!EsStatusSignal::PASSTHROUGH.contains(&EsStatusSignal::Counter));
        assert!(PreglobalEsDistanceSignal::PASSTHROUGH.contains(&PreglobalEsDistanceSignal::Counter));
        assert!(!PreglobalEsDistanceSignal::PASSTHROUGH.contains(&PreglobalEsDistanceSignal::Checksum));
    }

    #[test]
    fn test_from_decoded() {
        let decoded: SignalMap = EsStatusSignal::PASSTHROUGH
            .iter()
            .map(|s| (s.name().to_string(), SignalValue::Integer(1)))
            .chain(std::iter::once(("CHECKSUM".to_string(), SignalValue::Integer(9))))
            .collect();

        let values = Values::<EsStatusSignal>::from_decoded(&decoded).unwrap();
        assert_eq!(values.len(), EsStatusSignal::PASSTHROUGH.len());
        assert_eq!(values.get_i64(EsStatusSignal::CruiseRpm), Some(1));
        assert!(!values.contains(EsStatusSignal::Counter));
    }

    #[test]
    fn test_from_decoded_missing_signal() {
        let mut decoded = SignalMap::new();
        decoded.insert("Cruise_RPM".to_string(), SignalValue::Integer(1500));

        let err = Values::<EsStatusSignal>::from_decoded(&decoded).unwrap_err();
        assert!(matches!(
            err,
            SynthError::MissingStockSignal { message: "ES_Status", signal: "Signal1" }
        ));
    }

    #[test]
    fn test_to_signal_map() {
        let values = Values::new()
            .with(EsBrakeSignal::BrakePressure, 80)
            .with(EsBrakeSignal::CruiseBrakeActive, true);

        let map = values.to_signal_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["Brake_Pressure"], SignalValue::Integer(80));
        assert_eq!(map["Cruise_Brake_Active"], SignalValue::Boolean(true));
    }
}
