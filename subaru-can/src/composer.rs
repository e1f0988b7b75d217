//! Frame value composer
//!
//! Restricts an optional stock snapshot to the keys a builder passes
//! through. Overrides are layered on top of the result afterwards, so they
//! always win over stock values.

use crate::messages::{SignalSet, Values};
use crate::types::{Result, SynthError};

/// Restrict `snapshot` to `keys`.
///
/// An absent snapshot yields an empty map. A key missing from a present
/// snapshot is a schema-drift defect and fails with `MissingStockSignal`.
pub fn compose<S: SignalSet>(snapshot: Option<&Values<S>>, keys: &[S]) -> Result<Values<S>> {
    let Some(snapshot) = snapshot else {
        return Ok(Values::new());
    };

    keys.iter()
        .map(|&key| {
            snapshot
                .get(key)
                .map(|value| (key, value))
                .ok_or(SynthError::MissingStockSignal {
                    message: S::MESSAGE,
                    signal: key.name(),
                })
        })
        .collect()
}

/// Compose with the message's own pass-through list
pub fn passthrough<S: SignalSet>(snapshot: Option<&Values<S>>) -> Result<Values<S>> {
    compose(snapshot, S::PASSTHROUGH)
}
