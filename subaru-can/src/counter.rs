//! Rolling counter assignment
//!
//! The counter is derived from the caller's tick index on every call; this
//! crate never stores a tick of its own.

use crate::messages::{SignalSet, Values};
use std::num::NonZeroU64;

const fn modulus(value: u64) -> NonZeroU64 {
    match NonZeroU64::new(value) {
        Some(modulus) => modulus,
        None => panic!("counter modulus must be non-zero"),
    }
}

/// Counter modulus of every global-protocol message
pub const GLOBAL_COUNTER_MODULUS: NonZeroU64 = modulus(0x10);

/// Counter modulus of the pre-global steering message
pub const PREGLOBAL_LKAS_COUNTER_MODULUS: NonZeroU64 = modulus(0x08);

/// `tick mod modulus`
pub fn rolling_counter(tick: u64, modulus: NonZeroU64) -> i64 {
    (tick % modulus.get()) as i64
}

/// Stamp the counter signal, replacing any passed-through value
pub fn stamp<S: SignalSet>(values: &mut Values<S>, counter: S, tick: u64, modulus: NonZeroU64) {
    values.set(counter, rolling_counter(tick, modulus));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::EsDistanceSignal;

    #[test]
    fn test_rolling_counter_wraps() {
        assert_eq!(rolling_counter(0, GLOBAL_COUNTER_MODULUS), 0);
        assert_eq!(rolling_counter(15, GLOBAL_COUNTER_MODULUS), 15);
        assert_eq!(rolling_counter(16, GLOBAL_COUNTER_MODULUS), 0);
        assert_eq!(rolling_counter(13, PREGLOBAL_LKAS_COUNTER_MODULUS), 5);
        assert_eq!(rolling_counter(u64::MAX, GLOBAL_COUNTER_MODULUS), 15);
    }

    #[test]
    fn test_modulus_is_never_zero() {
        assert_eq!(GLOBAL_COUNTER_MODULUS.get(), 16);
        assert_eq!(PREGLOBAL_LKAS_COUNTER_MODULUS.get(), 8);
        assert!(NonZeroU64::new(0).is_none());

        let three = NonZeroU64::new(3).unwrap();
        let counters: Vec<i64> = (0..7).map(|tick| rolling_counter(tick, three)).collect();
        assert_eq!(counters, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_stamp_replaces_stock_counter() {
        let mut values = Values::new().with(EsDistanceSignal::Counter, 9);
        stamp(&mut values, EsDistanceSignal::Counter, 33, GLOBAL_COUNTER_MODULUS);
        assert_eq!(values.get_i64(EsDistanceSignal::Counter), Some(1));
    }
}
