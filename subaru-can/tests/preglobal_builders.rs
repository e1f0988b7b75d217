//! Pre-global builders and the two-pass checksum

mod common;

use common::*;
use subaru_can::messages::SignalSet;
use subaru_can::builders::{create_preglobal_es_distance, create_preglobal_steering_control};
use subaru_can::checksum::preglobal_checksum;
use subaru_can::messages::{PreglobalEsDistanceSignal, Values};
use subaru_can::{CanBus, SignalValue, SteeringCommand};

fn sum_without_last(data: &[u8]) -> u8 {
    (data[..7].iter().map(|&b| u32::from(b)).sum::<u32>() % 256) as u8
}

#[test]
fn test_steering_counter_wraps_every_8_ticks() {
    let packer = preglobal_packer();
    let cmd = SteeringCommand {
        apply_steer: 100,
        steer_req: true,
    };

    for tick in 0..80u64 {
        let frame = create_preglobal_steering_control(&packer, tick, &cmd).unwrap();
        let decoded = decode(&packer, &frame);
        assert_eq!(int(&decoded, "COUNTER"), (tick % 8) as i64, "tick {tick}");
    }
}

#[test]
fn test_steering_checksum_round_trip() {
    let packer = preglobal_packer();

    for (apply_steer, steer_req) in [(0, false), (1, true), (-1, true), (2047, true), (-2047, false)] {
        let cmd = SteeringCommand {
            apply_steer,
            steer_req,
        };
        for tick in 0..8u64 {
            let frame = create_preglobal_steering_control(&packer, tick, &cmd).unwrap();
            assert_eq!(frame.address, 0x164);
            assert_eq!(frame.bus, CanBus::MAIN);
            assert_eq!(frame.data[7], sum_without_last(&frame.data), "{frame}");
            assert_eq!(frame.data[7], preglobal_checksum(&frame.data, 7));

            let decoded = decode(&packer, &frame);
            assert_eq!(int(&decoded, "LKAS_Command"), apply_steer);
            assert_eq!(decoded["LKAS_Active"], SignalValue::Boolean(steer_req));
        }
    }
}

#[test]
fn test_distance_passes_stock_counter_through() {
    let packer = preglobal_packer();
    let stock: Values<PreglobalEsDistanceSignal> = stock_snapshot(
        &packer,
        &[
            ("Cruise_Throttle", 1818),
            ("Close_Distance", 30),
            ("Signal4", 300),
            ("COUNTER", 5),
            ("Cruise_Button", 0),
            ("Checksum", 0xAB),
        ],
    );

    let frame = create_preglobal_es_distance(&packer, 2, Some(&stock)).unwrap();
    let decoded = decode(&packer, &frame);

    assert_eq!(frame.address, 0x221);
    assert_eq!(int(&decoded, "COUNTER"), 5);
    assert_eq!(int(&decoded, "Cruise_Button"), 2);
    assert_eq!(int(&decoded, "Cruise_Throttle"), 1818);
    assert_eq!(int(&decoded, "Close_Distance"), 30);
    assert_eq!(int(&decoded, "Signal4"), 300);
    // Stock checksum is discarded and recomputed
    assert_eq!(frame.data[7], sum_without_last(&frame.data));
}

#[test]
fn test_distance_without_snapshot() {
    let packer = preglobal_packer();
    let frame = create_preglobal_es_distance(&packer, 1, None).unwrap();
    let decoded = decode(&packer, &frame);

    assert_eq!(int(&decoded, "COUNTER"), 0);
    assert_eq!(int(&decoded, "Cruise_Button"), 1);
    assert_eq!(int(&decoded, "Cruise_Throttle"), 0);
    assert_eq!(frame.data[7], sum_without_last(&frame.data));
}

#[test]
fn test_draft_omits_checksum() {
    let packer = RecordingPacker::default();
    create_preglobal_steering_control(&packer, 3, &SteeringCommand::default()).unwrap();

    let calls = packer.calls.borrow();
    assert_eq!(calls.len(), 2);
    assert!(!calls[0].2.contains_key("Checksum"));
    // The recording packer drafts an all-zero payload
    assert_eq!(calls[1].2["Checksum"].as_i64(), 0);
    assert_eq!(calls[1].2["COUNTER"].as_i64(), 3);
}

#[test]
fn test_distance_absent_snapshot_keys() {
    let packer = RecordingPacker::default();
    create_preglobal_es_distance(&packer, 3, None).unwrap();

    let (message, _, values) = packer.last();
    assert_eq!(message, "ES_Distance");
    assert_eq!(values.keys().collect::<Vec<_>>(), vec!["Checksum", "Cruise_Button"]);
}

#[test]
fn test_distance_button_wins_over_stock() {
    let packer = RecordingPacker::default();

    for stock_value in [0, 1, 5, 7] {
        let stock = uniform_snapshot::<PreglobalEsDistanceSignal>(stock_value);
        create_preglobal_es_distance(&packer, 2, Some(&stock)).unwrap();

        let values = packer.last().2;
        assert_eq!(values["Cruise_Button"].as_i64(), 2);
        assert_eq!(values["COUNTER"].as_i64(), stock_value);
        assert_eq!(values.len(), PreglobalEsDistanceSignal::PASSTHROUGH.len() + 1);
    }
}
