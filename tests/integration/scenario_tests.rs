//! Dashboard scenarios driven from encoded link frames.

use gaugelink::app::events::GaugeEvent;
use gaugelink::app::service::GaugeService;
use gaugelink::config::{GaugeConfig, ThresholdConfig};
use gaugelink::gauge::{Direction, Metric, Severity};
use gaugelink::link::codec::encode;
use gaugelink::link::message::{Channel, Message, Telemetry};

use super::mock_sink::RecordingSink;

fn single(entry: ThresholdConfig) -> GaugeConfig {
    GaugeConfig {
        thresholds: vec![entry],
        ..GaugeConfig::default()
    }
}

fn coolant_service() -> GaugeService {
    GaugeService::new(&single(ThresholdConfig {
        metric: Metric::CoolantTemp,
        min: 0.0,
        max: 100.0,
        alert: Some(95.0),
        warning: Some(80.0),
        direction: Direction::Above,
        unit: "C".into(),
    }))
    .unwrap()
}

fn coolant(value: Option<f32>) -> Vec<u8> {
    encode(&Message::Canbus(Telemetry {
        metric: Metric::CoolantTemp,
        value,
    }))
    .to_vec()
}

#[test]
fn coolant_verdicts_follow_cutoffs() {
    let mut svc = coolant_service();
    let mut sink = RecordingSink::new();

    svc.ingest(&coolant(None), &mut sink);
    assert_eq!(svc.current_value(Metric::CoolantTemp), None);
    assert_eq!(svc.dashboard().severity(Metric::CoolantTemp), Severity::Unknown);

    svc.ingest(&coolant(Some(90.0)), &mut sink);
    assert_eq!(svc.current_value(Metric::CoolantTemp), Some((90.0, Severity::Warning)));

    svc.ingest(&coolant(Some(97.0)), &mut sink);
    assert_eq!(svc.current_value(Metric::CoolantTemp), Some((97.0, Severity::Alert)));

    svc.ingest(&coolant(Some(50.0)), &mut sink);
    assert_eq!(svc.current_value(Metric::CoolantTemp), Some((50.0, Severity::Normal)));

    let changes: Vec<_> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            GaugeEvent::SeverityChanged { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert_eq!(
        changes,
        vec![
            (Severity::Unknown, Severity::Warning),
            (Severity::Warning, Severity::Alert),
            (Severity::Alert, Severity::Normal),
        ]
    );
}

#[test]
fn oil_pressure_last_write_wins() {
    let mut svc = GaugeService::new(&single(ThresholdConfig {
        metric: Metric::OilPressure,
        min: 0.0,
        max: 100.0,
        alert: None,
        warning: Some(20.0),
        direction: Direction::Below,
        unit: "psi".into(),
    }))
    .unwrap();
    let mut sink = RecordingSink::new();

    for value in [40.0, 10.0] {
        let frame = encode(&Message::OilPressure(Telemetry::new(Metric::OilPressure, value)));
        svc.ingest(&frame, &mut sink);
    }

    assert_eq!(svc.current_value(Metric::OilPressure), Some((10.0, Severity::Warning)));
}

#[test]
fn cleared_channel_flag_keeps_selection() {
    let mut svc = GaugeService::new(&GaugeConfig::default()).unwrap();
    let mut sink = RecordingSink::new();

    svc.ingest(&encode(&Message::SetChannel(Some(Channel::Location))), &mut sink);
    assert_eq!(svc.dashboard().channel(), Channel::Location);

    // flag = 0, channel byte would point at Levels
    svc.ingest(&[5, 0, 1], &mut sink);
    assert_eq!(svc.dashboard().channel(), Channel::Location);
    assert_eq!(
        sink.count(|e| matches!(e, GaugeEvent::ChannelChanged { .. })),
        1
    );
}

#[test]
fn sub_zero_reading_is_a_real_value() {
    let mut svc = GaugeService::new(&GaugeConfig::default()).unwrap();
    let frame = encode(&Message::Canbus(Telemetry::new(Metric::IntakeTemp, -1.0)));
    svc.ingest(&frame, &mut ());
    assert_eq!(svc.current_value(Metric::IntakeTemp), Some((-1.0, Severity::Normal)));
}
