//! Integration tests: frames → GaugeService → dashboard state and events.

use gaugelink::app::events::GaugeEvent;
use gaugelink::app::router::Router;
use gaugelink::app::service::GaugeService;
use gaugelink::config::GaugeConfig;
use gaugelink::error::{ConfigError, Error, MalformedMessage};
use gaugelink::gauge::{Metric, Severity};
use gaugelink::link::codec::encode;
use gaugelink::link::inbox::FrameInbox;
use gaugelink::link::message::{
    Button, ButtonPress, Channel, Message, PressType, SourceTag, Telemetry,
};

use super::mock_sink::RecordingSink;

fn service() -> GaugeService {
    GaugeService::new(&GaugeConfig::default()).unwrap()
}

fn button(button: Button, press: PressType) -> Vec<u8> {
    encode(&Message::Buttons(Some(ButtonPress { button, press }))).to_vec()
}

#[test]
fn start_reports_configured_metrics() {
    let mut svc = service();
    let mut sink = RecordingSink::new();
    svc.start(&mut sink);
    assert_eq!(
        sink.events,
        vec![GaugeEvent::Started {
            configured: Metric::COUNT
        }]
    );
}

#[test]
fn invalid_config_is_fatal() {
    let mut config = GaugeConfig::default();
    config.thresholds[7].alert = Some(250.0); // fuel level range is 0-100
    match GaugeService::new(&config) {
        Err(Error::Config(ConfigError::AlertOutOfRange(Metric::FuelLevel))) => {}
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("invalid config accepted"),
    }
}

#[test]
fn malformed_frames_are_isolated() {
    let mut svc = service();
    let mut sink = RecordingSink::new();

    svc.ingest(&[], &mut sink);
    svc.ingest(&[0x42, 1, 2, 3], &mut sink);
    svc.ingest(&[6, 7, 0, 0], &mut sink); // fuel frame, too short
    svc.ingest(
        &encode(&Message::Fuel(Telemetry::new(Metric::FuelLevel, 12.0))),
        &mut sink,
    );

    assert_eq!(svc.stats().malformed, 3);
    assert_eq!(svc.current_value(Metric::FuelLevel), Some((12.0, Severity::Warning)));
    assert!(sink.events.contains(&GaugeEvent::FrameDropped(Error::Malformed(
        MalformedMessage::BadLength {
            tag: SourceTag::Fuel,
            expected: 6,
            actual: 4,
        }
    ))));
}

#[test]
fn unregistered_tags_are_dropped() {
    let mut router = Router::with_all_routes();
    router.unregister(SourceTag::Buttons);
    let mut svc = GaugeService::with_router(&GaugeConfig::default(), router).unwrap();
    let mut sink = RecordingSink::new();

    svc.ingest(&button(Button::BrightnessDown, PressType::Click), &mut sink);

    assert_eq!(svc.dashboard().dimmer(), 0);
    assert_eq!(svc.stats().unregistered, 1);
    assert_eq!(
        sink.events,
        vec![GaugeEvent::FrameDropped(Error::UnknownTag(SourceTag::Buttons))]
    );
}

#[test]
fn routed_nan_sample_keeps_last_value() {
    let mut svc = service();
    let mut sink = RecordingSink::new();

    svc.route(&Message::Fuel(Telemetry::new(Metric::FuelLevel, 60.0)), &mut sink);
    svc.route(&Message::Fuel(Telemetry::new(Metric::FuelLevel, f32::NAN)), &mut sink);
    svc.route(
        &Message::Fuel(Telemetry {
            metric: Metric::FuelLevel,
            value: Some(f32::NAN),
        }),
        &mut sink,
    );

    assert_eq!(svc.current_value(Metric::FuelLevel), Some((60.0, Severity::Normal)));
    assert_eq!(svc.stats().routed, 3);
}

#[test]
fn console_buttons_drive_display_state() {
    let mut svc = service();
    let mut sink = RecordingSink::new();

    svc.ingest(&button(Button::BrightnessDown, PressType::Click), &mut sink);
    svc.ingest(&button(Button::BrightnessDown, PressType::Click), &mut sink);
    svc.ingest(&button(Button::Mode, PressType::Click), &mut sink);
    svc.ingest(&button(Button::Setting, PressType::Click), &mut sink);
    // cleared flag: nothing happens
    svc.ingest(&[2, 0, 1, 0], &mut sink);

    let dash = svc.dashboard();
    assert_eq!(dash.dimmer(), 2);
    assert_eq!(dash.brightness(), 205);
    assert_eq!(dash.channel(), Channel::Levels);
    assert!(dash.show_numbers());
    assert_eq!(
        sink.events,
        vec![
            GaugeEvent::BrightnessChanged {
                dimmer: 1,
                brightness: 230
            },
            GaugeEvent::BrightnessChanged {
                dimmer: 2,
                brightness: 205
            },
            GaugeEvent::ChannelChanged {
                from: Channel::Speedo,
                to: Channel::Levels
            },
            GaugeEvent::OverlayToggled(true),
        ]
    );
}

#[test]
fn link_heartbeat_and_watchdog() {
    let mut svc = service();
    let mut sink = RecordingSink::new();

    svc.ingest(&encode(&Message::Online(false)), &mut sink);
    assert!(!svc.dashboard().link_online());

    svc.ingest(&encode(&Message::Startup(true)), &mut sink);
    svc.ingest(&encode(&Message::Online(true)), &mut sink);
    assert!(svc.dashboard().link_online());
    assert_eq!(svc.dashboard().remote_boots(), 1);

    svc.dashboard_mut().mark_link_lost(&mut sink);
    assert!(!svc.dashboard().link_online());

    assert_eq!(
        sink.events,
        vec![
            GaugeEvent::RemoteStartup,
            GaugeEvent::LinkChanged { online: true },
            GaugeEvent::LinkChanged { online: false },
        ]
    );
}

#[test]
fn inbox_preserves_order_across_poll() {
    let mut svc = service();
    let mut sink = RecordingSink::new();
    let mut inbox = FrameInbox::new();

    for value in [30.0, 8.0, 55.0] {
        inbox.push(&encode(&Message::OilPressure(Telemetry::new(
            Metric::OilPressure,
            value,
        ))));
    }
    assert_eq!(svc.poll(&mut inbox, &mut sink), 3);

    assert_eq!(svc.current_value(Metric::OilPressure), Some((55.0, Severity::Normal)));
    assert_eq!(
        sink.count(|e| matches!(e, GaugeEvent::SeverityChanged { .. })),
        3
    );
}

#[test]
fn reset_clears_readings() {
    let mut svc = service();
    let mut sink = RecordingSink::new();
    svc.ingest(
        &encode(&Message::Canbus(Telemetry::new(Metric::Rpm, 7000.0))),
        &mut sink,
    );
    assert_eq!(svc.current_value(Metric::Rpm), Some((7000.0, Severity::Alert)));

    sink.clear();
    svc.reset(&mut sink);

    assert_eq!(svc.current_value(Metric::Rpm), None);
    assert_eq!(sink.events, vec![GaugeEvent::Reset]);
}
