//! Fuzz target: `link::codec::decode` and `Router::route_frame`
//!
//! Drives arbitrary byte sequences into the frame decoder and asserts that
//! it never panics, that every successful decode re-encodes to a frame that
//! decodes to the same message, and that the router absorbs the frame.
//!
//! cargo fuzz run fuzz_message_decode

#![no_main]

use gaugelink::app::router::Router;
use gaugelink::app::state::Dashboard;
use gaugelink::config::GaugeConfig;
use gaugelink::link::codec::{decode, encode, MAX_FRAME_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(msg) = decode(data) {
        let frame = encode(&msg);
        assert!(frame.len() <= MAX_FRAME_LEN);
        assert_eq!(frame.len(), data.len(), "decoded frames have their tag's length");
        assert_eq!(decode(&frame), Ok(msg));
    }

    let mut router = Router::default();
    if let Ok(mut dash) = Dashboard::new(&GaugeConfig::default()) {
        router.route_frame(data, &mut dash, &mut ());
        let stats = router.stats();
        assert_eq!(stats.routed + stats.malformed + stats.unregistered, 1);
    }
});
