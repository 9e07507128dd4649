//! Recording event sink shared by the integration tests.

use gaugelink::app::events::GaugeEvent;
use gaugelink::app::ports::EventSink;

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<GaugeEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&GaugeEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &GaugeEvent) {
        self.events.push(*event);
    }
}
