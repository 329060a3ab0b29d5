//! Narrative sink that feeds both the match history and the event bus.

use arena_core::{EventLog, EventSink};

use super::{Event, EventBus, NarrativeEvent};

/// Records each narrative line in the shared history and publishes it on
/// [`Topic::Narrative`](super::Topic::Narrative), preserving emission order.
pub struct BusSink<'a> {
    bus: &'a EventBus,
    history: &'a mut EventLog,
    frame: u64,
    round: u32,
}

impl<'a> BusSink<'a> {
    pub fn new(bus: &'a EventBus, history: &'a mut EventLog, frame: u64, round: u32) -> Self {
        Self {
            bus,
            history,
            frame,
            round,
        }
    }
}

impl EventSink for BusSink<'_> {
    fn write(&mut self, text: String) {
        self.history.write(text.clone());
        self.bus.publish(Event::Narrative(NarrativeEvent {
            frame: self.frame,
            round: self.round,
            text,
        }));
    }
}
