//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{CueEvent, NarrativeEvent, RoundEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Narrative lines, one per resolved action
    Narrative,
    /// Presentation cues (attack, crit, dodge, ...)
    Cue,
    /// Round results
    Round,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Narrative, Topic::Cue, Topic::Round];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Narrative(NarrativeEvent),
    Cue(CueEvent),
    Round(Box<RoundEvent>),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Narrative(_) => Topic::Narrative,
            Event::Cue(_) => Topic::Cue,
            Event::Round(_) => Topic::Round,
        }
    }
}

#[derive(Debug)]
struct Channels {
    narrative: broadcast::Sender<Event>,
    cue: broadcast::Sender<Event>,
    round: broadcast::Sender<Event>,
}

impl Channels {
    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Narrative => &self.narrative,
            Topic::Cue => &self.cue,
            Topic::Round => &self.round,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Each topic is a bounded broadcast channel, so a
/// lagging subscriber loses the oldest events rather than stalling the match.
#[derive(Debug, Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                narrative: broadcast::channel(capacity).0,
                cue: broadcast::channel(capacity).0,
                round: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }

    /// Number of live subscribers on a topic.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.channels.sender(topic).receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{Cue, Side};

    fn narrative(text: &str) -> Event {
        Event::Narrative(NarrativeEvent {
            frame: 1,
            round: 1,
            text: text.to_owned(),
        })
    }

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::new();
        let mut narrative_rx = bus.subscribe(Topic::Narrative);
        let mut cue_rx = bus.subscribe(Topic::Cue);

        bus.publish(narrative("A just missed..."));
        bus.publish(Event::Cue(CueEvent {
            frame: 1,
            cue: Cue::Dodge(Side::Right),
        }));

        match narrative_rx.recv().await.unwrap() {
            Event::Narrative(event) => assert_eq!(event.text, "A just missed..."),
            other => panic!("unexpected event {other:?}"),
        }
        match cue_rx.recv().await.unwrap() {
            Event::Cue(event) => assert_eq!(event.cue, Cue::Dodge(Side::Right)),
            other => panic!("unexpected event {other:?}"),
        }
        assert!(narrative_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn publishing_without_subscribers_is_harmless() {
        let bus = EventBus::with_capacity(1);
        bus.publish(narrative("nobody listens"));
        assert_eq!(bus.subscriber_count(Topic::Narrative), 0);
    }

    #[tokio::test]
    async fn clones_share_channels() {
        let bus = EventBus::new();
        let clone = bus.clone();
        let mut rx = bus.subscribe(Topic::Narrative);

        clone.publish(narrative("shared"));

        assert!(matches!(rx.recv().await.unwrap(), Event::Narrative(_)));
    }
}
