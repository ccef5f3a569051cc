use std::cmp::Ordering;

use crate::midi::message::Message;
use crate::time::TicksTime;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Event {
  pub tick: TicksTime,
  pub message: Message,
}

impl Event {
  pub fn new(tick: TicksTime, message: Message) -> Event {
    Event { tick, message }
  }

  /// Track order: by tick, then releases and meta events before onsets
  pub fn order(&self, other: &Event) -> Ordering {
    self
      .tick
      .cmp(&other.tick)
      .then_with(|| self.message.rank().cmp(&other.message.rank()))
  }
}
