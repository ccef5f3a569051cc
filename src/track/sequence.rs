use std::cmp::Ordering;

use log::trace;

use crate::midi::{Event, Message};
use crate::time::TicksTime;

/// Events of one track kept in track order.
///
/// The cursor is an index hint next to the last edit. Inserts and removals
/// scan from it towards their target, so edits clustered in time stay cheap
/// no matter how long the track is.
#[derive(Debug, Clone, Default)]
pub struct EventSequence {
  events: Vec<Event>,
  cursor: usize,
}

impl EventSequence {
  pub fn new() -> EventSequence {
    EventSequence::default()
  }

  /// Builds a sequence from loader output in any order.
  /// Events comparing equal keep their relative order.
  pub fn from_events(mut events: Vec<Event>) -> EventSequence {
    events.sort_by(Event::order);
    EventSequence { events, cursor: 0 }
  }

  /// Replaces every event and resets the cursor
  pub fn replace(&mut self, events: Vec<Event>) {
    *self = EventSequence::from_events(events);
  }

  pub fn event_count(&self) -> usize {
    self.events.len()
  }

  pub fn is_empty(&self) -> bool {
    self.events.is_empty()
  }

  pub fn event_at(&self, index: usize) -> Option<&Event> {
    self.events.get(index)
  }

  pub fn iter(&self) -> std::slice::Iter<Event> {
    self.events.iter()
  }

  pub fn as_slice(&self) -> &[Event] {
    &self.events
  }

  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn reset_cursor(&mut self) {
    self.cursor = 0;
  }

  /// Inserts the event after every event ordering before or equal to it.
  pub fn insert(&mut self, event: Event) {
    let index = self.seek(|prev| prev.order(&event) != Ordering::Greater);
    trace!(
      "Inserting event at tick {} [{} -> {}]",
      event.tick,
      self.cursor,
      index
    );
    self.events.insert(index, event);
    self.cursor = index;
  }

  /// Removes the first event at `tick` accepted by the predicate.
  /// Returns false when nothing matched.
  pub fn remove_matching<P>(&mut self, tick: TicksTime, mut predicate: P) -> bool
  where
    P: FnMut(&Event) -> bool,
  {
    let start = self.seek(|prev| prev.tick < tick);
    let found = self.events[start..]
      .iter()
      .take_while(|event| event.tick == tick)
      .position(|event| predicate(event))
      .map(|offset| start + offset);

    match found {
      Some(index) => {
        trace!("Removing event at tick {} [{}]", tick, index);
        self.events.remove(index);
        self.cursor = index.min(self.events.len().saturating_sub(1));
        true
      }
      None => {
        self.cursor = start.min(self.events.len().saturating_sub(1));
        false
      }
    }
  }

  /// Removes the first event at `tick` equal to the message
  pub fn remove(&mut self, tick: TicksTime, message: &Message) -> bool {
    self.remove_matching(tick, |event| event.message == *message)
  }

  /// Partition point of `before`, which must hold for a prefix of the events.
  /// Scans forward or backward from the cursor depending on which side of it the point is.
  fn seek<P>(&self, before: P) -> usize
  where
    P: Fn(&Event) -> bool,
  {
    let len = self.events.len();
    if len == 0 {
      return 0;
    }

    let mut index = self.cursor.min(len - 1);
    if before(&self.events[index]) {
      index += 1;
      while index < len && before(&self.events[index]) {
        index += 1;
      }
    } else {
      while index > 0 && !before(&self.events[index - 1]) {
        index -= 1;
      }
    }
    index
  }
}

impl<'a> IntoIterator for &'a EventSequence {
  type Item = &'a Event;
  type IntoIter = std::slice::Iter<'a, Event>;

  fn into_iter(self) -> Self::IntoIter {
    self.events.iter()
  }
}
