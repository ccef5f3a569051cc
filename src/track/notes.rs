use std::collections::HashMap;

use crate::midi::types::U7;
use crate::midi::{Event, Message};
use crate::time::TicksTime;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NoteInterval {
  pub key: U7,
  /// Velocity of the release closing the note
  pub velocity: U7,
  pub onset_velocity: U7,
  pub start: TicksTime,
  pub end: TicksTime,
}

impl NoteInterval {
  pub fn length(&self) -> TicksTime {
    self.end - self.start
  }
}

/// Pairs onsets with releases into notes, in the order they are closed.
///
/// Only one onset per key can be open: a repeated onset replaces the pending one.
/// Releases without an open onset and onsets never released are dropped.
pub fn pair_notes<'a, I>(events: I) -> Vec<NoteInterval>
where
  I: IntoIterator<Item = &'a Event>,
{
  let mut open: HashMap<U7, (TicksTime, U7)> = HashMap::new();
  let mut notes = Vec::new();

  for event in events {
    match event.message {
      Message::NoteOn { key, velocity, .. } if velocity > 0 => {
        open.insert(key, (event.tick, velocity));
      }
      Message::NoteOn { key, velocity, .. } | Message::NoteOff { key, velocity, .. } => {
        if let Some((start, onset_velocity)) = open.remove(&key) {
          notes.push(NoteInterval {
            key,
            velocity,
            onset_velocity,
            start,
            end: event.tick,
          });
        }
      }
      Message::Tempo(_)
      | Message::TimeSignature { .. }
      | Message::MetaOther { .. }
      | Message::ChannelOther(_) => {}
    }
  }

  notes
}

#[cfg(test)]
mod test {

  use super::{pair_notes, NoteInterval};
  use crate::midi::{Event, Message};
  use crate::time::{Tempo, TicksTime};
  use crate::track::EventSequence;

  fn on(tick: u64, key: u8, velocity: u8) -> Event {
    Event::new(
      TicksTime::new(tick),
      Message::NoteOn {
        channel: 0,
        key,
        velocity,
      },
    )
  }

  fn off(tick: u64, key: u8, velocity: u8) -> Event {
    Event::new(
      TicksTime::new(tick),
      Message::NoteOff {
        channel: 0,
        key,
        velocity,
      },
    )
  }

  fn note(key: u8, velocity: u8, onset_velocity: u8, start: u64, end: u64) -> NoteInterval {
    NoteInterval {
      key,
      velocity,
      onset_velocity,
      start: TicksTime::new(start),
      end: TicksTime::new(end),
    }
  }

  #[test]
  pub fn basic_pair() {
    let events = vec![on(0, 60, 100), off(480, 60, 0)];
    assert_eq!(pair_notes(&events), vec![note(60, 0, 100, 0, 480)]);
  }

  #[test]
  pub fn zero_velocity_onset_is_release() {
    let events = vec![on(0, 60, 100), on(240, 60, 0)];
    assert_eq!(pair_notes(&events), vec![note(60, 0, 100, 0, 240)]);
  }

  #[test]
  pub fn unmatched_release() {
    let events = vec![off(100, 60, 0)];
    assert!(pair_notes(&events).is_empty());
  }

  #[test]
  pub fn dangling_onset() {
    let events = vec![on(0, 60, 100)];
    assert!(pair_notes(&events).is_empty());
  }

  #[test]
  pub fn repeated_onset_replaces_pending() {
    let events = vec![on(0, 60, 100), on(120, 60, 80), off(480, 60, 64), off(600, 60, 64)];
    assert_eq!(pair_notes(&events), vec![note(60, 64, 80, 120, 480)]);
  }

  #[test]
  /// Notes are emitted in release order and overlap freely across keys
  pub fn release_order_across_keys() {
    let events = vec![
      on(0, 60, 100),
      on(10, 64, 90),
      Event::new(TicksTime::new(20), Message::Tempo(Tempo::new(100))),
      off(100, 64, 1),
      off(200, 60, 2),
    ];
    assert_eq!(
      pair_notes(&events),
      vec![note(64, 1, 90, 10, 100), note(60, 2, 100, 0, 200)]
    );
  }

  #[test]
  /// A release and an onset of the same key on the same tick close and reopen the note
  pub fn back_to_back_notes() {
    let mut sequence = EventSequence::new();
    sequence.insert(on(0, 60, 100));
    sequence.insert(on(480, 60, 100));
    sequence.insert(off(480, 60, 0));
    sequence.insert(off(960, 60, 0));
    assert_eq!(
      pair_notes(&sequence),
      vec![note(60, 0, 100, 0, 480), note(60, 0, 100, 480, 960)]
    );
  }

  #[test]
  pub fn pairing_is_idempotent() {
    let sequence = EventSequence::from_events(vec![
      on(0, 60, 100),
      on(0, 67, 100),
      off(240, 67, 0),
      off(480, 60, 0),
    ]);
    let first = pair_notes(&sequence);
    let second = pair_notes(&sequence);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
  }

  #[test]
  pub fn length() {
    assert_eq!(note(60, 0, 100, 120, 600).length(), TicksTime::new(480));
  }
}
