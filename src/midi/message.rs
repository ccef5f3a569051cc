use crate::midi::types::{U4, U7};
use crate::time::Tempo;

/// Meta event kind carrying the track name
pub const META_TRACK_NAME: u8 = 0x03;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Message {
  NoteOn {
    channel: U4,
    key: U7,
    velocity: U7,
  },

  NoteOff {
    channel: U4,
    key: U7,
    velocity: U7,
  },

  Tempo(Tempo),

  TimeSignature {
    numerator: u8,
    note_value_log2: u8,
  },

  MetaOther {
    kind: u8,
    data: Vec<u8>,
  },

  ChannelOther(Vec<u8>),
}

impl Message {
  /// A note on with a non zero velocity
  pub fn is_onset(&self) -> bool {
    match self {
      Message::NoteOn { velocity, .. } => *velocity > 0,
      _ => false,
    }
  }

  /// A note off, or a note on with zero velocity
  pub fn is_release(&self) -> bool {
    match self {
      Message::NoteOff { .. } => true,
      Message::NoteOn { velocity, .. } => *velocity == 0,
      _ => false,
    }
  }

  pub fn is_meta(&self) -> bool {
    match self {
      Message::Tempo(_) | Message::TimeSignature { .. } | Message::MetaOther { .. } => true,
      _ => false,
    }
  }

  pub fn channel(&self) -> Option<U4> {
    match self {
      Message::NoteOn { channel, .. } | Message::NoteOff { channel, .. } => Some(*channel),
      _ => None,
    }
  }

  pub fn key(&self) -> Option<U7> {
    match self {
      Message::NoteOn { key, .. } | Message::NoteOff { key, .. } => Some(*key),
      _ => None,
    }
  }

  pub fn velocity(&self) -> Option<U7> {
    match self {
      Message::NoteOn { velocity, .. } | Message::NoteOff { velocity, .. } => Some(*velocity),
      _ => None,
    }
  }

  pub fn track_name(&self) -> Option<String> {
    match self {
      Message::MetaOther { kind, data } if *kind == META_TRACK_NAME => {
        Some(String::from_utf8_lossy(data).into_owned())
      }
      _ => None,
    }
  }

  /// Ordering rank among messages sharing a tick.
  /// Onsets go last so that a release and an onset on the same tick close the previous note first.
  pub fn rank(&self) -> u8 {
    if self.is_onset() {
      1
    } else {
      0
    }
  }
}
