use std::fmt;

use crate::time::{Signature, TicksTime};
use crate::track::SignatureTrack;

/// Musical position as bars, beats and ticks into the beat.
/// Stored zero based, displayed one based for bars and beats.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BarsTime {
  bars: u64,
  beats: u16,
  ticks: u64,
}

fn ticks_per_beat(signature: &Signature, resolution: u16) -> u64 {
  let note_value = u64::from(signature.get_note_value().max(1));
  (u64::from(resolution) * 4 / note_value).max(1)
}

fn ticks_per_bar(signature: &Signature, resolution: u16) -> u64 {
  ticks_per_beat(signature, resolution) * u64::from(signature.get_num_beats().max(1))
}

fn bars_in_segment(length: u64, signature: &Signature, resolution: u16) -> u64 {
  let bar = ticks_per_bar(signature, resolution);
  length / bar + if length % bar == 0 { 0 } else { 1 }
}

impl BarsTime {
  pub fn new(bars: u64, beats: u16, ticks: u64) -> BarsTime {
    BarsTime { bars, beats, ticks }
  }

  /// Converts an absolute tick into bars walking the signature changes.
  /// Before the first change the signature is 4/4, and every change opens a new bar.
  pub fn from_ticks(ticks_time: TicksTime, signatures: &SignatureTrack, resolution: u16) -> BarsTime {
    let mut bars = 0u64;
    let mut segment_start = TicksTime::zero();
    let mut signature = Signature::default();

    for change in signatures.iter() {
      if change.tick() > ticks_time {
        break;
      }
      let length = u64::from(change.tick() - segment_start);
      bars += bars_in_segment(length, &signature, resolution);
      segment_start = change.tick();
      signature = *change.value();
    }

    let beat = ticks_per_beat(&signature, resolution);
    let bar = ticks_per_bar(&signature, resolution);
    let offset = u64::from(ticks_time - segment_start);
    let rest = offset % bar;

    BarsTime {
      bars: bars + offset / bar,
      beats: (rest / beat) as u16,
      ticks: rest % beat,
    }
  }

  pub fn to_ticks(&self, signatures: &SignatureTrack, resolution: u16) -> TicksTime {
    let mut bars_left = self.bars;
    let mut segment_start = TicksTime::zero();
    let mut signature = Signature::default();

    for change in signatures.iter() {
      let length = u64::from(change.tick() - segment_start);
      let segment_bars = bars_in_segment(length, &signature, resolution);
      if bars_left < segment_bars {
        break;
      }
      bars_left -= segment_bars;
      segment_start = change.tick();
      signature = *change.value();
    }

    let beat = ticks_per_beat(&signature, resolution);
    let bar = ticks_per_bar(&signature, resolution);
    let offset = bars_left
      .saturating_mul(bar)
      .saturating_add(u64::from(self.beats).saturating_mul(beat))
      .saturating_add(self.ticks);
    TicksTime::new(u64::from(segment_start).saturating_add(offset))
  }

  pub fn get_bars(&self) -> u64 {
    self.bars
  }

  pub fn get_beats(&self) -> u16 {
    self.beats
  }

  pub fn get_ticks(&self) -> u64 {
    self.ticks
  }
}

impl fmt::Display for BarsTime {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "{:03}:{:02}:{:03}",
      self.bars.saturating_add(1),
      u32::from(self.beats) + 1,
      self.ticks
    )
  }
}
