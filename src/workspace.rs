use failure::Fail;
use log::{debug, warn};

use crate::config::{Editor, WorkspaceConfig};
use crate::midi::{Event, Message};
use crate::time::{BarsTime, Signature, TicksTime};
use crate::track::{pair_notes, Change, EventSequence, NoteInterval, SignatureTrack, TempoTrack};

pub type TrackIndex = usize;

#[derive(Debug, Fail, PartialEq, Eq, Clone)]
pub enum WorkspaceError {
  #[fail(display = "Track {} out of range, there are {} tracks", track, count)]
  TrackOutOfRange { track: TrackIndex, count: usize },

  #[fail(
    display = "Event {} out of range in track {}, there are {} events",
    index, track, count
  )]
  EventOutOfRange {
    track: TrackIndex,
    index: usize,
    count: usize,
  },
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TrackDescriptor {
  pub index: TrackIndex,
  pub label: String,
}

/// The tracks of a song, each one an event sequence with its own cursor.
///
/// Tempo and time signature tracks are derived from the events on every call.
/// Edits made on a derived change track stay apart from the events until they
/// are written back with `apply_tempo_track` or `apply_time_signature_track`.
#[derive(Debug, Clone)]
pub struct Workspace {
  resolution: u16,
  tracks: Vec<EventSequence>,
}

impl Default for Workspace {
  fn default() -> Self {
    Workspace::with_config(&WorkspaceConfig::default())
  }
}

impl Workspace {
  /// A new two tracks project at 480 ticks per quarter, 4/4 and 120 bpm
  pub fn new() -> Workspace {
    Workspace::default()
  }

  /// A new project. The first track holds the initial time signature and tempo.
  /// A signature that can not be written as an event falls back to 4/4.
  pub fn with_config(config: &WorkspaceConfig) -> Workspace {
    let signature = config.signature().unwrap_or_else(|| {
      warn!(
        "Invalid time signature {}/{}, using 4/4",
        config.signature_num_beats, config.signature_note_value
      );
      Signature::default()
    });

    let mut conductor = EventSequence::new();
    conductor.insert(Event::new(
      TicksTime::zero(),
      Message::TimeSignature {
        numerator: signature.get_num_beats(),
        note_value_log2: signature.get_note_value_log2(),
      },
    ));
    conductor.insert(Event::new(TicksTime::zero(), Message::Tempo(config.tempo())));

    let mut tracks = vec![conductor];
    tracks.resize_with(config.tracks.max(1), EventSequence::new);

    debug!(
      "New workspace with {} tracks at {} ticks per quarter",
      tracks.len(),
      config.resolution
    );

    Workspace {
      resolution: config.resolution,
      tracks,
    }
  }

  /// Builds a workspace from the tracks produced by a file loader
  pub fn from_tracks(resolution: u16, tracks: Vec<Vec<Event>>) -> Workspace {
    let mut workspace = Workspace {
      resolution,
      tracks: Vec::new(),
    };
    workspace.replace_tracks(resolution, tracks);
    workspace
  }

  /// Replaces every track, as when loading another file
  pub fn replace_tracks(&mut self, resolution: u16, tracks: Vec<Vec<Event>>) {
    debug!(
      "Loading {} tracks at {} ticks per quarter",
      tracks.len(),
      resolution
    );
    self.resolution = resolution;
    self.tracks = tracks.into_iter().map(EventSequence::from_events).collect();
    self.reset_cursors();
  }

  pub fn resolution(&self) -> u16 {
    self.resolution
  }

  pub fn track_count(&self) -> usize {
    self.tracks.len()
  }

  pub fn add_track(&mut self) -> TrackIndex {
    self.tracks.push(EventSequence::new());
    debug!("Added track {}", self.tracks.len() - 1);
    self.tracks.len() - 1
  }

  pub fn track(&self, track: TrackIndex) -> Result<&EventSequence, WorkspaceError> {
    let count = self.tracks.len();
    self
      .tracks
      .get(track)
      .ok_or(WorkspaceError::TrackOutOfRange { track, count })
  }

  fn track_mut(&mut self, track: TrackIndex) -> Result<&mut EventSequence, WorkspaceError> {
    let count = self.tracks.len();
    self
      .tracks
      .get_mut(track)
      .ok_or(WorkspaceError::TrackOutOfRange { track, count })
  }

  pub fn event_count(&self, track: TrackIndex) -> Result<usize, WorkspaceError> {
    self.track(track).map(EventSequence::event_count)
  }

  pub fn event_at(&self, track: TrackIndex, index: usize) -> Result<&Event, WorkspaceError> {
    let sequence = self.track(track)?;
    sequence.event_at(index).ok_or(WorkspaceError::EventOutOfRange {
      track,
      index,
      count: sequence.event_count(),
    })
  }

  pub fn append_event(
    &mut self,
    track: TrackIndex,
    tick: TicksTime,
    message: Message,
  ) -> Result<(), WorkspaceError> {
    self.track_mut(track)?.insert(Event::new(tick, message));
    Ok(())
  }

  /// Removes one event equal to the message at the tick.
  /// Ok(false) when there was no such event.
  pub fn delete_event(
    &mut self,
    track: TrackIndex,
    tick: TicksTime,
    message: &Message,
  ) -> Result<bool, WorkspaceError> {
    Ok(self.track_mut(track)?.remove(tick, message))
  }

  pub fn delete_event_matching<P>(
    &mut self,
    track: TrackIndex,
    tick: TicksTime,
    predicate: P,
  ) -> Result<bool, WorkspaceError>
  where
    P: FnMut(&Event) -> bool,
  {
    Ok(self.track_mut(track)?.remove_matching(tick, predicate))
  }

  pub fn tempo_track(&self, track: TrackIndex) -> Result<TempoTrack, WorkspaceError> {
    let changes = self
      .track(track)?
      .iter()
      .filter_map(|event| match event.message {
        Message::Tempo(tempo) => Some(Change::new(event.tick, tempo)),
        _ => None,
      })
      .collect();
    Ok(TempoTrack::from_sorted(changes))
  }

  pub fn time_signature_track(&self, track: TrackIndex) -> Result<SignatureTrack, WorkspaceError> {
    let changes = self
      .track(track)?
      .iter()
      .filter_map(|event| match event.message {
        Message::TimeSignature {
          numerator,
          note_value_log2,
        } => {
          let signature = Signature::from_log2(numerator, note_value_log2);
          if signature.is_none() {
            warn!(
              "Skipping time signature {}/2^{} at tick {} of track {}",
              numerator, note_value_log2, event.tick, track
            );
          }
          signature.map(|signature| Change::new(event.tick, signature))
        }
        _ => None,
      })
      .collect();
    Ok(SignatureTrack::from_sorted(changes))
  }

  /// Replaces the tempo events of a track with the changes of a tempo track
  pub fn apply_tempo_track(
    &mut self,
    track: TrackIndex,
    tempos: &TempoTrack,
  ) -> Result<(), WorkspaceError> {
    let sequence = self.track_mut(track)?;
    let events = sequence
      .iter()
      .filter(|event| match event.message {
        Message::Tempo(_) => false,
        _ => true,
      })
      .cloned()
      .chain(
        tempos
          .iter()
          .map(|change| Event::new(change.tick(), Message::Tempo(*change.value()))),
      )
      .collect();
    sequence.replace(events);
    debug!("Applied {} tempo changes to track {}", tempos.len(), track);
    Ok(())
  }

  /// Replaces the time signature events of a track with the changes of a signature track
  pub fn apply_time_signature_track(
    &mut self,
    track: TrackIndex,
    signatures: &SignatureTrack,
  ) -> Result<(), WorkspaceError> {
    let sequence = self.track_mut(track)?;
    let events = sequence
      .iter()
      .filter(|event| match event.message {
        Message::TimeSignature { .. } => false,
        _ => true,
      })
      .cloned()
      .chain(signatures.iter().map(|change| {
        let signature = change.value();
        Event::new(
          change.tick(),
          Message::TimeSignature {
            numerator: signature.get_num_beats(),
            note_value_log2: signature.get_note_value_log2(),
          },
        )
      }))
      .collect();
    sequence.replace(events);
    debug!(
      "Applied {} time signature changes to track {}",
      signatures.len(),
      track
    );
    Ok(())
  }

  pub fn pair_notes(&self, track: TrackIndex) -> Result<Vec<NoteInterval>, WorkspaceError> {
    self.track(track).map(|sequence| pair_notes(sequence))
  }

  pub fn track_descriptors(&self) -> Vec<TrackDescriptor> {
    self
      .tracks
      .iter()
      .enumerate()
      .map(|(index, sequence)| {
        let name = sequence.iter().find_map(|event| event.message.track_name());
        let label = match name {
          Some(name) => format!("Track {}: {}", index, name),
          None => format!("Track {}", index),
        };
        TrackDescriptor { index, label }
      })
      .collect()
  }

  pub fn reset_cursors(&mut self) {
    for sequence in self.tracks.iter_mut() {
      sequence.reset_cursor();
    }
  }

  /// Position of a tick in bars, following the time signatures of the first track
  pub fn bars_time(&self, tick: TicksTime) -> Result<BarsTime, WorkspaceError> {
    let signatures = self.time_signature_track(0)?;
    Ok(BarsTime::from_ticks(tick, &signatures, self.resolution))
  }

  /// Floors a tick to a grid of `snap` cells per quarter note, 0 disables snapping
  pub fn snap(&self, tick: TicksTime, snap: u16) -> TicksTime {
    if snap == 0 {
      tick
    } else {
      tick.quantize(TicksTime::per_quarter(self.resolution) / u64::from(snap))
    }
  }

  /// Floors a tick to the editor grid
  pub fn snap_with(&self, tick: TicksTime, editor: &Editor) -> TicksTime {
    self.snap(tick, editor.snap)
  }
}
