use crate::time::{Signature, Tempo, TicksTime};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Change<T> {
  tick: TicksTime,
  value: T,
}

impl<T> Change<T> {
  pub fn new(tick: TicksTime, value: T) -> Change<T> {
    Change { tick, value }
  }

  pub fn tick(&self) -> TicksTime {
    self.tick
  }

  pub fn value(&self) -> &T {
    &self.value
  }
}

/// Sparse timeline of values holding until the next change.
///
/// Changes are kept sorted by tick with a stable sort, so changes sharing a
/// tick stay in the order they were given and the last one wins on lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeTrack<T> {
  changes: Vec<Change<T>>,
}

pub type TempoTrack = ChangeTrack<Tempo>;
pub type SignatureTrack = ChangeTrack<Signature>;

impl<T> Default for ChangeTrack<T> {
  fn default() -> Self {
    ChangeTrack {
      changes: Vec::new(),
    }
  }
}

impl<T> ChangeTrack<T> {
  pub fn new() -> ChangeTrack<T> {
    ChangeTrack::default()
  }

  /// The changes must already be sorted by tick
  pub fn from_sorted(changes: Vec<Change<T>>) -> ChangeTrack<T> {
    debug_assert!(changes.windows(2).all(|pair| pair[0].tick <= pair[1].tick));
    ChangeTrack { changes }
  }

  pub fn from_unsorted(mut changes: Vec<Change<T>>) -> ChangeTrack<T> {
    changes.sort_by_key(|change| change.tick);
    ChangeTrack { changes }
  }

  pub fn append(&mut self, tick: TicksTime, value: T) {
    self.changes.push(Change::new(tick, value));
    self.changes.sort_by_key(|change| change.tick);
  }

  /// Value of the last change at or before `tick`
  pub fn value_at(&self, tick: TicksTime) -> Option<&T> {
    self
      .changes
      .iter()
      .take_while(|change| change.tick <= tick)
      .last()
      .map(|change| &change.value)
  }

  pub fn iter(&self) -> std::slice::Iter<Change<T>> {
    self.changes.iter()
  }

  pub fn len(&self) -> usize {
    self.changes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.changes.is_empty()
  }
}

impl<T: PartialEq> ChangeTrack<T> {
  /// Removes every change equal to the given one, returning how many went away
  pub fn delete(&mut self, deleted: &Change<T>) -> usize {
    let before = self.changes.len();
    self.changes.retain(|change| change != deleted);
    before - self.changes.len()
  }
}

impl<'a, T> IntoIterator for &'a ChangeTrack<T> {
  type Item = &'a Change<T>;
  type IntoIter = std::slice::Iter<'a, Change<T>>;

  fn into_iter(self) -> Self::IntoIter {
    self.changes.iter()
  }
}
