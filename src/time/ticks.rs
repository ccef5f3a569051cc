use std::{
  cmp::{min, Ordering},
  fmt,
  ops::{Add, Div, Sub},
};

/// Ticks per quarter note used by new projects
pub const DEFAULT_RESOLUTION: u16 = 480;

#[derive(Debug, Eq, Copy, Clone)]
pub struct TicksTime(u64);

impl TicksTime {
  pub fn new(ticks: u64) -> TicksTime {
    TicksTime(ticks)
  }

  pub fn zero() -> TicksTime {
    TicksTime(0)
  }

  pub fn get_ticks(&self) -> u64 {
    self.0
  }

  /// Ticks of one quarter note at the given resolution
  pub fn per_quarter(resolution: u16) -> TicksTime {
    TicksTime(u64::from(resolution))
  }

  /// Floors the time to the closest grid step at or before it.
  /// A zero grid leaves the time untouched.
  pub fn quantize(&self, grid: TicksTime) -> TicksTime {
    if grid.0 == 0 {
      *self
    } else {
      TicksTime(self.0 - self.0 % grid.0)
    }
  }
}

impl Ord for TicksTime {
  fn cmp(&self, other: &TicksTime) -> Ordering {
    self.0.cmp(&other.0)
  }
}

impl PartialOrd for TicksTime {
  fn partial_cmp(&self, other: &TicksTime) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl PartialEq for TicksTime {
  fn eq(&self, other: &TicksTime) -> bool {
    self.0 == other.0
  }
}

impl Add for TicksTime {
  type Output = TicksTime;
  fn add(self, rhs: TicksTime) -> Self {
    TicksTime::new(self.0 + rhs.0)
  }
}

impl Sub for TicksTime {
  type Output = TicksTime;
  fn sub(self, rhs: TicksTime) -> Self {
    TicksTime::new(self.0 - min(self.0, rhs.0))
  }
}

impl Div<u64> for TicksTime {
  type Output = TicksTime;
  fn div(self, rhs: u64) -> Self {
    TicksTime::new(self.0 / rhs)
  }
}

impl From<TicksTime> for u64 {
  fn from(item: TicksTime) -> Self {
    item.0
  }
}

impl fmt::Display for TicksTime {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
