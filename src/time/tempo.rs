const MICROS_PER_MINUTE: u32 = 60_000_000;

/// Tempo in beats (quarter notes) per minute
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Tempo(u16);

impl Tempo {
  pub fn new(value: u16) -> Tempo {
    Tempo(value)
  }

  pub fn get_value(&self) -> u16 {
    self.0
  }

  /// Builds the tempo from the microseconds per quarter note carried by
  /// a standard MIDI file tempo meta event. Fractional bpm are truncated.
  pub fn from_micros_per_quarter(micros: u32) -> Tempo {
    let bpm = MICROS_PER_MINUTE.checked_div(micros).unwrap_or(0);
    Tempo(bpm.min(u32::from(u16::max_value())) as u16)
  }

  pub fn micros_per_quarter(&self) -> u32 {
    MICROS_PER_MINUTE.checked_div(u32::from(self.0)).unwrap_or(0)
  }
}

#[cfg(test)]
mod test {

  use super::Tempo;

  #[test]
  pub fn tempo_new() {
    let tempo = Tempo::new(120);
    assert_eq!(tempo.get_value(), 120);
  }

  #[test]
  pub fn from_micros_per_quarter() {
    assert_eq!(Tempo::from_micros_per_quarter(500_000), Tempo::new(120));
    assert_eq!(Tempo::from_micros_per_quarter(0), Tempo::new(0));
  }

  #[test]
  pub fn micros_per_quarter() {
    assert_eq!(Tempo::new(120).micros_per_quarter(), 500_000);
    assert_eq!(Tempo::new(0).micros_per_quarter(), 0);
  }
}
