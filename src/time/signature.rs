#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Signature {
  num_beats: u8,  // numerator
  note_value: u8, // denominator
}

impl Signature {
  pub fn new(num_beats: u8, note_value: u8) -> Signature {
    Signature {
      num_beats,
      note_value,
    }
  }

  /// A signature with at least one beat and a power of two note value
  pub fn checked(num_beats: u8, note_value: u8) -> Option<Signature> {
    if num_beats > 0 && note_value.is_power_of_two() {
      Some(Signature::new(num_beats, note_value))
    } else {
      None
    }
  }

  /// Builds a signature from the power-of-two denominator exponent used
  /// by time signature meta events. None when the note value overflows.
  pub fn from_log2(num_beats: u8, note_value_log2: u8) -> Option<Signature> {
    1u8
      .checked_shl(u32::from(note_value_log2))
      .map(|note_value| Signature::new(num_beats, note_value))
  }

  pub fn get_num_beats(&self) -> u8 {
    self.num_beats
  }

  pub fn get_note_value(&self) -> u8 {
    self.note_value
  }

  /// Exponent of the note value as a power of two, rounded down
  pub fn get_note_value_log2(&self) -> u8 {
    (7 - self.note_value.max(1).leading_zeros()) as u8
  }
}

impl Default for Signature {
  fn default() -> Signature {
    Signature::new(4, 4)
  }
}

#[cfg(test)]
mod test {

  use super::Signature;

  #[test]
  pub fn signature_new() {
    let signature = Signature::new(3, 4);
    assert_eq!(signature.get_num_beats(), 3);
    assert_eq!(signature.get_note_value(), 4);
  }

  #[test]
  pub fn signature_from_log2() {
    assert_eq!(Signature::from_log2(6, 3), Some(Signature::new(6, 8)));
    assert_eq!(Signature::from_log2(4, 0), Some(Signature::new(4, 1)));
    assert_eq!(Signature::from_log2(4, 8), None);
  }

  #[test]
  pub fn signature_checked() {
    assert_eq!(Signature::checked(6, 8), Some(Signature::new(6, 8)));
    assert_eq!(Signature::checked(5, 12), None);
    assert_eq!(Signature::checked(4, 0), None);
    assert_eq!(Signature::checked(0, 4), None);
  }

  #[test]
  pub fn signature_note_value_log2() {
    assert_eq!(Signature::new(6, 8).get_note_value_log2(), 3);
    assert_eq!(Signature::new(4, 1).get_note_value_log2(), 0);
    assert_eq!(Signature::new(4, 0).get_note_value_log2(), 0);
    assert_eq!(Signature::new(5, 12).get_note_value_log2(), 3);
  }
}
