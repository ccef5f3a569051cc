pub mod changes;
pub mod notes;
pub mod sequence;

pub use self::changes::{Change, ChangeTrack, SignatureTrack, TempoTrack};
pub use self::notes::{pair_notes, NoteInterval};
pub use self::sequence::EventSequence;
