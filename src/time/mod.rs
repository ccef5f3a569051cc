pub mod bars;
pub mod signature;
pub mod tempo;
pub mod ticks;

pub use self::bars::BarsTime;
pub use self::signature::Signature;
pub use self::tempo::Tempo;
pub use self::ticks::TicksTime;
