pub mod event;
pub use event::Event;
pub mod message;
pub use message::Message;
pub mod types;
