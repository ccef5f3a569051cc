pub mod config;
pub mod logging;
pub mod midi;
pub mod time;
pub mod track;
pub mod workspace;

pub use crate::workspace::{TrackDescriptor, Workspace, WorkspaceError};
