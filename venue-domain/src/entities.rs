// Domain entities

pub mod event;
pub mod panel;
pub mod raw_event;
pub mod recording_task;
pub mod runtime_config;

pub use event::*;
pub use panel::*;
pub use raw_event::*;
pub use recording_task::*;
pub use runtime_config::*;
