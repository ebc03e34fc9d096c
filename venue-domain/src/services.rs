pub mod assembler;
pub mod identity;
pub mod panel_extract;
pub mod pipeline;
pub mod recording_tasks;
pub mod record_filter;
pub mod resources;
pub mod room_merge;
pub mod schedule;
pub mod session_consolidation;

pub use assembler::*;
pub use identity::*;
pub use panel_extract::*;
pub use pipeline::*;
pub use recording_tasks::*;
pub use record_filter::*;
pub use resources::*;
pub use room_merge::*;
pub use schedule::*;
pub use session_consolidation::*;
