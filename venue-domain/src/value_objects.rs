// Domain value objects
pub mod clock_time;
pub mod event_category;
pub mod room_code;

pub use clock_time::*;
pub use event_category::*;
pub use room_code::*;
