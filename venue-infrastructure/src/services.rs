pub mod metrics_export;

pub use metrics_export::*;
