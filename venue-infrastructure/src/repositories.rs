pub mod json_files;

pub use json_files::*;
