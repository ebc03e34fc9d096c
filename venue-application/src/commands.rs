pub mod normalize_commands;
pub mod task_commands;
