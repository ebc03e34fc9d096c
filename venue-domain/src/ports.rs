// Collaborator Port Traits (Interfaces)
// Define what the pipeline receives from and hands to the outside world

pub mod collaborators;

pub use collaborators::*;
