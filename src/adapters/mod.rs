// Adapters layer: concrete sinks, prompts and history stores behind the domain ports.

pub mod history;
pub mod prompt;
pub mod sinks;
