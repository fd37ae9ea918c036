// Stateless services: settings persistence and suggestion lookup.

pub mod settings_engine;
pub mod suggestions;
