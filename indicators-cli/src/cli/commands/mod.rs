pub mod inspect;
pub mod seed;
pub mod template;

pub use inspect::InspectCommands;
pub use seed::SeedCommands;
pub use template::TemplateCommands;
