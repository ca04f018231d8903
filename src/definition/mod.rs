//! Declarative command definitions (model + loader).

pub mod loader;
pub mod model;

pub use loader::{load_definition_file, load_definitions};
pub use model::{CommandGroup, Parameter, Subcommand};
