mod dirs;
mod settings;
mod validation;

pub use dirs::Directories;
pub use settings::{AppearanceConfig, Config, InputConfig, TipConfig};
pub use validation::warn_unknown_fields;
