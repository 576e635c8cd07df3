pub mod loader;
pub mod types;

pub use loader::{get_lexicon_config, list_available_lexicons, resolve_code};
pub use types::*;
