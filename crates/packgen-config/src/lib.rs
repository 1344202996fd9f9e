pub mod discovery;
pub mod error;
pub mod options;

mod helpers;

// Re-export main types
pub use error::*;
pub use options::*;

// Re-export discovery
pub use discovery::{Project, ProjectDiscovery, CONFIG_FILE_NAME, ENV_PREFIX};
