pub mod bump;
pub mod client;
pub mod error;
pub mod git_ops;
pub mod lifecycle;
pub mod manifest;
pub mod ui;
pub mod version;

pub use error::{PluginCtlError, Result};
