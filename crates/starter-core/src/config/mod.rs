//! Project configuration: root resolution and the env file

pub mod environment;
pub mod root;

pub use environment::{configure_environment, replace_or_append, HostIds};
pub use root::resolve_project_root;
