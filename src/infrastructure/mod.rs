//! Filesystem and environment helpers.

pub mod paths;

pub use paths::{default_config_file, expand_tilde};
