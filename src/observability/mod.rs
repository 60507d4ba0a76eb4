//! Structured logging via `tracing`.
//!
//! Every store dispatch, handled event, and catalog load runs inside a
//! `tracing` span. This module installs the subscriber that prints them.
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! Output goes to stderr so it never mixes with the rendered page on stdout.
//!
//! # Usage
//!
//! ```rust
//! use marquee::observability::init_tracing;
//! use marquee::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("session starting");
//! ```

mod init;

pub use init::{filter_directive, init_tracing};
