//! Mixtape CLI Library
//!
//! Loads playlist manifests into `mixtape-core` playlists and renders the
//! result of playlist operations.
//!
//! This library exposes the core components for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod manifest;
pub mod render;

// Re-export commonly used types for convenience
pub use commands::{execute, run, Cli, Command};
pub use config::{CliConfig, IdGeneratorKind, OutputFormat};
pub use error::{CliError, Result};
pub use manifest::{CommentEntry, PlaylistManifest};
