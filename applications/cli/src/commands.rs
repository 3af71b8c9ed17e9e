/// Command-line interface and command execution
use crate::config::{CliConfig, OutputFormat};
use crate::error::Result;
use crate::manifest::PlaylistManifest;
use crate::render;
use clap::{Parser, Subcommand};
use mixtape_core::{Playlist, Track};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "mixtape")]
#[command(about = "Inspect and rearrange in-memory playlists", long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults to ./mixtape.toml when present)
    #[arg(short, long, global = true, env = "MIXTAPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print JSON regardless of the configured output format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show playlist summary
    Show {
        /// Playlist manifest (TOML)
        manifest: PathBuf,
    },
    /// List songs in playlist order
    Songs {
        manifest: PathBuf,
        /// Sort by title before listing
        #[arg(long)]
        sorted: bool,
    },
    /// Find songs whose title or artist contains a keyword
    Search { manifest: PathBuf, keyword: String },
    /// List comments, optionally for a single user
    Comments {
        manifest: PathBuf,
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Insert a song and print the resulting order
    Insert {
        manifest: PathBuf,
        #[arg(long)]
        title: String,
        #[arg(long)]
        artist: String,
        /// Duration in seconds
        #[arg(long)]
        duration: u64,
        /// Target position; clamped to the playlist bounds
        #[arg(long, allow_hyphen_values = true, default_value_t = i64::MAX)]
        at: i64,
    },
    /// Like the playlist as a user and print the like count
    Like { manifest: PathBuf, user: String },
}

impl Command {
    pub fn manifest(&self) -> &Path {
        match self {
            Command::Show { manifest }
            | Command::Songs { manifest, .. }
            | Command::Search { manifest, .. }
            | Command::Comments { manifest, .. }
            | Command::Insert { manifest, .. }
            | Command::Like { manifest, .. } => manifest,
        }
    }
}

/// Load the manifest named by `command`, apply the command and render the
/// result
pub fn execute(command: &Command, config: &CliConfig, format: OutputFormat) -> Result<String> {
    let manifest = PlaylistManifest::load(command.manifest())?;
    let mut playlist = manifest.build(config.id_generator())?;
    if config.output.sort_on_load {
        playlist.sort_songs();
    }

    run(command, &mut playlist, format)
}

/// Apply `command` to an already built playlist
pub fn run(command: &Command, playlist: &mut Playlist<Track>, format: OutputFormat) -> Result<String> {
    match command {
        Command::Show { .. } => render::summary(&playlist.summary(), format),
        Command::Songs { sorted, .. } => {
            if *sorted {
                playlist.sort_songs();
            }
            render::songs(playlist.songs(), format)
        }
        Command::Search { keyword, .. } => {
            let found = playlist.search(keyword.as_str());
            tracing::info!("'{}' matched {} of {} songs", keyword, found.len(), playlist.len());
            render::songs(&found, format)
        }
        Command::Comments { user, .. } => {
            let comments = match user {
                Some(user) => playlist.comments_by(user).unwrap_or_default(),
                None => playlist.comments().iter().collect(),
            };
            render::comments(&comments, format)
        }
        Command::Insert {
            title,
            artist,
            duration,
            at,
            ..
        } => {
            playlist.insert_song(Arc::new(Track::new(title, artist, *duration)), *at);
            render::songs(playlist.songs(), format)
        }
        Command::Like { user, .. } => {
            let added = playlist.like(user.as_str())?;
            if !added {
                tracing::info!("'{}' already likes '{}'", user, playlist.name());
            }
            let summary = playlist.summary();
            render::summary(&summary, format)
        }
    }
}
